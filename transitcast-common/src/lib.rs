//! Shared infrastructure for the transitcast workspace
//!
//! Holds the common error type and the layered configuration-file
//! resolution used by the pipeline binary.

pub mod config;
pub mod error;

pub use error::{Error, Result};
