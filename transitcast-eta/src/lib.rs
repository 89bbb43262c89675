//! transitcast-eta library interface
//!
//! Multi-leg shipment transit-time estimation: resolves factory-side and
//! port-side leg durations against a routing oracle, composes them under
//! per-country policy, and folds the results into workforce-weighted
//! per-brand reports.

pub mod aggregate;
pub mod config;
pub mod pipeline;
pub mod policy;
pub mod report;
pub mod resolver;
pub mod services;
pub mod types;

pub use aggregate::aggregate;
pub use config::{Cli, EtaConfig};
pub use pipeline::Pipeline;
pub use report::{build_report, export_csv, print_summaries, BrandReport};
pub use resolver::DistanceResolver;
pub use services::{DirectionsClient, OracleError, RouteOracle};
pub use types::{LegQuery, PortHubEntry, PortHubTable, Route, TerrestrialLeg, TotalTimeRecord};
