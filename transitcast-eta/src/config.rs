//! Pipeline configuration
//!
//! Values resolve CLI → environment → TOML file → default; the CLI and
//! environment tiers come from clap, the TOML tier from
//! transitcast-common.

use clap::Parser;
use std::path::PathBuf;
use transitcast_common::config::load_config_tier;
use transitcast_common::{Error, Result};

pub const DEFAULT_OUTPUT: &str = "estimated_delivery_times_unified.csv";
pub const DEFAULT_WORKERS: usize = 8;

/// Estimate factory-to-hub delivery times per brand
#[derive(Debug, Parser)]
#[command(name = "transitcast-eta", version)]
pub struct Cli {
    /// Config file path (default: platform config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Routing-oracle API key
    #[arg(long, env = "TRANSITCAST_API_KEY")]
    pub api_key: Option<String>,

    /// Factory table: .xlsx/.csv path or HTTP(S) URL
    #[arg(long, env = "TRANSITCAST_INPUT")]
    pub input: Option<String>,

    /// Output CSV path
    #[arg(long, env = "TRANSITCAST_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Concurrent oracle workers
    #[arg(long, env = "TRANSITCAST_WORKERS")]
    pub workers: Option<usize>,
}

/// Fully resolved pipeline configuration
#[derive(Debug, Clone)]
pub struct EtaConfig {
    pub api_key: String,
    pub input: String,
    pub output: PathBuf,
    pub workers: usize,
}

impl EtaConfig {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = load_config_tier(cli.config.as_deref())?;

        let api_key = cli
            .api_key
            .clone()
            .or(file.api_key)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                Error::Config(
                    "Routing-oracle API key not configured. Set --api-key, \
                     TRANSITCAST_API_KEY, or api_key in the config file."
                        .to_string(),
                )
            })?;

        let input = cli.input.clone().or(file.input).ok_or_else(|| {
            Error::Config(
                "No factory table configured. Set --input, TRANSITCAST_INPUT, \
                 or input in the config file."
                    .to_string(),
            )
        })?;

        let output = cli
            .output
            .clone()
            .or(file.output.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        let workers = cli
            .workers
            .or(file.workers)
            .unwrap_or(DEFAULT_WORKERS)
            .max(1);

        Ok(Self {
            api_key,
            input,
            output,
            workers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("transitcast-eta").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "api_key = \"file-key\"\ninput = \"file.xlsx\"\nworkers = 2"
        )
        .unwrap();
        let config_arg = file.path().to_str().unwrap().to_string();

        let cli = cli(&[
            "--config",
            &config_arg,
            "--api-key",
            "cli-key",
            "--workers",
            "16",
        ]);
        let config = EtaConfig::resolve(&cli).unwrap();

        assert_eq!(config.api_key, "cli-key");
        assert_eq!(config.input, "file.xlsx");
        assert_eq!(config.workers, 16);
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_missing_api_key_is_a_config_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config_arg = file.path().to_str().unwrap().to_string();

        let cli = cli(&["--config", &config_arg, "--input", "factories.xlsx"]);
        let result = EtaConfig::resolve(&cli);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_blank_api_key_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config_arg = file.path().to_str().unwrap().to_string();

        let cli = cli(&[
            "--config",
            &config_arg,
            "--api-key",
            "  ",
            "--input",
            "factories.xlsx",
        ]);
        assert!(matches!(EtaConfig::resolve(&cli), Err(Error::Config(_))));
    }

    #[test]
    fn test_worker_count_floor_is_one() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config_arg = file.path().to_str().unwrap().to_string();

        let cli = cli(&[
            "--config",
            &config_arg,
            "--api-key",
            "k",
            "--input",
            "f.xlsx",
            "--workers",
            "0",
        ]);
        let config = EtaConfig::resolve(&cli).unwrap();
        assert_eq!(config.workers, 1);
    }
}
