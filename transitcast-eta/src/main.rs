//! transitcast-eta - Factory-to-hub delivery time estimation
//!
//! Single batch invocation: load the factory table, resolve leg
//! durations against the routing oracle, aggregate per brand, write the
//! unified CSV and print the weighted summary per brand.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use transitcast_eta::services::{build_brand_routes, load_factory_rows, DirectionsClient};
use transitcast_eta::{Cli, EtaConfig, Pipeline};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting transitcast-eta v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = EtaConfig::resolve(&cli)?;
    info!(
        input = %config.input,
        output = %config.output.display(),
        workers = config.workers,
        "Configuration resolved"
    );

    let rows = load_factory_rows(&config.input).await?;
    let brands = build_brand_routes(&rows);
    info!(rows = rows.len(), brands = brands.len(), "Factory table loaded");

    let oracle = Arc::new(DirectionsClient::new(config.api_key.clone())?);
    let pipeline = Pipeline::new(oracle, config.workers);
    let reports = pipeline.run(&brands).await;

    transitcast_eta::export_csv(&config.output, &reports)?;
    info!("Result table written: {}", config.output.display());

    transitcast_eta::print_summaries(&reports);

    Ok(())
}
