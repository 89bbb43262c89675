//! Batch orchestrator
//!
//! Runs the resolution passes in dependency order: the shared
//! port-to-hub table once, then per brand the terrestrial pass followed
//! by aggregation. Each pass's mapping is complete before the dependent
//! stage starts; a failed leg never aborts the run.

use crate::aggregate::aggregate;
use crate::policy;
use crate::report::{build_report, BrandReport};
use crate::resolver::DistanceResolver;
use crate::services::directions_client::RouteOracle;
use crate::services::route_builder::BrandRoutes;
use std::sync::Arc;
use tracing::info;

pub struct Pipeline {
    resolver: DistanceResolver,
}

impl Pipeline {
    pub fn new(oracle: Arc<dyn RouteOracle>, workers: usize) -> Self {
        Self {
            resolver: DistanceResolver::new(oracle, workers),
        }
    }

    /// Run the full batch and return one report per brand, in input
    /// order
    pub async fn run(&self, brands: &[BrandRoutes]) -> Vec<BrandReport> {
        info!(
            port = policy::HUB_DISTANCE_PORT,
            hubs = policy::ECONOMIC_HUBS.len(),
            "Resolving port-to-hub distances"
        );
        let port_hub = self.resolver.resolve_port_hub().await;
        let known_hubs = port_hub
            .entries
            .iter()
            .filter(|entry| entry.hours.is_some())
            .count();
        info!(
            known = known_hubs,
            unknown = port_hub.entries.len() - known_hubs,
            "Port-to-hub table ready"
        );

        let mut reports = Vec::with_capacity(brands.len());
        for brand in brands {
            info!(
                brand = %brand.brand,
                routes = brand.routes.len(),
                total_workers = brand.total_workers,
                "Resolving terrestrial origin times"
            );
            let legs = self.resolver.resolve_terrestrial(&brand.routes).await;

            let records = aggregate(&brand.brand, &legs, &port_hub, brand.total_workers);
            info!(
                brand = %brand.brand,
                records = records.len(),
                "Brand aggregation complete"
            );

            reports.push(build_report(brand.brand.clone(), records));
        }

        reports
    }
}
