//! Distance Resolver: concurrent leg-duration resolution
//!
//! Issues oracle queries through a bounded worker pool and merges the
//! per-task results into a lookup table after all workers finish. A
//! failed or routeless query becomes an unknown entry; the batch as a
//! whole never fails. Completion order carries no meaning; callers
//! consume the returned mapping by key.

use crate::policy;
use crate::services::directions_client::RouteOracle;
use crate::types::{LegQuery, PortHubEntry, PortHubTable, Route, TerrestrialLeg};
use futures::stream::{self, StreamExt};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, warn};

/// Default bound on in-flight oracle calls
pub const DEFAULT_WORKERS: usize = 8;

/// How a terrestrial leg gets its duration
enum LegPlan {
    /// Fixed by policy, no oracle call
    Preset(f64),
    /// Resolved through the oracle
    Query(LegQuery),
    /// No destination available; stays unknown
    Unroutable,
}

/// Resolves leg durations against a routing oracle with a bounded
/// worker pool
pub struct DistanceResolver {
    oracle: Arc<dyn RouteOracle>,
    workers: usize,
}

impl DistanceResolver {
    pub fn new(oracle: Arc<dyn RouteOracle>, workers: usize) -> Self {
        Self {
            oracle,
            workers: workers.max(1),
        }
    }

    /// Resolve a batch of leg queries into a complete mapping
    ///
    /// Each unique query is issued exactly once; duplicates share the
    /// result. Oracle errors and no-routes map to `None` and are logged
    /// with the pair context.
    pub async fn resolve(&self, queries: Vec<LegQuery>) -> HashMap<LegQuery, Option<f64>> {
        let mut unique = Vec::new();
        let mut seen = HashSet::new();
        for query in queries {
            if seen.insert(query.clone()) {
                unique.push(query);
            }
        }

        let total = unique.len();
        debug!(queries = total, workers = self.workers, "Resolving leg durations");

        // Collect (key, result) pairs per task, merge after the join;
        // no map is shared across in-flight workers.
        let pairs: Vec<(LegQuery, Option<f64>)> = stream::iter(unique)
            .map(|query| {
                let oracle = Arc::clone(&self.oracle);
                async move {
                    let hours = match oracle.drive_time(&query.origin, &query.destination).await {
                        Ok(Some(hours)) => Some(hours),
                        Ok(None) => {
                            warn!(
                                origin = %query.origin,
                                destination = %query.destination,
                                "No route found"
                            );
                            None
                        }
                        Err(e) => {
                            warn!(
                                origin = %query.origin,
                                destination = %query.destination,
                                error = %e,
                                "Oracle query failed"
                            );
                            None
                        }
                    };
                    (query, hours)
                }
            })
            .buffer_unordered(self.workers)
            .collect()
            .await;

        let resolved = pairs.iter().filter(|(_, hours)| hours.is_some()).count();
        debug!(
            resolved,
            unresolved = total - resolved,
            "Leg resolution pass complete"
        );

        pairs.into_iter().collect()
    }

    /// Per-brand pass: resolve the factory-side terrestrial legs
    ///
    /// Direct countries get one leg per economic hub; the
    /// zero-terrestrial country is fixed at 0.0 hours without an oracle
    /// call; every other country gets its factory-to-port leg. Legs keep
    /// route order (and hub order within a route).
    pub async fn resolve_terrestrial(&self, routes: &[Route]) -> Vec<TerrestrialLeg> {
        let mut plans: Vec<(TerrestrialLeg, LegPlan)> = Vec::new();

        for route in routes {
            if policy::is_direct(&route.country) {
                for (_, hub_address) in policy::ECONOMIC_HUBS {
                    plans.push((
                        leg_for(route, hub_address),
                        LegPlan::Query(LegQuery::new(route.origin.clone(), *hub_address)),
                    ));
                }
            } else if route.country == policy::ZERO_TERRESTRIAL_COUNTRY {
                let destination = route.destination_port.clone().unwrap_or_default();
                plans.push((leg_for(route, &destination), LegPlan::Preset(0.0)));
            } else if let Some(port) = &route.destination_port {
                plans.push((
                    leg_for(route, port),
                    LegPlan::Query(LegQuery::new(route.origin.clone(), port.clone())),
                ));
            } else {
                warn!(
                    origin = %route.origin,
                    country = %route.country,
                    "No port configured for country; leg stays unresolved"
                );
                plans.push((leg_for(route, ""), LegPlan::Unroutable));
            }
        }

        let queries: Vec<LegQuery> = plans
            .iter()
            .filter_map(|(_, plan)| match plan {
                LegPlan::Query(query) => Some(query.clone()),
                _ => None,
            })
            .collect();
        let resolved = self.resolve(queries).await;

        plans
            .into_iter()
            .map(|(mut leg, plan)| {
                leg.hours = match plan {
                    LegPlan::Preset(hours) => Some(hours),
                    LegPlan::Query(query) => resolved.get(&query).copied().flatten(),
                    LegPlan::Unroutable => None,
                };
                leg
            })
            .collect()
    }

    /// Global pass: resolve the fixed port-to-hub distances, once per run
    pub async fn resolve_port_hub(&self) -> PortHubTable {
        let queries: Vec<LegQuery> = policy::ECONOMIC_HUBS
            .iter()
            .map(|(_, hub_address)| LegQuery::new(policy::HUB_DISTANCE_PORT, *hub_address))
            .collect();
        let resolved = self.resolve(queries).await;

        let entries = policy::ECONOMIC_HUBS
            .iter()
            .map(|(_, hub_address)| PortHubEntry {
                hub: hub_address.to_string(),
                hours: resolved
                    .get(&LegQuery::new(policy::HUB_DISTANCE_PORT, *hub_address))
                    .copied()
                    .flatten(),
            })
            .collect();

        PortHubTable { entries }
    }
}

fn leg_for(route: &Route, destination: &str) -> TerrestrialLeg {
    TerrestrialLeg {
        origin: route.origin.clone(),
        destination: destination.to_string(),
        country: route.country.clone(),
        worker_count: route.worker_count,
        hours: None,
    }
}
