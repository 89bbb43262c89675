//! Route Time Aggregator
//!
//! Pure computation over already-resolved tables: composes terrestrial,
//! maritime and port-to-hub legs into total-time records under the
//! per-country policy, and annotates each with its workforce-weighted
//! share. Unknown legs are filtered here, after resolution; they are
//! never defaulted to zero and never abort the batch.

use crate::policy;
use crate::types::{PortHubTable, TerrestrialLeg, TotalTimeRecord};
use tracing::warn;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Compose total-time records for one brand
///
/// One record per resolved direct leg; for oracle-routed countries, one
/// record per (leg, known hub) pair. Record order follows leg order,
/// then hub order, so output is deterministic for a fixed snapshot.
pub fn aggregate(
    brand: &str,
    legs: &[TerrestrialLeg],
    port_hub: &PortHubTable,
    total_workers: u32,
) -> Vec<TotalTimeRecord> {
    let mut records = Vec::new();

    for leg in legs {
        // Drop-on-unknown: an unresolved origin leg contributes nothing
        let Some(terrestrial_hours) = leg.hours else {
            continue;
        };

        if policy::is_direct(&leg.country) {
            records.push(record(
                brand,
                leg,
                terrestrial_hours,
                terrestrial_hours,
                total_workers,
                leg.destination.clone(),
            ));
            continue;
        }

        let Some((min_minutes, max_minutes)) = policy::maritime_range_minutes(&leg.country) else {
            warn!(
                country = %leg.country,
                origin = %leg.origin,
                "No maritime range configured for country; skipping leg"
            );
            continue;
        };
        let maritime_min = min_minutes / MINUTES_PER_HOUR;
        let maritime_max = max_minutes / MINUTES_PER_HOUR;

        for entry in &port_hub.entries {
            // Hub-skip: an unknown port-to-hub distance skips this hub only
            let Some(port_hub_hours) = entry.hours else {
                continue;
            };

            let total_min = terrestrial_hours + maritime_min + port_hub_hours;
            let total_max = terrestrial_hours + maritime_max + port_hub_hours;
            records.push(record(
                brand,
                leg,
                total_min,
                total_max,
                total_workers,
                entry.hub.clone(),
            ));
        }
    }

    records
}

fn record(
    brand: &str,
    leg: &TerrestrialLeg,
    min_time: f64,
    max_time: f64,
    total_workers: u32,
    destination: String,
) -> TotalTimeRecord {
    let average_time = (min_time + max_time) / 2.0;
    TotalTimeRecord {
        brand: brand.to_string(),
        origin: leg.origin.clone(),
        destination,
        min_time,
        max_time,
        average_time,
        worker_count: leg.worker_count,
        adjusted_average_time: adjusted_share(average_time, leg.worker_count, total_workers),
    }
}

/// Workforce-weighted share of the average transit time
///
/// `average * workers / (total_workers * 10)`; the constants are fixed
/// policy. A brand with zero total workers has no weightable share.
fn adjusted_share(average_time: f64, worker_count: u32, total_workers: u32) -> f64 {
    if total_workers == 0 {
        return 0.0;
    }
    average_time * worker_count as f64 / (total_workers as f64 * policy::WORKER_SHARE_DIVISOR)
}
