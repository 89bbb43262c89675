//! Core domain types for the transit-time pipeline
//!
//! Everything here is plain data: routes built from factory rows, leg
//! queries issued to the routing oracle, the per-pass time tables, and
//! the final per-(route, hub) result records.

use serde::Serialize;

/// One factory shipping route, built from a single input row
///
/// Immutable once built; consumed (never mutated) by the resolver and
/// the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Free-text origin address: "{city}, {country}, {postal code}"
    pub origin: String,
    /// Departure port for the country, when one is configured
    pub destination_port: Option<String>,
    /// Country the factory ships from; selects the routing policy
    pub country: String,
    /// Workforce at this factory
    pub worker_count: u32,
}

/// A unit of work submitted to the routing oracle
///
/// Equality is structural on the (origin, destination) pair; used as the
/// lookup key of a resolution pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LegQuery {
    pub origin: String,
    pub destination: String,
}

impl LegQuery {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// One resolved terrestrial origin leg
///
/// `hours` is `None` when the oracle found no route or failed; such legs
/// are dropped by the aggregator, never defaulted to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrestrialLeg {
    pub origin: String,
    /// Port for oracle-routed countries, hub address for direct ones
    pub destination: String,
    pub country: String,
    pub worker_count: u32,
    /// Resolved duration in hours, or unknown
    pub hours: Option<f64>,
}

/// Shared port-to-hub distance table, computed once per run
///
/// Entries keep the hub-table order so downstream output is
/// deterministic. Values are duration in hours, or unknown.
#[derive(Debug, Clone, Default)]
pub struct PortHubTable {
    pub entries: Vec<PortHubEntry>,
}

#[derive(Debug, Clone)]
pub struct PortHubEntry {
    /// Hub address, e.g. "São Paulo, SP"
    pub hub: String,
    pub hours: Option<f64>,
}

/// One leg-composed total-time record per surviving (route, hub) pair
///
/// `adjusted_average_time` is a workforce-weighted share of the average,
/// not a physical time; the `total_workers * 10` divisor is fixed
/// business policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalTimeRecord {
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Origin")]
    pub origin: String,
    #[serde(rename = "Destination")]
    pub destination: String,
    #[serde(rename = "Min Time")]
    pub min_time: f64,
    #[serde(rename = "Max Time")]
    pub max_time: f64,
    #[serde(rename = "Average Time")]
    pub average_time: f64,
    #[serde(rename = "Workers Count")]
    pub worker_count: u32,
    #[serde(rename = "Adjusted Average Time")]
    pub adjusted_average_time: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_leg_query_structural_equality() {
        let a = LegQuery::new("Shenzhen, China, 518000", "Port of Shanghai, China");
        let b = LegQuery::new("Shenzhen, China, 518000", "Port of Shanghai, China");
        let c = LegQuery::new("Shenzhen, China, 518000", "Port of Busan, South Korea");
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut map = HashMap::new();
        map.insert(a, 2.0);
        assert_eq!(map.get(&b), Some(&2.0));
    }

    #[test]
    fn test_record_serializes_with_output_column_names() {
        let record = TotalTimeRecord {
            brand: "Nike".to_string(),
            origin: "Shenzhen, China, 518000".to_string(),
            destination: "São Paulo, SP".to_string(),
            min_time: 17.0,
            max_time: 21.0,
            average_time: 19.0,
            worker_count: 50,
            adjusted_average_time: 0.19,
        };

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(&record).unwrap();
        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert!(output.starts_with(
            "Brand,Origin,Destination,Min Time,Max Time,Average Time,Workers Count,Adjusted Average Time\n"
        ));
    }
}
