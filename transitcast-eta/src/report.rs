//! Brand Report Builder and result sink
//!
//! Collects the per-route records into a per-brand table, folds them
//! into the brand's weighted delivery-time scalar, writes the unified
//! CSV, and prints the console summary.

use crate::types::TotalTimeRecord;
use std::path::Path;
use transitcast_common::{Error, Result};

/// Per-brand result table with its weighted delivery-time scalar
#[derive(Debug, Clone)]
pub struct BrandReport {
    pub brand: String,
    pub records: Vec<TotalTimeRecord>,
    /// Sum of adjusted average times over the brand's records
    pub weighted_time: f64,
}

/// Build one brand's report; empty input folds to zero
pub fn build_report(brand: impl Into<String>, records: Vec<TotalTimeRecord>) -> BrandReport {
    let weighted_time = records.iter().map(|r| r.adjusted_average_time).sum();
    BrandReport {
        brand: brand.into(),
        records,
        weighted_time,
    }
}

/// Write the unified result table: all brands concatenated, one row per
/// record, no index column
pub fn export_csv(path: &Path, reports: &[BrandReport]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| Error::Export(format!("{}: {}", path.display(), e)))?;

    for report in reports {
        for record in &report.records {
            writer
                .serialize(record)
                .map_err(|e| Error::Export(e.to_string()))?;
        }
    }

    writer.flush().map_err(|e| Error::Export(e.to_string()))?;
    Ok(())
}

/// Print one weighted total per brand, two decimals
pub fn print_summaries(reports: &[BrandReport]) {
    for report in reports {
        println!(
            "Adjusted average delivery time for {}: {:.2} hours",
            report.brand, report.weighted_time
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(brand: &str, adjusted: f64) -> TotalTimeRecord {
        TotalTimeRecord {
            brand: brand.to_string(),
            origin: "origin".to_string(),
            destination: "destination".to_string(),
            min_time: 1.0,
            max_time: 3.0,
            average_time: 2.0,
            worker_count: 10,
            adjusted_average_time: adjusted,
        }
    }

    #[test]
    fn test_weighted_time_is_sum_of_adjusted_shares() {
        let report = build_report(
            "Nike",
            vec![record("Nike", 0.19), record("Nike", 0.01), record("Nike", 0.3)],
        );
        assert!((report.weighted_time - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_brand_folds_to_zero() {
        let report = build_report("Vulcabras", Vec::new());
        assert_eq!(report.weighted_time, 0.0);
        assert!(report.records.is_empty());
    }

    #[test]
    fn test_export_concatenates_brands_without_index_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("times.csv");

        let reports = vec![
            build_report("Nike", vec![record("Nike", 0.19)]),
            build_report("Adidas", vec![record("Adidas", 0.05), record("Adidas", 0.07)]),
        ];
        export_csv(&path, &reports).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Brand,Origin,Destination,Min Time,Max Time,Average Time,Workers Count,Adjusted Average Time"
        );
        assert_eq!(lines.clone().count(), 3);
        assert!(lines.next().unwrap().starts_with("Nike,"));
        assert!(lines.next().unwrap().starts_with("Adidas,"));
    }

    #[test]
    fn test_export_with_no_records_writes_only_headers_nothing() {
        // csv::Writer emits headers on first serialize; an empty run
        // yields an empty file rather than a lone header row
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        export_csv(&path, &[build_report("Nike", Vec::new())]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.is_empty());
    }
}
