//! Route building: factory rows → per-brand `Route` records
//!
//! Trivial plumbing between the table source and the resolver. Brands
//! keep their order of first appearance in the input so the whole run is
//! deterministic for a fixed table.

use crate::policy;
use crate::services::spreadsheet::FactoryRow;
use crate::types::Route;

/// All routes of one brand, with the brand's total workforce
#[derive(Debug, Clone)]
pub struct BrandRoutes {
    pub brand: String,
    pub routes: Vec<Route>,
    pub total_workers: u32,
}

/// Build one `Route` from a factory row
pub fn build_route(row: &FactoryRow) -> Route {
    Route {
        origin: format!("{}, {}, {}", row.city, row.country, row.postal_code),
        destination_port: policy::port_for(&row.country).map(str::to_string),
        country: row.country.clone(),
        worker_count: row.worker_count,
    }
}

/// Group rows into per-brand route sets, brands in order of first
/// appearance
pub fn build_brand_routes(rows: &[FactoryRow]) -> Vec<BrandRoutes> {
    let mut brands: Vec<BrandRoutes> = Vec::new();

    for row in rows {
        let route = build_route(row);
        match brands.iter_mut().find(|b| b.brand == row.brand) {
            Some(brand) => {
                brand.total_workers += route.worker_count;
                brand.routes.push(route);
            }
            None => brands.push(BrandRoutes {
                brand: row.brand.clone(),
                total_workers: route.worker_count,
                routes: vec![route],
            }),
        }
    }

    brands
}
