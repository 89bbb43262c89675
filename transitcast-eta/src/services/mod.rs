//! External collaborators: routing oracle, factory-table source, route
//! building

pub mod directions_client;
pub mod route_builder;
pub mod spreadsheet;

pub use directions_client::{DirectionsClient, OracleError, RouteOracle};
pub use route_builder::{build_brand_routes, build_route, BrandRoutes};
pub use spreadsheet::{load_factory_rows, FactoryRow};
