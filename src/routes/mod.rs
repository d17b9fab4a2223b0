pub mod certificate_routes;
pub mod dashboard_routes;
pub mod suggestion_routes;
