pub mod certificate_controller;
pub mod dashboard_controller;
pub mod suggestion_controller;
