//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que recibe el motor de sugerencias
//! y la estructura que devuelve.

pub mod maintenance;
pub mod suggestion;
pub mod vehicle;

pub use maintenance::MaintenanceRecord;
pub use suggestion::{SuggestionSummary, UpcomingMilestone};
pub use vehicle::{Vehicle, VehicleCategory};
