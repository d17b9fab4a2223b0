use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{MaintenanceRecord, Vehicle};
use crate::services::dashboard_service::DashboardEntry;

// Vehículo de la flota con su historial
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FleetVehicle {
    #[validate]
    pub vehicle: Vehicle,

    #[serde(default)]
    #[validate]
    pub maintenances: Vec<MaintenanceRecord>,
}

// Request del dashboard
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRequest {
    #[validate]
    pub vehicles: Vec<FleetVehicle>,

    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

// Response del dashboard
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub dashboard: Vec<DashboardEntry>,
}
