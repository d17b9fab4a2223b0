use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{MaintenanceRecord, SuggestionSummary, Vehicle, VehicleCategory};

// Request para calcular las sugerencias de un vehículo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    #[validate]
    pub vehicle: Vehicle,

    #[serde(default)]
    #[validate]
    pub maintenances: Vec<MaintenanceRecord>,

    /// Instante de referencia; si falta se usa la hora actual
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

// Response de detalle de vehículo
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetailResponse {
    pub vehicle: Vehicle,
    pub maintenances: Vec<MaintenanceRecord>,
    pub suggestions: SuggestionSummary,
}

// Hito del calendario preventivo, sin estado
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneResponse {
    pub km_mark: u64,
    pub checklist: Vec<String>,
}

// Response del calendario de una categoría
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub category: VehicleCategory,
    pub schedule: Vec<MilestoneResponse>,
}
