//! Resultado del motor de sugerencias
//!
//! Estructura efímera: se calcula en cada invocación y nunca se persiste.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hito del calendario con su estado respecto al kilometraje estimado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingMilestone {
    pub km_mark: u64,
    pub checklist: Vec<String>,
    pub overdue: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionSummary {
    pub estimated_current_km: i64,
    /// Tasa declarada por el vehículo, tal cual (`null` si no la declara)
    pub monthly_average_km: Option<f64>,
    pub next_maintenance_km: u64,
    pub km_to_next: u64,
    pub overdue: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_due_date: Option<DateTime<Utc>>,
    pub checklist: Vec<String>,
    pub upcoming: Vec<UpcomingMilestone>,
}
