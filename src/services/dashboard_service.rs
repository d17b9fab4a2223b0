//! Resumen de flota para el dashboard
//!
//! Una fila por vehículo con el total de servicios, la fecha del último y
//! el próximo hito calculado por el motor.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::models::{MaintenanceRecord, Vehicle};
use crate::services::suggestion_service::SuggestionEngine;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardEntry {
    pub vehicle_id: Option<Uuid>,
    pub total_maintenances: usize,
    pub last_maintenance_date: Option<DateTime<Utc>>,
    pub next_maintenance_km: u64,
    pub overdue: bool,
}

/// Resumir un vehículo; `maintenances` debe venir ordenado por fecha ascendente.
pub fn summarize_vehicle(
    engine: &SuggestionEngine,
    vehicle: &Vehicle,
    maintenances: &[MaintenanceRecord],
    now: DateTime<Utc>,
) -> DashboardEntry {
    let suggestions = engine.build(vehicle, maintenances, now);

    DashboardEntry {
        vehicle_id: vehicle.id,
        total_maintenances: maintenances.len(),
        last_maintenance_date: maintenances.last().map(|record| record.service_date),
        next_maintenance_km: suggestions.next_maintenance_km,
        overdue: suggestions.overdue,
    }
}

/// Resumir toda la flota, conservando el orden recibido
pub fn build_dashboard<'a, I>(engine: &SuggestionEngine, fleet: I, now: DateTime<Utc>) -> Vec<DashboardEntry>
where
    I: IntoIterator<Item = (&'a Vehicle, &'a [MaintenanceRecord])>,
{
    let entries: Vec<DashboardEntry> = fleet
        .into_iter()
        .map(|(vehicle, maintenances)| summarize_vehicle(engine, vehicle, maintenances, now))
        .collect();

    let overdue = entries.iter().filter(|entry| entry.overdue).count();
    info!("📊 Dashboard: {} vehículos, {} con mantenimiento atrasado", entries.len(), overdue);

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VehicleCategory;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_summarize_vehicle_without_history() {
        let mut vehicle = Vehicle::new(VehicleCategory::Motorcycle, 0, Some(500.0), now());
        vehicle.id = Some(Uuid::new_v4());

        let entry = summarize_vehicle(&SuggestionEngine::default(), &vehicle, &[], now());

        assert_eq!(entry.vehicle_id, vehicle.id);
        assert_eq!(entry.total_maintenances, 0);
        assert_eq!(entry.last_maintenance_date, None);
        assert_eq!(entry.next_maintenance_km, 3000);
        assert!(!entry.overdue);

        let json = serde_json::to_value(&entry).unwrap();
        assert!(json["lastMaintenanceDate"].is_null());
    }

    #[test]
    fn test_build_dashboard_reports_last_service_and_overdue() {
        let engine = SuggestionEngine::default();
        let fresh = Vehicle::new(VehicleCategory::Car, 0, Some(1000.0), now());
        let worn = Vehicle::new(
            VehicleCategory::Truck,
            0,
            Some(3000.0),
            now() - Duration::days(400),
        );
        let last_service = now() - Duration::days(90);
        let worn_history = vec![
            MaintenanceRecord::new(10500, now() - Duration::days(200)),
            MaintenanceRecord::new(15000, last_service),
        ];

        let no_history: Vec<MaintenanceRecord> = Vec::new();

        let entries = build_dashboard(
            &engine,
            vec![(&fresh, no_history.as_slice()), (&worn, worn_history.as_slice())],
            now(),
        );

        assert_eq!(entries.len(), 2);
        assert!(!entries[0].overdue);
        assert_eq!(entries[1].total_maintenances, 2);
        assert_eq!(entries[1].last_maintenance_date, Some(last_service));
        // 15000 + 3 meses * 3000 = 24000 ≥ 20000
        assert_eq!(entries[1].next_maintenance_km, 20000);
        assert!(entries[1].overdue);
    }
}
