//! Modelo de MaintenanceRecord
//!
//! Servicio ya realizado sobre un vehículo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 200))]
    pub service_type: Option<String>,

    pub service_date: DateTime<Utc>,

    pub odometer: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 200))]
    pub workshop: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

impl MaintenanceRecord {
    pub fn new(odometer: u64, service_date: DateTime<Utc>) -> Self {
        Self {
            id: None,
            service_type: None,
            service_date,
            odometer,
            workshop: None,
            notes: None,
        }
    }
}

/// Ordenar el historial por fecha de servicio ascendente.
///
/// Orden estable: dos servicios el mismo instante conservan el orden recibido.
pub fn sort_by_service_date(records: &mut [MaintenanceRecord]) {
    records.sort_by_key(|record| record.service_date);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_sort_by_service_date_is_stable() {
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let mut records = vec![
            MaintenanceRecord::new(9000, base + Duration::days(20)),
            MaintenanceRecord::new(1000, base),
            MaintenanceRecord::new(5000, base + Duration::days(10)),
            MaintenanceRecord::new(5100, base + Duration::days(10)),
        ];

        sort_by_service_date(&mut records);

        let odometers: Vec<u64> = records.iter().map(|r| r.odometer).collect();
        assert_eq!(odometers, vec![1000, 5000, 5100, 9000]);
    }

    #[test]
    fn test_notes_length_is_limited() {
        let mut record = MaintenanceRecord::new(100, Utc::now());
        record.notes = Some("x".repeat(1001));
        assert!(record.validate().is_err());

        record.notes = Some("Troca de pastilhas".to_string());
        record.workshop = Some("Oficina Central".to_string());
        assert!(record.validate().is_ok());
    }
}
