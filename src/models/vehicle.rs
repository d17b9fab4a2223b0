//! Modelo de Vehicle
//!
//! Snapshot de un vehículo tal como lo entrega la capa de persistencia.
//! El motor de sugerencias sólo lee `category`, `initial_odometer`,
//! `average_monthly_km` y `created_at`; el resto lo usan el dashboard y el certificado.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::validate_license_plate;

/// Categoría del vehículo.
///
/// Se deserializa desde cualquier texto: un valor desconocido se convierte en `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum VehicleCategory {
    Car,
    Motorcycle,
    Truck,
    #[default]
    Other,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 4] = [
        VehicleCategory::Car,
        VehicleCategory::Motorcycle,
        VehicleCategory::Truck,
        VehicleCategory::Other,
    ];

    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "car" => VehicleCategory::Car,
            "motorcycle" => VehicleCategory::Motorcycle,
            "truck" => VehicleCategory::Truck,
            _ => VehicleCategory::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Car => "car",
            VehicleCategory::Motorcycle => "motorcycle",
            VehicleCategory::Truck => "truck",
            VehicleCategory::Other => "other",
        }
    }
}

impl From<String> for VehicleCategory {
    fn from(value: String) -> Self {
        VehicleCategory::from_name(&value)
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vehicle principal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom = "validate_license_plate")]
    pub plate: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 100))]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 100))]
    pub manufacturer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1950, max = 2100))]
    pub year: Option<i32>,

    pub category: VehicleCategory,

    #[serde(default)]
    pub initial_odometer: u64,

    /// Puede faltar o ser cero: el motor usa entonces la tasa global
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub average_monthly_km: Option<f64>,

    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    /// Vehículo mínimo con los campos que consume el motor
    pub fn new(
        category: VehicleCategory,
        initial_odometer: u64,
        average_monthly_km: Option<f64>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            plate: None,
            model: None,
            manufacturer: None,
            year: None,
            category,
            initial_odometer,
            average_monthly_km,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_parsing_falls_back_to_other() {
        assert_eq!(VehicleCategory::from_name("car"), VehicleCategory::Car);
        assert_eq!(VehicleCategory::from_name(" Motorcycle "), VehicleCategory::Motorcycle);
        assert_eq!(VehicleCategory::from_name("TRUCK"), VehicleCategory::Truck);
        assert_eq!(VehicleCategory::from_name("tractor"), VehicleCategory::Other);
        assert_eq!(VehicleCategory::from_name(""), VehicleCategory::Other);
    }

    #[test]
    fn test_category_serde() {
        let parsed: VehicleCategory = serde_json::from_value(json!("bus")).unwrap();
        assert_eq!(parsed, VehicleCategory::Other);
        assert_eq!(serde_json::to_value(VehicleCategory::Motorcycle).unwrap(), json!("motorcycle"));
    }

    #[test]
    fn test_vehicle_deserialize_camel_case() {
        let vehicle: Vehicle = serde_json::from_value(json!({
            "plate": "ABC-1D23",
            "category": "car",
            "initialOdometer": 1200,
            "averageMonthlyKm": 800.5,
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(vehicle.category, VehicleCategory::Car);
        assert_eq!(vehicle.initial_odometer, 1200);
        assert_eq!(vehicle.average_monthly_km, Some(800.5));
        assert!(vehicle.validate().is_ok());
    }

    #[test]
    fn test_vehicle_validation_rejects_bad_fields() {
        let mut vehicle = Vehicle::new(VehicleCategory::Car, 0, Some(-1.0), Utc::now());
        vehicle.plate = Some("12-ABC".to_string());
        vehicle.model = Some("X".to_string());

        let errors = vehicle.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("plate"));
        assert!(fields.contains_key("model"));
        assert_eq!(fields.len(), 3);
    }
}
