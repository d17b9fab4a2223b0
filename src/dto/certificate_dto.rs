use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{MaintenanceRecord, Vehicle};
use crate::services::certificate_service::CertificateDocument;

// Request para emitir un certificado
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequest {
    #[validate]
    pub vehicle: Vehicle,

    #[validate(length(min = 2, max = 200))]
    pub owner_name: String,

    #[serde(default)]
    #[validate]
    pub maintenances: Vec<MaintenanceRecord>,

    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

// Response con el contenido del certificado
#[derive(Debug, Serialize)]
pub struct CertificateResponse {
    pub certificate: CertificateDocument,
}
