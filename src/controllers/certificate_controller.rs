use chrono::Utc;
use validator::Validate;

use crate::dto::certificate_dto::{CertificateRequest, CertificateResponse};
use crate::models::maintenance::sort_by_service_date;
use crate::services::certificate_service::{generate_certificate, CertificateContext, CertificateMeta};
use crate::services::suggestion_service::SuggestionEngine;
use crate::utils::errors::AppError;

pub struct CertificateController {
    engine: SuggestionEngine,
    meta: CertificateMeta,
}

impl CertificateController {
    pub fn new(engine: SuggestionEngine, meta: CertificateMeta) -> Self {
        Self { engine, meta }
    }

    pub fn issue(&self, request: CertificateRequest) -> Result<CertificateResponse, AppError> {
        request.validate()?;

        let CertificateRequest {
            vehicle,
            owner_name,
            mut maintenances,
            now,
        } = request;
        sort_by_service_date(&mut maintenances);

        let now = now.unwrap_or_else(Utc::now);
        let suggestions = self.engine.build(&vehicle, &maintenances, now);

        let certificate = generate_certificate(
            &self.meta,
            CertificateContext {
                vehicle: &vehicle,
                owner_name: owner_name.trim(),
                maintenances: &maintenances,
                suggestions: &suggestions,
            },
            now,
        )?;

        Ok(CertificateResponse { certificate })
    }
}
