use chrono::Utc;
use validator::Validate;

use crate::dto::dashboard_dto::{DashboardRequest, DashboardResponse};
use crate::models::maintenance::sort_by_service_date;
use crate::services::dashboard_service::build_dashboard;
use crate::services::suggestion_service::SuggestionEngine;
use crate::utils::errors::AppError;

pub struct DashboardController {
    engine: SuggestionEngine,
}

impl DashboardController {
    pub fn new(engine: SuggestionEngine) -> Self {
        Self { engine }
    }

    pub fn dashboard(&self, request: DashboardRequest) -> Result<DashboardResponse, AppError> {
        request.validate()?;

        let DashboardRequest { mut vehicles, now } = request;
        for entry in vehicles.iter_mut() {
            sort_by_service_date(&mut entry.maintenances);
        }

        let now = now.unwrap_or_else(Utc::now);
        let dashboard = build_dashboard(
            &self.engine,
            vehicles
                .iter()
                .map(|entry| (&entry.vehicle, entry.maintenances.as_slice())),
            now,
        );

        Ok(DashboardResponse { dashboard })
    }
}
