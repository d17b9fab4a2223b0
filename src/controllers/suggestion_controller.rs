use chrono::Utc;
use validator::Validate;

use crate::config::profiles::get_profile_by_name;
use crate::dto::suggestion_dto::{
    MilestoneResponse, ProfileResponse, SuggestionRequest, VehicleDetailResponse,
};
use crate::models::maintenance::sort_by_service_date;
use crate::models::VehicleCategory;
use crate::services::suggestion_service::SuggestionEngine;
use crate::utils::errors::AppError;

pub struct SuggestionController {
    engine: SuggestionEngine,
}

impl SuggestionController {
    pub fn new(engine: SuggestionEngine) -> Self {
        Self { engine }
    }

    /// Detalle del vehículo: historial ordenado más las sugerencias
    pub fn vehicle_detail(
        &self,
        request: SuggestionRequest,
    ) -> Result<VehicleDetailResponse, AppError> {
        request.validate()?;

        let SuggestionRequest {
            vehicle,
            mut maintenances,
            now,
        } = request;

        // El motor toma el último elemento como el servicio más reciente
        sort_by_service_date(&mut maintenances);

        let now = now.unwrap_or_else(Utc::now);
        let suggestions = self.engine.build(&vehicle, &maintenances, now);

        Ok(VehicleDetailResponse {
            vehicle,
            maintenances,
            suggestions,
        })
    }

    /// Calendario preventivo de una categoría (desconocida → `other`)
    pub fn profile(&self, category: &str) -> ProfileResponse {
        let schedule = get_profile_by_name(category)
            .iter()
            .map(|milestone| MilestoneResponse {
                km_mark: milestone.km_mark,
                checklist: milestone.items.iter().map(|item| item.to_string()).collect(),
            })
            .collect();

        ProfileResponse {
            category: VehicleCategory::from_name(category),
            schedule,
        }
    }
}
