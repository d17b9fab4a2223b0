use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::suggestion_controller::SuggestionController;
use crate::dto::suggestion_dto::{ProfileResponse, SuggestionRequest, VehicleDetailResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::AppJson;

pub fn create_suggestion_router() -> Router<AppState> {
    Router::new()
        .route("/suggestions", post(vehicle_suggestions))
        .route("/profiles/:category", get(get_profile))
}

async fn vehicle_suggestions(
    State(state): State<AppState>,
    AppJson(request): AppJson<SuggestionRequest>,
) -> Result<Json<VehicleDetailResponse>, AppError> {
    let controller = SuggestionController::new(state.engine);
    let response = controller.vehicle_detail(request)?;
    Ok(Json(response))
}

async fn get_profile(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<ProfileResponse> {
    let controller = SuggestionController::new(state.engine);
    Json(controller.profile(&category))
}
