use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::dashboard_dto::{DashboardRequest, DashboardResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::AppJson;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/dashboard", post(fleet_dashboard))
}

async fn fleet_dashboard(
    State(state): State<AppState>,
    AppJson(request): AppJson<DashboardRequest>,
) -> Result<Json<DashboardResponse>, AppError> {
    let controller = DashboardController::new(state.engine);
    let response = controller.dashboard(request)?;
    Ok(Json(response))
}
