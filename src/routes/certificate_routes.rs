use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use crate::controllers::certificate_controller::CertificateController;
use crate::dto::certificate_dto::{CertificateRequest, CertificateResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::AppJson;

pub fn create_certificate_router() -> Router<AppState> {
    Router::new().route("/certificates", post(issue_certificate))
}

async fn issue_certificate(
    State(state): State<AppState>,
    AppJson(request): AppJson<CertificateRequest>,
) -> Result<(StatusCode, Json<CertificateResponse>), AppError> {
    let controller = CertificateController::new(state.engine, state.certificate_meta.clone());
    let response = controller.issue(request)?;
    Ok((StatusCode::CREATED, Json(response)))
}
