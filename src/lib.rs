//! Maintenance Advisor
//!
//! Motor de sugerencias de mantenimiento preventivo de vehículos y el
//! servicio HTTP sin estado que lo expone (detalle, dashboard y certificado).

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{
    http::Uri,
    response::Json,
    routing::get,
    Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use config::environment::EnvironmentConfig;
use middleware::cors::cors_middleware;
use state::AppState;
use utils::errors::{not_found_error, AppError};

pub use models::{MaintenanceRecord, SuggestionSummary, UpcomingMilestone, Vehicle, VehicleCategory};
pub use services::suggestion_service::SuggestionEngine;

/// Crear el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    let api = Router::new()
        .merge(routes::suggestion_routes::create_suggestion_router())
        .merge(routes::dashboard_routes::create_dashboard_router())
        .merge(routes::certificate_routes::create_certificate_router());

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        )
        .with_state(state)
}

/// Abrir el listener en `HOST:PORT`; `HOST` puede ser un nombre (p. ej. `localhost`)
pub async fn bind_listener(config: &EnvironmentConfig) -> std::io::Result<TcpListener> {
    TcpListener::bind(config.server_url()).await
}

/// Health check simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn route_not_found(uri: Uri) -> AppError {
    not_found_error("Route", uri.path())
}
