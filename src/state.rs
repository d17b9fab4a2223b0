//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Es inmutable: no hay nada que sincronizar.

use crate::config::environment::EnvironmentConfig;
use crate::services::certificate_service::CertificateMeta;
use crate::services::suggestion_service::SuggestionEngine;

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub engine: SuggestionEngine,
    pub certificate_meta: CertificateMeta,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self {
            engine: SuggestionEngine::from_config(&config),
            certificate_meta: CertificateMeta::from_config(&config),
            config,
        }
    }
}
