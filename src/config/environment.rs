//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Todas las variables tienen un valor por defecto: cargar la configuración nunca falla.

use std::env;
use std::str::FromStr;
use tracing::warn;

/// Kilometraje mensual usado cuando el vehículo no declara uno válido
pub const DEFAULT_AVERAGE_MONTHLY_KM: f64 = 1000.0;

pub const DEFAULT_PORT: u16 = 3333;
pub const DEFAULT_CERTIFICATE_ISSUER: &str = "AutoTrace";
pub const DEFAULT_CERTIFICATE_TITLE: &str = "Certificado Digital AutoTrace";

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub log_level: String,
    pub average_monthly_km: f64,
    pub certificate_issuer: String,
    pub certificate_title: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }
}

impl EnvironmentConfig {
    /// Construir la configuración a partir de una función de búsqueda de variables.
    ///
    /// `Default` usa el entorno del proceso; los tests inyectan un mapa.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        let default_level = if environment == "production" { "info" } else { "debug" };
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| default_level.to_string());

        let average_monthly_km = sanitize_monthly_km(parse_or_default(
            &lookup,
            "AVERAGE_MONTHLY_KM",
            DEFAULT_AVERAGE_MONTHLY_KM,
        ));

        Self {
            port: parse_or_default(&lookup, "PORT", DEFAULT_PORT),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            log_level,
            average_monthly_km,
            certificate_issuer: lookup("CERTIFICATE_ISSUER")
                .unwrap_or_else(|| DEFAULT_CERTIFICATE_ISSUER.to_string()),
            certificate_title: lookup("CERTIFICATE_TITLE")
                .unwrap_or_else(|| DEFAULT_CERTIFICATE_TITLE.to_string()),
            environment,
        }
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Nivel de logging para tracing_subscriber
    pub fn tracing_level(&self) -> tracing::Level {
        tracing::Level::from_str(&self.log_level).unwrap_or(tracing::Level::INFO)
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("⚠️ Valor inválido para {}: '{}', usando {}", key, raw, default);
            default
        }),
        None => default,
    }
}

/// La tasa global siempre debe ser positiva: se divide por ella al proyectar fechas.
fn sanitize_monthly_km(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        warn!(
            "⚠️ AVERAGE_MONTHLY_KM debe ser positivo (recibido {}), usando {}",
            value, DEFAULT_AVERAGE_MONTHLY_KM
        );
        DEFAULT_AVERAGE_MONTHLY_KM
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> EnvironmentConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvironmentConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = config_from(&[]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.average_monthly_km, DEFAULT_AVERAGE_MONTHLY_KM);
        assert_eq!(config.log_level, "debug");
        assert!(config.is_development());
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.certificate_issuer, "AutoTrace");
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = config_from(&[
            ("ENVIRONMENT", "production"),
            ("PORT", "8080"),
            ("AVERAGE_MONTHLY_KM", "1500"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
        ]);
        assert!(config.is_production());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.server_url(), "0.0.0.0:8080");
        assert_eq!(config.average_monthly_km, 1500.0);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = config_from(&[("PORT", "abc"), ("AVERAGE_MONTHLY_KM", "lots")]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.average_monthly_km, DEFAULT_AVERAGE_MONTHLY_KM);
    }

    #[test]
    fn test_non_positive_monthly_km_is_rejected() {
        assert_eq!(
            config_from(&[("AVERAGE_MONTHLY_KM", "0")]).average_monthly_km,
            DEFAULT_AVERAGE_MONTHLY_KM
        );
        assert_eq!(
            config_from(&[("AVERAGE_MONTHLY_KM", "-20")]).average_monthly_km,
            DEFAULT_AVERAGE_MONTHLY_KM
        );
    }

    #[test]
    fn test_tracing_level() {
        assert_eq!(config_from(&[("LOG_LEVEL", "warn")]).tracing_level(), tracing::Level::WARN);
        assert_eq!(config_from(&[("LOG_LEVEL", "nope")]).tracing_level(), tracing::Level::INFO);
    }
}
