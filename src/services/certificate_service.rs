//! Datos del certificado digital de mantenimiento
//!
//! Compone el contenido que el renderizador (PDF con código QR) consume:
//! identificador del certificado, payload de verificación y las líneas de
//! cada sección. La maquetación del documento queda fuera de este módulo.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::models::{MaintenanceRecord, SuggestionSummary, Vehicle};
use crate::utils::errors::{AppError, AppResult};

const EMPTY_VALUE: &str = "-";
const NO_MAINTENANCE_LINE: &str = "Nenhuma manutenção registrada.";
const STATUS_OVERDUE: &str = "Pendente / Atrasada";
const STATUS_UP_TO_DATE: &str = "Em dia";

/// Metadatos del emisor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateMeta {
    pub issuer: String,
    pub title: String,
}

impl CertificateMeta {
    pub fn from_config(config: &EnvironmentConfig) -> Self {
        Self {
            issuer: config.certificate_issuer.clone(),
            title: config.certificate_title.clone(),
        }
    }
}

/// Datos de entrada del certificado
#[derive(Debug, Clone, Copy)]
pub struct CertificateContext<'a> {
    pub vehicle: &'a Vehicle,
    pub owner_name: &'a str,
    pub maintenances: &'a [MaintenanceRecord],
    pub suggestions: &'a SuggestionSummary,
}

/// Contenido del código QR: apunta al certificado emitido
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationPayload {
    pub certificate_id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub plate: Option<String>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDocument {
    pub certificate_id: Uuid,
    pub title: String,
    pub issuer: String,
    pub issued_at: DateTime<Utc>,
    /// Payload serializado en JSON, listo para codificar en el QR
    pub verification_payload: String,
    pub header_lines: Vec<String>,
    pub vehicle_lines: Vec<String>,
    pub maintenance_lines: Vec<String>,
    pub recommendation_lines: Vec<String>,
    pub checklist: Vec<String>,
}

/// `Etiqueta: valor`, o `Etiqueta: -` si no hay valor
fn format_line(label: &str, value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => format!("{}: {}", label, value),
        None => format!("{}: {}", label, EMPTY_VALUE),
    }
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn maintenance_line(record: &MaintenanceRecord) -> String {
    format!(
        "{} | {} | {} km | {}",
        record.service_date.format("%Y-%m-%d"),
        record.service_type.as_deref().unwrap_or(EMPTY_VALUE),
        record.odometer,
        record.workshop.as_deref().unwrap_or(EMPTY_VALUE),
    )
}

fn vehicle_lines(vehicle: &Vehicle, owner_name: &str) -> Vec<String> {
    let year = vehicle.year.map(|year| year.to_string());
    let monthly = vehicle.average_monthly_km.map(|km| format!("{} km", km));

    vec![
        format_line("Proprietário", Some(owner_name)),
        format_line("Placa", vehicle.plate.as_deref()),
        format_line("Modelo", vehicle.model.as_deref()),
        format_line("Fabricante", vehicle.manufacturer.as_deref()),
        format_line("Ano", year.as_deref()),
        format_line("Categoria", Some(vehicle.category.as_str())),
        format_line("Média Km/mês", monthly.as_deref()),
    ]
}

fn recommendation_lines(suggestions: &SuggestionSummary) -> Vec<String> {
    let status = if suggestions.overdue { STATUS_OVERDUE } else { STATUS_UP_TO_DATE };

    let mut lines = vec![
        format!("Próxima manutenção em: {} km", suggestions.next_maintenance_km),
        format!("Km restante: {} km", suggestions.km_to_next),
        format!("Situação: {}", status),
    ];
    if let Some(due) = &suggestions.estimated_due_date {
        lines.push(format!("Prazo estimado: {}", format_date(due)));
    }
    lines
}

/// Generar el contenido del certificado con un identificador nuevo.
///
/// `now` es la fecha de emisión; el identificador se genera aquí y la
/// persistencia del certificado es responsabilidad de quien llama.
pub fn generate_certificate(
    meta: &CertificateMeta,
    context: CertificateContext<'_>,
    now: DateTime<Utc>,
) -> AppResult<CertificateDocument> {
    let certificate_id = Uuid::new_v4();
    let vehicle = context.vehicle;

    let payload = VerificationPayload {
        certificate_id,
        vehicle_id: vehicle.id,
        plate: vehicle.plate.clone(),
        generated_at: now,
    };
    let verification_payload = serde_json::to_string(&payload)
        .map_err(|e| AppError::Internal(format!("No se pudo serializar el payload QR: {}", e)))?;

    let maintenance_lines = if context.maintenances.is_empty() {
        vec![NO_MAINTENANCE_LINE.to_string()]
    } else {
        context.maintenances.iter().map(maintenance_line).collect()
    };

    info!(
        "📜 Certificado {} generado para vehículo {:?} ({} servicios)",
        certificate_id,
        vehicle.id,
        context.maintenances.len()
    );

    Ok(CertificateDocument {
        certificate_id,
        title: meta.title.clone(),
        issuer: meta.issuer.clone(),
        issued_at: now,
        verification_payload,
        header_lines: vec![
            format!("ID do Certificado: {}", certificate_id),
            format!("Emitido por: {}", meta.issuer),
            format!("Data de Emissão: {}", now.format("%d/%m/%Y %H:%M:%S")),
        ],
        vehicle_lines: vehicle_lines(vehicle, context.owner_name),
        maintenance_lines,
        recommendation_lines: recommendation_lines(context.suggestions),
        checklist: context.suggestions.checklist.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VehicleCategory;
    use crate::services::suggestion_service::SuggestionEngine;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 14, 30, 0).unwrap()
    }

    fn meta() -> CertificateMeta {
        CertificateMeta {
            issuer: "AutoTrace".to_string(),
            title: "Certificado Digital AutoTrace".to_string(),
        }
    }

    fn vehicle() -> Vehicle {
        let mut vehicle = Vehicle::new(
            VehicleCategory::Car,
            0,
            Some(1000.0),
            now() - Duration::days(60),
        );
        vehicle.id = Some(Uuid::nil());
        vehicle.plate = Some("ABC1D23".to_string());
        vehicle.model = Some("Onix".to_string());
        vehicle.year = Some(2022);
        vehicle
    }

    #[test]
    fn test_format_line_uses_dash_for_missing_values() {
        assert_eq!(format_line("Placa", Some("ABC1D23")), "Placa: ABC1D23");
        assert_eq!(format_line("Placa", None), "Placa: -");
        assert_eq!(format_line("Placa", Some("  ")), "Placa: -");
    }

    #[test]
    fn test_certificate_without_history() {
        let vehicle = vehicle();
        let suggestions = SuggestionEngine::default().build(&vehicle, &[], now());

        let document = generate_certificate(
            &meta(),
            CertificateContext {
                vehicle: &vehicle,
                owner_name: "Maria Souza",
                maintenances: &[],
                suggestions: &suggestions,
            },
            now(),
        )
        .unwrap();

        assert_eq!(document.maintenance_lines, vec![NO_MAINTENANCE_LINE]);
        assert_eq!(document.header_lines[2], "Data de Emissão: 10/03/2025 14:30:00");
        assert!(document.vehicle_lines.contains(&"Proprietário: Maria Souza".to_string()));
        assert!(document.vehicle_lines.contains(&"Fabricante: -".to_string()));
        assert!(document.vehicle_lines.contains(&"Média Km/mês: 1000 km".to_string()));
        assert_eq!(
            document.recommendation_lines,
            vec![
                "Próxima manutenção em: 5000 km",
                "Km restante: 3000 km",
                "Situação: Em dia",
                "Prazo estimado: 08/06/2025",
            ]
        );
        assert_eq!(document.checklist, suggestions.checklist);
    }

    #[test]
    fn test_verification_payload_points_to_certificate() {
        let vehicle = vehicle();
        let history = vec![MaintenanceRecord {
            service_type: Some("Troca de óleo".to_string()),
            workshop: Some("Oficina Central".to_string()),
            ..MaintenanceRecord::new(5100, now() - Duration::days(5))
        }];
        let suggestions = SuggestionEngine::default().build(&vehicle, &history, now());

        let document = generate_certificate(
            &meta(),
            CertificateContext {
                vehicle: &vehicle,
                owner_name: "Maria Souza",
                maintenances: &history,
                suggestions: &suggestions,
            },
            now(),
        )
        .unwrap();

        let payload: serde_json::Value = serde_json::from_str(&document.verification_payload).unwrap();
        assert_eq!(payload["certificateId"], document.certificate_id.to_string());
        assert_eq!(payload["vehicleId"], Uuid::nil().to_string());
        assert_eq!(payload["plate"], "ABC1D23");
        assert_eq!(
            document.maintenance_lines,
            vec!["2025-03-05 | Troca de óleo | 5100 km | Oficina Central"]
        );
    }

    #[test]
    fn test_overdue_status_line() {
        let vehicle = vehicle();
        let history = vec![MaintenanceRecord::new(4900, now() - Duration::days(30))];
        let suggestions = SuggestionEngine::default().build(&vehicle, &history, now());
        assert!(suggestions.overdue);

        let document = generate_certificate(
            &meta(),
            CertificateContext {
                vehicle: &vehicle,
                owner_name: "Maria Souza",
                maintenances: &history,
                suggestions: &suggestions,
            },
            now(),
        )
        .unwrap();

        assert!(document
            .recommendation_lines
            .contains(&"Situação: Pendente / Atrasada".to_string()));
    }
}
