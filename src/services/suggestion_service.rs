//! Motor de sugerencias de mantenimiento preventivo
//!
//! Cálculo puro y determinista: a partir del perfil del vehículo, su tasa de
//! uso mensual y el historial de servicios (ordenado por fecha ascendente)
//! estima el odómetro actual, elige el próximo hito del calendario y proyecta
//! su fecha. No hace I/O ni lee el reloj: `now` siempre lo inyecta quien llama.
//!
//! Un "mes" es un intervalo fijo de 30 días, tanto para extrapolar el odómetro
//! como para proyectar la fecha del próximo servicio.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::config::environment::{EnvironmentConfig, DEFAULT_AVERAGE_MONTHLY_KM};
use crate::config::profiles::{get_profile, Milestone};
use crate::models::{MaintenanceRecord, SuggestionSummary, UpcomingMilestone, Vehicle};

/// Duración fija de un mes en milisegundos (30 días)
pub const MONTH_IN_MS: f64 = 1000.0 * 60.0 * 60.0 * 24.0 * 30.0;

/// Última lectura real conocida del odómetro
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Baseline {
    pub odometer: u64,
    pub recorded_at: DateTime<Utc>,
}

impl Baseline {
    /// El último servicio si existe; si no, el odómetro inicial del vehículo.
    pub fn resolve(vehicle: &Vehicle, latest: Option<&MaintenanceRecord>) -> Self {
        match latest {
            Some(record) => Self {
                odometer: record.odometer,
                recorded_at: record.service_date,
            },
            None => Self {
                odometer: vehicle.initial_odometer,
                recorded_at: vehicle.created_at,
            },
        }
    }

    /// Extrapolar la lectura hasta `now` con la tasa mensual dada
    pub fn extrapolate(&self, monthly_km: f64, now: DateTime<Utc>) -> f64 {
        let elapsed_ms = (now - self.recorded_at).num_milliseconds() as f64;
        let elapsed_months = elapsed_ms / MONTH_IN_MS;
        self.odometer as f64 + elapsed_months * monthly_km
    }
}

/// Primer hito cuyo `km_mark` supera la lectura base.
///
/// Si todos los hitos ya fueron superados se devuelve el último: el motor
/// sigue recomendando el hito final indefinidamente.
///
/// # Panics
///
/// Si `schedule` está vacío. Los perfiles del catálogo nunca lo están.
pub fn select_next_milestone(schedule: &[Milestone], baseline_odometer: u64) -> &Milestone {
    schedule
        .iter()
        .find(|milestone| milestone.km_mark > baseline_odometer)
        .unwrap_or_else(|| &schedule[schedule.len() - 1])
}

/// Fecha estimada en la que el vehículo alcanzará `target_km`.
///
/// Si el objetivo ya se alcanzó en la lectura base, la fecha es la de la base.
/// Devuelve `None` cuando la proyección no es representable (tasa no positiva
/// o fecha fuera de rango).
pub fn project_due_date(
    baseline_time: DateTime<Utc>,
    baseline_odometer: u64,
    monthly_km: f64,
    target_km: u64,
) -> Option<DateTime<Utc>> {
    let km_gap = target_km as f64 - baseline_odometer as f64;
    if km_gap <= 0.0 {
        return Some(baseline_time);
    }
    if !(monthly_km.is_finite() && monthly_km > 0.0) {
        return None;
    }

    let offset_ms = (km_gap / monthly_km * MONTH_IN_MS).trunc();
    if !offset_ms.is_finite() || offset_ms >= i64::MAX as f64 {
        return None;
    }

    let offset = Duration::try_milliseconds(offset_ms as i64)?;
    baseline_time.checked_add_signed(offset)
}

/// Redondeo con empates hacia arriba
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn to_checklist(milestone: &Milestone) -> Vec<String> {
    milestone.items.iter().map(|item| item.to_string()).collect()
}

/// Motor de sugerencias
///
/// Sólo guarda la tasa mensual global usada cuando el vehículo no declara
/// una positiva. Es `Copy` y puede compartirse libremente entre tareas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestionEngine {
    default_monthly_km: f64,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self {
            default_monthly_km: DEFAULT_AVERAGE_MONTHLY_KM,
        }
    }
}

impl SuggestionEngine {
    /// Crear el motor con una tasa global; una tasa no positiva se sustituye por la de fábrica.
    pub fn new(default_monthly_km: f64) -> Self {
        if default_monthly_km.is_finite() && default_monthly_km > 0.0 {
            Self { default_monthly_km }
        } else {
            Self::default()
        }
    }

    pub fn from_config(config: &EnvironmentConfig) -> Self {
        Self::new(config.average_monthly_km)
    }

    pub fn default_monthly_km(&self) -> f64 {
        self.default_monthly_km
    }

    /// Tasa mensual a usar para el vehículo, siempre positiva
    pub fn monthly_km_for(&self, vehicle: &Vehicle) -> f64 {
        vehicle
            .average_monthly_km
            .filter(|km| km.is_finite() && *km > 0.0)
            .unwrap_or(self.default_monthly_km)
    }

    /// Odómetro estimado a fecha `now`, sin redondear
    pub fn estimate_current_km(
        &self,
        vehicle: &Vehicle,
        latest: Option<&MaintenanceRecord>,
        now: DateTime<Utc>,
    ) -> f64 {
        Baseline::resolve(vehicle, latest).extrapolate(self.monthly_km_for(vehicle), now)
    }

    /// Construir el resumen completo de sugerencias.
    ///
    /// `maintenances` debe venir ordenado por `service_date` ascendente; el
    /// último elemento se toma como el dato más reciente.
    pub fn build(
        &self,
        vehicle: &Vehicle,
        maintenances: &[MaintenanceRecord],
        now: DateTime<Utc>,
    ) -> SuggestionSummary {
        let schedule = get_profile(vehicle.category);
        let monthly_km = self.monthly_km_for(vehicle);
        let baseline = Baseline::resolve(vehicle, maintenances.last());
        let estimated_km = baseline.extrapolate(monthly_km, now);

        // La selección usa la lectura base; los flags de `upcoming` usan la estimación.
        let next = select_next_milestone(schedule, baseline.odometer);
        let km_to_next = round_half_up((next.km_mark as f64 - estimated_km).max(0.0)) as u64;
        let overdue = km_to_next == 0;
        let estimated_due_date =
            project_due_date(baseline.recorded_at, baseline.odometer, monthly_km, next.km_mark);

        let upcoming = schedule
            .iter()
            .map(|milestone| UpcomingMilestone {
                km_mark: milestone.km_mark,
                checklist: to_checklist(milestone),
                overdue: estimated_km >= milestone.km_mark as f64,
            })
            .collect();

        debug!(
            "🔧 Sugerencia {}: base {} km, estimado {:.1} km, próximo {} km (faltan {}, atrasado: {})",
            vehicle.category, baseline.odometer, estimated_km, next.km_mark, km_to_next, overdue
        );

        SuggestionSummary {
            estimated_current_km: round_half_up(estimated_km) as i64,
            monthly_average_km: vehicle.average_monthly_km,
            next_maintenance_km: next.km_mark,
            km_to_next,
            overdue,
            estimated_due_date,
            checklist: to_checklist(next),
            upcoming,
        }
    }
}
