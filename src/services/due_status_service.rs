//! Evaluación de vencimiento
//!
//! Este módulo calcula el `DueStatusResult` de un par (vehículo, tipo de
//! intervención): dos sub-evaluaciones independientes (kilometraje y
//! tiempo) combinadas por severidad máxima. Función pura: "hoy" se inyecta
//! siempre, nunca se lee el reloj del sistema dentro del motor.

use chrono::{Months, NaiveDate};

use crate::config::EngineConfig;
use crate::models::due_status::{DueStatusResult, DueTier, LastService};
use crate::models::intervention::InterventionType;
use crate::models::maintenance::MaintenanceRecord;
use crate::models::vehicle::Vehicle;
use crate::services::history_resolver::resolve_last_service;

/// Sub-evaluación por kilometraje
///
/// Línea base: el kilometraje del último servicio si existe y lo registró,
/// si no 0. Un kilometraje actual inferior a la línea base (datos fuera de
/// orden) se calcula igual; avisar es trabajo de la capa de datos.
fn evaluate_distance(
    interval_km: i64,
    current_odometer: i64,
    last_service: Option<&LastService>,
    config: &EngineConfig,
) -> (i64, DueTier) {
    let baseline = last_service.and_then(|s| s.odometer).unwrap_or(0);
    let since_last = current_odometer - baseline;
    let remaining = interval_km - since_last;

    let tier = if remaining <= 0 {
        DueTier::Overdue
    } else if (remaining as f64) <= (interval_km as f64) * config.due_soon_distance_ratio {
        DueTier::DueSoon
    } else {
        DueTier::Ok
    };
    (remaining, tier)
}

/// Sub-evaluación por tiempo
///
/// Línea base: la fecha del último servicio si existe, si no la fecha del
/// último mantenimiento del vehículo. La suma de meses es aritmética de
/// calendario con día ajustado (31 ene + 1 mes = 28/29 feb).
fn evaluate_time(
    interval_months: u32,
    vehicle: &Vehicle,
    last_service: Option<&LastService>,
    today: NaiveDate,
    config: &EngineConfig,
) -> (i64, DueTier) {
    let baseline = last_service
        .map(|s| s.date)
        .unwrap_or(vehicle.last_maintenance);
    let next_due = baseline
        .checked_add_months(Months::new(interval_months))
        .unwrap_or(NaiveDate::MAX);
    let days_remaining = (next_due - today).num_days();

    let tier = if days_remaining <= 0 {
        DueTier::Overdue
    } else if days_remaining <= config.due_soon_window_days {
        DueTier::DueSoon
    } else {
        DueTier::Ok
    };
    (days_remaining, tier)
}

/// Evalúa un par (vehículo, tipo de intervención) contra el historial
///
/// Cuando los dos intervalos están definidos gana el sub-tier más
/// restrictivo; con uno solo, ese sub-tier es el tier global. Sin ninguno,
/// el resultado es "ok" con restos `None` (entrada no planificable).
/// Idempotente y sin efectos: se recalcula en cada pasada.
pub fn evaluate(
    vehicle: &Vehicle,
    intervention: &InterventionType,
    records: &[MaintenanceRecord],
    today: NaiveDate,
    config: &EngineConfig,
) -> DueStatusResult {
    let last_service = resolve_last_service(vehicle.id, intervention, records).map(|record| {
        LastService {
            record_id: record.id,
            date: record.date,
            odometer: record.odometer_at_service,
        }
    });

    let mut distance_remaining_km = None;
    let mut days_remaining = None;
    let mut tier = DueTier::Ok;

    if let Some(interval_km) = intervention.distance_interval_km {
        let (remaining, sub_tier) =
            evaluate_distance(interval_km, vehicle.odometer, last_service.as_ref(), config);
        distance_remaining_km = Some(remaining);
        tier = tier.max(sub_tier);
    }

    if let Some(interval_months) = intervention.time_interval_months {
        let (remaining, sub_tier) =
            evaluate_time(interval_months, vehicle, last_service.as_ref(), today, config);
        days_remaining = Some(remaining);
        tier = tier.max(sub_tier);
    }

    DueStatusResult {
        vehicle_id: vehicle.id,
        intervention_type_id: intervention.id,
        last_service,
        distance_interval_km: intervention.distance_interval_km,
        time_interval_months: intervention.time_interval_months,
        distance_remaining_km,
        days_remaining,
        tier,
    }
}
