//! Resolución del historial de servicio
//!
//! Este módulo localiza, para un par (vehículo, tipo de intervención), el
//! registro histórico más reciente que corresponde a ese tipo. La vía
//! preferida es el enlace explícito registro → catálogo; los registros
//! antiguos sin enlace se resuelven con la heurística de texto heredada.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::intervention::InterventionType;
use crate::models::maintenance::MaintenanceRecord;
use uuid::Uuid;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Normaliza una etiqueta libre para comparación: minúsculas y espacios
/// colapsados
fn normalize_label(label: &str) -> String {
    WHITESPACE
        .replace_all(label.trim(), " ")
        .to_lowercase()
}

/// Heurística de texto heredada, unificada en una sola regla fija:
/// la etiqueta del registro contiene, sin distinguir mayúsculas, el PRIMER
/// token de la descripción del tipo. Solo se aplica a registros sin
/// enlaces explícitos al catálogo.
fn label_matches(record_label: &str, type_description: &str) -> bool {
    let description = normalize_label(type_description);
    let Some(first_token) = description.split(' ').next().filter(|t| !t.is_empty()) else {
        return false;
    };
    normalize_label(record_label).contains(first_token)
}

fn record_matches(record: &MaintenanceRecord, intervention: &InterventionType) -> bool {
    if !record.intervention_type_ids.is_empty() {
        // Los enlaces explícitos son autoritativos: sin fallback de texto
        return record.intervention_type_ids.contains(&intervention.id);
    }
    label_matches(&record.type_label, &intervention.description)
}

/// Devuelve el registro más reciente del vehículo que corresponde al tipo
/// de intervención, o `None` si nunca se efectuó.
///
/// Empates de fecha se rompen de forma determinista por id de registro más
/// alto. Lectura pura: la ausencia de match es un resultado válido, no un
/// error.
pub fn resolve_last_service<'a>(
    vehicle_id: Uuid,
    intervention: &InterventionType,
    records: &'a [MaintenanceRecord],
) -> Option<&'a MaintenanceRecord> {
    records
        .iter()
        .filter(|record| record.vehicle_id == vehicle_id)
        .filter(|record| record_matches(record, intervention))
        .max_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)))
}
