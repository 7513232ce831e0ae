//! Modelos del historial de mantenimiento
//!
//! Este módulo contiene el registro histórico de servicio, el borrador que
//! produce el agregador al seleccionar intervenciones y la entrada del
//! formulario de planificación.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

/// Registro histórico de servicio
///
/// Los registros son append-only: una vez creados no se mutan nunca.
/// `type_label` es texto libre y puede ser una lista de varias
/// intervenciones separadas por coma ("Vidange, Filtre habitacle").
/// `intervention_type_ids` enlaza explícitamente con el catálogo; los
/// registros antiguos lo llevan vacío y se resuelven por heurística de
/// texto (legacy).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub garage_id: Option<Uuid>,
    pub date: NaiveDate,
    pub type_label: String,
    #[serde(default)]
    pub intervention_type_ids: Vec<Uuid>,
    pub cost: Decimal,
    pub description: String,
    pub odometer_at_service: Option<i64>,
}

/// Borrador de registro producido por la selección de intervenciones
///
/// El agregador lo construye sin mutar nada; confirmarlo (asignar id y
/// anexarlo al historial) es trabajo del propietario de las colecciones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceRecordDraft {
    pub vehicle_id: Uuid,
    pub garage_id: Option<Uuid>,
    pub date: NaiveDate,
    pub type_label: String,
    pub intervention_type_ids: Vec<Uuid>,
    pub cost: Decimal,
    pub description: String,
    pub odometer_at_service: i64,
}

/// Entrada del formulario de planificación (argumento `extra` de draft_record)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordDraftInput {
    pub date: NaiveDate,
    pub garage_id: Option<Uuid>,
    pub cost: Decimal,
    /// Kilometraje al momento del servicio; por defecto la lectura actual
    /// del vehículo
    #[validate(range(min = 0))]
    pub odometer: Option<i64>,
    #[validate(length(max = 500))]
    pub notes: String,
}
