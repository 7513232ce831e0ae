//! Sistema de manejo de errores
//!
//! Este módulo define los errores del motor y las señales de calidad de
//! datos. El motor no tiene taxonomía de errores recuperables: los fallos
//! aquí son mal uso estructural y fallan rápido con mensaje descriptivo.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// Errores del motor de mantenimiento
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Vehicle with id '{0}' not found in the supplied snapshot")]
    VehicleNotFound(Uuid),

    #[error("Intervention type with id '{0}' not found in the catalog")]
    UnknownInterventionType(Uuid),

    #[error("Selection is empty: at least one intervention is required to draft a record")]
    EmptySelection,

    #[error("Invalid date '{0}': expected format YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Resultado tipado para operaciones del motor
pub type EngineResult<T> = Result<T, EngineError>;

/// Señales de calidad de datos
///
/// No son errores: el motor las devuelve junto al resultado para que el
/// llamador las muestre como advertencias. Avisar, nunca bloquear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataQualityWarning {
    /// Kilometraje de servicio inferior a la lectura actual del vehículo
    OdometerRegression {
        vehicle_id: Uuid,
        current_odometer: i64,
        recorded_odometer: i64,
        date: NaiveDate,
    },
    /// Entrada del catálogo sin ningún intervalo definido: queda
    /// permanentemente "ok"
    UnschedulableType {
        intervention_type_id: Uuid,
        description: String,
    },
}

/// Función helper para crear errores de vehículo no encontrado
pub fn vehicle_not_found(id: Uuid) -> EngineError {
    EngineError::VehicleNotFound(id)
}

/// Función helper para crear errores de tipo desconocido
pub fn unknown_intervention_type(id: Uuid) -> EngineError {
    EngineError::UnknownInterventionType(id)
}
