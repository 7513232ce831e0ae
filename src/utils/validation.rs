//! Validación de entradas
//!
//! Helpers de validación en la frontera del motor. Las fechas malformadas
//! fallan rápido; el motor nunca sustituye valores por defecto para
//! entradas obligatorias malformadas.

use chrono::NaiveDate;

use crate::utils::errors::{EngineError, EngineResult};

/// Parsea una fecha estricta en formato ISO (YYYY-MM-DD)
pub fn parse_date(raw: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| EngineError::InvalidDate(raw.to_string()))
}
