//! Modelo del resultado de evaluación de vencimiento
//!
//! `DueStatusResult` es el único dato que el motor posee: se recalcula en
//! cada pasada y nunca se cachea, porque depende de "hoy" y del
//! kilometraje vigente del vehículo.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use uuid::Uuid;

/// Nivel de vencimiento de una intervención
///
/// El orden de severidad es `Ok < DueSoon < Overdue`; la combinación de
/// los dos ejes (km y tiempo) toma siempre el máximo.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DueTier {
    Ok,
    DueSoon,
    Overdue,
}

impl DueTier {
    /// Rango numérico para ordenar: overdue 3, due_soon 2, ok 1.
    /// Derivado del tier, nunca almacenado como estado independiente.
    pub fn priority(&self) -> u8 {
        match self {
            DueTier::Overdue => 3,
            DueTier::DueSoon => 2,
            DueTier::Ok => 1,
        }
    }

    pub fn is_due(&self) -> bool {
        matches!(self, DueTier::Overdue | DueTier::DueSoon)
    }
}

/// Último servicio resuelto desde el historial
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LastService {
    pub record_id: Uuid,
    pub date: NaiveDate,
    pub odometer: Option<i64>,
}

/// Resultado de evaluar un par (vehículo, tipo de intervención)
///
/// Los intervalos evaluados se copian en el resultado para que el tier sea
/// derivable solo de los valores almacenados (regla del 10 % incluida),
/// sin estado oculto. Convención de signo: un resto no positivo significa
/// "vencido por esa magnitud"; positivo, "vence en X".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DueStatusResult {
    pub vehicle_id: Uuid,
    pub intervention_type_id: Uuid,
    pub last_service: Option<LastService>,
    pub distance_interval_km: Option<i64>,
    pub time_interval_months: Option<u32>,
    pub distance_remaining_km: Option<i64>,
    pub days_remaining: Option<i64>,
    pub tier: DueTier,
}

impl DueStatusResult {
    pub fn priority(&self) -> u8 {
        self.tier.priority()
    }

    pub fn is_due(&self) -> bool {
        self.tier.is_due()
    }
}
