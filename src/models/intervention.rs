//! Modelo de InterventionType
//!
//! Catálogo de tipos de intervención preventiva: cada entrada define un
//! intervalo por kilometraje y/o un intervalo por tiempo. El catálogo lo
//! administra el colaborador externo; el motor solo lo lee.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tipo de intervención del catálogo
///
/// `distance_interval_km` y `time_interval_months` son opcionales pero al
/// menos uno debería estar presente para que la entrada sea planificable.
/// Una entrada sin ninguno queda permanentemente "ok" bajo el modelo de
/// intervalos y se señala como dato de mala calidad.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterventionType {
    pub id: Uuid,
    /// Descripción libre, p. ej. "MO VIDANGE MOTEUR+FILTRE A HUILE + FILTRE A AIR"
    pub description: String,
    pub category: String,
    pub distance_interval_km: Option<i64>,
    pub time_interval_months: Option<u32>,
}

impl InterventionType {
    /// Una entrada es planificable si define al menos un intervalo
    pub fn is_schedulable(&self) -> bool {
        self.distance_interval_km.is_some() || self.time_interval_months.is_some()
    }

    /// Etiqueta humana del intervalo: "60 000 km ou 4 ans"
    pub fn format_interval(&self) -> String {
        let mut parts = Vec::new();
        if let Some(km) = self.distance_interval_km {
            parts.push(format!("{} km", crate::dto::format_thousands(km)));
        }
        if let Some(months) = self.time_interval_months {
            let years = months / 12;
            let rest = months % 12;
            if years > 0 {
                parts.push(format!("{} an{}", years, if years > 1 { "s" } else { "" }));
            }
            if rest > 0 {
                parts.push(format!("{} mois", rest));
            }
        }
        parts.join(" ou ")
    }
}
