//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle del parque y su estado
//! operacional. El motor de mantenimiento solo lee estos datos.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use uuid::Uuid;

/// Estado operacional del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleStatus {
    Active,
    OutOfService,
}

/// Vehículo del parque
///
/// `odometer` es la lectura actual en km: no negativa y monótonamente
/// creciente durante la vida del vehículo en operación normal.
/// `last_maintenance` sirve de fecha de referencia cuando una intervención
/// nunca aparece en el historial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub driver_id: Option<Uuid>,
    pub odometer: i64,
    pub status: VehicleStatus,
    pub out_of_service_date: Option<NaiveDate>,
    pub last_maintenance: NaiveDate,
    /// Fecha de la próxima visita técnica. Alerta aparte con umbral fijo,
    /// nunca se combina con los intervalos de mantenimiento.
    pub next_technical_inspection: NaiveDate,
}

impl Vehicle {
    pub fn is_active(&self) -> bool {
        self.status == VehicleStatus::Active
    }

    /// Nombre de presentación: "Peugeot 308 (AB-123-CD)"
    pub fn display_name(&self) -> String {
        format!("{} {} ({})", self.brand, self.model, self.license_plate)
    }
}
