//! Alertas de visita técnica
//!
//! Alerta aparte del motor de intervalos: umbral fijo de 30 días sobre la
//! fecha de la próxima visita técnica del vehículo. Nunca se combina con
//! los tiers de mantenimiento preventivo.

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::models::vehicle::Vehicle;

/// Alerta de visita técnica próxima
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionAlert {
    pub vehicle_id: Uuid,
    pub inspection_date: NaiveDate,
    pub days_until_inspection: i64,
}

/// Vehículos activos con visita técnica dentro de la ventana
///
/// Una visita ya pasada no genera alerta aquí: la ventana es 0..=N días.
pub fn inspection_alerts(
    vehicles: &[Vehicle],
    today: NaiveDate,
    config: &EngineConfig,
) -> Vec<InspectionAlert> {
    let alerts: Vec<InspectionAlert> = vehicles
        .iter()
        .filter(|vehicle| vehicle.is_active())
        .filter_map(|vehicle| {
            let days = (vehicle.next_technical_inspection - today).num_days();
            if (0..=config.inspection_window_days).contains(&days) {
                Some(InspectionAlert {
                    vehicle_id: vehicle.id,
                    inspection_date: vehicle.next_technical_inspection,
                    days_until_inspection: days,
                })
            } else {
                None
            }
        })
        .collect();

    if !alerts.is_empty() {
        info!("🚨 {} vehículos con visita técnica próxima", alerts.len());
    }
    alerts
}
