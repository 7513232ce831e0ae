//! DTO de resultados de vencimiento
//!
//! Fila de presentación para las tablas de alertas y de planificación.

use serde::Serialize;

use crate::dto::format_thousands;
use crate::models::due_status::{DueStatusResult, DueTier};
use crate::models::intervention::InterventionType;
use crate::models::vehicle::Vehicle;

/// Fila lista para mostrar de un resultado de evaluación
#[derive(Debug, Clone, Serialize)]
pub struct DueStatusView {
    pub vehicle_name: String,
    pub current_km: String,
    pub description: String,
    pub category: String,
    pub interval_label: String,
    pub last_service_label: String,
    pub next_due_label: String,
    pub status_label: String,
    pub priority: u8,
}

impl DueStatusView {
    pub fn new(result: &DueStatusResult, vehicle: &Vehicle, intervention: &InterventionType) -> Self {
        Self {
            vehicle_name: vehicle.display_name(),
            current_km: format!("{} km", format_thousands(vehicle.odometer)),
            description: intervention.description.clone(),
            category: intervention.category.clone(),
            interval_label: intervention.format_interval(),
            last_service_label: format_last_service(result),
            next_due_label: format_next_due(result),
            status_label: status_label(result.tier).to_string(),
            priority: result.priority(),
        }
    }
}

/// Etiqueta del estado: los badges del tablero
pub fn status_label(tier: DueTier) -> &'static str {
    match tier {
        DueTier::Overdue => "En retard",
        DueTier::DueSoon => "Bientôt",
        DueTier::Ok => "OK",
    }
}

/// Echéance legible: "dans 500 km", "500 km de retard", "dans 12 jours",
/// "3 jours de retard"; " ou " cuando los dos ejes están presentes
pub fn format_next_due(result: &DueStatusResult) -> String {
    let mut parts = Vec::new();

    if let Some(km) = result.distance_remaining_km {
        if km <= 0 {
            parts.push(format!("{} km de retard", format_thousands(km.abs())));
        } else {
            parts.push(format!("dans {} km", format_thousands(km)));
        }
    }

    if let Some(days) = result.days_remaining {
        if days <= 0 {
            let late = days.abs();
            parts.push(format!("{} jour{} de retard", late, if late > 1 { "s" } else { "" }));
        } else {
            parts.push(format!("dans {} jour{}", days, if days > 1 { "s" } else { "" }));
        }
    }

    parts.join(" ou ")
}

fn format_last_service(result: &DueStatusResult) -> String {
    match &result.last_service {
        Some(service) => {
            let date = service.date.format("%d/%m/%Y").to_string();
            match service.odometer {
                Some(km) => format!("{} ({} km)", date, format_thousands(km)),
                None => date,
            }
        }
        None => "Jamais effectuée".to_string(),
    }
}
