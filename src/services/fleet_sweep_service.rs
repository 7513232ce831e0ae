//! Agregación de flota
//!
//! Este módulo corre el evaluador sobre el producto vehículos activos ×
//! catálogo y produce las vistas consumidas por alertas y planificación:
//! barrido de flota, vista de planificación por vehículo y construcción
//! del borrador de registro a partir de una selección.

use chrono::NaiveDate;
use tracing::info;

use crate::config::EngineConfig;
use crate::models::due_status::{DueStatusResult, DueTier};
use crate::models::intervention::InterventionType;
use crate::models::maintenance::{MaintenanceRecord, MaintenanceRecordDraft, RecordDraftInput};
use crate::models::vehicle::Vehicle;
use crate::services::due_status_service::evaluate;
use crate::utils::errors::{unknown_intervention_type, EngineError, EngineResult};
use validator::Validate;

/// Barrido de flota completo, tier "ok" incluido
///
/// Los vehículos fuera de servicio se saltan por completo. El orden de
/// salida sigue el orden de entrada (vehículos, luego catálogo).
pub fn sweep_fleet_all(
    vehicles: &[Vehicle],
    catalog: &[InterventionType],
    records: &[MaintenanceRecord],
    today: NaiveDate,
    config: &EngineConfig,
) -> Vec<DueStatusResult> {
    let results: Vec<DueStatusResult> = vehicles
        .iter()
        .filter(|vehicle| vehicle.is_active())
        .flat_map(|vehicle| {
            catalog
                .iter()
                .map(move |intervention| evaluate(vehicle, intervention, records, today, config))
        })
        .collect();

    info!(
        "🔄 Barrido de flota: {} vehículos activos × {} tipos = {} resultados",
        vehicles.iter().filter(|v| v.is_active()).count(),
        catalog.len(),
        results.len()
    );
    results
}

/// Barrido de flota para alertas: solo "overdue" y "due_soon"
pub fn sweep_fleet(
    vehicles: &[Vehicle],
    catalog: &[InterventionType],
    records: &[MaintenanceRecord],
    today: NaiveDate,
    config: &EngineConfig,
) -> Vec<DueStatusResult> {
    let mut results = sweep_fleet_all(vehicles, catalog, records, today, config);
    results.retain(|result| result.is_due());
    info!("⚠️ {} intervenciones dues en la flota", results.len());
    results
}

/// Vista agrupada por estado: las tres pestañas del tablero
#[derive(Debug, Clone, Default)]
pub struct FleetDueReport {
    pub overdue: Vec<DueStatusResult>,
    pub due_soon: Vec<DueStatusResult>,
    /// Planificadas pero aún no dues; se conservan por visibilidad
    pub upcoming: Vec<DueStatusResult>,
}

impl FleetDueReport {
    pub fn build(
        vehicles: &[Vehicle],
        catalog: &[InterventionType],
        records: &[MaintenanceRecord],
        today: NaiveDate,
        config: &EngineConfig,
    ) -> Self {
        let mut report = Self::default();
        for result in sweep_fleet_all(vehicles, catalog, records, today, config) {
            match result.tier {
                DueTier::Overdue => report.overdue.push(result),
                DueTier::DueSoon => report.due_soon.push(result),
                DueTier::Ok => report.upcoming.push(result),
            }
        }
        info!(
            "📊 Reporte de flota: {} en retard, {} bientôt, {} planificadas",
            report.overdue.len(),
            report.due_soon.len(),
            report.upcoming.len()
        );
        report
    }

    pub fn total(&self) -> usize {
        self.overdue.len() + self.due_soon.len() + self.upcoming.len()
    }
}

/// Barrido de un solo vehículo, ordenado por prioridad descendente
///
/// Empates de prioridad se rompen por id de tipo de intervención para que
/// el orden sea estable entre pasadas.
pub fn sweep_vehicle(
    vehicle: &Vehicle,
    catalog: &[InterventionType],
    records: &[MaintenanceRecord],
    today: NaiveDate,
    config: &EngineConfig,
) -> Vec<DueStatusResult> {
    let mut results: Vec<DueStatusResult> = catalog
        .iter()
        .map(|intervention| evaluate(vehicle, intervention, records, today, config))
        .collect();

    results.sort_by(|a, b| {
        b.priority()
            .cmp(&a.priority())
            .then(a.intervention_type_id.cmp(&b.intervention_type_id))
    });
    results
}

/// Vista de planificación del vehículo: solo las intervenciones dues,
/// ya ordenadas por prioridad
pub fn plan_vehicle(
    vehicle: &Vehicle,
    catalog: &[InterventionType],
    records: &[MaintenanceRecord],
    today: NaiveDate,
    config: &EngineConfig,
) -> Vec<DueStatusResult> {
    let mut results = sweep_vehicle(vehicle, catalog, records, today, config);
    results.retain(|result| result.is_due());
    info!(
        "📋 Planificación {}: {} intervenciones a planificar",
        vehicle.display_name(),
        results.len()
    );
    results
}

/// Construye el borrador de registro a partir de la selección del usuario
///
/// Función pura: junta las descripciones seleccionadas con ", ", arrastra
/// los enlaces explícitos al catálogo y toma la lectura actual del
/// vehículo como kilometraje por defecto. Confirmar el borrador es trabajo
/// del propietario de las colecciones.
pub fn draft_record(
    vehicle: &Vehicle,
    selected: &[DueStatusResult],
    catalog: &[InterventionType],
    extra: &RecordDraftInput,
) -> EngineResult<MaintenanceRecordDraft> {
    extra.validate()?;
    if selected.is_empty() {
        return Err(EngineError::EmptySelection);
    }

    let mut descriptions = Vec::with_capacity(selected.len());
    let mut type_ids = Vec::with_capacity(selected.len());
    for result in selected {
        let intervention = catalog
            .iter()
            .find(|intervention| intervention.id == result.intervention_type_id)
            .ok_or_else(|| unknown_intervention_type(result.intervention_type_id))?;
        descriptions.push(intervention.description.clone());
        type_ids.push(intervention.id);
    }

    Ok(MaintenanceRecordDraft {
        vehicle_id: vehicle.id,
        garage_id: extra.garage_id,
        date: extra.date,
        type_label: descriptions.join(", "),
        intervention_type_ids: type_ids,
        cost: extra.cost,
        description: extra.notes.clone(),
        odometer_at_service: extra.odometer.unwrap_or(vehicle.odometer),
    })
}
