//! Estado en memoria del parque
//!
//! Este módulo contiene las colecciones volátiles de la aplicación
//! monousuario: vehículos, catálogo e historial. El motor en sí es puro;
//! aquí vive la única mutación del sistema (anexar registros y refrescar
//! el vehículo hacia adelante).

use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::models::intervention::InterventionType;
use crate::models::maintenance::{MaintenanceRecord, MaintenanceRecordDraft};
use crate::models::vehicle::Vehicle;
use crate::models::due_status::DueStatusResult;
use crate::services::fleet_sweep_service::{plan_vehicle, FleetDueReport};
use crate::services::inspection_alert_service::{inspection_alerts, InspectionAlert};
use crate::utils::errors::{vehicle_not_found, DataQualityWarning, EngineResult};

/// Colecciones del parque y umbrales del motor
#[derive(Debug, Clone, Default)]
pub struct FleetStore {
    vehicles: Vec<Vehicle>,
    catalog: Vec<InterventionType>,
    records: Vec<MaintenanceRecord>,
    config: EngineConfig,
}

impl FleetStore {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            vehicles: Vec::new(),
            catalog: Vec::new(),
            records: Vec::new(),
            config,
        }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn catalog(&self) -> &[InterventionType] {
        &self.catalog
    }

    pub fn records(&self) -> &[MaintenanceRecord] {
        &self.records
    }

    pub fn insert_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    pub fn insert_intervention_type(&mut self, intervention: InterventionType) {
        self.catalog.push(intervention);
    }

    pub fn vehicle(&self, vehicle_id: Uuid) -> EngineResult<&Vehicle> {
        self.vehicles
            .iter()
            .find(|vehicle| vehicle.id == vehicle_id)
            .ok_or_else(|| vehicle_not_found(vehicle_id))
    }

    /// Anexa un registro al historial y refresca el vehículo hacia adelante
    ///
    /// El odómetro del vehículo solo sube: si el registro trae una lectura
    /// inferior se anexa igual (avisar, no bloquear) y la lectura vigente
    /// no cambia. `last_maintenance` avanza a la fecha del registro cuando
    /// el registro trae kilometraje.
    pub fn add_record(
        &mut self,
        record: MaintenanceRecord,
    ) -> EngineResult<Vec<DataQualityWarning>> {
        let vehicle = self
            .vehicles
            .iter_mut()
            .find(|vehicle| vehicle.id == record.vehicle_id)
            .ok_or_else(|| vehicle_not_found(record.vehicle_id))?;

        let mut warnings = Vec::new();
        if let Some(recorded) = record.odometer_at_service {
            if recorded > vehicle.odometer {
                vehicle.odometer = recorded;
            } else if recorded < vehicle.odometer {
                warn!(
                    "⚠️ Kilometraje de servicio inferior al actual para {}: {} < {}",
                    vehicle.display_name(),
                    recorded,
                    vehicle.odometer
                );
                warnings.push(DataQualityWarning::OdometerRegression {
                    vehicle_id: vehicle.id,
                    current_odometer: vehicle.odometer,
                    recorded_odometer: recorded,
                    date: record.date,
                });
            }
            vehicle.last_maintenance = record.date;
        }

        info!(
            "📝 Registro anexado para {}: {}",
            vehicle.display_name(),
            record.type_label
        );
        self.records.push(record);
        Ok(warnings)
    }

    /// Confirma un borrador: asigna id, anexa y refresca
    pub fn commit_draft(
        &mut self,
        draft: MaintenanceRecordDraft,
    ) -> EngineResult<(Uuid, Vec<DataQualityWarning>)> {
        let record = MaintenanceRecord {
            id: Uuid::new_v4(),
            vehicle_id: draft.vehicle_id,
            garage_id: draft.garage_id,
            date: draft.date,
            type_label: draft.type_label,
            intervention_type_ids: draft.intervention_type_ids,
            cost: draft.cost,
            description: draft.description,
            odometer_at_service: Some(draft.odometer_at_service),
        };
        let record_id = record.id;
        let warnings = self.add_record(record)?;
        Ok((record_id, warnings))
    }

    /// Vista de planificación de un vehículo por id; id desconocido falla
    /// rápido
    pub fn plan_for_vehicle(
        &self,
        vehicle_id: Uuid,
        today: NaiveDate,
    ) -> EngineResult<Vec<DueStatusResult>> {
        let vehicle = self.vehicle(vehicle_id)?;
        Ok(plan_vehicle(
            vehicle,
            &self.catalog,
            &self.records,
            today,
            &self.config,
        ))
    }

    /// Reporte de flota agrupado por estado
    pub fn fleet_report(&self, today: NaiveDate) -> FleetDueReport {
        FleetDueReport::build(
            &self.vehicles,
            &self.catalog,
            &self.records,
            today,
            &self.config,
        )
    }

    /// Alertas de visita técnica de la flota
    pub fn vehicle_alerts(&self, today: NaiveDate) -> Vec<InspectionAlert> {
        inspection_alerts(&self.vehicles, today, &self.config)
    }

    /// Entradas del catálogo sin ningún intervalo definido
    pub fn audit_catalog(&self) -> Vec<DataQualityWarning> {
        self.catalog
            .iter()
            .filter(|intervention| !intervention.is_schedulable())
            .map(|intervention| DataQualityWarning::UnschedulableType {
                intervention_type_id: intervention.id,
                description: intervention.description.clone(),
            })
            .collect()
    }
}
