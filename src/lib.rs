//! Motor de mantenimiento preventivo del parque
//!
//! Decide, para cada vehículo y cada tipo de intervención del catálogo, si
//! la intervención está vencida, próxima a vencer o al día, combinando un
//! intervalo por kilometraje y un intervalo por calendario contra el
//! historial del vehículo. Todas las evaluaciones son puras: el llamador
//! inyecta "hoy" y un snapshot consistente de las colecciones.

pub mod config;
pub mod dto;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

pub use config::EngineConfig;
pub use models::due_status::{DueStatusResult, DueTier, LastService};
pub use models::intervention::InterventionType;
pub use models::maintenance::{MaintenanceRecord, MaintenanceRecordDraft, RecordDraftInput};
pub use models::vehicle::{Vehicle, VehicleStatus};
pub use services::due_status_service::evaluate;
pub use services::fleet_sweep_service::{
    draft_record, plan_vehicle, sweep_fleet, sweep_fleet_all, sweep_vehicle, FleetDueReport,
};
pub use services::history_resolver::resolve_last_service;
pub use services::inspection_alert_service::{inspection_alerts, InspectionAlert};
pub use state::FleetStore;
pub use utils::errors::{DataQualityWarning, EngineError, EngineResult};
