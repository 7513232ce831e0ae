//! Servicios del motor
//!
//! Resolución de historial, evaluación de vencimiento, agregación de
//! flota y alertas de visita técnica.

pub mod history_resolver;
pub mod due_status_service;
pub mod fleet_sweep_service;
pub mod inspection_alert_service;
