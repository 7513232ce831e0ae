//! Configuración del motor
//!
//! Este módulo contiene los umbrales de evaluación. Los valores por
//! defecto son los del sistema: 10 % del intervalo de kilometraje y
//! ventana de 30 días para "bientôt", 30 días para la alerta de visita
//! técnica.

use serde::{Deserialize, Serialize};

/// Umbrales del motor de mantenimiento
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Fracción del intervalo de km dentro de la cual una intervención
    /// pasa a "due_soon" (0.10 = último 10 %)
    pub due_soon_distance_ratio: f64,
    /// Días restantes dentro de los cuales el eje tiempo pasa a "due_soon"
    pub due_soon_window_days: i64,
    /// Ventana en días de la alerta de visita técnica
    pub inspection_window_days: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            due_soon_distance_ratio: 0.10,
            due_soon_window_days: 30,
            inspection_window_days: 30,
        }
    }
}
