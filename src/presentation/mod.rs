//! Presentación y notificaciones
//!
//! El view-model no toca la pantalla: publica eventos de UI por este sink y
//! el shell anfitrión decide cómo renderizarlos (toasts, overlay de carga,
//! modal de confirmación). El render es un suscriptor, no una llamada
//! embebida en la lógica de negocio.

use serde::{Deserialize, Serialize};

pub mod console_sink;

pub use console_sink::{ConsoleSink, RecordingSink};

/// Eventos de UI que emite el view-model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    LoadingStarted,
    LoadingEnded,
    Success { message: String },
    Error { message: String },
    /// Pide al shell el prompt de confirmación de borrado, con la etiqueta
    /// "año marca modelo" del vehículo objetivo
    ConfirmationRequested { label: String },
}

/// Sink de presentación - consume los eventos del view-model
pub trait PresentationSink: Send + Sync {
    fn emit(&self, event: UiEvent);
}
