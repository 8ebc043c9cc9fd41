//! Sinks de presentación
//!
//! ConsoleSink traduce los eventos de UI a líneas de log, el equivalente de
//! los toasts del panel web. RecordingSink acumula los eventos para poder
//! afirmar sobre ellos en tests.

use std::sync::Mutex;

use tracing::{error, info, warn};

use super::{PresentationSink, UiEvent};

/// Sink que muestra los eventos como logs estructurados
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl PresentationSink for ConsoleSink {
    fn emit(&self, event: UiEvent) {
        match event {
            UiEvent::LoadingStarted => info!("🔄 Cargando..."),
            UiEvent::LoadingEnded => info!("✅ Carga finalizada"),
            UiEvent::Success { message } => info!("✅ {}", message),
            UiEvent::Error { message } => error!("🚨 {}", message),
            UiEvent::ConfirmationRequested { label } => {
                warn!("🗑️ Confirmar eliminación de: {}", label)
            }
        }
    }
}

/// Sink que graba los eventos emitidos
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<UiEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copia de los eventos emitidos hasta ahora, en orden
    pub fn events(&self) -> Vec<UiEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl PresentationSink for RecordingSink {
    fn emit(&self, event: UiEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_preserves_order() {
        let sink = RecordingSink::new();
        sink.emit(UiEvent::LoadingStarted);
        sink.emit(UiEvent::Success {
            message: "Vehicle added successfully!".to_string(),
        });
        sink.emit(UiEvent::LoadingEnded);

        let events = sink.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], UiEvent::LoadingStarted);
        assert_eq!(events[2], UiEvent::LoadingEnded);
    }

    #[test]
    fn test_ui_event_serializes_with_tag() {
        let event = UiEvent::ConfirmationRequested {
            label: "2024 Tesla Model S".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "confirmation_requested");
        assert_eq!(json["label"], "2024 Tesla Model S");
    }
}
