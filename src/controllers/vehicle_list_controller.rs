//! Controlador del listado de vehículos
//!
//! Este es el view-model del panel: dueño de la colección autoritativa, de
//! la proyección derivada y del flujo de borrado con confirmación. Toda
//! mutación viaja por el directorio y sólo se refleja localmente después de
//! que el directorio confirme y se recargue la colección.
//!
//! Todas las operaciones mutantes toman &mut self: dos llamadas no pueden
//! estar en vuelo a la vez, que es la versión Rust de deshabilitar el botón
//! hasta que la llamada termine.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::directory::VehicleDirectory;
use crate::dto::query_dto::{SortDirection, SortKey};
use crate::dto::vehicle_dto::VehicleForm;
use crate::models::vehicle::{FleetStats, VehicleRecord};
use crate::presentation::{PresentationSink, UiEvent};
use crate::services::fleet_query_service;
use crate::utils::errors::{not_found_error, AppError, AppResult};

/// View-model del listado de vehículos
pub struct VehicleListController {
    directory: Arc<dyn VehicleDirectory>,
    sink: Arc<dyn PresentationSink>,
    /// Última foto completa devuelta por el directorio, en su orden
    vehicles: Vec<VehicleRecord>,
    /// Proyección filtrada y ordenada que ve el operador
    derived: Vec<VehicleRecord>,
    search_term: String,
    sort_key: SortKey,
    sort_direction: SortDirection,
    /// A lo sumo un borrado pendiente de confirmación
    pending_deletion: Option<String>,
}

impl VehicleListController {
    pub fn new(directory: Arc<dyn VehicleDirectory>, sink: Arc<dyn PresentationSink>) -> Self {
        Self {
            directory,
            sink,
            vehicles: Vec::new(),
            derived: Vec::new(),
            search_term: String::new(),
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
            pending_deletion: None,
        }
    }

    /// Recargar la colección autoritativa desde el directorio. Si el
    /// directorio falla, la colección anterior queda intacta y no se
    /// reintenta.
    pub async fn load(&mut self) -> AppResult<()> {
        self.sink.emit(UiEvent::LoadingStarted);

        let outcome = match self.directory.list().await {
            Ok(vehicles) => {
                debug!("📋 {} vehículos cargados", vehicles.len());
                self.vehicles = vehicles;
                self.refresh();
                Ok(())
            }
            Err(e) => {
                self.sink.emit(UiEvent::Error {
                    message: format!("Failed to load vehicles: {}", e),
                });
                Err(e)
            }
        };

        self.sink.emit(UiEvent::LoadingEnded);
        outcome
    }

    /// Guardar el término de búsqueda (en minúsculas) y recalcular la vista.
    /// Término vacío muestra todo.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_lowercase();
        self.refresh();
    }

    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.sort_key = key;
        self.sort_direction = direction;
        self.refresh();
    }

    /// Recalcular la proyección derivada. Función pura de (colección,
    /// término, orden); no toca la colección ni las estadísticas.
    pub fn refresh(&mut self) {
        self.derived = fleet_query_service::apply_view(
            &self.vehicles,
            &self.search_term,
            self.sort_key,
            self.sort_direction,
        );
    }

    /// Estadísticas de la flota completa, independientes del filtro activo
    pub fn compute_stats(&self) -> FleetStats {
        fleet_query_service::compute_stats(&self.vehicles)
    }

    /// Crear o actualizar un vehículo. Valida antes de tocar el directorio;
    /// tras una escritura confirmada recarga la colección: el estado del
    /// servidor es la fuente de verdad, sin parche optimista local.
    pub async fn create_or_update(
        &mut self,
        form: &VehicleForm,
        editing_id: Option<&str>,
    ) -> AppResult<()> {
        let fields = match form.validate_and_coerce() {
            Ok(fields) => fields,
            Err(e) => {
                self.sink.emit(UiEvent::Error {
                    message: format!("Failed to save vehicle: {}", e),
                });
                return Err(e);
            }
        };

        let result = match editing_id {
            Some(id) => self.directory.update(id, fields).await,
            None => self.directory.insert(fields).await.map(|_| ()),
        };

        match result {
            Ok(()) => {
                // La escritura ya quedó confirmada; si la recarga falla el
                // propio load() lo reporta
                if let Err(e) = self.load().await {
                    warn!("⚠️ No se pudo recargar tras guardar: {}", e);
                }

                let message = if editing_id.is_some() {
                    "Vehicle updated successfully!"
                } else {
                    "Vehicle added successfully!"
                };
                self.sink.emit(UiEvent::Success {
                    message: message.to_string(),
                });
                info!("✅ Vehículo guardado");
                Ok(())
            }
            Err(e) => {
                self.sink.emit(UiEvent::Error {
                    message: format!("Failed to save vehicle: {}", e),
                });
                Err(e)
            }
        }
    }

    /// Solicitar el borrado de un vehículo: deja el id como objetivo
    /// pendiente y pide al shell la confirmación con la etiqueta del
    /// vehículo. Falla NotFound si el id no está en la colección actual.
    pub fn request_deletion(&mut self, id: &str) -> AppResult<()> {
        let label = match self.vehicles.iter().find(|v| v.id == id) {
            Some(vehicle) => vehicle.label(),
            None => {
                self.sink.emit(UiEvent::Error {
                    message: "Vehicle not found. Try reloading the fleet list.".to_string(),
                });
                return Err(not_found_error("Vehicle", id));
            }
        };

        self.pending_deletion = Some(id.to_string());
        self.sink.emit(UiEvent::ConfirmationRequested { label });
        Ok(())
    }

    /// Cancelar el borrado pendiente sin contactar al directorio
    pub fn cancel_deletion(&mut self) {
        self.pending_deletion = None;
    }

    /// Confirmar el borrado pendiente. Si el directorio falla, el objetivo
    /// queda pendiente para poder reintentar la misma confirmación; si el
    /// objetivo desapareció del listado, se descarta y se sugiere recargar.
    pub async fn confirm_deletion(&mut self) -> AppResult<()> {
        let Some(id) = self.pending_deletion.clone() else {
            return Err(AppError::NoPendingDeletion);
        };

        // El listado pudo cambiar desde que se pidió la confirmación:
        // revalidar el objetivo contra la colección actual
        if !self.vehicles.iter().any(|v| v.id == id) {
            self.pending_deletion = None;
            self.sink.emit(UiEvent::Error {
                message: "Vehicle not found. Try reloading the fleet list.".to_string(),
            });
            return Err(not_found_error("Vehicle", &id));
        }

        self.sink.emit(UiEvent::LoadingStarted);
        let result = self.directory.remove(&id).await;
        self.sink.emit(UiEvent::LoadingEnded);

        match result {
            Ok(()) => {
                self.pending_deletion = None;
                if let Err(e) = self.load().await {
                    warn!("⚠️ No se pudo recargar tras borrar: {}", e);
                }
                self.sink.emit(UiEvent::Success {
                    message: "Vehicle deleted successfully!".to_string(),
                });
                info!("🗑️ Vehículo eliminado: {}", id);
                Ok(())
            }
            Err(AppError::NotFound(msg)) => {
                // Desapareció en el servidor: un reintento no tiene sentido
                self.pending_deletion = None;
                self.sink.emit(UiEvent::Error {
                    message: "Vehicle not found. Try reloading the fleet list.".to_string(),
                });
                Err(AppError::NotFound(msg))
            }
            Err(e) => {
                self.sink.emit(UiEvent::Error {
                    message: format!("Failed to delete vehicle: {}", e),
                });
                Err(e)
            }
        }
    }

    /// Proyección derivada actual (filtrada y ordenada)
    pub fn derived_view(&self) -> &[VehicleRecord] {
        &self.derived
    }

    /// Colección autoritativa tal como la devolvió el directorio
    pub fn vehicles(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> (SortKey, SortDirection) {
        (self.sort_key, self.sort_direction)
    }

    /// Id del borrado pendiente, si hay una confirmación en curso
    pub fn pending_deletion(&self) -> Option<&str> {
        self.pending_deletion.as_deref()
    }
}
