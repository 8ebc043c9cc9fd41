//! Servicio de directorio de vehículos
//!
//! Este módulo define el contrato con el almacén de datos externo. El
//! view-model sólo conoce este trait; la implementación concreta (tabla
//! hosteada, memoria) se inyecta al construir el controlador en lugar de
//! alcanzarse por estado global.

use async_trait::async_trait;

use crate::models::vehicle::{VehicleFields, VehicleRecord};
use crate::utils::errors::AppResult;

pub mod memory_directory;

pub use memory_directory::InMemoryVehicleDirectory;

/// Contrato CRUD del almacén de vehículos
#[async_trait]
pub trait VehicleDirectory: Send + Sync {
    /// Listar todos los vehículos, ordenados por created_at descendente.
    /// Falla con DirectoryUnavailable si el almacén no responde.
    async fn list(&self) -> AppResult<Vec<VehicleRecord>>;

    /// Insertar un vehículo nuevo; el directorio asigna id y created_at
    async fn insert(&self, fields: VehicleFields) -> AppResult<VehicleRecord>;

    /// Actualizar un vehículo existente por id
    async fn update(&self, id: &str, fields: VehicleFields) -> AppResult<()>;

    /// Eliminar un vehículo por id
    async fn remove(&self, id: &str) -> AppResult<()>;
}
