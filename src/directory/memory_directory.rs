//! Directorio de vehículos en memoria
//!
//! Implementación de referencia usada por la demo y los tests; en producción
//! el directorio es la tabla hosteada del servicio de datos. Reproduce las
//! dos reglas que impone la tabla real: asignación de id/created_at en el
//! servidor y unicidad de matrícula.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::vehicle::{VehicleFields, VehicleRecord};
use crate::utils::errors::{not_found_error, AppError, AppResult};

use super::VehicleDirectory;

/// Almacén en memoria con el contrato del directorio real
#[derive(Debug, Default)]
pub struct InMemoryVehicleDirectory {
    vehicles: RwLock<HashMap<String, VehicleRecord>>,
}

impl InMemoryVehicleDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cargar la flota de demostración. Devuelve cuántos vehículos se
    /// insertaron.
    pub async fn seed_demo_fleet(&self) -> AppResult<usize> {
        let fleet = demo_fleet();
        let count = fleet.len();
        for fields in fleet {
            self.insert(fields).await?;
        }
        Ok(count)
    }

    // Unicidad de matrícula, opcionalmente excluyendo el registro que se
    // está actualizando
    fn plate_taken(
        vehicles: &HashMap<String, VehicleRecord>,
        plate: &str,
        exclude_id: Option<&str>,
    ) -> bool {
        vehicles
            .values()
            .any(|v| v.license_plate == plate && Some(v.id.as_str()) != exclude_id)
    }
}

#[async_trait]
impl VehicleDirectory for InMemoryVehicleDirectory {
    async fn list(&self) -> AppResult<Vec<VehicleRecord>> {
        let vehicles = self.vehicles.read().await;
        let mut all: Vec<VehicleRecord> = vehicles.values().cloned().collect();
        // Mismo orden que la tabla real: created_at descendente
        all.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(all)
    }

    async fn insert(&self, fields: VehicleFields) -> AppResult<VehicleRecord> {
        let mut vehicles = self.vehicles.write().await;

        if Self::plate_taken(&vehicles, &fields.license_plate, None) {
            return Err(AppError::Persistence(format!(
                "license plate '{}' is already registered",
                fields.license_plate
            )));
        }

        let record =
            VehicleRecord::from_fields(Uuid::new_v4().to_string(), fields, Utc::now());
        vehicles.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, fields: VehicleFields) -> AppResult<()> {
        let mut vehicles = self.vehicles.write().await;

        if !vehicles.contains_key(id) {
            return Err(not_found_error("Vehicle", id));
        }
        if Self::plate_taken(&vehicles, &fields.license_plate, Some(id)) {
            return Err(AppError::Persistence(format!(
                "license plate '{}' is already registered",
                fields.license_plate
            )));
        }

        if let Some(record) = vehicles.get_mut(id) {
            record.apply_fields(fields);
        }
        Ok(())
    }

    async fn remove(&self, id: &str) -> AppResult<()> {
        let mut vehicles = self.vehicles.write().await;
        vehicles
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found_error("Vehicle", id))
    }
}

// Flota de ejemplo para la demo y los entornos de desarrollo
fn demo_fleet() -> Vec<VehicleFields> {
    vec![
        VehicleFields {
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2022,
            color: "Silver".to_string(),
            license_plate: "FLT201".to_string(),
            vehicle_type: "Sedan".to_string(),
            base_price: Decimal::new(3500, 2),
            price_per_km: Decimal::new(120, 2),
            capacity: 5,
            is_available: true,
            image_url: None,
        },
        VehicleFields {
            make: "Mercedes-Benz".to_string(),
            model: "Sprinter".to_string(),
            year: 2021,
            color: "White".to_string(),
            license_plate: "FLT305".to_string(),
            vehicle_type: "Van".to_string(),
            base_price: Decimal::new(6000, 2),
            price_per_km: Decimal::new(210, 2),
            capacity: 12,
            is_available: true,
            image_url: None,
        },
        VehicleFields {
            make: "Cadillac".to_string(),
            model: "Escalade".to_string(),
            year: 2023,
            color: "Black".to_string(),
            license_plate: "FLT412".to_string(),
            vehicle_type: "SUV".to_string(),
            base_price: Decimal::new(9500, 2),
            price_per_km: Decimal::new(340, 2),
            capacity: 7,
            is_available: false,
            image_url: None,
        },
        VehicleFields {
            make: "Lincoln".to_string(),
            model: "Town Car".to_string(),
            year: 2020,
            color: "Black".to_string(),
            license_plate: "FLT118".to_string(),
            vehicle_type: "Limousine".to_string(),
            base_price: Decimal::new(12000, 2),
            price_per_km: Decimal::new(450, 2),
            capacity: 8,
            is_available: true,
            image_url: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(plate: &str) -> VehicleFields {
        VehicleFields {
            make: "Tesla".to_string(),
            model: "Model S".to_string(),
            year: 2024,
            color: "Black".to_string(),
            license_plate: plate.to_string(),
            vehicle_type: "Sedan".to_string(),
            base_price: Decimal::new(5000, 2),
            price_per_km: Decimal::new(250, 2),
            capacity: 4,
            is_available: true,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_created_at() {
        let directory = InMemoryVehicleDirectory::new();
        let record = directory.insert(fields("GLR100")).await.unwrap();

        assert!(!record.id.is_empty());
        assert_eq!(record.license_plate, "GLR100");

        let listed = directory.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, record.id);
    }

    #[tokio::test]
    async fn test_duplicate_plate_rejected() {
        let directory = InMemoryVehicleDirectory::new();
        directory.insert(fields("GLR100")).await.unwrap();

        let error = directory.insert(fields("GLR100")).await.unwrap_err();
        assert!(matches!(error, AppError::Persistence(_)));
    }

    #[tokio::test]
    async fn test_update_keeps_plate_on_same_record() {
        let directory = InMemoryVehicleDirectory::new();
        let record = directory.insert(fields("GLR100")).await.unwrap();

        let mut updated = fields("GLR100");
        updated.color = "White".to_string();
        directory.update(&record.id, updated).await.unwrap();

        let listed = directory.list().await.unwrap();
        assert_eq!(listed[0].color, "White");
        assert_eq!(listed[0].created_at, record.created_at);
    }

    #[tokio::test]
    async fn test_remove_missing_id_is_not_found() {
        let directory = InMemoryVehicleDirectory::new();
        let error = directory.remove("missing-id").await.unwrap_err();
        assert!(matches!(error, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_seed_demo_fleet() {
        let directory = InMemoryVehicleDirectory::new();
        let seeded = directory.seed_demo_fleet().await.unwrap();
        assert_eq!(seeded, 4);
        assert_eq!(directory.list().await.unwrap().len(), 4);
    }
}
