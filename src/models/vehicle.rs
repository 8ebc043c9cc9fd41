//! Modelo de Vehicle
//!
//! Este módulo contiene el struct VehicleRecord y sus variantes para CRUD
//! operations. Mapea exactamente al schema de la tabla vehicles del servicio
//! de directorio (columnas snake_case, columna `type` para la categoría).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::format::vehicle_label;

/// Año mínimo aceptado para un vehículo de la flota
pub const MIN_VEHICLE_YEAR: i32 = 1900;

/// Capacidad de pasajeros por defecto cuando el formulario no trae una válida
pub const DEFAULT_CAPACITY: i32 = 4;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// Identificador opaco asignado por el directorio al crear; inmutable
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub license_plate: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub base_price: Decimal,
    pub price_per_km: Decimal,
    pub capacity: i32,
    pub is_available: bool,
    pub image_url: Option<String>,
    /// Asignado por el directorio; orden de frescura por defecto del listado
    pub created_at: DateTime<Utc>,
}

/// Payload de escritura de un vehículo - lo que viaja en insert/update,
/// ya validado y coercionado (matrícula en mayúsculas, montos con fallback)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleFields {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub license_plate: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub base_price: Decimal,
    pub price_per_km: Decimal,
    pub capacity: i32,
    pub is_available: bool,
    pub image_url: Option<String>,
}

impl VehicleRecord {
    /// Construir un registro a partir del payload, con id y created_at
    /// asignados por el directorio
    pub fn from_fields(id: String, fields: VehicleFields, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            make: fields.make,
            model: fields.model,
            year: fields.year,
            color: fields.color,
            license_plate: fields.license_plate,
            vehicle_type: fields.vehicle_type,
            base_price: fields.base_price,
            price_per_km: fields.price_per_km,
            capacity: fields.capacity,
            is_available: fields.is_available,
            image_url: fields.image_url,
            created_at,
        }
    }

    /// Sobrescribir los campos editables; id y created_at no cambian nunca
    pub fn apply_fields(&mut self, fields: VehicleFields) {
        self.make = fields.make;
        self.model = fields.model;
        self.year = fields.year;
        self.color = fields.color;
        self.license_plate = fields.license_plate;
        self.vehicle_type = fields.vehicle_type;
        self.base_price = fields.base_price;
        self.price_per_km = fields.price_per_km;
        self.capacity = fields.capacity;
        self.is_available = fields.is_available;
        self.image_url = fields.image_url;
    }

    /// Etiqueta corta para el listado y el prompt de confirmación
    pub fn label(&self) -> String {
        vehicle_label(self.year, &self.make, &self.model)
    }
}

/// Estadísticas agregadas de la flota - siempre sobre la colección
/// autoritativa completa, nunca sobre la vista filtrada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FleetStats {
    pub total: usize,
    pub available: usize,
    pub unavailable: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> VehicleFields {
        VehicleFields {
            make: "Tesla".to_string(),
            model: "Model S".to_string(),
            year: 2024,
            color: "Black".to_string(),
            license_plate: "GLR100".to_string(),
            vehicle_type: "Sedan".to_string(),
            base_price: Decimal::new(5000, 2),
            price_per_km: Decimal::new(250, 2),
            capacity: 4,
            is_available: true,
            image_url: None,
        }
    }

    #[test]
    fn test_apply_fields_keeps_identity() {
        let created_at = Utc::now();
        let mut record =
            VehicleRecord::from_fields("veh-1".to_string(), sample_fields(), created_at);

        let mut updated = sample_fields();
        updated.color = "White".to_string();
        record.apply_fields(updated);

        assert_eq!(record.id, "veh-1");
        assert_eq!(record.created_at, created_at);
        assert_eq!(record.color, "White");
    }

    #[test]
    fn test_label() {
        let record = VehicleRecord::from_fields("veh-1".to_string(), sample_fields(), Utc::now());
        assert_eq!(record.label(), "2024 Tesla Model S");
    }

    #[test]
    fn test_vehicle_type_serializes_as_type_column() {
        let record = VehicleRecord::from_fields("veh-1".to_string(), sample_fields(), Utc::now());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "Sedan");
    }
}
