//! DTOs del formulario de vehículo

use std::str::FromStr;

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::vehicle::{VehicleFields, DEFAULT_CAPACITY, MIN_VEHICLE_YEAR};
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::{validate_non_negative, validate_not_empty, validate_range};

// Payload crudo del formulario - todos los campos llegan como texto, tal como
// los entrega el form del panel
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleForm {
    pub make: String,
    pub model: String,
    pub year: String,
    pub color: String,
    pub license_plate: String,
    pub vehicle_type: String,
    pub base_price: String,
    pub price_per_km: String,
    pub capacity: String,
    pub is_available: String,
    pub image_url: String,
}

impl VehicleForm {
    /// Validar los campos requeridos y convertir el payload a VehicleFields.
    /// Falla nombrando el primer campo violado, antes de tocar el directorio.
    ///
    /// Coerciones: matrícula en mayúsculas, montos no parseables a 0,
    /// capacidad no parseable o no positiva a 4, imagen vacía a None.
    pub fn validate_and_coerce(&self) -> AppResult<VehicleFields> {
        validate_not_empty(&self.make).map_err(|_| validation_error("make", "make is required"))?;
        validate_not_empty(&self.model)
            .map_err(|_| validation_error("model", "model is required"))?;

        let year: i32 = self
            .year
            .trim()
            .parse()
            .map_err(|_| validation_error("year", "year must be a number"))?;
        let max_year = Utc::now().year() + 2;
        validate_range(year, MIN_VEHICLE_YEAR, max_year).map_err(|_| {
            validation_error(
                "year",
                &format!(
                    "year must be between {} and {}",
                    MIN_VEHICLE_YEAR, max_year
                ),
            )
        })?;

        validate_not_empty(&self.color)
            .map_err(|_| validation_error("color", "color is required"))?;
        validate_not_empty(&self.license_plate)
            .map_err(|_| validation_error("license_plate", "license plate is required"))?;
        validate_not_empty(&self.vehicle_type)
            .map_err(|_| validation_error("vehicle_type", "vehicle type is required"))?;

        let base_price = parse_amount(&self.base_price);
        validate_non_negative(base_price)
            .map_err(|_| validation_error("base_price", "base price must not be negative"))?;
        let price_per_km = parse_amount(&self.price_per_km);
        validate_non_negative(price_per_km)
            .map_err(|_| validation_error("price_per_km", "price per km must not be negative"))?;

        let capacity = self
            .capacity
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|c| *c > 0)
            .unwrap_or(DEFAULT_CAPACITY);

        let image_url = match self.image_url.trim() {
            "" => None,
            url => Some(url.to_string()),
        };

        Ok(VehicleFields {
            make: self.make.trim().to_string(),
            model: self.model.trim().to_string(),
            year,
            color: self.color.trim().to_string(),
            license_plate: self.license_plate.trim().to_uppercase(),
            vehicle_type: self.vehicle_type.trim().to_string(),
            base_price,
            price_per_km,
            capacity,
            is_available: self.is_available.trim() == "true",
            image_url,
        })
    }
}

// Montos del formulario: entrada no parseable vale 0, nunca corta el guardado
fn parse_amount(raw: &str) -> Decimal {
    Decimal::from_str(raw.trim()).unwrap_or(Decimal::ZERO)
}
