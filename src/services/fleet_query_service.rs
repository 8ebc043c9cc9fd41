//! Servicio de consulta de flota
//!
//! Filtrado, ordenado y estadísticas del listado de vehículos. Funciones
//! puras sobre la colección autoritativa: no tocan estado ni emiten eventos.

use std::cmp::Ordering;

use crate::dto::query_dto::{SortDirection, SortKey};
use crate::models::vehicle::{FleetStats, VehicleRecord};

/// Verificar si un vehículo coincide con el término de búsqueda.
/// El término debe llegar ya en minúsculas; vacío coincide con todo.
pub fn matches_search(vehicle: &VehicleRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let composite = format!("{} {} {}", vehicle.year, vehicle.make, vehicle.model);

    [
        vehicle.make.as_str(),
        vehicle.model.as_str(),
        vehicle.color.as_str(),
        vehicle.license_plate.as_str(),
        vehicle.vehicle_type.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(term))
        || vehicle.year.to_string().contains(term)
        || composite.to_lowercase().contains(term)
}

/// Proyección derivada: filtrar por término y ordenar de forma estable.
/// Los empates conservan el orden de la colección autoritativa.
pub fn apply_view(
    vehicles: &[VehicleRecord],
    term: &str,
    key: SortKey,
    direction: SortDirection,
) -> Vec<VehicleRecord> {
    let mut view: Vec<VehicleRecord> = vehicles
        .iter()
        .filter(|v| matches_search(v, term))
        .cloned()
        .collect();

    // sort_by es estable; invertir el comparador (y no el resultado)
    // mantiene el orden original entre claves iguales
    view.sort_by(|a, b| {
        let ordering = compare_by(key, a, b);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    view
}

/// Estadísticas agregadas - siempre sobre la colección autoritativa completa
pub fn compute_stats(vehicles: &[VehicleRecord]) -> FleetStats {
    let total = vehicles.len();
    let available = vehicles.iter().filter(|v| v.is_available).count();

    FleetStats {
        total,
        available,
        unavailable: total - available,
    }
}

fn compare_by(key: SortKey, a: &VehicleRecord, b: &VehicleRecord) -> Ordering {
    match key {
        SortKey::Make => cmp_str(&a.make, &b.make),
        SortKey::Model => cmp_str(&a.model, &b.model),
        SortKey::Color => cmp_str(&a.color, &b.color),
        SortKey::LicensePlate => cmp_str(&a.license_plate, &b.license_plate),
        SortKey::VehicleType => cmp_str(&a.vehicle_type, &b.vehicle_type),
        SortKey::Year => a.year.cmp(&b.year),
        SortKey::Capacity => a.capacity.cmp(&b.capacity),
        SortKey::BasePrice => a.base_price.cmp(&b.base_price),
        SortKey::PricePerKm => a.price_per_km.cmp(&b.price_per_km),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

// Las claves de texto comparan sin distinguir mayúsculas
fn cmp_str(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
