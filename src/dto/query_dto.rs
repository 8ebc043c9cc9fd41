//! DTOs de consulta del listado

use serde::{Deserialize, Serialize};

// Clave de ordenado - los valores serializan tal como los envía el
// selector de orden del panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Make,
    Model,
    Year,
    Color,
    LicensePlate,
    VehicleType,
    Capacity,
    BasePrice,
    PricePerKm,
    /// Orden de frescura, el default del listado
    #[default]
    CreatedAt,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_deserializes_from_snake_case() {
        let key: SortKey = serde_json::from_str("\"price_per_km\"").unwrap();
        assert_eq!(key, SortKey::PricePerKm);
    }

    #[test]
    fn test_defaults_are_freshness_descending() {
        assert_eq!(SortKey::default(), SortKey::CreatedAt);
        assert_eq!(SortDirection::default(), SortDirection::Descending);
    }
}
