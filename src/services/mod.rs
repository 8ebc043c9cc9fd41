//! Services module
//!
//! Este módulo contiene la lógica de negocio pura del listado: filtrado,
//! ordenado y estadísticas, separada de los efectos (directorio y sink).

pub mod fleet_query_service;

pub use fleet_query_service::*;
