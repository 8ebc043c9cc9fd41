//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al schema de la tabla vehicles del servicio de directorio.

pub mod vehicle;
