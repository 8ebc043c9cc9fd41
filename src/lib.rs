//! Fleet Console - núcleo del panel de administración de flota
//!
//! Este crate implementa el view-model del listado de vehículos: la colección
//! autoritativa, la proyección derivada (búsqueda + ordenado) y la
//! orquestación CRUD contra un servicio de directorio abstracto. El shell
//! anfitrión inyecta sus colaboradores (directorio y sink de presentación)
//! al construir el controlador.

pub mod config;
pub mod controllers;
pub mod directory;
pub mod dto;
pub mod models;
pub mod presentation;
pub mod services;
pub mod utils;
