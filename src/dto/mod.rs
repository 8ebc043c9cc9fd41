//! DTOs de entrada del panel
//!
//! Payloads crudos tal como llegan del formulario y del selector de orden,
//! separados de los modelos que persiste el directorio.

pub mod query_dto;
pub mod vehicle_dto;
