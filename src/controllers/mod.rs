//! Controladores del panel
//!
//! El view-model del listado de vehículos vive acá. Recibe sus
//! colaboradores (directorio y sink) por inyección al construirse.

pub mod vehicle_list_controller;

pub use vehicle_list_controller::VehicleListController;
