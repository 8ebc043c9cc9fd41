//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema. Todos los
//! errores visibles para el operador se reportan además por el sink de
//! notificaciones; ninguno se traga en silencio.

use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Directory unavailable: {0}")]
    DirectoryUnavailable(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // Violación del contrato de uso, no una condición de usuario:
    // nunca se emite por el sink de presentación
    #[error("No pending deletion")]
    NoPendingDeletion,
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación con el primer campo
/// violado y un mensaje legible
pub fn validation_error(field: &'static str, message: &str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("invalid");
    error.message = Some(message.to_string().into());

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}
