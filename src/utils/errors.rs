//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del sistema. Las vistas nunca
//! muestran el detalle al usuario; el detalle solo llega a los logs.

use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    /// Respuesta no-200 del API externo; el mensaje es el body crudo
    #[error("{0}")]
    Upstream(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;
