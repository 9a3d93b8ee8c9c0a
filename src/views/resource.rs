//! Recurso tri-estado de una vista
//!
//! Cada página posee exactamente un recurso por request: arranca en
//! `Pending` y transiciona una única vez a `Resolved` o `Rejected`.
//! No hay reintentos; un request nuevo vuelve a ejecutar el fetch.

use crate::utils::errors::{AppError, AppResult};

pub enum Resource<T> {
    Pending,
    Resolved(T),
    Rejected(AppError),
}

impl<T> Resource<T> {
    /// Transicionar desde el resultado del fetcher
    pub fn from_result(result: AppResult<T>) -> Self {
        match result {
            Ok(value) => Resource::Resolved(value),
            Err(e) => Resource::Rejected(e),
        }
    }
}
