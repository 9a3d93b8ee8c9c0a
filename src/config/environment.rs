//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub host: String,
    pub port: u16,
    /// URL base del API externo de bookings
    pub public_api_url: String,
    /// API key estática enviada en el header `x-api-key`
    pub api_key: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            public_api_url: env::var("PUBLIC_API_URL").expect("PUBLIC_API_URL must be set"),
            api_key: env::var("API_KEY").unwrap_or_default(),
        }
    }
}

impl EnvironmentConfig {
    /// Obtener la dirección de escucha del servidor
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
