//! Servicio para el API externo de bookings
//!
//! Este módulo contiene los fetchers de las dos páginas: listado de
//! bookings y detalle de un booking. Cada fetch es un único GET con el
//! header `x-api-key`.

use crate::config::environment::EnvironmentConfig;
use crate::models::booking::{BookingDetail, BookingSummary};
use crate::utils::errors::{AppError, AppResult};

pub struct BookingApiService {
    config: EnvironmentConfig,
    client: reqwest::Client,
}

impl BookingApiService {
    pub fn new(config: EnvironmentConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    /// Obtener el listado completo de bookings
    pub async fn fetch_bookings(&self) -> AppResult<Vec<BookingSummary>> {
        let url = format!("{}/bookings", self.config.public_api_url);
        log::info!("🏨 Obteniendo bookings desde: {}", url);

        let response = self
            .client
            .get(&url)
            .header("x-api-key", &self.config.api_key)
            .send()
            .await?;

        let body = self.read_ok_body(response).await?;
        let bookings: Vec<BookingSummary> = serde_json::from_str(&body)?;

        log::info!("✅ {} bookings recibidos", bookings.len());
        Ok(bookings)
    }

    /// Obtener el detalle de un booking por id
    pub async fn fetch_booking(&self, id: &str) -> AppResult<BookingDetail> {
        let url = format!("{}/bookings/{}", self.config.public_api_url, id);
        log::info!("🏨 Obteniendo booking {} desde: {}", id, url);

        let response = self
            .client
            .get(&url)
            .header("x-api-key", &self.config.api_key)
            .send()
            .await?;

        let body = self.read_ok_body(response).await?;
        let booking: BookingDetail = serde_json::from_str(&body)?;

        log::info!("✅ Booking {} recibido", booking.id);
        Ok(booking)
    }

    /// Leer el body de una respuesta 200; un status distinto falla con el
    /// body crudo como mensaje de error
    async fn read_ok_body(&self, response: reqwest::Response) -> AppResult<String> {
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("❌ API externo respondió {}: {}", status, error_text);
            return Err(AppError::Upstream(error_text));
        }
        Ok(response.text().await?)
    }
}
