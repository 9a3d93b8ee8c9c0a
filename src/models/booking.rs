//! Modelos de bookings
//!
//! Registros recibidos tal cual del API externo; este backend no los
//! construye ni los muta, solo los muestra.

use serde::{Deserialize, Serialize};

/// Booking del listado (shape plano, sin entidades anidadas)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub id: i64,
    pub hotel_name: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub currency_code: String,
    pub occupancy: i64,
    /// Total en unidades menores de la moneda (céntimos)
    pub total: i64,
    pub paid: bool,
    pub cancelled: bool,
}

/// Hotel anidado en el detalle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: i64,
    pub name: String,
}

/// Habitación anidada en el detalle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub max_occupancy: i64,
    pub max_units: i64,
}

/// Cliente anidado en el detalle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Ids de otros bookings del mismo cliente
    pub booking_ids: Vec<i64>,
}

/// Booking del detalle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetail {
    pub id: i64,
    pub check_in_date: String,
    pub check_out_date: String,
    pub created_at: String,
    pub updated_at: String,
    pub currency_code: String,
    pub occupancy: i64,
    /// Total en unidades menores de la moneda (céntimos)
    pub total: i64,
    pub notes: Option<String>,
    /// Timestamp de cancelación; null ⇒ booking activo
    pub cancelled_at: Option<String>,
    pub paid_in_full_at: Option<String>,
    pub hotel: Hotel,
    pub room: Room,
    pub customer: Customer,
}
