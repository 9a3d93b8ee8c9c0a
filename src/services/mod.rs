//! Services module
//!
//! Este módulo contiene la integración con el API externo de bookings.

pub mod booking_api_service;

pub use booking_api_service::*;
