//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al JSON (camelCase) del API externo de bookings.

pub mod booking;

pub use booking::*;
