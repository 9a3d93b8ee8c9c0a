//! Vistas HTML del back-office
//!
//! Cada vista renderiza un recurso tri-estado (pending / resolved /
//! rejected) a HTML de solo lectura.

pub mod booking_detail;
pub mod bookings_list;
pub mod resource;

pub use resource::Resource;

use crate::utils::format::escape_html;

/// Envolver el contenido de una página en el documento HTML completo
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        body
    )
}
