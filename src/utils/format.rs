//! Utilidades de formateo
//!
//! Este módulo contiene funciones helper para formatear valores
//! del API externo en la capa de presentación.

use chrono::{DateTime, NaiveDate};

/// Formatear un total en unidades menores como `"150.50 EUR"`
pub fn format_money(total: i64, currency_code: &str) -> String {
    format!("{}.{:02} {}", total / 100, total % 100, currency_code)
}

/// Formatear un timestamp o fecha del API como `dd/mm/yyyy`
///
/// Acepta RFC3339 o `YYYY-MM-DD`; un valor no parseable se devuelve crudo.
pub fn format_date(value: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format("%d/%m/%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    value.to_string()
}

/// Escapar texto para interpolarlo en HTML
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
