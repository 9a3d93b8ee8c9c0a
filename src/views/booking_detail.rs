//! Vista del detalle de un booking
//!
//! Renderiza el booking como definition list plana con bloques anidados
//! para hotel, habitación y cliente. El header y el link de vuelta se
//! muestran en los tres estados.

use crate::models::booking::BookingDetail;
use crate::utils::format::{escape_html, format_date, format_money};
use crate::views::{page, Resource};

pub fn render(booking_id: &str, resource: &Resource<BookingDetail>) -> String {
    let content = match resource {
        Resource::Pending => "<h1>Loading...</h1>".to_string(),
        Resource::Rejected(_) => "<p>Failed to get booking</p>".to_string(),
        Resource::Resolved(booking) => render_booking(booking),
    };

    let body = format!(
        "<div class=\"container\">\n<div class=\"mb-16\">\n<h1>Booking #{}</h1>\n\
         <a href=\"/bookings\">&larr; Back to Bookings</a>\n</div>\n{}\n</div>",
        escape_html(booking_id),
        content
    );

    page("Booking", &body)
}

fn render_booking(booking: &BookingDetail) -> String {
    let status = match &booking.cancelled_at {
        // Timestamp crudo, sin formatear
        Some(cancelled_at) => format!("Cancelled at {}", escape_html(cancelled_at)),
        None => "CONFIRMED".to_string(),
    };

    let paid_in_full_at = booking
        .paid_in_full_at
        .as_deref()
        .map(escape_html)
        .unwrap_or_default();
    let notes = booking.notes.as_deref().map(escape_html).unwrap_or_default();

    let mut html = String::from("<dl class=\"grid grid-cols-[1fr_2fr] gap-4\">\n");
    html.push_str(&row("Booking ID", &booking.id.to_string()));
    html.push_str(&row("Status", &status));
    html.push_str(&row("Check-in Date", &escape_html(&format_date(&booking.check_in_date))));
    html.push_str(&row("Check-out Date", &escape_html(&format_date(&booking.check_out_date))));
    html.push_str(&row("Created At", &escape_html(&format_date(&booking.created_at))));
    html.push_str(&row("Length of Stay", &format!("{} nights", booking.occupancy)));
    html.push_str(&row("Paid in Full At", &paid_in_full_at));
    html.push_str(&row(
        "Total Cost",
        &escape_html(&format_money(booking.total, &booking.currency_code)),
    ));
    html.push_str(&row("Hotel", &render_hotel(booking)));
    html.push_str(&row("Room", &render_room(booking)));
    html.push_str(&row("Notes", &notes));
    html.push_str(&row("Updated At", &escape_html(&format_date(&booking.updated_at))));
    html.push_str(&row("User Info", &render_customer(booking)));
    html.push_str("</dl>");
    html
}

fn row(term: &str, definition: &str) -> String {
    format!("<dt>{}</dt>\n<dd>{}</dd>\n", term, definition)
}

fn render_hotel(booking: &BookingDetail) -> String {
    format!(
        "<dl class=\"grid grid-cols-[1fr_2fr] gap-2\">\n\
         <dt>ID:</dt>\n<dd>{}</dd>\n\
         <dt>Name:</dt>\n<dd>{}</dd>\n\
         </dl>",
        booking.hotel.id,
        escape_html(&booking.hotel.name),
    )
}

fn render_room(booking: &BookingDetail) -> String {
    format!(
        "<dl class=\"grid grid-cols-[1fr_2fr] gap-2\">\n\
         <dt>ID:</dt>\n<dd>{}</dd>\n\
         <dt>Name:</dt>\n<dd>{}</dd>\n\
         <dt>Max Occupancy:</dt>\n<dd>{}</dd>\n\
         <dt>Max Units:</dt>\n<dd>{}</dd>\n\
         </dl>",
        booking.room.id,
        escape_html(&booking.room.name),
        booking.room.max_occupancy,
        booking.room.max_units,
    )
}

fn render_customer(booking: &BookingDetail) -> String {
    let customer = &booking.customer;
    let mut html = format!(
        "<p>{} {}</p>\n<p>{}</p>\n",
        escape_html(&customer.first_name),
        escape_html(&customer.last_name),
        escape_html(&customer.email),
    );

    if !customer.booking_ids.is_empty() {
        html.push_str("<p>Other Bookings:</p>\n<ul class=\"space-y-2 p-0\">\n");
        for other_id in &customer.booking_ids {
            html.push_str(&format!(
                "<li><a href=\"/bookings/{0}\">Booking #{0}</a></li>\n",
                other_id
            ));
        }
        html.push_str("</ul>\n");
    }

    html
}
