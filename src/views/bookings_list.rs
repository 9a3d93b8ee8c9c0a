//! Vista del listado de bookings
//!
//! Renderiza una fila de tabla por booking, en el orden recibido del API
//! (sin ordenación en cliente).

use crate::models::booking::BookingSummary;
use crate::utils::format::{escape_html, format_date, format_money};
use crate::views::{page, Resource};

pub fn render(resource: &Resource<Vec<BookingSummary>>) -> String {
    let content = match resource {
        Resource::Pending => "<h1>Loading...</h1>".to_string(),
        Resource::Rejected(_) => "<p>Failed to get data</p>".to_string(),
        Resource::Resolved(bookings) => render_table(bookings),
    };

    page("Bookings", &format!("<h1>Bookings</h1>\n{}", content))
}

fn render_table(bookings: &[BookingSummary]) -> String {
    let mut html = String::from(
        "<div class=\"container\">\n<table class=\"w-full\">\n<thead>\n<tr>\n\
         <th>ID</th>\n<th>Hotel Name</th>\n<th>Check-In Date</th>\n<th>Check-Out Date</th>\n\
         <th>Length of Stay</th>\n<th>Total</th>\n<th>Paid</th>\n<th>Status</th>\n<th></th>\n\
         </tr>\n</thead>\n<tbody>\n",
    );

    for booking in bookings {
        html.push_str(&render_row(booking));
    }

    html.push_str("</tbody>\n</table>\n</div>");
    html
}

fn render_row(booking: &BookingSummary) -> String {
    format!(
        "<tr class=\"border-y border-gray-300 hover:bg-gray-700\">\n\
         <td class=\"py-2 text-center\">{id}</td>\n\
         <td class=\"py-2 text-center\">{hotel}</td>\n\
         <td class=\"py-2 text-center\">{check_in}</td>\n\
         <td class=\"py-2 text-center\">{check_out}</td>\n\
         <td class=\"py-2 text-center\">{nights} nights</td>\n\
         <td class=\"py-2 text-center\">{total}</td>\n\
         <td class=\"py-2 text-center\">{paid}</td>\n\
         <td class=\"py-2 text-center\">{status}</td>\n\
         <td class=\"py-2 text-center\"><a href=\"/bookings/{id}\">See More</a></td>\n\
         </tr>\n",
        id = booking.id,
        hotel = escape_html(&booking.hotel_name),
        check_in = escape_html(&format_date(&booking.check_in_date)),
        check_out = escape_html(&format_date(&booking.check_out_date)),
        nights = booking.occupancy,
        total = escape_html(&format_money(booking.total, &booking.currency_code)),
        paid = if booking.paid { "✔️" } else { "❌" },
        status = if booking.cancelled { "Cancelled" } else { "Confirmed" },
    )
}
