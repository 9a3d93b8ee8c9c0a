use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Router,
};

use crate::services::booking_api_service::BookingApiService;
use crate::state::AppState;
use crate::views::{self, Resource};

pub fn create_booking_router() -> Router<AppState> {
    Router::new()
        .route("/bookings", get(list_bookings))
        .route("/bookings/:id", get(booking_detail))
}

/// GET /bookings - Listado de bookings
async fn list_bookings(State(state): State<AppState>) -> Html<String> {
    let service = BookingApiService::new(state.config.clone(), state.http_client.clone());
    let resource = Resource::from_result(service.fetch_bookings().await);

    if let Resource::Rejected(e) = &resource {
        log::error!("❌ Error obteniendo el listado de bookings: {}", e);
    }

    Html(views::bookings_list::render(&resource))
}

/// GET /bookings/:id - Detalle de un booking
async fn booking_detail(State(state): State<AppState>, Path(id): Path<String>) -> Html<String> {
    let service = BookingApiService::new(state.config.clone(), state.http_client.clone());
    let resource = Resource::from_result(service.fetch_booking(&id).await);

    if let Resource::Rejected(e) = &resource {
        log::error!("❌ Error obteniendo el booking {}: {}", id, e);
    }

    Html(views::booking_detail::render(&id, &resource))
}
