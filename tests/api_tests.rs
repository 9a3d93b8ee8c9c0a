//! Tests de integración de las dos páginas del back-office
//!
//! Levanta un mock del API externo de bookings en un puerto efímero y
//! ejecuta el router real contra él.

use axum::body::Body;
use axum::extract::Path;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use http::{HeaderMap, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use booking_backoffice::config::environment::EnvironmentConfig;
use booking_backoffice::routes::booking_routes::create_booking_router;
use booking_backoffice::services::booking_api_service::BookingApiService;
use booking_backoffice::state::AppState;

const TEST_API_KEY: &str = "test-key";

fn sample_list() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "hotelName": "Grand Hotel",
            "checkInDate": "2024-01-01",
            "checkOutDate": "2024-01-04",
            "currencyCode": "EUR",
            "occupancy": 3,
            "total": 15050,
            "paid": true,
            "cancelled": false
        },
        {
            "id": 8,
            "hotelName": "Beach Resort",
            "checkInDate": "2024-02-10",
            "checkOutDate": "2024-02-12",
            "currencyCode": "USD",
            "occupancy": 2,
            "total": 9900,
            "paid": false,
            "cancelled": true
        }
    ])
}

fn sample_detail(id: i64) -> serde_json::Value {
    let cancelled = id == 8;
    json!({
        "id": id,
        "checkInDate": "2024-01-01",
        "checkOutDate": "2024-01-04",
        "createdAt": "2023-12-24T10:00:00Z",
        "updatedAt": "2023-12-28T10:00:00Z",
        "currencyCode": "EUR",
        "occupancy": 3,
        "total": 15050,
        "notes": if cancelled { json!("Guest cancelled by phone") } else { json!(null) },
        "cancelledAt": if cancelled { json!("2024-01-05T00:00:00Z") } else { json!(null) },
        "paidInFullAt": json!(null),
        "hotel": { "id": 2, "name": "Grand Hotel" },
        "room": { "id": 5, "name": "Suite", "maxOccupancy": 4, "maxUnits": 2 },
        "customer": {
            "id": 9,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "bookingIds": if cancelled { json!([]) } else { json!([8, 11]) }
        }
    })
}

fn valid_key(headers: &HeaderMap) -> bool {
    headers
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == TEST_API_KEY)
        .unwrap_or(false)
}

async fn mock_list_endpoint(headers: HeaderMap) -> Response {
    if !valid_key(&headers) {
        return (StatusCode::UNAUTHORIZED, "invalid api key").into_response();
    }
    Json(sample_list()).into_response()
}

async fn mock_detail_endpoint(headers: HeaderMap, Path(id): Path<String>) -> Response {
    if !valid_key(&headers) {
        return (StatusCode::UNAUTHORIZED, "invalid api key").into_response();
    }
    match id.as_str() {
        "7" => Json(sample_detail(7)).into_response(),
        "8" => Json(sample_detail(8)).into_response(),
        _ => (StatusCode::NOT_FOUND, "Booking not found").into_response(),
    }
}

/// Levantar el mock del API externo y devolver su URL base
async fn spawn_mock_api() -> String {
    let app = Router::new()
        .route("/bookings", get(mock_list_endpoint))
        .route("/bookings/:id", get(mock_detail_endpoint));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn test_config(public_api_url: String, api_key: &str) -> EnvironmentConfig {
    EnvironmentConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        public_api_url,
        api_key: api_key.to_string(),
    }
}

fn build_app(public_api_url: String) -> Router {
    let state = AppState::new(test_config(public_api_url, TEST_API_KEY));
    Router::new().merge(create_booking_router()).with_state(state)
}

async fn get_page(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_list_page_renders_table() {
    let base_url = spawn_mock_api().await;
    let app = build_app(base_url);

    let (status, html) = get_page(&app, "/bookings").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h1>Bookings</h1>"));
    assert!(html.contains("Grand Hotel"));
    assert!(html.contains("150.50 EUR"));
    assert!(html.contains("99.00 USD"));
    assert!(html.contains("Confirmed"));
    assert!(html.contains("Cancelled"));
    assert!(html.contains("<a href=\"/bookings/1\">See More</a>"));
    assert!(html.contains("<a href=\"/bookings/8\">See More</a>"));
}

#[tokio::test]
async fn test_detail_page_renders_resolved_booking() {
    let base_url = spawn_mock_api().await;
    let app = build_app(base_url);

    let (status, html) = get_page(&app, "/bookings/7").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Booking #7"));
    assert!(html.contains("CONFIRMED"));
    assert!(html.contains("3 nights"));
    assert!(html.contains("150.50 EUR"));
    assert!(html.contains("Grand Hotel"));
    assert!(html.contains("Suite"));
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("ada@example.com"));
    assert!(html.contains("Other Bookings:"));
    assert!(html.contains("<a href=\"/bookings/8\">Booking #8</a>"));
    assert!(html.contains("<a href=\"/bookings/11\">Booking #11</a>"));
}

#[tokio::test]
async fn test_detail_page_renders_cancelled_booking() {
    let base_url = spawn_mock_api().await;
    let app = build_app(base_url);

    let (_, html) = get_page(&app, "/bookings/8").await;

    assert!(html.contains("Cancelled at 2024-01-05T00:00:00Z"));
    assert!(html.contains("Guest cancelled by phone"));
    // Sin bookings relacionados no hay sección de Other Bookings
    assert!(!html.contains("Other Bookings:"));
}

#[tokio::test]
async fn test_detail_page_rejected_on_unknown_booking() {
    let base_url = spawn_mock_api().await;
    let app = build_app(base_url);

    let (status, html) = get_page(&app, "/bookings/999").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Booking #999"));
    assert!(html.contains("<p>Failed to get booking</p>"));
    // El texto del error del API no se muestra al usuario
    assert!(!html.contains("Booking not found"));
}

#[tokio::test]
async fn test_list_page_rejected_on_upstream_error() {
    let base_url = spawn_mock_api().await;
    let state = AppState::new(test_config(base_url, "wrong-key"));
    let app = Router::new().merge(create_booking_router()).with_state(state);

    let (status, html) = get_page(&app, "/bookings").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<p>Failed to get data</p>"));
    assert!(!html.contains("invalid api key"));
}

#[tokio::test]
async fn test_detail_fetch_error_message_is_raw_body_text() {
    let base_url = spawn_mock_api().await;
    let service = BookingApiService::new(
        test_config(base_url, TEST_API_KEY),
        reqwest::Client::new(),
    );

    let err = service.fetch_booking("999").await.unwrap_err();
    assert_eq!(err.to_string(), "Booking not found");
}

#[tokio::test]
async fn test_list_fetch_returns_bookings_in_order() {
    let base_url = spawn_mock_api().await;
    let service = BookingApiService::new(
        test_config(base_url, TEST_API_KEY),
        reqwest::Client::new(),
    );

    let bookings = service.fetch_bookings().await.unwrap();
    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].id, 1);
    assert_eq!(bookings[1].id, 8);
    assert_eq!(bookings[1].currency_code, "USD");
}

#[tokio::test]
async fn test_fetch_sends_api_key_header() {
    let base_url = spawn_mock_api().await;
    let service = BookingApiService::new(
        test_config(base_url, "wrong-key"),
        reqwest::Client::new(),
    );

    let err = service.fetch_bookings().await.unwrap_err();
    assert_eq!(err.to_string(), "invalid api key");
}

#[tokio::test]
async fn test_detail_page_is_idempotent_across_requests() {
    let base_url = spawn_mock_api().await;
    let app = build_app(base_url);

    let (_, first) = get_page(&app, "/bookings/7").await;
    let (_, second) = get_page(&app, "/bookings/7").await;
    assert_eq!(first, second);
}
