// File: crates/turnero_gcal/src/handlers.rs
use crate::logic::{submit_booking, BookingError, BookingRequest, BookingResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use chrono_tz::Tz;
use std::str::FromStr;
use std::sync::Arc;
use tracing::error;
use turnero_common::services::{BoxedError, CalendarService};
use turnero_config::AppConfig;

/// Time zone the shop operates in when the config does not name one.
pub const DEFAULT_TIME_ZONE: &str = "America/Argentina/Buenos_Aires";

// Define shared state needed by GCal handlers
#[derive(Clone)]
pub struct GcalState {
    pub config: Arc<AppConfig>,
    pub calendar: Arc<dyn CalendarService<Error = BoxedError>>,
}

/// Handler to submit a booking request.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/booking", // Path relative to /api
    request_body = BookingRequest,
    responses(
        (status = 200, description = "Booking created", body = BookingResponse),
        (status = 400, description = "Missing or malformed input"),
        (status = 409, description = "Slot no longer available"),
        (status = 500, description = "Calendar backend failure")
    ),
    tag = "Booking"
))]
pub async fn book_appointment_handler(
    State(state): State<Arc<GcalState>>,
    Json(payload): Json<BookingRequest>,
) -> Result<Json<BookingResponse>, (StatusCode, String)> {
    // Ensure GCal feature is enabled via runtime config
    if !state.config.use_gcal {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Booking service is disabled.".to_string(),
        ));
    }

    let gcal_config = state.config.gcal.as_ref().ok_or_else(|| {
        error!("GCal configuration missing in AppConfig.");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server configuration error: GCal config missing.".to_string(),
        )
    })?;
    let calendar_id = gcal_config.calendar_id.as_deref().unwrap_or("primary");

    let time_zone = gcal_config.time_zone.as_deref().unwrap_or(DEFAULT_TIME_ZONE);
    let time_zone = Tz::from_str(time_zone).map_err(|_| {
        error!("Invalid time zone '{}' in GcalConfig.", time_zone);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server configuration error: invalid time zone.".to_string(),
        )
    })?;

    match submit_booking(state.calendar.as_ref(), calendar_id, time_zone, &payload).await {
        Ok(created) => Ok(Json(BookingResponse {
            success: true,
            event_id: created.event_id,
            event_link: created.html_link,
            message: "Appointment booked successfully.".to_string(),
        })),
        Err(BookingError::MissingFields) => {
            Err((StatusCode::BAD_REQUEST, "Missing required fields.".to_string()))
        }
        Err(BookingError::TimeParseError(detail)) => Err((StatusCode::BAD_REQUEST, detail)),
        Err(BookingError::Conflict) => Err((
            StatusCode::CONFLICT,
            "This slot is no longer available.".to_string(),
        )),
        Err(BookingError::ApiError(detail)) => {
            error!("Error booking slot: {}", detail);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to process booking: {}", detail),
            ))
        }
    }
}

/// Handler for OPTIONS requests to support CORS preflight
pub async fn options_handler() -> impl axum::response::IntoResponse {
    // Return appropriate CORS headers for preflight requests
    (
        StatusCode::OK,
        [
            ("Access-Control-Allow-Origin", "*"),
            ("Access-Control-Allow-Methods", "POST, OPTIONS"),
            ("Access-Control-Allow-Headers", "Content-Type"),
            ("Access-Control-Max-Age", "86400"),
        ],
    )
}
