// --- File: crates/turnero_gcal/src/routes.rs ---

use crate::auth::create_calendar_hub;
use crate::handlers::{book_appointment_handler, options_handler, GcalState};
use crate::service::{BoxedCalendarService, GoogleCalendarService};
use axum::{routing::post, Router};
use std::sync::Arc;
use turnero_common::services::{BoxedError, CalendarService};
use turnero_config::AppConfig;

/// Creates a router containing all routes for the booking feature.
///
/// Builds the authenticated Google Calendar hub internally from the config.
pub async fn routes(config: Arc<AppConfig>) -> Router {
    let calendar_hub = create_calendar_hub(config.gcal.as_ref().expect("GCal config missing"))
        .await
        .expect("Failed to create calendar hub");
    let service = BoxedCalendarService::new(GoogleCalendarService::new(Arc::new(calendar_hub)));

    routes_with_service(config, Arc::new(service))
}

/// Builds the router over an injected calendar service.
///
/// Split out of [`routes`] so tests can drive the HTTP surface with an
/// in-memory calendar instead of a live hub.
pub fn routes_with_service(
    config: Arc<AppConfig>,
    calendar: Arc<dyn CalendarService<Error = BoxedError>>,
) -> Router {
    let state = Arc::new(GcalState { config, calendar });

    Router::new()
        .route(
            "/booking",
            post(book_appointment_handler).options(options_handler),
        )
        .with_state(state)
}
