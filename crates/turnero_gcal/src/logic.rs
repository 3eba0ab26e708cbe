// --- File: crates/turnero_gcal/src/logic.rs ---
use crate::catalog;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use turnero_common::services::{CalendarEvent, CalendarService, ReminderOverride};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// --- Error Handling ---
use thiserror::Error;
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Failed to parse time: {0}")]
    TimeParseError(String),
    #[error("Booking conflict")]
    Conflict,
    #[error("Calendar API Error: {0}")]
    ApiError(String),
}

// --- Data Structures ---

/// The payload the booking widget submits.
#[derive(Deserialize, Debug, Clone, Default)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct BookingRequest {
    /// Catalog identifier of the requested service
    #[cfg_attr(feature = "openapi", schema(example = "solo-barba"))]
    pub service: String,

    /// Accepted from the widget but not used for scheduling (single chair)
    pub barber: Option<String>,

    /// Requested date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-06-10"))]
    pub date: String,

    /// Requested local time of day in HH:MM format
    #[cfg_attr(feature = "openapi", schema(example = "09:00"))]
    pub time: String,

    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub notes: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BookingResponse {
    pub success: bool,
    pub event_id: Option<String>,
    pub event_link: Option<String>,
    pub message: String,
}

/// Identifier and shareable link of a created calendar event.
#[derive(Debug, Clone)]
pub struct CreatedBooking {
    pub event_id: Option<String>,
    pub html_link: Option<String>,
}

/// A concrete reservation window in the business time zone.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeWindow {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

// --- Slot Calculation ---

/// Combines date, time of day and service duration into a reservation window.
///
/// No range validation happens here: past dates are accepted, the calendar
/// itself is the arbiter of what can still be booked.
pub fn compute_window(
    date: &str,
    time: &str,
    service_id: &str,
    tz: Tz,
) -> Result<TimeWindow, BookingError> {
    let naive_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| BookingError::TimeParseError(format!("Invalid date '{}': {}", date, e)))?;
    let naive_time = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|e| BookingError::TimeParseError(format!("Invalid time '{}': {}", time, e)))?;

    let start = tz
        .from_local_datetime(&naive_date.and_time(naive_time))
        .single()
        .ok_or_else(|| {
            BookingError::TimeParseError(format!(
                "Local time {} {} is ambiguous or does not exist in {}",
                date, time, tz
            ))
        })?;

    let duration = Duration::minutes(catalog::lookup(service_id).duration_minutes);
    let end = start + duration;

    Ok(TimeWindow { start, end })
}

// --- Availability Logic ---

/// Checks whether the requested window is free of existing events.
///
/// The probe spans the full service duration, so the range that gets checked
/// always matches the range that would be booked. Recurring events arrive
/// pre-expanded from the gateway.
///
/// Policy: this check fails closed. A gateway error is reported as "not
/// available" instead of being propagated, trading false negatives for never
/// double-booking on a transient failure.
pub async fn check_availability<S>(calendar: &S, calendar_id: &str, window: &TimeWindow) -> bool
where
    S: CalendarService + ?Sized,
{
    let time_min = window.start.with_timezone(&Utc);
    let time_max = window.end.with_timezone(&Utc);

    match calendar
        .list_busy_windows(calendar_id, time_min, time_max)
        .await
    {
        Ok(busy) => busy
            .iter()
            .all(|(start, end)| *end <= time_min || *start >= time_max),
        Err(e) => {
            warn!("Error checking availability, treating slot as taken: {}", e);
            false
        }
    }
}

// --- Booking Logic ---

/// Submits a booking end to end: validate, check availability, create event.
///
/// The availability read and the event write are two separate calls with no
/// lock between them, so two concurrent submissions for the same slot can
/// both observe "available". Accepted limitation of this single-chair widget.
pub async fn submit_booking<S>(
    calendar: &S,
    calendar_id: &str,
    tz: Tz,
    request: &BookingRequest,
) -> Result<CreatedBooking, BookingError>
where
    S: CalendarService + ?Sized,
{
    if request.service.is_empty()
        || request.customer_name.is_empty()
        || request.customer_email.is_empty()
        || request.date.is_empty()
        || request.time.is_empty()
    {
        return Err(BookingError::MissingFields);
    }

    let window = compute_window(&request.date, &request.time, &request.service, tz)?;

    if !check_availability(calendar, calendar_id, &window).await {
        return Err(BookingError::Conflict);
    }

    let service = catalog::lookup(&request.service);
    let event = build_event(&service, &window, request, tz);

    let result = calendar
        .insert_event(calendar_id, event, true)
        .await
        .map_err(|e| BookingError::ApiError(e.to_string()))?;

    info!("Created booking event: {:?}", result.event_id);

    Ok(CreatedBooking {
        event_id: result.event_id,
        html_link: result.html_link,
    })
}

fn build_event(
    service: &catalog::ServiceDefinition,
    window: &TimeWindow,
    request: &BookingRequest,
    tz: Tz,
) -> CalendarEvent {
    let mut description = format!(
        "Servicio: {}\nCliente: {}\nTeléfono: {}\nEmail: {}",
        service.display_name, request.customer_name, request.customer_phone, request.customer_email
    );
    if let Some(notes) = request.notes.as_deref().filter(|n| !n.is_empty()) {
        description.push_str("\nNotas: ");
        description.push_str(notes);
    }

    CalendarEvent {
        start_time: window.start.to_rfc3339(),
        end_time: window.end.to_rfc3339(),
        time_zone: tz.name().to_string(),
        summary: format!("{} - {}", service.display_name, request.customer_name),
        description: Some(description),
        attendee_email: Some(request.customer_email.clone()),
        reminders: vec![
            ReminderOverride {
                method: "email".to_string(),
                minutes: 24 * 60,
            },
            ReminderOverride {
                method: "popup".to_string(),
                minutes: 60,
            },
        ],
        color_id: Some("5".to_string()),
    }
}
