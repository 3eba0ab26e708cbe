// --- File: crates/turnero_gcal/src/service.rs ---
//! Google Calendar service implementation.
//!
//! Implements the [`CalendarService`] trait against the Google Calendar API.

use chrono::{DateTime, Utc};
use google_calendar3::api::{Event, EventAttendee, EventDateTime, EventReminder, EventReminders};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use turnero_common::services::{
    BoxFuture, BoxedError, CalendarEvent, CalendarEventResult, CalendarService,
};

use crate::auth::HubType;

/// Errors that can occur when interacting with Google Calendar.
#[derive(Error, Debug)]
pub enum GcalServiceError {
    #[error("Google API Error: {0}")]
    ApiError(#[from] google_calendar3::Error),
    #[error("Failed to parse time: {0}")]
    TimeParseError(String),
    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Google Calendar service implementation.
pub struct GoogleCalendarService {
    calendar_hub: Arc<HubType>,
}

impl GoogleCalendarService {
    /// Create a new Google Calendar service.
    pub fn new(calendar_hub: Arc<HubType>) -> Self {
        Self { calendar_hub }
    }
}

impl CalendarService for GoogleCalendarService {
    type Error = GcalServiceError;

    /// Lists occupied intervals between `time_min` and `time_max`.
    ///
    /// Recurring events are expanded into concrete occurrences
    /// (`singleEvents=true`), cancelled entries are skipped, and date-only
    /// (all-day) entries count as occupying the whole queried range.
    fn list_busy_windows(
        &self,
        calendar_id: &str,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
    ) -> BoxFuture<'_, Vec<(DateTime<Utc>, DateTime<Utc>)>, Self::Error> {
        let calendar_id = calendar_id.to_string();
        let calendar_hub = self.calendar_hub.clone();

        Box::pin(async move {
            let (_response, events_list) = calendar_hub
                .events()
                .list(&calendar_id)
                .time_min(time_min)
                .time_max(time_max)
                .single_events(true) // Expand recurring events
                .order_by("startTime")
                .doit()
                .await?;

            let mut busy_windows = Vec::new();

            if let Some(items) = events_list.items {
                for event in items {
                    if event.status.as_deref() == Some("cancelled") {
                        continue;
                    }

                    let start = event.start.as_ref().and_then(|s| s.date_time);
                    let end = event.end.as_ref().and_then(|e| e.date_time);

                    match (start, end) {
                        (Some(start), Some(end)) => busy_windows.push((start, end)),
                        _ => {
                            // All-day entries only carry a date.
                            if event.start.as_ref().and_then(|s| s.date).is_some() {
                                busy_windows.push((time_min, time_max));
                            } else {
                                debug!("Skipping event with no usable start/end: {:?}", event.id);
                            }
                        }
                    }
                }
            }

            busy_windows.sort_by_key(|k| k.0);
            Ok(busy_windows)
        })
    }

    /// Creates a new calendar event in the specified calendar.
    ///
    /// Validates the descriptor's RFC3339 timestamps and that the end is
    /// after the start before hitting the API. When `notify_attendees` is
    /// set, Google sends creation emails to the attendee list
    /// (`sendUpdates=all`).
    fn insert_event(
        &self,
        calendar_id: &str,
        event: CalendarEvent,
        notify_attendees: bool,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error> {
        let calendar_id = calendar_id.to_string();
        let calendar_hub = self.calendar_hub.clone();

        Box::pin(async move {
            let start_dt = DateTime::parse_from_rfc3339(&event.start_time)
                .map_err(|e| {
                    GcalServiceError::TimeParseError(format!("Invalid start_time: {}", e))
                })?
                .with_timezone(&Utc);
            let end_dt = DateTime::parse_from_rfc3339(&event.end_time)
                .map_err(|e| GcalServiceError::TimeParseError(format!("Invalid end_time: {}", e)))?
                .with_timezone(&Utc);

            if end_dt <= start_dt {
                return Err(GcalServiceError::CalculationError(
                    "End time must be after start time".to_string(),
                ));
            }

            let attendees = event.attendee_email.as_ref().map(|email| {
                vec![EventAttendee {
                    email: Some(email.clone()),
                    ..Default::default()
                }]
            });

            let reminders = if event.reminders.is_empty() {
                None
            } else {
                Some(EventReminders {
                    use_default: Some(false),
                    overrides: Some(
                        event
                            .reminders
                            .iter()
                            .map(|r| EventReminder {
                                method: Some(r.method.clone()),
                                minutes: Some(r.minutes),
                            })
                            .collect(),
                    ),
                })
            };

            let new_event = Event {
                summary: Some(event.summary.clone()),
                description: event.description.clone(),
                start: Some(EventDateTime {
                    date_time: Some(start_dt),
                    time_zone: Some(event.time_zone.clone()),
                    ..Default::default()
                }),
                end: Some(EventDateTime {
                    date_time: Some(end_dt),
                    time_zone: Some(event.time_zone.clone()),
                    ..Default::default()
                }),
                attendees,
                reminders,
                color_id: event.color_id.clone(),
                ..Default::default()
            };

            let (_response, created_event) = calendar_hub
                .events()
                .insert(new_event, &calendar_id)
                .send_updates(if notify_attendees { "all" } else { "none" })
                .doit()
                .await?;

            Ok(CalendarEventResult {
                event_id: created_event.id,
                html_link: created_event.html_link,
                status: created_event
                    .status
                    .unwrap_or_else(|| "confirmed".to_string()),
            })
        })
    }
}

/// Adapter exposing any [`CalendarService`] through the [`BoxedError`] error
/// type, so handlers can hold it as `Arc<dyn CalendarService<Error = BoxedError>>`.
pub struct BoxedCalendarService<S> {
    inner: S,
}

impl<S> BoxedCalendarService<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: CalendarService> CalendarService for BoxedCalendarService<S> {
    type Error = BoxedError;

    fn list_busy_windows(
        &self,
        calendar_id: &str,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
    ) -> BoxFuture<'_, Vec<(DateTime<Utc>, DateTime<Utc>)>, Self::Error> {
        let fut = self.inner.list_busy_windows(calendar_id, time_min, time_max);
        Box::pin(async move { fut.await.map_err(|e| BoxedError(Box::new(e))) })
    }

    fn insert_event(
        &self,
        calendar_id: &str,
        event: CalendarEvent,
        notify_attendees: bool,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error> {
        let fut = self.inner.insert_event(calendar_id, event, notify_attendees);
        Box::pin(async move { fut.await.map_err(|e| BoxedError(Box::new(e))) })
    }
}
