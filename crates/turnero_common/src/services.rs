// --- File: crates/turnero_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! This module defines the trait boundary between the booking workflow and
//! the external calendar system. The workflow only ever talks to a
//! [`CalendarService`]; the Google-backed implementation and the in-memory
//! test doubles both live behind it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A trait for calendar service operations.
///
/// The two operations mirror what the booking workflow needs from the
/// external calendar: a read of occupied time ranges and a single event
/// insertion. Recurring entries are expected to be returned pre-expanded
/// into concrete occurrences.
pub trait CalendarService: Send + Sync {
    /// Error type returned by calendar service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Get occupied time intervals within a specified time range.
    #[allow(clippy::type_complexity)]
    fn list_busy_windows(
        &self,
        calendar_id: &str,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
    ) -> BoxFuture<'_, Vec<(DateTime<Utc>, DateTime<Utc>)>, Self::Error>;

    /// Create a calendar event, optionally notifying its attendees.
    fn insert_event(
        &self,
        calendar_id: &str,
        event: CalendarEvent,
        notify_attendees: bool,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error>;
}

/// A reminder override attached to a created event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderOverride {
    /// Notification channel, e.g. "email" or "popup".
    pub method: String,
    /// Minutes before the event start.
    pub minutes: i32,
}

/// Descriptor for a calendar event to be created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// The start time of the event, RFC3339.
    pub start_time: String,
    /// The end time of the event, RFC3339.
    pub end_time: String,
    /// IANA time zone name the start/end are anchored to.
    pub time_zone: String,
    /// The summary or title of the event.
    pub summary: String,
    /// An optional description of the event.
    pub description: Option<String>,
    /// Email address to attach as an attendee.
    pub attendee_email: Option<String>,
    /// Reminder overrides; when non-empty the calendar defaults are disabled.
    pub reminders: Vec<ReminderOverride>,
    /// Display color tag understood by the calendar backend.
    pub color_id: Option<String>,
}

/// Represents the result of a calendar event operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEventResult {
    /// The ID of the event.
    pub event_id: Option<String>,
    /// Shareable link to the event, when the backend provides one.
    pub html_link: Option<String>,
    /// The status of the event.
    pub status: String,
}
