// --- File: crates/turnero_common/src/lib.rs ---

// Declare modules within this crate
pub mod logging; // Logging utilities
pub mod services; // Service abstractions

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};

// Re-export service types for easier access
pub use services::{
    BoxFuture, BoxedError, CalendarEvent, CalendarEventResult, CalendarService, ReminderOverride,
};
