// --- File: crates/turnero_gcal/src/catalog.rs ---
//! Static catalog of bookable barbershop services.

use serde::Serialize;
use tracing::warn;

/// Duration assigned when an unknown service identifier is requested.
pub const FALLBACK_DURATION_MINUTES: i64 = 60;

/// A bookable service with its display name and duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDefinition {
    pub id: String,
    pub display_name: String,
    pub duration_minutes: i64,
}

const SERVICES: &[(&str, &str, i64)] = &[
    ("solo-barba", "Solo Barba", 30),
    ("solo-corte", "Solo Corte", 45),
    ("barba-corte", "Barba y Corte", 75),
];

/// Resolves a service identifier against the static catalog.
///
/// Unknown identifiers are not rejected here: they resolve to a fallback
/// definition using the raw identifier as display name and a 60-minute
/// duration. Callers that want strict validation must check [`is_known`]
/// themselves.
pub fn lookup(service_id: &str) -> ServiceDefinition {
    if let Some((id, name, minutes)) = SERVICES.iter().find(|(id, _, _)| *id == service_id) {
        return ServiceDefinition {
            id: (*id).to_string(),
            display_name: (*name).to_string(),
            duration_minutes: *minutes,
        };
    }
    warn!(
        "Unknown service '{}', falling back to {} minutes",
        service_id, FALLBACK_DURATION_MINUTES
    );
    ServiceDefinition {
        id: service_id.to_string(),
        display_name: service_id.to_string(),
        duration_minutes: FALLBACK_DURATION_MINUTES,
    }
}

/// Whether the identifier exists in the catalog.
pub fn is_known(service_id: &str) -> bool {
    SERVICES.iter().any(|(id, _, _)| *id == service_id)
}
