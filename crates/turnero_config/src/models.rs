// --- File: crates/turnero_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Google Calendar Config ---
// Holds the calendar identity plus the OAuth2 authorized-user credentials.
// The credentials are fetched once out-of-band (see the `get_refresh_token`
// binary) and injected here at process start; nothing reads them from
// ambient globals afterwards.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GcalConfig {
    pub calendar_id: Option<String>,
    /// IANA time zone name the shop operates in.
    /// Defaults to "America/Argentina/Buenos_Aires" when absent.
    pub time_zone: Option<String>,
    // Secrets loaded via env vars:
    // TURNERO_GCAL__CLIENT_ID
    // TURNERO_GCAL__CLIENT_SECRET
    // TURNERO_GCAL__REFRESH_TOKEN
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub refresh_token: Option<String>,
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_gcal: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub gcal: Option<GcalConfig>,
}
