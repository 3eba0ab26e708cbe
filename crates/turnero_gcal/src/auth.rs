// File: crates/turnero_gcal/src/auth.rs
use google_calendar3::{
    hyper_rustls::{self, HttpsConnectorBuilder},
    hyper_util::client::legacy::connect::HttpConnector,
    hyper_util::client::legacy::Client,
    yup_oauth2::{authorized_user::AuthorizedUserSecret, AuthorizedUserAuthenticator},
    CalendarHub,
};
use std::error::Error;
use turnero_config::GcalConfig;

// Type aliases for clarity
type Connector = hyper_rustls::HttpsConnector<HttpConnector>;

pub type HubType = CalendarHub<Connector>;

/// Builds an authenticated Calendar hub from the injected OAuth2
/// authorized-user credentials (client id/secret + refresh token).
///
/// The refresh token is obtained once out-of-band with the
/// `get_refresh_token` binary and passed in through configuration.
pub async fn create_calendar_hub(
    config: &GcalConfig,
) -> Result<HubType, Box<dyn Error + Send + Sync>> {
    let secret = AuthorizedUserSecret {
        client_id: config
            .client_id
            .clone()
            .ok_or("Missing client_id in GcalConfig")?,
        client_secret: config
            .client_secret
            .clone()
            .ok_or("Missing client_secret in GcalConfig")?,
        refresh_token: config
            .refresh_token
            .clone()
            .ok_or("Missing refresh_token in GcalConfig")?,
        key_type: "authorized_user".to_string(),
    };

    let auth = AuthorizedUserAuthenticator::builder(secret).build().await?;

    let https = HttpsConnectorBuilder::new()
        .with_native_roots()?
        .https_or_http()
        .enable_http1()
        .build();

    // Create client without specifying body type
    let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(https);

    let hub = CalendarHub::new(client, auth);

    Ok(hub)
}
