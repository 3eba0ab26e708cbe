//! One-time helper to obtain a Google Calendar refresh token.
//!
//! Walks through the OAuth2 authorization-code exchange interactively:
//! prints the consent URL, reads the authorization code from stdin, trades
//! it for tokens and prints the env lines to store. Not part of the booking
//! runtime path; the backend only consumes the resulting refresh token via
//! configuration.
//!
//! Usage:
//!   TURNERO_GCAL__CLIENT_ID=xxx TURNERO_GCAL__CLIENT_SECRET=yyy \
//!     cargo run -p turnero-gcal --bin get_refresh_token

use serde::Deserialize;
use std::error::Error;
use std::io::{self, BufRead, Write};

const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const SCOPE: &str = "https://www.googleapis.com/auth/calendar.events";

#[derive(Deserialize, Debug)]
struct TokenResponse {
    refresh_token: Option<String>,
    access_token: Option<String>,
}

fn env_any(keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| std::env::var(k).ok())
        .filter(|v| !v.is_empty())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    turnero_config::ensure_dotenv_loaded();

    let client_id = env_any(&["TURNERO_GCAL__CLIENT_ID", "GOOGLE_CLIENT_ID"])
        .ok_or("Set TURNERO_GCAL__CLIENT_ID (or GOOGLE_CLIENT_ID) first")?;
    let client_secret = env_any(&["TURNERO_GCAL__CLIENT_SECRET", "GOOGLE_CLIENT_SECRET"])
        .ok_or("Set TURNERO_GCAL__CLIENT_SECRET (or GOOGLE_CLIENT_SECRET) first")?;
    let redirect_uri =
        env_any(&["GOOGLE_REDIRECT_URI"]).unwrap_or_else(|| "http://localhost".to_string());

    let mut consent_url = reqwest::Url::parse(AUTH_URL)?;
    consent_url
        .query_pairs_mut()
        .append_pair("client_id", &client_id)
        .append_pair("redirect_uri", &redirect_uri)
        .append_pair("response_type", "code")
        .append_pair("scope", SCOPE)
        .append_pair("access_type", "offline")
        .append_pair("prompt", "consent");

    println!("\n=== Google Calendar refresh token generator ===\n");
    println!("Step 1: open this URL in your browser:\n\n{}\n", consent_url);
    println!("Step 2: authorize the application");
    println!("Step 3: copy the `code` parameter from the callback URL\n");
    print!("Paste the code here: ");
    io::stdout().flush()?;

    let mut code = String::new();
    io::stdin().lock().read_line(&mut code)?;
    let code = code.trim();
    if code.is_empty() {
        return Err("No authorization code entered".into());
    }

    println!("\nExchanging code for tokens...\n");

    let client = reqwest::Client::new();
    let response = client
        .post(TOKEN_URL)
        .form(&[
            ("code", code),
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
            ("redirect_uri", redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(format!("Token exchange failed ({}): {}", status, body).into());
    }

    let tokens: TokenResponse = response.json().await?;

    match tokens.refresh_token {
        Some(refresh_token) => {
            println!("Success! Store these values in your .env file:\n");
            println!("-----------------------------------------------------");
            println!("TURNERO_GCAL__CLIENT_ID={}", client_id);
            println!("TURNERO_GCAL__CLIENT_SECRET={}", client_secret);
            println!("TURNERO_GCAL__REFRESH_TOKEN={}", refresh_token);
            println!("TURNERO_GCAL__CALENDAR_ID=primary");
            println!("-----------------------------------------------------\n");
            println!("Tip: to book into a specific calendar, copy its ID from");
            println!("calendar.google.com > Settings > Integrate calendar.");
        }
        None => {
            println!("Warning: no refresh_token was returned.");
            if tokens.access_token.is_some() {
                println!("Google only issues a refresh token on the first consent.");
                println!("Revoke access at https://myaccount.google.com/permissions and retry.");
            }
        }
    }

    Ok(())
}
