use std::env;
use url::Url;

/// Default endpoint the display connects to when nothing is configured.
pub const DEFAULT_WS_URL: &str = "ws://localhost:9001";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub websocket_url: String,
    pub log_level: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            websocket_url: env::var("CHAT_WS_URL")
                .map(|raw| validate_endpoint(&raw))
                .unwrap_or_else(|_| DEFAULT_WS_URL.to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

/// Keep a configured endpoint only if it parses as a URL, otherwise fall
/// back to the default so the app still comes up pointing somewhere sane.
fn validate_endpoint(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(_) => raw.to_string(),
        Err(e) => {
            log::warn!(
                "[CONFIG] CHAT_WS_URL '{}' non valido ({}), uso il default {}",
                raw,
                e,
                DEFAULT_WS_URL
            );
            DEFAULT_WS_URL.to_string()
        }
    }
}
