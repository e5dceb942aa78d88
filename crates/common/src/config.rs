use std::time::Duration;

use serde::Deserialize;

const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// OAuth token for the review API
    pub practicum_token: Option<String>,

    /// Telegram bot token
    pub telegram_token: Option<String>,

    /// Chat that receives notifications (numeric id or `@channel`)
    pub telegram_chat_id: Option<String>,

    /// Review status endpoint
    pub api_endpoint: String,

    /// Fixed sleep between polling iterations, in seconds (default: 20)
    pub poll_interval_secs: u64,

    /// Request timeout for the review API, in seconds (default: 30)
    pub http_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Missing credentials are not an error here; see [`check_tokens`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            practicum_token: non_empty("PRACTICUM_TOKEN"),
            telegram_token: non_empty("TELEGRAM_TOKEN"),
            telegram_chat_id: non_empty("TELEGRAM_CHAT_ID"),
            api_endpoint: non_empty("REVIEW_API_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            poll_interval_secs: non_empty("POLL_INTERVAL_SECS")
                .unwrap_or_else(|| "20".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("POLL_INTERVAL_SECS must be a valid u64"))?,
            http_timeout_secs: non_empty("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("HTTP_TIMEOUT_SECS must be a valid u64"))?,
        })
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// The three startup credentials, or `None` if any is missing.
    pub fn credentials(&self) -> Option<Credentials> {
        if !self.has_credentials() {
            return None;
        }
        Some(Credentials {
            practicum_token: self.practicum_token.clone()?,
            telegram_token: self.telegram_token.clone()?,
            telegram_chat_id: self.telegram_chat_id.clone()?,
        })
    }

    /// Whether all three credentials needed to start polling are present.
    pub fn has_credentials(&self) -> bool {
        check_tokens(
            self.practicum_token.as_deref(),
            self.telegram_token.as_deref(),
            self.telegram_chat_id.as_deref(),
        )
    }
}

/// Credentials required before the polling loop may start.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

/// Startup precondition: the API token, bot token and chat id must all be
/// present and non-empty.
pub fn check_tokens(
    api_token: Option<&str>,
    bot_token: Option<&str>,
    chat_id: Option<&str>,
) -> bool {
    [api_token, bot_token, chat_id]
        .into_iter()
        .all(|v| v.is_some_and(|s| !s.is_empty()))
}
