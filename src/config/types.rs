use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::credentials::SecureString;

/// TMDB v3 API root.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Environment variable consulted for the bearer token.
pub const DEFAULT_TOKEN_ENV: &str = "TMDB_TOKEN";

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Settings for the search API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the API (e.g., "https://api.themoviedb.org/3").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token stored in the file. The environment variable wins.
    #[serde(default)]
    pub token: Option<SecureString>,
    /// Environment variable name containing the token.
    #[serde(default = "default_token_env")]
    pub token_env: String,
    /// Language sent with every search (e.g., "en-US").
    #[serde(default)]
    pub language: Option<String>,
    /// Whether adult titles are included in results.
    #[serde(default)]
    pub include_adult: Option<bool>,
    /// Total request timeout. Unset leaves the transport default in place.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw / animation tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long advisory notifications stay on screen (default: 3).
    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_toast_seconds() -> u64 {
    3
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            token_env: default_token_env(),
            language: None,
            include_adult: None,
            timeout_seconds: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            toast_seconds: default_toast_seconds(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_seconds)
    }
}
