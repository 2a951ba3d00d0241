//! Bearer token resolution.
//!
//! The token is resolved once at start-up and handed to the API client
//! constructor. Nothing else reads it.

use serde::{Deserialize, Serialize};

use super::loader::ConfigError;
use super::types::ApiConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Resolve the bearer token from the process environment, then the file.
pub fn resolve_token(api: &ApiConfig) -> Result<SecureString, ConfigError> {
    resolve_token_with(api, |name| std::env::var(name).ok())
}

/// Resolve the bearer token using `lookup` for environment access.
///
/// Blank values count as missing.
pub fn resolve_token_with<F>(api: &ApiConfig, lookup: F) -> Result<SecureString, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(&api.token_env) {
        let token = SecureString::new(value);
        if !token.is_empty() {
            return Ok(token);
        }
    }

    match &api.token {
        Some(token) if !token.is_empty() => Ok(token.clone()),
        _ => Err(ConfigError::MissingToken {
            env_var: api.token_env.clone(),
        }),
    }
}
