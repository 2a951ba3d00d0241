mod credentials;
mod loader;
mod types;

pub use credentials::{resolve_token, resolve_token_with, SecureString};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, UiConfig, DEFAULT_BASE_URL, DEFAULT_TOKEN_ENV};
