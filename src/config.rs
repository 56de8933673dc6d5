//! Client configuration.
//!
//! Values come from code or from the environment:
//!
//! - `POKEAPI_URL` - catalog base URL (defaults to `https://pokeapi.co/api/v2/`)
//! - `POKEAPI_SPRITE_URL` - sprite asset base URL
//! - `POKEAPI_TIMEOUT_SECS` - request timeout in seconds (defaults to 30)

use std::env;
use std::time::Duration;

use crate::error::{PokeApiError, Result};

pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2/";
pub const DEFAULT_SPRITE_URL: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const API_URL_VAR: &str = "POKEAPI_URL";
const SPRITE_URL_VAR: &str = "POKEAPI_SPRITE_URL";
const TIMEOUT_VAR: &str = "POKEAPI_TIMEOUT_SECS";

/// Settings used to build a [`PokeApiClient`](crate::PokeApiClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the JSON catalog.
    pub api_url: String,
    /// Base URL that sprite paths are joined onto.
    pub sprite_url: String,
    /// Upper bound for a single request round-trip.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            sprite_url: DEFAULT_SPRITE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Read configuration from environment variables, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PokeApiError::ConfigInvalid`] if `POKEAPI_TIMEOUT_SECS` is not
    /// a positive integer.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_VAR).filter(|v| !v.is_empty()) {
            config.api_url = url;
        }
        if let Some(url) = lookup(SPRITE_URL_VAR).filter(|v| !v.is_empty()) {
            config.sprite_url = url;
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                PokeApiError::ConfigInvalid(format!("{TIMEOUT_VAR} must be an integer, got '{raw}'"))
            })?;
            if secs == 0 {
                return Err(PokeApiError::ConfigInvalid(format!(
                    "{TIMEOUT_VAR} must be greater than zero"
                )));
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Replace the catalog base URL.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Replace the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
