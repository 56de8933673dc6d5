//! PokeAPI client.
//!
//! Low-level HTTP client that handles base URLs and raw requests.
//! Catalog operations are implemented via traits on entity types.

use std::sync::Arc;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{PokeApiError, Result};

const USER_AGENT: &str = concat!("pokeapi/", env!("CARGO_PKG_VERSION"));

/// Low-level PokeAPI client.
///
/// Handles HTTP requests against the catalog host and builds sprite URLs
/// against the asset host. Entity-specific operations are implemented via
/// the `Get` and `Count` traits on model types.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use pokeapi::PokeApiClient;
///
/// # fn example() -> pokeapi::Result<()> {
/// // Create from environment variables
/// let client = PokeApiClient::from_env()?;
///
/// // Or configure manually
/// let client = PokeApiClient::new(
///     "https://pokeapi.co/api/v2",
///     "https://raw.githubusercontent.com/PokeAPI/sprites/master",
/// )?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PokeApiClient {
    http: Client,
    base_url: Arc<Url>,
    sprite_url: Arc<Url>,
}

impl std::fmt::Debug for PokeApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokeApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("sprite_url", &self.sprite_url.as_str())
            .finish_non_exhaustive()
    }
}

impl PokeApiClient {
    /// Create a client from environment variables.
    ///
    /// See [`ClientConfig::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Create a new client with the provided catalog and sprite base URLs
    /// and the default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if either base URL is invalid.
    pub fn new(base_url: &str, sprite_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig {
            api_url: base_url.to_string(),
            sprite_url: sprite_url.to_string(),
            ..ClientConfig::default()
        })
    }

    /// Create a new client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either base URL is invalid or the HTTP client
    /// cannot be built.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = parse_base(&config.api_url)?;
        let sprite_url = parse_base(&config.sprite_url)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(config.timeout)
            .build()
            .map_err(PokeApiError::NetworkError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            sprite_url: Arc::new(sprite_url),
        })
    }

    /// Get the catalog base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the sprite image URL for a species id.
    ///
    /// The URL is derived from the id alone; nothing is fetched.
    pub fn sprite_url(&self, id: u32) -> String {
        format!("{}sprites/pokemon/{id}.png", self.sprite_url.as_str())
    }

    /// Make a GET request.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(PokeApiError::NetworkError)?;

        Self::check_response(response).await
    }

    /// Make a GET request with query parameters.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(PokeApiError::NetworkError)?;

        Self::check_response(response).await
    }

    /// Read a successful response body and decode it as JSON.
    ///
    /// The body is read as text first so that malformed JSON and missing
    /// fields surface as [`PokeApiError::ParseError`] rather than as a
    /// transport error.
    pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.text().await.map_err(PokeApiError::NetworkError)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();
        tracing::debug!(status = status.as_u16(), url = %response.url(), "catalog response");

        if status.is_success() {
            return Ok(response);
        }

        // Handle rate limiting
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(PokeApiError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        let message = Self::extract_error_message(response, status).await;
        Err(PokeApiError::HttpStatusError {
            status_code: status.as_u16(),
            message,
        })
    }

    /// Extract error message from a failed response.
    async fn extract_error_message(response: Response, status: StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) if !b.trim().is_empty() => b,
            _ => return format!("HTTP {status}"),
        };

        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            for key in ["detail", "message", "error"] {
                if let Some(msg) = json.get(key).and_then(|m| m.as_str()) {
                    return msg.to_string();
                }
            }
        }

        body
    }
}

/// Parse a base URL, making sure it ends with `/` so relative joins append.
fn parse_base(raw: &str) -> Result<Url> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Ok(Url::parse(&normalized)?)
}
