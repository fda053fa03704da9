//! High-level instance client with typed HTTP methods.
//!
//! `InstanceClient` combines an instance URL and access token with an HTTP
//! client, builds API URLs, and decodes responses.
//!
//! ## Security
//!
//! - Access tokens are redacted in Debug output
//! - Tokens are never recorded in tracing spans

use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::client::HttpClient;
use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestBuilder;
use crate::DEFAULT_API_PREFIX;

/// Environment variable holding the instance base URL.
const ENV_INSTANCE_URL: &str = "TUSK_INSTANCE_URL";
/// Environment variable holding the access token.
const ENV_ACCESS_TOKEN: &str = "TUSK_ACCESS_TOKEN";

/// Authenticated client for one instance.
///
/// The client is immutable once built; clone it freely to share between
/// tasks.
///
/// # Example
///
/// ```rust,ignore
/// use tusk_client::InstanceClient;
///
/// let client = InstanceClient::new("https://mastodon.social", "token")?;
/// let blocks: Vec<serde_json::Value> =
///     client.send_json(client.get(&client.api_url("blocks"))).await?;
/// ```
#[derive(Clone)]
pub struct InstanceClient {
    http: HttpClient,
    instance_url: String,
    access_token: String,
    api_prefix: String,
}

impl std::fmt::Debug for InstanceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstanceClient")
            .field("instance_url", &self.instance_url)
            .field("access_token", &"[REDACTED]")
            .field("api_prefix", &self.api_prefix)
            .finish_non_exhaustive()
    }
}

impl InstanceClient {
    /// Create a new client for the given instance URL and access token.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(instance_url, access_token, ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    pub fn with_config(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let instance_url = instance_url.into();
        let parsed = url::Url::parse(&instance_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::new(ErrorKind::InvalidUrl(format!(
                "unsupported scheme '{}'",
                parsed.scheme()
            ))));
        }

        let http = HttpClient::new(config)?;
        Ok(Self {
            http,
            instance_url: instance_url.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
        })
    }

    /// Create a client from `TUSK_INSTANCE_URL` and `TUSK_ACCESS_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let instance_url = std::env::var(ENV_INSTANCE_URL).map_err(|_| {
            Error::new(ErrorKind::Config(format!("{ENV_INSTANCE_URL} is not set")))
        })?;
        let access_token = std::env::var(ENV_ACCESS_TOKEN).map_err(|_| {
            Error::new(ErrorKind::Config(format!("{ENV_ACCESS_TOKEN} is not set")))
        })?;
        Self::new(instance_url, access_token)
    }

    /// Override the API path prefix (default `api/v1`).
    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into().trim_matches('/').to_string();
        self
    }

    /// Get the instance URL.
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// Get the API path prefix.
    pub fn api_prefix(&self) -> &str {
        &self.api_prefix
    }

    /// Build the API URL for an endpoint path.
    ///
    /// Example: `api_url("accounts/42")` -> `https://host/api/v1/accounts/42`
    pub fn api_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}/{}", self.instance_url, self.api_prefix, path)
    }

    /// Create a GET request builder with authentication.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.http.get(url).bearer_auth(&self.access_token)
    }

    /// Create a POST request builder with authentication.
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.http.post(url).bearer_auth(&self.access_token)
    }

    /// Execute a request and decode the body as `T`.
    ///
    /// Error envelopes become [`ErrorKind::Api`]; see
    /// [`decode_body`](crate::decode_body).
    #[instrument(skip(self, request), fields(method = %request.method(), url = %request.url()))]
    pub async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.http.execute(request).await?;
        response.json().await
    }
}
