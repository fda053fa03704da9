//! HTTP response handling and the two-stage body decode.

use std::sync::LazyLock;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Error, ErrorKind, Result};

/// Response whose body has not been read yet.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Read the body and decode it with [`decode_body`].
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let status = self.status();
        let body = self.text().await?;
        decode_body(status, &body)
    }
}

/// Error object returned by the instance: `{"error": "..."}`.
///
/// The empty envelope (missing or empty `error`) is not an error; any JSON
/// object without an `error` key decodes to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(rename = "error", default)]
    pub text: String,
}

impl ErrorEnvelope {
    /// Probe a response body for an error envelope.
    ///
    /// Returns `None` when the body is not a JSON object with a string
    /// `error` field, or when that field is empty.
    pub fn probe(body: &str) -> Option<Self> {
        serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .filter(ErrorEnvelope::is_error)
    }

    /// Returns true if the envelope carries a message.
    pub fn is_error(&self) -> bool {
        !self.text.is_empty()
    }
}

/// Decode a response body in two stages.
///
/// 1. A non-empty error envelope becomes [`ErrorKind::Api`] with the
///    message verbatim, whatever the status.
/// 2. Any other non-2xx status becomes [`ErrorKind::Http`].
/// 3. Otherwise the body is decoded as `T`; malformed JSON is
///    [`ErrorKind::Json`].
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    if let Some(envelope) = ErrorEnvelope::probe(body) {
        tracing::warn!(status, message = %envelope.text, "Instance returned an error envelope");
        return Err(Error::new(ErrorKind::Api {
            status,
            message: envelope.text,
        }));
    }

    if !(200..300).contains(&status) {
        return Err(Error::new(ErrorKind::Http {
            status,
            message: sanitize_error_message(body),
        }));
    }

    serde_json::from_str(body).map_err(Into::into)
}

static BEARER_PATTERN: LazyLock<regex_lite::Regex> =
    LazyLock::new(|| regex_lite::Regex::new(r"(?i)bearer\s+[A-Za-z0-9_\-.~+/]+=*").unwrap());

static TOKEN_PARAM_PATTERN: LazyLock<regex_lite::Regex> = LazyLock::new(|| {
    regex_lite::Regex::new(r"(access_token|client_secret|code)=[^&\s]+").unwrap()
});

/// Sanitize an error message to prevent exposing sensitive data.
///
/// Bearer tokens and `access_token=` style parameters are redacted, and
/// messages longer than 500 bytes are truncated.
fn sanitize_error_message(message: &str) -> String {
    const MAX_LENGTH: usize = 500;

    let mut sanitized = BEARER_PATTERN
        .replace_all(message, "Bearer [REDACTED_TOKEN]")
        .to_string();
    sanitized = TOKEN_PARAM_PATTERN
        .replace_all(&sanitized, "$1=[REDACTED]")
        .to_string();

    if sanitized.len() > MAX_LENGTH {
        let mut cut = MAX_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}
