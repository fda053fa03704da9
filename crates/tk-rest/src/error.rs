//! Error types for tk-rest.

use tusk_client::ErrorKind as ClientErrorKind;

/// Result type alias for tk-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for account API operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Shorthand for an [`ErrorKind::InvalidParameter`] error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidParameter(message.into()))
    }

    /// Wrap a client error with the name of the operation that produced it.
    ///
    /// Error envelopes keep their message verbatim, decode failures become
    /// [`ErrorKind::Decode`] and everything else is a transport failure.
    pub fn from_client(operation: impl Into<String>, err: tusk_client::Error) -> Self {
        let operation = operation.into();
        let kind = match &err.kind {
            ClientErrorKind::Api { message, .. } => ErrorKind::Api(message.clone()),
            ClientErrorKind::Json(message) => ErrorKind::Decode {
                operation,
                message: message.clone(),
            },
            _ => ErrorKind::Transport {
                operation,
                message: err.to_string(),
            },
        };
        Self::with_source(kind, err)
    }

    /// Returns true if the entity was missing from an otherwise successful call.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::EntityNotFound)
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Unknown target or missing required parameter.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Missing or invalid numeric ID.
    #[error("Invalid ID")]
    InvalidId,

    /// The call succeeded but returned no matching entity.
    #[error("Entity not found")]
    EntityNotFound,

    /// The request shape is not supported by the endpoint.
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// Error message returned by the instance.
    #[error("{0}")]
    Api(String),

    /// Network or HTTP failure.
    #[error("{operation}: {message}")]
    Transport { operation: String, message: String },

    /// The response body could not be decoded.
    #[error("{operation} API: {message}")]
    Decode { operation: String, message: String },

    /// Client construction or configuration error.
    #[error("Client error: {0}")]
    Client(String),
}

impl From<tusk_client::Error> for Error {
    fn from(err: tusk_client::Error) -> Self {
        Error {
            kind: ErrorKind::Client(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}
