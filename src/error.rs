//! Error types for Pexels API operations.
//!
//! Two families live here. [`Error`] covers client-side problems that are
//! raised before any request is sent (bad arguments, missing configuration).
//! [`ApiError`] classifies the outcome of a request that was attempted and is
//! carried inside [`ApiResult::Failure`](crate::ApiResult::Failure).

use thiserror::Error;

/// Client-side errors raised synchronously at the call site.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration is missing or incomplete.
    #[error("Pexels configuration required: {0}")]
    ConfigMissing(String),

    /// An argument violated a documented precondition.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failed to build the default HTTP transport.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON serialization error.
    #[error("Failed to serialize: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// The API call was made but did not succeed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Result type alias for client-side operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Builds an [`Error::InvalidArgument`] when `condition` does not hold.
pub(crate) fn require(condition: bool, message: impl FnOnce() -> String) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::InvalidArgument(message()))
    }
}

/// The failure kinds of an attempted API call.
///
/// Every message is derived from the variant's fields alone.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API key is missing or invalid (HTTP 401).
    #[error("Invalid or missing API key")]
    Unauthorized,

    /// Access to the requested resource is forbidden (HTTP 403).
    #[error("Access forbidden")]
    Forbidden,

    /// The requested resource was not found (HTTP 404).
    #[error("Resource not found: {resource}")]
    NotFound {
        /// The fully resolved request URL.
        resource: String,
    },

    /// Rate limit exceeded (HTTP 429).
    #[error("Rate limit exceeded{}", retry_suffix(.retry_after_secs))]
    RateLimited {
        /// Seconds to wait, from the `Retry-After` header.
        retry_after_secs: Option<u64>,
    },

    /// Server error on the API side (HTTP 5xx).
    #[error("Server error: {status_code}")]
    ServerError { status_code: u16 },

    /// The transport failed before a status code was received.
    #[error("Network error: {cause}")]
    NetworkError {
        #[source]
        cause: TransportError,
    },

    /// Any other non-success outcome.
    #[error("Unknown error{}{}", status_suffix(.status_code), body_suffix(.body))]
    Unknown {
        status_code: Option<u16>,
        body: Option<String>,
    },
}

impl ApiError {
    /// The HTTP status code behind this error, when one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Forbidden => Some(403),
            ApiError::NotFound { .. } => Some(404),
            ApiError::RateLimited { .. } => Some(429),
            ApiError::ServerError { status_code } => Some(*status_code),
            ApiError::NetworkError { .. } => None,
            ApiError::Unknown { status_code, .. } => *status_code,
        }
    }
}

fn retry_suffix(retry_after_secs: &Option<u64>) -> String {
    match retry_after_secs {
        Some(secs) => format!(". Retry after {secs} seconds"),
        None => String::new(),
    }
}

fn status_suffix(status_code: &Option<u16>) -> String {
    match status_code {
        Some(code) => format!(" (status: {code})"),
        None => String::new(),
    }
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(body) => format!(": {body}"),
        None => String::new(),
    }
}

/// A failure reported by a [`Transport`](crate::Transport) before any
/// response status was available (DNS, connect, TLS, timeout).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl TransportError {
    /// Create a transport error with a message and no underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying error, keeping it as the source.
    pub fn from_source<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// The underlying error, if any.
    pub fn inner(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::from_source(err)
    }
}
