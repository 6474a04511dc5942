//! Pexels API client.
//!
//! Handles authentication and request execution. Endpoint-specific
//! operations are implemented via the [`Get`](crate::Get) and
//! [`List`](crate::List) traits on model types.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use url::Url;

use crate::classify::classify;
use crate::config::{Config, LogLevel};
use crate::error::{ApiError, Error, Result, TransportError};
use crate::result::ApiResult;
use crate::transport::{RawResponse, TransportRequest};

/// Pexels API client.
///
/// Owns its [`Transport`](crate::Transport) for its whole lifetime. Calls
/// take `&self` and share no mutable state, so any number of requests may be
/// in flight at once; wrap the client in an `Arc` to share it across tasks.
///
/// # Example
///
/// ```no_run
/// use pexkit::{Config, PexKit};
///
/// # async fn example() -> pexkit::Result<()> {
/// // Create from environment variables
/// let client = PexKit::from_env()?;
///
/// // Or configure manually
/// let config = Config::builder("your-api-key").default_per_page(40).build()?;
/// let client = PexKit::new(config)?;
///
/// client.shutdown().await;
/// # Ok(())
/// # }
/// ```
pub struct PexKit {
    config: Config,
    authorization: HeaderValue,
}

impl std::fmt::Debug for PexKit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PexKit")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PexKit {
    /// Create a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key cannot be sent as a header value.
    pub fn new(config: Config) -> Result<Self> {
        let mut authorization = HeaderValue::from_str(config.api_key()).map_err(|_| {
            Error::InvalidArgument("API key contains characters not allowed in a header".into())
        })?;
        authorization.set_sensitive(true);

        Ok(Self {
            config,
            authorization,
        })
    }

    /// Create a client with default settings for `api_key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is blank.
    pub fn with_api_key(api_key: &str) -> Result<Self> {
        Self::new(Config::builder(api_key).build()?)
    }

    /// Create a client from environment variables.
    ///
    /// See [`Config::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if `PEXELS_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    /// The client configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build a photos/collections endpoint URL from path segments.
    pub(crate) fn photos_url(&self, segments: &[&str]) -> Url {
        endpoint(self.config.photos_base_url(), segments)
    }

    /// Build a videos endpoint URL from path segments.
    pub(crate) fn videos_url(&self, segments: &[&str]) -> Url {
        endpoint(self.config.videos_base_url(), segments)
    }

    /// Execute a GET request and classify the response.
    ///
    /// Sends the raw API key in the `Authorization` header. Transport
    /// failures become [`ApiError::NetworkError`]; responses go through
    /// [`classify`](crate::classify).
    #[tracing::instrument(skip(self, url, query), fields(url = %url))]
    pub async fn execute<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.authorization.clone());

        let request = TransportRequest {
            url,
            query: query
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
            headers,
            timeout: self.config.timeout(),
        };
        self.log_request(&request);

        match self.config.transport().send(request).await {
            Ok(response) => {
                self.log_response(&response);
                classify(response)
            }
            Err(cause) => {
                tracing::debug!(error = %cause, "transport failed");
                ApiResult::Failure(ApiError::NetworkError { cause })
            }
        }
    }

    /// Execute a GET request against a page URL returned by the API.
    pub(crate) async fn execute_page_url<T: DeserializeOwned>(&self, page_url: &str) -> ApiResult<T> {
        match Url::parse(page_url) {
            Ok(url) => self.execute(url, &[]).await,
            Err(err) => ApiResult::Failure(ApiError::NetworkError {
                cause: TransportError::from_source(err),
            }),
        }
    }

    /// Release the transport. The client cannot be used afterwards.
    pub async fn shutdown(self) {
        self.config.transport().shutdown().await;
        tracing::debug!("client shut down");
    }

    fn log_request(&self, request: &TransportRequest) {
        if self.config.log_level() == LogLevel::None {
            return;
        }
        tracing::debug!(
            method = "GET",
            url = %request.resolved_url(),
            headers = ?redacted(&request.headers),
            "sending request"
        );
    }

    fn log_response(&self, response: &RawResponse) {
        match self.config.log_level() {
            LogLevel::None => {}
            LogLevel::Headers => {
                tracing::debug!(
                    status = response.status,
                    headers = ?response.headers,
                    "received response"
                );
            }
            LogLevel::Body => {
                tracing::debug!(
                    status = response.status,
                    headers = ?response.headers,
                    body = response.text().unwrap_or("<binary>"),
                    "received response"
                );
            }
        }
    }
}

fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

fn redacted(headers: &HeaderMap) -> HeaderMap {
    let mut headers = headers.clone();
    if headers.contains_key(AUTHORIZATION) {
        headers.insert(AUTHORIZATION, HeaderValue::from_static("<redacted>"));
    }
    headers
}
