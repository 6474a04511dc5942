//! The network boundary of the client.
//!
//! A [`Transport`] performs one HTTP GET and hands back the complete
//! response. It owns connection pooling, TLS and timeouts; everything above
//! it only sees a [`RawResponse`] or a [`TransportError`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Client;
use url::Url;

use crate::error::TransportError;

const USER_AGENT: &str = concat!("pexkit/", env!("CARGO_PKG_VERSION"));

/// A GET request as handed to a [`Transport`].
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// Endpoint URL without query parameters.
    pub url: Url,
    /// Query parameters, in order.
    pub query: Vec<(String, String)>,
    /// Request headers, including `Authorization`.
    pub headers: HeaderMap,
    /// Timeout for the whole request.
    pub timeout: Duration,
}

impl TransportRequest {
    /// The URL with the query parameters appended.
    pub fn resolved_url(&self) -> Url {
        let mut url = self.url.clone();
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        url
    }
}

/// A complete HTTP response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers (case-insensitive lookup).
    pub headers: HeaderMap,
    /// The fully resolved URL that was requested.
    pub url: Url,
    /// Raw body bytes, or `None` if the body could not be read.
    pub body: Option<Vec<u8>>,
}

impl RawResponse {
    /// The body as UTF-8 text, or `None` if it is unreadable or not UTF-8.
    pub fn text(&self) -> Option<&str> {
        self.body
            .as_deref()
            .and_then(|body| std::str::from_utf8(body).ok())
    }
}

/// Performs HTTP GET requests.
///
/// Implementations fail with a [`TransportError`] only when no status was
/// obtained. Once a status arrives the response is returned, with `body` set
/// to `None` if reading it failed.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Send a request and read the complete response.
    async fn send(&self, request: TransportRequest) -> Result<RawResponse, TransportError>;

    /// Release pooled resources. Called once when the owning client shuts down.
    async fn shutdown(&self) {}
}

/// The default [`Transport`], backed by a `reqwest` connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Build a transport with the given connect timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self { http })
    }

    /// Wrap an existing `reqwest` client.
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<RawResponse, TransportError> {
        let url = request.resolved_url();
        let response = self
            .http
            .get(request.url)
            .query(&request.query)
            .headers(request.headers)
            .timeout(request.timeout)
            .send()
            .await?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = match response.bytes().await {
            Ok(bytes) => Some(bytes.to_vec()),
            Err(err) => {
                tracing::debug!(status, error = %err, "response body unreadable");
                None
            }
        };

        Ok(RawResponse {
            status,
            headers,
            url,
            body,
        })
    }
}
