//! Client configuration.

use std::env;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::error::{require, Error, Result};
use crate::pagination::validate_per_page;
use crate::transport::{ReqwestTransport, Transport};

const DEFAULT_PHOTOS_URL: &str = "https://api.pexels.com/v1/";
const DEFAULT_VIDEOS_URL: &str = "https://api.pexels.com/videos/";
const DEFAULT_PER_PAGE: u32 = 15;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP logging verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// No request logging.
    #[default]
    None,
    /// Log request and response headers.
    Headers,
    /// Log headers and response bodies.
    Body,
}

/// Validated, immutable client settings.
///
/// Built with [`Config::builder`] or [`Config::from_env`]. Invalid settings
/// are rejected when the configuration is built, never at call time.
pub struct Config {
    api_key: String,
    default_per_page: u32,
    timeout: Duration,
    log_level: LogLevel,
    photos_base_url: Url,
    videos_base_url: Url,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("default_per_page", &self.default_per_page)
            .field("timeout", &self.timeout)
            .field("log_level", &self.log_level)
            .field("photos_base_url", &self.photos_base_url.as_str())
            .field("videos_base_url", &self.videos_base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Start building a configuration for `api_key`.
    pub fn builder(api_key: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder {
            api_key: api_key.into(),
            default_per_page: DEFAULT_PER_PAGE,
            timeout: DEFAULT_TIMEOUT,
            log_level: LogLevel::None,
            photos_base_url: DEFAULT_PHOTOS_URL.to_string(),
            videos_base_url: DEFAULT_VIDEOS_URL.to_string(),
            transport: None,
        }
    }

    /// Create a configuration from environment variables.
    ///
    /// Uses `PEXELS_API_KEY` for authentication and optionally
    /// `PEXELS_PER_PAGE` for the default page size.
    ///
    /// # Errors
    ///
    /// Returns an error if `PEXELS_API_KEY` is not set or a value is invalid.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("PEXELS_API_KEY").map_err(|_| {
            Error::ConfigMissing("PEXELS_API_KEY environment variable not set".to_string())
        })?;

        let mut builder = Self::builder(api_key);
        if let Ok(per_page) = env::var("PEXELS_PER_PAGE") {
            let per_page = per_page.trim().parse().map_err(|_| {
                Error::InvalidArgument(format!("PEXELS_PER_PAGE is not a number: {per_page}"))
            })?;
            builder = builder.default_per_page(per_page);
        }

        builder.build()
    }

    /// The API key sent in the `Authorization` header.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Page size used when a call does not override it.
    pub fn default_per_page(&self) -> u32 {
        self.default_per_page
    }

    /// Request timeout handed to the transport.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// HTTP logging verbosity.
    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Base URL for photo and collection endpoints.
    pub fn photos_base_url(&self) -> &Url {
        &self.photos_base_url
    }

    /// Base URL for video endpoints.
    pub fn videos_base_url(&self) -> &Url {
        &self.videos_base_url
    }

    pub(crate) fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }
}

/// Builder for [`Config`].
#[must_use]
pub struct ConfigBuilder {
    api_key: String,
    default_per_page: u32,
    timeout: Duration,
    log_level: LogLevel,
    photos_base_url: String,
    videos_base_url: String,
    transport: Option<Arc<dyn Transport>>,
}

impl fmt::Debug for ConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigBuilder")
            .field("default_per_page", &self.default_per_page)
            .field("timeout", &self.timeout)
            .field("log_level", &self.log_level)
            .finish_non_exhaustive()
    }
}

impl ConfigBuilder {
    /// Default results per page (1-80, default 15).
    pub fn default_per_page(mut self, per_page: u32) -> Self {
        self.default_per_page = per_page;
        self
    }

    /// Request timeout (default 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// HTTP logging verbosity (default [`LogLevel::None`]).
    pub fn log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    /// Override the photos/collections base URL.
    pub fn photos_base_url(mut self, url: impl Into<String>) -> Self {
        self.photos_base_url = url.into();
        self
    }

    /// Override the videos base URL.
    pub fn videos_base_url(mut self, url: impl Into<String>) -> Self {
        self.videos_base_url = url.into();
        self
    }

    /// Point both base URLs at one server, as `{base}/v1/` and `{base}/videos/`.
    pub fn base_url(self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.photos_base_url(format!("{base}/v1/"))
            .videos_base_url(format!("{base}/videos/"))
    }

    /// Use a custom transport instead of the default `reqwest` one.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Validate the settings and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a blank API key or a default
    /// page size outside 1-80, and [`Error::UrlError`] for a bad base URL.
    pub fn build(self) -> Result<Config> {
        require(!self.api_key.trim().is_empty(), || {
            "API key must not be blank".to_string()
        })?;
        validate_per_page(self.default_per_page, "defaultPerPage")?;

        let photos_base_url = parse_base_url(&self.photos_base_url)?;
        let videos_base_url = parse_base_url(&self.videos_base_url)?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.timeout)?),
        };

        Ok(Config {
            api_key: self.api_key,
            default_per_page: self.default_per_page,
            timeout: self.timeout,
            log_level: self.log_level,
            photos_base_url,
            videos_base_url,
            transport,
        })
    }
}

/// Parse a base URL, ensuring it ends with `/` so relative joins append.
fn parse_base_url(raw: &str) -> Result<Url> {
    let with_slash = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    let url = Url::parse(&with_slash)?;
    require(!url.cannot_be_a_base(), || format!("{raw} cannot be used as a base URL"))?;
    Ok(url)
}
