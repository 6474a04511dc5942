//! Pexels API client library.
//!
//! A Rust library for searching photos, videos and collections on the
//! Pexels REST API using a trait-based architecture where each operation
//! (Get, List) is defined as a trait that entity types implement.
//!
//! Every call returns an [`ApiResult`]: either the decoded payload together
//! with the [`RateLimitInfo`] of the response, or an [`ApiError`] naming what
//! went wrong. Invalid arguments are rejected with an [`Error`] before any
//! request is sent.
//!
//! # Quick Start
//!
//! ```no_run
//! use pexkit::{
//!     ApiResult, CollectionMediaQuery, Get, List, MediaItem, PaginationParams, PexKit, Photo,
//!     PhotoQuery,
//! };
//!
//! #[tokio::main]
//! async fn main() -> pexkit::Result<()> {
//!     // Create client from environment variables
//!     let client = PexKit::from_env()?;
//!
//!     // Get a photo by ID
//!     let photo = Photo::get(&client, 2014422).await.into_result()?;
//!     println!("Photo by {}", photo.photographer);
//!
//!     // Search, then react to the outcome without converting it
//!     let query = PhotoQuery::search("nature")?;
//!     match Photo::list_page(&client, &query, PaginationParams::default()).await {
//!         ApiResult::Success { data, rate_limit } => {
//!             println!("{} photos, {} requests left", data.len(), rate_limit.remaining);
//!         }
//!         ApiResult::Failure(err) => eprintln!("search failed: {err}"),
//!     }
//!
//!     // Mixed media in a collection, including kinds this client does not know
//!     let media = MediaItem::list_page(
//!         &client,
//!         &CollectionMediaQuery::new("9mp14cx")?,
//!         PaginationParams::default(),
//!     )
//!     .await
//!     .into_result()?;
//!     for item in &media {
//!         println!("{} {}", item.type_tag(), item.url());
//!     }
//!
//!     client.shutdown().await;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`Get`] - Fetch a single entity by ID
//! - [`List`] - Fetch one page of a listing, and follow its page links
//!
//! Requests go through a [`Transport`]; responses are turned into an
//! [`ApiResult`] by [`classify`], which maps status codes to [`ApiError`]
//! kinds and reads the rate limit headers.
//!
//! # Configuration
//!
//! [`Config::builder`] validates settings up front. [`PexKit::from_env`]
//! reads:
//!
//! - `PEXELS_API_KEY` (required) - Your Pexels API key
//! - `PEXELS_PER_PAGE` (optional) - Default page size, 1 to 80 (defaults to 15)

pub mod cli;
mod classify;
mod client;
mod config;
mod error;
mod models;
pub mod output;
mod pagination;
mod rate_limit;
mod result;
mod traits;
mod transport;

// Re-export core types
pub use classify::{classify, classify_error};
pub use client::PexKit;
pub use config::{Config, ConfigBuilder, LogLevel};
pub use error::{ApiError, Error, Result, TransportError};
pub use output::PrettyPrint;
pub use pagination::{Page, PaginationParams, MAX_PER_PAGE};
pub use rate_limit::RateLimitInfo;
pub use result::ApiResult;
pub use transport::{RawResponse, ReqwestTransport, Transport, TransportRequest};

// Re-export traits
pub use traits::{Get, List};

// Re-export models
pub use models::{
    // Photo types
    Photo,
    PhotoFilters,
    PhotoQuery,
    PhotoSource,
    // Video types
    User,
    Video,
    VideoFile,
    VideoFilters,
    VideoPicture,
    VideoQuery,
    MAX_VIDEO_QUERY_LEN,
    // Collection types
    Collection,
    CollectionMediaQuery,
    CollectionQuery,
    MediaItem,
    MediaKind,
    MediaType,
    PhotoMedia,
    UnknownMedia,
    VideoMedia,
    // Filter values
    Color,
    Locale,
    Orientation,
    Size,
};
