//! Photo model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::PexKit;
use crate::error::{require, Result};
use crate::models::filters::PhotoFilters;
use crate::pagination::{Page, PageMeta, PaginationParams};
use crate::result::ApiResult;
use crate::traits::{Get, List};

/// A photo on Pexels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    /// Unique identifier.
    pub id: u64,
    /// Original width in pixels.
    pub width: u32,
    /// Original height in pixels.
    pub height: u32,
    /// Pexels page URL for the photo.
    pub url: String,
    /// Name of the photographer.
    pub photographer: String,
    /// Profile URL of the photographer.
    pub photographer_url: String,
    /// Unique identifier of the photographer.
    pub photographer_id: u64,
    /// Average color as a hex string (e.g. `#978E82`).
    pub avg_color: String,
    /// Available image sizes.
    pub src: PhotoSource,
    /// Alt text description.
    pub alt: String,
    /// Whether the API key owner liked the photo.
    #[serde(default)]
    pub liked: bool,
}

impl Photo {
    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Pre-generated sizes of a photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSource {
    /// Original full-resolution image.
    pub original: String,
    /// Large at 2x density.
    pub large2x: String,
    /// About 940x650.
    pub large: String,
    /// About 350px high.
    pub medium: String,
    /// About 130px high.
    pub small: String,
    /// Portrait crop, about 800x1200.
    pub portrait: String,
    /// Landscape crop, about 1200x627.
    pub landscape: String,
    /// About 280x200.
    pub tiny: String,
}

/// Which photo listing to fetch.
///
/// Built through [`PhotoQuery::search`], [`PhotoQuery::search_with`] or
/// [`PhotoQuery::curated`], so a search term is never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoQuery(PhotoListing);

#[derive(Debug, Clone, PartialEq, Eq)]
enum PhotoListing {
    Search { query: String, filters: PhotoFilters },
    Curated,
}

impl PhotoQuery {
    /// Search for `query` without filters.
    ///
    /// # Errors
    ///
    /// Returns an error if `query` is blank.
    pub fn search(query: impl Into<String>) -> Result<Self> {
        Self::search_with(query, PhotoFilters::default())
    }

    /// Search for `query` with filters.
    ///
    /// # Errors
    ///
    /// Returns an error if `query` is blank.
    pub fn search_with(query: impl Into<String>, filters: PhotoFilters) -> Result<Self> {
        let query = query.into();
        require(!query.trim().is_empty(), || {
            "Search query cannot be blank".to_string()
        })?;
        Ok(Self(PhotoListing::Search { query, filters }))
    }

    /// Curated photos.
    pub fn curated() -> Self {
        Self(PhotoListing::Curated)
    }
}

/// API response wrapper for photo listings.
#[derive(Debug, Serialize, Deserialize)]
struct PhotoListResponse {
    photos: Vec<Photo>,
    #[serde(flatten)]
    meta: PageMeta,
}

impl From<PhotoListResponse> for Page<Photo> {
    fn from(response: PhotoListResponse) -> Self {
        Page::from_parts(response.photos, response.meta)
    }
}

#[async_trait]
impl Get for Photo {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &PexKit, id: u64) -> ApiResult<Self> {
        let url = client.photos_url(&["photos", &id.to_string()]);
        client.execute(url, &[]).await
    }
}

#[async_trait]
impl List for Photo {
    type Query = PhotoQuery;

    #[tracing::instrument(skip(client))]
    async fn list_page(
        client: &PexKit,
        query: &Self::Query,
        pagination: PaginationParams,
    ) -> ApiResult<Page<Self>> {
        let per_page = client.config().default_per_page();

        let (url, params) = match &query.0 {
            PhotoListing::Search { query, filters } => {
                let mut params = vec![("query", query.clone())];
                params.extend(pagination.to_query(per_page));
                filters.push_query(&mut params);
                (client.photos_url(&["search"]), params)
            }
            PhotoListing::Curated => {
                (client.photos_url(&["curated"]), pagination.to_query(per_page))
            }
        };

        client
            .execute::<PhotoListResponse>(url, &params)
            .await
            .map(Page::from)
    }

    #[tracing::instrument(skip(client))]
    async fn follow(client: &PexKit, page_url: &str) -> ApiResult<Page<Self>> {
        client
            .execute_page_url::<PhotoListResponse>(page_url)
            .await
            .map(Page::from)
    }
}
