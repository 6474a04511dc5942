//! Collection model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::PexKit;
use crate::pagination::{Page, PageMeta, PaginationParams};
use crate::result::ApiResult;
use crate::traits::List;

/// A collection of photos and videos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection identifier (an opaque string such as `9mp14cx`).
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the collection is private to its owner.
    #[serde(default)]
    pub private: bool,
    pub media_count: u32,
    pub photos_count: u32,
    pub videos_count: u32,
}

/// Which collections to list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollectionQuery {
    /// Collections featured by Pexels.
    #[default]
    Featured,
    /// Collections owned by the API key holder.
    Mine,
}

/// API response wrapper for collection listings.
#[derive(Debug, Deserialize)]
struct CollectionListResponse {
    collections: Vec<Collection>,
    #[serde(flatten)]
    meta: PageMeta,
}

impl From<CollectionListResponse> for Page<Collection> {
    fn from(response: CollectionListResponse) -> Self {
        Page::from_parts(response.collections, response.meta)
    }
}

#[async_trait]
impl List for Collection {
    type Query = CollectionQuery;

    #[tracing::instrument(skip(client))]
    async fn list_page(
        client: &PexKit,
        query: &Self::Query,
        pagination: PaginationParams,
    ) -> ApiResult<Page<Self>> {
        let url = match query {
            CollectionQuery::Featured => client.photos_url(&["collections", "featured"]),
            CollectionQuery::Mine => client.photos_url(&["collections"]),
        };
        let params = pagination.to_query(client.config().default_per_page());

        client
            .execute::<CollectionListResponse>(url, &params)
            .await
            .map(Page::from)
    }

    #[tracing::instrument(skip(client))]
    async fn follow(client: &PexKit, page_url: &str) -> ApiResult<Page<Self>> {
        client
            .execute_page_url::<CollectionListResponse>(page_url)
            .await
            .map(Page::from)
    }
}
