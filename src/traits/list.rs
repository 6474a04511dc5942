//! List trait for fetching pages of entities.

use async_trait::async_trait;

use crate::client::PexKit;
use crate::pagination::{Page, PaginationParams};
use crate::result::ApiResult;

/// List entities one page at a time.
///
/// # Example
///
/// ```no_run
/// use pexkit::{List, PaginationParams, PexKit, Photo, PhotoQuery};
///
/// # async fn example() -> pexkit::Result<()> {
/// let client = PexKit::from_env()?;
/// let query = PhotoQuery::search("nature")?;
///
/// let page = Photo::list_page(&client, &query, PaginationParams::new(1, 40)?)
///     .await
///     .into_result()?;
/// println!("{} of {} photos", page.len(), page.total_results);
///
/// if let Some(next) = Photo::next_page(&client, &page).await {
///     let next = next.into_result()?;
///     println!("page {} has {} more", next.page, next.len());
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait List: Sized + Send + Sync {
    /// Which listing to fetch, and its filters.
    type Query: Send + Sync;

    /// Fetch one page of the listing described by `query`.
    ///
    /// When `pagination` carries no page size the client's configured
    /// default is sent.
    async fn list_page(
        client: &PexKit,
        query: &Self::Query,
        pagination: PaginationParams,
    ) -> ApiResult<Page<Self>>;

    /// Fetch the page behind a page URL returned by the API.
    ///
    /// The URL is requested exactly as given.
    async fn follow(client: &PexKit, page_url: &str) -> ApiResult<Page<Self>>;

    /// Fetch the page after `page`, or `None` on the last page.
    async fn next_page(client: &PexKit, page: &Page<Self>) -> Option<ApiResult<Page<Self>>> {
        match page.next_page.as_deref() {
            Some(url) => Some(Self::follow(client, url).await),
            None => None,
        }
    }

    /// Fetch the page before `page`, or `None` on the first page.
    async fn prev_page(client: &PexKit, page: &Page<Self>) -> Option<ApiResult<Page<Self>>> {
        match page.prev_page.as_deref() {
            Some(url) => Some(Self::follow(client, url).await),
            None => None,
        }
    }
}
