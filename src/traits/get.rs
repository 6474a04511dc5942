//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::PexKit;
use crate::result::ApiResult;

/// Fetch a single entity by ID.
///
/// # Example
///
/// ```no_run
/// use pexkit::{ApiResult, Get, PexKit, Photo};
///
/// # async fn example() -> pexkit::Result<()> {
/// let client = PexKit::from_env()?;
/// if let ApiResult::Success { data, .. } = Photo::get(&client, 2014422).await {
///     println!("{} by {}", data.url, data.photographer);
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity.
    type Id: Send;

    /// Fetch the entity by ID.
    ///
    /// A missing entity yields [`ApiError::NotFound`](crate::ApiError::NotFound)
    /// naming the requested URL.
    async fn get(client: &PexKit, id: Self::Id) -> ApiResult<Self>;
}
