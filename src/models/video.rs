//! Video model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::PexKit;
use crate::error::{require, Result};
use crate::models::filters::VideoFilters;
use crate::pagination::{Page, PageMeta, PaginationParams};
use crate::result::ApiResult;
use crate::traits::{Get, List};

/// Longest search term the video search accepts.
pub const MAX_VIDEO_QUERY_LEN: usize = 200;

/// A video on Pexels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier.
    pub id: u64,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pexels page URL for the video.
    pub url: String,
    /// Screenshot URL.
    pub image: String,
    /// Full resolution download URL, when offered.
    #[serde(default)]
    pub full_res: Option<String>,
    /// Tags attached to the video.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Duration in seconds.
    pub duration: u32,
    /// The uploader.
    pub user: User,
    /// Encoded renditions.
    #[serde(default)]
    pub video_files: Vec<VideoFile>,
    /// Preview frames.
    #[serde(default)]
    pub video_pictures: Vec<VideoPicture>,
}

impl Video {
    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// The widest rendition with the given quality (`"hd"`, `"sd"`, `"uhd"`).
    pub fn best_file(&self, quality: &str) -> Option<&VideoFile> {
        self.video_files
            .iter()
            .filter(|file| file.quality.as_deref() == Some(quality))
            .max_by_key(|file| file.width.unwrap_or(0))
    }
}

/// The person who uploaded a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub url: String,
}

/// One encoded rendition of a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoFile {
    pub id: u64,
    /// `hd`, `sd` or `uhd`; absent for some source files.
    #[serde(default)]
    pub quality: Option<String>,
    /// MIME type, e.g. `video/mp4`.
    pub file_type: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub fps: Option<f64>,
    /// Direct download link.
    pub link: String,
}

/// A preview frame of a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoPicture {
    pub id: u64,
    pub picture: String,
    pub nr: u32,
}

/// Which video listing to fetch.
///
/// The constructors validate the search term and the filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoQuery(VideoListing);

#[derive(Debug, Clone, PartialEq, Eq)]
enum VideoListing {
    Search { query: String, filters: VideoFilters },
    Popular { filters: VideoFilters },
}

impl VideoQuery {
    /// Search for `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if `query` is blank or longer than 200 characters,
    /// or if `filters` fail [`VideoFilters::validate`].
    pub fn search(query: impl Into<String>, filters: VideoFilters) -> Result<Self> {
        let query = query.into();
        require(!query.trim().is_empty(), || {
            "Search query cannot be blank".to_string()
        })?;
        require(query.chars().count() <= MAX_VIDEO_QUERY_LEN, || {
            format!("Search query cannot exceed {MAX_VIDEO_QUERY_LEN} characters")
        })?;
        filters.validate()?;
        Ok(Self(VideoListing::Search { query, filters }))
    }

    /// Popular videos. Only the dimension and duration filters apply.
    ///
    /// # Errors
    ///
    /// Returns an error if `filters` fail [`VideoFilters::validate`].
    pub fn popular(filters: VideoFilters) -> Result<Self> {
        filters.validate()?;
        Ok(Self(VideoListing::Popular { filters }))
    }
}

/// API response wrapper for video listings.
#[derive(Debug, Serialize, Deserialize)]
struct VideoListResponse {
    videos: Vec<Video>,
    #[serde(flatten)]
    meta: PageMeta,
}

impl From<VideoListResponse> for Page<Video> {
    fn from(response: VideoListResponse) -> Self {
        Page::from_parts(response.videos, response.meta)
    }
}

#[async_trait]
impl Get for Video {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &PexKit, id: u64) -> ApiResult<Self> {
        let url = client.videos_url(&["videos", &id.to_string()]);
        client.execute(url, &[]).await
    }
}

#[async_trait]
impl List for Video {
    type Query = VideoQuery;

    #[tracing::instrument(skip(client))]
    async fn list_page(
        client: &PexKit,
        query: &Self::Query,
        pagination: PaginationParams,
    ) -> ApiResult<Page<Self>> {
        let per_page = client.config().default_per_page();

        let (url, params) = match &query.0 {
            VideoListing::Search { query, filters } => {
                let mut params = vec![("query", query.clone())];
                params.extend(pagination.to_query(per_page));
                filters.push_search_query(&mut params);
                (client.videos_url(&["search"]), params)
            }
            VideoListing::Popular { filters } => {
                let mut params = pagination.to_query(per_page);
                filters.push_dimension_query(&mut params);
                (client.videos_url(&["popular"]), params)
            }
        };

        client
            .execute::<VideoListResponse>(url, &params)
            .await
            .map(Page::from)
    }

    #[tracing::instrument(skip(client))]
    async fn follow(client: &PexKit, page_url: &str) -> ApiResult<Page<Self>> {
        client
            .execute_page_url::<VideoListResponse>(page_url)
            .await
            .map(Page::from)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::Error;
    use tokio_test::{assert_err, assert_ok};

    pub(crate) fn video_json(id: u64) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "width": 1920,
            "height": 1080,
            "url": format!("https://www.pexels.com/video/{id}/"),
            "image": "https://images.pexels.com/videos/1/pictures/preview-0.jpg",
            "full_res": null,
            "tags": [],
            "duration": 8,
            "user": {
                "id": 1949,
                "name": "Mikhail Nilov",
                "url": "https://www.pexels.com/@mikhail-nilov"
            },
            "video_files": [
                {
                    "id": 1,
                    "quality": "sd",
                    "file_type": "video/mp4",
                    "width": 640,
                    "height": 360,
                    "fps": 25.0,
                    "link": "https://player.vimeo.com/external/1.sd.mp4"
                },
                {
                    "id": 2,
                    "quality": "hd",
                    "file_type": "video/mp4",
                    "width": 1280,
                    "height": 720,
                    "fps": 25.0,
                    "link": "https://player.vimeo.com/external/2.hd.mp4"
                },
                {
                    "id": 3,
                    "quality": "hd",
                    "file_type": "video/mp4",
                    "width": 1920,
                    "height": 1080,
                    "fps": 25.0,
                    "link": "https://player.vimeo.com/external/3.hd.mp4"
                },
                {
                    "id": 4,
                    "quality": null,
                    "file_type": "video/mp4",
                    "width": null,
                    "height": null,
                    "fps": null,
                    "link": "https://player.vimeo.com/external/4.mp4"
                }
            ],
            "video_pictures": [
                {"id": 10, "picture": "https://images.pexels.com/videos/1/pictures/preview-0.jpg", "nr": 0}
            ]
        })
    }

    #[test]
    fn test_video_deserialize() {
        let video: Video = serde_json::from_value(video_json(857251)).unwrap();
        assert_eq!(video.id, 857251);
        assert_eq!(video.full_res, None);
        assert_eq!(video.user.name, "Mikhail Nilov");
        assert_eq!(video.video_files.len(), 4);
        assert_eq!(video.video_files[3].quality, None);
        assert_eq!(video.video_pictures[0].nr, 0);
    }

    #[test]
    fn test_video_optional_lists_default_to_empty() {
        let mut json = video_json(1);
        let object = json.as_object_mut().unwrap();
        object.remove("tags");
        object.remove("video_pictures");
        object.remove("full_res");

        let video: Video = serde_json::from_value(json).unwrap();
        assert!(video.tags.is_empty());
        assert!(video.video_pictures.is_empty());
    }

    #[test]
    fn test_best_file_picks_widest_matching_quality() {
        let video: Video = serde_json::from_value(video_json(1)).unwrap();
        assert_eq!(video.best_file("hd").map(|f| f.id), Some(3));
        assert_eq!(video.best_file("sd").map(|f| f.id), Some(1));
        assert!(video.best_file("uhd").is_none());
    }

    #[test]
    fn test_search_query_validation() {
        assert_err!(VideoQuery::search("", VideoFilters::default()));
        assert_err!(VideoQuery::search("   ", VideoFilters::default()));
        assert_ok!(VideoQuery::search("a".repeat(200), VideoFilters::default()));

        let err = VideoQuery::search("a".repeat(201), VideoFilters::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(msg) if msg.contains("200")));
    }

    #[test]
    fn test_filters_validated_on_construction() {
        let inverted = VideoFilters {
            min_duration: Some(30),
            max_duration: Some(10),
            ..Default::default()
        };
        assert_err!(VideoQuery::search("ocean", inverted.clone()));
        assert_err!(VideoQuery::popular(inverted));

        let zero_width = VideoFilters {
            min_width: Some(0),
            ..Default::default()
        };
        assert_err!(VideoQuery::popular(zero_width));
        assert_ok!(VideoQuery::popular(VideoFilters::default()));
    }
}
