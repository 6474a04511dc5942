//! Polymorphic collection media.
//!
//! Collection listings mix photos and videos in one array, told apart by a
//! `type` field. Every record decodes into exactly one [`MediaItem`]: records
//! with an unrecognised tag, or a known tag whose required nested object is
//! missing or malformed, become [`MediaItem::Unknown`] instead of failing the
//! page or disappearing from it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::PexKit;
use crate::error::{require, Result};
use crate::models::filters::MediaType;
use crate::models::photo::PhotoSource;
use crate::models::video::{User, VideoFile, VideoPicture};
use crate::pagination::{Page, PageMeta, PaginationParams};
use crate::result::ApiResult;
use crate::traits::List;

const PHOTO_TAG: &str = "Photo";
const VIDEO_TAG: &str = "Video";

/// An item inside a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MediaRecord", into = "MediaRecord")]
pub enum MediaItem {
    Photo(PhotoMedia),
    Video(VideoMedia),
    /// A record this version of the client does not understand.
    Unknown(UnknownMedia),
}

/// Discriminant of a [`MediaItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Photo,
    Video,
    Unknown,
}

/// A photo inside a collection.
///
/// Optional wire fields that are absent decode to empty strings, zero or
/// `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoMedia {
    pub id: u64,
    pub width: u32,
    pub height: u32,
    pub page_url: String,
    pub photographer: String,
    pub photographer_url: String,
    pub photographer_id: u64,
    pub avg_color: String,
    pub sources: PhotoSource,
    pub alt_text: String,
    pub liked: bool,
}

/// A video inside a collection.
///
/// Optional wire fields that are absent decode to empty strings, zero or
/// empty lists.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoMedia {
    pub id: u64,
    pub width: u32,
    pub height: u32,
    pub page_url: String,
    pub thumbnail_url: String,
    pub full_res_url: Option<String>,
    pub tags: Vec<String>,
    pub duration_seconds: u32,
    pub uploader: User,
    pub files: Vec<VideoFile>,
    pub preview_pictures: Vec<VideoPicture>,
}

/// A collection record with an unrecognised or incomplete payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMedia {
    pub id: u64,
    pub width: u32,
    pub height: u32,
    pub page_url: String,
    /// The `type` value exactly as received.
    pub original_type_tag: String,
}

impl MediaItem {
    pub fn id(&self) -> u64 {
        match self {
            Self::Photo(photo) => photo.id,
            Self::Video(video) => video.id,
            Self::Unknown(unknown) => unknown.id,
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            Self::Photo(photo) => photo.width,
            Self::Video(video) => video.width,
            Self::Unknown(unknown) => unknown.width,
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            Self::Photo(photo) => photo.height,
            Self::Video(video) => video.height,
            Self::Unknown(unknown) => unknown.height,
        }
    }

    /// Pexels page URL of the item.
    pub fn url(&self) -> &str {
        match self {
            Self::Photo(photo) => &photo.page_url,
            Self::Video(video) => &video.page_url,
            Self::Unknown(unknown) => &unknown.page_url,
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Photo(_) => MediaKind::Photo,
            Self::Video(_) => MediaKind::Video,
            Self::Unknown(_) => MediaKind::Unknown,
        }
    }

    /// The `type` tag this item carries on the wire.
    pub fn type_tag(&self) -> &str {
        match self {
            Self::Photo(_) => PHOTO_TAG,
            Self::Video(_) => VIDEO_TAG,
            Self::Unknown(unknown) => &unknown.original_type_tag,
        }
    }

    pub fn as_photo(&self) -> Option<&PhotoMedia> {
        match self {
            Self::Photo(photo) => Some(photo),
            _ => None,
        }
    }

    pub fn as_video(&self) -> Option<&VideoMedia> {
        match self {
            Self::Video(video) => Some(video),
            _ => None,
        }
    }

    pub fn as_unknown(&self) -> Option<&UnknownMedia> {
        match self {
            Self::Unknown(unknown) => Some(unknown),
            _ => None,
        }
    }
}

/// A nested object that either decoded into `T` or was kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Invalid(serde_json::Value),
}

impl<T> Lenient<T> {
    fn valid(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }
}

/// Optional list: absent means empty, present but malformed means invalid.
fn lenient_list<T>(field: Option<Lenient<Vec<T>>>) -> Option<Vec<T>> {
    match field {
        None => Some(Vec::new()),
        Some(list) => list.valid(),
    }
}

/// Flat wire shape of a collection media record.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MediaRecord {
    #[serde(rename = "type")]
    type_tag: String,
    id: u64,
    width: u32,
    height: u32,
    url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    photographer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    photographer_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    photographer_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avg_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    src: Option<Lenient<PhotoSource>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    liked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    full_res: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tags: Option<Lenient<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<Lenient<User>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    video_files: Option<Lenient<Vec<VideoFile>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    video_pictures: Option<Lenient<Vec<VideoPicture>>>,
}

impl MediaRecord {
    fn base(type_tag: &str, id: u64, width: u32, height: u32, url: &str) -> Self {
        Self {
            type_tag: type_tag.to_string(),
            id,
            width,
            height,
            url: url.to_string(),
            photographer: None,
            photographer_url: None,
            photographer_id: None,
            avg_color: None,
            src: None,
            alt: None,
            liked: None,
            image: None,
            full_res: None,
            tags: None,
            duration: None,
            user: None,
            video_files: None,
            video_pictures: None,
        }
    }

    fn into_unknown(self) -> UnknownMedia {
        UnknownMedia {
            id: self.id,
            width: self.width,
            height: self.height,
            page_url: self.url,
            original_type_tag: self.type_tag,
        }
    }

    fn into_photo(self) -> std::result::Result<PhotoMedia, Self> {
        let Some(sources) = self.src.clone().and_then(Lenient::valid) else {
            return Err(self);
        };
        Ok(PhotoMedia {
            id: self.id,
            width: self.width,
            height: self.height,
            page_url: self.url,
            photographer: self.photographer.unwrap_or_default(),
            photographer_url: self.photographer_url.unwrap_or_default(),
            photographer_id: self.photographer_id.unwrap_or_default(),
            avg_color: self.avg_color.unwrap_or_default(),
            sources,
            alt_text: self.alt.unwrap_or_default(),
            liked: self.liked.unwrap_or_default(),
        })
    }

    fn into_video(self) -> std::result::Result<VideoMedia, Self> {
        let uploader = self.user.clone().and_then(Lenient::valid);
        let tags = lenient_list(self.tags.clone());
        let files = lenient_list(self.video_files.clone());
        let pictures = lenient_list(self.video_pictures.clone());

        let (Some(uploader), Some(tags), Some(files), Some(preview_pictures)) =
            (uploader, tags, files, pictures)
        else {
            return Err(self);
        };
        Ok(VideoMedia {
            id: self.id,
            width: self.width,
            height: self.height,
            page_url: self.url,
            thumbnail_url: self.image.unwrap_or_default(),
            full_res_url: self.full_res,
            tags,
            duration_seconds: self.duration.unwrap_or_default(),
            uploader,
            files,
            preview_pictures,
        })
    }
}

impl From<MediaRecord> for MediaItem {
    fn from(record: MediaRecord) -> Self {
        let kind = match record.type_tag.as_str() {
            PHOTO_TAG => MediaKind::Photo,
            VIDEO_TAG => MediaKind::Video,
            _ => MediaKind::Unknown,
        };
        let decoded = match kind {
            MediaKind::Photo => record.into_photo().map(MediaItem::Photo),
            MediaKind::Video => record.into_video().map(MediaItem::Video),
            MediaKind::Unknown => Err(record),
        };
        decoded.unwrap_or_else(|record| {
            tracing::debug!(
                id = record.id,
                type_tag = %record.type_tag,
                "collection media kept as unknown"
            );
            MediaItem::Unknown(record.into_unknown())
        })
    }
}

impl From<MediaItem> for MediaRecord {
    fn from(item: MediaItem) -> Self {
        match item {
            MediaItem::Photo(photo) => Self {
                photographer: Some(photo.photographer),
                photographer_url: Some(photo.photographer_url),
                photographer_id: Some(photo.photographer_id),
                avg_color: Some(photo.avg_color),
                src: Some(Lenient::Valid(photo.sources)),
                alt: Some(photo.alt_text),
                liked: Some(photo.liked),
                ..Self::base(PHOTO_TAG, photo.id, photo.width, photo.height, &photo.page_url)
            },
            MediaItem::Video(video) => Self {
                image: Some(video.thumbnail_url),
                full_res: video.full_res_url,
                tags: Some(Lenient::Valid(video.tags)),
                duration: Some(video.duration_seconds),
                user: Some(Lenient::Valid(video.uploader)),
                video_files: Some(Lenient::Valid(video.files)),
                video_pictures: Some(Lenient::Valid(video.preview_pictures)),
                ..Self::base(VIDEO_TAG, video.id, video.width, video.height, &video.page_url)
            },
            MediaItem::Unknown(unknown) => Self::base(
                &unknown.original_type_tag,
                unknown.id,
                unknown.width,
                unknown.height,
                &unknown.page_url,
            ),
        }
    }
}

/// The media of one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionMediaQuery {
    id: String,
    media_type: Option<MediaType>,
}

impl CollectionMediaQuery {
    /// All media of collection `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is blank.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        require(!id.trim().is_empty(), || {
            "Collection id cannot be blank".to_string()
        })?;
        Ok(Self {
            id,
            media_type: None,
        })
    }

    /// Only return photos or only videos.
    #[must_use]
    pub fn media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    /// The collection identifier.
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// API response wrapper for collection media.
#[derive(Debug, Deserialize)]
struct CollectionMediaResponse {
    media: Vec<MediaItem>,
    #[serde(flatten)]
    meta: PageMeta,
}

impl From<CollectionMediaResponse> for Page<MediaItem> {
    fn from(response: CollectionMediaResponse) -> Self {
        Page::from_parts(response.media, response.meta)
    }
}

#[async_trait]
impl List for MediaItem {
    type Query = CollectionMediaQuery;

    #[tracing::instrument(skip(client))]
    async fn list_page(
        client: &PexKit,
        query: &Self::Query,
        pagination: PaginationParams,
    ) -> ApiResult<Page<Self>> {
        let url = client.photos_url(&["collections", &query.id]);
        let mut params = pagination.to_query(client.config().default_per_page());
        if let Some(media_type) = query.media_type {
            params.push(("type", media_type.as_str().to_string()));
        }

        client
            .execute::<CollectionMediaResponse>(url, &params)
            .await
            .map(Page::from)
    }

    #[tracing::instrument(skip(client))]
    async fn follow(client: &PexKit, page_url: &str) -> ApiResult<Page<Self>> {
        client
            .execute_page_url::<CollectionMediaResponse>(page_url)
            .await
            .map(Page::from)
    }
}
