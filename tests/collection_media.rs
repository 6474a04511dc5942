//! Collection media listings against a mocked Pexels API.
//!
//! Collection pages mix photos and videos and may carry media kinds this
//! client does not know; those must survive decoding in place.

use pexkit::{
    CollectionMediaQuery, Config, List, MediaItem, MediaKind, MediaType, PaginationParams, PexKit,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PexKit {
    let config = Config::builder("test-key")
        .base_url(&server.uri())
        .build()
        .unwrap();
    PexKit::new(config).unwrap()
}

fn collection_body() -> serde_json::Value {
    serde_json::json!({
        "id": "9mp14cx",
        "media": [
            {
                "type": "Photo",
                "id": 3573351,
                "width": 3066,
                "height": 3968,
                "url": "https://www.pexels.com/photo/3573351/",
                "photographer": "Lukas Rodriguez",
                "photographer_url": "https://www.pexels.com/@lukas",
                "photographer_id": 1804,
                "avg_color": "#374824",
                "src": {
                    "original": "o", "large2x": "l2", "large": "l", "medium": "m",
                    "small": "s", "portrait": "p", "landscape": "ls", "tiny": "t"
                },
                "liked": false,
                "alt": "Trees during day"
            },
            {
                "type": "Audio",
                "id": 99,
                "width": 0,
                "height": 0,
                "url": "https://www.pexels.com/audio/99/",
                "bitrate": 320
            },
            {
                "type": "Video",
                "id": 6963395,
                "width": 1920,
                "height": 1080,
                "url": "https://www.pexels.com/video/6963395/",
                "image": "https://images.pexels.com/videos/6963395/preview.jpg",
                "full_res": null,
                "tags": ["forest"],
                "duration": 15,
                "user": {"id": 5, "name": "Ana", "url": "https://www.pexels.com/@ana"},
                "video_files": [{
                    "id": 1, "quality": "hd", "file_type": "video/mp4",
                    "width": 1920, "height": 1080, "fps": 29.97, "link": "https://v/1.mp4"
                }],
                "video_pictures": []
            },
            {
                "type": "Photo",
                "id": 4,
                "width": 10,
                "height": 10,
                "url": "https://www.pexels.com/photo/4/"
            }
        ],
        "page": 1,
        "per_page": 4,
        "total_results": 9,
        "next_page": "https://api.pexels.com/v1/collections/9mp14cx/?page=2&per_page=4"
    })
}

#[tokio::test]
async fn test_mixed_media_keeps_every_record_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/collections/9mp14cx"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let query = CollectionMediaQuery::new("9mp14cx").unwrap();
    let page = MediaItem::list_page(&client, &query, PaginationParams::default())
        .await
        .into_result()
        .unwrap();

    assert_eq!(page.len(), 4);
    assert!(page.has_next());
    assert_eq!(page.total_pages(), 3);

    let kinds: Vec<MediaKind> = page.iter().map(|item| item.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            MediaKind::Photo,
            MediaKind::Unknown,
            MediaKind::Video,
            MediaKind::Unknown
        ]
    );

    let audio = page.items[1].as_unknown().unwrap();
    assert_eq!(audio.original_type_tag, "Audio");
    assert_eq!(audio.id, 99);
    assert_eq!(audio.page_url, "https://www.pexels.com/audio/99/");

    let video = page.items[2].as_video().unwrap();
    assert_eq!(video.tags, vec!["forest".to_string()]);
    assert_eq!(video.uploader.name, "Ana");

    // A photo without its sources is kept, not dropped.
    let incomplete = page.items[3].as_unknown().unwrap();
    assert_eq!(incomplete.original_type_tag, "Photo");
    assert_eq!(incomplete.id, 4);
}

#[tokio::test]
async fn test_media_type_filter_and_id_encoding() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/collections/my%20set"))
        .and(query_param("type", "videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "my set",
            "media": [],
            "page": 1,
            "per_page": 15,
            "total_results": 0
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let query = CollectionMediaQuery::new("my set")
        .unwrap()
        .media_type(MediaType::Videos);
    let page = MediaItem::list_page(&client, &query, PaginationParams::default())
        .await
        .into_result()
        .unwrap();
    assert!(page.is_empty());
}
