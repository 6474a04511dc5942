//! Execution tests for single-entity fetches.
//!
//! Uses wiremock to mock the Pexels API and test actual execution flow.

use pexkit::{ApiError, ApiResult, Config, Get, PexKit, Photo, Video};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PexKit {
    let config = Config::builder("test-key")
        .base_url(&server.uri())
        .build()
        .unwrap();
    PexKit::new(config).unwrap()
}

fn photo_json(id: u64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "width": 3024,
        "height": 4032,
        "url": format!("https://www.pexels.com/photo/{id}/"),
        "photographer": "Joey Farina",
        "photographer_url": "https://www.pexels.com/@joey",
        "photographer_id": 680589,
        "avg_color": "#978E82",
        "src": {
            "original": "https://images.pexels.com/photos/2014422/a.jpeg",
            "large2x": "https://images.pexels.com/photos/2014422/a.jpeg?dpr=2",
            "large": "https://images.pexels.com/photos/2014422/a.jpeg?h=650",
            "medium": "https://images.pexels.com/photos/2014422/a.jpeg?h=350",
            "small": "https://images.pexels.com/photos/2014422/a.jpeg?h=130",
            "portrait": "https://images.pexels.com/photos/2014422/a.jpeg?h=1200",
            "landscape": "https://images.pexels.com/photos/2014422/a.jpeg?h=627",
            "tiny": "https://images.pexels.com/photos/2014422/a.jpeg?h=200"
        },
        "alt": "Brown Rocks During Golden Hour",
        "liked": false
    })
}

#[tokio::test]
async fn test_get_photo_sends_key_and_decodes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/photos/2014422"))
        .and(header("Authorization", "test-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Ratelimit-Limit", "25000")
                .insert_header("X-Ratelimit-Remaining", "24998")
                .insert_header("X-Ratelimit-Reset", "1717000000")
                .set_body_json(photo_json(2014422)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    match Photo::get(&client, 2014422).await {
        ApiResult::Success { data, rate_limit } => {
            assert_eq!(data.id, 2014422);
            assert_eq!(data.photographer, "Joey Farina");
            assert_eq!(rate_limit.limit, 25000);
            assert_eq!(rate_limit.remaining, 24998);
            assert_eq!(rate_limit.reset, 1_717_000_000);
        }
        ApiResult::Failure(err) => panic!("Expected success, got {err}"),
    }
}

#[tokio::test]
async fn test_get_without_rate_limit_headers_reports_zeroes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/photos/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(photo_json(1)))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = Photo::get(&client, 1).await;
    let rate_limit = result.rate_limit().copied().unwrap();
    assert_eq!((rate_limit.limit, rate_limit.remaining, rate_limit.reset), (0, 0, 0));
}

#[tokio::test]
async fn test_get_missing_photo_names_requested_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/photos/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    match Photo::get(&client, 404).await {
        ApiResult::Failure(ApiError::NotFound { resource }) => {
            assert_eq!(resource, format!("{}/v1/photos/404", mock_server.uri()));
        }
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_video_uses_videos_base_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos/videos/857251"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 857251,
            "width": 1920,
            "height": 1080,
            "url": "https://www.pexels.com/video/857251/",
            "image": "https://images.pexels.com/videos/857251/preview.jpg",
            "duration": 12,
            "user": {"id": 1, "name": "Pexels", "url": "https://www.pexels.com/@pexels"},
            "video_files": [],
            "video_pictures": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let video = Video::get(&client, 857251).await.into_result().unwrap();
    assert_eq!(video.duration, 12);
    assert_eq!(video.user.name, "Pexels");
    assert!(video.tags.is_empty());
}

#[tokio::test]
async fn test_undecodable_success_body_is_unknown() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/photos/5"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"id\": 5}"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    match Photo::get(&client, 5).await {
        ApiResult::Failure(ApiError::Unknown { status_code, body }) => {
            assert_eq!(status_code, Some(200));
            assert_eq!(body.as_deref(), Some("{\"id\": 5}"));
        }
        other => panic!("Expected Unknown, got {other:?}"),
    }
}
