//! Turning a raw HTTP response into an [`ApiResult`].

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::rate_limit::{header_number, RateLimitInfo};
use crate::result::ApiResult;
use crate::transport::RawResponse;

const RETRY_AFTER_HEADER: &str = "Retry-After";

/// Classify a complete response and decode the body on success.
///
/// 2xx responses are decoded into `T`; a body that does not decode, or could
/// not be read, becomes [`ApiError::Unknown`] carrying the status and any body
/// text. Every other status maps
/// to its [`ApiError`] kind. Never panics and has no side effects.
pub fn classify<T: DeserializeOwned>(response: RawResponse) -> ApiResult<T> {
    let status = response.status;

    if (200..300).contains(&status) {
        let rate_limit = RateLimitInfo::from_headers(&response.headers);
        let decoded = response
            .body
            .as_deref()
            .and_then(|body| serde_json::from_slice::<T>(body).ok());
        return match decoded {
            Some(data) => ApiResult::Success { data, rate_limit },
            None => ApiResult::Failure(ApiError::Unknown {
                status_code: Some(status),
                body: response.text().map(str::to_string),
            }),
        };
    }

    ApiResult::Failure(classify_error(&response))
}

/// Map a non-2xx response to its error kind.
pub fn classify_error(response: &RawResponse) -> ApiError {
    match response.status {
        401 => ApiError::Unauthorized,
        403 => ApiError::Forbidden,
        404 => ApiError::NotFound {
            resource: response.url.to_string(),
        },
        429 => ApiError::RateLimited {
            retry_after_secs: header_number(&response.headers, RETRY_AFTER_HEADER),
        },
        status @ 500..=599 => ApiError::ServerError {
            status_code: status,
        },
        status => ApiError::Unknown {
            status_code: Some(status),
            body: response.text().map(str::to_string),
        },
    }
}
