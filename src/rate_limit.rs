//! Rate limit metadata reported by the Pexels API.

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

pub(crate) const LIMIT_HEADER: &str = "X-Ratelimit-Limit";
pub(crate) const REMAINING_HEADER: &str = "X-Ratelimit-Remaining";
pub(crate) const RESET_HEADER: &str = "X-Ratelimit-Reset";

/// Rate limit information extracted from response headers.
///
/// Absent or malformed headers read as zero; that is not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitInfo {
    /// Total number of requests allowed in the current window.
    pub limit: u32,
    /// Requests remaining in the current window.
    pub remaining: u32,
    /// Unix timestamp (seconds) when the window resets.
    pub reset: u64,
}

impl RateLimitInfo {
    /// Read the `X-Ratelimit-*` headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: header_number(headers, LIMIT_HEADER).unwrap_or(0),
            remaining: header_number(headers, REMAINING_HEADER).unwrap_or(0),
            reset: header_number(headers, RESET_HEADER).unwrap_or(0),
        }
    }

    /// The reset time as a UTC timestamp, if the API reported one.
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        if self.reset == 0 {
            return None;
        }
        i64::try_from(self.reset)
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    /// True when the API reported no remaining requests in a known window.
    pub fn is_exhausted(&self) -> bool {
        self.limit > 0 && self.remaining == 0
    }
}

/// Parse a header as an unsigned number. Lookup is case-insensitive.
pub(crate) fn header_number<N: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<N> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}
