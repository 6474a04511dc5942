//! The outcome type returned by every API call.

use crate::error::ApiError;
use crate::rate_limit::RateLimitInfo;

/// The result of a Pexels API call.
///
/// Exactly one of a decoded payload (with the rate limit metadata of the
/// response that carried it) or an [`ApiError`]. API failures are values,
/// not panics; use [`into_result`](Self::into_result) to switch to `?`-style
/// propagation.
///
/// # Example
///
/// ```no_run
/// use pexkit::{ApiError, ApiResult, Photo};
///
/// fn report(result: ApiResult<Photo>) {
///     match result {
///         ApiResult::Success { data, rate_limit } => {
///             println!("{} ({} requests left)", data.url, rate_limit.remaining);
///         }
///         ApiResult::Failure(ApiError::RateLimited { retry_after_secs }) => {
///             println!("slow down: {retry_after_secs:?}");
///         }
///         ApiResult::Failure(err) => println!("failed: {err}"),
///     }
/// }
/// ```
#[derive(Debug)]
#[must_use = "this `ApiResult` may be a `Failure` variant, which should be handled"]
pub enum ApiResult<T> {
    /// The call succeeded.
    Success {
        /// The decoded payload.
        data: T,
        /// Rate limit headers of the response.
        rate_limit: RateLimitInfo,
    },
    /// The call failed.
    Failure(ApiError),
}

impl<T> ApiResult<T> {
    /// Returns true for [`ApiResult::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success { .. })
    }

    /// Returns true for [`ApiResult::Failure`].
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The rate limit metadata of a successful call.
    pub fn rate_limit(&self) -> Option<&RateLimitInfo> {
        match self {
            ApiResult::Success { rate_limit, .. } => Some(rate_limit),
            ApiResult::Failure(_) => None,
        }
    }

    /// The error of a failed call.
    pub fn err(&self) -> Option<&ApiError> {
        match self {
            ApiResult::Success { .. } => None,
            ApiResult::Failure(err) => Some(err),
        }
    }

    /// The payload, discarding any error.
    pub fn ok(self) -> Option<T> {
        match self {
            ApiResult::Success { data, .. } => Some(data),
            ApiResult::Failure(_) => None,
        }
    }

    /// Transform the payload, passing failures through unchanged.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResult<U> {
        match self {
            ApiResult::Success { data, rate_limit } => ApiResult::Success {
                data: f(data),
                rate_limit,
            },
            ApiResult::Failure(err) => ApiResult::Failure(err),
        }
    }

    /// The payload, or `default` on failure.
    ///
    /// `default` is evaluated eagerly even when the call succeeded; use
    /// [`unwrap_or_else`](Self::unwrap_or_else) when computing it is costly.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            ApiResult::Success { data, .. } => data,
            ApiResult::Failure(_) => default,
        }
    }

    /// The payload, or `f(error)` computed only on failure.
    pub fn unwrap_or_else<F: FnOnce(ApiError) -> T>(self, f: F) -> T {
        match self {
            ApiResult::Success { data, .. } => data,
            ApiResult::Failure(err) => f(err),
        }
    }

    /// Convert into a standard `Result`.
    ///
    /// The error keeps its source chain, so a [`ApiError::NetworkError`]
    /// still exposes the transport failure through
    /// [`std::error::Error::source`].
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            ApiResult::Success { data, .. } => Ok(data),
            ApiResult::Failure(err) => Err(err),
        }
    }

    /// Run `f` on the payload of a successful call.
    pub fn on_success<F: FnOnce(&T)>(self, f: F) -> Self {
        if let ApiResult::Success { data, .. } = &self {
            f(data);
        }
        self
    }

    /// Run `f` on the error of a failed call.
    pub fn on_failure<F: FnOnce(&ApiError)>(self, f: F) -> Self {
        if let ApiResult::Failure(err) = &self {
            f(err);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use std::cell::Cell;
    use std::error::Error as _;

    fn success(value: i32) -> ApiResult<i32> {
        ApiResult::Success {
            data: value,
            rate_limit: RateLimitInfo {
                limit: 100,
                remaining: 99,
                reset: 1,
            },
        }
    }

    fn failure() -> ApiResult<i32> {
        ApiResult::Failure(ApiError::ServerError { status_code: 502 })
    }

    #[test]
    fn test_map_transforms_success_and_keeps_rate_limit() {
        let mapped = success(21).map(|v| v * 2);
        match mapped {
            ApiResult::Success { data, rate_limit } => {
                assert_eq!(data, 42);
                assert_eq!(rate_limit.remaining, 99);
            }
            ApiResult::Failure(_) => panic!("Expected success"),
        }
    }

    #[test]
    fn test_map_passes_failure_through() {
        let mapped: ApiResult<String> = failure().map(|v| v.to_string());
        assert!(matches!(
            mapped,
            ApiResult::Failure(ApiError::ServerError { status_code: 502 })
        ));
    }

    #[test]
    fn test_unwrap_or() {
        assert_eq!(success(1).unwrap_or(0), 1);
        assert_eq!(failure().unwrap_or(0), 0);
    }

    #[test]
    fn test_unwrap_or_else_is_lazy() {
        let calls = Cell::new(0);
        let value = success(5).unwrap_or_else(|_| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(value, 5);
        assert_eq!(calls.get(), 0);

        let value = failure().unwrap_or_else(|err| {
            calls.set(calls.get() + 1);
            i32::from(err.status_code().unwrap_or(0))
        });
        assert_eq!(value, 502);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_hooks_fire_on_matching_variant_only() {
        let seen_ok = Cell::new(false);
        let seen_err = Cell::new(false);

        let result = success(3)
            .on_success(|_| seen_ok.set(true))
            .on_failure(|_| seen_err.set(true));
        assert!(seen_ok.get());
        assert!(!seen_err.get());
        assert!(result.is_success());

        seen_ok.set(false);
        let result = failure()
            .on_success(|_| seen_ok.set(true))
            .on_failure(|_| seen_err.set(true));
        assert!(!seen_ok.get());
        assert!(seen_err.get());
        assert!(result.is_failure());
    }

    #[test]
    fn test_into_result_keeps_network_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let result: ApiResult<i32> = ApiResult::Failure(ApiError::NetworkError {
            cause: TransportError::from_source(io),
        });

        let err = result.into_result().unwrap_err();
        let mut chain = Vec::new();
        let mut current: Option<&(dyn std::error::Error + 'static)> = Some(&err);
        while let Some(e) = current {
            chain.push(e.to_string());
            current = e.source();
        }
        assert!(chain.iter().any(|m| m == "timed out"), "chain: {chain:?}");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(success(1).rate_limit().map(|r| r.limit), Some(100));
        assert!(failure().rate_limit().is_none());
        assert!(failure().err().is_some());
        assert_eq!(success(7).ok(), Some(7));
        assert_eq!(failure().ok(), None);
    }
}
