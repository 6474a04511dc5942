//! Pagination utilities for Pexels API responses.

use serde::{Deserialize, Serialize};

use crate::error::{require, Result};

/// Largest page size the API accepts.
pub const MAX_PER_PAGE: u32 = 80;

/// A page of results from the Pexels API.
///
/// `next_page` and `prev_page` are opaque URLs returned by the API. They are
/// only checked for presence or followed verbatim through
/// [`List::next_page`](crate::List::next_page).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page, in API order.
    pub items: Vec<T>,
    /// Current page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub per_page: u32,
    /// Total number of results across all pages.
    pub total_results: u64,
    /// URL of the next page, if any.
    pub next_page: Option<String>,
    /// URL of the previous page, if any.
    pub prev_page: Option<String>,
}

impl<T> Page<T> {
    /// Assemble a page from decoded items and the envelope fields.
    #[must_use]
    pub(crate) fn from_parts(items: Vec<T>, meta: PageMeta) -> Self {
        Self {
            items,
            page: meta.page,
            per_page: meta.per_page,
            total_results: meta.total_results,
            next_page: meta.next_page,
            prev_page: meta.prev_page,
        }
    }

    /// Whether the API reported a next page.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }

    /// Whether the API reported a previous page.
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.prev_page.is_some()
    }

    /// Total number of pages implied by `total_results` and `per_page`.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        let per_page = u64::from(self.per_page.max(1));
        self.total_results.div_ceil(per_page)
    }

    /// Map the items to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total_results: self.total_results,
            next_page: self.next_page,
            prev_page: self.prev_page,
        }
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the items in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Envelope fields shared by every list response.
///
/// Flattened into the per-resource response wrappers next to their items key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct PageMeta {
    pub page: u32,
    pub per_page: u32,
    pub total_results: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
}

/// Page selection for list requests.
///
/// Constructed through [`PaginationParams::new`] (or [`Default`]), which
/// guarantees `page >= 1` and `per_page` within `1..=80`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationParams {
    page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    per_page: Option<u32>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: None,
        }
    }
}

impl PaginationParams {
    /// Request `page` with an explicit page size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// `page` is zero or `per_page` is outside `1..=80`.
    pub fn new(page: u32, per_page: u32) -> Result<Self> {
        Self::page(page)?.with_per_page(per_page)
    }

    /// Request `page` using the client's default page size.
    ///
    /// # Errors
    ///
    /// Returns an error if `page` is zero.
    pub fn page(page: u32) -> Result<Self> {
        require(page >= 1, || "page must be >= 1".to_string())?;
        Ok(Self {
            page,
            per_page: None,
        })
    }

    /// Override the page size for this request.
    ///
    /// # Errors
    ///
    /// Returns an error if `per_page` is outside `1..=80`.
    pub fn with_per_page(self, per_page: u32) -> Result<Self> {
        validate_per_page(per_page, "perPage")?;
        Ok(Self {
            per_page: Some(per_page),
            ..self
        })
    }

    /// The requested page number.
    pub fn page_number(&self) -> u32 {
        self.page
    }

    /// The per-call page size override, if any.
    pub fn per_page(&self) -> Option<u32> {
        self.per_page
    }

    /// Query pairs for the request, falling back to `default_per_page`.
    pub(crate) fn to_query(self, default_per_page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            (
                "per_page",
                self.per_page.unwrap_or(default_per_page).to_string(),
            ),
        ]
    }
}

/// Shared bound check for configured and per-call page sizes.
pub(crate) fn validate_per_page(per_page: u32, name: &str) -> Result<()> {
    require((1..=MAX_PER_PAGE).contains(&per_page), || {
        format!("{name} must be between 1 and {MAX_PER_PAGE}")
    })
}
