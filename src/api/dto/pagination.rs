//! Pagination query parameters and the infinite-pagination envelope.

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::pagination::{Page, PageRequest};
use crate::error::AppError;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
/// Largest page the list endpoint will serve; larger requests are clamped.
pub const MAX_LIMIT: u32 = 50;

/// Pagination query parameters.
///
/// Uses `serde_with` to parse numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

impl PaginationParams {
    /// Validates the parameters and converts them into a [`PageRequest`].
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `limit`: 10, clamped to [`MAX_LIMIT`]
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `page` or `limit` is zero.
    pub fn into_page_request(self) -> Result<PageRequest, AppError> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);

        if page == 0 {
            return Err(AppError::bad_request(
                "Page must be greater than 0",
                json!({ "page": page }),
            ));
        }

        if limit == 0 {
            return Err(AppError::bad_request(
                "Limit must be greater than 0",
                json!({ "limit": limit }),
            ));
        }

        Ok(PageRequest::new(page, limit.min(MAX_LIMIT)))
    }
}

/// List envelope for clients that load pages until `hasNextPage` is false.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfinityPaginationResponse<T> {
    pub data: Vec<T>,
    pub has_next_page: bool,
}

impl<T> InfinityPaginationResponse<T> {
    /// Wraps a page, converting every item into its response form.
    pub fn from_page<U>(page: Page<U>, request: &PageRequest) -> Self
    where
        T: From<U>,
    {
        let has_next_page = page.has_next_page(request);

        Self {
            data: page.data.into_iter().map(T::from).collect(),
            has_next_page,
        }
    }
}
