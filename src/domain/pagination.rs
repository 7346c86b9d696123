//! Offset pagination types shared by repositories.

/// A 1-based page request.
///
/// Construct through the HTTP layer ([`crate::api::dto::pagination`]),
/// which applies defaults and clamps `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page.max(1)) - 1) * i64::from(self.limit)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.limit)
    }
}

/// One page of results plus the total number of matching rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total_count: i64,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total_count: i64) -> Self {
        Self { data, total_count }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }

    /// True when rows exist beyond this page.
    ///
    /// Uses the total count, so a final page that is exactly full reports
    /// no next page.
    pub fn has_next_page(&self, request: &PageRequest) -> bool {
        request.offset() + (self.data.len() as i64) < self.total_count
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            total_count: self.total_count,
        }
    }
}
