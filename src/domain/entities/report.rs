//! Report aggregate as seen by the favorites module.

use chrono::{DateTime, Utc};

/// A report that merchandisers can mark as favorite.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Report {
    /// Creates a new Report instance.
    pub fn new(
        id: i64,
        title: String,
        description: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            created_at,
            updated_at,
        }
    }
}
