//! Merchandiser aggregate as seen by the favorites module.

use chrono::{DateTime, Utc};

/// A field merchandiser; owns favorite links.
#[derive(Debug, Clone, PartialEq)]
pub struct Merchandiser {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Merchandiser {
    /// Creates a new Merchandiser instance.
    pub fn new(
        id: i64,
        name: String,
        email: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            created_at,
            updated_at,
        }
    }
}
