//! Favorite link entity: a report favorited by a merchandiser.

use chrono::{DateTime, Utc};

use super::{Merchandiser, Report};

/// A report marked as favorite by a merchandiser.
///
/// Both relations are carried fully resolved. A link is never mutated after
/// creation; it is only created and removed.
///
/// An `id` of `0` means the link has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteLink {
    pub id: i64,
    pub report: Report,
    pub merchandiser: Merchandiser,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FavoriteLink {
    /// Creates a new FavoriteLink instance.
    pub fn new(
        id: i64,
        report: Report,
        merchandiser: Merchandiser,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            report,
            merchandiser,
            created_at,
            updated_at,
        }
    }

    /// Builds a link that has not been stored yet.
    ///
    /// Timestamps are provisional; the store overwrites them on insert.
    pub fn unsaved(report: Report, merchandiser: Merchandiser) -> Self {
        let now = Utc::now();
        Self::new(0, report, merchandiser, now, now)
    }

    /// Returns true if the store has assigned an id.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Returns the `(merchandiser_id, report_id)` pair identifying this link.
    pub fn refs(&self) -> FavoriteRefs {
        FavoriteRefs {
            merchandiser_id: self.merchandiser.id,
            report_id: self.report.id,
        }
    }
}

/// Owner and target identifiers of a favorite, before they are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteRefs {
    pub merchandiser_id: i64,
    pub report_id: i64,
}
