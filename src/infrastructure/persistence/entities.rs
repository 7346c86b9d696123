//! Table-shaped records used only inside the persistence layer.
//!
//! Each struct mirrors one table row. Domain code never sees these; the
//! [`super::mapper`] functions translate in both directions.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of `report_favorites`.
///
/// `id` is `None` for a record that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct FavoriteEntity {
    pub id: Option<i64>,
    pub report_id: i64,
    pub merchandiser_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row of `reports`.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ReportEntity {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row of `merchandisers`.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct MerchandiserEntity {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A favorite joined with its report and merchandiser in one query.
#[derive(Debug, FromRow)]
pub(crate) struct FavoriteJoinedRow {
    pub id: i64,
    pub report_id: i64,
    pub merchandiser_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub report_title: String,
    pub report_description: Option<String>,
    pub report_created_at: DateTime<Utc>,
    pub report_updated_at: DateTime<Utc>,
    pub merchandiser_name: String,
    pub merchandiser_email: Option<String>,
    pub merchandiser_created_at: DateTime<Utc>,
    pub merchandiser_updated_at: DateTime<Utc>,
}

impl FavoriteJoinedRow {
    /// Splits the joined row into one record per table.
    pub(crate) fn into_parts(self) -> (FavoriteEntity, ReportEntity, MerchandiserEntity) {
        let favorite = FavoriteEntity {
            id: Some(self.id),
            report_id: self.report_id,
            merchandiser_id: self.merchandiser_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        };
        let report = ReportEntity {
            id: self.report_id,
            title: self.report_title,
            description: self.report_description,
            created_at: self.report_created_at,
            updated_at: self.report_updated_at,
        };
        let merchandiser = MerchandiserEntity {
            id: self.merchandiser_id,
            name: self.merchandiser_name,
            email: self.merchandiser_email,
            created_at: self.merchandiser_created_at,
            updated_at: self.merchandiser_updated_at,
        };

        (favorite, report, merchandiser)
    }
}
