//! PostgreSQL implementation of favorite repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::entities::{FavoriteEntity, FavoriteJoinedRow};
use super::mapper::{FavoriteMapper, MerchandiserMapper, ReportMapper};
use crate::domain::entities::FavoriteLink;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::FavoriteRepository;
use crate::error::AppError;

/// Favorite columns joined with report and merchandiser columns.
macro_rules! select_favorites {
    () => {
        r#"
        SELECT
            f.id,
            f.report_id,
            f.merchandiser_id,
            f.created_at,
            f.updated_at,
            r.title       AS report_title,
            r.description AS report_description,
            r.created_at  AS report_created_at,
            r.updated_at  AS report_updated_at,
            m.name        AS merchandiser_name,
            m.email       AS merchandiser_email,
            m.created_at  AS merchandiser_created_at,
            m.updated_at  AS merchandiser_updated_at
        FROM report_favorites f
        JOIN reports r ON r.id = f.report_id
        JOIN merchandisers m ON m.id = f.merchandiser_id
        "#
    };
}

/// PostgreSQL repository for favorite links.
///
/// Reads join `reports` and `merchandisers` so every returned link carries
/// both relations. Ordering is by `id` to keep pages stable.
pub struct PgFavoriteRepository {
    pool: Arc<PgPool>,
}

impl PgFavoriteRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_row(row: FavoriteJoinedRow) -> Result<FavoriteLink, AppError> {
    let (favorite, report, merchandiser) = row.into_parts();

    Ok(FavoriteMapper::to_domain(
        favorite,
        ReportMapper::to_domain(report),
        MerchandiserMapper::to_domain(merchandiser),
    )?)
}

#[async_trait]
impl FavoriteRepository for PgFavoriteRepository {
    async fn create(&self, favorite: FavoriteLink) -> Result<FavoriteLink, AppError> {
        let entity = FavoriteMapper::to_persistence(&favorite);

        if let Some(id) = entity.id {
            return Err(AppError::internal(
                "Favorite is already persisted",
                json!({ "id": id }),
            ));
        }

        let inserted = sqlx::query_as::<_, FavoriteEntity>(
            r#"
            INSERT INTO report_favorites (report_id, merchandiser_id)
            VALUES ($1, $2)
            RETURNING id, report_id, merchandiser_id, created_at, updated_at
            "#,
        )
        .bind(entity.report_id)
        .bind(entity.merchandiser_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(FavoriteMapper::to_domain(
            inserted,
            favorite.report,
            favorite.merchandiser,
        )?)
    }

    async fn find_all_with_pagination(
        &self,
        request: PageRequest,
    ) -> Result<Page<FavoriteLink>, AppError> {
        // Page and count must come from the same snapshot.
        let mut tx = self.pool.begin().await?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let rows = sqlx::query_as::<_, FavoriteJoinedRow>(concat!(
            select_favorites!(),
            "ORDER BY f.id LIMIT $1 OFFSET $2"
        ))
        .bind(request.limit())
        .bind(request.offset())
        .fetch_all(&mut *tx)
        .await?;

        let total_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM report_favorites")
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        let data = rows
            .into_iter()
            .map(map_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(data, total_count))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<FavoriteLink>, AppError> {
        let row = sqlx::query_as::<_, FavoriteJoinedRow>(concat!(
            select_favorites!(),
            "WHERE f.id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(map_row).transpose()
    }

    async fn find_by_merchandiser(
        &self,
        merchandiser_id: i64,
    ) -> Result<Vec<FavoriteLink>, AppError> {
        let rows = sqlx::query_as::<_, FavoriteJoinedRow>(concat!(
            select_favorites!(),
            "WHERE f.merchandiser_id = $1 ORDER BY f.id"
        ))
        .bind(merchandiser_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(map_row).collect()
    }

    async fn find_one(
        &self,
        merchandiser_id: i64,
        report_id: i64,
    ) -> Result<Option<FavoriteLink>, AppError> {
        let row = sqlx::query_as::<_, FavoriteJoinedRow>(concat!(
            select_favorites!(),
            "WHERE f.merchandiser_id = $1 AND f.report_id = $2 LIMIT 1"
        ))
        .bind(merchandiser_id)
        .bind(report_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(map_row).transpose()
    }

    async fn remove(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM report_favorites WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
