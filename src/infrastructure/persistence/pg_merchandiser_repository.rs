//! PostgreSQL implementation of merchandiser repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::entities::MerchandiserEntity;
use super::mapper::MerchandiserMapper;
use crate::domain::entities::Merchandiser;
use crate::domain::repositories::MerchandiserRepository;
use crate::error::AppError;

/// PostgreSQL repository for merchandiser lookups.
pub struct PgMerchandiserRepository {
    pool: Arc<PgPool>,
}

impl PgMerchandiserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MerchandiserRepository for PgMerchandiserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Merchandiser>, AppError> {
        let row = sqlx::query_as::<_, MerchandiserEntity>(
            r#"
            SELECT id, name, email, created_at, updated_at
            FROM merchandisers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(MerchandiserMapper::to_domain))
    }
}
