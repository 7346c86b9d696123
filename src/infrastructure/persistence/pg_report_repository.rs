//! PostgreSQL implementation of report repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::entities::ReportEntity;
use super::mapper::ReportMapper;
use crate::domain::entities::Report;
use crate::domain::repositories::ReportRepository;
use crate::error::AppError;

/// PostgreSQL repository for report lookups.
pub struct PgReportRepository {
    pool: Arc<PgPool>,
}

impl PgReportRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Report>, AppError> {
        let row = sqlx::query_as::<_, ReportEntity>(
            r#"
            SELECT id, title, description, created_at, updated_at
            FROM reports
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ReportMapper::to_domain))
    }
}
