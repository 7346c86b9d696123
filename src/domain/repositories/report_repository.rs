//! Repository trait for reports.

use crate::domain::entities::Report;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to reports, used to resolve favorite targets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Finds a report by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Report>, AppError>;
}
