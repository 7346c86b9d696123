//! Repository trait for merchandisers.

use crate::domain::entities::Merchandiser;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to merchandisers, used to resolve favorite owners.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MerchandiserRepository: Send + Sync {
    /// Finds a merchandiser by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Merchandiser>, AppError>;
}
