//! Repository trait for favorite links.

use crate::domain::entities::FavoriteLink;
use crate::domain::pagination::{Page, PageRequest};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for favorite links.
///
/// Absence is `Ok(None)`; a store failure is always `Err`. Returned links
/// carry their report and merchandiser fully resolved.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgFavoriteRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_favorite.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Inserts an unsaved link and returns it with id and store timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the pair is already favorited.
    /// Returns [`AppError::NotFound`] if the report or merchandiser row is gone.
    /// Returns [`AppError::Internal`] if the link already has an id, or on
    /// database errors.
    async fn create(&self, favorite: FavoriteLink) -> Result<FavoriteLink, AppError>;

    /// Lists links one page at a time, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all_with_pagination(
        &self,
        request: PageRequest,
    ) -> Result<Page<FavoriteLink>, AppError>;

    /// Finds a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<FavoriteLink>, AppError>;

    /// Lists every link owned by a merchandiser, unpaginated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_merchandiser(
        &self,
        merchandiser_id: i64,
    ) -> Result<Vec<FavoriteLink>, AppError>;

    /// Finds the link for a specific merchandiser and report.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_one(
        &self,
        merchandiser_id: i64,
        report_id: i64,
    ) -> Result<Option<FavoriteLink>, AppError>;

    /// Deletes a link by id.
    ///
    /// Returns `Ok(false)` when no row matched; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn remove(&self, id: i64) -> Result<bool, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}
