//! Favorite link service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{FavoriteLink, FavoriteRefs, Merchandiser, Report};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::{FavoriteRepository, MerchandiserRepository, ReportRepository};
use crate::error::AppError;

/// Result of [`FavoriteService::toggle`].
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    Added(FavoriteLink),
    Removed(FavoriteLink),
}

/// Service for creating, listing and removing favorite links.
///
/// Resolves both relations before inserting so the stored link always
/// points at existing rows, and refuses a second link for the same
/// merchandiser and report.
pub struct FavoriteService {
    favorites: Arc<dyn FavoriteRepository>,
    reports: Arc<dyn ReportRepository>,
    merchandisers: Arc<dyn MerchandiserRepository>,
}

impl FavoriteService {
    /// Creates a new favorite service.
    pub fn new(
        favorites: Arc<dyn FavoriteRepository>,
        reports: Arc<dyn ReportRepository>,
        merchandisers: Arc<dyn MerchandiserRepository>,
    ) -> Self {
        Self {
            favorites,
            reports,
            merchandisers,
        }
    }

    /// Marks a report as favorite for a merchandiser.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the report or merchandiser does not exist.
    /// Returns [`AppError::Conflict`] if the pair is already favorited.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, refs: FavoriteRefs) -> Result<FavoriteLink, AppError> {
        let (report, merchandiser) = self.resolve(refs).await?;

        if let Some(existing) = self
            .favorites
            .find_one(refs.merchandiser_id, refs.report_id)
            .await?
        {
            return Err(AppError::conflict(
                "Report is already a favorite of this merchandiser",
                json!({
                    "id": existing.id,
                    "merchandiser_id": refs.merchandiser_id,
                    "report_id": refs.report_id,
                }),
            ));
        }

        self.insert(report, merchandiser).await
    }

    /// Returns one page of favorites.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self, request: PageRequest) -> Result<Page<FavoriteLink>, AppError> {
        self.favorites.find_all_with_pagination(request).await
    }

    /// Retrieves a favorite by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no favorite has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get(&self, id: i64) -> Result<FavoriteLink, AppError> {
        self.favorites
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Favorite not found", json!({ "id": id })))
    }

    /// Lists every favorite of a merchandiser.
    ///
    /// An unknown merchandiser simply has no favorites.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_for_merchandiser(
        &self,
        merchandiser_id: i64,
    ) -> Result<Vec<FavoriteLink>, AppError> {
        self.favorites.find_by_merchandiser(merchandiser_id).await
    }

    /// Looks up the favorite for a merchandiser and report, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_one(&self, refs: FavoriteRefs) -> Result<Option<FavoriteLink>, AppError> {
        self.favorites
            .find_one(refs.merchandiser_id, refs.report_id)
            .await
    }

    /// Removes the favorite if the pair is favorited, creates it otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if a link must be created and the
    /// report or merchandiser does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn toggle(&self, refs: FavoriteRefs) -> Result<ToggleOutcome, AppError> {
        if let Some(existing) = self
            .favorites
            .find_one(refs.merchandiser_id, refs.report_id)
            .await?
        {
            self.remove(existing.id).await?;
            return Ok(ToggleOutcome::Removed(existing));
        }

        let (report, merchandiser) = self.resolve(refs).await?;
        let created = self.insert(report, merchandiser).await?;

        Ok(ToggleOutcome::Added(created))
    }

    /// Deletes a favorite by id. Deleting a missing id succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn remove(&self, id: i64) -> Result<(), AppError> {
        if self.favorites.remove(id).await? {
            metrics::counter!("favorites_removed_total").increment(1);
            tracing::info!(favorite_id = id, "Favorite removed");
        } else {
            tracing::debug!(favorite_id = id, "Favorite already absent");
        }

        Ok(())
    }

    /// Checks that the favorites store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.favorites.ping().await
    }

    async fn resolve(&self, refs: FavoriteRefs) -> Result<(Report, Merchandiser), AppError> {
        let report = self
            .reports
            .find_by_id(refs.report_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Report not found", json!({ "report_id": refs.report_id }))
            })?;

        let merchandiser = self
            .merchandisers
            .find_by_id(refs.merchandiser_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Merchandiser not found",
                    json!({ "merchandiser_id": refs.merchandiser_id }),
                )
            })?;

        Ok((report, merchandiser))
    }

    async fn insert(
        &self,
        report: Report,
        merchandiser: Merchandiser,
    ) -> Result<FavoriteLink, AppError> {
        let created = self
            .favorites
            .create(FavoriteLink::unsaved(report, merchandiser))
            .await?;

        metrics::counter!("favorites_created_total").increment(1);
        tracing::info!(
            favorite_id = created.id,
            merchandiser_id = created.merchandiser.id,
            report_id = created.report.id,
            "Favorite created"
        );

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{
        MockFavoriteRepository, MockMerchandiserRepository, MockReportRepository,
    };
    use chrono::Utc;

    fn test_report(id: i64) -> Report {
        Report::new(id, format!("Report {id}"), None, Utc::now(), Utc::now())
    }

    fn test_merchandiser(id: i64) -> Merchandiser {
        Merchandiser::new(id, format!("Merchandiser {id}"), None, Utc::now(), Utc::now())
    }

    fn test_favorite(id: i64, merchandiser_id: i64, report_id: i64) -> FavoriteLink {
        FavoriteLink::new(
            id,
            test_report(report_id),
            test_merchandiser(merchandiser_id),
            Utc::now(),
            Utc::now(),
        )
    }

    fn refs(merchandiser_id: i64, report_id: i64) -> FavoriteRefs {
        FavoriteRefs {
            merchandiser_id,
            report_id,
        }
    }

    fn service(
        favorites: MockFavoriteRepository,
        reports: MockReportRepository,
        merchandisers: MockMerchandiserRepository,
    ) -> FavoriteService {
        FavoriteService::new(Arc::new(favorites), Arc::new(reports), Arc::new(merchandisers))
    }

    fn reports_with(id: i64) -> MockReportRepository {
        let mut reports = MockReportRepository::new();
        reports
            .expect_find_by_id()
            .withf(move |r| *r == id)
            .returning(|r| Ok(Some(test_report(r))));
        reports
    }

    fn merchandisers_with(id: i64) -> MockMerchandiserRepository {
        let mut merchandisers = MockMerchandiserRepository::new();
        merchandisers
            .expect_find_by_id()
            .withf(move |m| *m == id)
            .returning(|m| Ok(Some(test_merchandiser(m))));
        merchandisers
    }

    #[tokio::test]
    async fn test_create_success() {
        let mut favorites = MockFavoriteRepository::new();
        favorites
            .expect_find_one()
            .times(1)
            .returning(|_, _| Ok(None));
        favorites
            .expect_create()
            .withf(|f| f.id == 0 && f.merchandiser.id == 2 && f.report.id == 7)
            .times(1)
            .returning(|mut f| {
                f.id = 100;
                Ok(f)
            });

        let service = service(favorites, reports_with(7), merchandisers_with(2));

        let created = service.create(refs(2, 7)).await.unwrap();

        assert_eq!(created.id, 100);
        assert_eq!(created.report.id, 7);
        assert_eq!(created.merchandiser.id, 2);
    }

    #[tokio::test]
    async fn test_create_duplicate_is_conflict() {
        let mut favorites = MockFavoriteRepository::new();
        favorites
            .expect_find_one()
            .times(1)
            .returning(|m, r| Ok(Some(test_favorite(5, m, r))));
        favorites.expect_create().never();

        let service = service(favorites, reports_with(7), merchandisers_with(2));

        let result = service.create(refs(2, 7)).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_create_unknown_report() {
        let mut favorites = MockFavoriteRepository::new();
        favorites.expect_create().never();

        let mut reports = MockReportRepository::new();
        reports.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = service(favorites, reports, MockMerchandiserRepository::new());

        let result = service.create(refs(2, 404)).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_unknown_merchandiser() {
        let mut merchandisers = MockMerchandiserRepository::new();
        merchandisers
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(MockFavoriteRepository::new(), reports_with(7), merchandisers);

        let result = service.create(refs(404, 7)).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_store_error_is_not_a_miss() {
        let mut favorites = MockFavoriteRepository::new();
        favorites
            .expect_find_by_id()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = service(
            favorites,
            MockReportRepository::new(),
            MockMerchandiserRepository::new(),
        );

        let result = service.get(1).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mut favorites = MockFavoriteRepository::new();
        favorites.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = service(
            favorites,
            MockReportRepository::new(),
            MockMerchandiserRepository::new(),
        );

        let result = service.get(9).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_passes_request_through() {
        let mut favorites = MockFavoriteRepository::new();
        favorites
            .expect_find_all_with_pagination()
            .withf(|req| req.page == 2 && req.limit == 10)
            .times(1)
            .returning(|_| Ok(Page::new(vec![test_favorite(11, 1, 1)], 11)));

        let service = service(
            favorites,
            MockReportRepository::new(),
            MockMerchandiserRepository::new(),
        );

        let page = service.list(PageRequest::new(2, 10)).await.unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.total_count, 11);
    }

    #[tokio::test]
    async fn test_list_for_merchandiser() {
        let mut favorites = MockFavoriteRepository::new();
        favorites
            .expect_find_by_merchandiser()
            .withf(|m| *m == 3)
            .times(1)
            .returning(|m| Ok(vec![test_favorite(1, m, 10), test_favorite(2, m, 11)]));

        let service = service(
            favorites,
            MockReportRepository::new(),
            MockMerchandiserRepository::new(),
        );

        let list = service.list_for_merchandiser(3).await.unwrap();

        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|f| f.merchandiser.id == 3));
    }

    #[tokio::test]
    async fn test_remove_missing_is_ok() {
        let mut favorites = MockFavoriteRepository::new();
        favorites.expect_remove().times(1).returning(|_| Ok(false));

        let service = service(
            favorites,
            MockReportRepository::new(),
            MockMerchandiserRepository::new(),
        );

        assert!(service.remove(77).await.is_ok());
    }

    #[tokio::test]
    async fn test_toggle_removes_existing() {
        let mut favorites = MockFavoriteRepository::new();
        favorites
            .expect_find_one()
            .times(1)
            .returning(|m, r| Ok(Some(test_favorite(8, m, r))));
        favorites
            .expect_remove()
            .withf(|id| *id == 8)
            .times(1)
            .returning(|_| Ok(true));
        favorites.expect_create().never();

        let service = service(
            favorites,
            MockReportRepository::new(),
            MockMerchandiserRepository::new(),
        );

        let outcome = service.toggle(refs(2, 7)).await.unwrap();

        assert!(matches!(outcome, ToggleOutcome::Removed(f) if f.id == 8));
    }

    #[tokio::test]
    async fn test_toggle_adds_missing() {
        let mut favorites = MockFavoriteRepository::new();
        favorites
            .expect_find_one()
            .times(1)
            .returning(|_, _| Ok(None));
        favorites.expect_create().times(1).returning(|mut f| {
            f.id = 31;
            Ok(f)
        });

        let service = service(favorites, reports_with(7), merchandisers_with(2));

        let outcome = service.toggle(refs(2, 7)).await.unwrap();

        assert!(matches!(outcome, ToggleOutcome::Added(f) if f.id == 31));
    }
}
