//! Shared application state injected into handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{AuthService, FavoriteService};
use crate::infrastructure::persistence::{
    PgFavoriteRepository, PgMerchandiserRepository, PgReportRepository, PgTokenRepository,
};

/// Services available to every handler and middleware.
///
/// Cloned per request; the services themselves are shared behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub favorite_service: Arc<FavoriteService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Wires the PostgreSQL repositories into the services.
    pub fn new(pool: Arc<PgPool>, token_signing_secret: String) -> Self {
        let favorite_service = FavoriteService::new(
            Arc::new(PgFavoriteRepository::new(pool.clone())),
            Arc::new(PgReportRepository::new(pool.clone())),
            Arc::new(PgMerchandiserRepository::new(pool.clone())),
        );

        let auth_service = AuthService::new(
            Arc::new(PgTokenRepository::new(pool)),
            token_signing_secret,
        );

        Self {
            favorite_service: Arc::new(favorite_service),
            auth_service: Arc::new(auth_service),
        }
    }
}
