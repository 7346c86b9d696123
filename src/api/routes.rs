//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_favorite_handler, delete_favorite_handler, get_favorite_handler,
    list_favorites_handler, lookup_favorite_handler, merchandiser_favorites_handler,
    toggle_favorite_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST   /favorites`                          - Favorite a report
/// - `GET    /favorites`                          - List favorites (paginated)
/// - `GET    /favorites/lookup`                   - Find the favorite for a merchandiser/report pair
/// - `POST   /favorites/toggle`                   - Add or remove a favorite
/// - `GET    /favorites/merchandiser/{merchandiser_id}` - All favorites of a merchandiser
/// - `GET    /favorites/{id}`                     - Get a favorite
/// - `DELETE /favorites/{id}`                     - Remove a favorite
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/favorites",
            get(list_favorites_handler).post(create_favorite_handler),
        )
        .route("/favorites/lookup", get(lookup_favorite_handler))
        .route("/favorites/toggle", post(toggle_favorite_handler))
        .route(
            "/favorites/merchandiser/{merchandiser_id}",
            get(merchandiser_favorites_handler),
        )
        .route(
            "/favorites/{id}",
            get(get_favorite_handler).delete(delete_favorite_handler),
        )
}
