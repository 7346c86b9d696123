//! Handlers for favorite endpoints.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::api::dto::favorite::{
    CreateFavoriteRequest, FavoriteResponse, FindOneParams, ToggleFavoriteResponse,
    validate_create_favorite,
};
use crate::api::dto::pagination::{InfinityPaginationResponse, PaginationParams};
use crate::application::services::ToggleOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Marks a report as favorite for a merchandiser.
///
/// # Endpoint
///
/// `POST /v1/favorites`
///
/// # Request Body
///
/// ```json
/// { "report": { "id": 4 }, "merchandiser": { "id": 2 } }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is not valid JSON, a relation is missing or its
/// id is not positive.
/// Returns 404 if the report or merchandiser does not exist.
/// Returns 409 if the report is already a favorite of the merchandiser.
pub async fn create_favorite_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateFavoriteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FavoriteResponse>), AppError> {
    let Json(payload) = payload?;
    let refs = validate_create_favorite(&payload)?;

    let favorite = state.favorite_service.create(refs).await?;

    Ok((StatusCode::CREATED, Json(favorite.into())))
}

/// Lists favorites one page at a time.
///
/// # Endpoint
///
/// `GET /v1/favorites?page=1&limit=10`
///
/// `limit` above 50 is clamped to 50.
///
/// # Response
///
/// ```json
/// { "data": [ ... ], "hasNextPage": true }
/// ```
///
/// # Errors
///
/// Returns 400 if `page` or `limit` is zero or not a number.
pub async fn list_favorites_handler(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<InfinityPaginationResponse<FavoriteResponse>>, AppError> {
    let Query(params) = params?;
    let request = params.into_page_request()?;

    let page = state.favorite_service.list(request).await?;

    Ok(Json(InfinityPaginationResponse::from_page(page, &request)))
}

/// Retrieves a favorite by id.
///
/// # Endpoint
///
/// `GET /v1/favorites/{id}`
///
/// # Errors
///
/// Returns 400 if the id is not a number.
/// Returns 404 if no favorite has this id.
pub async fn get_favorite_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<FavoriteResponse>, AppError> {
    let Path(id) = id?;
    let favorite = state.favorite_service.get(id).await?;

    Ok(Json(favorite.into()))
}

/// Lists every favorite of a merchandiser, unpaginated.
///
/// # Endpoint
///
/// `GET /v1/favorites/merchandiser/{merchandiserId}`
pub async fn merchandiser_favorites_handler(
    State(state): State<AppState>,
    merchandiser_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<FavoriteResponse>>, AppError> {
    let Path(merchandiser_id) = merchandiser_id?;
    let favorites = state
        .favorite_service
        .list_for_merchandiser(merchandiser_id)
        .await?;

    Ok(Json(favorites.into_iter().map(Into::into).collect()))
}

/// Looks up the favorite linking a merchandiser and a report.
///
/// # Endpoint
///
/// `GET /v1/favorites/lookup?merchandiserId=2&reportId=4`
///
/// Responds with `null` when the pair is not favorited.
pub async fn lookup_favorite_handler(
    State(state): State<AppState>,
    params: Result<Query<FindOneParams>, QueryRejection>,
) -> Result<Json<Option<FavoriteResponse>>, AppError> {
    let Query(params) = params?;
    let favorite = state.favorite_service.find_one(params.into()).await?;

    Ok(Json(favorite.map(Into::into)))
}

/// Flips the favorite state of a report for a merchandiser.
///
/// # Endpoint
///
/// `POST /v1/favorites/toggle`
///
/// Takes the same body as `POST /v1/favorites`.
///
/// # Response
///
/// ```json
/// { "favorited": true, "favorite": { ... } }
/// ```
///
/// `favorite` is `null` after a removal.
pub async fn toggle_favorite_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateFavoriteRequest>, JsonRejection>,
) -> Result<Json<ToggleFavoriteResponse>, AppError> {
    let Json(payload) = payload?;
    let refs = validate_create_favorite(&payload)?;

    let response = match state.favorite_service.toggle(refs).await? {
        ToggleOutcome::Added(favorite) => ToggleFavoriteResponse {
            favorited: true,
            favorite: Some(favorite.into()),
        },
        ToggleOutcome::Removed(_) => ToggleFavoriteResponse {
            favorited: false,
            favorite: None,
        },
    };

    Ok(Json(response))
}

/// Removes a favorite.
///
/// # Endpoint
///
/// `DELETE /v1/favorites/{id}`
///
/// Returns 204 whether or not the favorite existed.
pub async fn delete_favorite_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.favorite_service.remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
