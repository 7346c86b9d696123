//! DTOs for favorite endpoints.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{ValidationError, ValidationErrors};

use crate::domain::entities::{FavoriteLink, FavoriteRefs, Merchandiser, Report};

/// Reference to an existing record by id.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityRef {
    pub id: i64,
}

/// Body of `POST /favorites` and `POST /favorites/toggle`.
///
/// Both fields are optional at the wire level so that a missing relation is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateFavoriteRequest {
    pub report: Option<EntityRef>,
    pub merchandiser: Option<EntityRef>,
}

/// Validates a create request and extracts the ids it references.
///
/// # Errors
///
/// Returns every failing field at once: `required` when a relation is
/// missing, `range` when its id is below 1.
pub fn validate_create_favorite(
    request: &CreateFavoriteRequest,
) -> Result<FavoriteRefs, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let report_id = check_ref(&mut errors, "report", request.report.as_ref());
    let merchandiser_id = check_ref(&mut errors, "merchandiser", request.merchandiser.as_ref());

    match (report_id, merchandiser_id) {
        (Some(report_id), Some(merchandiser_id)) if errors.is_empty() => Ok(FavoriteRefs {
            merchandiser_id,
            report_id,
        }),
        _ => Err(errors),
    }
}

fn check_ref(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<&EntityRef>,
) -> Option<i64> {
    let Some(entity) = value else {
        errors.add(
            field,
            ValidationError::new("required").with_message(Cow::Borrowed("must be provided")),
        );
        return None;
    };

    if entity.id < 1 {
        let mut error = ValidationError::new("range")
            .with_message(Cow::Borrowed("id must be a positive integer"));
        error.add_param(Cow::Borrowed("value"), &entity.id);
        errors.add(field, error);
        return None;
    }

    Some(entity.id)
}

/// Query of `GET /favorites/lookup`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindOneParams {
    pub merchandiser_id: i64,
    pub report_id: i64,
}

impl From<FindOneParams> for FavoriteRefs {
    fn from(params: FindOneParams) -> Self {
        FavoriteRefs {
            merchandiser_id: params.merchandiser_id,
            report_id: params.report_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Report> for ReportResponse {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchandiserResponse {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Merchandiser> for MerchandiserResponse {
    fn from(m: Merchandiser) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// A favorite with both relations embedded.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteResponse {
    pub id: i64,
    pub report: ReportResponse,
    pub merchandiser: MerchandiserResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FavoriteLink> for FavoriteResponse {
    fn from(f: FavoriteLink) -> Self {
        Self {
            id: f.id,
            report: f.report.into(),
            merchandiser: f.merchandiser.into(),
            created_at: f.created_at,
            updated_at: f.updated_at,
        }
    }
}

/// Result of a toggle: `favorite` is the link that now exists, if any.
#[derive(Debug, Serialize)]
pub struct ToggleFavoriteResponse {
    pub favorited: bool,
    pub favorite: Option<FavoriteResponse>,
}
