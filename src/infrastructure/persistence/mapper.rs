//! Conversions between persistence records and domain entities.
//!
//! Mappers are stateless. Related aggregates are passed in already
//! resolved; a mapper never loads anything itself.

use thiserror::Error;

use super::entities::{FavoriteEntity, MerchandiserEntity, ReportEntity};
use crate::domain::entities::{FavoriteLink, Merchandiser, Report};

/// A record could not be combined with the relations supplied for it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("{relation} id mismatch: record references {expected}, got {actual}")]
    RelationMismatch {
        relation: &'static str,
        expected: i64,
        actual: i64,
    },
}

pub struct ReportMapper;

impl ReportMapper {
    pub fn to_domain(entity: ReportEntity) -> Report {
        Report::new(
            entity.id,
            entity.title,
            entity.description,
            entity.created_at,
            entity.updated_at,
        )
    }

    pub fn to_persistence(report: &Report) -> ReportEntity {
        ReportEntity {
            id: report.id,
            title: report.title.clone(),
            description: report.description.clone(),
            created_at: report.created_at,
            updated_at: report.updated_at,
        }
    }
}

pub struct MerchandiserMapper;

impl MerchandiserMapper {
    pub fn to_domain(entity: MerchandiserEntity) -> Merchandiser {
        Merchandiser::new(
            entity.id,
            entity.name,
            entity.email,
            entity.created_at,
            entity.updated_at,
        )
    }

    pub fn to_persistence(merchandiser: &Merchandiser) -> MerchandiserEntity {
        MerchandiserEntity {
            id: merchandiser.id,
            name: merchandiser.name.clone(),
            email: merchandiser.email.clone(),
            created_at: merchandiser.created_at,
            updated_at: merchandiser.updated_at,
        }
    }
}

pub struct FavoriteMapper;

impl FavoriteMapper {
    /// Builds a domain link from its record and resolved relations.
    ///
    /// A record without an id maps to id `0`.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::RelationMismatch`] if `report` or
    /// `merchandiser` is not the row the record's foreign key points to.
    pub fn to_domain(
        entity: FavoriteEntity,
        report: Report,
        merchandiser: Merchandiser,
    ) -> Result<FavoriteLink, MappingError> {
        if report.id != entity.report_id {
            return Err(MappingError::RelationMismatch {
                relation: "report",
                expected: entity.report_id,
                actual: report.id,
            });
        }

        if merchandiser.id != entity.merchandiser_id {
            return Err(MappingError::RelationMismatch {
                relation: "merchandiser",
                expected: entity.merchandiser_id,
                actual: merchandiser.id,
            });
        }

        Ok(FavoriteLink::new(
            entity.id.unwrap_or_default(),
            report,
            merchandiser,
            entity.created_at,
            entity.updated_at,
        ))
    }

    /// Flattens a domain link into its record.
    ///
    /// An id of `0` becomes `None`, which the repository treats as an insert.
    pub fn to_persistence(favorite: &FavoriteLink) -> FavoriteEntity {
        FavoriteEntity {
            id: favorite.is_persisted().then_some(favorite.id),
            report_id: favorite.report.id,
            merchandiser_id: favorite.merchandiser.id,
            created_at: favorite.created_at,
            updated_at: favorite.updated_at,
        }
    }
}
