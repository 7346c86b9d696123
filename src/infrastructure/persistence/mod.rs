//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries. Rows are decoded into the table-shaped records in [`entities`]
//! and converted to domain objects by [`mapper`].
//!
//! # Repositories
//!
//! - [`PgFavoriteRepository`] - Favorite link storage and retrieval
//! - [`PgReportRepository`] - Report lookups
//! - [`PgMerchandiserRepository`] - Merchandiser lookups
//! - [`PgTokenRepository`] - API token storage and validation

pub mod entities;
pub mod mapper;
pub mod pg_favorite_repository;
pub mod pg_merchandiser_repository;
pub mod pg_report_repository;
pub mod pg_token_repository;

pub use mapper::{FavoriteMapper, MappingError, MerchandiserMapper, ReportMapper};
pub use pg_favorite_repository::PgFavoriteRepository;
pub use pg_merchandiser_repository::PgMerchandiserRepository;
pub use pg_report_repository::PgReportRepository;
pub use pg_token_repository::PgTokenRepository;
