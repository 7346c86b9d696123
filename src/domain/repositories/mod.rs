//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access behind the Repository pattern and are
//! implemented by `crate::infrastructure::persistence`. Services receive
//! them as `Arc<dyn ...>` through their constructors.
//!
//! # Available Repositories
//!
//! - [`FavoriteRepository`] - Favorite link CRUD
//! - [`ReportRepository`] - Report lookups
//! - [`MerchandiserRepository`] - Merchandiser lookups
//! - [`TokenRepository`] - API token authentication
//!
//! # Testing
//!
//! Mock implementations are generated with `mockall` under `cfg(test)`.
//! See `tests/repository_*.rs` for integration tests against PostgreSQL.

pub mod favorite_repository;
pub mod merchandiser_repository;
pub mod report_repository;
pub mod token_repository;

pub use favorite_repository::FavoriteRepository;
pub use merchandiser_repository::MerchandiserRepository;
pub use report_repository::ReportRepository;
pub use token_repository::{ApiToken, TokenRepository};

#[cfg(test)]
pub use favorite_repository::MockFavoriteRepository;
#[cfg(test)]
pub use merchandiser_repository::MockMerchandiserRepository;
#[cfg(test)]
pub use report_repository::MockReportRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
