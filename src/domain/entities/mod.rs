//! Core domain entities.
//!
//! Entities are plain data structures without persistence concerns. The
//! storage-shaped counterparts live in
//! [`crate::infrastructure::persistence::entities`].
//!
//! # Entity Types
//!
//! - [`FavoriteLink`] - A report favorited by a merchandiser
//! - [`Report`] - The favorited aggregate
//! - [`Merchandiser`] - The owning aggregate

pub mod favorite;
pub mod merchandiser;
pub mod report;

pub use favorite::{FavoriteLink, FavoriteRefs};
pub use merchandiser::Merchandiser;
pub use report::Report;
