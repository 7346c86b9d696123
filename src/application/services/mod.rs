//! Business logic services for the application layer.

pub mod auth_service;
pub mod favorite_service;

pub use auth_service::{AuthService, hash_token};
pub use favorite_service::{FavoriteService, ToggleOutcome};
