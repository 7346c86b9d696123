//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls and enforce the rules that sit above
//! storage: relations must exist before a favorite is stored, a pair is
//! favorited at most once, and absence is reported as `NotFound` only where
//! the HTTP contract asks for it.
//!
//! # Available Services
//!
//! - [`services::favorite_service::FavoriteService`] - Favorite creation, listing and removal
//! - [`services::auth_service::AuthService`] - API token authentication

pub mod services;
