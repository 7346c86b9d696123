//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod favorites;
pub mod health;

pub use favorites::{
    create_favorite_handler, delete_favorite_handler, get_favorite_handler,
    list_favorites_handler, lookup_favorite_handler, merchandiser_favorites_handler,
    toggle_favorite_handler,
};
pub use health::health_handler;
