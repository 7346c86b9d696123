//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs are deserialized with Serde and checked by standalone
//! validation functions; response DTOs serialize in camelCase.

pub mod favorite;
pub mod health;
pub mod pagination;
