//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! shared by the entitlement domain and the adapters.

mod auth;
mod errors;
mod timestamp;

pub use auth::{AuthError, Identity};
pub use errors::{DomainError, ErrorCode};
pub use timestamp::Timestamp;
