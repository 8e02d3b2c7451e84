//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for cache operations and the HTTP surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key is already present (live or expired but not yet swept)
    #[error("Key already exists: {0}")]
    DuplicateKey(String),

    /// Key was never inserted or has already been removed
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Key's TTL elapsed; the entry was removed when this was observed
    #[error("Key expired: {0}")]
    Expired(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl CacheError {
    /// True for the "key unavailable" category (`NotFound` or `Expired`).
    pub fn is_unavailable(&self) -> bool {
        matches!(self, CacheError::NotFound(_) | CacheError::Expired(_))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::DuplicateKey(_) => StatusCode::CONFLICT,
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::Expired(_) => StatusCode::GONE,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_category() {
        assert!(CacheError::NotFound("k".into()).is_unavailable());
        assert!(CacheError::Expired("k".into()).is_unavailable());
        assert!(!CacheError::DuplicateKey("k".into()).is_unavailable());
        assert!(!CacheError::InvalidRequest("k".into()).is_unavailable());
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (CacheError::DuplicateKey("k".into()), StatusCode::CONFLICT),
            (CacheError::NotFound("k".into()), StatusCode::NOT_FOUND),
            (CacheError::Expired("k".into()), StatusCode::GONE),
            (CacheError::InvalidRequest("k".into()), StatusCode::BAD_REQUEST),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
