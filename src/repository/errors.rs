use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Failures talking to the upstream anime catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network failure or a non-success HTTP status.
    #[error("upstream fetch failed: {0}")]
    UpstreamFetch(String),
    /// The body was not JSON or did not match the expected shape.
    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            CatalogError::MalformedResponse(value.to_string())
        } else {
            CatalogError::UpstreamFetch(value.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        CatalogError::MalformedResponse(value.to_string())
    }
}

impl From<TypeConstraintError> for CatalogError {
    fn from(value: TypeConstraintError) -> Self {
        CatalogError::MalformedResponse(value.to_string())
    }
}

/// Convenient alias for results returned from catalog readers.
pub type CatalogResult<T> = Result<T, CatalogError>;
