//! HTTP-facing error taxonomy.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{DatabaseError, LookupError};

/// JSON body of every error response: `{"message": "..."}`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// Errors returned by request handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Client input missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// The queried domain does not resolve.
    #[error("Domain not found")]
    NotFound,

    /// Database, resolver or any unexpected internal fault.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn missing_parameter(name: &str) -> Self {
        ApiError::Validation(format!("Missing required parameter: {name}"))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound => ApiError::NotFound,
            other => ApiError::Internal(other.into()),
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        ApiError::Internal(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            ApiError::Validation(message) => message,
            ApiError::NotFound => "Domain not found".to_string(),
            ApiError::Internal(err) => {
                // Full detail stays in the server log
                log::error!("{err:#}");
                "Internal server error".to_string()
            }
        };
        (status, Json(MessageResponse { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let err = ApiError::missing_parameter("domain");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Missing required parameter: domain");
    }

    #[test]
    fn test_lookup_not_found_maps_to_404() {
        let err = ApiError::from(LookupError::NotFound);
        assert!(matches!(err, ApiError::NotFound));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_resolver_failure_maps_to_500() {
        let err = ApiError::from(LookupError::Resolver("SERVFAIL".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_database_failure_maps_to_500() {
        let err = ApiError::from(DatabaseError::SqlError(sqlx::Error::PoolClosed));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let response =
            ApiError::Internal(anyhow::anyhow!("password authentication failed")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
