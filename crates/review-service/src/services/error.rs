//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use review_common::{domain_status_code, AppError};
use review_core::{DomainError, ErrorKind};
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation or storage failure
    Domain(DomainError),

    /// Validation error
    Validation(String),

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(e) => e.kind(),
            Self::Validation(_) => ErrorKind::Validation,
            Self::Internal(_) => ErrorKind::Infrastructure,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => domain_status_code(e),
            Self::Validation(_) => 400,
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_mapping() {
        let err = ServiceError::from(DomainError::PullRequestMerged("pr-1".into()));
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "PR_MERGED");
        assert_eq!(err.kind(), ErrorKind::PrMerged);

        let err = ServiceError::from(DomainError::TeamAlreadyExists("backend".into()));
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "TEAM_EXISTS");
    }

    #[test]
    fn test_validation_error() {
        let err = ServiceError::validation("team_name is required");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(err.to_string(), "Validation error: team_name is required");
    }

    #[test]
    fn test_convert_to_app_error() {
        let service_err = ServiceError::from(DomainError::UserNotFound("u1".into()));
        let app_err: AppError = service_err.into();
        assert_eq!(app_err.status_code(), 404);
        assert_eq!(app_err.error_code(), "NOT_FOUND");

        let app_err: AppError = ServiceError::internal("boom").into();
        assert!(app_err.is_server_error());
    }
}
