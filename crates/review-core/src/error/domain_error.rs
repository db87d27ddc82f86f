//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Closed classification of every domain failure.
///
/// Callers that need to branch on failure category match on this instead of
/// individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    AlreadyExists,
    NotFound,
    PrMerged,
    ReviewerNotAssigned,
    NoCandidate,
    Validation,
    Infrastructure,
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Team not found: {0}")]
    TeamNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Pull request not found: {0}")]
    PullRequestNotFound(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Team already exists: {0}")]
    TeamAlreadyExists(String),

    #[error("Pull request already exists: {0}")]
    PullRequestAlreadyExists(String),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Cannot reassign on merged pull request: {0}")]
    PullRequestMerged(String),

    #[error("Reviewer {user_id} is not assigned to pull request {pull_request_id}")]
    ReviewerNotAssigned {
        pull_request_id: String,
        user_id: String,
    },

    #[error("No active replacement candidate in team for pull request {pull_request_id}")]
    NoCandidate { pull_request_id: String },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TeamNotFound(_) | Self::UserNotFound(_) | Self::PullRequestNotFound(_) => {
                ErrorKind::NotFound
            }
            Self::TeamAlreadyExists(_) | Self::PullRequestAlreadyExists(_) => {
                ErrorKind::AlreadyExists
            }
            Self::PullRequestMerged(_) => ErrorKind::PrMerged,
            Self::ReviewerNotAssigned { .. } => ErrorKind::ReviewerNotAssigned,
            Self::NoCandidate { .. } => ErrorKind::NoCandidate,
            Self::ValidationError(_) => ErrorKind::Validation,
            Self::DatabaseError(_) | Self::InternalError(_) => ErrorKind::Infrastructure,
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::TeamNotFound(_) | Self::UserNotFound(_) | Self::PullRequestNotFound(_) => {
                "NOT_FOUND"
            }

            // Conflict
            Self::TeamAlreadyExists(_) => "TEAM_EXISTS",
            Self::PullRequestAlreadyExists(_) => "PR_EXISTS",

            // Business Rules
            Self::PullRequestMerged(_) => "PR_MERGED",
            Self::ReviewerNotAssigned { .. } => "NOT_ASSIGNED",
            Self::NoCandidate { .. } => "NO_CANDIDATE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    #[inline]
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Check if this is a conflict error
    #[inline]
    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::AlreadyExists
    }

    /// Check if this error comes from the storage layer rather than business rules
    #[inline]
    pub fn is_infrastructure(&self) -> bool {
        self.kind() == ErrorKind::Infrastructure
    }
}
