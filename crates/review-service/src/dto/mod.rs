//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreatePullRequestRequest, CreateTeamRequest, DeactivateTeamRequest, MergePullRequestRequest,
    ReassignReviewerRequest, SetUserActiveRequest, TeamMemberRequest, TeamNameQuery, UserIdQuery,
};

// Re-export commonly used response types
pub use responses::{
    CreateTeamResponse, DeactivationSummaryResponse, HealthChecks, HealthResponse,
    PullRequestEnvelope, PullRequestResponse, PullRequestShortResponse, ReadinessResponse,
    ReassignResponse, ReviewerStatResponse, ReviewerStatsResponse, TeamMemberResponse,
    TeamResponse, UserEnvelope, UserResponse, UserReviewsResponse,
};
