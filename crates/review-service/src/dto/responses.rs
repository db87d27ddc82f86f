//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Field names are
//! part of the wire contract.

use chrono::{DateTime, Utc};
use serde::Serialize;

use review_core::entities::PullRequestStatus;

// ============================================================================
// Team Responses
// ============================================================================

/// Team member as listed on a team
#[derive(Debug, Clone, Serialize)]
pub struct TeamMemberResponse {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

/// Team with its members
#[derive(Debug, Clone, Serialize)]
pub struct TeamResponse {
    pub team_name: String,
    pub members: Vec<TeamMemberResponse>,
}

/// Body of a successful team creation
#[derive(Debug, Clone, Serialize)]
pub struct CreateTeamResponse {
    pub team: TeamResponse,
}

/// Outcome of a team deactivation
#[derive(Debug, Clone, Serialize)]
pub struct DeactivationSummaryResponse {
    pub team_name: String,
    /// One entry per reviewer removal; a user removed from several pull
    /// requests appears several times
    pub deactivated_reviewers: Vec<String>,
    pub reassigned_count: u64,
    pub unassigned_count: u64,
}

// ============================================================================
// User Responses
// ============================================================================

/// User with team binding and activity flag
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub user_id: String,
    pub username: String,
    pub team_name: String,
    pub is_active: bool,
}

/// `{"user": ...}` envelope
#[derive(Debug, Clone, Serialize)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

/// Pull requests a user is reviewing
#[derive(Debug, Clone, Serialize)]
pub struct UserReviewsResponse {
    pub user_id: String,
    pub pull_requests: Vec<PullRequestShortResponse>,
}

// ============================================================================
// Pull Request Responses
// ============================================================================

/// Full pull request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PullRequestResponse {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: PullRequestStatus,
    pub assigned_reviewers: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub merged_at: Option<DateTime<Utc>>,
}

/// Pull request without reviewers or timestamps
#[derive(Debug, Clone, Serialize)]
pub struct PullRequestShortResponse {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: PullRequestStatus,
}

/// `{"pr": ...}` envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PullRequestEnvelope {
    pub pr: PullRequestResponse,
}

/// Body of a successful reviewer reassignment
#[derive(Debug, Clone, Serialize)]
pub struct ReassignResponse {
    pub pr: PullRequestResponse,
    pub replaced_by: String,
}

// ============================================================================
// Statistics Responses
// ============================================================================

/// Assignment count for one reviewer
#[derive(Debug, Clone, Serialize)]
pub struct ReviewerStatResponse {
    pub user_id: String,
    pub assigned_count: i64,
}

/// Assignment counts for every reviewer with at least one assignment
#[derive(Debug, Clone, Serialize)]
pub struct ReviewerStatsResponse {
    pub reviewer_assignments: Vec<ReviewerStatResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
