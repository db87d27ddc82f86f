//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Identifiers are opaque strings; the only rule is that they are non-empty.

use serde::Deserialize;
use validator::Validate;

use review_core::entities::{Team, TeamMember};

// ============================================================================
// Team Requests
// ============================================================================

/// Member entry in a team creation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TeamMemberRequest {
    #[validate(length(min = 1, message = "user_id is required"))]
    pub user_id: String,

    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Create team request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, message = "team_name is required"))]
    pub team_name: String,

    #[serde(default)]
    #[validate(nested)]
    pub members: Vec<TeamMemberRequest>,
}

impl CreateTeamRequest {
    /// Convert into the domain entity.
    ///
    /// A repeated `user_id` keeps only its last entry, in the position of its
    /// first occurrence.
    pub fn into_team(self) -> Team {
        let mut members: Vec<TeamMember> = Vec::with_capacity(self.members.len());
        for m in self.members {
            let member = TeamMember::new(m.user_id, m.username, m.is_active);
            match members.iter_mut().find(|e| e.user_id == member.user_id) {
                Some(existing) => *existing = member,
                None => members.push(member),
            }
        }
        Team::new(self.team_name, members)
    }
}

/// `?team_name=` query
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TeamNameQuery {
    #[validate(length(min = 1, message = "team_name is required"))]
    pub team_name: String,
}

/// Deactivate team request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DeactivateTeamRequest {
    #[validate(length(min = 1, message = "team_name is required"))]
    pub team_name: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Set user active flag request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetUserActiveRequest {
    #[validate(length(min = 1, message = "user_id is required"))]
    pub user_id: String,

    pub is_active: bool,
}

/// `?user_id=` query
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserIdQuery {
    #[validate(length(min = 1, message = "user_id is required"))]
    pub user_id: String,
}

// ============================================================================
// Pull Request Requests
// ============================================================================

/// Create pull request request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePullRequestRequest {
    #[validate(length(min = 1, message = "pull_request_id is required"))]
    pub pull_request_id: String,

    #[validate(length(min = 1, message = "pull_request_name is required"))]
    pub pull_request_name: String,

    #[validate(length(min = 1, message = "author_id is required"))]
    pub author_id: String,
}

/// Merge pull request request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MergePullRequestRequest {
    #[validate(length(min = 1, message = "pull_request_id is required"))]
    pub pull_request_id: String,
}

/// Reassign reviewer request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReassignReviewerRequest {
    #[validate(length(min = 1, message = "pull_request_id is required"))]
    pub pull_request_id: String,

    #[validate(length(min = 1, message = "old_user_id is required"))]
    pub old_user_id: String,
}
