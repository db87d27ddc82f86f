//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use review_core::entities::{PullRequest, PullRequestSummary, ReviewerStat, Team, TeamMember, User};

use crate::services::deactivation::DeactivationOutcome;

use super::responses::{
    DeactivationSummaryResponse, PullRequestResponse, PullRequestShortResponse,
    ReviewerStatResponse, TeamMemberResponse, TeamResponse, UserResponse,
};

// ============================================================================
// Team Mappers
// ============================================================================

impl From<&TeamMember> for TeamMemberResponse {
    fn from(member: &TeamMember) -> Self {
        Self {
            user_id: member.user_id.clone(),
            username: member.username.clone(),
            is_active: member.is_active,
        }
    }
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            team_name: team.name.clone(),
            members: team.members.iter().map(TeamMemberResponse::from).collect(),
        }
    }
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self::from(&team)
    }
}

impl From<DeactivationOutcome> for DeactivationSummaryResponse {
    fn from(outcome: DeactivationOutcome) -> Self {
        Self {
            team_name: outcome.team_name,
            deactivated_reviewers: outcome.deactivated_reviewers,
            reassigned_count: outcome.reassigned,
            unassigned_count: outcome.unassigned,
        }
    }
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            username: user.username.clone(),
            team_name: user.team_name.clone(),
            is_active: user.is_active,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Pull Request Mappers
// ============================================================================

impl From<&PullRequest> for PullRequestResponse {
    fn from(pr: &PullRequest) -> Self {
        Self {
            pull_request_id: pr.id.clone(),
            pull_request_name: pr.name.clone(),
            author_id: pr.author_id.clone(),
            status: pr.status,
            assigned_reviewers: pr.assigned_reviewers.clone(),
            created_at: pr.created_at,
            merged_at: pr.merged_at,
        }
    }
}

impl From<PullRequest> for PullRequestResponse {
    fn from(pr: PullRequest) -> Self {
        Self {
            pull_request_id: pr.id,
            pull_request_name: pr.name,
            author_id: pr.author_id,
            status: pr.status,
            assigned_reviewers: pr.assigned_reviewers,
            created_at: pr.created_at,
            merged_at: pr.merged_at,
        }
    }
}

impl From<PullRequestSummary> for PullRequestShortResponse {
    fn from(pr: PullRequestSummary) -> Self {
        Self {
            pull_request_id: pr.id,
            pull_request_name: pr.name,
            author_id: pr.author_id,
            status: pr.status,
        }
    }
}

// ============================================================================
// Statistics Mappers
// ============================================================================

impl From<ReviewerStat> for ReviewerStatResponse {
    fn from(stat: ReviewerStat) -> Self {
        Self {
            user_id: stat.user_id,
            assigned_count: stat.assigned_count,
        }
    }
}
