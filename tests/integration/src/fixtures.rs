//! Test fixtures and data generators
//!
//! Request builders and response shapes for the reviewer assignment API.
//! Identifiers are suffixed so repeated runs against one database never collide.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

fn run_id() -> i64 {
    static RUN_ID: OnceLock<i64> = OnceLock::new();
    *RUN_ID.get_or_init(|| chrono::Utc::now().timestamp_micros())
}

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    format!("{}-{}", run_id(), COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Team member in a create-team request
#[derive(Debug, Clone, Serialize)]
pub struct TeamMemberRequest {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

/// Create team request
#[derive(Debug, Clone, Serialize)]
pub struct CreateTeamRequest {
    pub team_name: String,
    pub members: Vec<TeamMemberRequest>,
}

impl CreateTeamRequest {
    /// Team with `size` active members; member IDs are `<team>-u1..`
    pub fn unique(size: usize) -> Self {
        let team_name = format!("team-{}", unique_suffix());
        let members = (1..=size)
            .map(|i| TeamMemberRequest {
                user_id: format!("{team_name}-u{i}"),
                username: format!("User {i}"),
                is_active: true,
            })
            .collect();
        Self { team_name, members }
    }

    pub fn member_id(&self, index: usize) -> String {
        self.members[index].user_id.clone()
    }
}

/// Create pull request request
#[derive(Debug, Clone, Serialize)]
pub struct CreatePullRequestRequest {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
}

impl CreatePullRequestRequest {
    pub fn unique(author_id: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            pull_request_id: format!("pr-{suffix}"),
            pull_request_name: format!("Change {suffix}"),
            author_id: author_id.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TeamMemberResponse {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct TeamResponse {
    pub team_name: String,
    pub members: Vec<TeamMemberResponse>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTeamResponse {
    pub team: TeamResponse,
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub user_id: String,
    pub username: String,
    pub team_name: String,
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PullRequestResponse {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: String,
    pub assigned_reviewers: Vec<String>,
    pub created_at: String,
    pub merged_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PullRequestEnvelope {
    pub pr: PullRequestResponse,
}

#[derive(Debug, Deserialize)]
pub struct ReassignResponse {
    pub pr: PullRequestResponse,
    pub replaced_by: String,
}

#[derive(Debug, Deserialize)]
pub struct PullRequestShortResponse {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct UserReviewsResponse {
    pub user_id: String,
    pub pull_requests: Vec<PullRequestShortResponse>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewerStatResponse {
    pub user_id: String,
    pub assigned_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct ReviewerStatsResponse {
    pub reviewer_assignments: Vec<ReviewerStatResponse>,
}

#[derive(Debug, Deserialize)]
pub struct DeactivationSummaryResponse {
    pub team_name: String,
    pub deactivated_reviewers: Vec<String>,
    pub reassigned_count: u64,
    pub unassigned_count: u64,
}
