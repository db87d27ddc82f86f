//! Pull request database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for pull_requests table
#[derive(Debug, Clone, FromRow)]
pub struct PullRequestModel {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub merged_at: Option<DateTime<Utc>>,
}

/// Pull request row joined from a reviewer listing
#[derive(Debug, Clone, FromRow)]
pub struct PullRequestSummaryModel {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: String,
}

/// Aggregated assignment count per reviewer
#[derive(Debug, Clone, FromRow)]
pub struct ReviewerStatModel {
    pub user_id: String,
    pub assigned_count: i64,
}
