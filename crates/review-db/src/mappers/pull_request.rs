//! Pull request model -> entity mappers

use review_core::entities::{PullRequest, PullRequestSummary, ReviewerStat};
use review_core::error::DomainError;

use crate::models::{PullRequestModel, PullRequestSummaryModel, ReviewerStatModel};

/// Assemble a pull request from its row and its reviewer rows
pub fn pull_request_from_parts(
    model: PullRequestModel,
    reviewers: Vec<String>,
) -> Result<PullRequest, DomainError> {
    Ok(PullRequest {
        id: model.pull_request_id,
        name: model.pull_request_name,
        author_id: model.author_id,
        status: model.status.parse()?,
        assigned_reviewers: reviewers,
        created_at: model.created_at,
        merged_at: model.merged_at,
    })
}

impl TryFrom<PullRequestSummaryModel> for PullRequestSummary {
    type Error = DomainError;

    fn try_from(model: PullRequestSummaryModel) -> Result<Self, Self::Error> {
        Ok(PullRequestSummary {
            id: model.pull_request_id,
            name: model.pull_request_name,
            author_id: model.author_id,
            status: model.status.parse()?,
        })
    }
}

impl From<ReviewerStatModel> for ReviewerStat {
    fn from(model: ReviewerStatModel) -> Self {
        ReviewerStat {
            user_id: model.user_id,
            assigned_count: model.assigned_count,
        }
    }
}
