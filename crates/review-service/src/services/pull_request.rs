//! Pull request service
//!
//! Creates pull requests with their initial reviewers, merges them, and
//! reports who is reviewing what.

use review_core::entities::PullRequest;
use review_core::error::DomainError;
use tracing::{debug, info, instrument};

use crate::dto::{
    CreatePullRequestRequest, PullRequestEnvelope, PullRequestResponse, PullRequestShortResponse,
    ReviewerStatResponse, ReviewerStatsResponse, UserReviewsResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::INITIAL_REVIEWERS;

/// Pull request service
pub struct PullRequestService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PullRequestService<'a> {
    /// Create a new PullRequestService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an open pull request and assign up to two reviewers.
    ///
    /// Candidates are the active members of the author's team, minus the
    /// author. A team with fewer candidates yields fewer reviewers.
    #[instrument(skip(self, request), fields(pr_id = %request.pull_request_id, author_id = %request.author_id))]
    pub async fn create(&self, request: CreatePullRequestRequest) -> ServiceResult<PullRequestEnvelope> {
        let author = self
            .ctx
            .user_repo()
            .find_by_id(&request.author_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(request.author_id.clone()))?;

        let pool: Vec<String> = self
            .ctx
            .user_repo()
            .find_by_team(&author.team_name)
            .await?
            .into_iter()
            .filter(|u| u.can_review() && u.id != author.id)
            .map(|u| u.id)
            .collect();

        let reviewers = self.ctx.selector().select(&pool, INITIAL_REVIEWERS);
        debug!(candidates = pool.len(), selected = ?reviewers, "Initial reviewers selected");

        let pr = PullRequest::new(
            request.pull_request_id,
            request.pull_request_name,
            author.id,
            reviewers,
        );
        let created = self.ctx.pull_request_repo().create_with_reviewers(&pr).await?;

        info!(
            pr_id = %created.id,
            author_id = %created.author_id,
            reviewers = ?created.assigned_reviewers,
            "Pull request created"
        );

        Ok(PullRequestEnvelope {
            pr: PullRequestResponse::from(created),
        })
    }

    /// Mark a pull request as merged. Merging an already merged PR returns it
    /// unchanged.
    #[instrument(skip(self))]
    pub async fn merge(&self, pull_request_id: &str) -> ServiceResult<PullRequestEnvelope> {
        let pr = self
            .ctx
            .pull_request_repo()
            .merge(pull_request_id)
            .await?
            .ok_or_else(|| DomainError::PullRequestNotFound(pull_request_id.to_string()))?;

        info!(pr_id = %pr.id, merged_at = ?pr.merged_at, "Pull request merged");

        Ok(PullRequestEnvelope {
            pr: PullRequestResponse::from(pr),
        })
    }

    /// Get a pull request with its reviewers
    #[instrument(skip(self))]
    pub async fn get(&self, pull_request_id: &str) -> ServiceResult<PullRequestResponse> {
        let pr = self
            .ctx
            .pull_request_repo()
            .find_by_id(pull_request_id)
            .await?
            .ok_or_else(|| DomainError::PullRequestNotFound(pull_request_id.to_string()))?;

        Ok(PullRequestResponse::from(pr))
    }

    /// List the pull requests a user is currently reviewing, ordered by PR ID
    #[instrument(skip(self))]
    pub async fn list_for_reviewer(&self, user_id: &str) -> ServiceResult<UserReviewsResponse> {
        if self.ctx.user_repo().find_by_id(user_id).await?.is_none() {
            return Err(DomainError::UserNotFound(user_id.to_string()).into());
        }

        let pull_requests = self
            .ctx
            .pull_request_repo()
            .find_by_reviewer(user_id)
            .await?
            .into_iter()
            .map(PullRequestShortResponse::from)
            .collect();

        Ok(UserReviewsResponse {
            user_id: user_id.to_string(),
            pull_requests,
        })
    }

    /// Count current assignments per reviewer, ordered by user ID
    #[instrument(skip(self))]
    pub async fn reviewer_stats(&self) -> ServiceResult<ReviewerStatsResponse> {
        let stats = self.ctx.pull_request_repo().count_assignments_by_reviewer().await?;

        Ok(ReviewerStatsResponse {
            reviewer_assignments: stats.into_iter().map(ReviewerStatResponse::from).collect(),
        })
    }
}
