//! Reassignment service
//!
//! Swaps one reviewer of an open pull request for another active member of
//! the outgoing reviewer's team.

use std::collections::HashSet;

use review_core::error::DomainError;
use tracing::{debug, info, instrument};

use crate::dto::{PullRequestResponse, ReassignReviewerRequest, ReassignResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reassignment service
pub struct ReassignmentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReassignmentService<'a> {
    /// Create a new ReassignmentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Replace `old_user_id` on the pull request with a freshly selected reviewer.
    ///
    /// Checks run in order: PR exists, PR is open, old reviewer is assigned,
    /// old reviewer is a known user, then at least one candidate remains. The
    /// store repeats the state checks under a row lock when applying the swap.
    #[instrument(skip(self, request), fields(pr_id = %request.pull_request_id, old_user_id = %request.old_user_id))]
    pub async fn reassign(&self, request: ReassignReviewerRequest) -> ServiceResult<ReassignResponse> {
        let ReassignReviewerRequest {
            pull_request_id,
            old_user_id,
        } = request;

        let pr = self
            .ctx
            .pull_request_repo()
            .find_by_id(&pull_request_id)
            .await?
            .ok_or_else(|| DomainError::PullRequestNotFound(pull_request_id.clone()))?;

        if pr.is_merged() {
            return Err(DomainError::PullRequestMerged(pr.id).into());
        }
        if !pr.has_reviewer(&old_user_id) {
            return Err(DomainError::ReviewerNotAssigned {
                pull_request_id: pr.id,
                user_id: old_user_id,
            }
            .into());
        }

        let old_reviewer = self
            .ctx
            .user_repo()
            .find_by_id(&old_user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(old_user_id.clone()))?;

        let excluded: HashSet<&str> = pr
            .assigned_reviewers
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(pr.author_id.as_str()))
            .collect();

        let pool: Vec<String> = self
            .ctx
            .user_repo()
            .find_by_team(&old_reviewer.team_name)
            .await?
            .into_iter()
            .filter(|u| u.can_review() && !excluded.contains(u.id.as_str()))
            .map(|u| u.id)
            .collect();

        debug!(team_name = %old_reviewer.team_name, candidates = pool.len(), "Replacement pool built");

        let replacement = self
            .ctx
            .selector()
            .select_one(&pool)
            .ok_or_else(|| DomainError::NoCandidate {
                pull_request_id: pr.id.clone(),
            })?;

        let updated = self
            .ctx
            .pull_request_repo()
            .replace_reviewer(&pr.id, &old_user_id, &replacement)
            .await?;

        info!(
            pr_id = %updated.id,
            old_user_id = %old_user_id,
            new_user_id = %replacement,
            "Reviewer reassigned"
        );

        Ok(ReassignResponse {
            pr: PullRequestResponse::from(updated),
            replaced_by: replacement,
        })
    }
}
