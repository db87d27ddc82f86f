//! Team deactivation service
//!
//! Deactivates every member of a team and pulls them off open pull requests,
//! trying one replacement per vacated slot.
//!
//! Each pull request is updated in its own transaction. A failure part way
//! through leaves the pull requests already processed in their new state and
//! the team's users still active.

use std::collections::HashSet;

use review_core::entities::User;
use review_core::error::DomainError;
use tracing::{debug, info, instrument};

use crate::dto::{DeactivateTeamRequest, DeactivationSummaryResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Result of deactivating a team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeactivationOutcome {
    pub team_name: String,
    /// One entry per reviewer removed from a pull request
    pub deactivated_reviewers: Vec<String>,
    pub reassigned: u64,
    pub unassigned: u64,
}

/// Changes planned for a single pull request
#[derive(Debug, Default)]
struct ReviewerPlan {
    removed: Vec<String>,
    added: Vec<String>,
    unassigned: u64,
}

/// Team deactivation service
pub struct DeactivationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DeactivationService<'a> {
    /// Create a new DeactivationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Deactivate a team, returning the wire summary
    pub async fn deactivate(&self, request: DeactivateTeamRequest) -> ServiceResult<DeactivationSummaryResponse> {
        self.deactivate_team(&request.team_name)
            .await
            .map(DeactivationSummaryResponse::from)
    }

    /// Deactivate every member of `team_name`.
    ///
    /// Replacements are drawn from the team's active users, excluding the
    /// author, reviewers already on the PR, and the members being deactivated.
    #[instrument(skip(self))]
    pub async fn deactivate_team(&self, team_name: &str) -> ServiceResult<DeactivationOutcome> {
        let members = self.ctx.user_repo().find_by_team(team_name).await?;
        if members.is_empty() {
            return Err(DomainError::TeamNotFound(team_name.to_string()).into());
        }

        let deactivating: HashSet<&str> = members.iter().map(|u| u.id.as_str()).collect();
        let pr_ids = self
            .ctx
            .pull_request_repo()
            .find_open_ids_with_team_reviewers(team_name)
            .await?;

        let mut outcome = DeactivationOutcome {
            team_name: team_name.to_string(),
            deactivated_reviewers: Vec::new(),
            reassigned: 0,
            unassigned: 0,
        };

        for pr_id in &pr_ids {
            let Some(pr) = self.ctx.pull_request_repo().find_by_id(pr_id).await? else {
                debug!(pr_id = %pr_id, "Pull request vanished, skipping");
                continue;
            };
            if !pr.is_open() {
                debug!(pr_id = %pr_id, "Pull request no longer open, skipping");
                continue;
            }

            // Re-read per PR so activity changes made meanwhile are honoured
            let team_users = self.ctx.user_repo().find_by_team(team_name).await?;
            let plan = self.plan_changes(&pr.author_id, &pr.assigned_reviewers, &team_users, &deactivating);
            if plan.removed.is_empty() {
                continue;
            }

            let applied = self
                .ctx
                .pull_request_repo()
                .apply_reviewer_changes(pr_id, &plan.removed, &plan.added)
                .await?;
            if !applied {
                debug!(pr_id = %pr_id, "Pull request merged concurrently, changes dropped");
                continue;
            }

            debug!(
                pr_id = %pr_id,
                removed = ?plan.removed,
                added = ?plan.added,
                unassigned = plan.unassigned,
                "Reviewers updated"
            );
            outcome.reassigned += plan.added.len() as u64;
            outcome.unassigned += plan.unassigned;
            outcome.deactivated_reviewers.extend(plan.removed);
        }

        let deactivated_users = self.ctx.user_repo().set_active_by_team(team_name, false).await?;

        info!(
            team_name = %team_name,
            users = deactivated_users,
            pull_requests = pr_ids.len(),
            reassigned = outcome.reassigned,
            unassigned = outcome.unassigned,
            "Team deactivated"
        );

        Ok(outcome)
    }

    fn plan_changes(
        &self,
        author_id: &str,
        assigned: &[String],
        team_users: &[User],
        deactivating: &HashSet<&str>,
    ) -> ReviewerPlan {
        let mut plan = ReviewerPlan::default();
        let mut live: HashSet<String> = assigned.iter().cloned().collect();

        for reviewer in assigned.iter().filter(|r| deactivating.contains(r.as_str())) {
            live.remove(reviewer);
            plan.removed.push(reviewer.clone());

            let pool: Vec<String> = team_users
                .iter()
                .filter(|u| {
                    u.can_review()
                        && u.id != author_id
                        && !live.contains(&u.id)
                        && !deactivating.contains(u.id.as_str())
                })
                .map(|u| u.id.clone())
                .collect();

            match self.ctx.selector().select_one(&pool) {
                Some(replacement) => {
                    live.insert(replacement.clone());
                    plan.added.push(replacement);
                }
                None => plan.unassigned += 1,
            }
        }

        plan
    }
}
