//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Methods that touch more than one record are
//! atomic: implementations either apply every change or none.

use async_trait::async_trait;

use crate::entities::{PullRequest, PullRequestSummary, ReviewerStat, Team, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Team Repository
// ============================================================================

#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Insert the team and upsert every member, binding them to it.
    ///
    /// Fails with `TeamAlreadyExists` if the name is taken; nothing is written
    /// in that case.
    async fn create_with_members(&self, team: &Team) -> RepoResult<()>;

    /// Find team by name, with members ordered by user ID
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Team>>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or update a user by ID
    async fn upsert(&self, user: &User) -> RepoResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>>;

    /// Set the active flag, returning the updated user (`None` if unknown)
    async fn set_active(&self, id: &str, is_active: bool) -> RepoResult<Option<User>>;

    /// Set the active flag for every user bound to a team; returns rows touched
    async fn set_active_by_team(&self, team_name: &str, is_active: bool) -> RepoResult<u64>;

    /// List users bound to a team, ordered by user ID
    async fn find_by_team(&self, team_name: &str) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Pull Request Repository
// ============================================================================

#[async_trait]
pub trait PullRequestRepository: Send + Sync {
    /// Insert a pull request together with its initial reviewers.
    ///
    /// Fails with `PullRequestAlreadyExists` if the ID is taken. Returns the
    /// stored pull request (with the store's creation timestamp).
    async fn create_with_reviewers(&self, pr: &PullRequest) -> RepoResult<PullRequest>;

    /// Find pull request by ID, including its reviewers
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<PullRequest>>;

    /// Transition OPEN -> MERGED, stamping the merge time once.
    ///
    /// Already-merged pull requests are returned unchanged. `None` if unknown.
    async fn merge(&self, id: &str) -> RepoResult<Option<PullRequest>>;

    /// List pull requests the user is currently reviewing, ordered by PR ID
    async fn find_by_reviewer(&self, user_id: &str) -> RepoResult<Vec<PullRequestSummary>>;

    /// Swap one reviewer for another under a lock on the pull request.
    ///
    /// Re-validates that the PR exists, is OPEN, and still has `old_reviewer`
    /// assigned, so a caller acting on a stale read gets the typed error.
    async fn replace_reviewer(
        &self,
        pr_id: &str,
        old_reviewer: &str,
        new_reviewer: &str,
    ) -> RepoResult<PullRequest>;

    /// Remove and add reviewers on one pull request atomically.
    ///
    /// Additions are idempotent. Returns `false` without changing anything if
    /// the pull request is no longer OPEN.
    async fn apply_reviewer_changes(
        &self,
        pr_id: &str,
        removed: &[String],
        added: &[String],
    ) -> RepoResult<bool>;

    /// Distinct OPEN pull request IDs having at least one reviewer in the team
    async fn find_open_ids_with_team_reviewers(&self, team_name: &str) -> RepoResult<Vec<String>>;

    /// Number of assignments per reviewer, ordered by user ID
    async fn count_assignments_by_reviewer(&self) -> RepoResult<Vec<ReviewerStat>>;
}
