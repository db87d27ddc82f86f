//! Service context - dependency container for services
//!
//! Holds the repositories and the reviewer selection policy needed by services.

use std::sync::Arc;

use review_core::selection::{RandomReviewerSelector, ReviewerSelector};
use review_core::traits::{PullRequestRepository, TeamRepository, UserRepository};
use review_db::{InMemoryStore, PgPool, PgPullRequestRepository, PgTeamRepository, PgUserRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Immutable after construction and cheap to clone; every request shares one.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    team_repo: Arc<dyn TeamRepository>,
    user_repo: Arc<dyn UserRepository>,
    pull_request_repo: Arc<dyn PullRequestRepository>,

    // Policies
    selector: Arc<dyn ReviewerSelector>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        team_repo: Arc<dyn TeamRepository>,
        user_repo: Arc<dyn UserRepository>,
        pull_request_repo: Arc<dyn PullRequestRepository>,
        selector: Arc<dyn ReviewerSelector>,
    ) -> Self {
        Self {
            team_repo,
            user_repo,
            pull_request_repo,
            selector,
        }
    }

    /// Context backed by PostgreSQL repositories and random selection
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgTeamRepository::new(pool.clone())),
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgPullRequestRepository::new(pool)),
            Arc::new(RandomReviewerSelector::new()),
        )
    }

    /// Context backed by a fresh in-memory store and random selection
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::new(
            store.clone(),
            store.clone(),
            store,
            Arc::new(RandomReviewerSelector::new()),
        )
    }

    // === Repositories ===

    /// Get the team repository
    pub fn team_repo(&self) -> &dyn TeamRepository {
        self.team_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the pull request repository
    pub fn pull_request_repo(&self) -> &dyn PullRequestRepository {
        self.pull_request_repo.as_ref()
    }

    // === Policies ===

    /// Get the reviewer selector
    pub fn selector(&self) -> &dyn ReviewerSelector {
        self.selector.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("selector", &"dyn ReviewerSelector")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom dependencies
///
/// The selector defaults to [`RandomReviewerSelector`].
#[derive(Default)]
pub struct ServiceContextBuilder {
    team_repo: Option<Arc<dyn TeamRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    pull_request_repo: Option<Arc<dyn PullRequestRepository>>,
    selector: Option<Arc<dyn ReviewerSelector>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team_repo(mut self, repo: Arc<dyn TeamRepository>) -> Self {
        self.team_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn pull_request_repo(mut self, repo: Arc<dyn PullRequestRepository>) -> Self {
        self.pull_request_repo = Some(repo);
        self
    }

    pub fn selector(mut self, selector: Arc<dyn ReviewerSelector>) -> Self {
        self.selector = Some(selector);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.team_repo
                .ok_or_else(|| ServiceError::validation("team_repo is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.pull_request_repo
                .ok_or_else(|| ServiceError::validation("pull_request_repo is required"))?,
            self.selector
                .unwrap_or_else(|| Arc::new(RandomReviewerSelector::new())),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_repositories() {
        let err = ServiceContextBuilder::new().build().unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_builder_with_shared_store() {
        let store = Arc::new(InMemoryStore::new());
        let ctx = ServiceContextBuilder::new()
            .team_repo(store.clone())
            .user_repo(store.clone())
            .pull_request_repo(store)
            .build();
        assert!(ctx.is_ok());
    }
}
