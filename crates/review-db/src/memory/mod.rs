//! In-memory implementation of the repository traits.
//!
//! Every operation takes one lock over the whole store, so multi-record
//! operations are atomic with respect to each other. State is lost on drop.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use review_core::entities::{PullRequest, PullRequestSummary, ReviewerStat, Team, TeamMember, User};
use review_core::error::DomainError;
use review_core::traits::{PullRequestRepository, RepoResult, TeamRepository, UserRepository};

#[derive(Debug, Default)]
struct State {
    teams: BTreeSet<String>,
    users: BTreeMap<String, User>,
    pull_requests: BTreeMap<String, PullRequest>,
}

impl State {
    fn upsert_user(&mut self, user: &User) -> RepoResult<()> {
        if !self.teams.contains(&user.team_name) {
            return Err(DomainError::DatabaseError(format!(
                "user {} references unknown team {}",
                user.id, user.team_name
            )));
        }
        self.users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    fn users_in_team<'a>(&'a self, team_name: &'a str) -> impl Iterator<Item = &'a User> + 'a {
        self.users.values().filter(move |u| u.is_in_team(team_name))
    }
}

/// Store holding teams, users and pull requests behind a single mutex
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// Teams
// ============================================================================

#[async_trait]
impl TeamRepository for InMemoryStore {
    async fn create_with_members(&self, team: &Team) -> RepoResult<()> {
        let mut state = self.state.lock();
        if state.teams.contains(&team.name) {
            return Err(DomainError::TeamAlreadyExists(team.name.clone()));
        }

        state.teams.insert(team.name.clone());
        for user in team.users() {
            state.users.insert(user.id.clone(), user);
        }
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Team>> {
        let state = self.state.lock();
        if !state.teams.contains(name) {
            return Ok(None);
        }
        let members = state
            .users_in_team(name)
            .cloned()
            .map(TeamMember::from)
            .collect();
        Ok(Some(Team::new(name, members)))
    }
}

// ============================================================================
// Users
// ============================================================================

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn upsert(&self, user: &User) -> RepoResult<()> {
        self.state.lock().upsert_user(user)
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        Ok(self.state.lock().users.get(id).cloned())
    }

    async fn set_active(&self, id: &str, is_active: bool) -> RepoResult<Option<User>> {
        let mut state = self.state.lock();
        Ok(state.users.get_mut(id).map(|user| {
            user.set_active(is_active);
            user.clone()
        }))
    }

    async fn set_active_by_team(&self, team_name: &str, is_active: bool) -> RepoResult<u64> {
        let mut state = self.state.lock();
        let mut touched = 0;
        for user in state.users.values_mut().filter(|u| u.is_in_team(team_name)) {
            user.set_active(is_active);
            touched += 1;
        }
        Ok(touched)
    }

    async fn find_by_team(&self, team_name: &str) -> RepoResult<Vec<User>> {
        Ok(self.state.lock().users_in_team(team_name).cloned().collect())
    }
}

// ============================================================================
// Pull Requests
// ============================================================================

#[async_trait]
impl PullRequestRepository for InMemoryStore {
    async fn create_with_reviewers(&self, pr: &PullRequest) -> RepoResult<PullRequest> {
        let mut state = self.state.lock();
        if state.pull_requests.contains_key(&pr.id) {
            return Err(DomainError::PullRequestAlreadyExists(pr.id.clone()));
        }
        if !state.users.contains_key(&pr.author_id) {
            return Err(DomainError::DatabaseError(format!(
                "pull request {} references unknown author {}",
                pr.id, pr.author_id
            )));
        }

        let mut stored = PullRequest::new(&pr.id, &pr.name, &pr.author_id, Vec::new());
        for reviewer in &pr.assigned_reviewers {
            stored.add_reviewer(reviewer);
        }
        stored.sort_reviewers();
        state.pull_requests.insert(stored.id.clone(), stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<PullRequest>> {
        Ok(self.state.lock().pull_requests.get(id).cloned())
    }

    async fn merge(&self, id: &str) -> RepoResult<Option<PullRequest>> {
        let mut state = self.state.lock();
        Ok(state.pull_requests.get_mut(id).map(|pr| {
            pr.merge(Utc::now());
            pr.clone()
        }))
    }

    async fn find_by_reviewer(&self, user_id: &str) -> RepoResult<Vec<PullRequestSummary>> {
        let state = self.state.lock();
        Ok(state
            .pull_requests
            .values()
            .filter(|pr| pr.has_reviewer(user_id))
            .map(PullRequest::summary)
            .collect())
    }

    async fn replace_reviewer(
        &self,
        pr_id: &str,
        old_reviewer: &str,
        new_reviewer: &str,
    ) -> RepoResult<PullRequest> {
        let mut state = self.state.lock();
        let pr = state
            .pull_requests
            .get_mut(pr_id)
            .ok_or_else(|| DomainError::PullRequestNotFound(pr_id.to_string()))?;

        pr.replace_reviewer(old_reviewer, new_reviewer)?;
        pr.sort_reviewers();
        Ok(pr.clone())
    }

    async fn apply_reviewer_changes(
        &self,
        pr_id: &str,
        removed: &[String],
        added: &[String],
    ) -> RepoResult<bool> {
        let mut state = self.state.lock();
        let pr = state
            .pull_requests
            .get_mut(pr_id)
            .ok_or_else(|| DomainError::PullRequestNotFound(pr_id.to_string()))?;

        if !pr.is_open() {
            return Ok(false);
        }
        for reviewer in removed {
            pr.remove_reviewer(reviewer);
        }
        for reviewer in added {
            pr.add_reviewer(reviewer);
        }
        pr.sort_reviewers();
        Ok(true)
    }

    async fn find_open_ids_with_team_reviewers(&self, team_name: &str) -> RepoResult<Vec<String>> {
        let state = self.state.lock();
        let in_team = |id: &String| state.users.get(id).is_some_and(|u| u.is_in_team(team_name));

        Ok(state
            .pull_requests
            .values()
            .filter(|pr| pr.is_open() && pr.assigned_reviewers.iter().any(in_team))
            .map(|pr| pr.id.clone())
            .collect())
    }

    async fn count_assignments_by_reviewer(&self) -> RepoResult<Vec<ReviewerStat>> {
        let state = self.state.lock();
        let mut counts: BTreeMap<&str, i64> = BTreeMap::new();
        for reviewer in state.pull_requests.values().flat_map(|pr| &pr.assigned_reviewers) {
            *counts.entry(reviewer.as_str()).or_default() += 1;
        }
        Ok(counts
            .into_iter()
            .map(|(user_id, count)| ReviewerStat::new(user_id, count))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend_team() -> Team {
        Team::new(
            "backend",
            vec![
                TeamMember::new("u2", "Bob", true),
                TeamMember::new("u1", "Alice", true),
                TeamMember::new("u3", "Carol", false),
            ],
        )
    }

    fn reviewers(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| (*s).to_string()).collect()
    }

    #[tokio::test]
    async fn test_team_round_trip_orders_members() {
        let store = InMemoryStore::new();
        store.create_with_members(&backend_team()).await.unwrap();

        let team = TeamRepository::find_by_name(&store, "backend").await.unwrap().unwrap();
        let ids: Vec<_> = team.members.iter().map(|m| m.user_id.as_str()).collect();
        assert_eq!(ids, vec!["u1", "u2", "u3"]);
        assert!(TeamRepository::find_by_name(&store, "frontend").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_team_rejected_without_changes() {
        let store = InMemoryStore::new();
        store.create_with_members(&backend_team()).await.unwrap();

        let again = Team::new("backend", vec![TeamMember::new("u9", "Zed", true)]);
        let err = store.create_with_members(&again).await.unwrap_err();
        assert!(matches!(err, DomainError::TeamAlreadyExists(_)));
        assert!(UserRepository::find_by_id(&store, "u9").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_member_upsert_moves_user_between_teams() {
        let store = InMemoryStore::new();
        store.create_with_members(&backend_team()).await.unwrap();
        let frontend = Team::new("frontend", vec![TeamMember::new("u1", "Alice B.", false)]);
        store.create_with_members(&frontend).await.unwrap();

        let user = UserRepository::find_by_id(&store, "u1").await.unwrap().unwrap();
        assert_eq!(user.team_name, "frontend");
        assert_eq!(user.username, "Alice B.");
        assert!(!user.is_active);
        assert_eq!(store.find_by_team("backend").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_upsert_requires_known_team() {
        let store = InMemoryStore::new();
        let err = store.upsert(&User::new("u1", "Alice", "ghost", true)).await.unwrap_err();
        assert!(err.is_infrastructure());
    }

    #[tokio::test]
    async fn test_bulk_set_active() {
        let store = InMemoryStore::new();
        store.create_with_members(&backend_team()).await.unwrap();

        assert_eq!(store.set_active_by_team("backend", false).await.unwrap(), 3);
        assert!(store.find_by_team("backend").await.unwrap().iter().all(|u| !u.is_active));
        assert!(store.set_active("nobody", true).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_merge_stamps_once() {
        let store = InMemoryStore::new();
        store.create_with_members(&backend_team()).await.unwrap();
        let pr = PullRequest::new("pr-1", "Add search", "u1", reviewers(&["u2"]));
        store.create_with_reviewers(&pr).await.unwrap();

        let first = store.merge("pr-1").await.unwrap().unwrap();
        let second = store.merge("pr-1").await.unwrap().unwrap();
        assert!(first.is_merged());
        assert_eq!(first, second);
        assert!(store.merge("pr-404").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reviewer_changes_skip_merged() {
        let store = InMemoryStore::new();
        store.create_with_members(&backend_team()).await.unwrap();
        let pr = PullRequest::new("pr-1", "Add search", "u1", reviewers(&["u2", "u3"]));
        store.create_with_reviewers(&pr).await.unwrap();

        let applied = store
            .apply_reviewer_changes("pr-1", &reviewers(&["u2"]), &reviewers(&["u3"]))
            .await
            .unwrap();
        assert!(applied);
        let pr = PullRequestRepository::find_by_id(&store, "pr-1").await.unwrap().unwrap();
        assert_eq!(pr.assigned_reviewers, reviewers(&["u3"]));

        store.merge("pr-1").await.unwrap();
        let applied = store
            .apply_reviewer_changes("pr-1", &reviewers(&["u3"]), &[])
            .await
            .unwrap();
        assert!(!applied);
    }

    #[tokio::test]
    async fn test_open_ids_and_stats() {
        let store = InMemoryStore::new();
        store.create_with_members(&backend_team()).await.unwrap();
        let other = Team::new("ops", vec![TeamMember::new("o1", "Olga", true)]);
        store.create_with_members(&other).await.unwrap();

        for (id, revs) in [("pr-2", vec!["u2", "u3"]), ("pr-1", vec!["u2"]), ("pr-3", vec!["o1"])] {
            let pr = PullRequest::new(id, id, "u1", reviewers(&revs));
            store.create_with_reviewers(&pr).await.unwrap();
        }
        store.merge("pr-2").await.unwrap();

        assert_eq!(
            store.find_open_ids_with_team_reviewers("backend").await.unwrap(),
            reviewers(&["pr-1"])
        );
        assert_eq!(
            store.count_assignments_by_reviewer().await.unwrap(),
            vec![
                ReviewerStat::new("o1", 1),
                ReviewerStat::new("u2", 2),
                ReviewerStat::new("u3", 1),
            ]
        );

        let listed: Vec<_> = store
            .find_by_reviewer("u2")
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(listed, reviewers(&["pr-1", "pr-2"]));
    }
}
