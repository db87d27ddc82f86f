//! Shared fixtures for service tests

use std::collections::BTreeSet;
use std::sync::Arc;

use review_core::selection::ReviewerSelector;
use review_db::InMemoryStore;

use super::context::{ServiceContext, ServiceContextBuilder};
use super::team::TeamService;
use crate::dto::{CreateTeamRequest, TeamMemberRequest};

/// Picks the lowest user IDs so assertions can name the chosen reviewers
pub struct LowestIdSelector;

impl ReviewerSelector for LowestIdSelector {
    fn select(&self, pool: &[String], k: usize) -> Vec<String> {
        let distinct: BTreeSet<&String> = pool.iter().collect();
        distinct.into_iter().take(k).cloned().collect()
    }
}

/// In-memory context with deterministic reviewer selection
pub fn deterministic_context() -> ServiceContext {
    let store = Arc::new(InMemoryStore::new());
    ServiceContextBuilder::new()
        .team_repo(store.clone())
        .user_repo(store.clone())
        .pull_request_repo(store)
        .selector(Arc::new(LowestIdSelector))
        .build()
        .expect("all repositories provided")
}

pub fn team_request(team_name: &str, members: &[(&str, bool)]) -> CreateTeamRequest {
    CreateTeamRequest {
        team_name: team_name.to_string(),
        members: members
            .iter()
            .map(|(id, active)| TeamMemberRequest {
                user_id: (*id).to_string(),
                username: format!("user {id}"),
                is_active: *active,
            })
            .collect(),
    }
}

pub async fn seed_team(ctx: &ServiceContext, team_name: &str, members: &[(&str, bool)]) {
    TeamService::new(ctx)
        .create_team(team_request(team_name, members))
        .await
        .expect("seed team");
}
