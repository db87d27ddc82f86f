//! Team service
//!
//! Creates teams with their members and looks them up by name.

use review_core::error::DomainError;
use tracing::{info, instrument};

use crate::dto::{CreateTeamRequest, CreateTeamResponse, TeamResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Team service
pub struct TeamService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TeamService<'a> {
    /// Create a new TeamService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a team and upsert its members.
    ///
    /// Members that already exist elsewhere are moved into this team.
    #[instrument(skip(self, request), fields(team_name = %request.team_name))]
    pub async fn create_team(&self, request: CreateTeamRequest) -> ServiceResult<CreateTeamResponse> {
        let mut team = request.into_team();

        self.ctx.team_repo().create_with_members(&team).await?;

        info!(
            team_name = %team.name,
            members = team.member_count(),
            "Team created"
        );

        team.sort_members();
        Ok(CreateTeamResponse {
            team: TeamResponse::from(team),
        })
    }

    /// Get a team with its members ordered by user ID
    #[instrument(skip(self))]
    pub async fn get_team(&self, team_name: &str) -> ServiceResult<TeamResponse> {
        let team = self
            .ctx
            .team_repo()
            .find_by_name(team_name)
            .await?
            .ok_or_else(|| DomainError::TeamNotFound(team_name.to_string()))?;

        Ok(TeamResponse::from(team))
    }
}
