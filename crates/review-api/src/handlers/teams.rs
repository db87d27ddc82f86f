//! Team handlers
//!
//! Endpoints for creating, fetching, and deactivating teams.

use axum::{extract::State, Json};
use review_service::{
    CreateTeamRequest, CreateTeamResponse, DeactivateTeamRequest, DeactivationService,
    DeactivationSummaryResponse, TeamNameQuery, TeamResponse, TeamService,
};

use crate::extractors::{ValidatedJson, ValidatedQuery};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a team with its members
///
/// POST /team/add
pub async fn create_team(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateTeamRequest>,
) -> ApiResult<Created<CreateTeamResponse>> {
    let service = TeamService::new(state.service_context());
    let response = service.create_team(request).await?;
    Ok(Created(response))
}

/// Get a team with its members
///
/// GET /team/get?team_name=
pub async fn get_team(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<TeamNameQuery>,
) -> ApiResult<Json<TeamResponse>> {
    let service = TeamService::new(state.service_context());
    let response = service.get_team(&query.team_name).await?;
    Ok(Json(response))
}

/// Deactivate every member of a team and pull them off open pull requests
///
/// POST /team/deactivate
pub async fn deactivate_team(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<DeactivateTeamRequest>,
) -> ApiResult<Json<DeactivationSummaryResponse>> {
    let service = DeactivationService::new(state.service_context());
    let response = service.deactivate(request).await?;
    Ok(Json(response))
}
