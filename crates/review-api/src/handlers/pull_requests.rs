//! Pull request handlers
//!
//! Endpoints for creating, merging, and reassigning pull requests.

use axum::{extract::State, Json};
use review_service::{
    CreatePullRequestRequest, MergePullRequestRequest, PullRequestEnvelope, PullRequestService,
    ReassignResponse, ReassignReviewerRequest, ReassignmentService,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a pull request and assign reviewers
///
/// POST /pullRequest/create
pub async fn create_pull_request(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreatePullRequestRequest>,
) -> ApiResult<Created<PullRequestEnvelope>> {
    let service = PullRequestService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(response))
}

/// Merge a pull request (idempotent)
///
/// POST /pullRequest/merge
pub async fn merge_pull_request(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<MergePullRequestRequest>,
) -> ApiResult<Json<PullRequestEnvelope>> {
    let service = PullRequestService::new(state.service_context());
    let response = service.merge(&request.pull_request_id).await?;
    Ok(Json(response))
}

/// Replace one reviewer
///
/// POST /pullRequest/reassign
pub async fn reassign_reviewer(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ReassignReviewerRequest>,
) -> ApiResult<Json<ReassignResponse>> {
    let service = ReassignmentService::new(state.service_context());
    let response = service.reassign(request).await?;
    Ok(Json(response))
}
