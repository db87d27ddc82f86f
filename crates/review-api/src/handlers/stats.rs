//! Statistics handlers

use axum::{extract::State, Json};
use review_service::{PullRequestService, ReviewerStatsResponse};

use crate::response::ApiResult;
use crate::state::AppState;

/// Current assignment count per reviewer
///
/// GET /stats/reviewerAssignments
pub async fn reviewer_assignments(
    State(state): State<AppState>,
) -> ApiResult<Json<ReviewerStatsResponse>> {
    let service = PullRequestService::new(state.service_context());
    let response = service.reviewer_stats().await?;
    Ok(Json(response))
}
