//! User handlers
//!
//! Endpoints for user activity and review queues.

use axum::{extract::State, Json};
use review_service::{
    PullRequestService, SetUserActiveRequest, UserEnvelope, UserIdQuery, UserReviewsResponse,
    UserService,
};

use crate::extractors::{ValidatedJson, ValidatedQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// Set a user's active flag
///
/// POST /users/setIsActive
pub async fn set_is_active(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SetUserActiveRequest>,
) -> ApiResult<Json<UserEnvelope>> {
    let service = UserService::new(state.service_context());
    let response = service.set_is_active(request).await?;
    Ok(Json(response))
}

/// List pull requests the user is reviewing
///
/// GET /users/getReview?user_id=
pub async fn get_reviews(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<UserIdQuery>,
) -> ApiResult<Json<UserReviewsResponse>> {
    let service = PullRequestService::new(state.service_context());
    let response = service.list_for_reviewer(&query.user_id).await?;
    Ok(Json(response))
}
