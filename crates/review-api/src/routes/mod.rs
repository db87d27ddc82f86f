//! Route definitions
//!
//! Paths mirror the reviewer-assignment operations one to one.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, pull_requests, stats, teams, users};
use crate::state::AppState;

/// Create the API router (health routes are mounted separately to bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(team_routes())
        .merge(user_routes())
        .merge(pull_request_routes())
        .merge(stats_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Team routes
fn team_routes() -> Router<AppState> {
    Router::new()
        .route("/team/add", post(teams::create_team))
        .route("/team/get", get(teams::get_team))
        .route("/team/deactivate", post(teams::deactivate_team))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/setIsActive", post(users::set_is_active))
        .route("/users/getReview", get(users::get_reviews))
}

/// Pull request routes
fn pull_request_routes() -> Router<AppState> {
    Router::new()
        .route("/pullRequest/create", post(pull_requests::create_pull_request))
        .route("/pullRequest/merge", post(pull_requests::merge_pull_request))
        .route("/pullRequest/reassign", post(pull_requests::reassign_reviewer))
}

/// Statistics routes
fn stats_routes() -> Router<AppState> {
    Router::new().route("/stats/reviewerAssignments", get(stats::reviewer_assignments))
}
