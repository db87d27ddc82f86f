//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_error, assert_json, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

async fn create_team(server: &TestServer, team: &CreateTeamRequest) {
    let response = server.post("/team/add", team).await.unwrap();
    let _: CreateTeamResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
}

async fn create_pr(server: &TestServer, request: &CreatePullRequestRequest) -> PullRequestResponse {
    let response = server.post("/pullRequest/create", request).await.unwrap();
    let envelope: PullRequestEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();
    envelope.pr
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Team Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_team() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let team = CreateTeamRequest::unique(3);

    let response = server.post("/team/add", &team).await.unwrap();
    let created: CreateTeamResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.team.team_name, team.team_name);
    assert_eq!(created.team.members.len(), 3);

    let response = server
        .get(&format!("/team/get?team_name={}", team.team_name))
        .await
        .unwrap();
    let fetched: TeamResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<_> = fetched.members.iter().map(|m| m.user_id.clone()).collect();
    assert_eq!(ids, vec![team.member_id(0), team.member_id(1), team.member_id(2)]);
    assert!(fetched.members.iter().all(|m| m.is_active));
}

#[tokio::test]
async fn test_duplicate_team() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let team = CreateTeamRequest::unique(1);
    create_team(&server, &team).await;

    let response = server.post("/team/add", &team).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "TEAM_EXISTS");
}

#[tokio::test]
async fn test_get_unknown_team() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get(&format!("/team/get?team_name=missing-{}", unique_suffix()))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "NOT_FOUND");
}

#[tokio::test]
async fn test_invalid_team_body() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/team/add", &json!({ "team_name": "", "members": [] }))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_set_is_active() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let team = CreateTeamRequest::unique(1);
    create_team(&server, &team).await;

    let body = json!({ "user_id": team.member_id(0), "is_active": false });
    for _ in 0..2 {
        let response = server.post("/users/setIsActive", &body).await.unwrap();
        let envelope: UserEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
        assert!(!envelope.user.is_active);
        assert_eq!(envelope.user.team_name, team.team_name);
    }

    let response = server
        .post(
            "/users/setIsActive",
            &json!({ "user_id": format!("ghost-{}", unique_suffix()), "is_active": true }),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Pull Request Tests
// ============================================================================

#[tokio::test]
async fn test_create_pull_request_assigns_teammates() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let team = CreateTeamRequest::unique(4);
    create_team(&server, &team).await;
    let author = team.member_id(0);

    let pr = create_pr(&server, &CreatePullRequestRequest::unique(&author)).await;
    assert_eq!(pr.status, "OPEN");
    assert_eq!(pr.assigned_reviewers.len(), 2);
    assert!(!pr.assigned_reviewers.contains(&author));
    assert!(pr.merged_at.is_none());
}

#[tokio::test]
async fn test_create_pull_request_errors() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let team = CreateTeamRequest::unique(2);
    create_team(&server, &team).await;

    let request = CreatePullRequestRequest::unique(&team.member_id(0));
    create_pr(&server, &request).await;
    let response = server.post("/pullRequest/create", &request).await.unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "PR_EXISTS");

    let orphan = CreatePullRequestRequest::unique(&format!("ghost-{}", unique_suffix()));
    let response = server.post("/pullRequest/create", &orphan).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "NOT_FOUND");
}

#[tokio::test]
async fn test_reassign_and_merge() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let team = CreateTeamRequest::unique(4);
    create_team(&server, &team).await;
    let author = team.member_id(0);

    let pr = create_pr(&server, &CreatePullRequestRequest::unique(&author)).await;
    let old = pr.assigned_reviewers[0].clone();

    // The author is never a reviewer
    let response = server
        .post(
            "/pullRequest/reassign",
            &json!({ "pull_request_id": pr.pull_request_id, "old_user_id": author }),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "NOT_ASSIGNED");

    let reassign = json!({ "pull_request_id": pr.pull_request_id, "old_user_id": old });
    let response = server.post("/pullRequest/reassign", &reassign).await.unwrap();
    let swapped: ReassignResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(swapped.pr.assigned_reviewers.len(), 2);
    assert!(!swapped.pr.assigned_reviewers.contains(&old));
    assert!(swapped.pr.assigned_reviewers.contains(&swapped.replaced_by));
    assert_ne!(swapped.replaced_by, author);

    let merge = json!({ "pull_request_id": pr.pull_request_id });
    let response = server.post("/pullRequest/merge", &merge).await.unwrap();
    let first: PullRequestEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    let response = server.post("/pullRequest/merge", &merge).await.unwrap();
    let second: PullRequestEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(first.pr.status, "MERGED");
    assert!(first.pr.merged_at.is_some());
    assert_eq!(first.pr, second.pr);

    let still_assigned = json!({
        "pull_request_id": pr.pull_request_id,
        "old_user_id": swapped.replaced_by,
    });
    let response = server.post("/pullRequest/reassign", &still_assigned).await.unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "PR_MERGED");
}

#[tokio::test]
async fn test_reassign_without_candidates() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let team = CreateTeamRequest::unique(3);
    create_team(&server, &team).await;

    let pr = create_pr(&server, &CreatePullRequestRequest::unique(&team.member_id(0))).await;
    let response = server
        .post(
            "/pullRequest/reassign",
            &json!({ "pull_request_id": pr.pull_request_id, "old_user_id": pr.assigned_reviewers[0] }),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "NO_CANDIDATE");
}

#[tokio::test]
async fn test_reviews_and_stats() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let team = CreateTeamRequest::unique(2);
    create_team(&server, &team).await;
    let reviewer = team.member_id(1);

    let pr = create_pr(&server, &CreatePullRequestRequest::unique(&team.member_id(0))).await;
    assert_eq!(pr.assigned_reviewers, vec![reviewer.clone()]);

    let response = server
        .get(&format!("/users/getReview?user_id={reviewer}"))
        .await
        .unwrap();
    let reviews: UserReviewsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(reviews.user_id, reviewer);
    assert_eq!(reviews.pull_requests.len(), 1);
    assert_eq!(reviews.pull_requests[0].pull_request_id, pr.pull_request_id);

    let response = server.get("/stats/reviewerAssignments").await.unwrap();
    let stats: ReviewerStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let entry = stats
        .reviewer_assignments
        .iter()
        .find(|s| s.user_id == reviewer)
        .expect("reviewer listed in stats");
    assert_eq!(entry.assigned_count, 1);

    let response = server
        .get(&format!("/users/getReview?user_id=ghost-{}", unique_suffix()))
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Deactivation Tests
// ============================================================================

#[tokio::test]
async fn test_deactivate_team() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let team = CreateTeamRequest::unique(3);
    create_team(&server, &team).await;

    let open = create_pr(&server, &CreatePullRequestRequest::unique(&team.member_id(0))).await;
    let merged = create_pr(&server, &CreatePullRequestRequest::unique(&team.member_id(1))).await;
    server
        .post("/pullRequest/merge", &json!({ "pull_request_id": merged.pull_request_id }))
        .await
        .unwrap();

    let response = server
        .post("/team/deactivate", &json!({ "team_name": team.team_name }))
        .await
        .unwrap();
    let summary: DeactivationSummaryResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(summary.team_name, team.team_name);
    assert_eq!(summary.deactivated_reviewers.len(), 2);
    assert_eq!(summary.reassigned_count, 0);
    assert_eq!(summary.unassigned_count, 2);

    let response = server
        .get(&format!("/users/getReview?user_id={}", open.assigned_reviewers[0]))
        .await
        .unwrap();
    let reviews: UserReviewsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    // Only the merged pull request keeps its reviewers
    assert!(reviews
        .pull_requests
        .iter()
        .all(|p| p.pull_request_id != open.pull_request_id));

    let response = server
        .get(&format!("/team/get?team_name={}", team.team_name))
        .await
        .unwrap();
    let fetched: TeamResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(fetched.members.iter().all(|m| !m.is_active));

    let response = server
        .post("/team/deactivate", &json!({ "team_name": format!("missing-{}", unique_suffix()) }))
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
}
