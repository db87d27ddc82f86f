//! PostgreSQL implementation of PullRequestRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};
use tracing::{debug, instrument};

use review_core::entities::{PullRequest, PullRequestStatus, PullRequestSummary, ReviewerStat};
use review_core::error::DomainError;
use review_core::traits::{PullRequestRepository, RepoResult};

use crate::mappers::pull_request_from_parts;
use crate::models::{PullRequestModel, PullRequestSummaryModel, ReviewerStatModel};

use super::error::{map_db_error, map_unique_violation, pull_request_not_found};

async fn load_reviewers<'e, E>(executor: E, pr_id: &str) -> RepoResult<Vec<String>>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, String>(
        r#"
        SELECT user_id
        FROM pull_request_reviewers
        WHERE pull_request_id = $1
        ORDER BY user_id
        "#,
    )
    .bind(pr_id)
    .fetch_all(executor)
    .await
    .map_err(map_db_error)
}

/// PostgreSQL implementation of PullRequestRepository
#[derive(Clone)]
pub struct PgPullRequestRepository {
    pool: PgPool,
}

impl PgPullRequestRepository {
    /// Create a new PgPullRequestRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PullRequestRepository for PgPullRequestRepository {
    #[instrument(skip(self, pr), fields(pr_id = %pr.id))]
    async fn create_with_reviewers(&self, pr: &PullRequest) -> RepoResult<PullRequest> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let existing = sqlx::query_scalar::<_, String>(
            r#"
            SELECT pull_request_id FROM pull_requests WHERE pull_request_id = $1
            "#,
        )
        .bind(&pr.id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if existing.is_some() {
            return Err(DomainError::PullRequestAlreadyExists(pr.id.clone()));
        }

        let created_at = sqlx::query_scalar::<_, DateTime<Utc>>(
            r#"
            INSERT INTO pull_requests (pull_request_id, pull_request_name, author_id, status)
            VALUES ($1, $2, $3, $4)
            RETURNING created_at
            "#,
        )
        .bind(&pr.id)
        .bind(&pr.name)
        .bind(&pr.author_id)
        .bind(PullRequestStatus::Open.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::PullRequestAlreadyExists(pr.id.clone()))
        })?;

        sqlx::query(
            r#"
            INSERT INTO pull_request_reviewers (pull_request_id, user_id)
            SELECT $1, UNNEST($2::text[])
            "#,
        )
        .bind(&pr.id)
        .bind(&pr.assigned_reviewers)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        let mut stored = PullRequest {
            status: PullRequestStatus::Open,
            created_at,
            merged_at: None,
            ..pr.clone()
        };
        stored.sort_reviewers();
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<PullRequest>> {
        let model = sqlx::query_as::<_, PullRequestModel>(
            r#"
            SELECT pull_request_id, pull_request_name, author_id, status, created_at, merged_at
            FROM pull_requests
            WHERE pull_request_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        let Some(model) = model else {
            return Ok(None);
        };

        let reviewers = load_reviewers(&self.pool, id).await?;
        pull_request_from_parts(model, reviewers).map(Some)
    }

    #[instrument(skip(self))]
    async fn merge(&self, id: &str) -> RepoResult<Option<PullRequest>> {
        let result = sqlx::query(
            r#"
            UPDATE pull_requests
            SET status = 'MERGED', merged_at = COALESCE(merged_at, NOW())
            WHERE pull_request_id = $1 AND status = 'OPEN'
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        debug!(changed = result.rows_affected() > 0, "Merge applied");

        self.find_by_id(id).await
    }

    #[instrument(skip(self))]
    async fn find_by_reviewer(&self, user_id: &str) -> RepoResult<Vec<PullRequestSummary>> {
        let results = sqlx::query_as::<_, PullRequestSummaryModel>(
            r#"
            SELECT pr.pull_request_id, pr.pull_request_name, pr.author_id, pr.status
            FROM pull_requests pr
            INNER JOIN pull_request_reviewers r ON pr.pull_request_id = r.pull_request_id
            WHERE r.user_id = $1
            ORDER BY pr.pull_request_id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(PullRequestSummary::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn replace_reviewer(
        &self,
        pr_id: &str,
        old_reviewer: &str,
        new_reviewer: &str,
    ) -> RepoResult<PullRequest> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let model = sqlx::query_as::<_, PullRequestModel>(
            r#"
            SELECT pull_request_id, pull_request_name, author_id, status, created_at, merged_at
            FROM pull_requests
            WHERE pull_request_id = $1
            FOR UPDATE
            "#,
        )
        .bind(pr_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| pull_request_not_found(pr_id))?;

        let reviewers = load_reviewers(&mut *tx, pr_id).await?;
        let mut pr = pull_request_from_parts(model, reviewers)?;

        // Re-validate against the locked row; dropping `tx` rolls back
        pr.replace_reviewer(old_reviewer, new_reviewer)?;

        sqlx::query(
            r#"
            DELETE FROM pull_request_reviewers
            WHERE pull_request_id = $1 AND user_id = $2
            "#,
        )
        .bind(pr_id)
        .bind(old_reviewer)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO pull_request_reviewers (pull_request_id, user_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(pr_id)
        .bind(new_reviewer)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        pr.sort_reviewers();
        Ok(pr)
    }

    #[instrument(skip(self))]
    async fn apply_reviewer_changes(
        &self,
        pr_id: &str,
        removed: &[String],
        added: &[String],
    ) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let status = sqlx::query_scalar::<_, String>(
            r#"
            SELECT status FROM pull_requests WHERE pull_request_id = $1 FOR UPDATE
            "#,
        )
        .bind(pr_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| pull_request_not_found(pr_id))?;

        if status.parse::<PullRequestStatus>()? != PullRequestStatus::Open {
            return Ok(false);
        }

        sqlx::query(
            r#"
            DELETE FROM pull_request_reviewers
            WHERE pull_request_id = $1 AND user_id = ANY($2)
            "#,
        )
        .bind(pr_id)
        .bind(removed)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO pull_request_reviewers (pull_request_id, user_id)
            SELECT $1, UNNEST($2::text[])
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(pr_id)
        .bind(added)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(true)
    }

    #[instrument(skip(self))]
    async fn find_open_ids_with_team_reviewers(&self, team_name: &str) -> RepoResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT pr.pull_request_id
            FROM pull_requests pr
            INNER JOIN pull_request_reviewers r ON pr.pull_request_id = r.pull_request_id
            INNER JOIN users u ON u.user_id = r.user_id
            WHERE u.team_name = $1 AND pr.status = 'OPEN'
            ORDER BY pr.pull_request_id
            "#,
        )
        .bind(team_name)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_assignments_by_reviewer(&self) -> RepoResult<Vec<ReviewerStat>> {
        let results = sqlx::query_as::<_, ReviewerStatModel>(
            r#"
            SELECT user_id, COUNT(*) AS assigned_count
            FROM pull_request_reviewers
            GROUP BY user_id
            ORDER BY user_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReviewerStat::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgPullRequestRepository>();
    }
}
