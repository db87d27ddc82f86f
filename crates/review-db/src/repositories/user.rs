//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::{PgExecutor, PgPool};
use tracing::instrument;

use review_core::entities::User;
use review_core::traits::{RepoResult, UserRepository};

use crate::models::UserModel;

use super::error::map_db_error;

/// Insert-or-update a user row by ID, moving it to the given team
pub(crate) async fn upsert_user<'e, E>(executor: E, user: &User) -> RepoResult<()>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        r#"
        INSERT INTO users (user_id, username, team_name, is_active)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id) DO UPDATE
        SET username = EXCLUDED.username,
            team_name = EXCLUDED.team_name,
            is_active = EXCLUDED.is_active,
            updated_at = NOW()
        "#,
    )
    .bind(&user.id)
    .bind(&user.username)
    .bind(&user.team_name)
    .bind(user.is_active)
    .execute(executor)
    .await
    .map_err(map_db_error)?;

    Ok(())
}

/// Users bound to a team, ordered by user ID
pub(crate) async fn users_in_team<'e, E>(executor: E, team_name: &str) -> RepoResult<Vec<UserModel>>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, UserModel>(
        r#"
        SELECT user_id, username, team_name, is_active, updated_at
        FROM users
        WHERE team_name = $1
        ORDER BY user_id
        "#,
    )
    .bind(team_name)
    .fetch_all(executor)
    .await
    .map_err(map_db_error)
}

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn upsert(&self, user: &User) -> RepoResult<()> {
        upsert_user(&self.pool, user).await
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT user_id, username, team_name, is_active, updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn set_active(&self, id: &str, is_active: bool) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r#"
            UPDATE users
            SET is_active = $2, updated_at = NOW()
            WHERE user_id = $1
            RETURNING user_id, username, team_name, is_active, updated_at
            "#,
        )
        .bind(id)
        .bind(is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn set_active_by_team(&self, team_name: &str, is_active: bool) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET is_active = $2, updated_at = NOW()
            WHERE team_name = $1
            "#,
        )
        .bind(team_name)
        .bind(is_active)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn find_by_team(&self, team_name: &str) -> RepoResult<Vec<User>> {
        let results = users_in_team(&self.pool, team_name).await?;
        Ok(results.into_iter().map(User::from).collect())
    }
}
