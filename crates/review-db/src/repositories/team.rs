//! PostgreSQL implementation of TeamRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use review_core::entities::{Team, TeamMember};
use review_core::error::DomainError;
use review_core::traits::{RepoResult, TeamRepository};

use crate::models::TeamModel;

use super::error::{map_db_error, map_unique_violation};
use super::user::{upsert_user, users_in_team};

/// PostgreSQL implementation of TeamRepository
#[derive(Clone)]
pub struct PgTeamRepository {
    pool: PgPool,
}

impl PgTeamRepository {
    /// Create a new PgTeamRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PgTeamRepository {
    #[instrument(skip(self, team), fields(team_name = %team.name, members = team.member_count()))]
    async fn create_with_members(&self, team: &Team) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let existing = sqlx::query_scalar::<_, String>(
            r#"
            SELECT team_name FROM teams WHERE team_name = $1
            "#,
        )
        .bind(&team.name)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if existing.is_some() {
            return Err(DomainError::TeamAlreadyExists(team.name.clone()));
        }

        // A concurrent insert between the check and here still surfaces as a
        // unique violation
        sqlx::query(
            r#"
            INSERT INTO teams (team_name) VALUES ($1)
            "#,
        )
        .bind(&team.name)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::TeamAlreadyExists(team.name.clone())))?;

        for user in team.users() {
            upsert_user(&mut *tx, &user).await?;
        }

        tx.commit().await.map_err(map_db_error)?;
        debug!("Team inserted");

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Team>> {
        let team = sqlx::query_as::<_, TeamModel>(
            r#"
            SELECT team_name, created_at FROM teams WHERE team_name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        let Some(team) = team else {
            return Ok(None);
        };

        let members = users_in_team(&self.pool, &team.team_name)
            .await?
            .into_iter()
            .map(TeamMember::from)
            .collect();

        Ok(Some(Team::new(team.team_name, members)))
    }
}
