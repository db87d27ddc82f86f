//! User service
//!
//! Handles user lookups and activity toggling.

use review_core::entities::User;
use review_core::error::DomainError;
use tracing::{info, instrument};

use crate::dto::{SetUserActiveRequest, UserEnvelope, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get user entity by ID
    #[instrument(skip(self))]
    pub async fn get_user_entity(&self, user_id: &str) -> ServiceResult<User> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))?;

        Ok(user)
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: &str) -> ServiceResult<UserResponse> {
        self.get_user_entity(user_id).await.map(UserResponse::from)
    }

    /// Set a user's active flag. Idempotent.
    #[instrument(skip(self, request), fields(user_id = %request.user_id, is_active = request.is_active))]
    pub async fn set_is_active(&self, request: SetUserActiveRequest) -> ServiceResult<UserEnvelope> {
        let user = self
            .ctx
            .user_repo()
            .set_active(&request.user_id, request.is_active)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(request.user_id.clone()))?;

        info!(user_id = %user.id, is_active = user.is_active, "User activity updated");

        Ok(UserEnvelope {
            user: UserResponse::from(user),
        })
    }

    /// List users bound to a team, ordered by user ID
    #[instrument(skip(self))]
    pub async fn list_team_users(&self, team_name: &str) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().find_by_team(team_name).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}
