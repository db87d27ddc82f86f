//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub user_id: String,
    pub username: String,
    pub team_name: String,
    pub is_active: bool,
    pub updated_at: DateTime<Utc>,
}
