//! Team database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for teams table
#[derive(Debug, Clone, FromRow)]
pub struct TeamModel {
    pub team_name: String,
    pub created_at: DateTime<Utc>,
}
