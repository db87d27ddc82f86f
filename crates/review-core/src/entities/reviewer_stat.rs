//! Reviewer statistics - derived assignment counts

use serde::{Deserialize, Serialize};

/// Number of pull requests a user is currently assigned to review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewerStat {
    pub user_id: String,
    pub assigned_count: i64,
}

impl ReviewerStat {
    pub fn new(user_id: impl Into<String>, assigned_count: i64) -> Self {
        Self {
            user_id: user_id.into(),
            assigned_count,
        }
    }
}
