//! User entity - a team member who may author or review pull requests

use serde::{Deserialize, Serialize};

/// User entity
///
/// A user belongs to exactly one team. Inactive users keep their existing
/// assignments but are never picked as new reviewers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub team_name: String,
    pub is_active: bool,
}

impl User {
    /// Create a new User
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        team_name: impl Into<String>,
        is_active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            team_name: team_name.into(),
            is_active,
        }
    }

    /// Check if the user belongs to the given team
    #[inline]
    pub fn is_in_team(&self, team_name: &str) -> bool {
        self.team_name == team_name
    }

    /// Check if the user may be picked as a reviewer
    #[inline]
    pub fn can_review(&self) -> bool {
        self.is_active
    }

    /// Update the active flag
    pub fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("u1", "Alice", "backend", true);
        assert_eq!(user.id, "u1");
        assert_eq!(user.username, "Alice");
        assert!(user.is_in_team("backend"));
        assert!(!user.is_in_team("frontend"));
        assert!(user.can_review());
    }

    #[test]
    fn test_set_active() {
        let mut user = User::new("u1", "Alice", "backend", true);
        user.set_active(false);
        assert!(!user.can_review());

        // Setting the same value again is a no-op
        user.set_active(false);
        assert!(!user.is_active);
    }
}
