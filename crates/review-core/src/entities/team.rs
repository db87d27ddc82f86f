//! Team entity - a named group of users that review each other's pull requests

use serde::{Deserialize, Serialize};

use super::user::User;

/// Team member as recorded on a team (the team name is implied)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

impl TeamMember {
    /// Create a new TeamMember
    pub fn new(user_id: impl Into<String>, username: impl Into<String>, is_active: bool) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            is_active,
        }
    }

    /// Bind this member to a team, producing the full user record
    pub fn to_user(&self, team_name: &str) -> User {
        User::new(&self.user_id, &self.username, team_name, self.is_active)
    }
}

impl From<User> for TeamMember {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
            is_active: user.is_active,
        }
    }
}

/// Team entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub members: Vec<TeamMember>,
}

impl Team {
    /// Create a new Team
    pub fn new(name: impl Into<String>, members: Vec<TeamMember>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    /// Get number of members
    #[inline]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Sort members by user ID
    pub fn sort_members(&mut self) {
        self.members.sort_by(|a, b| a.user_id.cmp(&b.user_id));
    }

    /// Members as full user records bound to this team
    pub fn users(&self) -> Vec<User> {
        self.members.iter().map(|m| m.to_user(&self.name)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_creation() {
        let team = Team::new(
            "backend",
            vec![
                TeamMember::new("u2", "Bob", true),
                TeamMember::new("u1", "Alice", false),
            ],
        );
        assert_eq!(team.name, "backend");
        assert_eq!(team.member_count(), 2);
        assert_eq!(team.members[1].user_id, "u1");
        assert!(!team.members[1].is_active);
    }

    #[test]
    fn test_sort_members() {
        let mut team = Team::new(
            "backend",
            vec![
                TeamMember::new("u3", "Carol", true),
                TeamMember::new("u1", "Alice", true),
                TeamMember::new("u2", "Bob", true),
            ],
        );
        team.sort_members();
        let ids: Vec<_> = team.members.iter().map(|m| m.user_id.as_str()).collect();
        assert_eq!(ids, vec!["u1", "u2", "u3"]);
    }

    #[test]
    fn test_users_are_bound_to_team() {
        let team = Team::new("backend", vec![TeamMember::new("u1", "Alice", false)]);
        let users = team.users();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].team_name, "backend");
        assert!(!users[0].is_active);
    }

    #[test]
    fn test_member_from_user() {
        let member = TeamMember::from(User::new("u9", "Zed", "ops", true));
        assert_eq!(member, TeamMember::new("u9", "Zed", true));
    }
}
