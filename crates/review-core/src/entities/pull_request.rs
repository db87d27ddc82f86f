//! Pull request entity - a unit of code review with assigned reviewers

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Pull request lifecycle status
///
/// The only transition is `Open -> Merged`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PullRequestStatus {
    Open,
    Merged,
}

impl PullRequestStatus {
    /// Storage / wire representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Merged => "MERGED",
        }
    }
}

impl fmt::Display for PullRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PullRequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN" => Ok(Self::Open),
            "MERGED" => Ok(Self::Merged),
            other => Err(DomainError::InternalError(format!(
                "unknown pull request status: {other}"
            ))),
        }
    }
}

/// Pull request entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub id: String,
    pub name: String,
    pub author_id: String,
    pub status: PullRequestStatus,
    /// Current reviewers. Never contains `author_id`.
    pub assigned_reviewers: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub merged_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    /// Create a new open PullRequest
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        author_id: impl Into<String>,
        assigned_reviewers: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            author_id: author_id.into(),
            status: PullRequestStatus::Open,
            assigned_reviewers,
            created_at: Utc::now(),
            merged_at: None,
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.status == PullRequestStatus::Open
    }

    #[inline]
    pub fn is_merged(&self) -> bool {
        self.status == PullRequestStatus::Merged
    }

    /// Check if a user is currently assigned as reviewer
    #[inline]
    pub fn has_reviewer(&self, user_id: &str) -> bool {
        self.assigned_reviewers.iter().any(|r| r == user_id)
    }

    /// Get number of assigned reviewers
    #[inline]
    pub fn reviewer_count(&self) -> usize {
        self.assigned_reviewers.len()
    }

    /// Mark as merged. Returns `false` if the PR was already merged, in which
    /// case nothing changes.
    pub fn merge(&mut self, at: DateTime<Utc>) -> bool {
        if self.is_merged() {
            return false;
        }
        self.status = PullRequestStatus::Merged;
        self.merged_at.get_or_insert(at);
        true
    }

    /// Add a reviewer (no-op if already assigned)
    pub fn add_reviewer(&mut self, user_id: &str) {
        if !self.has_reviewer(user_id) {
            self.assigned_reviewers.push(user_id.to_string());
        }
    }

    /// Remove a reviewer. Returns `true` if the reviewer was assigned.
    pub fn remove_reviewer(&mut self, user_id: &str) -> bool {
        match self.assigned_reviewers.iter().position(|r| r == user_id) {
            Some(pos) => {
                self.assigned_reviewers.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Swap `old` for `new` in place, keeping the slot position.
    ///
    /// Fails if the PR is merged or `old` is not assigned. A `new` reviewer that is
    /// already on the PR counts as having no candidate.
    pub fn replace_reviewer(&mut self, old: &str, new: &str) -> Result<(), DomainError> {
        if self.is_merged() {
            return Err(DomainError::PullRequestMerged(self.id.clone()));
        }
        let Some(pos) = self.assigned_reviewers.iter().position(|r| r == old) else {
            return Err(DomainError::ReviewerNotAssigned {
                pull_request_id: self.id.clone(),
                user_id: old.to_string(),
            });
        };
        if self.has_reviewer(new) {
            return Err(DomainError::NoCandidate {
                pull_request_id: self.id.clone(),
            });
        }
        self.assigned_reviewers[pos] = new.to_string();
        Ok(())
    }

    /// Sort reviewers by user ID
    pub fn sort_reviewers(&mut self) {
        self.assigned_reviewers.sort();
    }

    /// Short form used when listing PRs by reviewer
    pub fn summary(&self) -> PullRequestSummary {
        PullRequestSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            author_id: self.author_id.clone(),
            status: self.status,
        }
    }
}

/// Pull request without reviewers or timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSummary {
    pub id: String,
    pub name: String,
    pub author_id: String,
    pub status: PullRequestStatus,
}
