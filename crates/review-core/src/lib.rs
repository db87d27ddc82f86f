//! # review-core
//!
//! Domain layer containing entities, the reviewer selection policy, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod selection;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    PullRequest, PullRequestStatus, PullRequestSummary, ReviewerStat, Team, TeamMember, User,
};
pub use error::{DomainError, ErrorKind};
pub use selection::{RandomReviewerSelector, ReviewerSelector};
pub use traits::{PullRequestRepository, RepoResult, TeamRepository, UserRepository};
