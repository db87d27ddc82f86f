//! Domain entities - core business objects

mod pull_request;
mod reviewer_stat;
mod team;
mod user;

pub use pull_request::{PullRequest, PullRequestStatus, PullRequestSummary};
pub use reviewer_stat::ReviewerStat;
pub use team::{Team, TeamMember};
pub use user::User;
