//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in review-core.

mod error;
mod pull_request;
mod team;
mod user;

pub use pull_request::PgPullRequestRepository;
pub use team::PgTeamRepository;
pub use user::PgUserRepository;
