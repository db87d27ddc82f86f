//! Database models - SQLx-compatible structs for PostgreSQL tables

mod pull_request;
mod team;
mod user;

pub use pull_request::{PullRequestModel, PullRequestSummaryModel, ReviewerStatModel};
pub use team::TeamModel;
pub use user::UserModel;
