//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of one
//! request and orchestrates repository calls and reviewer selection.

pub mod context;
pub mod deactivation;
pub mod error;
pub mod pull_request;
pub mod reassignment;
pub mod team;
pub mod user;

#[cfg(test)]
mod test_support;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use deactivation::{DeactivationOutcome, DeactivationService};
pub use error::{ServiceError, ServiceResult};
pub use pull_request::PullRequestService;
pub use reassignment::ReassignmentService;
pub use team::TeamService;
pub use user::UserService;

/// Number of reviewers assigned when a pull request is created
pub const INITIAL_REVIEWERS: usize = 2;
