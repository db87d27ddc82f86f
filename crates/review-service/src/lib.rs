//! # review-service
//!
//! Application layer containing the reviewer assignment use cases, the
//! service context, and DTOs.

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::{
    DeactivationOutcome, DeactivationService, PullRequestService, ReassignmentService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, TeamService, UserService,
};
