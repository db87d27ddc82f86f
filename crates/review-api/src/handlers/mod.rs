//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod health;
pub mod pull_requests;
pub mod stats;
pub mod teams;
pub mod users;
