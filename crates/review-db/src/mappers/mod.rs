//! Model to entity mappers
//!
//! Conversions from database rows (models) to `review-core` entities.
//! Status columns are stored as text, so pull request conversions are fallible.

mod pull_request;
mod user;

pub use pull_request::pull_request_from_parts;
