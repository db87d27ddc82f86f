//! Axum extractors for request handling
//!
//! Extract request bodies and query strings and run `validator` rules on them.

mod validated;

pub use validated::{ValidatedJson, ValidatedQuery};
