//! # review-db
//!
//! Storage layer implementing the `review-core` repository traits.
//!
//! ## Overview
//!
//! - Connection pool management and startup migrations (PostgreSQL via SQLx)
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - PostgreSQL repository implementations
//! - An in-memory store implementing the same traits, for tests and local runs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use review_db::pool::{create_pool, run_migrations, DatabaseConfig};
//! use review_db::repositories::PgTeamRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool, "./migrations").await?;
//!     let team_repo = PgTeamRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::InMemoryStore;
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgPullRequestRepository, PgTeamRepository, PgUserRepository};
