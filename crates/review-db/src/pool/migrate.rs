//! Schema migrations applied at startup

use std::path::Path;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::info;

/// Migrations directory used when none is configured
pub const DEFAULT_MIGRATIONS_PATH: &str = "./migrations";

/// Apply every pending migration found in `path`
pub async fn run_migrations(pool: &PgPool, path: impl AsRef<Path>) -> Result<(), MigrateError> {
    let path = path.as_ref();
    let migrator = Migrator::new(path).await?;
    info!(path = %path.display(), count = migrator.iter().count(), "Applying database migrations");
    migrator.run(pool).await
}
