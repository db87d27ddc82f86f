//! Server setup and initialization
//!
//! Provides the application builder, startup wiring, and the server runner.

use std::path::Path;

use axum::Router;
use review_common::{AppConfig, AppError};
use review_db::pool::{create_pool, run_migrations, DatabaseConfig, DEFAULT_MIGRATIONS_PATH};
use review_db::PgPool;
use review_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    let health = apply_middleware(health_routes());

    Ok(api.merge(health).with_state(state))
}

/// Connect to PostgreSQL, apply migrations, and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    apply_migrations(&pool, config.database.migrations_path.as_deref()).await?;

    let service_context = ServiceContext::postgres(pool.clone());
    Ok(AppState::new(service_context, config, Some(pool)))
}

/// Run migrations from the configured directory, or the bundled one if it exists
async fn apply_migrations(pool: &PgPool, configured: Option<&str>) -> Result<(), AppError> {
    let path = match configured {
        Some(path) => path,
        None if Path::new(DEFAULT_MIGRATIONS_PATH).is_dir() => DEFAULT_MIGRATIONS_PATH,
        None => {
            warn!("No migrations directory found, skipping migrations");
            return Ok(());
        }
    };

    info!(path = %path, "Running database migrations");
    run_migrations(pool, path)
        .await
        .map_err(|e| AppError::Database(format!("migrations failed: {e}")))
}

/// Run the HTTP server until SIGINT or SIGTERM
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Failed to read listener address: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    run_server(app, listener).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
