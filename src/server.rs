//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection, migrations, dependency wiring, and the
//! Axum server lifecycle.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::persistence::{PgLinkRepository, PgSequenceRepository};
use crate::infrastructure::resolver::DnsHostResolver;
use crate::routes::{Throttle, app_router};
use crate::state::AppState;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Schema migrations (including the counter row seeded at 0)
/// - Repository and service wiring
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if the database connection, the migration run, or the
/// server bind fails. All three are fatal: the process has no degraded
/// mode without its store.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let pool = Arc::new(pool);
    let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
    let sequence_repository = Arc::new(PgSequenceRepository::new(pool));
    let resolver = Arc::new(DnsHostResolver::new());

    let link_service = Arc::new(LinkService::new(
        link_repository,
        sequence_repository,
        resolver,
    ));

    let state = AppState::new(link_service);

    let throttle = Throttle {
        per_second: config.rate_limit_per_second,
        burst: config.rate_limit_burst,
    };
    let app = app_router(state, Some(throttle));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl-C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
