//! Server setup and initialization
//!
//! Provides the application builder, dependency wiring and the server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use status_common::{AppConfig, AppError, JwtService};
use status_db::{create_pool, run_migrations, PgUserStatusRepository};
use status_service::{ExpiredStatusSweeper, ServiceContextBuilder};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_middleware_with_config, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the application with the base middleware stack
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    apply_middleware(router).with_state(state)
}

/// Build the application with rate limiting and CORS from the state's configuration
///
/// Health routes are not rate limited.
pub fn create_app_with_config(state: AppState) -> Router {
    let config = state.config();
    let router = apply_rate_limit(create_router(), &config.rate_limit).merge(health_routes());
    apply_middleware_with_config(router, &config.cors, config.app.env.is_production())
        .with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = status_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool).await?;
    }

    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.token_expiry));
    let status_repo = Arc::new(PgUserStatusRepository::new(pool));

    let service_context = ServiceContextBuilder::new()
        .status_repo(status_repo)
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Resolve when the process receives ctrl-c
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the HTTP server until ctrl-c
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
///
/// Starts the expired message sweeper alongside the HTTP server when enabled
/// and stops it once the server has shut down.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;
    let sweeper_config = config.sweeper.clone();

    let state = create_app_state(config).await?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper = sweeper_config.enabled.then(|| {
        let sweeper =
            ExpiredStatusSweeper::from_context(state.service_context(), sweeper_config.interval());
        tokio::spawn(async move { sweeper.run(shutdown_rx).await })
    });
    if sweeper.is_none() {
        info!("Status sweeper disabled");
    }

    let app = create_app_with_config(state);
    let result = run_server(app, addr).await;

    let _ = shutdown_tx.send(true);
    if let Some(handle) = sweeper {
        if let Err(e) = handle.await {
            warn!(error = %e, "Status sweeper task failed");
        }
    }

    result
}
