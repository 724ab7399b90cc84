//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use kudos_common::{AppConfig, AppError};
use kudos_core::SnowflakeGenerator;
use kudos_db::{
    create_pool, PgAuditSink, PgNotificationRepository, PgReactionRepository, PgSubmissionLedger,
    PgUserDirectory,
};
use kudos_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and default middleware
pub fn create_app(state: AppState) -> Router {
    let router = health_routes().merge(create_router());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Build the application with rate limiting and configured CORS
///
/// Health routes stay outside the rate limiter so probes never get throttled.
pub fn create_app_with_config(state: AppState, config: &AppConfig) -> Router {
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let router = health_routes().merge(api);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = kudos_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create Snowflake generator
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Create repositories
    let ledger = Arc::new(PgSubmissionLedger::new(pool.clone()));
    let user_directory = Arc::new(PgUserDirectory::new(pool.clone()));
    let notification_repo = Arc::new(PgNotificationRepository::new(pool.clone()));
    let reaction_repo = Arc::new(PgReactionRepository::new(pool.clone()));
    let audit_sink = Arc::new(PgAuditSink::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .ledger(ledger)
        .user_directory(user_directory)
        .notification_repo(notification_repo)
        .reaction_repo(reaction_repo)
        .audit_sink(audit_sink)
        .snowflake_generator(snowflake_generator)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config, pool))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application with the configured middleware stack
    let config = state.config().clone();
    let app = create_app_with_config(state, &config);

    // Run server
    run_server(app, addr).await
}
