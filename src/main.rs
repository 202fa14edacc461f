//! Subscription service binary.
//!
//! Loads configuration, prepares the database and serves the REST API until
//! Ctrl-C or SIGTERM.

use std::sync::Arc;

use tokio::net::TcpListener;

use subscription_service::adapters::auth::{Argon2PasswordHasher, JwtTokenService};
use subscription_service::adapters::http::{build_app, AppState};
use subscription_service::adapters::postgres::{
    self, PostgresPlanReader, PostgresSubscriptionRepository, PostgresUserRepository,
};
use subscription_service::config::AppConfig;
use subscription_service::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    telemetry::init_tracing(&config.server);

    tracing::info!(
        environment = ?config.server.environment,
        database = %config.database.redacted_url(),
        token_ttl_secs = config.auth.token_ttl_secs,
        "Configuration loaded"
    );

    let pool = postgres::connect(&config.database).await?;

    if config.database.run_migrations {
        postgres::run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let tokens = Arc::new(JwtTokenService::from_config(&config.auth));
    let state = AppState {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        plans: Arc::new(PostgresPlanReader::new(pool.clone())),
        subscriptions: Arc::new(PostgresSubscriptionRepository::new(pool.clone())),
        password_hasher: Arc::new(Argon2PasswordHasher::default()),
        token_issuer: tokens.clone(),
        session_validator: tokens,
    };

    let app = build_app(state, &config.server);

    let listener = TcpListener::bind(config.server.socket_addr()?).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
