//! # Taskdeck API Server
//!
//! HTTP API for the Taskdeck task-management backend:
//! email/password login, account management, and employee listing.
//!
//! ## Startup
//!
//! 1. Initialize tracing
//! 2. Load configuration from the environment
//! 3. Create the database pool (fatal on connection error)
//! 4. Run schema migrations (users, tasks)
//! 5. Seed the admin account if absent
//! 6. Serve until Ctrl+C
//!
//! ## Usage
//!
//! ```bash
//! DATABASE_URL=postgres://... ADMIN_EMAIL=owner@example.com \
//!   ADMIN_PASSWORD=change-me cargo run -p taskdeck-api
//! ```

use taskdeck_api::{
    app::{build_router, AppState},
    config::Config,
};
use taskdeck_shared::db::{
    migrations::run_migrations,
    pool::{close_pool, create_pool, DatabaseConfig as PoolConfig},
    seed::ensure_admin_account,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskdeck_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Taskdeck API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    // Any failure from here to the end of seeding is fatal for startup
    let pool = create_pool(PoolConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await?;

    run_migrations(&pool).await?;

    ensure_admin_account(&pool, &config.admin.email, &config.admin.password).await?;

    let bind_address = config.bind_address();
    let state = AppState::new(pool.clone(), config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    close_pool(pool).await;

    Ok(())
}

/// Resolves when the process receives Ctrl+C
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received, exiting..."),
        Err(e) => tracing::warn!("Failed to listen for shutdown signal: {}", e),
    }
}
