//! Database migration runner
//!
//! Migrations live in the `migrations/` directory at this crate's root and
//! are embedded into the binary at compile time via `sqlx::migrate!`. They
//! create the `users` and `tasks` tables and are idempotent: already-applied
//! versions are skipped.
//!
//! # Example
//!
//! ```no_run
//! use taskdeck_shared::db::migrations::run_migrations;
//! use taskdeck_shared::db::pool::{create_pool, DatabaseConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool(DatabaseConfig::default()).await?;
//! run_migrations(&pool).await?;
//! # Ok(())
//! # }
//! ```

use sqlx::postgres::PgPool;
use tracing::{info, warn};

/// Runs all pending database migrations
///
/// A failed migration aborts startup; the caller should treat the error as
/// fatal.
///
/// # Errors
///
/// Returns an error if a migration fails to execute or the database
/// connection is lost during migration.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Starting database migrations");

    let migrations = sqlx::migrate!("./migrations");

    match migrations.run(pool).await {
        Ok(()) => {
            info!("All database migrations completed successfully");
            Ok(())
        }
        Err(e) => {
            warn!("Migration failed: {}", e);
            Err(e)
        }
    }
}
