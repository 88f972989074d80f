//! Startup seed data
//!
//! Creates the default admin account on first boot. The insert is a single
//! `ON CONFLICT DO NOTHING` statement keyed on the email's unique constraint,
//! so concurrent instances racing at startup still produce exactly one row.

use crate::auth::password::{self, PasswordError};
use sqlx::PgPool;
use tracing::info;

/// Error type for seed operations
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Failed to hash the admin password
    #[error("Failed to hash admin password: {0}")]
    Password(#[from] PasswordError),

    /// Database error during seeding
    #[error("Database error during seeding: {0}")]
    Database(#[from] sqlx::Error),
}

/// Ensures the admin account exists
///
/// Inserts an `admin` row with the given credentials if no user with that
/// email exists yet; otherwise leaves the existing row untouched (the
/// password is NOT rotated on restart).
///
/// # Errors
///
/// Returns an error if password hashing fails or the insert cannot be
/// executed.
pub async fn ensure_admin_account(
    pool: &PgPool,
    email: &str,
    admin_password: &str,
) -> Result<(), SeedError> {
    let password_hash = password::hash_password(admin_password)?;

    let result = sqlx::query(
        r#"
        INSERT INTO users (role, name, email, password_hash)
        VALUES ('admin', 'Owner', $1, $2)
        ON CONFLICT (email) DO NOTHING
        "#,
    )
    .bind(email)
    .bind(&password_hash)
    .execute(pool)
    .await?;

    if result.rows_affected() > 0 {
        info!(email, "Admin account created");
    } else {
        info!(email, "Admin account already exists");
    }

    Ok(())
}
