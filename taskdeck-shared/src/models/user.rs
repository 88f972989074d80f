//! User model and database operations
//!
//! # Schema
//!
//! ```sql
//! CREATE TYPE user_role AS ENUM ('admin', 'employee');
//!
//! CREATE TABLE users (
//!     id BIGSERIAL PRIMARY KEY,
//!     role user_role NOT NULL DEFAULT 'employee',
//!     name VARCHAR(100) NOT NULL,
//!     email VARCHAR(255) NOT NULL UNIQUE,
//!     password_hash VARCHAR(255) NOT NULL,
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
//!     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! );
//! ```
//!
//! Email uniqueness is enforced by the database constraint, so inserts are a
//! single atomic statement; concurrent requests for the same email cannot
//! both succeed.
//!
//! # Example
//!
//! ```no_run
//! use taskdeck_shared::models::user::{CreateUser, User, UserRole};
//! use sqlx::PgPool;
//!
//! # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
//! let user = User::create(
//!     &pool,
//!     CreateUser {
//!         role: UserRole::Employee,
//!         name: "John Doe".to_string(),
//!         email: "user@example.com".to_string(),
//!         password_hash: "$argon2id$...".to_string(),
//!     },
//! )
//! .await?;
//!
//! let found = User::find_by_email(&pool, "user@example.com").await?;
//! assert!(found.is_some());
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// User role
///
/// Stored as the `user_role` Postgres enum (`admin` / `employee`) and
/// serialized as `"Admin"` / `"Employee"` in API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "PascalCase")]
pub enum UserRole {
    /// Privileged account, created only by the startup seed
    Admin,

    /// Regular account, the role assigned to every self-registered user
    Employee,
}

/// User model representing an account row
///
/// Passwords are stored as Argon2id hashes, never in plaintext. The hash
/// must not leave the server; response shaping strips it.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,

    /// Account role
    pub role: UserRole,

    /// Display name
    pub name: String,

    /// Email address, unique across all users
    pub email: String,

    /// Argon2id password hash
    pub password_hash: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Account role
    pub role: UserRole,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Argon2id password hash (NOT the plaintext password)
    pub password_hash: String,
}

/// Row projection without the password hash, used for listings
///
/// Selecting the fixed column set keeps the hash out of listing queries
/// entirely instead of relying on response shaping to strip it.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserProfile {
    /// Unique user ID
    pub id: i64,

    /// Account role
    pub role: UserRole,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last updated
    pub updated_at: DateTime<Utc>,
}

/// Minimal identity of a deleted user, echoed back to the caller
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DeletedUser {
    /// ID the row had before deletion
    pub id: i64,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,
}

impl User {
    /// Creates a new user
    ///
    /// The insert is a single statement; a duplicate email surfaces as a
    /// unique-constraint violation from the database rather than being
    /// pre-checked with a racy read.
    ///
    /// # Errors
    ///
    /// Returns an error if the email already exists or the database is
    /// unreachable.
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (role, name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, role, name, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(data.role)
        .bind(data.name)
        .bind(data.email)
        .bind(data.password_hash)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by email address
    ///
    /// Returns the user if found, `None` otherwise.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, role, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Deletes a user by ID, returning the deleted identity
    ///
    /// Delete and existence check are one statement: `None` means no row had
    /// that ID, and no mutation happened.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<Option<DeletedUser>, sqlx::Error> {
        let deleted = sqlx::query_as::<_, DeletedUser>(
            r#"
            DELETE FROM users
            WHERE id = $1
            RETURNING id, name, email
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(deleted)
    }

    /// Lists all users with the given role, oldest first
    ///
    /// Projects the fixed column set (no password hash). Returns an empty
    /// vector when no rows match.
    pub async fn list_by_role(
        pool: &PgPool,
        role: UserRole,
    ) -> Result<Vec<UserProfile>, sqlx::Error> {
        let users = sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT id, role, name, email, created_at, updated_at
            FROM users
            WHERE role = $1
            ORDER BY id
            "#,
        )
        .bind(role)
        .fetch_all(pool)
        .await?;

        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        // API responses carry PascalCase role names
        assert_eq!(
            serde_json::to_string(&UserRole::Admin).unwrap(),
            "\"Admin\""
        );
        assert_eq!(
            serde_json::to_string(&UserRole::Employee).unwrap(),
            "\"Employee\""
        );
    }

    #[test]
    fn test_create_user_struct() {
        let create_user = CreateUser {
            role: UserRole::Employee,
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hash".to_string(),
        };

        assert_eq!(create_user.role, UserRole::Employee);
        assert_eq!(create_user.email, "test@example.com");
    }

    // Integration tests for the queries require a running database and live
    // with the API's end-to-end tests.
}
