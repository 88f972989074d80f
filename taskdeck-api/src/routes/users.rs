//! Account management endpoints
//!
//! # Endpoints
//!
//! - `POST /users` - Create account
//! - `DELETE /users/:id` - Delete account

use crate::{
    app::AppState,
    error::{ApiError, ApiResult, ValidationErrorDetail},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use taskdeck_shared::{
    auth::password,
    models::user::{CreateUser, DeletedUser, User, UserProfile, UserRole},
};
use validator::Validate;

/// Create account request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAccountRequest {
    /// Display name
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Password (min 6 characters)
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Sanitized user projection
///
/// The response shape for user rows: everything except the password hash,
/// with timestamps formatted as `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User ID
    pub id: i64,

    /// Account role ("Admin" or "Employee")
    pub role: UserRole,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Creation timestamp, formatted
    pub created_at: String,

    /// Last update timestamp, formatted
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            role: user.role,
            name: user.name,
            email: user.email,
            created_at: user.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            updated_at: user.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

impl From<UserProfile> for UserResponse {
    fn from(user: UserProfile) -> Self {
        Self {
            id: user.id,
            role: user.role,
            name: user.name,
            email: user.email,
            created_at: user.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            updated_at: user.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Create account response
#[derive(Debug, Serialize)]
pub struct CreateAccountResponse {
    /// Status message
    pub message: String,

    /// The created account (sanitized)
    pub user: UserResponse,
}

/// Delete account response
#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    /// Status message
    pub message: String,

    /// Minimal echo of the deleted identity
    #[serde(rename = "deletedUser")]
    pub deleted_user: DeletedUser,
}

/// Create account
///
/// Creates a new employee account. The role is never caller-controlled:
/// every account created here is an employee.
///
/// # Endpoint
///
/// ```text
/// POST /users
/// Content-Type: application/json
///
/// {
///   "name": "John Doe",
///   "email": "user@example.com",
///   "password": "secret1"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed, or email already exists
/// - `500 Internal Server Error`: Server error
pub async fn create_account(
    State(state): State<AppState>,
    Json(req): Json<CreateAccountRequest>,
) -> ApiResult<(StatusCode, Json<CreateAccountResponse>)> {
    // Validate request before touching the database
    req.validate().map_err(|e| {
        let errors: Vec<ValidationErrorDetail> = e
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| ValidationErrorDetail {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Validation failed".to_string()),
                })
            })
            .collect();
        ApiError::ValidationError(errors)
    })?;

    // Hash password
    let password_hash = password::hash_password(&req.password)?;

    // Single atomic insert; a duplicate email surfaces as a unique-constraint
    // violation and maps to 400 "Email already exists"
    let user = User::create(
        &state.db,
        CreateUser {
            role: UserRole::Employee,
            name: req.name,
            email: req.email,
            password_hash,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateAccountResponse {
            message: "User created successfully".to_string(),
            user: user.into(),
        }),
    ))
}

/// Delete account
///
/// # Endpoint
///
/// ```text
/// DELETE /users/:id
/// ```
///
/// # Response
///
/// ```json
/// {
///   "message": "User deleted successfully",
///   "deletedUser": { "id": 3, "name": "John Doe", "email": "user@example.com" }
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Non-numeric id
/// - `404 Not Found`: No user with that id
/// - `500 Internal Server Error`: Server error
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteUserResponse>> {
    let id: i64 = id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid user id".to_string()))?;

    // Delete and existence check are one statement
    let deleted = User::delete(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(DeleteUserResponse {
        message: "User deleted successfully".to_string(),
        deleted_user: deleted,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_user() -> User {
        User {
            id: 7,
            role: UserRole::Employee,
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            created_at: chrono::Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap(),
            updated_at: chrono::Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 5).unwrap(),
        }
    }

    #[test]
    fn test_user_response_formats_timestamps() {
        let response = UserResponse::from(sample_user());
        assert_eq!(response.created_at, "2025-06-01 09:30:00");
        assert_eq!(response.updated_at, "2025-06-02 10:00:05");
    }

    #[test]
    fn test_user_response_omits_password() {
        let json = serde_json::to_value(UserResponse::from(sample_user())).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["role"], "Employee");
        assert_eq!(json["createdAt"], "2025-06-01 09:30:00");
        assert_eq!(json["updatedAt"], "2025-06-02 10:00:05");
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
        assert!(json.get("passwordHash").is_none());
    }

    #[test]
    fn test_create_account_request_validation() {
        let valid = CreateAccountRequest {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(valid.validate().is_ok());

        let short_password = CreateAccountRequest {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password: "12345".to_string(),
        };
        assert!(short_password.validate().is_err());

        let bad_email = CreateAccountRequest {
            name: "A".to_string(),
            email: "not-an-email".to_string(),
            password: "secret1".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let empty_name = CreateAccountRequest {
            name: "".to_string(),
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(empty_name.validate().is_err());
    }
}
