//! Employee listing endpoint
//!
//! # Endpoints
//!
//! - `GET /employees` - List employee accounts

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Json};
use serde::Serialize;
use taskdeck_shared::models::user::{User, UserRole};

use super::users::UserResponse;

/// List employees response
#[derive(Debug, Serialize)]
pub struct ListEmployeesResponse {
    /// Status message
    pub message: String,

    /// Number of employees returned
    pub count: usize,

    /// Employee accounts (sanitized)
    pub employees: Vec<UserResponse>,
}

/// List employees
///
/// Returns every account with the employee role, mapped to the sanitized
/// projection. The admin row is filtered out by the role predicate; an empty
/// table yields an empty list (count 0), not an error.
///
/// # Endpoint
///
/// ```text
/// GET /employees
/// ```
///
/// # Response
///
/// ```json
/// {
///   "message": "Employees retrieved successfully",
///   "count": 1,
///   "employees": [
///     {
///       "id": 3,
///       "role": "Employee",
///       "name": "John Doe",
///       "email": "user@example.com",
///       "createdAt": "2025-06-01 09:30:00",
///       "updatedAt": "2025-06-01 09:30:00"
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// - `500 Internal Server Error`: Server error
pub async fn list_employees(
    State(state): State<AppState>,
) -> ApiResult<Json<ListEmployeesResponse>> {
    let users = User::list_by_role(&state.db, UserRole::Employee).await?;

    let employees: Vec<UserResponse> = users.into_iter().map(Into::into).collect();

    Ok(Json(ListEmployeesResponse {
        message: "Employees retrieved successfully".to_string(),
        count: employees.len(),
        employees,
    }))
}
