//! API route handlers
//!
//! Organized by resource:
//!
//! - `health`: Health check endpoint
//! - `auth`: Login endpoint
//! - `users`: Account creation and deletion
//! - `employees`: Employee listing

pub mod auth;
pub mod employees;
pub mod health;
pub mod users;
