//! Database models for Taskdeck
//!
//! # Models
//!
//! - `user`: User accounts (admin/employee) and their CRUD operations
//!
//! The `tasks` table is created by the migrations but has no model yet;
//! task endpoints are not part of the current API surface.

pub mod user;
