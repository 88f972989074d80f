//! Authentication utilities
//!
//! Credential handling for Taskdeck:
//!
//! - `password`: Argon2id password hashing and verification

pub mod password;
