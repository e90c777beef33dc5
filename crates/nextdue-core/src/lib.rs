//! Shared configuration, route constants and error types for the nextdue
//! workspace. Nothing in here depends on the recurrence engine or the HTTP
//! stack.

pub mod config;
pub mod constants;
pub mod error;
