//! Shared-password authentication.
//!
//! A single password, when configured, guards the task API. Signing in with
//! it yields a token that clients send back in a cookie.

pub mod token;

pub use token::{issue_token, token_for, verify_token};
