//! HTTP-level tests, one module per endpoint family.

mod auth;
mod helpers;
