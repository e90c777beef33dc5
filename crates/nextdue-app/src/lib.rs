//! HTTP front end for the nextdue task scheduler.

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod store_handler;
