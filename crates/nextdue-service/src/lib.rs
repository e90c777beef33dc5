//! Task lifecycle around the next-date engine: the task model, the store
//! abstraction and the operations the HTTP layer calls.

pub mod auth;
pub mod clock;
pub mod error;
pub mod task;
