pub mod model;
pub mod search;
pub mod service;
pub mod store;

pub use model::{Task, TaskDraft};
pub use store::{InMemoryTaskStore, TaskStore};
