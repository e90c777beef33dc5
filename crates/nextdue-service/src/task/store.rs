//! Task storage abstraction and the in-process implementation.

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

use nextdue_rule::TaskDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::Task;
use crate::error::ServiceResult;

pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = ServiceResult<T>> + Send + 'a>>;

/// CRUD and search over tasks.
///
/// Listing and search results are ordered by date, then id, and truncated to
/// `limit` entries. Mutating calls report whether the task existed.
pub trait TaskStore: Send + Sync {
    fn insert(&self, task: Task) -> StoreFuture<'_, ()>;

    fn get(&self, id: Uuid) -> StoreFuture<'_, Option<Task>>;

    fn update(&self, task: Task) -> StoreFuture<'_, bool>;

    fn update_date(&self, id: Uuid, date: TaskDate) -> StoreFuture<'_, bool>;

    fn delete(&self, id: Uuid) -> StoreFuture<'_, bool>;

    fn list(&self, limit: usize) -> StoreFuture<'_, Vec<Task>>;

    fn search_by_date(&self, date: TaskDate, limit: usize) -> StoreFuture<'_, Vec<Task>>;

    fn search_by_text<'a>(&'a self, text: &'a str, limit: usize) -> StoreFuture<'a, Vec<Task>>;
}

/// Tasks kept in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    tasks: RwLock<BTreeMap<Uuid, Task>>,
}

impl InMemoryTaskStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    async fn collect_matching(&self, limit: usize, filter: impl Fn(&Task) -> bool) -> Vec<Task> {
        let tasks = self.tasks.read().await;
        let mut matching: Vec<Task> = tasks.values().filter(|task| filter(task)).cloned().collect();
        matching.sort_by(|a, b| (a.date, a.id).cmp(&(b.date, b.id)));
        matching.truncate(limit);
        matching
    }
}

impl TaskStore for InMemoryTaskStore {
    fn insert(&self, task: Task) -> StoreFuture<'_, ()> {
        Box::pin(async move {
            tracing::trace!(task_id = %task.id, "Inserting task");
            self.tasks.write().await.insert(task.id, task);
            Ok(())
        })
    }

    fn get(&self, id: Uuid) -> StoreFuture<'_, Option<Task>> {
        Box::pin(async move { Ok(self.tasks.read().await.get(&id).cloned()) })
    }

    fn update(&self, task: Task) -> StoreFuture<'_, bool> {
        Box::pin(async move {
            let mut tasks = self.tasks.write().await;
            Ok(match tasks.get_mut(&task.id) {
                Some(existing) => {
                    *existing = task;
                    true
                }
                None => false,
            })
        })
    }

    fn update_date(&self, id: Uuid, date: TaskDate) -> StoreFuture<'_, bool> {
        Box::pin(async move {
            let mut tasks = self.tasks.write().await;
            Ok(tasks.get_mut(&id).map(|task| task.date = date).is_some())
        })
    }

    fn delete(&self, id: Uuid) -> StoreFuture<'_, bool> {
        Box::pin(async move {
            tracing::trace!(task_id = %id, "Removing task");
            Ok(self.tasks.write().await.remove(&id).is_some())
        })
    }

    fn list(&self, limit: usize) -> StoreFuture<'_, Vec<Task>> {
        Box::pin(async move { Ok(self.collect_matching(limit, |_| true).await) })
    }

    fn search_by_date(&self, date: TaskDate, limit: usize) -> StoreFuture<'_, Vec<Task>> {
        Box::pin(async move { Ok(self.collect_matching(limit, |task| task.date == date).await) })
    }

    fn search_by_text<'a>(&'a self, text: &'a str, limit: usize) -> StoreFuture<'a, Vec<Task>> {
        Box::pin(async move {
            let needle = text.to_lowercase();
            Ok(self
                .collect_matching(limit, |task| {
                    task.title.to_lowercase().contains(&needle)
                        || task.comment.to_lowercase().contains(&needle)
                })
                .await)
        })
    }
}
