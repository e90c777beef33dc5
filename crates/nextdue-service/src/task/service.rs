//! Task lifecycle operations.

use nextdue_rule::{Rule, TaskDate};
use uuid::Uuid;

use super::model::{Task, TaskDraft};
use super::search::SearchQuery;
use super::store::TaskStore;
use crate::clock::Clock;
use crate::error::{ServiceError, ServiceResult};

/// Outcome of marking a task as done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The task did not repeat and was removed.
    Deleted,
    /// The task was moved to its next occurrence.
    Rescheduled(TaskDate),
}

/// Fields of a draft after validation, shared by create and update.
struct ValidatedDraft {
    date: TaskDate,
    title: String,
    comment: String,
    rule: Rule,
}

/// ## Summary
/// Parses a task identifier supplied by a client.
///
/// ## Errors
/// Returns [`ServiceError::ValidationError`] if `id` is empty or not a UUID.
pub fn parse_task_id(id: &str) -> ServiceResult<Uuid> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ServiceError::ValidationError("task id is required".to_string()));
    }
    Uuid::parse_str(id)
        .map_err(|e| ServiceError::ValidationError(format!("invalid task id {id:?}: {e}")))
}

fn validate_draft(draft: TaskDraft, today: TaskDate) -> ServiceResult<ValidatedDraft> {
    let title = draft.title.trim().to_string();
    if title.is_empty() {
        return Err(ServiceError::ValidationError("title is required".to_string()));
    }

    let date = if draft.date.trim().is_empty() {
        today
    } else {
        draft.date.trim().parse()?
    };
    let rule: Rule = draft.repeat.parse()?;

    Ok(ValidatedDraft {
        date,
        title,
        comment: draft.comment,
        rule,
    })
}

/// ## Summary
/// Creates a task from a client draft and returns its identifier.
///
/// A missing date means today. A date in the past is replaced by today when
/// the task does not repeat, and by the rule's next occurrence otherwise.
///
/// ## Errors
/// Returns [`ServiceError::ValidationError`] for a missing title, a
/// [`ServiceError::RuleError`] for a malformed date or rule, and any store error.
#[tracing::instrument(skip(store, clock, draft), fields(title = %draft.title))]
pub async fn create_task(
    store: &dyn TaskStore,
    clock: &dyn Clock,
    draft: TaskDraft,
) -> ServiceResult<Uuid> {
    let today_naive = clock.today();
    let today = TaskDate::new(today_naive);
    let draft = validate_draft(draft, today)?;

    let date = if draft.date >= today {
        draft.date
    } else if draft.rule.is_none() {
        today
    } else {
        draft.rule.next_after(today_naive, draft.date)?
    };

    let task = Task {
        id: Uuid::now_v7(),
        date,
        title: draft.title,
        comment: draft.comment,
        repeat: draft.rule.to_string(),
    };
    let id = task.id;

    store.insert(task).await?;
    tracing::info!(task_id = %id, %date, "Task created");

    Ok(id)
}

/// ## Summary
/// Replaces every field of an existing task.
///
/// ## Errors
/// - [`ServiceError::ValidationError`] for a missing id or title, or a date in the past
/// - [`ServiceError::RuleError`] for a malformed date or rule
/// - [`ServiceError::NotFound`] if no task has the id
#[tracing::instrument(skip(store, clock, draft), fields(task_id = %draft.id))]
pub async fn update_task(
    store: &dyn TaskStore,
    clock: &dyn Clock,
    draft: TaskDraft,
) -> ServiceResult<()> {
    let id = parse_task_id(&draft.id)?;
    let today = TaskDate::new(clock.today());
    let draft = validate_draft(draft, today)?;

    if draft.date < today {
        return Err(ServiceError::ValidationError(format!(
            "date {} is in the past",
            draft.date
        )));
    }

    let task = Task {
        id,
        date: draft.date,
        title: draft.title,
        comment: draft.comment,
        repeat: draft.rule.to_string(),
    };

    if !store.update(task).await? {
        return Err(ServiceError::NotFound(format!("task {id}")));
    }

    tracing::debug!("Task updated");
    Ok(())
}

/// ## Errors
/// Returns [`ServiceError::NotFound`] if no task has the id.
pub async fn get_task(store: &dyn TaskStore, id: Uuid) -> ServiceResult<Task> {
    store
        .get(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("task {id}")))
}

/// ## Errors
/// Returns [`ServiceError::NotFound`] if no task has the id.
#[tracing::instrument(skip(store))]
pub async fn delete_task(store: &dyn TaskStore, id: Uuid) -> ServiceResult<()> {
    if store.delete(id).await? {
        tracing::debug!("Task deleted");
        Ok(())
    } else {
        Err(ServiceError::NotFound(format!("task {id}")))
    }
}

/// ## Summary
/// Marks a task as done.
///
/// Non-repeating tasks are deleted. Repeating tasks move to the first
/// occurrence of their rule after today, counted from their current date.
///
/// ## Errors
/// Returns [`ServiceError::NotFound`] if no task has the id, or a
/// [`ServiceError::RuleError`] if the stored rule cannot be evaluated.
#[tracing::instrument(skip(store, clock))]
pub async fn complete_task(
    store: &dyn TaskStore,
    clock: &dyn Clock,
    id: Uuid,
) -> ServiceResult<Completion> {
    let task = get_task(store, id).await?;
    let rule: Rule = task.repeat.parse()?;

    if rule.is_none() {
        delete_task(store, id).await?;
        return Ok(Completion::Deleted);
    }

    let next = rule.next_after(clock.today(), task.date)?;
    if !store.update_date(id, next).await? {
        return Err(ServiceError::NotFound(format!("task {id}")));
    }

    tracing::debug!(%next, "Task rescheduled");
    Ok(Completion::Rescheduled(next))
}

/// ## Summary
/// Lists tasks matching a free-form search string, earliest first.
///
/// ## Errors
/// Propagates store errors.
pub async fn search_tasks(
    store: &dyn TaskStore,
    query: &str,
    limit: usize,
) -> ServiceResult<Vec<Task>> {
    match SearchQuery::parse(query) {
        SearchQuery::All => store.list(limit).await,
        SearchQuery::Date(date) => store.search_by_date(date, limit).await,
        SearchQuery::Text(text) => store.search_by_text(&text, limit).await,
    }
}
