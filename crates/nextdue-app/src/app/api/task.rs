//! Single-task endpoints under `/api/task`.

use salvo::writing::Json;
use salvo::{Depot, Request, Router, handler};
use serde::Serialize;

use nextdue_core::constants::{TASK_DONE_ROUTE_COMPONENT, TASK_ROUTE_COMPONENT};
use nextdue_service::task::service::{
    Completion, complete_task, create_task, delete_task, get_task, update_task,
};
use nextdue_service::task::{Task, TaskDraft};

use super::request::{id_param, json_body};
use crate::error::AppResult;
use crate::store_handler::{get_clock_from_depot, get_store_from_depot};

/// ## Summary
/// Response carrying the id of a created task
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// ## Summary
/// Empty JSON object returned by operations without a payload
#[derive(Debug, Serialize)]
pub struct EmptyResponse {}

/// ## Summary
/// POST /api/task - Creates a task from a JSON draft.
///
/// ## Errors
/// Returns HTTP 400 for a missing title, malformed date, or malformed rule
#[handler]
#[tracing::instrument(skip_all)]
async fn create(req: &mut Request, depot: &mut Depot) -> AppResult<Json<CreatedResponse>> {
    let store = get_store_from_depot(depot)?;
    let clock = get_clock_from_depot(depot)?;
    let draft: TaskDraft = json_body(req).await?;

    let id = create_task(store.as_ref(), clock.as_ref(), draft).await?;

    Ok(Json(CreatedResponse { id: id.to_string() }))
}

/// ## Summary
/// GET /api/task?id= - Returns a single task.
///
/// ## Errors
/// Returns HTTP 400 for a malformed id and HTTP 404 for an unknown task
#[handler]
#[tracing::instrument(skip_all)]
async fn read(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Task>> {
    let store = get_store_from_depot(depot)?;
    let id = id_param(req)?;

    Ok(Json(get_task(store.as_ref(), id).await?))
}

/// ## Summary
/// PUT /api/task - Replaces a task with the JSON draft, which must carry its id.
///
/// ## Errors
/// Returns HTTP 400 for invalid fields or a past date and HTTP 404 for an unknown task
#[handler]
#[tracing::instrument(skip_all)]
async fn update(req: &mut Request, depot: &mut Depot) -> AppResult<Json<EmptyResponse>> {
    let store = get_store_from_depot(depot)?;
    let clock = get_clock_from_depot(depot)?;
    let draft: TaskDraft = json_body(req).await?;

    update_task(store.as_ref(), clock.as_ref(), draft).await?;

    Ok(Json(EmptyResponse {}))
}

/// ## Summary
/// DELETE /api/task?id= - Deletes a task.
///
/// ## Errors
/// Returns HTTP 404 for an unknown task
#[handler]
#[tracing::instrument(skip_all)]
async fn remove(req: &mut Request, depot: &mut Depot) -> AppResult<Json<EmptyResponse>> {
    let store = get_store_from_depot(depot)?;
    let id = id_param(req)?;

    delete_task(store.as_ref(), id).await?;

    Ok(Json(EmptyResponse {}))
}

/// ## Summary
/// POST /api/task/done?id= - Marks a task as done.
///
/// Repeating tasks move to their next date, others are deleted.
///
/// ## Errors
/// Returns HTTP 404 for an unknown task
#[handler]
#[tracing::instrument(skip_all)]
async fn done(req: &mut Request, depot: &mut Depot) -> AppResult<Json<EmptyResponse>> {
    let store = get_store_from_depot(depot)?;
    let clock = get_clock_from_depot(depot)?;
    let id = id_param(req)?;

    match complete_task(store.as_ref(), clock.as_ref(), id).await? {
        Completion::Deleted => tracing::debug!(task_id = %id, "Completed task removed"),
        Completion::Rescheduled(next) => {
            tracing::debug!(task_id = %id, %next, "Completed task rescheduled");
        }
    }

    Ok(Json(EmptyResponse {}))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(TASK_ROUTE_COMPONENT)
        .get(read)
        .post(create)
        .put(update)
        .delete(remove)
        .push(Router::with_path(TASK_DONE_ROUTE_COMPONENT).post(done))
}
