use salvo::writing::Json;
use salvo::{Depot, Request, Router, handler};
use serde::Serialize;

use nextdue_core::constants::TASKS_ROUTE_COMPONENT;
use nextdue_service::task::Task;
use nextdue_service::task::service::search_tasks;

use crate::config::get_config_from_depot;
use crate::error::AppResult;
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// Task listing payload
#[derive(Debug, Serialize)]
pub struct TasksResponse {
    pub tasks: Vec<Task>,
}

/// ## Summary
/// GET /api/tasks?search= - Lists upcoming tasks, optionally filtered.
///
/// A `search` value of the form `DD.MM.YYYY` selects tasks due that day; any
/// other value matches title and comment text.
#[handler]
#[tracing::instrument(skip_all)]
async fn list(req: &mut Request, depot: &mut Depot) -> AppResult<Json<TasksResponse>> {
    let config = get_config_from_depot(depot)?;
    let store = get_store_from_depot(depot)?;
    let search = req.query::<String>("search").unwrap_or_default();

    let tasks = search_tasks(store.as_ref(), &search, config.tasks.limit).await?;
    tracing::debug!(count = tasks.len(), "Listed tasks");

    Ok(Json(TasksResponse { tasks }))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(TASKS_ROUTE_COMPONENT).get(list)
}
