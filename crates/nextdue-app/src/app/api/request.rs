use salvo::Request;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use nextdue_service::error::ServiceError;
use nextdue_service::task::service::parse_task_id;

use crate::error::AppResult;

/// ## Summary
/// Parses the JSON request body.
///
/// ## Errors
/// Returns a validation error if the body is not valid JSON for `T`.
pub async fn json_body<T: DeserializeOwned + Send>(req: &mut Request) -> AppResult<T> {
    req.parse_json::<T>()
        .await
        .map_err(|e| ServiceError::ValidationError(format!("invalid request body: {e}")).into())
}

/// ## Summary
/// Reads the task id from the `id` query parameter.
///
/// ## Errors
/// Returns a validation error if the parameter is missing or not a task id.
pub fn id_param(req: &Request) -> AppResult<Uuid> {
    let id = req.query::<String>("id").unwrap_or_default();
    Ok(parse_task_id(&id)?)
}
