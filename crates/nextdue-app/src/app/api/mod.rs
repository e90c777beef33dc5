mod app_specific;
mod nextdate;
mod request;
mod signin;
mod task;
mod tasks;

use nextdue_core::constants::API_ROUTE_COMPONENT;
use salvo::Router;

use crate::middleware::auth::AuthMiddleware;

/// ## Summary
/// Constructs the API router.
///
/// The next-date calculator, sign-in and health check are public; the task
/// routes sit behind [`AuthMiddleware`].
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(nextdate::routes())
        .push(signin::routes())
        .push(
            Router::new()
                .hoop(AuthMiddleware)
                .push(task::routes())
                .push(tasks::routes()),
        )
}
