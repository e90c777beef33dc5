use std::sync::Arc;

use salvo::async_trait;

use crate::error::AppResult;
use nextdue_core::error::CoreError;
use nextdue_service::clock::Clock;
use nextdue_service::task::TaskStore;

/// Makes the task store and the clock available to handlers.
pub struct TaskStoreHandler {
    pub store: Arc<dyn TaskStore>,
    pub clock: Arc<dyn Clock>,
}

#[async_trait]
impl salvo::Handler for TaskStoreHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.store));
        depot.inject(Arc::clone(&self.clock));
    }
}

/// ## Summary
/// Retrieves the task store from the depot.
///
/// ## Errors
/// Returns an error if the store is not found in the depot.
pub fn get_store_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn TaskStore>> {
    depot
        .obtain::<Arc<dyn TaskStore>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Task store not found in depot").into())
}

/// ## Summary
/// Retrieves the clock from the depot.
///
/// ## Errors
/// Returns an error if the clock is not found in the depot.
pub fn get_clock_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn Clock>> {
    depot
        .obtain::<Arc<dyn Clock>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Clock not found in depot").into())
}
