use salvo::Depot;
use salvo::writing::Json;
use tracing::error;

use crate::config::get_config_from_depot;
use crate::error::ErrorResponse;
use nextdue_core::constants::TOKEN_COOKIE;
use nextdue_service::auth::verify_token;

/// ## Summary
/// Middleware handler for authentication.
/// Use this as a hoop on routes that require a signed-in client.
pub struct AuthMiddleware;

/// ## Summary
/// Checks the sign-in token cookie when a password is configured.
///
/// ## Errors
/// Returns an HTTP 401 Unauthorized response if the token is missing or wrong,
/// and HTTP 500 if the configuration is not available.
#[salvo::async_trait]
impl salvo::Handler for AuthMiddleware {
    #[tracing::instrument(skip(self, req, depot, res, ctrl), fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        tracing::trace!("Authenticating request");

        let config = match get_config_from_depot(depot) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!(error = ?e, "Failed to get config from depot");
                res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
                ctrl.skip_rest();
                return;
            }
        };

        let token = req.cookie(TOKEN_COOKIE).map(|cookie| cookie.value().to_string());

        if let Err(e) = verify_token(config.auth.password(), token.as_deref()) {
            tracing::debug!(error = %e, "Rejecting unauthenticated request");
            res.status_code(salvo::http::StatusCode::UNAUTHORIZED);
            res.render(Json(ErrorResponse {
                error: "Authentication required".to_string(),
            }));
            ctrl.skip_rest();
        }
    }
}
