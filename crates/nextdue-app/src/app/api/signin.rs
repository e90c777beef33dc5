use salvo::http::cookie::Cookie;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};
use serde::{Deserialize, Serialize};

use nextdue_core::constants::{SIGNIN_ROUTE_COMPONENT, TOKEN_COOKIE};
use nextdue_service::auth::issue_token;

use super::request::json_body;
use crate::config::get_config_from_depot;
use crate::error::AppResult;

/// ## Summary
/// Sign-in request payload
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub password: String,
}

/// ## Summary
/// Sign-in response payload
#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub token: String,
}

/// ## Summary
/// POST /api/signin - Exchanges the shared password for a session token.
///
/// The token is returned in the body and also set as the `token` cookie.
///
/// ## Errors
/// Returns HTTP 401 if the password is wrong
/// Returns HTTP 500 if no password is configured
#[handler]
#[tracing::instrument(skip_all)]
async fn signin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> AppResult<Json<SignInResponse>> {
    let config = get_config_from_depot(depot)?;
    let credentials: SignInRequest = json_body(req).await?;

    let token = issue_token(config.auth.password(), &credentials.password)?;
    res.add_cookie(Cookie::build((TOKEN_COOKIE, token.clone())).path("/").build());

    tracing::info!("Client signed in");
    Ok(Json(SignInResponse { token }))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(SIGNIN_ROUTE_COMPONENT).post(signin)
}
