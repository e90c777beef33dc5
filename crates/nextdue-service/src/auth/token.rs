use nextdue_core::error::CoreError;
use sha2::{Digest, Sha256};

use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Derives the session token for a password: the hex-encoded SHA-256 digest.
#[must_use]
pub fn token_for(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// ## Summary
/// Exchanges a sign-in attempt for a token.
///
/// ## Errors
/// - [`CoreError::InvalidConfiguration`] if no password is configured
/// - [`ServiceError::NotAuthenticated`] if `attempt` does not match
#[tracing::instrument(skip_all)]
pub fn issue_token(configured: Option<&str>, attempt: &str) -> ServiceResult<String> {
    let Some(password) = configured else {
        return Err(CoreError::InvalidConfiguration(
            "sign-in requested but no password is configured".to_string(),
        )
        .into());
    };

    if attempt != password {
        tracing::debug!("Sign-in rejected");
        return Err(ServiceError::NotAuthenticated);
    }

    Ok(token_for(password))
}

/// ## Summary
/// Checks a token presented by a client.
///
/// Always succeeds when no password is configured.
///
/// ## Errors
/// Returns [`ServiceError::NotAuthenticated`] if the token is missing or stale.
pub fn verify_token(configured: Option<&str>, presented: Option<&str>) -> ServiceResult<()> {
    let Some(password) = configured else {
        return Ok(());
    };

    match presented {
        Some(token) if token == token_for(password) => Ok(()),
        Some(_) => {
            tracing::trace!("Token does not match the configured password");
            Err(ServiceError::NotAuthenticated)
        }
        None => Err(ServiceError::NotAuthenticated),
    }
}
