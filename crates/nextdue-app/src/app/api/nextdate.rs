//! `GET|POST /api/nextdate`: runs the next-date engine on request parameters.

use chrono::NaiveTime;
use salvo::http::{Method, StatusCode};
use salvo::writing::Text;
use salvo::{Request, Response, Router, handler};

use nextdue_core::constants::NEXTDATE_ROUTE_COMPONENT;
use nextdue_rule::{TaskDate, next_date};

/// Reads a parameter from the query string, falling back to the form body
/// on POST.
async fn param(req: &mut Request, name: &str) -> Option<String> {
    if let Some(value) = req.query::<String>(name) {
        return Some(value);
    }
    if req.method() == Method::POST {
        return req.form::<String>(name).await;
    }
    None
}

fn reject(res: &mut Response, message: String) {
    tracing::debug!(%message, "Next date request rejected");
    res.status_code(StatusCode::BAD_REQUEST);
    res.render(Text::Plain(message));
}

/// ## Summary
/// Computes the next occurrence for `now`, `date` and `repeat`.
///
/// Responds with the date as plain text, or with HTTP 400 and a plain-text
/// reason when a parameter is missing or the engine rejects the input.
#[handler]
#[tracing::instrument(skip_all, fields(method = %req.method()))]
async fn next_date_handler(req: &mut Request, res: &mut Response) {
    let now = param(req, "now").await.unwrap_or_default();
    let date = param(req, "date").await.unwrap_or_default();
    let repeat = param(req, "repeat").await.unwrap_or_default();

    let reference = match now.parse::<TaskDate>() {
        Ok(reference) => reference,
        Err(e) => return reject(res, format!("parameter 'now': {e}")),
    };

    if date.is_empty() {
        return reject(res, "parameter 'date' is required".to_string());
    }

    match next_date(reference.as_naive().and_time(NaiveTime::MIN), &date, &repeat) {
        Ok(next) => res.render(Text::Plain(next.to_string())),
        Err(e) => reject(res, e.to_string()),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(NEXTDATE_ROUTE_COMPONENT)
        .get(next_date_handler)
        .post(next_date_handler)
}
