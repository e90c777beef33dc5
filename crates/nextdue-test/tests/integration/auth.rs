//! Tests for sign-in and the token cookie guard.

use salvo::http::StatusCode;
use serde_json::json;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn task_routes_require_token_when_password_set() {
    let app = TestApp::with_password("s3cret");

    let response = TestRequest::get("/api/tasks")
        .send(&app.service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.error(), "Authentication required");

    TestRequest::post("/api/task")
        .json(json!({"title": "Sneaky"}))
        .send(&app.service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    TestRequest::post(&format!("/api/task/done?id={}", uuid::Uuid::now_v7()))
        .send(&app.service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[test_log::test(tokio::test)]
async fn signin_issues_working_token() {
    let app = TestApp::with_password("s3cret");

    let response = TestRequest::post("/api/signin")
        .json(json!({"password": "s3cret"}))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK);

    let token = response.json()["token"]
        .as_str()
        .map(str::to_string)
        .unwrap_or_default();
    assert_eq!(token.len(), 64);
    assert_eq!(response.token_cookie.as_deref(), Some(token.as_str()));

    TestRequest::get("/api/tasks")
        .token(&token)
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK);

    TestRequest::post("/api/task")
        .token(&token)
        .json(json!({"title": "Allowed"}))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK);
}

#[test_log::test(tokio::test)]
async fn signin_rejects_wrong_password() {
    let app = TestApp::with_password("s3cret");

    let response = TestRequest::post("/api/signin")
        .json(json!({"password": "guess"}))
        .send(&app.service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    assert!(response.token_cookie.is_none());
}

#[test_log::test(tokio::test)]
async fn wrong_token_is_rejected() {
    let app = TestApp::with_password("s3cret");

    TestRequest::get("/api/tasks")
        .token("s3cret")
        .send(&app.service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[test_log::test(tokio::test)]
async fn signin_without_configured_password_is_server_error() {
    let app = TestApp::new();

    TestRequest::post("/api/signin")
        .json(json!({"password": "anything"}))
        .send(&app.service)
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[test_log::test(tokio::test)]
async fn healthcheck_is_public() {
    let app = TestApp::with_password("s3cret");

    TestRequest::get("/api/app/healthcheck")
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("OK");
}
