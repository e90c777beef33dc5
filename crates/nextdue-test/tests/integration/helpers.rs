#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Building a service around an in-memory store and a fixed clock
//! - Making HTTP requests
//! - Asserting on responses

use std::sync::Arc;

use chrono::NaiveTime;
use salvo::http::cookie::Cookie;
use salvo::http::{Method, StatusCode};
use salvo::prelude::*;
use salvo::test::{RequestBuilder, ResponseExt, TestClient};
use serde_json::Value;

use nextdue_test::component::clock::FixedClock;
use nextdue_test::component::config::{
    AuthConfig, ConfigHandler, LoggingConfig, ServerConfig, Settings, TaskConfig,
};
use nextdue_test::component::constants::TOKEN_COOKIE;
use nextdue_test::component::store::{InMemoryTaskStore, TaskStore, TaskStoreHandler};
use nextdue_test::rule::TaskDate;

/// Default "today" for tests, a Friday.
pub const TODAY: &str = "20240126";

fn test_config(password: Option<&str>) -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 7540,
        },
        auth: AuthConfig {
            password: password.map(str::to_string),
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        tasks: TaskConfig { limit: 50 },
    }
}

/// A service wired like the binary, with its store exposed for inspection.
pub struct TestApp {
    pub service: Service,
    pub store: Arc<InMemoryTaskStore>,
}

impl TestApp {
    /// ## Summary
    /// Creates an app with authentication disabled and the clock at [`TODAY`].
    #[must_use]
    pub fn new() -> Self {
        Self::build(None, TODAY)
    }

    /// ## Summary
    /// Creates an app protected by `password`.
    #[must_use]
    pub fn with_password(password: &str) -> Self {
        Self::build(Some(password), TODAY)
    }

    /// ## Summary
    /// Creates an app whose clock reads `today` at 10:00.
    #[must_use]
    pub fn at(today: &str) -> Self {
        Self::build(None, today)
    }

    fn build(password: Option<&str>, today: &str) -> Self {
        let today: TaskDate = today.parse().expect("valid test date");
        let now = today
            .as_naive()
            .and_time(NaiveTime::from_hms_opt(10, 0, 0).expect("valid time"));

        let store = Arc::new(InMemoryTaskStore::new());
        let router = Router::new()
            .hoop(TaskStoreHandler {
                store: Arc::clone(&store) as Arc<dyn TaskStore>,
                clock: Arc::new(FixedClock(now)),
            })
            .hoop(ConfigHandler {
                settings: test_config(password),
            })
            .push(nextdue_test::app::api::routes());

        Self {
            service: Service::new(router),
            store,
        }
    }

    /// ## Summary
    /// Creates a task through the API and returns its id.
    ///
    /// ## Panics
    /// Panics if the API does not answer with an id.
    pub async fn create_task(&self, body: Value) -> String {
        let response = TestRequest::post("/api/task")
            .json(body)
            .send(&self.service)
            .await
            .assert_status(StatusCode::OK);

        response.json()["id"]
            .as_str()
            .expect("create response carries an id")
            .to_string()
    }

    /// ## Summary
    /// Fetches a task through the API as JSON.
    pub async fn get_task(&self, id: &str) -> TestResponse {
        TestRequest::get(&format!("/api/task?id={id}"))
            .send(&self.service)
            .await
    }
}

/// Test request builder for constructing HTTP requests.
pub struct TestRequest {
    method: Method,
    path: String,
    cookie: Option<String>,
    body: Option<Value>,
}

impl TestRequest {
    #[must_use]
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            cookie: None,
            body: None,
        }
    }

    #[must_use]
    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    #[must_use]
    pub fn put(path: &str) -> Self {
        Self::new(Method::PUT, path)
    }

    #[must_use]
    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Sends the sign-in token cookie.
    #[must_use]
    pub fn token(mut self, token: &str) -> Self {
        self.cookie = Some(Cookie::new(TOKEN_COOKIE, token.to_string()).to_string());
        self
    }

    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// ## Panics
    /// Panics if the response body cannot be read.
    pub async fn send(self, service: &Service) -> TestResponse {
        let url = format!("http://127.0.0.1:5800{}", self.path);

        let mut client = match self.method.as_str() {
            "GET" => TestClient::get(&url),
            "POST" => TestClient::post(&url),
            "PUT" => TestClient::put(&url),
            "DELETE" => TestClient::delete(&url),
            _ => RequestBuilder::new(&url, self.method.clone()),
        };

        if let Some(cookie) = self.cookie {
            client = client.add_header("cookie", cookie, true);
        }
        if let Some(body) = &self.body {
            client = client.json(body);
        }

        let mut response = client.send(service).await;

        let status = response
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let token_cookie = response
            .cookie(TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string());
        let body = response.take_string().await.expect("readable body");

        TestResponse {
            status,
            token_cookie,
            body,
        }
    }
}

/// Represents an HTTP test response for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub token_cookie: Option<String>,
    pub body: String,
}

impl TestResponse {
    /// Asserts that the response status matches the expected code.
    #[must_use]
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status, expected,
            "Expected status {expected} but got {}: {}",
            self.status, self.body
        );
        self
    }

    /// Asserts that the response body contains the expected substring.
    #[must_use]
    pub fn assert_body_contains(self, expected: &str) -> Self {
        assert!(
            self.body.contains(expected),
            "Expected body to contain '{expected}' but got:\n{}",
            self.body
        );
        self
    }

    /// Parses the body as JSON.
    ///
    /// ## Panics
    /// Panics if the body is not JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("response body is JSON")
    }

    /// Returns the `error` message of a JSON error body.
    #[must_use]
    pub fn error(&self) -> String {
        self.json()["error"]
            .as_str()
            .expect("error body carries a message")
            .to_string()
    }
}
