//! HTTP helpers for driving the full router in integration tests.

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use drones::server::{model::app::AppState, router};
use drones_test_utils::TestContext;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

/// Extension trait building the application router on top of a test database
pub trait TestContextExt {
    fn app(&self) -> TestApp;
}

impl TestContextExt for TestContext {
    fn app(&self) -> TestApp {
        let router = router::routes()
            .with_state(self.to_app_state::<AppState>())
            .layer(SessionManagerLayer::new(MemoryStore::default()));

        TestApp { router }
    }
}

/// Router sharing one session store across requests
#[derive(Clone)]
pub struct TestApp {
    router: Router,
}

/// Status, headers and JSON body of a response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("failed to read response body")
            .to_bytes();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(RequestBuilder::new(Method::GET, uri).build()).await
    }
}

/// Small wrapper over [`Request::builder`] with the headers the API cares about
pub struct RequestBuilder {
    method: Method,
    uri: String,
    headers: Vec<(header::HeaderName, String)>,
    body: Option<Value>,
}

impl RequestBuilder {
    pub fn new(method: Method, uri: &str) -> Self {
        Self {
            method,
            uri: uri.to_string(),
            headers: vec![(header::HOST, "testserver".to_string())],
            body: None,
        }
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn basic_auth(mut self, username: &str, password: &str) -> Self {
        let encoded = STANDARD.encode(format!("{}:{}", username, password));
        self.headers
            .push((header::AUTHORIZATION, format!("Basic {}", encoded)));
        self
    }

    pub fn token(mut self, key: &str) -> Self {
        self.headers
            .push((header::AUTHORIZATION, format!("Token {}", key)));
        self
    }

    pub fn header(mut self, name: header::HeaderName, value: &str) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }

    pub fn build(self) -> Request<Body> {
        let mut builder = Request::builder().method(self.method).uri(self.uri);

        for (name, value) in self.headers {
            builder = builder.header(name, value);
        }

        match self.body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("failed to build request")
    }
}
