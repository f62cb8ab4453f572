//! Shared test harness for E2E integration tests.
//!
//! Drives the HTTP router built by `pce-api` around either the built-in
//! regex engine or a recording mock, exercising real code paths across
//! all crate boundaries.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use pce_api::routes::build_router;
use pce_api::state::AppState;
use pce_engine::MockParserEngine;
use pce_protocol::ResultEnvelope;

/// A syslog-style sshd parser.
pub const SSHD_CONFIG: &str = r#"{
    "parser_name": "sshd",
    "pattern": "^<(?P<pri>\\d+)>(?P<timestamp>\\w{3}\\s+\\d{1,2} \\d{2}:\\d{2}:\\d{2}) (?P<host>\\S+) sshd\\[(?P<pid>\\d+)\\]: (?P<msg>.*)$",
    "constants": { "source_type": "sshd" }
}"#;

pub const SSHD_LINE: &str =
    "<38>Jan 15 12:00:01 edge1 sshd[4242]: Accepted publickey for deploy from 10.0.0.7";

/// End-to-end test harness around the API router.
pub struct TestHarness {
    pub router: Router,
    /// Set when the harness runs on the mock engine.
    pub mock: Option<Arc<MockParserEngine>>,
}

/// A decoded HTTP reply.
pub struct Reply {
    pub status: StatusCode,
    pub json: serde_json::Value,
}

impl Reply {
    pub fn envelope(&self) -> ResultEnvelope {
        serde_json::from_value(self.json.clone()).unwrap()
    }
}

impl TestHarness {
    /// Harness backed by the built-in regex engine.
    pub fn with_regex_engine() -> Self {
        Self {
            router: build_router(AppState::with_regex_engine()),
            mock: None,
        }
    }

    /// Harness backed by a recording mock engine.
    pub fn with_mock(schema: &str) -> Self {
        let mock = Arc::new(MockParserEngine::new());
        Self {
            router: build_router(AppState::with_engine(mock.clone(), schema)),
            mock: Some(mock),
        }
    }

    pub fn mock(&self) -> &MockParserEngine {
        self.mock.as_deref().unwrap()
    }

    async fn send(&self, request: Request<Body>) -> Reply {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        Reply { status, json }
    }

    pub async fn get(&self, uri: &str) -> Reply {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_raw(&self, uri: &str, body: &str) -> Reply {
        self.send(
            Request::post(uri)
                .header("content-type", "text/plain")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> Reply {
        self.send(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
    }

    /// POST /api/v1/parserconfig/configuration/test
    pub async fn test_configuration(&self, configuration: &str, descriptor: &str) -> Reply {
        self.post_json(
            "/api/v1/parserconfig/configuration/test",
            serde_json::json!({
                "configuration": configuration,
                "test_specification": descriptor,
            }),
        )
        .await
    }
}
