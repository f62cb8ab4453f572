//! E2E tests for schema lookups and configuration validation.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{SSHD_CONFIG, TestHarness};
use pce_engine::RegexParserEngine;

#[tokio::test]
async fn e2e_schema_is_regex_engine_schema() {
    let h = TestHarness::with_regex_engine();

    let reply = h.get("/api/v1/parserconfig/schema").await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(
        reply.json["attributes"]["rulesSchema"],
        RegexParserEngine::config_schema()
    );
}

#[tokio::test]
async fn e2e_test_schema_describes_descriptor() {
    let h = TestHarness::with_regex_engine();

    let reply = h.get("/api/v1/parserconfig/testschema").await;

    assert_eq!(reply.status, StatusCode::OK);
    let schema: serde_json::Value =
        serde_json::from_str(reply.json["attributes"]["testSchema"].as_str().unwrap()).unwrap();
    assert_eq!(schema["required"], json!(["encoding", "log"]));
}

#[tokio::test]
async fn e2e_valid_configuration() {
    let h = TestHarness::with_regex_engine();

    let reply = h
        .post_raw("/api/v1/parserconfig/configuration/validate", SSHD_CONFIG)
        .await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json, json!({"statusCode": "OK", "attributes": {}}));
}

#[tokio::test]
async fn e2e_invalid_configuration() {
    let h = TestHarness::with_regex_engine();

    let reply = h
        .post_raw(
            "/api/v1/parserconfig/configuration/validate",
            r#"{"parser_name":"broken","pattern":"(?P<x>"}"#,
        )
        .await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.json["statusCode"], "ERROR");
    assert!(
        reply.json["attributes"]["message"]
            .as_str()
            .unwrap()
            .starts_with("invalid pattern")
    );
}

#[tokio::test]
async fn e2e_valid_batch() {
    let h = TestHarness::with_regex_engine();
    let batch = format!(
        r#"{{"parsers_configurations":[{SSHD_CONFIG},{{"parser_name":"catch_all","pattern":"(?P<msg>.*)"}}]}}"#
    );

    let reply = h
        .post_raw("/api/v1/parserconfig/configurations/validate", &batch)
        .await;

    assert_eq!(reply.status, StatusCode::OK);
}

#[tokio::test]
async fn e2e_batch_with_duplicate_names() {
    let h = TestHarness::with_regex_engine();
    let batch = format!(r#"{{"parsers_configurations":[{SSHD_CONFIG},{SSHD_CONFIG}]}}"#);

    let reply = h
        .post_raw("/api/v1/parserconfig/configurations/validate", &batch)
        .await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert!(
        reply.json["attributes"]["message"]
            .as_str()
            .unwrap()
            .contains("duplicate parser name 'sshd'")
    );
}

#[tokio::test]
async fn e2e_mock_validation_called_once() {
    let h = TestHarness::with_mock("dummmy schema");

    let reply = h
        .post_raw(
            "/api/v1/parserconfig/configuration/validate",
            "dummmy parser config",
        )
        .await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(h.mock().call_count(), 1);
}
