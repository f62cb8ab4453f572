//! Parser configuration endpoints.
//!
//! Every response body is a `ResultEnvelope`, including rejected request
//! bodies.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::{JsonRejection, StringRejection};
use serde::Deserialize;

use pce_protocol::ResultEnvelope;

use crate::response::EnvelopeResponse;
use crate::state::AppState;

/// Request body for a single-configuration dry run.
#[derive(Debug, Deserialize)]
pub struct TestConfigurationRequest {
    /// Parser configuration in the engine's language.
    pub configuration: String,
    /// Serialized sample-log descriptor, `{"encoding": ..., "log": ...}`.
    pub test_specification: String,
}

/// Request body for a batch dry run.
#[derive(Debug, Default, Deserialize)]
pub struct TestConfigurationsRequest {
    pub configurations: String,
    pub log: String,
}

fn rejected(reason: String) -> EnvelopeResponse {
    tracing::debug!(error = %reason, "request body rejected");
    ResultEnvelope::from_exception("InvalidRequest", reason).into()
}

/// GET /api/v1/parserconfig/schema — rules schema.
pub async fn get_schema(State(state): State<AppState>) -> EnvelopeResponse {
    state.service.get_schema().into()
}

/// GET /api/v1/parserconfig/testschema — sample-log descriptor schema.
pub async fn get_test_schema(State(state): State<AppState>) -> EnvelopeResponse {
    state.service.get_test_schema().into()
}

/// POST /api/v1/parserconfig/configuration/validate — body is the raw configuration.
pub async fn validate_configuration(
    State(state): State<AppState>,
    body: Result<String, StringRejection>,
) -> EnvelopeResponse {
    let configuration = match body {
        Ok(b) => b,
        Err(rejection) => return rejected(rejection.body_text()),
    };
    state.service.validate_configuration(&configuration).into()
}

/// POST /api/v1/parserconfig/configurations/validate — body is the raw batch.
pub async fn validate_configurations(
    State(state): State<AppState>,
    body: Result<String, StringRejection>,
) -> EnvelopeResponse {
    let configurations = match body {
        Ok(b) => b,
        Err(rejection) => return rejected(rejection.body_text()),
    };
    state.service.validate_configurations(&configurations).into()
}

/// POST /api/v1/parserconfig/configuration/test — dry-run one configuration.
pub async fn test_configuration(
    State(state): State<AppState>,
    payload: Result<Json<TestConfigurationRequest>, JsonRejection>,
) -> EnvelopeResponse {
    let Json(req) = match payload {
        Ok(p) => p,
        Err(rejection) => return rejected(rejection.body_text()),
    };
    state
        .service
        .test_configuration(&req.configuration, &req.test_specification)
        .into()
}

/// POST /api/v1/parserconfig/configurations/test — unsupported, always 501.
///
/// The body is not required to be well-formed; any request gets the same
/// refusal.
pub async fn test_configurations(
    State(state): State<AppState>,
    payload: Result<Json<TestConfigurationsRequest>, JsonRejection>,
) -> EnvelopeResponse {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "ignoring unreadable batch test body");
            TestConfigurationsRequest::default()
        }
    };
    EnvelopeResponse::not_implemented(
        state
            .service
            .test_configurations(&req.configurations, &req.log),
    )
}
