//! HTTP mapping of `ResultEnvelope` with Axum `IntoResponse` support.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use pce_protocol::ResultEnvelope;

/// A result envelope paired with the HTTP status it is served with.
#[derive(Debug)]
pub struct EnvelopeResponse {
    pub status: StatusCode,
    pub envelope: ResultEnvelope,
}

impl EnvelopeResponse {
    /// Serve an ERROR envelope for an unsupported operation.
    pub fn not_implemented(envelope: ResultEnvelope) -> Self {
        Self {
            status: StatusCode::NOT_IMPLEMENTED,
            envelope,
        }
    }
}

impl From<ResultEnvelope> for EnvelopeResponse {
    /// OK envelopes are 200, ERROR envelopes 400.
    fn from(envelope: ResultEnvelope) -> Self {
        let status = if envelope.is_ok() {
            StatusCode::OK
        } else {
            StatusCode::BAD_REQUEST
        };
        Self { status, envelope }
    }
}

impl IntoResponse for EnvelopeResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.envelope)).into_response()
    }
}
