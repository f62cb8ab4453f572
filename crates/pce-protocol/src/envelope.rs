//! The uniform result envelope and the builders that produce it.
//!
//! Every service operation answers with a `ResultEnvelope`, whatever the
//! backend did: schema lookups, validation failures, parse exceptions and
//! successful dry runs all end up in the same shape. An `ERROR` envelope
//! always carries a non-empty `message` or `exception`.

use serde::{Deserialize, Serialize};

use crate::outcome::{EngineOutcome, ParsedMessage, StatusCode};

/// Message of the batch-test stub.
pub const NOT_IMPLEMENTED: &str = "Not implemented";

pub(crate) const MISSING_ENGINE_MESSAGE: &str =
    "parser engine reported an error without a message";

pub(crate) const MISSING_TEST_RESULT: &str = "parser engine returned no test result";

// ── Envelope ──────────────────────────────────────────────────

/// Optional payload of a `ResultEnvelope`. Unset fields are omitted on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules_schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_result_complete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_result: Option<Vec<ParsedMessage>>,
}

/// Uniform external result shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope {
    pub status_code: StatusCode,
    #[serde(default)]
    pub attributes: EnvelopeAttributes,
}

impl ResultEnvelope {
    fn ok(attributes: EnvelopeAttributes) -> Self {
        Self {
            status_code: StatusCode::Ok,
            attributes,
        }
    }

    /// ERROR envelope with a human-readable message.
    ///
    /// An empty message is replaced so the envelope never reports a
    /// failure without saying what failed.
    pub fn error(message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.trim().is_empty() {
            message = MISSING_ENGINE_MESSAGE.to_string();
        }
        Self {
            status_code: StatusCode::Error,
            attributes: EnvelopeAttributes {
                message: Some(message),
                ..Default::default()
            },
        }
    }

    /// ERROR envelope for a failure with a known class, e.g. a decode error.
    ///
    /// `message` holds the plain text; `exception` holds `"<kind>: <text>"`.
    pub fn from_exception(kind: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut envelope = Self::error(message);
        let text = envelope.attributes.message.clone().unwrap_or_default();
        envelope.attributes.exception = Some(format!("{kind}: {text}"));
        envelope
    }

    pub fn is_ok(&self) -> bool {
        self.status_code == StatusCode::Ok
    }

    // ── Builders ──────────────────────────────────────────────

    pub fn from_schema(schema: impl Into<String>) -> Self {
        Self::ok(EnvelopeAttributes {
            rules_schema: Some(schema.into()),
            ..Default::default()
        })
    }

    pub fn from_test_schema(schema: impl Into<String>) -> Self {
        Self::ok(EnvelopeAttributes {
            test_schema: Some(schema.into()),
            ..Default::default()
        })
    }

    /// Map a create/validate outcome. OK passes through with no attributes.
    pub fn from_engine_outcome(outcome: EngineOutcome) -> Self {
        match outcome.status_code {
            StatusCode::Ok => Self::ok(EnvelopeAttributes::default()),
            StatusCode::Error => Self::error(outcome.message.unwrap_or_default()),
        }
    }

    /// Map a test outcome.
    ///
    /// A captured parse exception turns an OK outcome into an ERROR
    /// envelope; the exception's description is carried verbatim.
    pub fn from_test_outcome(outcome: EngineOutcome) -> Self {
        if outcome.status_code == StatusCode::Error {
            return Self::error(outcome.message.unwrap_or_default());
        }

        let Some(result) = outcome.parser_result else {
            return Self::error(MISSING_TEST_RESULT);
        };

        if let Some(exception) = result.exception {
            let description = exception.to_string();
            let mut envelope = Self::error(description.clone());
            envelope.attributes.exception = Some(description);
            return envelope;
        }

        Self::ok(EnvelopeAttributes {
            test_result_complete: Some(true),
            test_result: Some(result.parsed_messages),
            ..Default::default()
        })
    }

    /// Batch test execution is unsupported: which configuration produced
    /// which result is undefined, so the call is refused outright.
    pub fn from_batch_test() -> Self {
        Self::error(NOT_IMPLEMENTED)
    }
}
