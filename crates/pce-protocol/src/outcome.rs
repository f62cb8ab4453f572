//! Outcomes reported by a parser engine.

use serde::{Deserialize, Serialize};

/// Two-state status shared by engine outcomes and result envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusCode {
    Ok,
    Error,
}

/// One message produced by parsing a sample log: field name to value.
pub type ParsedMessage = serde_json::Map<String, serde_json::Value>;

/// A failure raised while parsing a specific input, after the
/// configuration itself was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseException {
    /// Short failure class, e.g. `NoMatch`.
    pub kind: String,
    pub message: String,
}

impl ParseException {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ParseException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ParseException {}

/// Result of running one sample log through one configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOutcome {
    #[serde(default)]
    pub parsed_messages: Vec<ParsedMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<ParseException>,
}

impl ParseOutcome {
    pub fn parsed(messages: Vec<ParsedMessage>) -> Self {
        Self {
            parsed_messages: messages,
            exception: None,
        }
    }

    pub fn failed(exception: ParseException) -> Self {
        Self {
            parsed_messages: Vec::new(),
            exception: Some(exception),
        }
    }
}

/// What a parser engine returns for create/validate/test calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineOutcome {
    pub status_code: StatusCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser_result: Option<ParseOutcome>,
}

impl EngineOutcome {
    pub fn ok() -> Self {
        Self {
            status_code: StatusCode::Ok,
            message: None,
            parser_result: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::Error,
            message: Some(message.into()),
            parser_result: None,
        }
    }

    /// An OK outcome carrying the result of a test parse.
    pub fn tested(result: ParseOutcome) -> Self {
        Self {
            status_code: StatusCode::Ok,
            message: None,
            parser_result: Some(result),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status_code == StatusCode::Ok
    }
}
