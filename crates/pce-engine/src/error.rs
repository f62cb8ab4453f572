//! Parser engine error types.

use thiserror::Error;

/// Errors raised while compiling or running a parser configuration.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid configuration JSON: {0}")]
    InvalidJson(String),

    #[error("invalid parser name '{0}': expected letters, digits, '_' or '-'")]
    InvalidParserName(String),

    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("pattern of parser '{0}' has no named capture groups")]
    NoNamedGroups(String),

    #[error("configuration batch is empty")]
    EmptyBatch,

    #[error("configuration {index}: {source}")]
    BatchMember {
        index: usize,
        #[source]
        source: Box<EngineError>,
    },

    #[error("duplicate parser name '{0}'")]
    DuplicateParser(String),

    #[error("sample log is not valid UTF-8: {0}")]
    InvalidUtf8(String),

    #[error("input does not match the pattern of parser '{parser}': {input}")]
    NoMatch { parser: String, input: String },
}

impl EngineError {
    /// Short failure class, used as the kind of a captured parse exception.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidJson(_) => "InvalidJson",
            Self::InvalidParserName(_) => "InvalidParserName",
            Self::InvalidPattern(_) => "InvalidPattern",
            Self::NoNamedGroups(_) => "NoNamedGroups",
            Self::EmptyBatch => "EmptyBatch",
            Self::BatchMember { .. } => "BatchMember",
            Self::DuplicateParser(_) => "DuplicateParser",
            Self::InvalidUtf8(_) => "InvalidUtf8",
            Self::NoMatch { .. } => "NoMatch",
        }
    }
}

/// Convenience alias for parser engine results.
pub type EngineResult<T> = Result<T, EngineError>;
