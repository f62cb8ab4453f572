//! Sample-log decoding errors.

use thiserror::Error;

/// Errors raised while decoding a sample-log descriptor.
///
/// These never reach the parser engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("malformed sample log descriptor: {0}")]
    MalformedDescriptor(String),

    #[error("unsupported encoding '{0}', expected utf8_string or hex_string")]
    UnsupportedEncoding(String),

    #[error("{0}")]
    InvalidEncoding(String),
}

impl DecodeError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedDescriptor(_) => "MalformedDescriptor",
            Self::UnsupportedEncoding(_) => "UnsupportedEncoding",
            Self::InvalidEncoding(_) => "InvalidEncoding",
        }
    }
}

/// Convenience alias for decoding results.
pub type DecodeResult<T> = Result<T, DecodeError>;
