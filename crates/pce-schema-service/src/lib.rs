//! Parser configuration schema service.
//!
//! Validates parser configurations through a pluggable `ParserEngine` and
//! runs one-shot dry-run parses of a sample log, translating every backend
//! outcome into a `ResultEnvelope`. Sample logs arrive as a small JSON
//! descriptor whose payload is either UTF-8 text or hex digits.

pub mod decoder;
pub mod error;
pub mod service;

pub use decoder::{decode, test_schema};
pub use error::{DecodeError, DecodeResult};
pub use service::ParserConfigSchemaService;
