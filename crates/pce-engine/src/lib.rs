//! Parser engines for the parser config editor.
//!
//! Provides the `ParserEngine` capability trait consumed by the schema
//! service, a built-in `RegexParserEngine` whose configurations are JSON
//! documents around a named-group regex, and a recording `MockParserEngine`
//! for tests.

pub mod engine;
pub mod error;
pub mod mock;
pub mod regex_engine;

// Re-export key types for convenience
pub use engine::ParserEngine;
pub use error::{EngineError, EngineResult};
pub use mock::{EngineCall, MockParserEngine};
pub use regex_engine::{RegexParserConfig, RegexParserEngine};
