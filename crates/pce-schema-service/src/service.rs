//! Orchestration of schema lookups, validation and dry-run tests.

use std::sync::Arc;

use pce_engine::{ParserEngine, RegexParserEngine};
use pce_protocol::ResultEnvelope;

use crate::decoder;

/// Validates parser configurations and previews how a sample log parses.
///
/// Holds only immutable state, so one instance can serve concurrent
/// callers; thread-safety of the calls themselves is up to the engine.
pub struct ParserConfigSchemaService {
    engine: Arc<dyn ParserEngine>,
    schema: String,
}

impl ParserConfigSchemaService {
    pub fn new(engine: Arc<dyn ParserEngine>, schema: impl Into<String>) -> Self {
        Self {
            engine,
            schema: schema.into(),
        }
    }

    /// Service backed by the built-in regex engine and its schema.
    pub fn with_regex_engine() -> Self {
        Self::new(
            Arc::new(RegexParserEngine::new()),
            RegexParserEngine::config_schema(),
        )
    }

    pub fn get_schema(&self) -> ResultEnvelope {
        ResultEnvelope::from_schema(self.schema.as_str())
    }

    pub fn get_test_schema(&self) -> ResultEnvelope {
        ResultEnvelope::from_test_schema(decoder::test_schema())
    }

    pub fn validate_configuration(&self, configuration: &str) -> ResultEnvelope {
        tracing::debug!(len = configuration.len(), "validating configuration");
        let outcome = self.engine.validate_configuration(configuration);
        logged("validate_configuration", ResultEnvelope::from_engine_outcome(outcome))
    }

    pub fn validate_configurations(&self, configurations: &str) -> ResultEnvelope {
        tracing::debug!(len = configurations.len(), "validating configurations");
        let outcome = self.engine.validate_configurations(configurations);
        logged("validate_configurations", ResultEnvelope::from_engine_outcome(outcome))
    }

    /// Parse the sample described by `descriptor` with `configuration`.
    ///
    /// A descriptor that fails to decode short-circuits: the engine is
    /// never called.
    pub fn test_configuration(&self, configuration: &str, descriptor: &str) -> ResultEnvelope {
        let sample = match decoder::decode(descriptor) {
            Ok(bytes) => bytes,
            Err(e) => {
                return logged(
                    "test_configuration",
                    ResultEnvelope::from_exception(e.kind(), e.to_string()),
                );
            }
        };

        tracing::debug!(sample_len = sample.len(), "testing configuration");
        let outcome = self.engine.test(configuration, None, &sample);
        logged("test_configuration", ResultEnvelope::from_test_outcome(outcome))
    }

    /// Always refused; see `ResultEnvelope::from_batch_test`.
    pub fn test_configurations(&self, _configurations: &str, _raw_log: &str) -> ResultEnvelope {
        logged("test_configurations", ResultEnvelope::from_batch_test())
    }
}

fn logged(operation: &str, envelope: ResultEnvelope) -> ResultEnvelope {
    if envelope.is_ok() {
        tracing::debug!(operation, "request completed");
    } else {
        tracing::warn!(
            operation,
            reason = envelope.attributes.message.as_deref().unwrap_or_default(),
            "request failed"
        );
    }
    envelope
}
