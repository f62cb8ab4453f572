//! Mock parser engine for testing without a real backend.
//!
//! Serves scripted outcomes per operation and records every call for
//! assertion in tests.

use std::sync::Mutex;

use pce_protocol::EngineOutcome;

use crate::engine::ParserEngine;

/// A recorded engine call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Create(String),
    ValidateConfiguration(String),
    ValidateConfigurations(String),
    Test {
        configuration: String,
        configurations: Option<String>,
        sample: Vec<u8>,
    },
}

/// Mock implementation of the `ParserEngine` trait.
///
/// Every operation answers OK until scripted otherwise.
/// Thread-safe via `Mutex` (fine for test contexts).
pub struct MockParserEngine {
    create_outcome: Mutex<EngineOutcome>,
    validate_outcome: Mutex<EngineOutcome>,
    validate_all_outcome: Mutex<EngineOutcome>,
    test_outcome: Mutex<EngineOutcome>,
    calls: Mutex<Vec<EngineCall>>,
}

impl MockParserEngine {
    pub fn new() -> Self {
        Self {
            create_outcome: Mutex::new(EngineOutcome::ok()),
            validate_outcome: Mutex::new(EngineOutcome::ok()),
            validate_all_outcome: Mutex::new(EngineOutcome::ok()),
            test_outcome: Mutex::new(EngineOutcome::ok()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn set_create_outcome(&self, outcome: EngineOutcome) {
        *self.create_outcome.lock().unwrap() = outcome;
    }

    pub fn set_validate_outcome(&self, outcome: EngineOutcome) {
        *self.validate_outcome.lock().unwrap() = outcome;
    }

    pub fn set_validate_all_outcome(&self, outcome: EngineOutcome) {
        *self.validate_all_outcome.lock().unwrap() = outcome;
    }

    pub fn set_test_outcome(&self, outcome: EngineOutcome) {
        *self.test_outcome.lock().unwrap() = outcome;
    }

    /// Get all recorded calls, oldest first.
    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get only the recorded `test` calls.
    pub fn test_calls(&self) -> Vec<EngineCall> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| matches!(c, EngineCall::Test { .. }))
            .cloned()
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Clear recorded calls. Scripted outcomes are kept.
    pub fn reset(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: EngineCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Default for MockParserEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserEngine for MockParserEngine {
    fn create(&self, configuration: &str) -> EngineOutcome {
        self.record(EngineCall::Create(configuration.to_string()));
        self.create_outcome.lock().unwrap().clone()
    }

    fn validate_configuration(&self, configuration: &str) -> EngineOutcome {
        self.record(EngineCall::ValidateConfiguration(configuration.to_string()));
        self.validate_outcome.lock().unwrap().clone()
    }

    fn validate_configurations(&self, configurations: &str) -> EngineOutcome {
        self.record(EngineCall::ValidateConfigurations(
            configurations.to_string(),
        ));
        self.validate_all_outcome.lock().unwrap().clone()
    }

    fn test(
        &self,
        configuration: &str,
        configurations: Option<&str>,
        sample: &[u8],
    ) -> EngineOutcome {
        self.record(EngineCall::Test {
            configuration: configuration.to_string(),
            configurations: configurations.map(str::to_string),
            sample: sample.to_vec(),
        });
        self.test_outcome.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pce_protocol::StatusCode;

    #[test]
    fn defaults_to_ok() {
        let mock = MockParserEngine::new();
        assert!(mock.create("c").is_ok());
        assert!(mock.validate_configuration("c").is_ok());
        assert!(mock.validate_configurations("cs").is_ok());
        assert!(mock.test("c", None, b"log").is_ok());
    }

    #[test]
    fn records_calls_in_order() {
        let mock = MockParserEngine::new();
        mock.validate_configuration("one");
        mock.test("two", None, b"log");

        assert_eq!(
            mock.calls(),
            vec![
                EngineCall::ValidateConfiguration("one".into()),
                EngineCall::Test {
                    configuration: "two".into(),
                    configurations: None,
                    sample: b"log".to_vec(),
                },
            ]
        );
        assert_eq!(mock.test_calls().len(), 1);
    }

    #[test]
    fn scripted_outcome_is_returned() {
        let mock = MockParserEngine::new();
        mock.set_validate_all_outcome(EngineOutcome::error("error"));
        let outcome = mock.validate_configurations("cs");
        assert_eq!(outcome.status_code, StatusCode::Error);
        assert!(mock.validate_configuration("c").is_ok());
    }

    #[test]
    fn reset_clears_calls() {
        let mock = MockParserEngine::new();
        mock.create("c");
        assert_eq!(mock.call_count(), 1);
        mock.reset();
        assert_eq!(mock.call_count(), 0);
    }
}
