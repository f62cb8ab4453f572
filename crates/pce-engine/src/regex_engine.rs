//! Built-in parser engine driven by named-group regular expressions.
//!
//! A configuration is a JSON document:
//!
//! ```json
//! { "parser_name": "sshd",
//!   "pattern": "^(?P<host>\\S+) sshd\\[(?P<pid>\\d+)\\]: (?P<msg>.*)$",
//!   "split_lines": false,
//!   "constants": { "source_type": "sshd" } }
//! ```
//!
//! A batch wraps several of them: `{ "parsers_configurations": [ ... ] }`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use pce_protocol::{EngineOutcome, ParseException, ParseOutcome, ParsedMessage};

use crate::engine::ParserEngine;
use crate::error::{EngineError, EngineResult};

static RE_PARSER_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Field holding the line a message was parsed from.
pub const ORIGINAL_STRING_FIELD: &str = "original_string";
/// Field holding the name of the parser that produced a message.
pub const PARSER_NAME_FIELD: &str = "parser_name";

const BATCH_TEST_UNSUPPORTED: &str = "testing against a configuration batch is not supported";
const PREVIEW_CHARS: usize = 120;

// ── Configuration ─────────────────────────────────────────────

/// One regex parser definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegexParserConfig {
    pub parser_name: String,
    pub pattern: String,
    /// Parse every non-empty line of the input as its own message.
    #[serde(default)]
    pub split_lines: bool,
    /// Fields added to every parsed message. Captured fields take precedence.
    #[serde(default)]
    pub constants: BTreeMap<String, String>,
}

impl RegexParserConfig {
    pub fn from_json(configuration: &str) -> EngineResult<Self> {
        serde_json::from_str(configuration).map_err(|e| EngineError::InvalidJson(e.to_string()))
    }

    fn from_value(value: Value) -> EngineResult<Self> {
        serde_json::from_value(value).map_err(|e| EngineError::InvalidJson(e.to_string()))
    }

    fn compile(self) -> EngineResult<CompiledParser> {
        let regex =
            Regex::new(&self.pattern).map_err(|e| EngineError::InvalidPattern(e.to_string()))?;
        Ok(CompiledParser {
            name: self.parser_name,
            regex,
            split_lines: self.split_lines,
            constants: self.constants,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigBatch {
    parsers_configurations: Vec<Value>,
}

// ── Compiled parser ───────────────────────────────────────────

#[derive(Debug)]
struct CompiledParser {
    name: String,
    regex: Regex,
    split_lines: bool,
    constants: BTreeMap<String, String>,
}

impl CompiledParser {
    /// Rules beyond structural validity.
    fn check(&self) -> EngineResult<()> {
        if !RE_PARSER_NAME.is_match(&self.name) {
            return Err(EngineError::InvalidParserName(self.name.clone()));
        }
        if self.regex.capture_names().flatten().next().is_none() {
            return Err(EngineError::NoNamedGroups(self.name.clone()));
        }
        Ok(())
    }

    fn parse(&self, sample: &[u8]) -> EngineResult<Vec<ParsedMessage>> {
        let text =
            std::str::from_utf8(sample).map_err(|e| EngineError::InvalidUtf8(e.to_string()))?;

        if self.split_lines {
            text.lines()
                .filter(|l| !l.trim().is_empty())
                .map(|l| self.parse_line(l))
                .collect()
        } else {
            let line = text.trim_end_matches(['\r', '\n']);
            Ok(vec![self.parse_line(line)?])
        }
    }

    fn parse_line(&self, line: &str) -> EngineResult<ParsedMessage> {
        let caps = self
            .regex
            .captures(line)
            .ok_or_else(|| EngineError::NoMatch {
                parser: self.name.clone(),
                input: preview(line),
            })?;

        let mut message = ParsedMessage::new();
        for name in self.regex.capture_names().flatten() {
            if let Some(m) = caps.name(name) {
                message.insert(name.to_string(), Value::String(m.as_str().to_string()));
            }
        }
        for (key, value) in &self.constants {
            message
                .entry(key.clone())
                .or_insert_with(|| Value::String(value.clone()));
        }
        message.insert(ORIGINAL_STRING_FIELD.into(), Value::String(line.to_string()));
        message.insert(PARSER_NAME_FIELD.into(), Value::String(self.name.clone()));
        Ok(message)
    }
}

fn preview(line: &str) -> String {
    if line.chars().count() <= PREVIEW_CHARS {
        return line.to_string();
    }
    let cut: String = line.chars().take(PREVIEW_CHARS).collect();
    format!("{cut}...")
}

// ── Engine ────────────────────────────────────────────────────

/// Stateless regex-based `ParserEngine`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexParserEngine;

impl RegexParserEngine {
    pub fn new() -> Self {
        Self
    }

    /// JSON schema of the configuration language accepted by this engine.
    pub fn config_schema() -> String {
        let schema = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "regex parser configuration",
            "type": "object",
            "properties": {
                "parser_name": {
                    "type": "string",
                    "pattern": "^[A-Za-z0-9_-]+$",
                    "description": "Unique name of the parser"
                },
                "pattern": {
                    "type": "string",
                    "description": "Regular expression with named capture groups, one field per group"
                },
                "split_lines": {
                    "type": "boolean",
                    "default": false,
                    "description": "Parse each non-empty line of the input as its own message"
                },
                "constants": {
                    "type": "object",
                    "additionalProperties": { "type": "string" },
                    "description": "Fields added to every parsed message"
                }
            },
            "required": ["parser_name", "pattern"],
            "additionalProperties": false
        });
        serde_json::to_string_pretty(&schema).unwrap_or_else(|_| schema.to_string())
    }

    fn compile_checked(configuration: &str) -> EngineResult<CompiledParser> {
        let parser = RegexParserConfig::from_json(configuration)?.compile()?;
        parser.check()?;
        Ok(parser)
    }

    fn check_batch(configurations: &str) -> EngineResult<usize> {
        let batch: ConfigBatch = serde_json::from_str(configurations)
            .map_err(|e| EngineError::InvalidJson(e.to_string()))?;
        if batch.parsers_configurations.is_empty() {
            return Err(EngineError::EmptyBatch);
        }

        let mut names = HashSet::new();
        let count = batch.parsers_configurations.len();
        for (index, value) in batch.parsers_configurations.into_iter().enumerate() {
            let parser = RegexParserConfig::from_value(value)
                .and_then(RegexParserConfig::compile)
                .and_then(|p| p.check().map(|()| p))
                .map_err(|e| EngineError::BatchMember {
                    index,
                    source: Box::new(e),
                })?;
            if !names.insert(parser.name.clone()) {
                return Err(EngineError::DuplicateParser(parser.name));
            }
        }
        Ok(count)
    }
}

impl ParserEngine for RegexParserEngine {
    fn create(&self, configuration: &str) -> EngineOutcome {
        match RegexParserConfig::from_json(configuration).and_then(RegexParserConfig::compile) {
            Ok(parser) => {
                tracing::debug!(parser = %parser.name, "parser created");
                EngineOutcome::ok()
            }
            Err(e) => EngineOutcome::error(e.to_string()),
        }
    }

    fn validate_configuration(&self, configuration: &str) -> EngineOutcome {
        match Self::compile_checked(configuration) {
            Ok(parser) => {
                tracing::debug!(parser = %parser.name, "configuration valid");
                EngineOutcome::ok()
            }
            Err(e) => {
                tracing::debug!(error = %e, "configuration invalid");
                EngineOutcome::error(e.to_string())
            }
        }
    }

    fn validate_configurations(&self, configurations: &str) -> EngineOutcome {
        match Self::check_batch(configurations) {
            Ok(count) => {
                tracing::debug!(count, "configuration batch valid");
                EngineOutcome::ok()
            }
            Err(e) => {
                tracing::debug!(error = %e, "configuration batch invalid");
                EngineOutcome::error(e.to_string())
            }
        }
    }

    fn test(
        &self,
        configuration: &str,
        configurations: Option<&str>,
        sample: &[u8],
    ) -> EngineOutcome {
        if configurations.is_some() {
            return EngineOutcome::error(BATCH_TEST_UNSUPPORTED);
        }

        let parser = match Self::compile_checked(configuration) {
            Ok(p) => p,
            Err(e) => return EngineOutcome::error(e.to_string()),
        };

        let result = match parser.parse(sample) {
            Ok(messages) => {
                tracing::debug!(parser = %parser.name, messages = messages.len(), "sample parsed");
                ParseOutcome::parsed(messages)
            }
            Err(e) => {
                tracing::debug!(parser = %parser.name, error = %e, "sample rejected");
                ParseOutcome::failed(ParseException::new(e.kind(), e.to_string()))
            }
        };
        EngineOutcome::tested(result)
    }
}
