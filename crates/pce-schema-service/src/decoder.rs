//! Sample-log descriptor decoding.
//!
//! A descriptor is a JSON string `{"encoding": ..., "log": ...}`. UTF-8
//! payloads are passed through as bytes; hex payloads are decoded two
//! digits per byte, in either letter case.

use serde::Deserialize;
use serde_json::json;
use std::sync::LazyLock;

use pce_protocol::{LogEncoding, SampleLogDescriptor};

use crate::error::{DecodeError, DecodeResult};

static TEST_SCHEMA: LazyLock<String> = LazyLock::new(|| {
    let tags: Vec<&str> = LogEncoding::ALL.iter().map(LogEncoding::as_str).collect();
    let schema = json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "sample log",
        "type": "object",
        "properties": {
            "encoding": {
                "type": "string",
                "enum": tags,
                "default": LogEncoding::Utf8String.as_str(),
                "description": "Encoding of the log payload"
            },
            "log": {
                "type": "string",
                "description": "Sample log, as plain text or as hexadecimal digits"
            }
        },
        "required": ["encoding", "log"]
    });
    serde_json::to_string_pretty(&schema).unwrap_or_else(|_| schema.to_string())
});

/// JSON schema describing the sample-log descriptor.
pub fn test_schema() -> &'static str {
    &TEST_SCHEMA
}

// Tag kept as a string so an unknown encoding is reported as such rather
// than as a malformed document.
#[derive(Debug, Deserialize)]
struct RawDescriptor {
    encoding: String,
    log: String,
}

/// Parse the serialized descriptor.
pub fn parse_descriptor(descriptor: &str) -> DecodeResult<SampleLogDescriptor> {
    let raw: RawDescriptor = serde_json::from_str(descriptor)
        .map_err(|e| DecodeError::MalformedDescriptor(e.to_string()))?;
    let encoding = LogEncoding::from_tag(&raw.encoding)
        .ok_or(DecodeError::UnsupportedEncoding(raw.encoding))?;
    Ok(SampleLogDescriptor {
        encoding,
        log: raw.log,
    })
}

/// Decode a serialized descriptor into the raw bytes of its log.
pub fn decode(descriptor: &str) -> DecodeResult<Vec<u8>> {
    decode_log(&parse_descriptor(descriptor)?)
}

/// Decode an already-parsed descriptor.
pub fn decode_log(descriptor: &SampleLogDescriptor) -> DecodeResult<Vec<u8>> {
    match descriptor.encoding {
        LogEncoding::Utf8String => Ok(descriptor.log.as_bytes().to_vec()),
        LogEncoding::HexString => decode_hex(&descriptor.log),
    }
}

fn decode_hex(digits: &str) -> DecodeResult<Vec<u8>> {
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(DecodeError::InvalidEncoding(format!(
            "Unrecognized character: {c}"
        )));
    }
    // All ASCII from here, so byte length is digit count.
    if digits.len() % 2 != 0 {
        return Err(DecodeError::InvalidEncoding(format!(
            "Invalid input length {}",
            digits.len()
        )));
    }
    hex::decode(digits).map_err(|e| DecodeError::InvalidEncoding(e.to_string()))
}
