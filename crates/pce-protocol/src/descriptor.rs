//! Sample-log descriptors and their encoding tags.

use serde::{Deserialize, Serialize};

/// How the `log` payload of a sample-log descriptor is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogEncoding {
    /// Plain text, sent to the engine as its UTF-8 bytes.
    Utf8String,
    /// Hexadecimal digits, two per byte.
    HexString,
}

impl LogEncoding {
    pub const ALL: [LogEncoding; 2] = [Self::Utf8String, Self::HexString];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utf8String => "utf8_string",
            Self::HexString => "hex_string",
        }
    }

    /// Look up an encoding by its wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == tag)
    }
}

impl std::fmt::Display for LogEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sample log submitted for a dry-run parse.
///
/// Travels as a serialized JSON string, e.g.
/// `{"encoding":"hex_string","log":"64756D6D79"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleLogDescriptor {
    pub encoding: LogEncoding,
    pub log: String,
}

impl SampleLogDescriptor {
    pub fn utf8(log: impl Into<String>) -> Self {
        Self {
            encoding: LogEncoding::Utf8String,
            log: log.into(),
        }
    }

    pub fn hex(log: impl Into<String>) -> Self {
        Self {
            encoding: LogEncoding::HexString,
            log: log.into(),
        }
    }

    /// Serialize into the string form accepted by the test operation.
    pub fn to_json_string(&self) -> String {
        serde_json::json!({
            "encoding": self.encoding.as_str(),
            "log": self.log,
        })
        .to_string()
    }
}
