use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

/// Argument shape the assistant is asked to fill in for every `simple_tool` call.
///
/// Tiers are strictly additive: each one requires every field of the tier
/// below it plus its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

#[derive(Debug, Error)]
#[error("unknown complexity tier '{0}' (expected simple, medium or complex)")]
pub struct ParseComplexityError(String);

impl Complexity {
    pub const ALL: [Complexity; 3] = [Complexity::Simple, Complexity::Medium, Complexity::Complex];

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Medium => "medium",
            Complexity::Complex => "complex",
        }
    }

    /// Phrase appended to the user message. Descriptive only.
    pub fn hint(&self) -> &'static str {
        match self {
            Complexity::Simple => "just use the basic argument",
            Complexity::Medium => "include priority and category information",
            Complexity::Complex => "include full metadata with tags, timestamp, and source",
        }
    }

    /// JSON Schema sent to the service as the tool's `parameters`.
    pub fn schema(&self) -> Value {
        match self {
            Complexity::Simple => json!({
                "type": "object",
                "properties": {
                    "arg": { "type": "string" }
                },
                "required": ["arg"]
            }),
            Complexity::Medium => json!({
                "type": "object",
                "properties": {
                    "arg": { "type": "string" },
                    "priority": { "type": "integer", "minimum": 1, "maximum": 5 },
                    "category": { "type": "string", "enum": ["A", "B", "C"] }
                },
                "required": ["arg", "priority", "category"]
            }),
            Complexity::Complex => json!({
                "type": "object",
                "properties": {
                    "arg": { "type": "string" },
                    "priority": { "type": "integer", "minimum": 1, "maximum": 5 },
                    "category": { "type": "string", "enum": ["A", "B", "C"] },
                    "metadata": {
                        "type": "object",
                        "properties": {
                            "tags": { "type": "array", "items": { "type": "string" } },
                            "timestamp": { "type": "string", "format": "date-time" },
                            "source": { "type": "string" }
                        },
                        "required": ["tags", "timestamp", "source"]
                    }
                },
                "required": ["arg", "priority", "category", "metadata"]
            }),
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Complexity {
    type Err = ParseComplexityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Complexity::Simple),
            "medium" => Ok(Complexity::Medium),
            "complex" => Ok(Complexity::Complex),
            other => Err(ParseComplexityError(other.to_string())),
        }
    }
}
