//! Structural issues reported by the schema decoder.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// One step into a JSON document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "{}", key),
            PathSegment::Index(index) => write!(f, "{}", index),
        }
    }
}

/// Location of a value inside the manifest, rendered as `scenes.2.scene_id`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssuePath(Vec<PathSegment>);

impl IssuePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<PathSegment>> for IssuePath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }
}

impl fmt::Display for IssuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "(root)");
        }
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// What a length or range constraint was measured on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Number,
    StringLength,
    ArrayLength,
}

/// The constraint a value violated
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum IssueKind {
    /// Wrong JSON type; a missing field reports `received = "undefined"`
    #[error("{}", type_message(.expected, .received))]
    InvalidType {
        expected: &'static str,
        received: &'static str,
    },

    #[error("{}", bound_message(.measure, "at least", "greater than or equal to", .minimum))]
    TooSmall { measure: Measure, minimum: u64 },

    #[error("{}", bound_message(.measure, "at most", "less than or equal to", .maximum))]
    TooBig { measure: Measure, maximum: u64 },

    #[error("Invalid identifier: only letters, numbers, hyphens and underscores are allowed")]
    InvalidIdentifier,

    #[error("Invalid enum value. Expected {}, received '{received}'", quote_options(.options))]
    InvalidEnumValue {
        options: Vec<&'static str>,
        received: String,
    },

    #[error("Invalid discriminator value. Expected {}", quote_options(.options))]
    InvalidDiscriminator { options: Vec<&'static str> },

    #[error("Invalid version: expected semantic version major.minor.patch")]
    InvalidVersion,

    /// The input could not even be read as a JSON document
    #[error("Malformed input: {reason}")]
    Malformed { reason: String },
}

fn type_message(expected: &str, received: &str) -> String {
    if received == "undefined" {
        "Required".to_string()
    } else {
        format!("Expected {}, received {}", expected, received)
    }
}

fn bound_message(measure: &Measure, length_word: &str, number_word: &str, bound: &u64) -> String {
    match measure {
        Measure::Number => format!("Number must be {} {}", number_word, bound),
        Measure::StringLength => {
            format!("String must contain {} {} character(s)", length_word, bound)
        }
        Measure::ArrayLength => format!("Array must contain {} {} element(s)", length_word, bound),
    }
}

fn quote_options(options: &[&'static str]) -> String {
    options
        .iter()
        .map(|o| format!("'{}'", o))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// A single structural violation at a specific path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaIssue {
    pub path: IssuePath,
    pub kind: IssueKind,
}

impl SchemaIssue {
    pub fn new(path: impl Into<IssuePath>, kind: IssueKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// An issue that applies to the document as a whole
    pub fn at_root(kind: IssueKind) -> Self {
        Self::new(IssuePath::root(), kind)
    }
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// JSON type name of a value, as used in type mismatch messages
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
