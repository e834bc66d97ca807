//! Identifier tokens used inside a game manifest.
//!
//! Manifest identifiers are later used as lookup keys by the deployment
//! pipeline, so they are restricted to ASCII letters, digits, hyphen and
//! underscore. Quotes, separators, whitespace and SQL metacharacters are
//! rejected at construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Maximum length of any identifier token
pub const MAX_TOKEN_LENGTH: usize = 100;

/// Returns true if `value` is a non-empty token made of `[A-Za-z0-9_-]`.
pub fn is_valid_token(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

macro_rules! define_token_id {
    ($name:ident, $label:literal) => {
        #[doc = concat!("A validated ", $label, " token.")]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Create a new ", $label, ".")]
            ///
            /// # Errors
            ///
            /// Returns `DomainError::InvalidId` if the value is empty, longer
            /// than [`MAX_TOKEN_LENGTH`], or contains characters outside
            /// `[A-Za-z0-9_-]`.
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                if value.chars().count() > MAX_TOKEN_LENGTH {
                    return Err(DomainError::invalid_id(format!(
                        "{} cannot exceed {} characters",
                        $label, MAX_TOKEN_LENGTH
                    )));
                }
                if !is_valid_token(&value) {
                    return Err(DomainError::invalid_id(format!(
                        "{} must contain only letters, numbers, hyphens and underscores",
                        $label
                    )));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_token_id!(GameId, "game ID");
define_token_id!(SceneId, "scene ID");
define_token_id!(CharacterId, "character ID");
define_token_id!(QuestionId, "question ID");
define_token_id!(OptionId, "option ID");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_token_alphabet() {
        assert!(SceneId::new("intro").is_ok());
        assert!(SceneId::new("scene_01-b").is_ok());
        assert!(GameId::new("ABC123").is_ok());
    }

    #[test]
    fn rejects_control_syntax() {
        for bad in [
            "",
            "intro scene",
            "intro'--",
            "a;b",
            "1 OR 1=1",
            "x\"y",
            "path/to",
            "dot.ted",
            "ääkkönen",
        ] {
            assert!(SceneId::new(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn rejects_overlong_token() {
        let long = "a".repeat(MAX_TOKEN_LENGTH + 1);
        let err = CharacterId::new(long).unwrap_err();
        assert!(err.to_string().contains("cannot exceed"));
        assert!(CharacterId::new("a".repeat(MAX_TOKEN_LENGTH)).is_ok());
    }

    #[test]
    fn serde_round_trip_validates() {
        let id: QuestionId = serde_json::from_str("\"q1\"").unwrap();
        assert_eq!(id.as_str(), "q1");
        assert!(serde_json::from_str::<QuestionId>("\"q 1\"").is_err());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"q1\"");
    }
}
