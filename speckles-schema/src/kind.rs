//! Attribute kinds understood by the render engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ChoiceSet, Delimiter, PairDelimiters};

/// How an attribute's value is typed, stored and serialized.
///
/// Generators map each kind onto a family of setters on the element wrapper
/// and onto the matching attribute store of a `speckles::Node`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttributeKind {
    /// Present when true, absent when false.
    Bool,
    /// A single character.
    Char,
    /// Integer.
    Int,
    /// Floating point number.
    Number,
    /// Free text.
    String,
    /// Ordered values joined by a separator.
    Delimited { delimiter: Delimiter },
    /// Ordered key/value pairs.
    KeyValue(PairDelimiters),
    /// One value out of a closed set.
    Choices { choices: ChoiceSet },
}

impl AttributeKind {
    /// Space-separated list (`class`, `viewBox`).
    pub fn space_delimited() -> Self {
        Self::Delimited {
            delimiter: Delimiter::SPACE,
        }
    }

    /// Comma-separated list (`coords`).
    pub fn comma_delimited() -> Self {
        Self::Delimited {
            delimiter: Delimiter::COMMA,
        }
    }

    /// CSS-style declarations (`style`).
    pub fn key_value_colon_semicolon() -> Self {
        Self::KeyValue(PairDelimiters::COLON_SEMICOLON)
    }

    /// Returns the kind identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Int => "int",
            Self::Number => "number",
            Self::String => "string",
            Self::Delimited { .. } => "delimited",
            Self::KeyValue(_) => "key_value",
            Self::Choices { .. } => "choices",
        }
    }

    /// Whether values of this kind are collections supporting add/remove.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Delimited { .. } | Self::KeyValue(_))
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An attribute as described in an element catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AttributeSpec {
    /// Name as emitted in markup, e.g. `stroke-width`.
    pub key: String,
    #[serde(default)]
    pub description: String,
    pub kind: AttributeKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(AttributeKind::Bool.as_str(), "bool");
        assert_eq!(AttributeKind::space_delimited().as_str(), "delimited");
        assert_eq!(AttributeKind::key_value_colon_semicolon().to_string(), "key_value");
    }

    #[test]
    fn test_is_composite() {
        assert!(AttributeKind::comma_delimited().is_composite());
        assert!(AttributeKind::key_value_colon_semicolon().is_composite());
        assert!(!AttributeKind::Int.is_composite());
        assert!(!AttributeKind::Char.is_composite());
    }

    #[test]
    fn test_presets() {
        assert_eq!(
            AttributeKind::comma_delimited(),
            AttributeKind::Delimited {
                delimiter: Delimiter::COMMA
            }
        );
        assert_eq!(
            AttributeKind::key_value_colon_semicolon(),
            AttributeKind::KeyValue(PairDelimiters::new(":", ";"))
        );
    }
}
