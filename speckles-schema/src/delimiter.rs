//! Separator configuration for list-valued attributes.

use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};

/// Separator placed between the values of a delimited attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Delimiter(Cow<'static, str>);

impl Delimiter {
    /// Single space (`class`, `rel`, `viewBox`).
    pub const SPACE: Self = Self::new(" ");

    /// Comma (`coords`, `accept`, `sizes`).
    pub const COMMA: Self = Self::new(",");

    /// Semicolon.
    pub const SEMICOLON: Self = Self::new(";");

    /// Create a delimiter from a static separator string.
    pub const fn new(separator: &'static str) -> Self {
        Self(Cow::Borrowed(separator))
    }

    /// Create a delimiter from a runtime separator, e.g. one read from a catalog.
    pub fn owned(separator: impl Into<String>) -> Self {
        Self(Cow::Owned(separator.into()))
    }

    /// The separator text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::SPACE
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Separators for key-value attributes such as `style`.
///
/// `pair` sits between a key and its value, `entry` between two pairs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct PairDelimiters {
    pub pair: Cow<'static, str>,
    pub entry: Cow<'static, str>,
}

impl PairDelimiters {
    /// `key:value;key:value`, the CSS declaration layout.
    pub const COLON_SEMICOLON: Self = Self::new(":", ";");

    pub const fn new(pair: &'static str, entry: &'static str) -> Self {
        Self {
            pair: Cow::Borrowed(pair),
            entry: Cow::Borrowed(entry),
        }
    }
}

impl Default for PairDelimiters {
    fn default() -> Self {
        Self::COLON_SEMICOLON
    }
}
