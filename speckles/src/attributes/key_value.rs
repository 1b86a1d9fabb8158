//! Key-value attribute values (`style`).

use std::fmt;

use indexmap::IndexMap;
use speckles_schema::PairDelimiters;

use crate::AttributeError;

/// Insertion-ordered `(key, value)` pairs with upsert semantics.
///
/// Adding an existing key replaces its value in place; removing a key closes
/// the gap so the remaining entries stay adjacent and in order.
///
/// # Example
///
/// ```
/// use speckles::{KeyValueList, PairDelimiters};
///
/// let mut style = KeyValueList::new(PairDelimiters::COLON_SEMICOLON);
/// style.add("color", "red").add("display", "none").add("color", "blue");
/// assert_eq!(style.to_string(), "color:blue;display:none");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValueList {
    delimiters: PairDelimiters,
    entries: IndexMap<String, String>,
}

impl KeyValueList {
    /// An empty list using `delimiters`.
    pub fn new(delimiters: PairDelimiters) -> Self {
        Self {
            delimiters,
            entries: IndexMap::new(),
        }
    }

    /// Parse text such as `"border-top: 1px solid blue; color: red;"`.
    ///
    /// Keys and values are trimmed and empty values are kept. A single
    /// trailing entry separator is tolerated; any other empty entry, an
    /// entry without the pair separator, or an empty key is rejected.
    pub fn parse(delimiters: PairDelimiters, raw: &str) -> Result<Self, AttributeError> {
        let mut list = Self::new(delimiters);
        list.add_parsed(raw)?;
        Ok(list)
    }

    /// Upsert every entry of `raw`, using the rules of [`parse`](Self::parse).
    ///
    /// Nothing is applied when `raw` is malformed.
    pub fn add_parsed(&mut self, raw: &str) -> Result<&mut Self, AttributeError> {
        let mut pieces: Vec<&str> = raw.split(&*self.delimiters.entry).collect();
        if pieces.last().is_some_and(|p| p.trim().is_empty()) {
            pieces.pop();
        }

        let mut parsed = Vec::with_capacity(pieces.len());
        for (position, piece) in pieces.into_iter().enumerate() {
            let entry = piece.trim();
            if entry.is_empty() {
                return Err(AttributeError::EmptyEntry { position });
            }
            let (key, value) = entry.split_once(&*self.delimiters.pair).ok_or_else(|| {
                AttributeError::MissingPairDelimiter {
                    entry: entry.to_string(),
                    pair: self.delimiters.pair.to_string(),
                }
            })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(AttributeError::EmptyKey {
                    entry: entry.to_string(),
                });
            }
            parsed.push((key.to_string(), value.trim().to_string()));
        }

        for (key, value) in parsed {
            self.entries.insert(key, value);
        }
        Ok(self)
    }

    /// Insert or update `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty. Use [`try_add`](Self::try_add) to get an
    /// error instead.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        if let Err(err) = self.try_add(key, value) {
            panic!("{err}");
        }
        self
    }

    /// Insert or update `key`, rejecting an empty key.
    pub fn try_add(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, AttributeError> {
        let key = key.into();
        let value = value.into();
        if key.is_empty() {
            return Err(AttributeError::EmptyKey {
                entry: format!("{}{}", self.delimiters.pair, value),
            });
        }
        // IndexMap keeps the original slot for an existing key.
        self.entries.insert(key, value);
        Ok(self)
    }

    /// Remove each present key; absent keys are ignored.
    pub fn remove<K: AsRef<str>>(&mut self, keys: impl IntoIterator<Item = K>) -> &mut Self {
        for key in keys {
            self.entries.shift_remove(key.as_ref());
        }
        self
    }

    /// Value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Zero-based position of `key` in render order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.get_index_of(key)
    }

    /// Entries in render order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The pair and entry separators.
    pub fn delimiters(&self) -> &PairDelimiters {
        &self.delimiters
    }
}

impl fmt::Display for KeyValueList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(&self.delimiters.entry)?;
            }
            f.write_str(key)?;
            f.write_str(&self.delimiters.pair)?;
            f.write_str(value)?;
        }
        Ok(())
    }
}
