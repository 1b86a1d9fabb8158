//! Delimiter-joined attribute values (`class`, `coords`, `viewBox`).

use std::fmt;

use speckles_schema::Delimiter;

use super::AttributeValue;

/// Ordered values serialized by joining their string forms with a delimiter.
///
/// Duplicates are allowed. Removal drops every matching occurrence and keeps
/// the survivors in their original order.
///
/// # Example
///
/// ```
/// use speckles::{DelimitedSequence, Delimiter};
///
/// let mut classes = DelimitedSequence::<String>::new(Delimiter::SPACE);
/// classes.add(["btn", "btn-primary", "hidden"]).remove(&["hidden"]);
/// assert_eq!(classes.to_string(), "btn btn-primary");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DelimitedSequence<T> {
    delimiter: Delimiter,
    values: Vec<T>,
}

impl<T> DelimitedSequence<T> {
    /// An empty sequence joined by `delimiter`.
    pub fn new(delimiter: Delimiter) -> Self {
        Self {
            delimiter,
            values: Vec::new(),
        }
    }

    /// Append values in the given order.
    pub fn add(&mut self, values: impl IntoIterator<Item = impl Into<T>>) -> &mut Self {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    /// Remove every element equal to any of `values`.
    pub fn remove<Q>(&mut self, values: &[Q]) -> &mut Self
    where
        T: PartialEq<Q>,
    {
        self.values.retain(|v| !values.iter().any(|r| v == r));
        self
    }

    /// Whether any element equals `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: PartialEq<Q>,
    {
        self.values.iter().any(|v| v == value)
    }

    /// Elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Number of elements, duplicates included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The separator written between elements.
    pub fn delimiter(&self) -> &Delimiter {
        &self.delimiter
    }
}

impl DelimitedSequence<String> {
    /// Split `raw` on the delimiter, trimming each piece and dropping empty ones.
    ///
    /// ```
    /// use speckles::{DelimitedSequence, Delimiter};
    ///
    /// let coords = DelimitedSequence::parse(Delimiter::COMMA, "260, 96,,209");
    /// assert_eq!(coords.to_string(), "260,96,209");
    /// ```
    pub fn parse(delimiter: Delimiter, raw: &str) -> Self {
        let mut seq = Self::new(delimiter);
        seq.add_parsed(raw);
        seq
    }

    /// Append the pieces of `raw` as [`parse`](Self::parse) would split them.
    pub fn add_parsed(&mut self, raw: &str) -> &mut Self {
        let pieces: Vec<String> = raw
            .split(self.delimiter.as_str())
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(String::from)
            .collect();
        self.values.extend(pieces);
        self
    }
}

impl<T: AttributeValue> fmt::Display for DelimitedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(self.delimiter.as_str())?;
            }
            value.fmt_value(f)?;
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a DelimitedSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
