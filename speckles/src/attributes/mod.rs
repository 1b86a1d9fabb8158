//! Attribute storage for [`Node`](crate::Node).
//!
//! Each attribute kind lives in its own name-sorted store. At render time the
//! stores are merged in a fixed order, so a name written through two kinds
//! resolves to the later kind:
//!
//! integer → float → string → delimited → key-value → boolean
//!
//! - [`DelimitedSequence`] - values joined by a [`Delimiter`](crate::Delimiter)
//! - [`KeyValueList`] - ordered pairs joined by [`PairDelimiters`](crate::PairDelimiters)
//! - [`AttributeChoice`] - values of enumerated attributes
//! - [`AttributeValue`] - element formatting inside composite attributes

mod delimited;
mod key_value;

use std::{borrow::Cow, collections::BTreeMap, fmt};

pub use delimited::DelimitedSequence;
pub use key_value::KeyValueList;

use crate::format::format_float;

/// A value of an enumerated attribute.
///
/// Generated choice enums implement this to hand the node the exact text to
/// emit. An empty value renders the attribute bare (`<div popover>`).
pub trait AttributeChoice {
    fn attribute_value(&self) -> &str;
}

impl AttributeChoice for str {
    fn attribute_value(&self) -> &str {
        self
    }
}

impl AttributeChoice for String {
    fn attribute_value(&self) -> &str {
        self
    }
}

impl AttributeChoice for speckles_schema::Choice {
    fn attribute_value(&self) -> &str {
        &self.name
    }
}

impl<T: AttributeChoice + ?Sized> AttributeChoice for &T {
    fn attribute_value(&self) -> &str {
        (*self).attribute_value()
    }
}

/// How one element of a composite attribute is written.
///
/// Numbers format exactly as the numeric attribute kinds do, so `1.5e-7`
/// reads `1.5e-07` whether it is a float attribute or one entry of a
/// delimited list.
pub trait AttributeValue {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! display_attribute_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AttributeValue for $ty {
                fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

display_attribute_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, str, String,
);

impl AttributeValue for f64 {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_float(*self))
    }
}

impl AttributeValue for Cow<'_, str> {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl<T: AttributeValue + ?Sized> AttributeValue for &T {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (*self).fmt_value(f)
    }
}

/// Per-kind attribute stores of a single node.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Attributes {
    pub(crate) ints: BTreeMap<String, i64>,
    pub(crate) floats: BTreeMap<String, f64>,
    pub(crate) strings: BTreeMap<String, String>,
    pub(crate) delimited: BTreeMap<String, DelimitedSequence<String>>,
    pub(crate) key_values: BTreeMap<String, KeyValueList>,
    pub(crate) bools: BTreeMap<String, bool>,
}

impl Attributes {
    /// Final attribute values in name order.
    ///
    /// An empty value means the attribute is written bare (`disabled`).
    /// False booleans contribute nothing, not even an empty value.
    pub(crate) fn merged(&self) -> BTreeMap<&str, Cow<'_, str>> {
        let mut merged = BTreeMap::new();

        for (name, value) in &self.ints {
            merged.insert(name.as_str(), Cow::Owned(value.to_string()));
        }
        for (name, value) in &self.floats {
            merged.insert(name.as_str(), Cow::Owned(format_float(*value)));
        }
        for (name, value) in &self.strings {
            merged.insert(name.as_str(), Cow::Borrowed(value.as_str()));
        }
        for (name, seq) in &self.delimited {
            merged.insert(name.as_str(), Cow::Owned(seq.to_string()));
        }
        for (name, list) in &self.key_values {
            merged.insert(name.as_str(), Cow::Owned(list.to_string()));
        }
        for (name, &enabled) in &self.bools {
            if enabled {
                merged.insert(name.as_str(), Cow::Borrowed(""));
            }
        }

        merged
    }

    /// Drop `name` from every store.
    pub(crate) fn remove(&mut self, name: &str) {
        self.ints.remove(name);
        self.floats.remove(name);
        self.strings.remove(name);
        self.delimited.remove(name);
        self.key_values.remove(name);
        self.bools.remove(name);
    }
}
