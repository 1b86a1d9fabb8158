//! Enumerated attribute values.

use serde::{Deserialize, Serialize};

use crate::SchemaError;

/// One permitted value of an enumerated attribute.
///
/// An empty `name` is a legal choice: it renders as a bare attribute
/// (`<div popover>`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Choice {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Choice {
    /// A choice with its catalog description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A closed set of [`Choice`]s with unique names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "Vec<Choice>", into = "Vec<Choice>")]
pub struct ChoiceSet {
    choices: Vec<Choice>,
}

impl ChoiceSet {
    /// Build a set, rejecting exact duplicate names.
    pub fn new(choices: Vec<Choice>) -> Result<Self, SchemaError> {
        for (i, choice) in choices.iter().enumerate() {
            if choices[..i].iter().any(|c| c.name == choice.name) {
                return Err(SchemaError::DuplicateChoice {
                    name: choice.name.clone(),
                });
            }
        }
        Ok(Self { choices })
    }

    /// Choices in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Choice> {
        self.choices.iter()
    }

    /// Number of choices.
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Whether the set has no choices.
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Choice named exactly `name`.
    pub fn get(&self, name: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.name == name)
    }

    /// The raw name a generator should case-convert into an identifier for `name`.
    ///
    /// The empty choice becomes `Empty`. A one-byte name that matches another
    /// choice in the set under Unicode case folding (`A` vs `a`, as in
    /// `<ol type>`, or `k` vs the Kelvin sign) is prefixed with `_upper_` or
    /// `_lower_` so both survive case-insensitive identifier conversion.
    pub fn identifier_stem(&self, name: &str) -> String {
        if name.is_empty() {
            return "Empty".to_string();
        }

        if let [byte] = name.as_bytes() {
            let collides = self
                .choices
                .iter()
                .any(|c| c.name != name && fold_eq(&c.name, name));
            if collides {
                let marker = if byte.is_ascii_uppercase() {
                    "_upper_"
                } else {
                    "_lower_"
                };
                return format!("{marker}{name}");
            }
        }

        name.to_string()
    }
}

/// Case-insensitive equality covering characters whose case mappings are not
/// symmetric (`ſ` uppercases to `S`, the Kelvin sign lowercases to `k`).
fn fold_eq(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase() || a.to_uppercase() == b.to_uppercase()
}

impl TryFrom<Vec<Choice>> for ChoiceSet {
    type Error = SchemaError;

    fn try_from(choices: Vec<Choice>) -> Result<Self, Self::Error> {
        Self::new(choices)
    }
}

impl From<ChoiceSet> for Vec<Choice> {
    fn from(set: ChoiceSet) -> Self {
        set.choices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ol_type() -> ChoiceSet {
        ChoiceSet::new(vec![
            Choice::new("a", "lowercase letters"),
            Choice::new("A", "uppercase letters"),
            Choice::new("i", "lowercase Roman numerals"),
            Choice::new("I", "uppercase Roman numerals"),
            Choice::new("1", "numbers"),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_choice_stem() {
        let set = ChoiceSet::new(vec![Choice::new("", "bare"), Choice::new("auto", "")]).unwrap();
        assert_eq!(set.identifier_stem(""), "Empty");
        assert_eq!(set.identifier_stem("auto"), "auto");
    }

    #[test]
    fn test_case_collision_stems() {
        let set = ol_type();
        assert_eq!(set.identifier_stem("a"), "_lower_a");
        assert_eq!(set.identifier_stem("A"), "_upper_A");
        assert_eq!(set.identifier_stem("I"), "_upper_I");
        assert_eq!(set.identifier_stem("1"), "1");
    }

    #[test]
    fn test_multi_char_names_never_prefixed() {
        let set = ChoiceSet::new(vec![Choice::new("rtl", ""), Choice::new("RTL", "")]).unwrap();
        assert_eq!(set.identifier_stem("rtl"), "rtl");
    }

    #[test]
    fn test_unicode_case_folding_collisions() {
        let kelvin = ChoiceSet::new(vec![Choice::new("k", ""), Choice::new("\u{212A}", "")]).unwrap();
        assert_eq!(kelvin.identifier_stem("k"), "_lower_k");
        assert_eq!(kelvin.identifier_stem("\u{212A}"), "\u{212A}");

        let long_s = ChoiceSet::new(vec![Choice::new("S", ""), Choice::new("\u{17F}", "")]).unwrap();
        assert_eq!(long_s.identifier_stem("S"), "_upper_S");
    }

    #[test]
    fn test_multi_byte_names_never_prefixed() {
        let set = ChoiceSet::new(vec![Choice::new("é", ""), Choice::new("É", "")]).unwrap();
        assert_eq!(set.identifier_stem("é"), "é");
        assert_eq!(set.identifier_stem("É"), "É");
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = ChoiceSet::new(vec![Choice::new("auto", ""), Choice::new("auto", "")])
            .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateChoice { name } if name == "auto"));
    }

    #[test]
    fn test_lookup() {
        let set = ol_type();
        assert_eq!(set.len(), 5);
        assert!(!set.is_empty());
        assert_eq!(set.get("I").map(|c| c.description.as_str()), Some("uppercase Roman numerals"));
        assert!(set.get("x").is_none());
    }
}
