//! Markup element nodes.

use std::{borrow::Cow, collections::BTreeMap, io::Write};

use speckles_schema::{Delimiter, PairDelimiters};

use crate::{
    AttributeChoice, AttributeError, DelimitedSequence, KeyValueList, Render, Renderable, Result,
    attributes::Attributes,
};

/// A markup element: tag, typed attributes and ordered children.
///
/// Builder methods consume and return the node so calls chain. Attributes are
/// emitted in name order whatever order they were set in.
///
/// # Example
///
/// ```
/// use speckles::{Node, PairDelimiters, Render};
///
/// let div = Node::new("div")
///     .attr("id", "elt")
///     .key_value("style", PairDelimiters::COLON_SEMICOLON, "border-top", "1px solid blue")
///     .key_value("style", PairDelimiters::COLON_SEMICOLON, "color", "red")
///     .text("An example div");
///
/// assert_eq!(
///     div.render_to_string().unwrap(),
///     r#"<div id="elt" style="border-top:1px solid blue;color:red">An example div</div>"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    tag: Cow<'static, str>,
    self_closing: bool,
    attributes: Attributes,
    children: Vec<Renderable>,
}

impl Node {
    /// Create an element with an opening and a closing tag.
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            self_closing: false,
            attributes: Attributes::default(),
            children: Vec::new(),
        }
    }

    /// Create an element that emits only its opening tag (`<input>`).
    ///
    /// Children may still be attached but are never rendered.
    pub fn self_closing(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            self_closing: true,
            ..Self::new(tag)
        }
    }

    /// The element name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether only the opening tag is emitted.
    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    /// Children in insertion order, including absent slots.
    pub fn child_slots(&self) -> &[Renderable] {
        &self.children
    }

    /// The value `name` will render with, after merging all attribute kinds.
    ///
    /// `Some("")` means the attribute renders bare.
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes
            .merged()
            .remove(name)
            .map(Cow::into_owned)
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// Append a child. [`Renderable::Absent`] is kept as an empty slot.
    pub fn child(mut self, child: impl Into<Renderable>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append children in order.
    pub fn children<R: Into<Renderable>>(mut self, children: impl IntoIterator<Item = R>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append raw text.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Renderable::Text(content.into()))
    }

    /// Append HTML-escaped text.
    pub fn escaped(self, content: impl Into<String>) -> Self {
        self.child(Renderable::Escaped(content.into()))
    }

    // =========================================================================
    // Scalar attributes
    // =========================================================================

    /// Set a string attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.strings.insert(name.into(), value.into());
        self
    }

    /// Set string attributes from a flat `[name, value, name, value, ..]` list.
    ///
    /// # Panics
    ///
    /// Panics if `attrs` has an odd length.
    pub fn attrs(mut self, attrs: &[&str]) -> Self {
        assert_pairs(attrs);
        for pair in attrs.chunks_exact(2) {
            self.attributes
                .strings
                .insert(pair[0].to_string(), pair[1].to_string());
        }
        self
    }

    /// Set string attributes from name/value pairs.
    pub fn attrs_map<K, V>(mut self, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in attrs {
            self.attributes.strings.insert(name.into(), value.into());
        }
        self
    }

    /// Set an integer attribute.
    pub fn int_attr(mut self, name: impl Into<String>, value: i64) -> Self {
        self.attributes.ints.insert(name.into(), value);
        self
    }

    /// Set a float attribute, formatted with [`format_float`](crate::format_float).
    pub fn float_attr(mut self, name: impl Into<String>, value: f64) -> Self {
        self.attributes.floats.insert(name.into(), value);
        self
    }

    /// Set a single-character attribute (`accesskey`).
    pub fn char_attr(mut self, name: impl Into<String>, value: char) -> Self {
        self.attributes
            .strings
            .insert(name.into(), value.to_string());
        self
    }

    /// Set an enumerated attribute. An empty choice renders bare.
    pub fn choice_attr(mut self, name: impl Into<String>, choice: impl AttributeChoice) -> Self {
        self.attributes
            .strings
            .insert(name.into(), choice.attribute_value().to_string());
        self
    }

    // =========================================================================
    // Boolean attributes
    // =========================================================================

    /// Mark a boolean attribute present.
    pub fn bool_attr(self, name: impl Into<String>) -> Self {
        self.bool_attr_set(name, true)
    }

    /// Set a boolean attribute; `false` omits it from the output entirely.
    pub fn bool_attr_set(mut self, name: impl Into<String>, value: bool) -> Self {
        self.attributes.bools.insert(name.into(), value);
        self
    }

    /// Mark a boolean attribute present only when `condition` holds.
    pub fn if_bool_attr(self, condition: bool, name: impl Into<String>) -> Self {
        if condition { self.bool_attr(name) } else { self }
    }

    /// Drop `name` from every attribute kind.
    pub fn remove_attr(mut self, name: &str) -> Self {
        self.attributes.remove(name);
        self
    }

    // =========================================================================
    // Delimited attributes
    // =========================================================================

    /// Append values to a delimited attribute.
    ///
    /// The delimiter applies when the attribute is first created; later calls
    /// keep the existing one.
    pub fn delimited<V: Into<String>>(
        mut self,
        name: impl Into<String>,
        delimiter: Delimiter,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.delimited_entry(name, delimiter).add(values);
        self
    }

    /// Append the delimiter-separated pieces of `raw` (`"foo bar baz"`).
    pub fn delimited_parse(
        mut self,
        name: impl Into<String>,
        delimiter: Delimiter,
        raw: &str,
    ) -> Self {
        self.delimited_entry(name, delimiter).add_parsed(raw);
        self
    }

    /// Remove every occurrence of `values`; missing attributes are left alone.
    pub fn delimited_remove(mut self, name: &str, values: &[&str]) -> Self {
        if let Some(seq) = self.attributes.delimited.get_mut(name) {
            seq.remove(values);
        }
        self
    }

    fn delimited_entry(
        &mut self,
        name: impl Into<String>,
        delimiter: Delimiter,
    ) -> &mut DelimitedSequence<String> {
        self.attributes
            .delimited
            .entry(name.into())
            .or_insert_with(|| DelimitedSequence::new(delimiter))
    }

    // =========================================================================
    // Key-value attributes
    // =========================================================================

    /// Insert or update one entry of a key-value attribute.
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty.
    pub fn key_value(
        mut self,
        name: impl Into<String>,
        delimiters: PairDelimiters,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.key_value_entry(name, delimiters).add(key, value);
        self
    }

    /// Upsert the entries of `raw` (`"color: red; display: none;"`).
    ///
    /// # Panics
    ///
    /// Panics if `raw` is malformed; see [`KeyValueList::parse`].
    pub fn key_value_parse(
        mut self,
        name: impl Into<String>,
        delimiters: PairDelimiters,
        raw: &str,
    ) -> Self {
        let name = name.into();
        if let Err(err) = self.key_value_entry(name.clone(), delimiters).add_parsed(raw) {
            panic!("invalid '{name}' value {raw:?}: {err}");
        }
        self
    }

    /// Upsert entries from a flat `[key, value, key, value, ..]` list.
    ///
    /// # Panics
    ///
    /// Panics if `pairs` has an odd length or contains an empty key.
    pub fn key_value_pairs(
        mut self,
        name: impl Into<String>,
        delimiters: PairDelimiters,
        pairs: &[&str],
    ) -> Self {
        assert_pairs(pairs);
        let list = self.key_value_entry(name, delimiters);
        for pair in pairs.chunks_exact(2) {
            list.add(pair[0], pair[1]);
        }
        self
    }

    /// Upsert entries from a map, in key order.
    ///
    /// # Panics
    ///
    /// Panics if any key is empty.
    pub fn key_value_map<K, V>(
        mut self,
        name: impl Into<String>,
        delimiters: PairDelimiters,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let sorted: BTreeMap<String, String> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let list = self.key_value_entry(name, delimiters);
        for (key, value) in sorted {
            list.add(key, value);
        }
        self
    }

    /// Remove entries by key; missing keys and attributes are left alone.
    pub fn key_value_remove(mut self, name: &str, keys: &[&str]) -> Self {
        if let Some(list) = self.attributes.key_values.get_mut(name) {
            list.remove(keys);
        }
        self
    }

    fn key_value_entry(
        &mut self,
        name: impl Into<String>,
        delimiters: PairDelimiters,
    ) -> &mut KeyValueList {
        self.attributes
            .key_values
            .entry(name.into())
            .or_insert_with(|| KeyValueList::new(delimiters))
    }
}

fn assert_pairs(items: &[&str]) {
    if items.len() % 2 != 0 {
        panic!("{}", AttributeError::OddPairCount { count: items.len() });
    }
}

impl Render for Node {
    fn render(&self, w: &mut dyn Write) -> Result<()> {
        let attributes = self.attributes.merged();
        tracing::trace!(
            tag = %self.tag,
            attributes = attributes.len(),
            children = self.children.len(),
            "rendering node"
        );

        w.write_all(b"<")?;
        w.write_all(self.tag.as_bytes())?;
        for (name, value) in &attributes {
            w.write_all(b" ")?;
            w.write_all(name.as_bytes())?;
            if !value.is_empty() {
                w.write_all(b"=\"")?;
                w.write_all(value.as_bytes())?;
                w.write_all(b"\"")?;
            }
        }
        w.write_all(b">")?;

        if self.self_closing {
            return Ok(());
        }

        for child in &self.children {
            child.render(w)?;
        }

        w.write_all(b"</")?;
        w.write_all(self.tag.as_bytes())?;
        w.write_all(b">")?;
        Ok(())
    }
}
