//! The [`Render`] capability and the closed set of [`Renderable`] content.

use std::{fmt, io::Write};

use crate::{Group, Node, Result, format::escape_html};

/// Anything that can serialize itself as markup into a sink.
///
/// Rendering is a single synchronous, depth-first pass; the first failure
/// aborts the remaining output.
pub trait Render {
    /// Write this content to `w`.
    fn render(&self, w: &mut dyn Write) -> Result<()>;

    /// Render into a fresh string.
    fn render_to_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.render(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Blanket implementation for references.
impl<T: Render + ?Sized> Render for &T {
    fn render(&self, w: &mut dyn Write) -> Result<()> {
        (*self).render(w)
    }
}

/// Blanket implementation for Box.
impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self, w: &mut dyn Write) -> Result<()> {
        self.as_ref().render(w)
    }
}

/// A piece of content a node can hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Renderable {
    /// A markup element.
    Node(Node),
    /// Text written verbatim.
    Text(String),
    /// Text written with HTML-significant characters escaped.
    Escaped(String),
    /// Content rendered in sequence without a wrapping element.
    Group(Group),
    /// No content. Containers skip it without rendering anything.
    #[default]
    Absent,
}

impl Renderable {
    /// Whether this is the no-content variant.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl Render for Renderable {
    fn render(&self, w: &mut dyn Write) -> Result<()> {
        match self {
            Self::Node(node) => node.render(w),
            Self::Text(text) => Ok(w.write_all(text.as_bytes())?),
            Self::Escaped(text) => Ok(w.write_all(escape_html(text).as_bytes())?),
            Self::Group(group) => group.render(w),
            Self::Absent => Ok(()),
        }
    }
}

impl From<Node> for Renderable {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Group> for Renderable {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

impl<T: Into<Renderable>> From<Option<T>> for Renderable {
    fn from(content: Option<T>) -> Self {
        content.map_or(Self::Absent, Into::into)
    }
}

/// Raw text, written without escaping.
pub fn text(content: impl Into<String>) -> Renderable {
    Renderable::Text(content.into())
}

/// Text with `&`, `<`, `>`, `'` and `"` escaped.
pub fn escaped(content: impl Into<String>) -> Renderable {
    Renderable::Escaped(content.into())
}

/// An error's message as raw text, for surfacing failures inline.
pub fn error_text(err: &dyn fmt::Display) -> Renderable {
    Renderable::Text(err.to_string())
}

/// No content.
pub fn absent() -> Renderable {
    Renderable::Absent
}
