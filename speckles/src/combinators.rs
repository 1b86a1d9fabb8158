//! Structural combinators for assembling trees from data.
//!
//! The deferred forms take zero-argument producers and call each one exactly
//! once, only when the combinator itself runs, so branches that are never
//! taken are never built. The eager forms are the same primitives fed with
//! content that already exists.
//!
//! ```
//! use speckles::{Node, Render, group, when};
//!
//! let logged_in = true;
//! let nav = Node::new("nav").child(group([
//!     when(!logged_in, [Node::new("a").attr("href", "/login").text("Log in")]),
//!     when(logged_in, [Node::new("a").attr("href", "/logout").text("Log out")]),
//! ]));
//! assert_eq!(
//!     nav.render_to_string().unwrap(),
//!     r#"<nav><a href="/logout">Log out</a></nav>"#
//! );
//! ```

use std::io::Write;

use crate::{Render, Renderable, Result};

/// A boxed producer, for deferred children of different closure types.
pub type Producer<'a> = Box<dyn FnOnce() -> Renderable + 'a>;

/// Box a closure as a [`Producer`].
pub fn defer<'a, R: Into<Renderable>>(f: impl FnOnce() -> R + 'a) -> Producer<'a> {
    Box::new(move || f().into())
}

/// Ordered content rendered without a wrapping element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    children: Vec<Renderable>,
}

impl Group {
    /// An empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child.
    pub fn child(mut self, child: impl Into<Renderable>) -> Self {
        self.push(child);
        self
    }

    /// Append a child (mutable).
    pub fn push(&mut self, child: impl Into<Renderable>) -> &mut Self {
        let child = child.into();
        if !child.is_absent() {
            self.children.push(child);
        }
        self
    }

    /// Children in render order.
    pub fn children(&self) -> &[Renderable] {
        &self.children
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the group renders nothing.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Render for Group {
    fn render(&self, w: &mut dyn Write) -> Result<()> {
        for child in &self.children {
            if let Err(err) = child.render(w) {
                tracing::debug!(error = %err, "grouped render failed");
                return Err(err.grouped());
            }
        }
        Ok(())
    }
}

impl<R: Into<Renderable>> FromIterator<R> for Group {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut group = Self::new();
        for child in iter {
            group.push(child);
        }
        group
    }
}

// =========================================================================
// Deferred primitives
// =========================================================================

/// Build a group by calling every producer once, in order.
///
/// Producers returning [`Renderable::Absent`] contribute nothing.
pub fn deferred_group<F, R>(producers: impl IntoIterator<Item = F>) -> Group
where
    F: FnOnce() -> R,
    R: Into<Renderable>,
{
    producers.into_iter().map(|produce| produce()).collect()
}

/// Call the producers only when `condition` holds.
pub fn deferred_when<F, R>(condition: bool, producers: impl IntoIterator<Item = F>) -> Renderable
where
    F: FnOnce() -> R,
    R: Into<Renderable>,
{
    if condition {
        Renderable::Group(deferred_group(producers))
    } else {
        Renderable::Absent
    }
}

/// Call exactly one of the two producers.
pub fn deferred_ternary<R1, R2>(
    condition: bool,
    when_true: impl FnOnce() -> R1,
    when_false: impl FnOnce() -> R2,
) -> Renderable
where
    R1: Into<Renderable>,
    R2: Into<Renderable>,
{
    if condition {
        when_true().into()
    } else {
        when_false().into()
    }
}

// =========================================================================
// Eager forms
// =========================================================================

/// Group already-built children.
pub fn group<R: Into<Renderable>>(children: impl IntoIterator<Item = R>) -> Group {
    deferred_group(children.into_iter().map(|child| move || child))
}

/// A group of `children` when `condition` holds, otherwise [`Renderable::Absent`].
///
/// Both outcomes render nothing when empty, but only absence is skipped by
/// containers without being visited.
pub fn when<R: Into<Renderable>>(
    condition: bool,
    children: impl IntoIterator<Item = R>,
) -> Renderable {
    deferred_when(condition, children.into_iter().map(|child| move || child))
}

/// Pick one of two already-built branches.
pub fn ternary(
    condition: bool,
    when_true: impl Into<Renderable>,
    when_false: impl Into<Renderable>,
) -> Renderable {
    deferred_ternary(condition, || when_true, || when_false)
}

/// Map each value to content, preserving order.
pub fn range<T, R>(values: impl IntoIterator<Item = T>, f: impl FnMut(T) -> R) -> Group
where
    R: Into<Renderable>,
{
    group(values.into_iter().map(f))
}

/// Like [`range`], passing each value's zero-based index as well.
pub fn range_indexed<T, R>(
    values: impl IntoIterator<Item = T>,
    mut f: impl FnMut(usize, T) -> R,
) -> Group
where
    R: Into<Renderable>,
{
    group(values.into_iter().enumerate().map(|(i, value)| f(i, value)))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{Node, RenderError, testing::FailingWriter, text};

    #[test]
    fn test_group_renders_in_order() {
        let g = group([text("a"), text("b"), text("c")]);
        assert_eq!(g.render_to_string().unwrap(), "abc");
    }

    #[test]
    fn test_when_false_is_absent() {
        assert!(when(false, [text("x")]).is_absent());
        assert!(matches!(when(true, [text("x")]), Renderable::Group(_)));
    }

    #[test]
    fn test_when_true_empty_is_not_absent() {
        let empty: [Renderable; 0] = [];
        let g = when(true, empty);
        assert!(!g.is_absent());
        assert_eq!(g.render_to_string().unwrap(), "");
    }

    #[test]
    fn test_group_of_conditionals() {
        let g = group([when(false, [text("A")]), when(true, [text("B")])]);
        assert_eq!(g.render_to_string().unwrap(), text("B").render_to_string().unwrap());
    }

    #[test]
    fn test_group_skips_absent() {
        let g = group([text("a"), Renderable::Absent, text("b")]);
        assert_eq!(g.len(), 2);
        assert_eq!(g.render_to_string().unwrap(), "ab");
    }

    #[test]
    fn test_ternary_picks_branch() {
        let yes = ternary(true, text("yes"), text("no"));
        let no = ternary(false, text("yes"), Node::new("em").text("no"));
        assert_eq!(yes.render_to_string().unwrap(), "yes");
        assert_eq!(no.render_to_string().unwrap(), "<em>no</em>");
    }

    #[test]
    fn test_range_preserves_order() {
        let g = range([5, 6, 7], |i| Node::new("li").text(format!("Item {i}")));
        assert_eq!(
            g.render_to_string().unwrap(),
            "<li>Item 5</li><li>Item 6</li><li>Item 7</li>"
        );
    }

    #[test]
    fn test_range_indexed() {
        let g = range_indexed(["a", "b"], |i, v| text(format!("{i}:{v};")));
        assert_eq!(g.render_to_string().unwrap(), "0:a;1:b;");
    }

    #[test]
    fn test_range_callback_may_return_absent() {
        let g = range(1..=5, |n| (n % 2 == 1).then(|| text(n.to_string())));
        assert_eq!(g.render_to_string().unwrap(), "135");
    }

    #[test]
    fn test_deferred_when_skips_producers() {
        let calls = Cell::new(0);
        let result = deferred_when(false, [|| {
            calls.set(calls.get() + 1);
            text("expensive")
        }]);
        assert!(result.is_absent());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_deferred_producers_called_once() {
        let calls = Cell::new(0);
        let g = deferred_group([
            defer(|| {
                calls.set(calls.get() + 1);
                text("a")
            }),
            defer(|| {
                calls.set(calls.get() + 1);
                Node::new("br")
            }),
            defer(|| Renderable::Absent),
        ]);
        assert_eq!(calls.get(), 2);
        assert_eq!(g.len(), 2);
        assert_eq!(g.render_to_string().unwrap(), "a<br></br>");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_deferred_ternary_builds_one_branch() {
        let built = Cell::new(0);
        let out = deferred_ternary(
            true,
            || text("cheap"),
            || {
                built.set(built.get() + 1);
                text("expensive")
            },
        );
        assert_eq!(out.render_to_string().unwrap(), "cheap");
        assert_eq!(built.get(), 0);
    }

    #[test]
    fn test_group_wraps_child_error() {
        let g = group([text("abc"), text("def")]);
        let mut sink = FailingWriter::after(4);
        let err = g.render(&mut sink).unwrap_err();
        assert!(matches!(err, RenderError::Group(_)));
        assert_eq!(err.group_depth(), 1);
        assert_eq!(sink.written(), "abcd");
    }

    #[test]
    fn test_nested_group_error_depth() {
        let g = group([Renderable::from(group([text("x")]))]);
        let mut sink = FailingWriter::after(0);
        let err = g.render(&mut sink).unwrap_err();
        assert_eq!(err.group_depth(), 2);
    }

    #[test]
    fn test_group_builder() {
        let g = Group::new().child(text("a")).child(None::<Node>).child(Node::new("hr"));
        assert_eq!(g.children().len(), 2);
        assert!(!g.is_empty());
    }
}
