//! Markup tree construction and deterministic rendering.
//!
//! Trees are built bottom-up with fluent [`Node`] builders and structural
//! combinators, then serialized in one depth-first pass into any
//! [`std::io::Write`]. Output is byte-for-byte reproducible: attributes are
//! always emitted in name order regardless of kind or insertion order.
//!
//! # Module Organization
//!
//! - [`Node`] - Elements with typed attribute stores
//! - [`attributes`] - Composite attribute builders ([`DelimitedSequence`], [`KeyValueList`])
//! - [`Renderable`], [`Render`] - The content variants and the render capability
//! - [`combinators`] - Group, conditional, ternary and iteration helpers
//! - [`testing`] - Test utilities (feature-gated)
//!
//! # Example
//!
//! ```
//! use speckles::{Node, Render, range, text};
//!
//! let items = ["Home", "About"];
//! let list = Node::new("ul").child(range(items, |item| Node::new("li").child(text(item))));
//!
//! assert_eq!(
//!     list.render_to_string().unwrap(),
//!     "<ul><li>Home</li><li>About</li></ul>"
//! );
//! ```

pub mod attributes;
pub mod combinators;
mod error;
mod format;
mod node;
mod renderable;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use attributes::{AttributeChoice, AttributeValue, DelimitedSequence, KeyValueList};
pub use combinators::{
    Group, Producer, defer, deferred_group, deferred_ternary, deferred_when, group, range,
    range_indexed, ternary, when,
};
pub use error::{AttributeError, RenderError, Result};
pub use format::{escape_html, format_float};
pub use node::Node;
pub use renderable::{Render, Renderable, absent, error_text, escaped, text};
pub use speckles_schema::{Delimiter, PairDelimiters};
