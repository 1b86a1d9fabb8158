use std::io;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Failure while serializing a tree.
///
/// Attribute formatting never fails, so every render error bottoms out in
/// the sink rejecting a write.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write markup")]
    Io(#[from] io::Error),

    #[error("failed to render grouped content")]
    Group(#[source] Box<RenderError>),
}

impl RenderError {
    pub(crate) fn grouped(self) -> Self {
        Self::Group(Box::new(self))
    }

    /// The sink error at the bottom of any group wrapping.
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Io(err) => err,
            Self::Group(inner) => inner.io_error(),
        }
    }

    /// How many groups the failure propagated through.
    pub fn group_depth(&self) -> usize {
        match self {
            Self::Io(_) => 0,
            Self::Group(inner) => 1 + inner.group_depth(),
        }
    }
}

/// Malformed input to a composite attribute builder.
///
/// Builder methods on [`Node`](crate::Node) panic with this error's message;
/// the `parse`/`try_` forms on the attribute types return it.
#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum AttributeError {
    #[error("empty key in entry '{entry}'")]
    #[diagnostic(
        code(speckles::empty_key),
        help("every key-value entry needs a name before its separator")
    )]
    EmptyKey { entry: String },

    #[error("entry '{entry}' has no '{pair}' separator")]
    #[diagnostic(
        code(speckles::missing_pair_delimiter),
        help("write the entry as 'key{pair}value'")
    )]
    MissingPairDelimiter { entry: String, pair: String },

    #[error("empty entry at position {position}")]
    #[diagnostic(
        code(speckles::empty_entry),
        help("only a single trailing separator is allowed")
    )]
    EmptyEntry { position: usize },

    #[error("expected name/value pairs, got {count} items")]
    #[diagnostic(code(speckles::odd_pair_count))]
    OddPairCount { count: usize },
}
