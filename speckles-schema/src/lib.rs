//! Attribute-kind vocabulary for speckles.
//!
//! Element generators read catalogs written in these terms and emit one
//! typed setter family per attribute. The render engine in `speckles`
//! reuses the delimiter types directly.

mod choice;
mod delimiter;
mod error;
mod kind;

pub use choice::{Choice, ChoiceSet};
pub use delimiter::{Delimiter, PairDelimiters};
pub use error::SchemaError;
pub use kind::{AttributeKind, AttributeSpec};
