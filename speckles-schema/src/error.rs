use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("duplicate choice '{name}'")]
    DuplicateChoice { name: String },
}
