//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Generation errors represent a malformed node table.
/// These are independent of CLI concerns.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("unknown arity code {code} for node: {node}")]
    UnknownArityCode { node: String, code: u8 },

    #[error("duplicate node name: {0}")]
    DuplicateNode(String),
}

pub type GenResult<T> = Result<T, GenError>;
