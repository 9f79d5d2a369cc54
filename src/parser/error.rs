//! Error type definition.

use thiserror::Error;

/// Error type for parsing of location expressions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No input was given at all.
    #[error("no location expression given")]
    NullInput,
    /// Input does not match the location grammar.
    #[error("{0:?} is not a valid location expression: {1}")]
    MalformedGrammar(String, String),
    /// Operators are nested deeper than allowed.
    #[error("location expression is nested deeper than {0} levels")]
    DepthExceeded(usize),
}
