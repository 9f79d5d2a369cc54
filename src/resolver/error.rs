//! Error type definition.

use thiserror::Error;

use crate::sequences::MoleculeType;

/// Error type for resolving locations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no location given")]
    NullLocation,
    #[error("no sequence given")]
    NullSequence,
    #[error("location has no resolver attached and none was given")]
    DetachedResolver,
    #[error("location refers to {found} but sequence is {expected}")]
    AccessionMismatch { expected: String, found: String },
    #[error("no sequence for accession {0} among the referenced sequences")]
    UnresolvedAccession(String),
    #[error("referenced sequence {0} is {1:?} but the source sequence is {2:?}")]
    MoleculeMismatch(String, MoleculeType, MoleculeType),
    #[error("start {0} is after end {1} in range {0}..{1}")]
    InvertedRange(i64, i64),
    #[error("site {0}^{1} is not between adjacent residues")]
    NonAdjacentSite(i64, i64),
    #[error("{0} location without parts")]
    EmptyComposite(String),
    #[error("location is nested deeper than {0} levels")]
    DepthExceeded(usize),
    #[error(transparent)]
    Token(#[from] crate::token::Error),
    #[error(transparent)]
    Sequence(#[from] crate::sequences::Error),
}
