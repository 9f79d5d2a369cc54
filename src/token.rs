//! Validation of raw bound tokens such as `123`, `<123` or `>45`.
//!
//! Leaf locations keep their bounds as raw text.  The tokens are only
//! interpreted here, every time a resolver needs a number, so that a token
//! overwritten after parsing is caught on its next use.

use serde::{Deserialize, Serialize};

pub use crate::token::error::Error;

mod error {
    /// Error type for interpreting bound tokens.
    #[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
    pub enum Error {
        #[error("bound token {0:?} has no magnitude")]
        EmptyMagnitude(String),
        #[error("bound token {0:?} is not a decimal magnitude")]
        InvalidMagnitude(String),
        #[error("bound token {0:?} does not fit into a 64 bit position")]
        NumericOverflow(String),
    }
}

/// Fuzzy marker in front of a bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuzzyMark {
    /// `<`, the true bound is at or before the stated value.
    Before,
    /// `>`, the true bound is at or after the stated value.
    After,
}

impl FuzzyMark {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(FuzzyMark::Before),
            '>' => Some(FuzzyMark::After),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            FuzzyMark::Before => '<',
            FuzzyMark::After => '>',
        }
    }
}

/// A validated bound: optional fuzzy marker and 1-based magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound {
    pub fuzzy: Option<FuzzyMark>,
    pub value: i64,
}

impl Bound {
    /// Whether `position` lies in the window the marker allows.
    pub fn admits(&self, position: i64) -> bool {
        match self.fuzzy {
            None => position == self.value,
            Some(FuzzyMark::Before) => position <= self.value,
            Some(FuzzyMark::After) => position >= self.value,
        }
    }
}

/// Split `token` into its fuzzy marker and magnitude.
///
/// At most one leading `<` or `>` is stripped.  The remainder must be a
/// non-empty run of ASCII digits that fits into an `i64`.
pub fn validate_and_extract(token: &str) -> Result<Bound, Error> {
    let mut chars = token.chars();
    let fuzzy = chars.next().and_then(FuzzyMark::from_char);
    let digits = if fuzzy.is_some() { &token[1..] } else { token };

    if !digits.bytes().any(|b| b.is_ascii_digit()) {
        return Err(Error::EmptyMagnitude(token.to_string()));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidMagnitude(token.to_string()));
    }

    let value = digits
        .parse::<i64>()
        .map_err(|_| Error::NumericOverflow(token.to_string()))?;

    Ok(Bound { fuzzy, value })
}
