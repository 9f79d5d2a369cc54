//! Parsing of feature-table location expressions.
//!
//! The accepted grammar is
//!
//! ```text
//! location      := leaf | operator_call
//! operator_call := "complement(" location ")"
//!                | ("join" | "order") "(" location ("," location)* ")"
//! leaf          := [accession ":"] position [infix position]
//! position      := ["<" | ">"] digits
//! infix         := ".." | "." | "^"
//! ```
//!
//! Matching is case-sensitive and no whitespace is allowed anywhere.

mod display;
mod ds;
mod error;
pub(crate) mod parse_funcs;

use std::str::FromStr;

use log::debug;
use nom::{combinator::all_consuming, error::ErrorKind, Parser};
use nom_language::error::{convert_error, VerboseError, VerboseErrorKind};
use serde::{Deserialize, Serialize};

pub use crate::parser::ds::*;
pub use crate::parser::error::Error;

/// Default maximal operator nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration for the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximal nesting of `complement`/`join`/`order` operators.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parse a location expression with the default configuration.
///
/// # Args
///
/// * `input` -- the expression, `None` if the caller has none
pub fn parse(input: Option<&str>) -> Result<LocationNode, Error> {
    parse_with_config(input, &Config::default())
}

/// Parse a location expression.
///
/// # Args
///
/// * `input` -- the expression, `None` if the caller has none
/// * `config` -- parser configuration
pub fn parse_with_config(input: Option<&str>, config: &Config) -> Result<LocationNode, Error> {
    let input = input.ok_or(Error::NullInput)?;
    if input.is_empty() {
        return Err(Error::MalformedGrammar(
            input.to_string(),
            "empty location".to_string(),
        ));
    }

    let max_depth = config.max_depth;
    let result = all_consuming(|i| parse_funcs::operator::location(i, 0, max_depth)).parse(input);
    match result {
        Ok((_, node)) => Ok(node),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            if is_too_deep(&e) {
                debug!("location nested deeper than {}: {}", max_depth, input);
                Err(Error::DepthExceeded(max_depth))
            } else {
                debug!("could not parse location {}", input);
                Err(Error::MalformedGrammar(
                    input.to_string(),
                    convert_error(input, e),
                ))
            }
        }
        Err(nom::Err::Incomplete(_)) => Err(Error::MalformedGrammar(
            input.to_string(),
            "incomplete input".to_string(),
        )),
    }
}

fn is_too_deep(e: &VerboseError<&str>) -> bool {
    e.errors
        .iter()
        .any(|(_, kind)| matches!(kind, VerboseErrorKind::Nom(ErrorKind::TooLarge)))
}

impl FromStr for LocationNode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(Some(s))
    }
}
