//! Implementation of parser functions.
//!
//! One function per production of the location grammar.  Recursive
//! productions carry the current nesting depth and fail hard once it exceeds
//! the configured maximum.

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alphanumeric1, char, digit1, one_of},
    combinator::{map, opt, recognize, value},
    error::{context, ErrorKind, ParseError},
    multi::{many0_count, separated_list1},
    sequence::{delimited, pair, terminated},
    IResult, Parser,
};
use nom_language::error::VerboseError;

use crate::parser::ds::{CompositeKind, Infix, Leaf, LocationNode};

pub type Res<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// Code for parsing leaf locations.
pub mod leaf {
    use super::*;

    /// Sequence identifier in front of `:`, e.g., `J00089.1` or `NC_000001.11`.
    pub fn accession(input: &str) -> Res<'_, &str> {
        context(
            "accession",
            recognize(pair(
                alphanumeric1,
                many0_count(pair(one_of("_.-"), alphanumeric1)),
            )),
        )
        .parse(input)
    }

    /// Bound token with optional fuzzy marker, e.g., `<123`.
    pub fn position(input: &str) -> Res<'_, &str> {
        context("position", recognize(pair(opt(one_of("<>")), digit1))).parse(input)
    }

    pub fn infix(input: &str) -> Res<'_, Infix> {
        alt((
            value(Infix::Range, tag("..")),
            value(Infix::OneOf, tag(".")),
            value(Infix::Site, tag("^")),
        ))
        .parse(input)
    }

    pub fn leaf(input: &str) -> Res<'_, Leaf> {
        let (rest, accession) = opt(terminated(accession, char(':'))).parse(input)?;
        let (rest, start) = position(rest)?;
        let (rest, tail) = opt(pair(infix, position)).parse(rest)?;

        let leaf = match tail {
            Some((infix, end)) => Leaf {
                accession: accession.map(str::to_owned),
                start_token: start.to_owned(),
                end_token: end.to_owned(),
                infix: Some(infix),
            },
            None => Leaf {
                accession: accession.map(str::to_owned),
                start_token: start.to_owned(),
                end_token: start.to_owned(),
                infix: None,
            },
        };
        Ok((rest, leaf))
    }
}

/// Code for parsing operator calls and whole locations.
pub mod operator {
    use super::*;

    fn check_depth(input: &str, depth: usize, max_depth: usize) -> Res<'_, ()> {
        if depth > max_depth {
            Err(nom::Err::Failure(VerboseError::from_error_kind(
                input,
                ErrorKind::TooLarge,
            )))
        } else {
            Ok((input, ()))
        }
    }

    pub fn composite_kind(input: &str) -> Res<'_, CompositeKind> {
        terminated(
            alt((
                value(CompositeKind::Join, tag("join")),
                value(CompositeKind::Order, tag("order")),
            )),
            char('('),
        )
        .parse(input)
    }

    /// `complement(location)`, exactly one child.
    pub fn complement(input: &str, depth: usize, max_depth: usize) -> Res<'_, LocationNode> {
        context(
            "complement",
            map(
                delimited(
                    tag("complement("),
                    |i| location(i, depth + 1, max_depth),
                    char(')'),
                ),
                LocationNode::complement,
            ),
        )
        .parse(input)
    }

    /// `join(location,...)` or `order(location,...)`, one or more children.
    pub fn composite(input: &str, depth: usize, max_depth: usize) -> Res<'_, LocationNode> {
        let (rest, kind) = composite_kind(input)?;
        let (rest, parts) = context(
            kind.as_str(),
            terminated(
                separated_list1(char(','), |i| location(i, depth + 1, max_depth)),
                char(')'),
            ),
        )
        .parse(rest)?;
        Ok((rest, LocationNode::Composite { kind, parts }))
    }

    pub fn location(input: &str, depth: usize, max_depth: usize) -> Res<'_, LocationNode> {
        let (input, _) = check_depth(input, depth, max_depth)?;
        alt((
            |i| complement(i, depth, max_depth),
            |i| composite(i, depth, max_depth),
            map(super::leaf::leaf, LocationNode::Leaf),
        ))
        .parse(input)
    }
}
