//! Resolution of locations to positions and sequences.
//!
//! Resolution is stateless.  Every call validates the raw bound tokens of the
//! leaves it touches, so a token that was overwritten after parsing fails on
//! the next call rather than when it was written.

mod error;

use std::cmp::Ordering;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

pub use crate::resolver::error::Error;
use crate::{
    parser::{Infix, Leaf, LocationNode, DEFAULT_MAX_DEPTH},
    sequences::{ReferenceMap, Sequence, SubSequence},
    token::{validate_and_extract, Bound},
};

/// Trait for resolving locations.
///
/// Absent arguments are passed as `None` and rejected with `NullLocation`
/// or `NullSequence`.  A site `a^b` whose positions are not adjacent fails
/// every query with `NonAdjacentSite`.
pub trait LocationResolver {
    /// Effective start position.
    ///
    /// For `complement(...)` this is the end of the inner location, for
    /// `join`/`order` the smallest position covered by any part.
    fn get_start(&self, location: Option<&LocationNode>) -> Result<i64, Error>;

    /// Effective end position, see `get_start()`.
    fn get_end(&self, location: Option<&LocationNode>) -> Result<i64, Error>;

    /// Whether `position` lies in the window of the start bound, taking a
    /// fuzzy `<`/`>` marker into account.
    fn is_in_start(&self, location: Option<&LocationNode>, position: i64)
        -> Result<bool, Error>;

    /// Whether `position` lies in the window of the end bound.
    fn is_in_end(&self, location: Option<&LocationNode>, position: i64) -> Result<bool, Error>;

    /// Whether `position` lies between start and end, inclusive.
    fn is_in_range(&self, location: Option<&LocationNode>, position: i64)
        -> Result<bool, Error>;

    /// Extract the residues named by `location` from `sequence`.
    ///
    /// Leaves naming an accession other than the sequence's own fail with
    /// `AccessionMismatch`.
    fn get_sub_sequence(
        &self,
        location: Option<&LocationNode>,
        sequence: Option<&Sequence>,
    ) -> Result<SubSequence, Error>;

    /// Extract the residues named by `location`, looking up leaves with a
    /// foreign accession in `references`.
    ///
    /// # Args
    ///
    /// * `location` -- location to resolve
    /// * `sequence` -- sequence the location belongs to
    /// * `references` -- sequences by accession, may be absent if no foreign
    ///   accession is used
    fn get_sub_sequence_with_references(
        &self,
        location: Option<&LocationNode>,
        sequence: Option<&Sequence>,
        references: Option<&ReferenceMap>,
    ) -> Result<SubSequence, Error>;

    /// Order two locations by start, then by end.
    fn compare(
        &self,
        lhs: Option<&LocationNode>,
        rhs: Option<&LocationNode>,
    ) -> Result<Ordering, Error> {
        let (lhs_start, lhs_end) = (self.get_start(lhs)?, self.get_end(lhs)?);
        let (rhs_start, rhs_end) = (self.get_start(rhs)?, self.get_end(rhs)?);
        Ok(lhs_start.cmp(&rhs_start).then(lhs_end.cmp(&rhs_end)))
    }
}

/// Configuration for `Resolver`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximal nesting of operators that is resolved.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Where sequences for foreign accessions come from.
#[derive(Debug, Clone, Copy)]
enum Lookup<'a> {
    /// Only the primary sequence is available.
    Primary,
    /// Foreign accessions are looked up in the map.
    References(Option<&'a ReferenceMap>),
}

/// The default `LocationResolver`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolver {
    config: Config,
}

fn ordered((a, b): (Bound, Bound)) -> (Bound, Bound) {
    if a.value <= b.value {
        (a, b)
    } else {
        (b, a)
    }
}

/// Validated bounds of `leaf`; the two positions of a site must be adjacent.
fn leaf_bounds(leaf: &Leaf) -> Result<(Bound, Bound), Error> {
    let start = validate_and_extract(&leaf.start_token)?;
    let end = validate_and_extract(&leaf.end_token)?;
    if leaf.infix == Some(Infix::Site) && start.value.checked_add(1) != Some(end.value) {
        return Err(Error::NonAdjacentSite(start.value, end.value));
    }
    Ok((start, end))
}

impl Resolver {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn check_depth(&self, depth: usize) -> Result<(), Error> {
        if depth > self.config.max_depth {
            Err(Error::DepthExceeded(self.config.max_depth))
        } else {
            Ok(())
        }
    }

    /// Start and end bound of `node`, in this order.
    ///
    /// Both tokens of every leaf below `node` are validated.
    fn bounds(&self, node: &LocationNode, depth: usize) -> Result<(Bound, Bound), Error> {
        self.check_depth(depth)?;
        match node {
            LocationNode::Leaf(leaf) => leaf_bounds(leaf),
            LocationNode::Complement(inner) => {
                let (start, end) = self.bounds(inner, depth + 1)?;
                Ok((end, start))
            }
            LocationNode::Composite { kind, parts } => {
                let mut result: Option<(Bound, Bound)> = None;
                for part in parts {
                    let (lo, hi) = ordered(self.bounds(part, depth + 1)?);
                    result = Some(match result {
                        None => (lo, hi),
                        Some((min, max)) => (
                            if lo.value < min.value { lo } else { min },
                            if hi.value > max.value { hi } else { max },
                        ),
                    });
                }
                result.ok_or_else(|| Error::EmptyComposite(kind.to_string()))
            }
        }
    }

    fn extract(
        &self,
        node: &LocationNode,
        primary: &Sequence,
        lookup: Lookup<'_>,
        depth: usize,
    ) -> Result<SubSequence, Error> {
        self.check_depth(depth)?;
        match node {
            LocationNode::Leaf(leaf) => self.extract_leaf(leaf, primary, lookup),
            LocationNode::Complement(inner) => Ok(self
                .extract(inner, primary, lookup, depth + 1)?
                .reverse_complement()?),
            LocationNode::Composite { kind, parts } => {
                if parts.is_empty() {
                    return Err(Error::EmptyComposite(kind.to_string()));
                }
                let mut result = SubSequence::empty(primary.molecule());
                for part in parts {
                    result.extend(&self.extract(part, primary, lookup, depth + 1)?);
                }
                Ok(result)
            }
        }
    }

    /// Sequence that the residues of `leaf` are taken from.
    fn source<'a>(
        &self,
        leaf: &Leaf,
        primary: &'a Sequence,
        lookup: Lookup<'a>,
    ) -> Result<&'a Sequence, Error> {
        let source = match leaf.accession.as_deref() {
            None => primary,
            Some(accession) if accession == primary.id() => primary,
            Some(accession) => match lookup {
                Lookup::Primary => {
                    return Err(Error::AccessionMismatch {
                        expected: primary.id().to_string(),
                        found: accession.to_string(),
                    })
                }
                Lookup::References(references) => references
                    .and_then(|references| references.get(accession))
                    .ok_or_else(|| Error::UnresolvedAccession(accession.to_string()))?,
            },
        };

        if source.molecule() != primary.molecule() {
            return Err(Error::MoleculeMismatch(
                source.id().to_string(),
                source.molecule(),
                primary.molecule(),
            ));
        }
        Ok(source)
    }

    fn extract_leaf(
        &self,
        leaf: &Leaf,
        primary: &Sequence,
        lookup: Lookup<'_>,
    ) -> Result<SubSequence, Error> {
        let source = self.source(leaf, primary, lookup)?;
        let (start, end) = leaf_bounds(leaf)?;
        let (start, end) = (start.value, end.value);
        trace!("extracting {} from {}", leaf, source.id());

        match leaf.infix {
            None => Ok(source.sub_sequence(start, start)?),
            Some(Infix::Range) => {
                if start > end {
                    return Err(Error::InvertedRange(start, end));
                }
                Ok(source.sub_sequence(start, end)?)
            }
            // the residue is one of the named positions; take the whole window
            Some(Infix::OneOf) => Ok(source.sub_sequence(start.min(end), start.max(end))?),
            Some(Infix::Site) => {
                if !source.contains_position(start) || !source.contains_position(end) {
                    return Err(crate::sequences::Error::OutOfBounds {
                        id: source.id().to_string(),
                        start,
                        end,
                        len: source.len(),
                    }
                    .into());
                }
                Ok(SubSequence::empty(source.molecule()))
            }
        }
    }
}

impl LocationResolver for Resolver {
    fn get_start(&self, location: Option<&LocationNode>) -> Result<i64, Error> {
        let location = location.ok_or(Error::NullLocation)?;
        let start = self.bounds(location, 0)?.0.value;
        trace!("get_start({}) = {}", location, start);
        Ok(start)
    }

    fn get_end(&self, location: Option<&LocationNode>) -> Result<i64, Error> {
        let location = location.ok_or(Error::NullLocation)?;
        let end = self.bounds(location, 0)?.1.value;
        trace!("get_end({}) = {}", location, end);
        Ok(end)
    }

    fn is_in_start(
        &self,
        location: Option<&LocationNode>,
        position: i64,
    ) -> Result<bool, Error> {
        let location = location.ok_or(Error::NullLocation)?;
        let result = self.bounds(location, 0)?.0.admits(position);
        trace!("is_in_start({}, {}) = {}", location, position, result);
        Ok(result)
    }

    fn is_in_end(&self, location: Option<&LocationNode>, position: i64) -> Result<bool, Error> {
        let location = location.ok_or(Error::NullLocation)?;
        let result = self.bounds(location, 0)?.1.admits(position);
        trace!("is_in_end({}, {}) = {}", location, position, result);
        Ok(result)
    }

    fn is_in_range(
        &self,
        location: Option<&LocationNode>,
        position: i64,
    ) -> Result<bool, Error> {
        let location = location.ok_or(Error::NullLocation)?;
        let (lo, hi) = ordered(self.bounds(location, 0)?);
        let result = lo.value <= position && position <= hi.value;
        trace!("is_in_range({}, {}) = {}", location, position, result);
        Ok(result)
    }

    fn get_sub_sequence(
        &self,
        location: Option<&LocationNode>,
        sequence: Option<&Sequence>,
    ) -> Result<SubSequence, Error> {
        let location = location.ok_or(Error::NullLocation)?;
        let sequence = sequence.ok_or(Error::NullSequence)?;
        let result = self.extract(location, sequence, Lookup::Primary, 0)?;
        debug!(
            "get_sub_sequence({}, {}) = {} residues",
            location,
            sequence.id(),
            result.len()
        );
        Ok(result)
    }

    fn get_sub_sequence_with_references(
        &self,
        location: Option<&LocationNode>,
        sequence: Option<&Sequence>,
        references: Option<&ReferenceMap>,
    ) -> Result<SubSequence, Error> {
        let location = location.ok_or(Error::NullLocation)?;
        let sequence = sequence.ok_or(Error::NullSequence)?;
        let result = self.extract(location, sequence, Lookup::References(references), 0)?;
        debug!(
            "get_sub_sequence_with_references({}, {}, {} references) = {} residues",
            location,
            sequence.id(),
            references.map_or(0, |r| r.len()),
            result.len()
        );
        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use std::{cmp::Ordering, str::FromStr};

    use anyhow::Error;
    use pretty_assertions::assert_eq;
    use test_log::test;

    use super::{Config, LocationResolver, Resolver};
    use crate::{
        parser::{Leaf, LocationNode},
        resolver,
        sequences::{self, MoleculeType, ReferenceMap, Sequence},
        token,
    };

    fn loc(text: &str) -> LocationNode {
        LocationNode::from_str(text).unwrap()
    }

    //           1   5    10   15   20
    //           |   |    |    |    |
    // AB001     ATGCGTACGTTAGCCAGTAC
    fn primary() -> Sequence {
        Sequence::new("AB001", MoleculeType::Dna, "ATGCGTACGTTAGCCAGTAC").unwrap()
    }

    fn references() -> ReferenceMap {
        let mut result = ReferenceMap::new();
        result.insert(
            "J00089.1".to_string(),
            Sequence::new("J00089.1", MoleculeType::Dna, "GGGGCCCCAAAATTTT").unwrap(),
        );
        result.insert(
            "P1".to_string(),
            Sequence::new("P1", MoleculeType::Protein, "MKVL").unwrap(),
        );
        result
    }

    fn extract(text: &str) -> Result<String, resolver::Error> {
        let seq = primary();
        Resolver::default()
            .get_sub_sequence(Some(&loc(text)), Some(&seq))
            .map(|s| s.to_string())
    }

    fn extract_with_refs(text: &str) -> Result<String, resolver::Error> {
        let seq = primary();
        let refs = references();
        Resolver::default()
            .get_sub_sequence_with_references(Some(&loc(text)), Some(&seq), Some(&refs))
            .map(|s| s.to_string())
    }

    #[test]
    fn simple_range() -> Result<(), Error> {
        let resolver = Resolver::default();
        let node = loc("123..456");

        assert_eq!(resolver.get_start(Some(&node))?, 123);
        assert_eq!(resolver.get_end(Some(&node))?, 456);
        assert!(resolver.is_in_range(Some(&node), 300)?);
        assert!(resolver.is_in_range(Some(&node), 123)?);
        assert!(resolver.is_in_range(Some(&node), 456)?);
        assert!(!resolver.is_in_range(Some(&node), 500)?);
        assert!(!resolver.is_in_range(Some(&node), 122)?);
        assert!(resolver.is_in_start(Some(&node), 123)?);
        assert!(!resolver.is_in_start(Some(&node), 122)?);
        assert!(resolver.is_in_end(Some(&node), 456)?);
        assert!(!resolver.is_in_end(Some(&node), 457)?);

        Ok(())
    }

    #[test]
    fn fuzzy_bounds() -> Result<(), Error> {
        let resolver = Resolver::default();

        let node = loc("<123..456");
        assert!(resolver.is_in_start(Some(&node), 100)?);
        assert!(resolver.is_in_start(Some(&node), 123)?);
        assert!(!resolver.is_in_start(Some(&node), 124)?);
        assert_eq!(resolver.get_start(Some(&node))?, 123);

        let node = loc("123..>456");
        assert!(resolver.is_in_end(Some(&node), 500)?);
        assert!(resolver.is_in_end(Some(&node), 456)?);
        assert!(!resolver.is_in_end(Some(&node), 455)?);

        let node = loc(">5");
        assert_eq!(resolver.get_start(Some(&node))?, 5);
        assert_eq!(resolver.get_end(Some(&node))?, 5);
        assert!(resolver.is_in_start(Some(&node), 9)?);

        Ok(())
    }

    #[test]
    fn two_position_forms() -> Result<(), Error> {
        let resolver = Resolver::default();

        let node = loc("100.105");
        assert_eq!(resolver.get_start(Some(&node))?, 100);
        assert_eq!(resolver.get_end(Some(&node))?, 105);
        assert!(resolver.is_in_range(Some(&node), 103)?);

        let node = loc("123^124");
        assert_eq!(resolver.get_start(Some(&node))?, 123);
        assert_eq!(resolver.get_end(Some(&node))?, 124);

        Ok(())
    }

    #[test]
    fn site_must_be_adjacent_for_every_query() {
        let resolver = Resolver::default();
        let node = loc("join(1..3,4^6)");
        let expected = resolver::Error::NonAdjacentSite(4, 6);

        assert_eq!(resolver.get_start(Some(&node)), Err(expected.clone()));
        assert_eq!(resolver.get_end(Some(&node)), Err(expected.clone()));
        assert_eq!(resolver.is_in_start(Some(&node), 1), Err(expected.clone()));
        assert_eq!(resolver.is_in_end(Some(&node), 6), Err(expected.clone()));
        assert_eq!(resolver.is_in_range(Some(&node), 5), Err(expected));
        assert_eq!(
            resolver.get_sub_sequence(Some(&node), Some(&primary())),
            Err(resolver::Error::NonAdjacentSite(4, 6))
        );
    }

    #[test]
    fn complement_swaps_direction() -> Result<(), Error> {
        let resolver = Resolver::default();

        let node = loc("complement(100..200)");
        assert_eq!(resolver.get_start(Some(&node))?, 200);
        assert_eq!(resolver.get_end(Some(&node))?, 100);
        assert!(resolver.is_in_range(Some(&node), 150)?);
        assert!(!resolver.is_in_range(Some(&node), 201)?);

        let node = loc("complement(join(<1..50,60..>90))");
        assert_eq!(resolver.get_start(Some(&node))?, 90);
        assert_eq!(resolver.get_end(Some(&node))?, 1);
        assert!(resolver.is_in_start(Some(&node), 95)?);
        assert!(!resolver.is_in_start(Some(&node), 89)?);
        assert!(resolver.is_in_end(Some(&node), 0)?);
        assert!(resolver.is_in_range(Some(&node), 55)?);

        Ok(())
    }

    #[test]
    fn composite_spans_parts() -> Result<(), Error> {
        let resolver = Resolver::default();

        let node = loc("join(100..200,300..400)");
        assert_eq!(resolver.get_start(Some(&node))?, 100);
        assert_eq!(resolver.get_end(Some(&node))?, 400);
        assert!(resolver.is_in_range(Some(&node), 250)?);

        let node = loc("order(complement(300..400),100..200)");
        assert_eq!(resolver.get_start(Some(&node))?, 100);
        assert_eq!(resolver.get_end(Some(&node))?, 400);

        Ok(())
    }

    #[test]
    fn null_arguments() {
        let resolver = Resolver::default();
        let node = loc("1..10");
        let seq = primary();

        assert_eq!(resolver.get_start(None), Err(resolver::Error::NullLocation));
        assert_eq!(resolver.get_end(None), Err(resolver::Error::NullLocation));
        assert_eq!(
            resolver.is_in_start(None, 124),
            Err(resolver::Error::NullLocation)
        );
        assert_eq!(
            resolver.is_in_end(None, 124),
            Err(resolver::Error::NullLocation)
        );
        assert_eq!(
            resolver.is_in_range(None, 124),
            Err(resolver::Error::NullLocation)
        );
        assert_eq!(
            resolver.get_sub_sequence(None, Some(&seq)),
            Err(resolver::Error::NullLocation)
        );
        assert_eq!(
            resolver.get_sub_sequence(Some(&node), None),
            Err(resolver::Error::NullSequence)
        );
        assert_eq!(
            resolver.get_sub_sequence_with_references(None, Some(&seq), None),
            Err(resolver::Error::NullLocation)
        );
        assert_eq!(
            resolver.get_sub_sequence_with_references(Some(&node), None, None),
            Err(resolver::Error::NullSequence)
        );
    }

    #[test]
    fn overwritten_end_token_fails_lazily() -> Result<(), Error> {
        let resolver = Resolver::default();
        let mut node = loc("<123..456");
        assert!(!resolver.is_in_end(Some(&node), 124)?);

        if let LocationNode::Leaf(leaf) = &mut node {
            leaf.end_token = "^^".to_string();
        }
        assert_eq!(
            resolver.is_in_end(Some(&node), 124),
            Err(resolver::Error::Token(token::Error::EmptyMagnitude(
                "^^".to_string()
            )))
        );

        Ok(())
    }

    #[test]
    fn sub_sequence_leaf_forms() {
        assert_eq!(extract("3..8").as_deref(), Ok("GCGTAC"));
        assert_eq!(extract("<3..>8").as_deref(), Ok("GCGTAC"));
        assert_eq!(extract("10").as_deref(), Ok("T"));
        assert_eq!(extract("10.12").as_deref(), Ok("TTA"));
        assert_eq!(extract("4^5").as_deref(), Ok(""));
        assert_eq!(extract("AB001:3..5").as_deref(), Ok("GCG"));
    }

    #[test]
    fn sub_sequence_operators() {
        assert_eq!(extract("complement(3..8)").as_deref(), Ok("GTACGC"));
        assert_eq!(extract("join(1..3,18..20)").as_deref(), Ok("ATGTAC"));
        assert_eq!(extract("order(1..3,18..20)").as_deref(), Ok("ATGTAC"));
        assert_eq!(extract("join(complement(1..3),5)").as_deref(), Ok("CATG"));
        assert_eq!(
            extract("complement(join(1..3,18..20))").as_deref(),
            Ok("GTACAT")
        );
        assert_eq!(extract("complement(4^5)").as_deref(), Ok(""));
    }

    #[test]
    fn sub_sequence_failures() {
        assert_eq!(extract("8..3"), Err(resolver::Error::InvertedRange(8, 3)));
        assert_eq!(extract("4^6"), Err(resolver::Error::NonAdjacentSite(4, 6)));
        assert_eq!(
            extract("20^21"),
            Err(resolver::Error::Sequence(sequences::Error::OutOfBounds {
                id: "AB001".to_string(),
                start: 20,
                end: 21,
                len: 20
            }))
        );
        assert_eq!(
            extract("15..25"),
            Err(resolver::Error::Sequence(sequences::Error::OutOfBounds {
                id: "AB001".to_string(),
                start: 15,
                end: 25,
                len: 20
            }))
        );
        assert_eq!(
            extract("J00089.1:1..4"),
            Err(resolver::Error::AccessionMismatch {
                expected: "AB001".to_string(),
                found: "J00089.1".to_string()
            })
        );
    }

    #[test]
    fn sub_sequence_with_references() {
        assert_eq!(
            extract_with_refs("join(1..2,J00089.1:5..8)").as_deref(),
            Ok("ATCCCC")
        );
        assert_eq!(
            extract_with_refs("complement(J00089.1:9..12)").as_deref(),
            Ok("TTTT")
        );
        assert_eq!(extract_with_refs("AB001:3..5").as_deref(), Ok("GCG"));
        assert_eq!(
            extract_with_refs("join(1..2,X99999.1:1..2)"),
            Err(resolver::Error::UnresolvedAccession("X99999.1".to_string()))
        );
        assert_eq!(
            extract_with_refs("P1:1..2"),
            Err(resolver::Error::MoleculeMismatch(
                "P1".to_string(),
                MoleculeType::Protein,
                MoleculeType::Dna
            ))
        );
    }

    #[test]
    fn absent_or_empty_references() -> Result<(), Error> {
        let resolver = Resolver::default();
        let seq = primary();
        let node = loc("join(1..3,18..20)");

        assert_eq!(
            resolver
                .get_sub_sequence_with_references(Some(&node), Some(&seq), None)?
                .to_string(),
            "ATGTAC"
        );
        assert_eq!(
            resolver
                .get_sub_sequence_with_references(
                    Some(&node),
                    Some(&seq),
                    Some(&ReferenceMap::new())
                )?
                .to_string(),
            "ATGTAC"
        );

        let foreign = loc("J00089.1:1..4");
        assert_eq!(
            resolver.get_sub_sequence_with_references(Some(&foreign), Some(&seq), None),
            Err(resolver::Error::UnresolvedAccession("J00089.1".to_string()))
        );

        Ok(())
    }

    #[test]
    fn protein_cannot_be_complemented() -> Result<(), Error> {
        let resolver = Resolver::default();
        let seq = Sequence::new("P1", MoleculeType::Protein, "MKVL")?;

        assert_eq!(
            resolver.get_sub_sequence(Some(&loc("2..3")), Some(&seq))?.to_string(),
            "KV"
        );
        assert_eq!(
            resolver.get_sub_sequence(Some(&loc("complement(2..3)")), Some(&seq)),
            Err(resolver::Error::Sequence(
                sequences::Error::NotComplementable(MoleculeType::Protein)
            ))
        );

        Ok(())
    }

    #[test]
    fn empty_composite() {
        let resolver = Resolver::default();
        let node = LocationNode::join(Vec::new());

        assert_eq!(
            resolver.get_start(Some(&node)),
            Err(resolver::Error::EmptyComposite("join".to_string()))
        );
        assert_eq!(
            resolver.get_sub_sequence(Some(&node), Some(&primary())),
            Err(resolver::Error::EmptyComposite("join".to_string()))
        );
    }

    #[test]
    fn depth_limit() {
        let mut node = LocationNode::from(Leaf::point("1"));
        for _ in 0..10 {
            node = LocationNode::complement(node);
        }

        assert_eq!(Resolver::default().get_start(Some(&node)), Ok(1));
        assert_eq!(
            Resolver::new(Config { max_depth: 5 }).get_start(Some(&node)),
            Err(resolver::Error::DepthExceeded(5))
        );
        assert_eq!(
            Resolver::new(Config { max_depth: 5 }).get_sub_sequence(Some(&node), Some(&primary())),
            Err(resolver::Error::DepthExceeded(5))
        );
    }

    #[test]
    fn deep_tree_fails_before_logging() {
        let mut node = LocationNode::from(Leaf::point("1"));
        for _ in 0..2_000 {
            node = LocationNode::complement(node);
        }
        let resolver = Resolver::default();
        let seq = primary();
        let refs = references();
        let expected = resolver::Error::DepthExceeded(super::DEFAULT_MAX_DEPTH);

        assert_eq!(resolver.get_start(Some(&node)), Err(expected.clone()));
        assert_eq!(resolver.get_end(Some(&node)), Err(expected.clone()));
        assert_eq!(resolver.is_in_start(Some(&node), 1), Err(expected.clone()));
        assert_eq!(resolver.is_in_end(Some(&node), 1), Err(expected.clone()));
        assert_eq!(resolver.is_in_range(Some(&node), 1), Err(expected.clone()));
        assert_eq!(
            resolver.get_sub_sequence(Some(&node), Some(&seq)),
            Err(expected.clone())
        );
        assert_eq!(
            resolver.get_sub_sequence_with_references(Some(&node), Some(&seq), Some(&refs)),
            Err(expected)
        );
    }

    #[test]
    fn compare() -> Result<(), Error> {
        let resolver = Resolver::default();

        assert_eq!(
            resolver.compare(Some(&loc("1..10")), Some(&loc("2..5")))?,
            Ordering::Less
        );
        assert_eq!(
            resolver.compare(Some(&loc("1..10")), Some(&loc("1..5")))?,
            Ordering::Greater
        );
        assert_eq!(
            resolver.compare(Some(&loc("join(1..5,8..10)")), Some(&loc("1..10")))?,
            Ordering::Equal
        );
        assert_eq!(
            resolver.compare(None, Some(&loc("1..10"))),
            Err(super::Error::NullLocation)
        );

        Ok(())
    }
}
