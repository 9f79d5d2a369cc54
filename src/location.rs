//! A parsed location together with the resolver it is evaluated with.

use std::{cmp::Ordering, fmt::Display, str::FromStr, sync::Arc};

use crate::{
    parser::{self, LocationNode},
    resolver::{Error, LocationResolver, Resolver},
    sequences::{ReferenceMap, Sequence, SubSequence},
};

/// A location tree with an optional attached resolver.
///
/// Handles created with `new()` or `parse()` carry a default `Resolver`.  After
/// `detach_resolver()` all convenience methods fail with `DetachedResolver`;
/// callers can still pass `root()` to any `LocationResolver` directly.
#[derive(Clone)]
pub struct Location {
    root: LocationNode,
    resolver: Option<Arc<dyn LocationResolver + Send + Sync>>,
}

impl Location {
    pub fn new(root: LocationNode) -> Self {
        Self {
            root,
            resolver: Some(Arc::new(Resolver::default())),
        }
    }

    /// Parse `text` with the default parser configuration.
    pub fn parse(text: &str) -> Result<Self, parser::Error> {
        Ok(Self::new(parser::parse(Some(text))?))
    }

    pub fn root(&self) -> &LocationNode {
        &self.root
    }

    /// Mutable access to the tree, e.g., to overwrite bound tokens.
    pub fn root_mut(&mut self) -> &mut LocationNode {
        &mut self.root
    }

    pub fn into_root(self) -> LocationNode {
        self.root
    }

    pub fn attach_resolver(&mut self, resolver: Arc<dyn LocationResolver + Send + Sync>) {
        self.resolver = Some(resolver);
    }

    pub fn detach_resolver(&mut self) {
        self.resolver = None;
    }

    pub fn has_resolver(&self) -> bool {
        self.resolver.is_some()
    }

    pub fn resolver(&self) -> Result<&dyn LocationResolver, Error> {
        match &self.resolver {
            Some(resolver) => Ok(resolver.as_ref()),
            None => Err(Error::DetachedResolver),
        }
    }

    pub fn start(&self) -> Result<i64, Error> {
        self.resolver()?.get_start(Some(&self.root))
    }

    pub fn end(&self) -> Result<i64, Error> {
        self.resolver()?.get_end(Some(&self.root))
    }

    pub fn is_in_start(&self, position: i64) -> Result<bool, Error> {
        self.resolver()?.is_in_start(Some(&self.root), position)
    }

    pub fn is_in_end(&self, position: i64) -> Result<bool, Error> {
        self.resolver()?.is_in_end(Some(&self.root), position)
    }

    pub fn is_in_range(&self, position: i64) -> Result<bool, Error> {
        self.resolver()?.is_in_range(Some(&self.root), position)
    }

    pub fn sub_sequence(&self, sequence: &Sequence) -> Result<SubSequence, Error> {
        self.resolver()?
            .get_sub_sequence(Some(&self.root), Some(sequence))
    }

    pub fn sub_sequence_with_references(
        &self,
        sequence: &Sequence,
        references: Option<&ReferenceMap>,
    ) -> Result<SubSequence, Error> {
        self.resolver()?
            .get_sub_sequence_with_references(Some(&self.root), Some(sequence), references)
    }

    /// Order by start, then end, using this handle's resolver.
    pub fn cmp_position(&self, other: &Location) -> Result<Ordering, Error> {
        self.resolver()?.compare(Some(&self.root), Some(&other.root))
    }
}

impl std::fmt::Debug for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Location")
            .field("root", &self.root)
            .field("resolver", &self.resolver.is_some())
            .finish()
    }
}

/// Locations are equal if their trees are; the resolver is not compared.
impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl Eq for Location {}

impl From<LocationNode> for Location {
    fn from(root: LocationNode) -> Self {
        Self::new(root)
    }
}

impl AsRef<LocationNode> for Location {
    fn as_ref(&self) -> &LocationNode {
        &self.root
    }
}

impl FromStr for Location {
    type Err = parser::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.root)
    }
}
