//! Data structures for representing feature-table locations.

use serde::{Deserialize, Serialize};

/// Operator between the two bound tokens of a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Infix {
    /// `..`, a definite range.
    Range,
    /// `.`, a single residue somewhere between the two positions.
    OneOf,
    /// `^`, a site between two adjacent residues.
    Site,
}

impl Infix {
    pub fn as_str(&self) -> &'static str {
        match self {
            Infix::Range => "..",
            Infix::OneOf => ".",
            Infix::Site => "^",
        }
    }
}

/// Kind of a composite location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompositeKind {
    /// `join(...)`, the parts are concatenated into one sequence.
    Join,
    /// `order(...)`, the parts belong together but need not be contiguous.
    Order,
}

impl CompositeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompositeKind::Join => "join",
            CompositeKind::Order => "order",
        }
    }
}

/// A single position or a simple range, e.g., `AB001:<1..>50`.
///
/// The bound tokens are kept as written (including any fuzzy marker) and are
/// only interpreted when resolved.  For a single position both tokens are
/// identical and `infix` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaf {
    pub accession: Option<String>,
    pub start_token: String,
    pub end_token: String,
    pub infix: Option<Infix>,
}

impl Leaf {
    /// A single position such as `42` or `<42`.
    pub fn point<T: Into<String>>(token: T) -> Self {
        let token = token.into();
        Self {
            accession: None,
            start_token: token.clone(),
            end_token: token,
            infix: None,
        }
    }

    /// Two positions joined by `infix`.
    pub fn span<S, E>(start_token: S, infix: Infix, end_token: E) -> Self
    where
        S: Into<String>,
        E: Into<String>,
    {
        Self {
            accession: None,
            start_token: start_token.into(),
            end_token: end_token.into(),
            infix: Some(infix),
        }
    }

    /// Builder-style setter for the accession.
    pub fn with_accession<A: Into<String>>(mut self, accession: A) -> Self {
        self.accession = Some(accession.into());
        self
    }
}

/// A parsed location expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationNode {
    Leaf(Leaf),
    /// `complement(...)`, the reverse complement of the inner location.
    Complement(Box<LocationNode>),
    /// `join(...)` or `order(...)`.
    Composite {
        kind: CompositeKind,
        parts: Vec<LocationNode>,
    },
}

impl From<Leaf> for LocationNode {
    fn from(leaf: Leaf) -> Self {
        LocationNode::Leaf(leaf)
    }
}

impl LocationNode {
    pub fn complement(inner: LocationNode) -> Self {
        LocationNode::Complement(Box::new(inner))
    }

    pub fn join(parts: Vec<LocationNode>) -> Self {
        LocationNode::Composite {
            kind: CompositeKind::Join,
            parts,
        }
    }

    pub fn order(parts: Vec<LocationNode>) -> Self {
        LocationNode::Composite {
            kind: CompositeKind::Order,
            parts,
        }
    }

    /// Leaves of the tree, depth first and left to right.
    pub fn leaves(&self) -> Vec<&Leaf> {
        let mut result = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                LocationNode::Leaf(leaf) => result.push(leaf),
                LocationNode::Complement(inner) => stack.push(inner.as_ref()),
                LocationNode::Composite { parts, .. } => stack.extend(parts.iter().rev()),
            }
        }
        result
    }

    /// Mutable leaves of the tree, in the same order as `leaves()`.
    pub fn leaves_mut(&mut self) -> Vec<&mut Leaf> {
        let mut result = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                LocationNode::Leaf(leaf) => result.push(leaf),
                LocationNode::Complement(inner) => stack.push(inner.as_mut()),
                LocationNode::Composite { parts, .. } => stack.extend(parts.iter_mut().rev()),
            }
        }
        result
    }

    /// Distinct accessions referenced by leaves, in first-seen order.
    pub fn accessions(&self) -> Vec<&str> {
        let mut result: Vec<&str> = Vec::new();
        for accession in self.leaves().into_iter().filter_map(|l| l.accession.as_deref()) {
            if !result.contains(&accession) {
                result.push(accession);
            }
        }
        result
    }

    /// Number of nested operators above the deepest leaf.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            match node {
                LocationNode::Leaf(_) => (),
                LocationNode::Complement(inner) => stack.push((inner.as_ref(), depth + 1)),
                LocationNode::Composite { parts, .. } => {
                    stack.extend(parts.iter().map(|p| (p, depth + 1)))
                }
            }
        }
        max
    }
}
