//! Implementation of Display trait.
//!
//! The output is the canonical form of a location expression and parses back
//! into an equal tree.

use std::fmt::Display;

use crate::parser::ds::*;

impl Display for Infix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Display for CompositeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Display for Leaf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(accession) = &self.accession {
            write!(f, "{accession}:")?;
        }
        match &self.infix {
            Some(infix) => write!(f, "{}{}{}", self.start_token, infix, self.end_token),
            None => write!(f, "{}", self.start_token),
        }
    }
}

impl Display for LocationNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationNode::Leaf(leaf) => write!(f, "{leaf}"),
            LocationNode::Complement(inner) => write!(f, "complement({inner})"),
            LocationNode::Composite { kind, parts } => {
                write!(f, "{kind}(")?;
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{part}")?;
                }
                write!(f, ")")
            }
        }
    }
}
