//! Parsing and resolution of GenBank/EMBL feature-table location expressions.
//!
//! ```
//! use gbloc::location::Location;
//! use gbloc::sequences::{MoleculeType, Sequence};
//!
//! let seq = Sequence::new("AB001", MoleculeType::Dna, "ATGCGTACGT").unwrap();
//! let loc = Location::parse("join(1..3,complement(8..10))").unwrap();
//! assert_eq!(loc.start().unwrap(), 1);
//! assert_eq!(loc.sub_sequence(&seq).unwrap().to_string(), "ATGACG");
//! ```

pub mod location;
pub mod parser;
pub mod resolver;
pub mod sequences;
pub mod token;
