//! Minimal sequence collaborator for location resolution.
//!
//! Provides an identified residue sequence with 1-based inclusive range
//! extraction and reverse complementation.  Flat-file reading is left to
//! callers.

use std::fmt::Display;

use bio::alphabets::{self, Alphabet};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use crate::sequences::error::Error;

mod error {
    use super::MoleculeType;

    /// Error type for sequence operations.
    #[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
    pub enum Error {
        #[error("sequence {0} contains residues outside the {1:?} alphabet")]
        InvalidResidues(String, MoleculeType),
        #[error("range {start}..{end} is outside of sequence {id} of length {len}")]
        OutOfBounds {
            id: String,
            start: i64,
            end: i64,
            len: usize,
        },
        #[error("cannot reverse complement a {0:?} sequence")]
        NotComplementable(MoleculeType),
    }
}

/// Sequences referred to by accession, in insertion order.
pub type ReferenceMap = IndexMap<String, Sequence>;

/// Kind of molecule a sequence describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoleculeType {
    Dna,
    Rna,
    Protein,
}

static RNA_IUPAC: &[u8] = b"ACGURYSWKMBDHVNacguryswkmbdhvn";
static PROTEIN_IUPAC: &[u8] = b"ABCDEFGHIKLMNOPQRSTUVWXYZabcdefghiklmnopqrstuvwxyz*";

impl MoleculeType {
    fn alphabet(&self) -> Alphabet {
        match self {
            MoleculeType::Dna => alphabets::dna::iupac_alphabet(),
            MoleculeType::Rna => Alphabet::new(RNA_IUPAC),
            MoleculeType::Protein => Alphabet::new(PROTEIN_IUPAC),
        }
    }

    /// Reverse complement `seq`.
    ///
    /// RNA is complemented through its DNA equivalent.
    pub fn reverse_complement(&self, seq: &[u8]) -> Result<Vec<u8>, Error> {
        match self {
            MoleculeType::Dna => Ok(alphabets::dna::revcomp(seq)),
            MoleculeType::Rna => {
                let dna = seq.iter().map(|b| match b {
                    b'U' => b'T',
                    b'u' => b't',
                    _ => *b,
                });
                Ok(alphabets::dna::revcomp(dna.collect::<Vec<_>>())
                    .into_iter()
                    .map(|b| match b {
                        b'T' => b'U',
                        b't' => b'u',
                        _ => b,
                    })
                    .collect())
            }
            MoleculeType::Protein => Err(Error::NotComplementable(*self)),
        }
    }
}

/// An identified sequence, e.g., the record a feature table belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    id: String,
    molecule: MoleculeType,
    data: Vec<u8>,
}

impl Sequence {
    /// Construct a new sequence, checking the residues against the IUPAC
    /// alphabet of `molecule`.
    pub fn new<I, D>(id: I, molecule: MoleculeType, data: D) -> Result<Self, Error>
    where
        I: Into<String>,
        D: Into<Vec<u8>>,
    {
        let id = id.into();
        let data = data.into();
        if !molecule.alphabet().is_word(&data) {
            return Err(Error::InvalidResidues(id, molecule));
        }
        Ok(Self { id, molecule, data })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn molecule(&self) -> MoleculeType {
        self.molecule
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Whether the 1-based `position` is a residue of this sequence.
    pub fn contains_position(&self, position: i64) -> bool {
        position >= 1 && usize::try_from(position).is_ok_and(|p| p <= self.data.len())
    }

    /// Extract the 1-based, inclusive range `start..=end`.
    pub fn sub_sequence(&self, start: i64, end: i64) -> Result<SubSequence, Error> {
        if start > end || !self.contains_position(start) || !self.contains_position(end) {
            return Err(Error::OutOfBounds {
                id: self.id.clone(),
                start,
                end,
                len: self.data.len(),
            });
        }
        // both bounds were checked against the length above
        let (start, end) = (start as usize, end as usize);
        Ok(SubSequence {
            molecule: self.molecule,
            data: self.data[start - 1..end].to_vec(),
        })
    }
}

/// Residues extracted from a `Sequence`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubSequence {
    molecule: MoleculeType,
    data: Vec<u8>,
}

impl SubSequence {
    /// Empty sub sequence, e.g., the window of a site between two residues.
    pub fn empty(molecule: MoleculeType) -> Self {
        Self {
            molecule,
            data: Vec::new(),
        }
    }

    pub fn molecule(&self) -> MoleculeType {
        self.molecule
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn reverse_complement(&self) -> Result<Self, Error> {
        Ok(Self {
            molecule: self.molecule,
            data: self.molecule.reverse_complement(&self.data)?,
        })
    }

    /// Append the residues of `other`.
    pub fn extend(&mut self, other: &SubSequence) {
        self.data.extend_from_slice(&other.data);
    }
}

impl Display for SubSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.data))
    }
}
