/*!

Immutable nucleotide strings over the `ACGT` alphabet.

A [`Sequence`] is validated once at construction; every operation
afterwards produces a new `Sequence` and never touches the original.

*/

use std::ops::Add;
use std::str::FromStr;

use bstr::ByteSlice;
use thiserror::Error;

use crate::util::dna;

/// Errors produced when building or slicing a [`Sequence`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("invalid nucleotide {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
    #[error("range {start}..{end} is out of bounds for sequence of length {len}")]
    RangeError { start: usize, end: usize, len: usize },
}

/// A single nucleotide. The discriminants are the indices of the
/// outgoing edge slots of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Nucl {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Nucl {
    pub const ALL: [Nucl; 4] = [Nucl::A, Nucl::C, Nucl::G, Nucl::T];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(ix: usize) -> Option<Nucl> {
        Self::ALL.get(ix).copied()
    }

    #[inline]
    pub fn complement(self) -> Nucl {
        Self::ALL[3 - self.index()]
    }

    #[inline]
    pub fn from_ascii(base: u8) -> Option<Nucl> {
        Self::from_index(dna::base_index(base) as usize)
    }

    #[inline]
    pub fn to_ascii(self) -> u8 {
        b"ACGT"[self.index()]
    }
}

impl std::fmt::Display for Nucl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_ascii() as char)
    }
}

/// An immutable nucleotide string. Equality and hashing are
/// structural.
#[derive(Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sequence {
    bases: Vec<u8>,
}

impl Sequence {
    /// Validates `bases` and copies them into a new sequence. Only
    /// uppercase `A`, `C`, `G` and `T` are accepted.
    pub fn new(bases: &[u8]) -> Result<Sequence, SequenceError> {
        if let Some(position) = bases.iter().position(|&b| !dna::is_base(b)) {
            return Err(SequenceError::InvalidSymbol {
                symbol: bases[position] as char,
                position,
            });
        }
        Ok(Sequence {
            bases: bases.to_vec(),
        })
    }

    pub fn from_nucls<I>(nucls: I) -> Sequence
    where
        I: IntoIterator<Item = Nucl>,
    {
        let bases = nucls.into_iter().map(Nucl::to_ascii).collect();
        Sequence { bases }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bases
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Nucl> {
        let base = *self.bases.get(index)?;
        Nucl::from_ascii(base)
    }

    /// The nucleotide at `index`.
    ///
    /// Panics if `index` is out of bounds, like slice indexing.
    #[inline]
    pub fn nucl(&self, index: usize) -> Nucl {
        self.get(index).unwrap_or_else(|| {
            panic!(
                "index {} out of bounds for sequence of length {}",
                index,
                self.len()
            )
        })
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Nucl> + '_ {
        self.bases.iter().filter_map(|&b| Nucl::from_ascii(b))
    }

    /// The half-open subsequence `start..end`.
    pub fn subseq(
        &self,
        start: usize,
        end: usize,
    ) -> Result<Sequence, SequenceError> {
        if end < start || end > self.len() {
            return Err(SequenceError::RangeError {
                start,
                end,
                len: self.len(),
            });
        }
        Ok(Sequence {
            bases: self.bases[start..end].to_vec(),
        })
    }

    /// Like [`subseq`](Sequence::subseq), for ranges the caller has
    /// already checked.
    ///
    /// Panics if the range is out of bounds, like slice indexing.
    #[inline]
    pub fn slice(&self, range: std::ops::Range<usize>) -> Sequence {
        Sequence {
            bases: self.bases[range].to_vec(),
        }
    }

    /// The subsequence from `start` to the end.
    #[inline]
    pub fn suffix(&self, start: usize) -> Result<Sequence, SequenceError> {
        self.subseq(start, self.len())
    }

    pub fn concat(&self, other: &Sequence) -> Sequence {
        let mut bases = Vec::with_capacity(self.len() + other.len());
        bases.extend_from_slice(&self.bases);
        bases.extend_from_slice(&other.bases);
        Sequence { bases }
    }

    /// The reverse complement, i.e. the sequence of the opposite
    /// strand read 5' to 3'.
    pub fn rev_comp(&self) -> Sequence {
        Sequence {
            bases: dna::rev_comp(&self.bases),
        }
    }

    #[inline]
    pub fn ends_with(&self, other: &[u8]) -> bool {
        self.bases.ends_with(other)
    }
}

impl<'a> Add<&'a Sequence> for &'a Sequence {
    type Output = Sequence;

    #[inline]
    fn add(self, other: &'a Sequence) -> Sequence {
        self.concat(other)
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sequence::new(s.as_bytes())
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bases.as_bstr())
    }
}

impl std::fmt::Debug for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sequence({:?})", self.bases.as_bstr())
    }
}
