use gfa::gfa::Orientation;
use std::cmp::Ordering;

/// Newtype that identifies a complementary pair of vertices. Pair
/// IDs are never reused within a graph.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PairId(pub u64);

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vertex is one strand of a pair, packed as a single u64: the
/// pair ID shifted left by one, with the low bit set on the
/// complement strand.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Hash, Eq, Ord)]
#[repr(transparent)]
pub struct Vertex(pub u64);

impl Vertex {
    /// The vertex of pair `id` read in the GFA orientation `orient`.
    #[inline]
    pub fn new(id: PairId, orient: Orientation) -> Vertex {
        Vertex::pack(id, orient != Orientation::Forward)
    }

    #[inline]
    pub fn orientation(self) -> Orientation {
        if self.is_complement() {
            Orientation::Backward
        } else {
            Orientation::Forward
        }
    }

    #[inline]
    pub fn pack(id: PairId, is_complement: bool) -> Vertex {
        if id.0 < (0x1 << 63) {
            Vertex((id.0 << 1) | is_complement as u64)
        } else {
            panic!("Tried to create a vertex with a pair ID that filled 64 bits")
        }
    }

    #[inline]
    pub fn pair(self) -> PairId {
        PairId(self.0 >> 1)
    }

    /// Strand index within the pair, 0 for the primary strand and 1
    /// for its complement.
    #[inline]
    pub fn strand(self) -> usize {
        (self.0 & 1) as usize
    }

    #[inline]
    pub fn is_complement(self) -> bool {
        self.0 & 1 != 0
    }

    /// The reverse-complement twin of this vertex. Flipping the strand
    /// bit is an involution without fixed points.
    #[inline]
    pub fn complement(self) -> Self {
        Vertex(self.0 ^ 1)
    }

    /// The primary strand of this vertex's pair.
    #[inline]
    pub fn forward(self) -> Self {
        if self.is_complement() {
            self.complement()
        } else {
            self
        }
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let strand = if self.is_complement() { '-' } else { '+' };
        write!(f, "{}{}", self.pair(), strand)
    }
}

/// A directed edge `anc -> desc`. Its mirror on the opposite strand,
/// `desc' -> anc'`, is the same logical edge.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Hash, Eq, Ord)]
pub struct Edge(pub Vertex, pub Vertex);

impl Edge {
    #[inline]
    pub fn mirror(self) -> Edge {
        let Edge(anc, desc) = self;
        Edge(desc.complement(), anc.complement())
    }

    /// Picks one representative of an edge and its mirror, so that
    /// both directions of a logical edge compare equal.
    #[inline]
    pub fn canonical(anc: Vertex, desc: Vertex) -> Edge {
        let edge = Edge(anc, desc);
        let mirror = edge.mirror();
        match edge.cmp(&mirror) {
            Ordering::Greater => mirror,
            _ => edge,
        }
    }

    #[inline]
    pub fn is_self_mirror(self) -> bool {
        self == self.mirror()
    }
}
