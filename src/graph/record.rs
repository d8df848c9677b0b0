/*!

Vertex pair storage for [`Graph`](super::Graph)

*/

use crate::sequence::Sequence;
use crate::vertex::Vertex;

/// One strand of a pair: its sequence and one outgoing edge slot per
/// nucleotide that can follow the shared `k - 1` overlap.
#[derive(Debug, Clone)]
pub struct VertexRecord {
    pub(super) nucls: Sequence,
    pub(super) desc: [Option<Vertex>; 4],
}

impl VertexRecord {
    pub(super) fn new(nucls: Sequence) -> VertexRecord {
        VertexRecord {
            nucls,
            desc: [None; 4],
        }
    }

    #[inline]
    pub fn nucls(&self) -> &Sequence {
        &self.nucls
    }

    #[inline]
    pub fn desc_slots(&self) -> &[Option<Vertex>; 4] {
        &self.desc
    }

    #[inline]
    pub fn targets(&self, v: Vertex) -> bool {
        self.desc.contains(&Some(v))
    }
}

/// A vertex and its reverse complement. Pairs are the unit of
/// allocation, so a strand never exists without its twin.
#[derive(Debug, Clone)]
pub struct VertexPair {
    pub(super) strands: [VertexRecord; 2],
}

impl VertexPair {
    pub(super) fn new(nucls: Sequence) -> VertexPair {
        let compl = nucls.rev_comp();
        VertexPair {
            strands: [VertexRecord::new(nucls), VertexRecord::new(compl)],
        }
    }

    #[inline]
    pub fn strand(&self, v: Vertex) -> &VertexRecord {
        &self.strands[v.strand()]
    }

    #[inline]
    pub(super) fn strand_mut(&mut self, v: Vertex) -> &mut VertexRecord {
        &mut self.strands[v.strand()]
    }
}
