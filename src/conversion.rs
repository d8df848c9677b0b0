/*!

GFA interchange for [`Graph`].

Each vertex pair becomes one segment holding the primary strand, and
each logical edge becomes one link whose orientations are the strands
of its endpoints. Segment names are pair IDs plus one, since GFA
segment names start at 1.

*/

use crate::{
    action::ActionHandler,
    graph::Graph,
    sequence::{Sequence, SequenceError},
    vertex::{Edge, Vertex},
};

use fnv::{FnvHashMap, FnvHashSet};

use gfa::{
    gfa::{Link, Orientation, Segment, GFA},
    optfields::OptFields,
    parser::{GFAParser, ParseError},
};

use bstr::BString;
use thiserror::Error;

#[allow(unused_imports)]
use log::{debug, error, info, trace};

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("segment {segment} has an invalid sequence: {source}")]
    Sequence {
        segment: usize,
        #[source]
        source: SequenceError,
    },
    #[error("segment {segment} has length {len}, shorter than k = {k}")]
    ShortSegment { segment: usize, len: usize, k: usize },
    #[error("segment {0} appears more than once")]
    DuplicateSegment(usize),
    #[error("link refers to unknown segment {0}")]
    UnknownSegment(usize),
    #[error("segments {from} and {to} don't overlap by k - 1")]
    NotLinkable { from: usize, to: usize },
    #[error("link from {from} to {to} conflicts with an existing link")]
    SlotOccupied { from: usize, to: usize },
    #[error("failed to parse GFA")]
    Parse(#[from] ParseError),
}

type ConversionResult<T> = Result<T, ConversionError>;

#[inline]
fn segment_name(v: Vertex) -> usize {
    v.pair().0 as usize + 1
}

pub fn to_gfa<H: ActionHandler>(graph: &Graph<H>) -> GFA<usize, ()> {
    let mut gfa = GFA::new();

    let mut forward: Vec<Vertex> =
        graph.vertices().filter(|v| !v.is_complement()).collect();
    forward.sort();

    for v in forward {
        let segment = Segment {
            name: segment_name(v),
            sequence: BString::from(graph.nucls(v).as_bytes()),
            optional: (),
        };
        gfa.segments.push(segment);
    }

    let mut edges: Vec<Edge> = graph.edges().collect();
    edges.sort();

    let overlap = format!("{}M", graph.k() - 1);
    for Edge(from, to) in edges {
        let link = Link {
            from_segment: segment_name(from),
            from_orient: from.orientation(),
            to_segment: segment_name(to),
            to_orient: to.orientation(),
            overlap: BString::from(overlap.as_str()),
            optional: (),
        };
        gfa.links.push(link);
    }

    gfa
}

/// Add the segments and links of `gfa` to `graph`. All segments are
/// checked before any vertex is added, and each link is checked
/// before it is applied, so an error never leaves a half-linked edge.
/// A link that already exists, e.g. because the GFA also lists its
/// mirror, is skipped.
pub fn fill_from_gfa<H, T>(
    graph: &mut Graph<H>,
    gfa: &GFA<usize, T>,
) -> ConversionResult<FnvHashMap<usize, Vertex>>
where
    H: ActionHandler,
    T: OptFields,
{
    let k = graph.k();

    let mut sequences: Vec<(usize, Sequence)> =
        Vec::with_capacity(gfa.segments.len());
    let mut seen: FnvHashSet<usize> = FnvHashSet::default();
    for segment in gfa.segments.iter() {
        let nucls = Sequence::new(&segment.sequence).map_err(|source| {
            ConversionError::Sequence {
                segment: segment.name,
                source,
            }
        })?;
        if nucls.len() < k {
            return Err(ConversionError::ShortSegment {
                segment: segment.name,
                len: nucls.len(),
                k,
            });
        }
        if !seen.insert(segment.name) {
            return Err(ConversionError::DuplicateSegment(segment.name));
        }
        sequences.push((segment.name, nucls));
    }

    let mut vertices: FnvHashMap<usize, Vertex> = FnvHashMap::default();
    for (name, nucls) in sequences {
        vertices.insert(name, graph.add_vertex(nucls));
    }

    let lookup = |name: usize, orient: Orientation| -> ConversionResult<Vertex> {
        let v = vertices
            .get(&name)
            .ok_or(ConversionError::UnknownSegment(name))?;
        Ok(Vertex::new(v.pair(), orient))
    };

    let mut skipped = 0;
    for link in gfa.links.iter() {
        let from = link.from_segment;
        let to = link.to_segment;
        let anc = lookup(from, link.from_orient)?;
        let desc = lookup(to, link.to_orient)?;

        if graph.has_edge(anc, desc) {
            skipped += 1;
            continue;
        }
        if !graph.are_linkable(anc, desc) {
            return Err(ConversionError::NotLinkable { from, to });
        }
        if graph.conflicting_edge(anc, desc).is_some() {
            return Err(ConversionError::SlotOccupied { from, to });
        }
        graph.link_vertices(anc, desc);
    }

    debug!(
        "added {} segments and {} links from GFA, {} duplicate links skipped",
        vertices.len(),
        gfa.links.len() - skipped,
        skipped
    );

    Ok(vertices)
}

pub fn from_gfa<T: OptFields>(
    k: usize,
    gfa: &GFA<usize, T>,
) -> ConversionResult<Graph> {
    let mut graph = Graph::new(k);
    fill_from_gfa(&mut graph, gfa)?;
    Ok(graph)
}

pub fn from_gfa_file<P: AsRef<std::path::Path>>(
    k: usize,
    path: P,
) -> ConversionResult<Graph> {
    let parser = GFAParser::new();
    let gfa: GFA<usize, ()> = parser.parse_file(path)?;
    from_gfa(k, &gfa)
}
