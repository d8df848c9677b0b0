use crate::{action::ActionHandler, graph::Graph, vertex::Vertex};

use fnv::FnvHashSet;

#[allow(unused_imports)]
use log::{debug, error, info, trace};

pub mod condense;

pub use self::condense::condense;

/// The vertex that `v` can be merged with, if `v` has exactly one
/// descendant and is that descendant's only ancestor.
pub fn mergeable_successor<H: ActionHandler>(
    graph: &Graph<H>,
    v: Vertex,
) -> Option<Vertex> {
    match graph.desc(v).as_slice() {
        [next] if graph.is_merge_possible(v, *next) => Some(*next),
        _ => None,
    }
}

fn mergeable_predecessor<H: ActionHandler>(
    graph: &Graph<H>,
    v: Vertex,
) -> Option<Vertex> {
    match graph.anc(v).as_slice() {
        [prev] if graph.is_merge_possible(*prev, v) => Some(*prev),
        _ => None,
    }
}

/// Find the maximal chains of vertices that can be merged one after
/// another, in left-to-right order. Each pair appears in at most one
/// chain, so a chain and its reverse complement are reported once.
/// Chains shorter than `min_size` are dropped.
pub fn simple_chains<H: ActionHandler>(
    graph: &Graph<H>,
    min_size: usize,
) -> Vec<Vec<Vertex>> {
    let mut vertices: Vec<Vertex> = graph.vertices().collect();
    vertices.sort();

    let mut seen_pairs = FnvHashSet::default();
    let mut chains = Vec::new();

    for v in vertices {
        if seen_pairs.contains(&v.pair()) {
            continue;
        }

        // walk back to the start of the chain, stopping if we would
        // revisit a pair, e.g. on a cycle
        let mut in_chain = FnvHashSet::default();
        in_chain.insert(v.pair());
        let mut head = v;
        while let Some(prev) = mergeable_predecessor(graph, head) {
            if !in_chain.insert(prev.pair()) {
                break;
            }
            head = prev;
        }

        let mut chain = vec![head];
        let mut in_chain = FnvHashSet::default();
        in_chain.insert(head.pair());
        let mut tail = head;
        while let Some(next) = mergeable_successor(graph, tail) {
            if !in_chain.insert(next.pair()) {
                break;
            }
            chain.push(next);
            tail = next;
        }

        seen_pairs.extend(in_chain);
        if chain.len() >= min_size {
            chains.push(chain);
        }
    }

    debug!("found {} simple chains", chains.len());
    chains
}
