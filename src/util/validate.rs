use crate::{action::ActionHandler, graph::Graph, vertex::Vertex};

use fnv::FnvHashSet;

#[allow(unused_imports)]
use log::{debug, error, info, trace};

/// Check every structural invariant of `graph`, logging each
/// violation. Returns `true` if the graph is consistent.
pub fn validate<H: ActionHandler>(graph: &Graph<H>) -> bool {
    info!("validating graph");

    let mut success = true;
    let k = graph.k();

    let vertices_all = graph.vertices().collect::<Vec<_>>();
    let vertices_set = graph.vertices().collect::<FnvHashSet<_>>();

    if vertices_all.len() != vertices_set.len()
        || vertices_set.len() != graph.vertex_count()
    {
        info!(
            "vertex count mismatch: {} listed, {} distinct, {} counted",
            vertices_all.len(),
            vertices_set.len(),
            graph.vertex_count()
        );
        success = false;
    }

    for &v in vertices_all.iter() {
        let compl = graph.complement(v);
        if compl == v || compl.complement() != v || !graph.contains(compl) {
            info!("vertex {} has a broken complement {}", v, compl);
            success = false;
        }

        if graph.nucls(v).len() < k {
            info!("vertex {} is shorter than k = {}", v, k);
            success = false;
        }

        if graph.nucls(compl) != &graph.nucls(v).rev_comp() {
            info!("vertex {} and its complement disagree on sequence", v);
            success = false;
        }

        let slots = match graph.get_record(v) {
            Some(record) => *record.desc_slots(),
            None => continue,
        };
        for (slot, desc) in slots.iter().enumerate() {
            let desc = match *desc {
                Some(desc) => desc,
                None => continue,
            };
            if !graph.contains(desc) {
                info!("vertex {}'s descendant {} does not exist", v, desc);
                success = false;
                continue;
            }
            if !graph.are_linkable(v, desc) {
                info!("edge {} -> {} does not overlap by k - 1", v, desc);
                success = false;
            }
            if graph.nucls(desc).nucl(k - 1).index() != slot {
                info!("edge {} -> {} is stored in the wrong slot", v, desc);
                success = false;
            }
            if !mirrored(graph, v, desc) {
                info!("edge {} -> {} has no mirror edge", v, desc);
                success = false;
            }
        }

        let derived: Vec<Vertex> = graph
            .desc(compl)
            .into_iter()
            .rev()
            .map(Vertex::complement)
            .collect();
        if graph.anc(v) != derived {
            info!("ancestors of {} disagree with its complement", v);
            success = false;
        }
    }

    if success {
        info!("graph successfully validated");
    } else {
        info!("errors when validating graph");
    }

    success
}

fn mirrored<H: ActionHandler>(graph: &Graph<H>, anc: Vertex, desc: Vertex) -> bool {
    graph.has_edge(desc.complement(), anc.complement())
}
