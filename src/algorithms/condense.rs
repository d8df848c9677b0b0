use crate::{action::ActionHandler, graph::Graph, vertex::Vertex};

#[allow(unused_imports)]
use log::{debug, error, info, trace};

use super::simple_chains;

/// Merge the vertices of `chain` from left to right, returning the
/// vertex that replaces them.
fn merge_chain<H: ActionHandler>(
    graph: &mut Graph<H>,
    chain: &[Vertex],
) -> Option<Vertex> {
    let (&first, rest) = chain.split_first()?;
    let mut merged = first;
    for &next in rest {
        merged = graph.merge(merged, next);
    }
    Some(merged)
}

/// Collapse every non-branching chain of the graph into a single
/// vertex, returning the number of merges performed.
pub fn condense<H: ActionHandler>(graph: &mut Graph<H>) -> usize {
    info!(
        "condensing graph with {} pairs and {} edges",
        graph.pair_count(),
        graph.edge_count()
    );
    let t = std::time::Instant::now();

    let mut merges = 0;
    loop {
        let chains = simple_chains(graph, 2);
        if chains.is_empty() {
            break;
        }
        for chain in chains.iter() {
            merge_chain(graph, chain);
            merges += chain.len() - 1;
        }
    }

    info!(
        "condensed to {} pairs with {} merges in {:.3} ms",
        graph.pair_count(),
        merges,
        t.elapsed().as_secs_f64() * 1000.0
    );
    merges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::{bubble_graph, chain_graph, find_vertex, kmer_graph, seq};
    use crate::util::validate::validate;

    #[test]
    fn chain_condenses_to_genome() {
        let mut graph = chain_graph();
        let pairs = graph.pair_count();
        let merges = condense(&mut graph);

        assert_eq!(merges, pairs - 1);
        assert_eq!(graph.pair_count(), 1);
        assert!(find_vertex(&graph, "ACGGTCATTGCA").is_some());
        assert!(validate(&graph));
    }

    #[test]
    fn sequence_index_follows_condensation() {
        let mut graph = chain_graph();
        condense(&mut graph);

        let index = graph.handler();
        assert_eq!(index.len(), 2);
        let v = index.get(&seq("ACGGTCATTGCA")).unwrap();
        assert!(graph.contains(v));
        assert_eq!(index.get(&seq("TGCAATGACCGT")), Some(v.complement()));
    }

    #[test]
    fn bubble_is_unchanged() {
        let mut graph = bubble_graph();
        assert_eq!(condense(&mut graph), 0);
        assert_eq!(graph.pair_count(), 4);
    }

    #[test]
    fn branches_stop_chains() {
        // TTACA gets a second successor, splitting the path in two
        let mut graph = kmer_graph(5, "GATTACAGGT");
        let tac = graph.handler().get(&seq("TTACA")).unwrap();
        let branch = graph.handler().get(&seq("TACAG")).unwrap();
        let other = graph.add_vertex(seq("TACAT"));
        graph.link_vertices(tac, other);
        assert_eq!(graph.desc(tac).len(), 2);
        assert!(graph.desc(tac).contains(&branch));

        condense(&mut graph);
        assert!(validate(&graph));
        assert_eq!(graph.pair_count(), 3);
        assert!(find_vertex(&graph, "GATTACA").is_some());
        assert!(find_vertex(&graph, "TACAGGT").is_some());
        assert!(find_vertex(&graph, "TACAT").is_some());
    }

    #[test]
    fn cycle_condenses_to_self_loop() {
        let mut graph = Graph::new(3);
        let a = graph.add_vertex(seq("ACGT"));
        let b = graph.add_vertex(seq("GTTC"));
        let c = graph.add_vertex(seq("TCAC"));
        graph.link_vertices(a, b);
        graph.link_vertices(b, c);
        graph.link_vertices(c, a);

        assert_eq!(condense(&mut graph), 2);
        assert_eq!(graph.pair_count(), 1);
        let v = graph.vertices().next().unwrap();
        assert_eq!(graph.desc(v), vec![v]);
        assert!(validate(&graph));
    }
}
