/*!

The double-stranded condensed de Bruijn graph.

Every vertex lives in a [`VertexPair`] together with its reverse
complement, and only outgoing edges are stored. An edge `anc -> desc`
is always stored together with its mirror `desc' -> anc'`, and
ancestors are derived from the complement's descendants, so incoming
and outgoing edges can never disagree.

All mutations check their preconditions before touching any state.
Violating a precondition is a bug in the caller and panics.

*/

use fnv::{FnvHashMap, FnvHashSet};

use crate::action::ActionHandler;
use crate::sequence::Sequence;
use crate::vertex::{Edge, PairId, Vertex};

#[allow(unused_imports)]
use log::{debug, error, info, trace};

mod record;

pub use self::record::{VertexPair, VertexRecord};

/// A condensed de Bruijn graph over `k`-mers. Vertices are stored in
/// complementary pairs keyed by [`PairId`], and every mutation is
/// reported to the handler `H`.
#[derive(Debug)]
pub struct Graph<H = ()> {
    k: usize,
    next_id: u64,
    pairs: FnvHashMap<PairId, VertexPair>,
    handler: H,
}

impl Graph<()> {
    /// Create an empty graph for `k`-mers that notifies no one.
    pub fn new(k: usize) -> Self {
        Self::with_handler(k, ())
    }
}

impl<H: ActionHandler> Graph<H> {
    /// Create an empty graph for `k`-mers, reporting every mutation
    /// to `handler`.
    pub fn with_handler(k: usize, handler: H) -> Self {
        assert!(k > 0, "k must be positive");
        Graph {
            k,
            next_id: 0,
            pairs: Default::default(),
            handler,
        }
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    #[inline]
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    #[inline]
    pub fn contains(&self, v: Vertex) -> bool {
        self.pairs.contains_key(&v.pair())
    }

    #[inline]
    pub fn get_record(&self, v: Vertex) -> Option<&VertexRecord> {
        self.pairs.get(&v.pair()).map(|pair| pair.strand(v))
    }

    fn record(&self, v: Vertex) -> &VertexRecord {
        self.get_record(v).unwrap_or_else(|| {
            panic!("Tried getting a vertex that doesn't exist: {}", v)
        })
    }

    fn record_mut(&mut self, v: Vertex) -> &mut VertexRecord {
        match self.pairs.get_mut(&v.pair()) {
            Some(pair) => pair.strand_mut(v),
            None => panic!("Tried getting a vertex that doesn't exist: {}", v),
        }
    }

    #[inline]
    pub fn nucls(&self, v: Vertex) -> &Sequence {
        &self.record(v).nucls
    }

    /// The reverse-complement twin of a live vertex.
    #[inline]
    pub fn complement(&self, v: Vertex) -> Vertex {
        debug_assert!(self.contains(v));
        v.complement()
    }

    /// Number of live vertices, counting both strands.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pairs.len() * 2
    }

    #[inline]
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Iterates both strands of every live pair.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.pairs.keys().flat_map(|&id| {
            std::iter::once(Vertex::pack(id, false))
                .chain(std::iter::once(Vertex::pack(id, true)))
        })
    }

    /// Descendants of `v`, in nucleotide order of their slots.
    pub fn desc(&self, v: Vertex) -> Vec<Vertex> {
        self.record(v).desc.iter().flatten().copied().collect()
    }

    /// Ancestors of `v`, derived from the descendants of its
    /// complement, in reverse slot order.
    pub fn anc(&self, v: Vertex) -> Vec<Vertex> {
        self.record(v.complement())
            .desc
            .iter()
            .rev()
            .flatten()
            .map(|d| d.complement())
            .collect()
    }

    #[inline]
    pub fn has_edge(&self, anc: Vertex, desc: Vertex) -> bool {
        self.get_record(anc).map_or(false, |rec| rec.targets(desc))
    }

    /// Iterates the logical edges, yielding one of each edge and its
    /// mirror.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |v| {
            self.record(v)
                .desc
                .iter()
                .flatten()
                .copied()
                .filter(move |&d| Edge::canonical(v, d) == Edge(v, d))
                .map(move |d| Edge(v, d))
        })
    }

    /// Number of logical edges; an edge and its mirror count once.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// The slot an edge into `desc` occupies in its ancestor.
    #[inline]
    fn slot_of(&self, desc: Vertex) -> usize {
        self.nucls(desc).nucl(self.k - 1).index()
    }

    /// True if no vertex other than `v` and its complement has `v`
    /// among its descendants.
    pub fn can_be_deleted(&self, v: Vertex) -> bool {
        self.anc(v).into_iter().all(|a| {
            a == v || a == v.complement() || !self.record(a).targets(v)
        })
    }

    /// True if both vertices are live and the first `k - 1` symbols of
    /// `desc` equal the last `k - 1` symbols of `anc`.
    pub fn are_linkable(&self, anc: Vertex, desc: Vertex) -> bool {
        match (self.get_record(anc), self.get_record(desc)) {
            (Some(a), Some(d)) => {
                let overlap = self.k - 1;
                let prefix = &d.nucls.as_bytes()[..overlap];
                a.nucls.ends_with(prefix)
            }
            _ => false,
        }
    }

    /// The stored edge that would be overwritten by linking `anc ->
    /// desc`, found either in the slot of `anc` or in the mirrored
    /// slot of the complement of `desc`.
    pub fn conflicting_edge(&self, anc: Vertex, desc: Vertex) -> Option<Edge> {
        let edge = Edge(anc, desc);
        let mirror = edge.mirror();
        std::iter::once(edge)
            .chain(std::iter::once(mirror).filter(|_| !edge.is_self_mirror()))
            .find_map(|Edge(from, to)| {
                let slot = self.slot_of(to);
                self.record(from).desc[slot].map(|old| Edge(from, old))
            })
    }

    /// True if `v2` is the only descendant of `v1`, `v1` is the only
    /// ancestor of `v2`, and they belong to different pairs.
    pub fn is_merge_possible(&self, v1: Vertex, v2: Vertex) -> bool {
        self.contains(v1)
            && self.contains(v2)
            && v1.pair() != v2.pair()
            && self.desc(v1) == [v2]
            && self.anc(v2) == [v1]
    }

    /// Add a pair for `nucls` and its reverse complement, returning
    /// the vertex for `nucls`.
    pub fn add_vertex(&mut self, nucls: Sequence) -> Vertex {
        assert!(
            nucls.len() >= self.k,
            "Tried to add vertex '{}' shorter than k = {}",
            nucls,
            self.k
        );
        debug!(
            "Adding vertex for sequence '{}' and its complement '{}'",
            nucls,
            nucls.rev_comp()
        );

        let id = PairId(self.next_id);
        self.next_id += 1;

        let v = Vertex::pack(id, false);
        let pair = self
            .pairs
            .entry(id)
            .or_insert_with(|| VertexPair::new(nucls));
        self.handler.handle_add(v, &pair.strand(v).nucls);
        v
    }

    /// Delete `v` and its complement.
    ///
    /// Panics if any vertex besides `v` and its complement has an
    /// edge into either of them.
    pub fn delete_vertex(&mut self, v: Vertex) {
        assert!(
            self.can_be_deleted(v) && self.can_be_deleted(v.complement()),
            "Tried to delete vertex {} while other vertices link to it",
            v
        );
        self.free_pair(v);
    }

    /// Add the edge `anc -> desc` and its mirror.
    ///
    /// Panics if the vertices don't overlap by `k - 1` symbols, or if
    /// either slot already holds an edge.
    pub fn link_vertices(&mut self, anc: Vertex, desc: Vertex) {
        assert!(
            self.are_linkable(anc, desc),
            "Tried to link vertices {} and {} that don't overlap",
            anc,
            desc
        );
        debug!(
            "Linking vertices '{}' and '{}' and their complement",
            self.nucls(anc),
            self.nucls(desc)
        );

        if let Some(Edge(from, old)) = self.conflicting_edge(anc, desc) {
            panic!(
                "Tried to link {} -> {} but {} already links to {}",
                anc, desc, from, old
            );
        }

        self.add_desc(anc, desc);
        self.add_desc(desc.complement(), anc.complement());
    }

    /// Split `v` at `pos` into a prefix vertex and a suffix vertex
    /// that overlap by `k - 1` symbols, returning the prefix. Edges
    /// into `v` move to the prefix, edges out of `v` move to the
    /// suffix, and `v` is deleted.
    ///
    /// Splitting at the end of the sequence returns `v` unchanged.
    /// Panics unless `k <= pos <= len`.
    pub fn split_vertex(&mut self, v: Vertex, pos: usize) -> Vertex {
        let nucls = self.nucls(v).clone();
        assert!(
            pos >= self.k && pos <= nucls.len(),
            "Tried to split vertex {} of size {} at position {}",
            v,
            nucls.len(),
            pos
        );
        if pos == nucls.len() {
            return v;
        }
        debug!(
            "Splitting vertex '{}' of size {} at position {}",
            nucls,
            nucls.len(),
            pos
        );

        let anc = self.anc(v);
        let compl_anc = self.anc(v.complement());

        let v1 = self.add_vertex(nucls.slice(0..pos));
        let v2 = self.add_vertex(nucls.slice(pos - (self.k - 1)..nucls.len()));

        let mut links = vec![Edge(v1, v2)];
        links.extend(incoming_links(v, v, v1, v2, &anc));
        links.extend(incoming_links(
            v.complement(),
            v.complement(),
            v2.complement(),
            v1.complement(),
            &compl_anc,
        ));
        self.rewire(&links, &[v]);

        self.handler.handle_split(v, pos, v1, v2);

        self.free_pairs(&[v]);
        v1
    }

    /// Merge `v1` with its only descendant `v2` into a single vertex
    /// that takes over the ancestors of `v1` and the descendants of
    /// `v2`. Both `v1` and `v2` are deleted.
    ///
    /// Panics unless [`is_merge_possible`](Graph::is_merge_possible).
    pub fn merge(&mut self, v1: Vertex, v2: Vertex) -> Vertex {
        assert!(
            self.is_merge_possible(v1, v2),
            "Tried to merge vertices {} and {} that aren't a simple link",
            v1,
            v2
        );
        debug!(
            "Merging vertices '{}' and '{}' and their complement",
            self.nucls(v1),
            self.nucls(v2)
        );

        let tail = self.nucls(v2);
        let nucls = self.nucls(v1).concat(&tail.slice(self.k - 1..tail.len()));

        let anc = self.anc(v1);
        let compl_anc = self.anc(v2.complement());

        let v = self.add_vertex(nucls);

        let mut links = incoming_links(v1, v2, v, v, &anc);
        links.extend(incoming_links(
            v2.complement(),
            v1.complement(),
            v.complement(),
            v.complement(),
            &compl_anc,
        ));
        self.rewire(&links, &[v1, v2]);

        self.handler.handle_merge(v1, v2, v);

        self.free_pairs(&[v1, v2]);
        v
    }

    #[inline]
    fn add_desc(&mut self, anc: Vertex, desc: Vertex) {
        let slot = self.slot_of(desc);
        self.record_mut(anc).desc[slot] = Some(desc);
    }

    /// Apply a relink plan during a split or merge. An edge and its
    /// mirror are applied once. A slot may only be overwritten if it
    /// is empty or points into one of the `removed` pairs.
    fn rewire(&mut self, links: &[Edge], removed: &[Vertex]) {
        let mut applied: FnvHashSet<Edge> = FnvHashSet::default();
        for &Edge(anc, desc) in links {
            if !applied.insert(Edge::canonical(anc, desc)) {
                continue;
            }
            self.retarget(anc, desc, removed);
            self.retarget(desc.complement(), anc.complement(), removed);
        }
    }

    fn retarget(&mut self, anc: Vertex, desc: Vertex, removed: &[Vertex]) {
        let slot = self.slot_of(desc);
        let record = self.record_mut(anc);
        if let Some(old) = record.desc[slot] {
            let superseded = removed.iter().any(|r| r.pair() == old.pair());
            assert!(
                old == desc || superseded,
                "Relinking {} -> {} would overwrite the edge to {}",
                anc,
                desc,
                old
            );
        }
        record.desc[slot] = Some(desc);
    }

    /// Free the pairs of `removed` once nothing outside them links
    /// into any of their strands.
    fn free_pairs(&mut self, removed: &[Vertex]) {
        let is_removed =
            |x: Vertex| removed.iter().any(|r| r.pair() == x.pair());

        for &r in removed {
            for &strand in &[r, r.complement()] {
                let dangling = self
                    .anc(strand)
                    .into_iter()
                    .any(|a| !is_removed(a) && self.record(a).targets(strand));
                assert!(!dangling, "Vertex {} is still linked after relinking", strand);
            }
        }

        for &r in removed {
            self.free_pair(r);
        }
    }

    fn free_pair(&mut self, v: Vertex) {
        if let Some(pair) = self.pairs.get(&v.pair()) {
            let nucls = &pair.strand(v).nucls;
            debug!(
                "Deleting vertex '{}' and its complement '{}'",
                nucls,
                pair.strand(v.complement()).nucls
            );
            self.handler.handle_delete(v, nucls);
        }
        self.pairs.remove(&v.pair());
    }
}

/// The three-case relink of the edges into `target` once it is being
/// replaced by `head .. tail`:
///
/// 1. the complement of `target` pointing at it becomes `head' -> head`
/// 2. `looped -> target` becomes `tail -> head`
/// 3. any other ancestor `a` becomes `a -> head`
fn incoming_links(
    target: Vertex,
    looped: Vertex,
    head: Vertex,
    tail: Vertex,
    anc: &[Vertex],
) -> Vec<Edge> {
    anc.iter()
        .map(|&a| {
            if a == target.complement() {
                Edge(head.complement(), head)
            } else if a == looped {
                Edge(tail, head)
            } else {
                Edge(a, head)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{EventLog, GraphEvent};
    use crate::util::validate::validate;

    fn seq(s: &str) -> Sequence {
        s.parse().unwrap()
    }

    fn nucls_of<H: ActionHandler>(graph: &Graph<H>, vs: &[Vertex]) -> Vec<String> {
        vs.iter().map(|&v| graph.nucls(v).to_string()).collect()
    }

    #[test]
    fn add_vertex_creates_pair() {
        let mut graph = Graph::new(4);
        let v = graph.add_vertex(seq("ACGTAC"));

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.pair_count(), 1);
        assert_eq!(graph.nucls(v), &seq("ACGTAC"));
        assert_eq!(graph.nucls(v.complement()), &seq("GTACGT"));
        assert_eq!(graph.complement(graph.complement(v)), v);
        assert!(graph.desc(v).is_empty());
        assert!(graph.anc(v).is_empty());
        assert!(validate(&graph));
    }

    #[test]
    #[should_panic]
    fn add_vertex_shorter_than_k_panics() {
        let mut graph = Graph::new(4);
        graph.add_vertex(seq("ACG"));
    }

    #[test]
    fn link_two_vertices() {
        let mut graph = Graph::new(4);
        let v1 = graph.add_vertex(seq("ACGTAC"));
        let v2 = graph.add_vertex(seq("TACGGG"));

        assert!(graph.are_linkable(v1, v2));
        graph.link_vertices(v1, v2);

        assert_eq!(graph.desc(v1), vec![v2]);
        assert_eq!(graph.anc(v2), vec![v1]);
        // the mirror edge exists on the complement strand
        assert_eq!(graph.desc(v2.complement()), vec![v1.complement()]);
        assert_eq!(graph.edge_count(), 1);
        assert!(validate(&graph));
    }

    #[test]
    fn adjacency_is_checked() {
        let mut graph = Graph::new(4);
        let v1 = graph.add_vertex(seq("ACGTAC"));
        let v2 = graph.add_vertex(seq("TACGTT"));
        let v3 = graph.add_vertex(seq("GTTCCG"));

        assert!(!graph.are_linkable(v1, v3));
        assert!(graph.are_linkable(v1, v2));
        assert!(graph.are_linkable(v2, v3));
        assert!(!graph.are_linkable(v3, v1));
    }

    #[test]
    #[should_panic]
    fn link_without_overlap_panics() {
        let mut graph = Graph::new(4);
        let v1 = graph.add_vertex(seq("ACGTAC"));
        let v2 = graph.add_vertex(seq("GGGGGG"));
        graph.link_vertices(v1, v2);
    }

    #[test]
    #[should_panic]
    fn link_into_occupied_slot_panics() {
        let mut graph = Graph::new(4);
        let v1 = graph.add_vertex(seq("ACGTAC"));
        let v2 = graph.add_vertex(seq("TACGGG"));
        let v3 = graph.add_vertex(seq("TACGTT"));
        graph.link_vertices(v1, v2);
        graph.link_vertices(v1, v3);
    }

    #[test]
    fn ancestors_are_in_reverse_slot_order() {
        let mut graph = Graph::new(3);
        let d = graph.add_vertex(seq("GTAAA"));
        let a1 = graph.add_vertex(seq("CCAGT"));
        let a2 = graph.add_vertex(seq("CCTGT"));
        graph.link_vertices(a1, d);
        graph.link_vertices(a2, d);

        // complement slots are keyed by the complement of the base
        // before the overlap: A -> T and T -> A
        assert_eq!(graph.desc(d.complement()), vec![a2.complement(), a1.complement()]);
        assert_eq!(graph.anc(d), vec![a1, a2]);
    }

    #[test]
    fn delete_isolated_vertex() {
        let mut graph = Graph::with_handler(4, EventLog::new());
        let v = graph.add_vertex(seq("ACGTAC"));
        assert!(graph.can_be_deleted(v));
        graph.delete_vertex(v);

        assert!(!graph.contains(v));
        assert!(!graph.contains(v.complement()));
        assert_eq!(
            graph.handler().events,
            vec![GraphEvent::Add(v), GraphEvent::Delete(v)]
        );
    }

    #[test]
    #[should_panic]
    fn delete_linked_vertex_panics() {
        let mut graph = Graph::new(4);
        let v1 = graph.add_vertex(seq("ACGTAC"));
        let v2 = graph.add_vertex(seq("TACGGG"));
        graph.link_vertices(v1, v2);
        assert!(!graph.can_be_deleted(v2));
        graph.delete_vertex(v2);
    }

    #[test]
    #[should_panic]
    fn delete_vertex_with_outgoing_edge_panics() {
        let mut graph = Graph::new(4);
        let v1 = graph.add_vertex(seq("ACGTAC"));
        let v2 = graph.add_vertex(seq("TACGGG"));
        graph.link_vertices(v1, v2);
        // v2' -> v1' keeps the complement of v1 alive
        assert!(!graph.can_be_deleted(v1.complement()));
        graph.delete_vertex(v1);
    }

    #[test]
    fn split_moves_edges() {
        let mut graph = Graph::with_handler(4, EventLog::new());
        let a = graph.add_vertex(seq("TTACG"));
        let v = graph.add_vertex(seq("ACGTACGT"));
        let d = graph.add_vertex(seq("CGTCC"));
        graph.link_vertices(a, v);
        graph.link_vertices(v, d);
        graph.handler_mut().clear();

        let v1 = graph.split_vertex(v, 4);
        let v2 = graph.desc(v1)[0];

        assert_eq!(graph.nucls(v1), &seq("ACGT"));
        assert_eq!(graph.nucls(v2), &seq("CGTACGT"));
        assert_eq!(graph.anc(v1), vec![a]);
        assert_eq!(graph.desc(a), vec![v1]);
        assert_eq!(graph.desc(v2), vec![d]);
        assert_eq!(graph.anc(d), vec![v2]);
        assert!(!graph.contains(v));
        assert_eq!(graph.pair_count(), 4);
        assert!(validate(&graph));

        assert_eq!(
            graph.handler().events,
            vec![
                GraphEvent::Add(v1),
                GraphEvent::Add(v2),
                GraphEvent::Split { old: v, pos: 4, v1, v2 },
                GraphEvent::Delete(v),
            ]
        );
    }

    #[test]
    fn split_at_end_is_noop() {
        let mut graph = Graph::new(4);
        let v = graph.add_vertex(seq("ACGTACGT"));
        assert_eq!(graph.split_vertex(v, 8), v);
        assert!(graph.contains(v));
        assert_eq!(graph.pair_count(), 1);
    }

    #[test]
    #[should_panic]
    fn split_out_of_range_panics() {
        let mut graph = Graph::new(4);
        let v = graph.add_vertex(seq("ACGTACGT"));
        graph.split_vertex(v, 9);
    }

    #[test]
    #[should_panic]
    fn split_below_k_panics() {
        let mut graph = Graph::new(4);
        let v = graph.add_vertex(seq("ACGTACGT"));
        graph.split_vertex(v, 3);
    }

    #[test]
    #[should_panic]
    fn split_at_start_panics() {
        let mut graph = Graph::new(4);
        let v = graph.add_vertex(seq("ACGTACGT"));
        graph.split_vertex(v, 0);
    }

    #[test]
    fn rejected_split_leaves_graph_untouched() {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let mut graph = Graph::with_handler(4, EventLog::new());
        let a = graph.add_vertex(seq("TTACG"));
        let v = graph.add_vertex(seq("ACGTACGT"));
        graph.link_vertices(a, v);
        graph.handler_mut().clear();

        for &pos in &[0, 3, 9] {
            let result = catch_unwind(AssertUnwindSafe(|| graph.split_vertex(v, pos)));
            assert!(result.is_err());
        }

        assert!(graph.handler().events.is_empty());
        assert_eq!(graph.pair_count(), 2);
        assert_eq!(graph.desc(a), vec![v]);
        assert!(validate(&graph));
    }

    #[test]
    fn split_self_loop() {
        let mut graph = Graph::new(3);
        // the last two symbols equal the first two
        let v = graph.add_vertex(seq("ACGTAC"));
        graph.link_vertices(v, v);
        assert_eq!(graph.anc(v), vec![v]);

        let v1 = graph.split_vertex(v, 4);
        let v2 = graph.desc(v1)[0];
        assert_eq!(nucls_of(&graph, &[v1, v2]), vec!["ACGT", "GTAC"]);
        // the loop now closes through the tail
        assert_eq!(graph.desc(v2), vec![v1]);
        assert_eq!(graph.anc(v1), vec![v2]);
        assert_eq!(graph.edge_count(), 2);
        assert!(validate(&graph));
    }

    #[test]
    fn split_hairpin() {
        let mut graph = Graph::new(3);
        // AT is its own reverse complement, so the complement strand
        // can link into the vertex
        let v = graph.add_vertex(seq("ATGCCA"));
        let vc = v.complement();
        assert_eq!(graph.nucls(vc), &seq("TGGCAT"));
        graph.link_vertices(vc, v);
        assert_eq!(graph.anc(v), vec![vc]);
        assert_eq!(graph.edge_count(), 1);

        let v1 = graph.split_vertex(v, 3);
        assert_eq!(graph.nucls(v1), &seq("ATG"));
        assert!(graph.desc(v1.complement()).contains(&v1));
        assert_eq!(graph.edge_count(), 2);
        assert!(validate(&graph));
    }

    #[test]
    fn merge_joins_chain() {
        let mut graph = Graph::with_handler(4, EventLog::new());
        let a = graph.add_vertex(seq("GGACG"));
        let v1 = graph.add_vertex(seq("ACGTAC"));
        let v2 = graph.add_vertex(seq("TACGGG"));
        let d = graph.add_vertex(seq("GGGA"));
        graph.link_vertices(a, v1);
        graph.link_vertices(v1, v2);
        graph.link_vertices(v2, d);
        graph.handler_mut().clear();

        assert!(graph.is_merge_possible(v1, v2));
        assert!(!graph.is_merge_possible(v2, v1));
        let v = graph.merge(v1, v2);

        assert_eq!(graph.nucls(v), &seq("ACGTACGGG"));
        assert_eq!(graph.anc(v), vec![a]);
        assert_eq!(graph.desc(v), vec![d]);
        assert!(!graph.contains(v1));
        assert!(!graph.contains(v2));
        assert!(validate(&graph));

        assert_eq!(
            graph.handler().events,
            vec![
                GraphEvent::Add(v),
                GraphEvent::Merge { v1, v2, merged: v },
                GraphEvent::Delete(v1),
                GraphEvent::Delete(v2),
            ]
        );
    }

    #[test]
    fn merge_two_cycle_becomes_self_loop() {
        let mut graph = Graph::new(3);
        let v1 = graph.add_vertex(seq("ACGT"));
        let v2 = graph.add_vertex(seq("GTAC"));
        graph.link_vertices(v1, v2);
        graph.link_vertices(v2, v1);

        let v = graph.merge(v1, v2);
        assert_eq!(graph.nucls(v), &seq("ACGTAC"));
        assert_eq!(graph.desc(v), vec![v]);
        assert_eq!(graph.anc(v), vec![v]);
        assert_eq!(graph.pair_count(), 1);
        assert!(validate(&graph));
    }

    #[test]
    #[should_panic]
    fn merge_branching_panics() {
        let mut graph = Graph::new(4);
        let v1 = graph.add_vertex(seq("ACGTAC"));
        let v2 = graph.add_vertex(seq("TACGGG"));
        let v3 = graph.add_vertex(seq("TACTTT"));
        graph.link_vertices(v1, v2);
        graph.link_vertices(v1, v3);
        graph.merge(v1, v2);
    }

    #[test]
    fn split_then_merge_restores_sequence() {
        for pos in 4..11 {
            let mut graph = Graph::new(4);
            let v = graph.add_vertex(seq("ACGTTGCAAGT"));
            let v1 = graph.split_vertex(v, pos);
            let v2 = graph.desc(v1)[0];
            assert!(validate(&graph));

            let merged = graph.merge(v1, v2);
            assert_eq!(graph.nucls(merged), &seq("ACGTTGCAAGT"));
            assert_eq!(graph.pair_count(), 1);
            assert_eq!(graph.edge_count(), 0);
        }
    }

    #[test]
    fn stale_vertex_is_not_contained() {
        let mut graph = Graph::new(4);
        let v = graph.add_vertex(seq("ACGTAC"));
        graph.delete_vertex(v);
        let w = graph.add_vertex(seq("ACGTAC"));
        assert_ne!(v, w);
        assert!(!graph.contains(v));
        assert!(graph.get_record(v).is_none());
    }
}
