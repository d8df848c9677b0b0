/*!

Depth-first traversal over every vertex of a [`Graph`].

The walk uses an explicit stack, since repeats in a genome make the
graph cyclic and arbitrarily deep. Every live vertex is used as a
root in turn, so disconnected components are visited as well.

*/

use fnv::FnvHashSet;

use crate::action::ActionHandler;
use crate::graph::Graph;
use crate::vertex::Vertex;

/// Receives the vertices and edges discovered by [`Dfs::traverse`].
pub trait TraversalHandler {
    /// Called once per vertex, the first time it is expanded.
    fn handle_start_vertex(&mut self, _v: Vertex) {}

    /// Called for every edge out of an expanded vertex, including
    /// edges into vertices that were already visited.
    fn handle_edge(&mut self, _from: Vertex, _to: Vertex) {}
}

impl<'a, T: TraversalHandler> TraversalHandler for &'a mut T {
    #[inline]
    fn handle_start_vertex(&mut self, v: Vertex) {
        (**self).handle_start_vertex(v)
    }

    #[inline]
    fn handle_edge(&mut self, from: Vertex, to: Vertex) {
        (**self).handle_edge(from, to)
    }
}

pub struct Dfs<'a, H> {
    graph: &'a Graph<H>,
    visited: FnvHashSet<Vertex>,
}

impl<'a, H: ActionHandler> Dfs<'a, H> {
    pub fn new(graph: &'a Graph<H>) -> Self {
        Dfs {
            graph,
            visited: FnvHashSet::default(),
        }
    }

    /// Walk the whole graph, reporting to `handler`. Each call starts
    /// from scratch.
    pub fn traverse<T: TraversalHandler>(&mut self, handler: &mut T) {
        self.visited.clear();

        let graph = self.graph;
        let mut stack: Vec<Vertex> = Vec::new();
        for root in graph.vertices() {
            stack.push(root);
            while let Some(v) = stack.pop() {
                self.go(v, &mut stack, handler);
            }
        }
    }

    fn go<T: TraversalHandler>(
        &mut self,
        v: Vertex,
        stack: &mut Vec<Vertex>,
        handler: &mut T,
    ) {
        if !self.visited.insert(v) {
            return;
        }
        handler.handle_start_vertex(v);
        for desc in self.graph.desc(v) {
            handler.handle_edge(v, desc);
            stack.push(desc);
        }
    }

    #[inline]
    pub fn visited(&self) -> &FnvHashSet<Vertex> {
        &self.visited
    }
}
