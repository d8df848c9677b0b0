/*!

Notifications for structural graph mutations.

A [`Graph`](crate::graph::Graph) owns exactly one [`ActionHandler`],
which is called synchronously from inside every mutation. The payloads
are plain handles and sequences, so a handler cannot call back into
the graph.

Ordering guarantees:

* `handle_add` fires after the new pair is live.
* `handle_split` and `handle_merge` fire after the new vertices are
  fully linked, while the superseded vertices still exist.
* `handle_delete` fires right before the pair is freed.

*/

use fnv::FnvHashMap;

use crate::sequence::Sequence;
use crate::vertex::Vertex;

/// Observer for structural mutations. All methods default to doing
/// nothing.
pub trait ActionHandler {
    /// A new pair was added; `vertex` is its primary strand.
    fn handle_add(&mut self, _vertex: Vertex, _nucls: &Sequence) {}

    /// The pair of `vertex` is about to be freed.
    fn handle_delete(&mut self, _vertex: Vertex, _nucls: &Sequence) {}

    /// `old` was split at `pos` into `v1` and `v2`.
    fn handle_split(
        &mut self,
        _old: Vertex,
        _pos: usize,
        _v1: Vertex,
        _v2: Vertex,
    ) {
    }

    /// `v1` and `v2` were merged into `merged`.
    fn handle_merge(&mut self, _v1: Vertex, _v2: Vertex, _merged: Vertex) {}
}

impl ActionHandler for () {}

impl<'a, H: ActionHandler> ActionHandler for &'a mut H {
    #[inline]
    fn handle_add(&mut self, vertex: Vertex, nucls: &Sequence) {
        (**self).handle_add(vertex, nucls)
    }

    #[inline]
    fn handle_delete(&mut self, vertex: Vertex, nucls: &Sequence) {
        (**self).handle_delete(vertex, nucls)
    }

    #[inline]
    fn handle_split(&mut self, old: Vertex, pos: usize, v1: Vertex, v2: Vertex) {
        (**self).handle_split(old, pos, v1, v2)
    }

    #[inline]
    fn handle_merge(&mut self, v1: Vertex, v2: Vertex, merged: Vertex) {
        (**self).handle_merge(v1, v2, merged)
    }
}

/// Fans every notification out to both handlers, first to second.
impl<A, B> ActionHandler for (A, B)
where
    A: ActionHandler,
    B: ActionHandler,
{
    fn handle_add(&mut self, vertex: Vertex, nucls: &Sequence) {
        self.0.handle_add(vertex, nucls);
        self.1.handle_add(vertex, nucls);
    }

    fn handle_delete(&mut self, vertex: Vertex, nucls: &Sequence) {
        self.0.handle_delete(vertex, nucls);
        self.1.handle_delete(vertex, nucls);
    }

    fn handle_split(&mut self, old: Vertex, pos: usize, v1: Vertex, v2: Vertex) {
        self.0.handle_split(old, pos, v1, v2);
        self.1.handle_split(old, pos, v1, v2);
    }

    fn handle_merge(&mut self, v1: Vertex, v2: Vertex, merged: Vertex) {
        self.0.handle_merge(v1, v2, merged);
        self.1.handle_merge(v1, v2, merged);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphEvent {
    Add(Vertex),
    Delete(Vertex),
    Split {
        old: Vertex,
        pos: usize,
        v1: Vertex,
        v2: Vertex,
    },
    Merge {
        v1: Vertex,
        v2: Vertex,
        merged: Vertex,
    },
}

/// Records every notification in order.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    pub events: Vec<GraphEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl ActionHandler for EventLog {
    fn handle_add(&mut self, vertex: Vertex, _nucls: &Sequence) {
        self.events.push(GraphEvent::Add(vertex));
    }

    fn handle_delete(&mut self, vertex: Vertex, _nucls: &Sequence) {
        self.events.push(GraphEvent::Delete(vertex));
    }

    fn handle_split(&mut self, old: Vertex, pos: usize, v1: Vertex, v2: Vertex) {
        self.events.push(GraphEvent::Split { old, pos, v1, v2 });
    }

    fn handle_merge(&mut self, v1: Vertex, v2: Vertex, merged: Vertex) {
        self.events.push(GraphEvent::Merge { v1, v2, merged });
    }
}

/// Sequence to vertex lookup kept in sync with the graph through
/// notifications. Both strands of every live pair are indexed.
#[derive(Debug, Default, Clone)]
pub struct SequenceIndex {
    index: FnvHashMap<Sequence, Vertex>,
}

impl SequenceIndex {
    pub fn new() -> Self {
        Default::default()
    }

    #[inline]
    pub fn get(&self, nucls: &Sequence) -> Option<Vertex> {
        self.index.get(nucls).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    fn remove_if_pair(&mut self, nucls: &Sequence, vertex: Vertex) {
        if self.get(nucls).map(Vertex::pair) == Some(vertex.pair()) {
            self.index.remove(nucls);
        }
    }
}

impl ActionHandler for SequenceIndex {
    fn handle_add(&mut self, vertex: Vertex, nucls: &Sequence) {
        // a palindromic pair is indexed once, under the primary strand
        self.index.insert(nucls.rev_comp(), vertex.complement());
        self.index.insert(nucls.clone(), vertex);
    }

    fn handle_delete(&mut self, vertex: Vertex, nucls: &Sequence) {
        self.remove_if_pair(nucls, vertex);
        self.remove_if_pair(&nucls.rev_comp(), vertex);
    }
}
