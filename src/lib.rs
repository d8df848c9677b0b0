/*!
A condensed de Bruijn graph over DNA sequences.

# Overview

Every vertex of a [`Graph`](graph::Graph) holds a nucleotide sequence
of length at least `k`, and every vertex comes with a twin holding the
reverse complement. An edge `a -> b` means that the last `k - 1`
nucleotides of `a` equal the first `k - 1` of `b`, and each edge
implies its mirror `b' -> a'` on the opposite strand. The graph keeps
both halves of this structure consistent through every mutation.

Mutations are limited to adding and deleting vertex pairs, linking
two vertices, splitting a vertex at a position, and merging two
vertices that form a simple chain. Each of them is reported to an
[`ActionHandler`](action::ActionHandler), so that external indices
can follow along.

# Vertices and edges

The core types are defined in [`vertex`]:

* [`PairId`](vertex::PairId) is a newtype identifying a complementary
  pair of vertices
* [`Vertex`](vertex::Vertex) is one strand of a pair; its complement
  is found by flipping a bit
* [`Edge`](vertex::Edge) is a directed edge between two vertices

Sequences are stored as [`Sequence`](sequence::Sequence).

# Misc.

* [`traversal`] has a depth-first walk over the whole graph
* [`visualize`] renders a graph as Graphviz DOT
* [`conversion`] has functions for converting from GFA to a graph and back
* [`algorithms`] has graph-wide transformations, such as condensing
  non-branching paths

*/

pub mod sequence;
pub mod vertex;

pub mod action;
pub mod graph;

pub mod algorithms;
pub mod conversion;
pub mod traversal;
pub mod util;
pub mod visualize;
