/*!

Graphviz rendering of a [`Graph`], built on the DFS callback stream.

*/

use std::io::{self, Write};

use crate::action::ActionHandler;
use crate::graph::Graph;
use crate::traversal::{Dfs, TraversalHandler};
use crate::vertex::Vertex;

#[allow(unused_imports)]
use log::{debug, error, info, trace};

/// Writes one DOT node per started vertex and one arc per reported
/// edge. The first write error is kept and returned by
/// [`finish`](DotPrinter::finish); later callbacks are ignored.
pub struct DotPrinter<'a, H, W: Write> {
    graph: &'a Graph<H>,
    out: W,
    error: Option<io::Error>,
}

impl<'a, H: ActionHandler, W: Write> DotPrinter<'a, H, W> {
    pub fn new(graph: &'a Graph<H>, mut out: W) -> Self {
        let error = writeln!(out, "digraph {{").err();
        DotPrinter { graph, out, error }
    }

    fn write_line(&mut self, args: std::fmt::Arguments<'_>) {
        if self.error.is_none() {
            if let Err(err) = self.out.write_fmt(args) {
                self.error = Some(err);
            }
        }
    }

    /// Close the digraph and return the writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.write_line(format_args!("}}\n"));
        match self.error {
            Some(err) => Err(err),
            None => {
                self.out.flush()?;
                Ok(self.out)
            }
        }
    }
}

impl<'a, H: ActionHandler, W: Write> TraversalHandler for DotPrinter<'a, H, W> {
    fn handle_start_vertex(&mut self, v: Vertex) {
        let nucls = self.graph.nucls(v);
        self.write_line(format_args!("  \"{}\" [label=\"{}\"];\n", v, nucls));
    }

    fn handle_edge(&mut self, from: Vertex, to: Vertex) {
        self.write_line(format_args!("  \"{}\" -> \"{}\";\n", from, to));
    }
}

/// Render `graph` as a DOT digraph into `out`.
pub fn visualize<H, W>(graph: &Graph<H>, out: W) -> io::Result<W>
where
    H: ActionHandler,
    W: Write,
{
    debug!(
        "rendering graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    let mut printer = DotPrinter::new(graph, out);
    Dfs::new(graph).traverse(&mut printer);
    printer.finish()
}
