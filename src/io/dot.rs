//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality to draw labelled nodes and edges.
//!
//! Directed graphs are written as `digraph`, undirected graphs as `graph` (each edge once).
//! Edges whose weight carries information get a `label` attribute, e.g.
//! ```text
//! digraph {
//!   a->b[label=3];
//!   b->c[label=-1.5];
//! }
//! ```
//!
//! Node labels are written via their `Display` implementation and not escaped.
use std::io::Write;

use super::*;

/// A writer for the Dot-Format
#[derive(Debug, Clone, Default)]
pub struct DotWriter {
    /// Optional name written after `digraph`/`graph`
    graph_name: Option<String>,
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name of the graph, i.e. `digraph <name> { ... }`
    pub fn graph_name<S>(mut self, name: S) -> DotWriter
    where
        S: Into<String>,
    {
        self.graph_name = Some(name.into());
        self
    }

    /// Writes the opening line of the graph.
    /// Must know if the graph is directed.
    pub fn start_graph<W>(&self, writer: &mut W, directed: bool) -> Result<()>
    where
        W: Write,
    {
        let graph_type = if directed { "digraph" } else { "graph" };
        match &self.graph_name {
            Some(name) => writeln!(writer, "{graph_type} {name} {{")?,
            None => writeln!(writer, "{graph_type} {{")?,
        }
        Ok(())
    }

    /// Writes an iterator of weighted edges to `writer`, one edge per line.
    /// Must know if the edges are directed.
    pub fn write_edges<W, I, T, C>(&self, writer: &mut W, edges: I, directed: bool) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = WeightedEdge<T, C>>,
        T: Display,
        C: Weight,
    {
        let edge_dir = if directed { "->" } else { "--" };

        for WeightedEdge { from, to, weight } in edges {
            match weight.label() {
                Some(label) => writeln!(writer, "  {from}{edge_dir}{to}[label={label}];")?,
                None => writeln!(writer, "  {from}{edge_dir}{to};")?,
            }
        }
        Ok(())
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")?;
        Ok(())
    }
}

impl<T, C> GraphWriter<Graph<T, C>> for DotWriter
where
    T: Label + Display,
    C: Weight,
{
    fn try_write_graph<W>(&self, graph: &Graph<T, C>, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        self.start_graph(&mut writer, graph.is_directed())?;
        self.write_edges(&mut writer, graph.edges(), graph.is_directed())?;
        self.finish_graph(&mut writer)
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl<T, C> DotWrite for Graph<T, C>
where
    T: Label + Display,
    C: Weight,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn to_dot<G: DotWrite>(graph: &G) -> String {
        let mut buffer = Vec::new();
        graph.try_write_dot(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn directed_weighted() {
        let g = WeightedGraph::from_weighted_edges(
            GraphKind::Directed,
            [(("a", "b"), 3), (("b", "c"), -1)],
        );
        assert_eq!(to_dot(&g), "digraph {\n  a->b[label=3];\n  b->c[label=-1];\n}\n");
    }

    #[test]
    fn undirected_edges_are_written_once() {
        let g = UnweightedGraph::from_edges(GraphKind::Undirected, [(1, 2), (2, 3)]);
        assert_eq!(to_dot(&g), "graph {\n  1--2;\n  2--3;\n}\n");
    }

    #[test]
    fn named_graph() {
        let g = UnweightedGraph::from_edges(GraphKind::Directed, [('x', 'y')]);
        let mut buffer = Vec::new();
        DotWriter::new()
            .graph_name("G")
            .try_write_graph(&g, &mut buffer)
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "digraph G {\n  x->y;\n}\n");
    }
}
