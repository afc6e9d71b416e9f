/*!
# IO

Utilities for reading and writing graphs from and to textual formats.

## Formats

- **EdgeList**: a header line `# directed` or `# undirected` followed by one line `u v [w]` per
  inserted edge. Can be written and read.
- **Dot**: The [DOT language](https://graphviz.org/doc/info/lang.html) of [GraphViz](https://graphviz.org/).
  Write-only; labels are written as-is and thus have to follow DOT's naming conventions.

Additionally, graphs with displayable labels implement [`Display`] which prints the
topological order of the graph enclosed in braces, e.g. `{a b c }`.

## Traits

[`GraphReader`]/[`GraphWriter`] are implemented by the configurable readers and writers
(e.g. [`EdgeListReader`], [`DotWriter`]); [`EdgeListRead`], [`EdgeListWrite`] and [`DotWrite`]
are shorthands on the graph itself using default settings.
*/

pub mod dot;
pub mod edge_list;

use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    algo::Topology,
    error::{GraphError, Result},
    prelude::*,
};

pub use dot::*;
pub use edge_list::*;

/// Reader for a specific format; the settings are stored in `self`.
pub trait GraphReader<G> {
    /// Parses a graph from `reader`.
    ///
    /// # Errors
    /// [`GraphError::Malformed`] or [`GraphError::InvalidGraphKind`] on invalid input,
    /// [`GraphError::Io`] if reading fails.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Opens `path` and parses its content via [`GraphReader::try_read_graph`]
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Writer for a specific format; the settings are stored in `self`.
pub trait GraphWriter<G> {
    /// Writes `graph` to `writer`.
    ///
    /// # Errors
    /// [`GraphError::Io`] if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Creates (or truncates) `path` and writes `graph` into it
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_graph(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl<T, W> Display for Graph<T, W>
where
    T: Label + Display,
    W: Weight,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for label in self.topological_sort() {
            write!(f, "{label} ")?;
        }
        write!(f, "}}")
    }
}

/// Shorthand for returning `Err(GraphError::Malformed)` early when a condition fails
macro_rules! raise_malformed_unless {
    ($cond : expr, $line : expr, $info : expr) => {
        if !($cond) {
            return Err(GraphError::Malformed {
                line: $line,
                message: $info,
            });
        }
    };
}

/// Tries to parse the next token of a line and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $line : expr, $name : expr) => {{
        let Some(token) = $iterator.next() else {
            return Err(GraphError::Malformed {
                line: $line,
                message: format!("Premature end of line when parsing {}", $name),
            });
        };

        match token.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(GraphError::Malformed {
                    line: $line,
                    message: format!("Cannot parse {} from {token:?}", $name),
                });
            }
        }
    }};
}

use parse_next_value;
use raise_malformed_unless;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_topological_order() {
        let g = UnweightedGraph::from_edges(GraphKind::Directed, [("c", "a"), ("a", "b"), ("c", "b")]);
        assert_eq!(g.to_string(), "{c a b }");

        let empty = UnweightedGraph::<u8>::undirected();
        assert_eq!(empty.to_string(), "{}");
    }
}
