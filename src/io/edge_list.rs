//! # EdgeList
//!
//! The EdgeList-Format consists of a header line `# directed` or `# undirected`, followed by one
//! non-comment-line `u v [w]` per inserted edge. Undirected edges appear once.
//! The weight is omitted for unweighted graphs.
//!
//! ```text
//! # directed
//! a b 2.5
//! b c -1
//! ```

use std::{
    io::{Lines, Write},
    str::FromStr,
};

use super::*;

/// Weights that can be parsed from the optional third token of an edge line
pub trait WeightToken: Weight {
    /// Parses the weight from the token following both endpoints (`None` if there is none).
    /// Returns an error message on failure.
    fn from_token(token: Option<&str>) -> std::result::Result<Self, String>;
}

impl WeightToken for Unit {
    fn from_token(token: Option<&str>) -> std::result::Result<Self, String> {
        match token {
            None => Ok(Unit),
            Some(t) => Err(format!("Unexpected weight {t:?} in an unweighted graph")),
        }
    }
}

macro_rules! impl_numeric_weight_token {
    ($($t:ty),*) => {
        $(
            impl WeightToken for $t {
                fn from_token(token: Option<&str>) -> std::result::Result<Self, String> {
                    let token = token.ok_or_else(|| "Premature end of line when parsing weight".to_string())?;
                    token
                        .parse()
                        .map_err(|_| format!("Cannot parse weight from {token:?}"))
                }
            }
        )*
    };
}

impl_numeric_weight_token!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "%".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier (`%` by default).
    /// The header line is always recognized by its leading `#`.
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl<T, C> GraphReader<Graph<T, C>> for EdgeListReader
where
    T: Label + FromStr,
    C: WeightToken,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<Graph<T, C>> {
        let mut edges_reader = EdgeListEdgesReader::try_new(reader, &self.comment_identifier)?;
        let mut graph = Graph::new(edges_reader.kind());
        while let Some(edge) = edges_reader.parse_edge_line()? {
            graph.add_weighted_edge(edge.from, edge.to, edge.weight);
        }
        Ok(graph)
    }
}

/// Trait for creating graphs form an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<T, C> EdgeListRead for Graph<T, C>
where
    T: Label + FromStr,
    C: WeightToken,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Line-based parser behind [`EdgeListReader`]
struct EdgeListEdgesReader<'a, R> {
    /// Lines in the reader
    lines: Lines<R>,
    /// Number of lines consumed so far (1-based line number of the last line)
    line_number: usize,
    /// Kind parsed from the header
    kind: GraphKind,
    /// Comment identifier
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> EdgeListEdgesReader<'a, R> {
    /// Creates a new reader and tries to parse the first non-empty line as the header
    fn try_new(reader: R, comment_identifier: &'a str) -> Result<Self> {
        let mut edge_list_reader = Self {
            lines: reader.lines(),
            line_number: 0,
            kind: GraphKind::Directed,
            comment_identifier,
        };

        let header = loop {
            match edge_list_reader.next_line()? {
                None => {
                    return Err(GraphError::Malformed {
                        line: edge_list_reader.line_number + 1,
                        message: "Header not found".to_string(),
                    });
                }
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => break line,
            }
        };

        let header = header.trim();
        raise_malformed_unless!(
            header.starts_with('#'),
            edge_list_reader.line_number,
            format!("Expected header `# directed` or `# undirected`, found {header:?}")
        );
        edge_list_reader.kind = header.trim_start_matches('#').trim().parse()?;

        Ok(edge_list_reader)
    }

    fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Returns the next line while keeping track of line numbers
    fn next_line(&mut self) -> Result<Option<String>> {
        match self.lines.next() {
            None => Ok(None),
            Some(line) => {
                self.line_number += 1;
                Ok(Some(line?))
            }
        }
    }

    /// Returns the next non-comment-line if it exists or propagate an error
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            match self.next_line()? {
                None => return Ok(None),
                Some(line) if line.trim().is_empty() => continue,
                Some(line) if line.starts_with(self.comment_identifier) => continue,
                Some(line) => return Ok(Some(line)),
            }
        }
    }

    /// Tries to parse an edge from the next non-comment-line
    fn parse_edge_line<T, C>(&mut self) -> Result<Option<WeightedEdge<T, C>>>
    where
        T: FromStr,
        C: WeightToken,
    {
        let Some(line) = self.next_non_comment_line()? else {
            return Ok(None);
        };

        let line_number = self.line_number;
        let mut parts = line.split_whitespace();

        let from: T = parse_next_value!(parts, line_number, "source node");
        let to: T = parse_next_value!(parts, line_number, "target node");
        let weight = C::from_token(parts.next()).map_err(|message| GraphError::Malformed {
            line: line_number,
            message,
        })?;

        let rest = parts.next();
        raise_malformed_unless!(
            rest.is_none(),
            line_number,
            format!("Unexpected trailing token {:?}", rest.unwrap_or_default())
        );

        Ok(Some(WeightedEdge::new(from, to, weight)))
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl<T, C> GraphWriter<Graph<T, C>> for EdgeListWriter
where
    T: Label + Display,
    C: Weight,
{
    fn try_write_graph<W: Write>(&self, graph: &Graph<T, C>, mut writer: W) -> Result<()> {
        writeln!(writer, "# {}", graph.kind())?;

        for WeightedEdge { from, to, weight } in graph.edges() {
            match weight.label() {
                Some(label) => writeln!(writer, "{from} {to} {label}")?,
                None => writeln!(writer, "{from} {to}")?,
            }
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl<T, C> EdgeListWrite for Graph<T, C>
where
    T: Label + Display,
    C: Weight,
{
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter.try_write_graph(self, writer)
    }
}
