/*!
# Graph Representations

- [`Graph`] is the user-facing adjacency-list graph over arbitrary labels and weights.
- [`AdjacencyView`] is an unlabelled, owned adjacency list used by algorithms that need a
  derived graph (the transpose for Kosaraju, the underlying undirected graph for weak
  connectivity).
*/

use std::{fmt::Display, str::FromStr};

use crate::{
    error::{GraphError, Result},
    ops::*,
    *,
};

mod graph;
mod view;

pub use graph::*;
pub use view::*;

/// Orientation of the edges of a graph, fixed at construction
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GraphKind {
    /// `add_edge(u, v)` only creates `u -> v`
    Directed,
    /// `add_edge(u, v)` creates `u -> v` and `v -> u`
    Undirected,
}

impl FromStr for GraphKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "directed" => Ok(GraphKind::Directed),
            "undirected" => Ok(GraphKind::Undirected),
            _ => Err(GraphError::InvalidGraphKind(s.to_string())),
        }
    }
}

impl Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphKind::Directed => write!(f, "directed"),
            GraphKind::Undirected => write!(f, "undirected"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_kind() {
        assert_eq!("directed".parse::<GraphKind>().unwrap(), GraphKind::Directed);
        assert_eq!(
            "undirected".parse::<GraphKind>().unwrap(),
            GraphKind::Undirected
        );

        let err = "Directed".parse::<GraphKind>().unwrap_err();
        assert!(matches!(err, GraphError::InvalidGraphKind(ref s) if s == "Directed"));

        assert_eq!(GraphKind::Undirected.to_string(), "undirected");
    }
}
