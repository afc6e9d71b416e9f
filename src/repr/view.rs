use super::*;

/// An owned, unlabelled adjacency list over dense node ids.
///
/// Obtained via [`AdjacencyList::transposed`] or [`AdjacencyList::underlying_undirected`].
#[derive(Debug, Clone)]
pub struct AdjacencyView<W> {
    kind: GraphKind,
    adjacency: Vec<Vec<(Node, W)>>,
}

impl<W> AdjacencyView<W> {
    /// Wraps the given adjacency lists. Every neighbor must be smaller than `adjacency.len()`.
    pub fn new(kind: GraphKind, adjacency: Vec<Vec<(Node, W)>>) -> Self {
        debug_assert!(
            adjacency
                .iter()
                .flatten()
                .all(|&(v, _)| (v as usize) < adjacency.len())
        );
        Self { kind, adjacency }
    }
}

impl<W> GraphType for AdjacencyView<W> {
    fn kind(&self) -> GraphKind {
        self.kind
    }
}

impl<W> GraphNodeOrder for AdjacencyView<W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.adjacency.len() as NumNodes
    }
}

impl<W: Weight> AdjacencyList for AdjacencyView<W> {
    type Weight = W;

    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, W)> + '_ {
        self.adjacency[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.adjacency[u as usize].len() as NumNodes
    }
}
