use std::ops::Range;

use crate::{
    error::{GraphError, Result},
    prelude::*,
};

/// Provides the kind (directed/undirected) of a graph
pub trait GraphType {
    /// Returns the kind the graph was constructed with
    fn kind(&self) -> GraphKind;

    /// Returns *true* if edges are oriented
    fn is_directed(&self) -> bool {
        self.kind() == GraphKind::Directed
    }

    /// Returns *true* if edges are not oriented
    fn is_undirected(&self) -> bool {
        self.kind() == GraphKind::Undirected
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over all dense node ids.
    /// The range does not borrow self.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Traits pertaining getters for neighborhoods
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Weight attached to each edge
    type Weight: Weight;

    /// Returns an iterator over the (out-)neighbors of `u` with the weight of the connecting edge.
    /// Neighbors are returned in insertion order, parallel edges multiple times.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Self::Weight)> + '_;

    /// Returns an iterator over the (out-)neighbors of `u`.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.weighted_neighbors_of(u).map(|(v, _)| v)
    }

    /// Returns the number of (outgoing) adjacency entries of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator to all vertices with non-zero degree
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(move |&u| self.degree_of(u) > 0)
    }

    /// Returns the number of incoming adjacency entries of every node
    fn in_degrees(&self) -> Vec<NumNodes> {
        let mut in_degs = vec![0; self.len()];
        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                in_degs[v as usize] += 1;
            }
        }
        in_degs
    }

    /// Returns the first adjacency entry with negative cost as `(u, v, weight)`
    fn find_negative_weight(&self) -> Option<(Node, Node, Self::Weight)> {
        self.vertices().find_map(|u| {
            self.weighted_neighbors_of(u)
                .find(|(_, w)| w.cost().is_negative())
                .map(|(v, w)| (u, v, w))
        })
    }

    /// Returns a copy of the adjacency with every entry `u -> v` replaced by `v -> u`
    fn transposed(&self) -> AdjacencyView<Self::Weight> {
        let mut adjacency = vec![Vec::new(); self.len()];
        for u in self.vertices() {
            for (v, w) in self.weighted_neighbors_of(u) {
                adjacency[v as usize].push((u, w));
            }
        }
        AdjacencyView::new(GraphKind::Directed, adjacency)
    }

    /// Returns the underlying undirected adjacency: for undirected graphs, a copy of the graph,
    /// for directed graphs, the union of the graph and its transpose.
    fn underlying_undirected(&self) -> AdjacencyView<Self::Weight>
    where
        Self: GraphType,
    {
        let mut adjacency: Vec<Vec<(Node, Self::Weight)>> = self
            .vertices()
            .map(|u| self.weighted_neighbors_of(u).collect())
            .collect();

        if self.is_directed() {
            for u in self.vertices() {
                for (v, w) in self.weighted_neighbors_of(u) {
                    if u != v {
                        adjacency[v as usize].push((u, w));
                    }
                }
            }
        }

        AdjacencyView::new(GraphKind::Undirected, adjacency)
    }
}

/// Provides getters pertaining to the edges as they were inserted
pub trait GraphEdgeOrder: AdjacencyList {
    /// Returns the number of inserted edges.
    /// Undirected edges count once even though they appear in two neighborhoods.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns an iterator over all inserted edges in insertion order.
    /// Undirected edges are returned once in the orientation they were inserted with.
    fn inserted_edges(&self) -> impl Iterator<Item = (Node, Node, Self::Weight)> + '_;

    /// Returns *true* if the graph has no edges
    fn has_no_edges(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Translation between labels and dense node ids
pub trait LabelledGraph: GraphNodeOrder {
    /// Type of the user-facing node labels
    type Label: Label;

    /// Returns the label of the dense node `u`
    /// ** Panics if `u >= n` **
    fn label_of(&self, u: Node) -> &Self::Label;

    /// Returns the dense id of a label if the label is part of the graph
    fn node_of(&self, label: &Self::Label) -> Option<Node>;

    /// Returns the dense id of a label or [`GraphError::NodeNotFound`]
    fn try_node_of(&self, label: &Self::Label) -> Result<Node> {
        self.node_of(label)
            .ok_or_else(|| GraphError::node_not_found(label))
    }

    /// Returns *true* if the label is an endpoint of some edge
    fn contains(&self, label: &Self::Label) -> bool {
        self.node_of(label).is_some()
    }

    /// Returns an iterator over all labels in insertion order
    fn labels(&self) -> impl Iterator<Item = &Self::Label> + '_ {
        self.vertices().map(move |u| self.label_of(u))
    }

    /// Clones the labels of the given dense ids into a vector
    fn labels_of<I>(&self, nodes: I) -> Vec<Self::Label>
    where
        I: IntoIterator<Item = Node>,
    {
        nodes
            .into_iter()
            .map(|u| self.label_of(u).clone())
            .collect()
    }
}

/// Trait to test existence of edges in a graph.
pub trait AdjacencyTest: LabelledGraph + AdjacencyList {
    /// Returns *true* if the edge (u,v) exists in the graph.
    /// Returns *false* if `u` is not part of the graph.
    fn has_edge(&self, u: &Self::Label, v: &Self::Label) -> bool {
        match (self.node_of(u), self.node_of(v)) {
            (Some(u), Some(v)) => self.neighbors_of(u).any(|w| w == v),
            _ => false,
        }
    }

    /// Returns *true* if a self-loop (u,u) exists.
    fn has_self_loop(&self, u: &Self::Label) -> bool {
        self.has_edge(u, u)
    }
}

impl<G> AdjacencyTest for G where G: LabelledGraph + AdjacencyList {}

/// Provides functions to insert edges
pub trait GraphEdgeEditing: LabelledGraph + AdjacencyList {
    /// Adds the edge `(u, v)` with the given weight. Endpoints not yet part of the graph are
    /// inserted. Undirected graphs additionally store `(v, u)`.
    /// Adding an edge twice stores it twice.
    fn add_weighted_edge(&mut self, u: Self::Label, v: Self::Label, weight: Self::Weight);

    /// Adds the unweighted edge `(u, v)`
    fn add_edge(&mut self, u: Self::Label, v: Self::Label)
    where
        Self: AdjacencyList<Weight = Unit>,
    {
        self.add_weighted_edge(u, v, Unit);
    }

    /// Adds all weighted edges in the collection
    fn add_weighted_edges<I, E>(&mut self, edges: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<Self::Label, Self::Weight>>,
    {
        for WeightedEdge { from, to, weight } in edges.into_iter().map(Into::into) {
            self.add_weighted_edge(from, to, weight);
        }
    }

    /// Adds all unweighted edges in the collection
    fn add_edges<I, E>(&mut self, edges: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<Self::Label>>,
        Self: AdjacencyList<Weight = Unit>,
    {
        for Edge(u, v) in edges.into_iter().map(Into::into) {
            self.add_weighted_edge(u, v, Unit);
        }
    }

    /// Removes all nodes and edges
    fn clear(&mut self);
}
