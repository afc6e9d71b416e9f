use fxhash::FxHashMap;
use tracing::trace;

use super::*;

/// Adjacency-list graph over labels of type `T` with edge weights of type `W`.
///
/// Labels are interned on first use: the `i`-th distinct label becomes the dense node `i`.
/// A label is part of the graph exactly if it is an endpoint of an inserted edge, hence
/// isolated nodes cannot exist.
///
/// # Examples
/// ```
/// use lgraphs::{prelude::*, algo::*};
///
/// let mut g = UnweightedGraph::undirected();
/// g.add_edge("a", "b");
/// g.add_edge("b", "c");
///
/// assert!(g.has_edge(&"c", &"b"));
/// assert_eq!(g.number_of_nodes(), 3);
/// assert_eq!(g.bfs(&"a"), vec!["a", "b", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<T, W = Unit> {
    kind: GraphKind,
    labels: Vec<T>,
    index: FxHashMap<T, Node>,
    adjacency: Vec<Vec<(Node, W)>>,
    edges: Vec<(Node, Node, W)>,
}

/// Graph in which every edge has unit weight
pub type UnweightedGraph<T> = Graph<T, Unit>;

/// Graph with numeric edge weights
pub type WeightedGraph<T, W = f64> = Graph<T, W>;

impl<T: Label, W: Weight> Graph<T, W> {
    /// Creates an empty graph of the given kind
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            labels: Vec::new(),
            index: FxHashMap::default(),
            adjacency: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Creates an empty directed graph
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Creates an empty undirected graph
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Creates an empty graph from the kind tag `"directed"` or `"undirected"`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidGraphKind`] for any other tag.
    pub fn try_new(kind: &str) -> Result<Self> {
        Ok(Self::new(kind.parse()?))
    }

    /// Creates a graph of the given kind containing all edges of the collection
    pub fn from_weighted_edges<I, E>(kind: GraphKind, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<T, W>>,
    {
        let mut graph = Self::new(kind);
        graph.add_weighted_edges(edges);
        trace!(
            kind = %kind,
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            "Constructed graph from weighted edges"
        );
        graph
    }

    /// Like [`Graph::from_weighted_edges`], but parses the kind from its tag first.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let g = WeightedGraph::try_from_weighted_edges("directed", [(("a", "b"), 2.0)]).unwrap();
    /// assert!(g.has_edge(&"a", &"b"));
    /// assert!(!g.has_edge(&"b", &"a"));
    ///
    /// assert!(WeightedGraph::<&str>::try_from_weighted_edges("mixed", Vec::<((&str, &str), f64)>::new()).is_err());
    /// ```
    pub fn try_from_weighted_edges<I, E>(kind: &str, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<T, W>>,
    {
        Ok(Self::from_weighted_edges(kind.parse()?, edges))
    }

    /// Returns an iterator over all inserted edges (undirected edges once) in insertion order
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge<&T, W>> + '_ {
        self.edges
            .iter()
            .map(move |&(u, v, w)| WeightedEdge::new(self.label_of(u), self.label_of(v), w))
    }

    /// Returns the dense id of `label`, inserting it if necessary
    fn intern(&mut self, label: T) -> Node {
        if let Some(&u) = self.index.get(&label) {
            return u;
        }

        let u = self.labels.len() as Node;
        assert!(u != INVALID_NODE, "Too many nodes");
        self.index.insert(label.clone(), u);
        self.labels.push(label);
        self.adjacency.push(Vec::new());
        u
    }
}

impl<T: Label> Graph<T, Unit> {
    /// Creates a graph from a list of `(node, neighbors)` pairs; each pair `(u, [v, ...])`
    /// adds the edges `(u, v), ...`.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let g = UnweightedGraph::from_neighborhoods(GraphKind::Directed, [(1, vec![2, 3]), (3, vec![1])]);
    /// assert_eq!(g.number_of_edges(), 3);
    /// assert!(g.has_edge(&3, &1));
    /// ```
    pub fn from_neighborhoods<I, N>(kind: GraphKind, neighborhoods: I) -> Self
    where
        I: IntoIterator<Item = (T, N)>,
        N: IntoIterator<Item = T>,
    {
        let mut graph = Self::new(kind);
        for (u, neighbors) in neighborhoods {
            for v in neighbors {
                graph.add_edge(u.clone(), v);
            }
        }
        trace!(
            kind = %kind,
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            "Constructed graph from neighborhoods"
        );
        graph
    }

    /// Like [`Graph::from_neighborhoods`], but parses the kind from its tag first.
    pub fn try_from_neighborhoods<I, N>(kind: &str, neighborhoods: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, N)>,
        N: IntoIterator<Item = T>,
    {
        Ok(Self::from_neighborhoods(kind.parse()?, neighborhoods))
    }

    /// Creates an unweighted graph containing all edges of the collection
    pub fn from_edges<I, E>(kind: GraphKind, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<T>>,
    {
        let mut graph = Self::new(kind);
        graph.add_edges(edges);
        graph
    }
}

impl<T, W> GraphType for Graph<T, W> {
    fn kind(&self) -> GraphKind {
        self.kind
    }
}

impl<T, W> GraphNodeOrder for Graph<T, W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }
}

impl<T, W: Weight> AdjacencyList for Graph<T, W> {
    type Weight = W;

    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, W)> + '_ {
        self.adjacency[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.adjacency[u as usize].len() as NumNodes
    }
}

impl<T, W: Weight> GraphEdgeOrder for Graph<T, W> {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    fn inserted_edges(&self) -> impl Iterator<Item = (Node, Node, W)> + '_ {
        self.edges.iter().copied()
    }
}

impl<T: Label, W> LabelledGraph for Graph<T, W> {
    type Label = T;

    fn label_of(&self, u: Node) -> &T {
        &self.labels[u as usize]
    }

    fn node_of(&self, label: &T) -> Option<Node> {
        self.index.get(label).copied()
    }
}

impl<T: Label, W: Weight> GraphEdgeEditing for Graph<T, W> {
    fn add_weighted_edge(&mut self, u: T, v: T, weight: W) {
        let u = self.intern(u);
        let v = self.intern(v);

        self.adjacency[u as usize].push((v, weight));
        if self.kind == GraphKind::Undirected {
            self.adjacency[v as usize].push((u, weight));
        }
        self.edges.push((u, v, weight));
    }

    fn clear(&mut self) {
        self.labels.clear();
        self.index.clear();
        self.adjacency.clear();
        self.edges.clear();
    }
}
