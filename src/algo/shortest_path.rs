/*!
# Single-pair shortest paths

[`ShortestPath`] picks the algorithm by the structure of the graph:
- directed acyclic graphs are relaxed once along a topological order (`O(n + m)`),
  which is correct for arbitrary weights;
- all other graphs run Dijkstra's algorithm with a lazy-deletion priority queue
  (`O((n + m) log m)`), which requires non-negative weights.

If Dijkstra would run on a graph with a negative weight, the [`NegativeWeightPolicy`]
decides whether this is an error ([`NegativeWeightPolicy::Reject`], the default) or whether
the query is answered by [Bellman-Ford](crate::algo::BellmanFord) instead.

Unweighted graphs (weight [`Unit`]) count the number of edges on a path.
*/

use std::collections::BinaryHeap;

use num::Zero;
use tracing::{debug, warn};

use super::*;

/// Cost type in which the weights of a graph are accumulated
pub type CostOf<G> = <<G as AdjacencyList>::Weight as Weight>::Cost;

/// What to do if Dijkstra's algorithm would have to process a negative edge weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativeWeightPolicy {
    /// Fail with [`GraphError::NegativeWeightUnsupported`]
    #[default]
    Reject,
    /// Fall back to Bellman-Ford; fails with [`GraphError::NegativeCycle`] if the target can
    /// be reached through a negative cycle
    BellmanFord,
}

/// Distances and predecessors of a single-source search over dense ids
#[derive(Debug, Clone)]
pub(crate) struct PathTree<C> {
    pub(crate) dist: Vec<Distance<C>>,
    pub(crate) pred: Vec<Node>,
}

impl<C: Cost> PathTree<C> {
    pub(crate) fn new(n: usize, source: Node) -> Self {
        let mut dist = vec![Distance::Unreachable; n];
        dist[source as usize] = Distance::Finite(C::zero());
        Self {
            dist,
            pred: vec![INVALID_NODE; n],
        }
    }

    /// Relaxes the edge `u -> v`; returns *true* if the distance of `v` improved
    pub(crate) fn relax(&mut self, u: Node, v: Node, cost: C) -> bool {
        let Distance::Finite(du) = self.dist[u as usize] else {
            return false;
        };

        let candidate = du + cost;
        let improves = match self.dist[v as usize] {
            Distance::Finite(dv) => candidate < dv,
            Distance::Unreachable => true,
            Distance::NegativeInfinity => false,
        };

        if improves {
            self.dist[v as usize] = Distance::Finite(candidate);
            self.pred[v as usize] = u;
        }
        improves
    }

    /// Follows the predecessors from `target` back to `source`.
    /// Returns `None` if the chain is broken or longer than the number of nodes.
    pub(crate) fn path_to(&self, source: Node, target: Node) -> Option<Vec<Node>> {
        let mut path = vec![target];
        let mut u = target;
        while u != source {
            u = self.pred[u as usize];
            if u == INVALID_NODE || path.len() > self.pred.len() {
                return None;
            }
            path.push(u);
        }
        path.reverse();
        Some(path)
    }
}

/// Relaxes all edges once along a topological order.
/// ** Only correct if `graph` is a DAG **
fn dag_relaxation<G>(graph: &G, source: Node) -> PathTree<CostOf<G>>
where
    G: AdjacencyList + GraphType,
{
    let mut tree = PathTree::new(graph.len(), source);
    for u in graph.topo_search() {
        for (v, w) in graph.weighted_neighbors_of(u) {
            tree.relax(u, v, w.cost());
        }
    }
    tree
}

/// Dijkstra's algorithm with lazy deletion: outdated queue entries are skipped when popped.
/// Stops as soon as `target` is settled.
/// ** Only correct if all weights are non-negative **
fn dijkstra<G>(graph: &G, source: Node, target: Node) -> PathTree<CostOf<G>>
where
    G: AdjacencyList,
{
    let mut tree = PathTree::new(graph.len(), source);
    let mut settled = graph.vertex_bitset_unset();
    let mut heap = BinaryHeap::new();
    heap.push(MinHeapEntry::new(CostOf::<G>::zero(), source));

    while let Some(MinHeapEntry { key, node: u }) = heap.pop() {
        if settled.set_bit(u) {
            continue;
        }
        if u == target {
            break;
        }

        for (v, w) in graph.weighted_neighbors_of(u) {
            if !settled.get_bit(v) && tree.relax(u, v, w.cost()) {
                heap.push(MinHeapEntry::new(key + w.cost(), v));
            }
        }
    }

    tree
}

/// Configurable single-pair shortest path query.
///
/// # Examples
/// ```
/// use lgraphs::{prelude::*, algo::*};
///
/// let mut g = WeightedGraph::undirected();
/// g.add_weighted_edge('a', 'b', 4);
/// g.add_weighted_edge('b', 'c', -1);
/// g.add_weighted_edge('a', 'c', 5);
///
/// assert!(matches!(
///     ShortestPath::new().run(&g, &'a', &'c'),
///     Err(GraphError::NegativeWeightUnsupported { .. })
/// ));
///
/// // an undirected negative edge is a negative cycle of length two
/// assert!(matches!(
///     ShortestPath::new()
///         .negative_weights(NegativeWeightPolicy::BellmanFord)
///         .run(&g, &'a', &'c'),
///     Err(GraphError::NegativeCycle { .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestPath {
    negative_weights: NegativeWeightPolicy,
}

impl ShortestPath {
    /// Creates a query that rejects negative weights on non-DAGs
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy for negative weights on graphs that are no DAGs
    pub fn set_negative_weights(&mut self, policy: NegativeWeightPolicy) {
        self.negative_weights = policy;
    }

    /// Sets the policy for negative weights on graphs that are no DAGs
    pub fn negative_weights(mut self, policy: NegativeWeightPolicy) -> Self {
        self.set_negative_weights(policy);
        self
    }

    /// Returns the cost of a shortest path from `start` to `end`.
    ///
    /// # Errors
    /// - [`GraphError::NodeNotFound`] if `start` or `end` is not part of the graph
    /// - [`GraphError::NoPathExists`] if `end` is not reachable from `start`
    /// - [`GraphError::NegativeWeightUnsupported`] if Dijkstra is required, the graph has a
    ///   negative weight and the policy is [`NegativeWeightPolicy::Reject`]
    /// - [`GraphError::NegativeCycle`] if the Bellman-Ford fallback finds that the distance is unbounded
    pub fn run<G>(&self, graph: &G, start: &G::Label, end: &G::Label) -> Result<CostOf<G>>
    where
        G: LabelledGraph + AdjacencyList + GraphType,
    {
        let (s, t) = (graph.try_node_of(start)?, graph.try_node_of(end)?);
        let tree = self.compute_tree(graph, s, t)?;
        Self::distance_in(&tree, start, end, t)
    }

    /// Returns the cost of a shortest path from `start` to `end` together with the labels on
    /// such a path (both endpoints included). Errors are the same as for [`ShortestPath::run`].
    pub fn route<G>(
        &self,
        graph: &G,
        start: &G::Label,
        end: &G::Label,
    ) -> Result<(CostOf<G>, Vec<G::Label>)>
    where
        G: LabelledGraph + AdjacencyList + GraphType,
    {
        let (s, t) = (graph.try_node_of(start)?, graph.try_node_of(end)?);
        let tree = self.compute_tree(graph, s, t)?;
        let cost = Self::distance_in(&tree, start, end, t)?;
        let path = tree
            .path_to(s, t)
            .ok_or_else(|| GraphError::no_path(start, end))?;
        Ok((cost, graph.labels_of(path)))
    }

    fn distance_in<C: Cost, L: Label>(
        tree: &PathTree<C>,
        start: &L,
        end: &L,
        t: Node,
    ) -> Result<C> {
        match tree.dist[t as usize] {
            Distance::Finite(cost) => Ok(cost),
            Distance::Unreachable => Err(GraphError::no_path(start, end)),
            Distance::NegativeInfinity => Err(GraphError::negative_cycle(start, end)),
        }
    }

    fn compute_tree<G>(&self, graph: &G, s: Node, t: Node) -> Result<PathTree<CostOf<G>>>
    where
        G: LabelledGraph + AdjacencyList + GraphType,
    {
        if graph.is_directed() && graph.is_acyclic() {
            debug!(algorithm = "dag-relaxation", nodes = graph.number_of_nodes(), "Shortest path");
            return Ok(dag_relaxation(graph, s));
        }

        match graph.find_negative_weight() {
            None => {
                debug!(algorithm = "dijkstra", nodes = graph.number_of_nodes(), "Shortest path");
                Ok(dijkstra(graph, s, t))
            }
            Some((u, v, w)) => match self.negative_weights {
                NegativeWeightPolicy::Reject => Err(GraphError::negative_weight(
                    "Dijkstra",
                    graph.label_of(u),
                    graph.label_of(v),
                    &w,
                )),
                NegativeWeightPolicy::BellmanFord => {
                    warn!(
                        from = ?graph.label_of(u),
                        to = ?graph.label_of(v),
                        weight = ?w,
                        "Negative weight found; falling back to Bellman-Ford"
                    );
                    Ok(bellman_ford_tree(graph, s))
                }
            },
        }
    }
}

/// Shortest paths between pairs of labels, with default configuration (see [`ShortestPath`])
pub trait ShortestPaths: LabelledGraph + AdjacencyList + GraphType + Sized {
    /// Returns the cost of a shortest path from `start` to `end`.
    /// See [`ShortestPath::run`] for the algorithm selection and errors.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = WeightedGraph::directed();
    /// g.add_weighted_edge("A", "B", 1.0);
    /// g.add_weighted_edge("B", "C", 2.0);
    ///
    /// assert_eq!(g.shortest_path(&"A", &"C").unwrap(), 3.0);
    /// assert!(matches!(g.shortest_path(&"C", &"A"), Err(GraphError::NoPathExists { .. })));
    /// assert!(matches!(g.shortest_path(&"A", &"Z"), Err(GraphError::NodeNotFound(_))));
    /// ```
    fn shortest_path(&self, start: &Self::Label, end: &Self::Label) -> Result<CostOf<Self>> {
        ShortestPath::new().run(self, start, end)
    }

    /// Returns the cost of a shortest path from `start` to `end` and the labels along it.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = UnweightedGraph::from_edges(GraphKind::Undirected, [(1, 2), (2, 3), (3, 4), (1, 5), (5, 4)]);
    /// assert_eq!(g.shortest_route(&1, &4).unwrap(), (2, vec![1, 5, 4]));
    /// ```
    fn shortest_route(
        &self,
        start: &Self::Label,
        end: &Self::Label,
    ) -> Result<(CostOf<Self>, Vec<Self::Label>)> {
        ShortestPath::new().route(self, start, end)
    }
}

impl<G> ShortestPaths for G where G: LabelledGraph + AdjacencyList + GraphType + Sized {}
