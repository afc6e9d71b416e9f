/*!
Topological ordering and cycle detection.

[`TopoSearch`] implements Kahn's algorithm with a FIFO queue: all nodes of in-degree zero are
queued in id order, and a node is emitted once all of its predecessors were emitted.
On graphs containing a cycle the search stops early, yielding only a partial order.
*/

use super::*;
use std::collections::VecDeque;

/// Iterator implementing topological ordering over a directed graph.
///
/// - Initializes with all nodes of in-degree 0.
/// - Repeatedly removes a node, decreasing in-degrees of its successors,
///   and enqueues new nodes of in-degree 0.
/// - Stops once all nodes are output or a cycle blocks the remaining nodes.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    queue: VecDeque<Node>,
}

impl<'a, G> Iterator for TopoSearch<'a, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            self.in_degs[v as usize] -= 1;
            if self.in_degs[v as usize] == 0 {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.graph.len()))
    }
}

impl<'a, G> TopoSearch<'a, G>
where
    G: AdjacencyList,
{
    /// Constructs a new topological search on the given graph,
    /// initializing in-degree counts and collecting the initial set of
    /// zero in-degree nodes.
    pub fn new(graph: &'a G) -> Self {
        let in_degs = graph.in_degrees();
        let queue = graph
            .vertices()
            .filter(|&u| in_degs[u as usize] == 0)
            .collect();

        Self {
            graph,
            in_degs,
            queue,
        }
    }
}

/// Provides topological sorting and cycle detection
pub trait Topology: AdjacencyList + GraphType + Sized {
    /// Returns an iterator yielding dense ids in topological order
    fn topo_search(&self) -> TopoSearch<'_, Self> {
        TopoSearch::new(self)
    }

    /// Returns the labels in topological order (Kahn's algorithm with a FIFO queue).
    ///
    /// If the graph contains a cycle, only the nodes not blocked by it are returned;
    /// this is not treated as an error. Undirected graphs are processed on their symmetric
    /// adjacency, hence only nodes without any edges could be emitted, i.e. none.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = UnweightedGraph::from_edges(GraphKind::Directed, [("shirt", "tie"), ("tie", "jacket"), ("pants", "jacket")]);
    /// assert_eq!(g.topological_sort(), vec!["shirt", "pants", "tie", "jacket"]);
    /// ```
    fn topological_sort(&self) -> Vec<<Self as LabelledGraph>::Label>
    where
        Self: LabelledGraph,
    {
        self.labels_of(self.topo_search())
    }

    /// Returns *true* if the graph contains a cycle.
    ///
    /// - Directed graphs: Kahn's algorithm; a cycle exists iff some node is never emitted.
    /// - Undirected graphs: union-find over the inserted edges; an edge closing a cycle
    ///   (including self-loops and parallel edges) is a cycle.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let dag = UnweightedGraph::from_edges(GraphKind::Directed, [(1, 2), (2, 3), (1, 3)]);
    /// assert!(!dag.has_cycle());
    ///
    /// let tree = UnweightedGraph::from_edges(GraphKind::Undirected, [(1, 2), (2, 3)]);
    /// assert!(!tree.has_cycle());
    ///
    /// let triangle = UnweightedGraph::from_edges(GraphKind::Undirected, [(1, 2), (2, 3), (3, 1)]);
    /// assert!(triangle.has_cycle());
    /// ```
    fn has_cycle(&self) -> bool
    where
        Self: GraphEdgeOrder,
    {
        match self.kind() {
            GraphKind::Directed => !self.is_acyclic(),
            GraphKind::Undirected => {
                let mut sets = UnionFind::new(self.number_of_nodes());
                self.inserted_edges().any(|(u, v, _)| !sets.union(u, v))
            }
        }
    }

    /// Returns *true* if a topological search emits every node, i.e. if the directed graph
    /// is a DAG. Undirected graphs with at least one edge are never acyclic in this sense.
    fn is_acyclic(&self) -> bool {
        self.topo_search().count() == self.len()
    }
}

impl<G> Topology for G where G: AdjacencyList + GraphType + Sized {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn is_topological<G>(graph: &G, order: &[Node]) -> bool
    where
        G: AdjacencyList,
    {
        let mut position = vec![INVALID_NODE; graph.len()];
        for (i, &u) in order.iter().enumerate() {
            position[u as usize] = i as Node;
        }
        graph.vertices().all(|u| {
            graph
                .neighbors_of(u)
                .all(|v| position[u as usize] < position[v as usize])
        })
    }

    #[test]
    fn topo_order_of_dag() {
        let g = UnweightedGraph::from_edges(
            GraphKind::Directed,
            [(5, 2), (5, 0), (4, 0), (4, 1), (2, 3), (3, 1)],
        );
        assert_eq!(g.topological_sort(), vec![5, 4, 2, 0, 3, 1]);
        assert!(!g.has_cycle());
        assert!(g.is_acyclic());
    }

    #[test]
    fn partial_order_on_cycle() {
        let g = UnweightedGraph::from_edges(GraphKind::Directed, [(0, 1), (1, 2), (2, 1), (2, 3)]);
        assert_eq!(g.topological_sort(), vec![0]);
        assert!(g.has_cycle());
    }

    #[test]
    fn directed_self_loop_is_cycle() {
        let g = UnweightedGraph::from_edges(GraphKind::Directed, [('a', 'b'), ('b', 'b')]);
        assert!(g.has_cycle());
    }

    #[test]
    fn undirected_cycles() {
        let mut g = UnweightedGraph::undirected();
        g.connect_path(0..5);
        assert!(!g.has_cycle());

        g.add_edge(10, 11);
        assert!(!g.has_cycle());

        g.add_edge(11, 10);
        assert!(g.has_cycle());

        let mut h = UnweightedGraph::undirected();
        h.add_edge('x', 'x');
        assert!(h.has_cycle());

        let mut c = UnweightedGraph::undirected();
        c.connect_cycle(0..4);
        assert!(c.has_cycle());
    }

    #[test]
    fn empty_graph() {
        let g = UnweightedGraph::<u32>::directed();
        assert!(g.topological_sort().is_empty());
        assert!(!g.has_cycle());
    }

    #[test]
    fn random_dags() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);

        for _ in 0..20 {
            // orient every edge from the smaller to the larger label
            let gnp = random_gnp(rng, GraphKind::Undirected, 40, 0.1);
            let g = UnweightedGraph::from_edges(
                GraphKind::Directed,
                gnp.edges().map(|e| e.into_edge().normalized()).map(|Edge(u, v)| (*u, *v)),
            );

            let order: Vec<Node> = g.topo_search().collect();
            assert_eq!(order.len(), g.len());
            assert!(is_topological(&g, &order));
            assert!(!g.has_cycle());
        }
    }
}
