/*!
# Bipartiteness

A graph is bipartite if its nodes can be split into two sides such that every edge connects
both sides. We 2-color every component of the (underlying undirected) graph by BFS and then
verify that no edge joins two nodes of the same color. Self-loops therefore always make a
graph non-bipartite.
*/

use std::collections::VecDeque;

use super::*;

/// Colors every component by BFS: the smallest node of a component is put on the left side,
/// every other node on the opposite side of the node it was discovered from.
/// The result is a valid bipartition iff the graph is bipartite.
fn propose_possibly_illegal_bipartition<G>(graph: &G) -> NodeBitSet
where
    G: AdjacencyList,
{
    let mut left = graph.vertex_bitset_unset();
    let mut visited = graph.vertex_bitset_unset();
    let mut queue = VecDeque::new();

    for root in graph.vertices() {
        if visited.set_bit(root) {
            continue;
        }

        left.set_bit(root);
        queue.push_back(root);
        while let Some(u) = queue.pop_front() {
            let u_left = left.get_bit(u);
            for v in graph.neighbors_of(u) {
                if !visited.set_bit(v) {
                    if !u_left {
                        left.set_bit(v);
                    }
                    queue.push_back(v);
                }
            }
        }
    }

    left
}

/// Returns *true* if every edge of `graph` connects both sides of `left`
fn is_bipartition<G>(graph: &G, left: &NodeBitSet) -> bool
where
    G: AdjacencyList,
{
    graph.vertices().all(|u| {
        graph
            .neighbors_of(u)
            .all(|v| left.get_bit(u) != left.get_bit(v))
    })
}

/// Provides bipartiteness tests
pub trait BipartiteTest: AdjacencyList + GraphType + Sized {
    /// Computes a bipartition as a bitset of the *left* side (over dense ids).
    /// Returns `None` if the graph is not bipartite.
    fn compute_bipartition_nodes(&self) -> Option<NodeBitSet> {
        if self.is_empty() {
            return None;
        }

        match self.kind() {
            GraphKind::Undirected => {
                let left = propose_possibly_illegal_bipartition(self);
                is_bipartition(self, &left).then_some(left)
            }
            GraphKind::Directed => {
                let undirected = self.underlying_undirected();
                let left = propose_possibly_illegal_bipartition(&undirected);
                is_bipartition(&undirected, &left).then_some(left)
            }
        }
    }

    /// Computes both sides of a bipartition. The side containing the first inserted label is
    /// returned first; both sides list their labels in insertion order.
    /// Returns `None` if the graph is not bipartite. The empty graph is split into two empty sides.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = UnweightedGraph::from_edges(GraphKind::Undirected, [("a", "x"), ("b", "x"), ("b", "y")]);
    /// assert_eq!(g.compute_bipartition(), Some((vec!["a", "b"], vec!["x", "y"])));
    /// ```
    #[allow(clippy::type_complexity)]
    fn compute_bipartition(
        &self,
    ) -> Option<(
        Vec<<Self as LabelledGraph>::Label>,
        Vec<<Self as LabelledGraph>::Label>,
    )>
    where
        Self: LabelledGraph,
    {
        if self.is_empty() {
            return Some((Vec::new(), Vec::new()));
        }

        let left = self.compute_bipartition_nodes()?;
        let (l, r): (Vec<Node>, Vec<Node>) = self.vertices().partition(|&u| left.get_bit(u));
        Some((self.labels_of(l), self.labels_of(r)))
    }

    /// Tests whether the graph is bipartite by 2-coloring all components.
    /// Directed graphs are tested on their underlying undirected graph.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = UnweightedGraph::undirected();
    /// g.connect_cycle(0..4);
    /// assert!(g.is_bipartite());
    ///
    /// let mut g = UnweightedGraph::undirected();
    /// g.connect_cycle(0..5);
    /// assert!(!g.is_bipartite());
    /// ```
    fn is_bipartite(&self) -> bool {
        self.is_empty() || self.compute_bipartition_nodes().is_some()
    }
}

impl<G> BipartiteTest for G where G: AdjacencyList + GraphType + Sized {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn paths_and_cycles() {
        for n in 2..20u32 {
            let mut path = UnweightedGraph::undirected();
            path.connect_path(0..n);
            assert!(path.is_bipartite());

            if n > 2 {
                let mut cycle = UnweightedGraph::undirected();
                cycle.connect_cycle(0..n);
                assert_eq!(cycle.is_bipartite(), n % 2 == 0, "n={n}");
            }
        }
    }

    #[test]
    fn self_loop_is_not_bipartite() {
        let g = UnweightedGraph::from_edges(GraphKind::Undirected, [(0, 1), (1, 1)]);
        assert!(!g.is_bipartite());
        assert_eq!(g.compute_bipartition(), None);
    }

    #[test]
    fn directed_odd_cycle() {
        // 0 -> 1 -> 2 <- 0 is an odd cycle in the underlying undirected graph
        let g = UnweightedGraph::from_edges(GraphKind::Directed, [(0, 1), (1, 2), (0, 2)]);
        assert!(!g.is_bipartite());

        let g = UnweightedGraph::from_edges(GraphKind::Directed, [(0, 1), (2, 1), (2, 3)]);
        assert_eq!(g.compute_bipartition(), Some((vec![0, 2], vec![1, 3])));
    }

    #[test]
    fn multiple_components() {
        let mut g = UnweightedGraph::undirected();
        g.connect_path([1, 2, 3]);
        g.connect_cycle([10, 11, 12, 13]);
        assert!(g.is_bipartite());

        g.connect_cycle([20, 21, 22]);
        assert!(!g.is_bipartite());

        assert!(UnweightedGraph::<u8>::undirected().is_bipartite());
    }

    #[test]
    fn random_bipartitions_are_valid() {
        let rng = &mut Pcg64Mcg::seed_from_u64(99);
        for _ in 0..30 {
            let g = random_gnp(rng, GraphKind::Undirected, 25, 0.08);
            let Some(left) = g.compute_bipartition_nodes() else {
                continue;
            };
            for Edge(u, v) in g.edges().map(|e| e.into_edge()) {
                let (u, v) = (g.node_of(u).unwrap(), g.node_of(v).unwrap());
                assert_ne!(left.get_bit(u), left.get_bit(v));
            }
        }
    }
}
