/*!
Graph traversal algorithms.

This module provides:
- A generic traversal iterator ([`TraversalSearch`]) over dense node ids whose visiting
  order is determined by its frontier: a queue yields **BFS**, a stack yields **DFS**.
- The [`Traversal`] trait exposing these iterators (and their label-level counterparts
  [`Traversal::bfs`] / [`Traversal::dfs`]) directly as methods on graphs.

Nodes are marked as visited when they are *pushed* onto the frontier. For DFS this means that
the order is a valid depth-first order in which siblings appear in reverse adjacency order.
No traversal recurses, hence arbitrarily deep graphs can be traversed.
*/

use super::*;
use std::collections::VecDeque;

/// Frontier of a [`TraversalSearch`]: discovered nodes that were not emitted yet.
/// A FIFO frontier ([`VecDeque`]) gives BFS, a LIFO frontier ([`Vec`]) gives DFS.
pub trait NodeSequencer {
    /// Frontier holding only `u`
    fn init(u: Node) -> Self;

    fn push(&mut self, u: Node);

    /// Next node to emit, if any
    fn pop(&mut self) -> Option<Node>;

    /// Number of nodes waiting in the frontier
    fn cardinality(&self) -> usize;
}

impl NodeSequencer for VecDeque<Node> {
    fn init(u: Node) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: Node) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl NodeSequencer for Vec<Node> {
    fn init(u: Node) -> Self {
        vec![u]
    }
    fn push(&mut self, u: Node) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Iterator over the nodes reachable from a start node; the order depends on `S`.
/// Discovered nodes are kept in a bitset and never pushed twice.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
}

/// Breadth-first traversal
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>>;

/// Depth-first traversal (mark-on-push)
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>>;

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.sequencer.push(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() - self.visited.cardinality() as usize + self.sequencer.cardinality()),
        )
    }
}

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    /// Starts a traversal at `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            sequencer: S::init(start),
        }
    }

    /// Continues with the smallest undiscovered node once the iterator is exhausted.
    /// Returns that node, or `None` if every node was discovered.
    pub fn try_restart_at_unvisited(&mut self) -> Option<Node> {
        debug_assert_eq!(self.sequencer.cardinality(), 0);
        let u = self.graph.vertices().find(|&u| !self.visited.get_bit(u))?;
        self.visited.set_bit(u);
        self.sequencer.push(u);
        Some(u)
    }

    /// Returns *true* if `u` was discovered so far
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }
}

/// BFS and DFS on dense ids and on labels
pub trait Traversal: AdjacencyList + Sized {
    /// BFS over dense ids starting at `start`.
    /// ** Panics if `start >= n` **
    fn bfs_from(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// DFS over dense ids starting at `start`.
    /// ** Panics if `start >= n` **
    fn dfs_from(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns the labels reachable from `start` in BFS order.
    /// The result is empty if `start` is not part of the graph.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = UnweightedGraph::from_edges(GraphKind::Directed, [(1, 2), (1, 3), (2, 4), (3, 4)]);
    /// assert_eq!(g.bfs(&1), vec![1, 2, 3, 4]);
    /// assert_eq!(g.bfs(&3), vec![3, 4]);
    /// assert!(g.bfs(&5).is_empty());
    /// ```
    fn bfs(&self, start: &<Self as LabelledGraph>::Label) -> Vec<<Self as LabelledGraph>::Label>
    where
        Self: LabelledGraph,
    {
        match self.node_of(start) {
            Some(u) => self.labels_of(self.bfs_from(u)),
            None => Vec::new(),
        }
    }

    /// Returns the labels reachable from `start` in DFS order.
    /// The result is empty if `start` is not part of the graph.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = UnweightedGraph::from_edges(GraphKind::Directed, [(1, 2), (1, 3), (2, 4), (3, 4)]);
    /// assert_eq!(g.dfs(&1), vec![1, 3, 4, 2]);
    /// ```
    fn dfs(&self, start: &<Self as LabelledGraph>::Label) -> Vec<<Self as LabelledGraph>::Label>
    where
        Self: LabelledGraph,
    {
        match self.node_of(start) {
            Some(u) => self.labels_of(self.dfs_from(u)),
            None => Vec::new(),
        }
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
pub mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = UnweightedGraph::from_edges(
            GraphKind::Undirected,
            [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)],
        );

        {
            let order = graph.bfs(&1);
            assert_eq!(order.len(), 6);

            assert_eq!(order[0], 1);
            assert!((order[1] == 0 && order[2] == 2) || (order[2] == 0 && order[1] == 2));
            assert!((order[3] == 4 && order[4] == 5) || (order[4] == 4 && order[3] == 5));
            assert_eq!(order[5], 3);
        }

        {
            let directed = UnweightedGraph::from_edges(
                GraphKind::Directed,
                [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)],
            );
            assert_eq!(directed.bfs(&5), vec![5, 4, 3]);
        }
    }

    #[test]
    fn dfs_order() {
        //    / 2 --- \
        // 1 -- 0 - 5 - 4 - 3
        let graph = UnweightedGraph::from_edges(
            GraphKind::Directed,
            [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)],
        );

        let order = graph.dfs(&1);
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], 1);

        // siblings are visited in reverse insertion order
        assert_eq!(order[1], 0);
        assert_eq!(order[2], 5);
        assert_eq!(order[3], 4);
        assert_eq!(order[4], 3);
        assert_eq!(order[5], 2);
    }

    #[test]
    fn missing_start() {
        let mut graph = UnweightedGraph::<&str>::undirected();
        assert!(graph.bfs(&"a").is_empty());
        assert!(graph.dfs(&"a").is_empty());

        graph.add_edge("b", "c");
        assert!(graph.bfs(&"a").is_empty());
        assert_eq!(graph.dfs(&"c"), vec!["c", "b"]);
    }

    #[test]
    fn deep_path_does_not_overflow() {
        let n = 10_000u32;
        let graph = UnweightedGraph::from_edges(
            GraphKind::Directed,
            (0..n).tuple_windows::<(_, _)>(),
        );

        let order = graph.dfs(&0);
        assert_eq!(order, (0..n).collect_vec());
        assert_eq!(graph.bfs(&0), order);
    }

    #[test]
    fn restart_covers_all_nodes() {
        let graph = UnweightedGraph::from_edges(GraphKind::Undirected, [(0, 1), (2, 3), (4, 4)]);

        let mut search = graph.bfs_from(0);
        let mut seen = search.by_ref().collect_vec();
        let mut restarts = 0;
        while search.try_restart_at_unvisited().is_some() {
            seen.extend(search.by_ref());
            restarts += 1;
        }

        assert_eq!(restarts, 2);
        assert_eq!(seen.into_iter().sorted().collect_vec(), (0..5).collect_vec());
    }
}
