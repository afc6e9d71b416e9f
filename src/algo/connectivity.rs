/*!
Connected components, connectivity tests and strongly connected components.

- (Weakly) connected components are computed by restarted BFS. For directed graphs the
  search runs on the underlying undirected graph.
- Strongly connected components are computed with Kosaraju's algorithm: a first DFS over all
  nodes records the finishing order, a second search over the transposed graph in reverse
  finishing order emits one component per restart. Both passes use explicit stacks.
*/

use std::iter::FusedIterator;

use itertools::Itertools;

use super::*;

/// Iterator over the connected components of a graph, one `Vec<Node>` per component.
/// Components are discovered by restarting a BFS at the smallest unvisited node.
///
/// Edges are followed in their stored direction, hence for directed graphs this should be
/// run on [`AdjacencyList::underlying_undirected`].
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: (!graph.is_empty()).then(|| graph.bfs_from(0)),
        }
    }
}

impl<'a, G> Iterator for ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            bfs.try_restart_at_unvisited()?;
        }
    }
}

impl<'a, G> FusedIterator for ConnectedComponents<'a, G> where G: AdjacencyList {}

/// Returns all nodes in the order in which an iterative DFS over all nodes (restarted at the
/// smallest unvisited node) *finishes* them, i.e. after all their descendants.
fn finishing_order<G>(graph: &G) -> Vec<Node>
where
    G: AdjacencyList,
{
    let mut order = Vec::with_capacity(graph.len());
    if graph.is_empty() {
        return order;
    }

    let mut visited = graph.vertex_bitset_unset();
    let mut call_stack = Vec::new();

    for root in graph.vertices() {
        if visited.set_bit(root) {
            continue;
        }

        call_stack.push((root, graph.neighbors_of(root)));
        while let Some((u, neighbors)) = call_stack.last_mut() {
            let u = *u;
            match neighbors.find(|&v| !visited.get_bit(v)) {
                Some(v) => {
                    visited.set_bit(v);
                    call_stack.push((v, graph.neighbors_of(v)));
                }
                None => {
                    call_stack.pop();
                    order.push(u);
                }
            }
        }
    }

    order
}

/// Computes the strongly connected components with Kosaraju's algorithm.
/// Components are returned in topological order of the condensation.
fn kosaraju<G>(graph: &G) -> Vec<Vec<Node>>
where
    G: AdjacencyList,
{
    let order = finishing_order(graph);
    if order.is_empty() {
        return Vec::new();
    }

    let transposed = graph.transposed();
    let mut visited = transposed.vertex_bitset_unset();
    let mut components = Vec::new();

    for &root in order.iter().rev() {
        if visited.set_bit(root) {
            continue;
        }

        let mut component = Vec::new();
        let mut stack = vec![root];
        while let Some(u) = stack.pop() {
            component.push(u);
            for v in transposed.neighbors_of(u) {
                if !visited.set_bit(v) {
                    stack.push(v);
                }
            }
        }
        components.push(component);
    }

    components
}

/// Provides connected components, connectivity tests and strongly connected components
pub trait Connectivity: AdjacencyList + GraphType + Sized {
    /// Returns the (weakly) connected components as dense ids
    fn component_nodes(&self) -> Vec<Vec<Node>> {
        match self.kind() {
            GraphKind::Undirected => ConnectedComponents::new(self).collect(),
            GraphKind::Directed => {
                let undirected = self.underlying_undirected();
                ConnectedComponents::new(&undirected).collect()
            }
        }
    }

    /// Returns the number of (weakly) connected components.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = UnweightedGraph::from_edges(GraphKind::Undirected, [(1, 2), (3, 4), (4, 5)]);
    /// assert_eq!(g.connected_components(), 2);
    /// ```
    fn connected_components(&self) -> NumNodes {
        self.component_nodes().len() as NumNodes
    }

    /// Returns the labels of every (weakly) connected component.
    /// Components are ordered by their first inserted label, labels within a component in BFS order.
    fn components(&self) -> Vec<Vec<<Self as LabelledGraph>::Label>>
    where
        Self: LabelledGraph,
    {
        self.component_nodes()
            .into_iter()
            .map(|cc| self.labels_of(cc))
            .collect()
    }

    /// Returns *true* if all nodes with non-zero degree are reachable from the first such node.
    /// Directed graphs are tested on their underlying undirected graph.
    /// Returns *false* if no node has a neighbor (in particular, if the graph is empty).
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = UnweightedGraph::directed();
    /// g.add_edge('a', 'b');
    /// g.add_edge('c', 'b');
    /// assert!(g.is_connected());
    ///
    /// g.add_edge('x', 'y');
    /// assert!(!g.is_connected());
    /// ```
    fn is_connected(&self) -> bool {
        fn reaches_all<G: AdjacencyList>(graph: &G) -> bool {
            let Some(start) = graph.vertices_with_neighbors().next() else {
                return false;
            };
            let mut bfs = graph.bfs_from(start);
            bfs.by_ref().for_each(drop);
            graph
                .vertices_with_neighbors()
                .all(|u| bfs.did_visit_node(u))
        }

        match self.kind() {
            GraphKind::Undirected => reaches_all(self),
            GraphKind::Directed => reaches_all(&self.underlying_undirected()),
        }
    }

    /// Returns the number of strongly connected components (Kosaraju).
    /// For undirected graphs this equals [`Connectivity::connected_components`].
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = UnweightedGraph::from_edges(GraphKind::Directed, [(1, 2), (2, 3), (3, 1), (3, 4)]);
    /// assert_eq!(g.scc_count(), 2);
    /// ```
    fn scc_count(&self) -> NumNodes {
        kosaraju(self).len() as NumNodes
    }

    /// Returns the labels of every strongly connected component.
    /// If there is an edge from component `A` to component `B`, `A` is returned before `B`.
    fn strongly_connected_components(&self) -> Vec<Vec<<Self as LabelledGraph>::Label>>
    where
        Self: LabelledGraph,
    {
        kosaraju(self)
            .into_iter()
            .map(|scc| self.labels_of(scc))
            .collect()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + GraphType + Sized {}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::gens::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn components_of_undirected_graph() {
        let g = UnweightedGraph::from_edges(
            GraphKind::Undirected,
            [(0, 1), (1, 2), (3, 4), (5, 5), (6, 7), (7, 8), (8, 6)],
        );

        assert_eq!(g.connected_components(), 4);
        assert_eq!(
            g.components(),
            vec![vec![0, 1, 2], vec![3, 4], vec![5], vec![6, 7, 8]]
        );
        assert!(!g.is_connected());
    }

    #[test]
    fn directed_components_are_weak() {
        let g = UnweightedGraph::from_edges(GraphKind::Directed, [(1, 0), (2, 0), (3, 4)]);

        assert_eq!(g.connected_components(), 2);
        let components = g
            .components()
            .into_iter()
            .map(|cc| cc.into_iter().sorted().collect_vec())
            .collect_vec();
        assert_eq!(components, vec![vec![0, 1, 2], vec![3, 4]]);
    }

    #[test]
    fn connectivity_of_small_graphs() {
        let empty = UnweightedGraph::<u32>::undirected();
        assert!(!empty.is_connected());
        assert_eq!(empty.connected_components(), 0);
        assert_eq!(empty.scc_count(), 0);

        let mut g = UnweightedGraph::undirected();
        g.connect_path(["a", "b", "c", "d"]);
        assert!(g.is_connected());
        assert_eq!(g.connected_components(), 1);
    }

    #[test]
    fn scc() {
        let g = UnweightedGraph::from_edges(
            GraphKind::Directed,
            [
                (0, 1),
                (1, 2),
                (1, 4),
                (1, 5),
                (2, 6),
                (2, 3),
                (3, 2),
                (3, 7),
                (4, 0),
                (4, 5),
                (5, 6),
                (6, 5),
                (7, 3),
                (7, 6),
            ],
        );

        let sccs = g
            .strongly_connected_components()
            .into_iter()
            .map(|scc| scc.into_iter().sorted().collect_vec())
            .collect_vec();

        assert_eq!(sccs, vec![vec![0, 1, 4], vec![2, 3, 7], vec![5, 6]]);
        assert_eq!(g.scc_count(), 3);
    }

    #[test]
    fn scc_singletons() {
        let g = UnweightedGraph::from_edges(GraphKind::Directed, [(0, 1), (1, 2), (2, 2)]);
        assert_eq!(g.strongly_connected_components(), vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn scc_on_deep_path() {
        let mut g = UnweightedGraph::directed();
        g.connect_path(0..20_000u32);
        assert_eq!(g.scc_count(), 20_000);

        g.add_edge(19_999, 0);
        assert_eq!(g.scc_count(), 1);
    }

    #[test]
    fn undirected_scc_equals_components() {
        let rng = &mut Pcg64Mcg::seed_from_u64(42);
        for _ in 0..20 {
            let g = random_gnp(rng, GraphKind::Undirected, 60, 0.03);
            assert_eq!(g.scc_count(), g.connected_components());
        }
    }

    #[test]
    fn scc_of_random_digraphs_are_mutually_reachable() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        for _ in 0..10 {
            let g = random_gnp(rng, GraphKind::Directed, 30, 0.06);
            let reachable = |u: &u32, v: &u32| g.bfs(u).contains(v);

            let sccs = g.strongly_connected_components();
            assert_eq!(sccs.iter().map(|scc| scc.len()).sum::<usize>(), g.len());

            for scc in &sccs {
                for u in scc {
                    for v in scc {
                        assert!(reachable(u, v));
                    }
                }
            }

            for (i, a) in sccs.iter().enumerate() {
                for b in &sccs[i + 1..] {
                    assert!(!(reachable(&a[0], &b[0]) && reachable(&b[0], &a[0])));
                }
            }
        }
    }
}
