use super::*;

/// Provides Tarjan's bridge search (discovery times and low-links) for undirected graphs.
///
/// An edge is a bridge if removing it increases the number of connected components.
/// Bridges are reported as `Edge(parent, child)` with respect to the DFS tree, in the order
/// in which the DFS finishes the child. Parallel edges are never bridges.
pub trait Bridges: LabelledGraph + AdjacencyList + GraphType + Sized {
    /// Returns all bridges of the component containing `start`.
    ///
    /// # Errors
    /// - [`GraphError::UnsupportedGraphKind`] if the graph is directed
    /// - [`GraphError::NodeNotFound`] if `start` is not part of the graph
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// // triangle 0-1-2 with a pendant path 1-3-4
    /// let g = UnweightedGraph::from_edges(GraphKind::Undirected, [(0, 1), (1, 2), (2, 0), (1, 3), (3, 4)]);
    /// assert_eq!(g.bridges(&0).unwrap(), vec![Edge(3, 4), Edge(1, 3)]);
    /// ```
    fn bridges(&self, start: &Self::Label) -> Result<Vec<Edge<Self::Label>>> {
        self.assert_undirected_for("bridge search")?;
        let start = self.try_node_of(start)?;

        let mut search = BridgeSearch::new(self);
        search.compute_from(start);
        Ok(label_edges(self, search.bridges))
    }

    /// Returns the bridges of all components.
    ///
    /// # Errors
    /// [`GraphError::UnsupportedGraphKind`] if the graph is directed
    fn all_bridges(&self) -> Result<Vec<Edge<Self::Label>>> {
        self.assert_undirected_for("bridge search")?;
        if self.is_empty() {
            return Ok(Vec::new());
        }

        let mut search = BridgeSearch::new(self);
        for u in self.vertices() {
            if !search.visited.get_bit(u) {
                search.compute_from(u);
            }
        }
        Ok(label_edges(self, search.bridges))
    }
}

impl<G> Bridges for G where G: LabelledGraph + AdjacencyList + GraphType + Sized {}

/// Fails with [`GraphError::UnsupportedGraphKind`] unless the graph is undirected
pub(crate) trait AssertUndirected: GraphType {
    fn assert_undirected_for(&self, operation: &'static str) -> Result<()> {
        if self.is_directed() {
            return Err(GraphError::UnsupportedGraphKind {
                operation,
                kind: self.kind(),
            });
        }
        Ok(())
    }
}

impl<G: GraphType> AssertUndirected for G {}

fn label_edges<G: LabelledGraph>(graph: &G, edges: Vec<Edge<Node>>) -> Vec<Edge<G::Label>> {
    edges
        .into_iter()
        .map(|Edge(u, v)| Edge(graph.label_of(u).clone(), graph.label_of(v).clone()))
        .collect()
}

struct BridgeSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    nodes_info: Vec<NodeInfo>,
    time: Node,
    bridges: Vec<Edge<Node>>,
}

impl<'a, G> BridgeSearch<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            nodes_info: vec![NodeInfo::default(); graph.len()],
            time: 0,
            bridges: Vec::new(),
        }
    }

    /// Runs the low-link DFS on the component of `root`.
    /// The recursion is simulated with an explicit call stack; each frame keeps its own
    /// neighbor iterator and whether the edge to the parent was already skipped once.
    fn compute_from(&mut self, root: Node) {
        let graph = self.graph;
        self.visited.set_bit(root);
        self.discover(root, root);

        let mut call_stack = vec![(root, false, graph.neighbors_of(root))];

        while let Some((u, skipped_parent, neighbors)) = call_stack.last_mut() {
            let u = *u;
            let parent = self.nodes_info[u as usize].parent;

            let mut descend = None;
            for v in neighbors.by_ref() {
                if v == parent && u != parent && !*skipped_parent {
                    *skipped_parent = true;
                    continue;
                }

                if !self.visited.set_bit(v) {
                    descend = Some(v);
                    break;
                }

                let v_disc = self.nodes_info[v as usize].discovery;
                self.nodes_info[u as usize].update_low(v_disc);
            }

            if let Some(v) = descend {
                self.discover(u, v);
                call_stack.push((v, false, graph.neighbors_of(v)));
                continue;
            }

            call_stack.pop();
            if u != parent {
                let low_u = self.nodes_info[u as usize].low;
                self.nodes_info[parent as usize].update_low(low_u);

                if low_u > self.nodes_info[parent as usize].discovery {
                    self.bridges.push(Edge(parent, u));
                }
            }
        }
    }

    fn discover(&mut self, parent: Node, u: Node) {
        self.time += 1;
        self.nodes_info[u as usize] = NodeInfo {
            parent,
            discovery: self.time,
            low: self.time,
        };
    }
}

#[derive(Clone, Copy, Default)]
struct NodeInfo {
    low: Node,
    discovery: Node,
    parent: Node,
}

impl NodeInfo {
    fn update_low(&mut self, value: Node) {
        self.low = self.low.min(value);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn bridges_in_path() {
        for n in [2u32, 5, 10, 15] {
            let mut graph = UnweightedGraph::undirected();
            graph.connect_path(0..n);

            let bridges = graph
                .bridges(&0)
                .unwrap()
                .into_iter()
                .map(|e| e.normalized())
                .sorted()
                .collect_vec();

            assert_eq!(bridges, (0..n).tuple_windows::<(_, _)>().map(|(u, v)| Edge(u, v)).collect_vec());
        }
    }

    #[test]
    fn bridge_in_example() {
        let graph = UnweightedGraph::from_edges(
            GraphKind::Undirected,
            [(0, 1), (0, 2), (2, 1), (1, 3), (3, 4), (4, 5), (5, 3)],
        );

        assert_eq!(graph.bridges(&0).unwrap(), vec![Edge(1, 3)]);
        assert_eq!(graph.bridges(&4).unwrap(), vec![Edge(3, 1)]);
    }

    #[test]
    fn parallel_edges_are_not_bridges() {
        let graph = UnweightedGraph::from_edges(GraphKind::Undirected, [("a", "b"), ("b", "a"), ("b", "c")]);
        assert_eq!(graph.bridges(&"a").unwrap(), vec![Edge("b", "c")]);
    }

    #[test]
    fn only_component_of_start() {
        let graph = UnweightedGraph::from_edges(GraphKind::Undirected, [(0, 1), (2, 3)]);
        assert_eq!(graph.bridges(&0).unwrap(), vec![Edge(0, 1)]);
        assert_eq!(graph.all_bridges().unwrap(), vec![Edge(0, 1), Edge(2, 3)]);
    }

    #[test]
    fn errors() {
        let graph = UnweightedGraph::from_edges(GraphKind::Undirected, [(0, 1)]);
        assert!(matches!(graph.bridges(&7), Err(GraphError::NodeNotFound(_))));

        let directed = UnweightedGraph::from_edges(GraphKind::Directed, [(0, 1)]);
        assert!(matches!(
            directed.bridges(&0),
            Err(GraphError::UnsupportedGraphKind { .. })
        ));
        assert!(directed.all_bridges().is_err());
    }

    #[test]
    fn deep_path() {
        let mut graph = UnweightedGraph::undirected();
        graph.connect_path(0..20_000u32);
        assert_eq!(graph.all_bridges().unwrap().len(), 19_999);
    }

    #[test]
    fn random_bridges_disconnect() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        for _ in 0..10 {
            let graph = random_gnp(rng, GraphKind::Undirected, 30, 0.08);
            let bridges = graph.all_bridges().unwrap();
            let components = graph.connected_components();

            for Edge(u, v) in graph.edges().map(|e| e.into_edge()) {
                let is_bridge = bridges.contains(&Edge(*u, *v)) || bridges.contains(&Edge(*v, *u));

                // rebuild without this edge (keeping both endpoints as nodes)
                let mut without = UnweightedGraph::undirected();
                let mut removed = false;
                for Edge(x, y) in graph.edges().map(|e| e.into_edge()) {
                    if !removed && (x, y) == (u, v) {
                        removed = true;
                        without.add_edge(*x, *x);
                        without.add_edge(*y, *y);
                        continue;
                    }
                    without.add_edge(*x, *y);
                }

                assert_eq!(is_bridge, without.connected_components() > components);
            }
        }
    }
}
