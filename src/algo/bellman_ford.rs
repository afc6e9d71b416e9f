use fxhash::FxHashMap;
use tracing::debug;

use super::*;

/// Bellman-Ford over dense ids.
///
/// The first `n - 1` rounds relax every adjacency entry. Afterwards every distance that can
/// still be improved, and everything reachable from such a node, is unbounded; this is detected
/// by another `n - 1` rounds which mark those nodes as [`Distance::NegativeInfinity`].
pub(crate) fn bellman_ford_tree<G>(graph: &G, source: Node) -> PathTree<CostOf<G>>
where
    G: AdjacencyList,
{
    let mut tree = PathTree::new(graph.len(), source);
    let rounds = graph.len().saturating_sub(1);

    for round in 0..rounds {
        let mut changed = false;
        for u in graph.vertices() {
            for (v, w) in graph.weighted_neighbors_of(u) {
                changed |= tree.relax(u, v, w.cost());
            }
        }

        if !changed {
            debug!(rounds = round + 1, "Bellman-Ford converged");
            return tree;
        }
    }

    for _ in 0..rounds {
        let mut changed = false;
        for u in graph.vertices() {
            let du = tree.dist[u as usize];
            for (v, w) in graph.weighted_neighbors_of(u) {
                let unbounded = match (du, tree.dist[v as usize]) {
                    (_, Distance::NegativeInfinity) | (Distance::Unreachable, _) => false,
                    (Distance::NegativeInfinity, _) => true,
                    (Distance::Finite(du), Distance::Finite(dv)) => du + w.cost() < dv,
                    (Distance::Finite(_), Distance::Unreachable) => false,
                };

                if unbounded {
                    tree.dist[v as usize] = Distance::NegativeInfinity;
                    changed = true;
                }
            }
        }

        if !changed {
            break;
        }
    }

    tree
}

/// Single-source shortest paths that tolerate negative weights
pub trait BellmanFord: LabelledGraph + AdjacencyList + Sized {
    /// Computes the distance from `start` to every node of the graph.
    ///
    /// - [`Distance::Finite`] if a shortest path exists,
    /// - [`Distance::Unreachable`] if the node cannot be reached from `start`,
    /// - [`Distance::NegativeInfinity`] if the node can be reached through a negative cycle.
    ///
    /// Undirected edges can be traversed in both directions, hence an undirected edge with
    /// negative weight is a negative cycle.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if `start` is not part of the graph
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = WeightedGraph::from_weighted_edges(
    ///     GraphKind::Directed,
    ///     [(("s", "a"), 4), (("a", "b"), -2), (("b", "a"), 1), (("x", "s"), 0)],
    /// );
    ///
    /// let dist = g.bellman_ford(&"s").unwrap();
    /// assert_eq!(dist[&"s"], Distance::Finite(0));
    /// assert_eq!(dist[&"a"], Distance::NegativeInfinity);
    /// assert_eq!(dist[&"b"], Distance::NegativeInfinity);
    /// assert_eq!(dist[&"x"], Distance::Unreachable);
    /// ```
    fn bellman_ford(
        &self,
        start: &Self::Label,
    ) -> Result<FxHashMap<Self::Label, Distance<CostOf<Self>>>> {
        let source = self.try_node_of(start)?;
        let tree = bellman_ford_tree(self, source);

        Ok(self
            .vertices()
            .map(|u| (self.label_of(u).clone(), tree.dist[u as usize]))
            .collect())
    }
}

impl<G> BellmanFord for G where G: LabelledGraph + AdjacencyList + Sized {}
