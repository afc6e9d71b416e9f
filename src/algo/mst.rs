use std::{cmp::Reverse, collections::BinaryHeap};

use num::Zero;

use super::*;

/// Lazy Prim: every edge leaving the tree is pushed into the queue; entries whose node joined
/// the tree in the meantime are skipped when popped. Returns the chosen edges `(parent, child, weight)`
/// in the order in which the children joined the tree.
fn prim_edges<G>(graph: &G, root: Node) -> Vec<(Node, Node, G::Weight)>
where
    G: AdjacencyList,
{
    let mut in_tree = graph.vertex_bitset_unset();
    let mut edges = Vec::new();
    let mut heap = BinaryHeap::new();

    // (parent, weight) of every queue entry; ties are broken by insertion order
    let mut candidates: Vec<(Node, G::Weight)> = Vec::new();

    in_tree.set_bit(root);
    let mut next = Some(root);
    while let Some(u) = next.take() {
        for (v, w) in graph.weighted_neighbors_of(u) {
            if !in_tree.get_bit(v) {
                heap.push((MinHeapEntry::new(w.cost(), v), Reverse(candidates.len())));
                candidates.push((u, w));
            }
        }

        while let Some((MinHeapEntry { node: v, .. }, Reverse(entry))) = heap.pop() {
            if !in_tree.set_bit(v) {
                let (parent, w) = candidates[entry];
                edges.push((parent, v, w));
                next = Some(v);
                break;
            }
        }
    }

    edges
}

fn prim_root<G>(graph: &G, start: &G::Label) -> Result<Node>
where
    G: LabelledGraph + GraphType,
{
    graph.assert_undirected_for("Prim's algorithm")?;
    graph.try_node_of(start)
}

/// Provides Prim's algorithm for minimum spanning trees of undirected graphs
pub trait MinimumSpanningTree: LabelledGraph + AdjacencyList + GraphType + Sized {
    /// Returns the total cost of a minimum spanning tree of the component containing `start`.
    ///
    /// # Errors
    /// - [`GraphError::UnsupportedGraphKind`] if the graph is directed
    /// - [`GraphError::NodeNotFound`] if `start` is not part of the graph
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = WeightedGraph::from_weighted_edges(
    ///     GraphKind::Undirected,
    ///     [(("a", "b"), 1), (("b", "c"), 2), (("a", "c"), 3), (("c", "d"), 4)],
    /// );
    /// assert_eq!(g.prim(&"a").unwrap(), 7);
    /// ```
    fn prim(&self, start: &Self::Label) -> Result<CostOf<Self>> {
        let root = prim_root(self, start)?;
        Ok(prim_edges(self, root)
            .into_iter()
            .fold(CostOf::<Self>::zero(), |acc, (_, _, w)| acc + w.cost()))
    }

    /// Returns the edges of a minimum spanning tree of the component containing `start`,
    /// oriented away from `start`, in the order in which Prim's algorithm picks them.
    /// Errors are the same as for [`MinimumSpanningTree::prim`].
    fn prim_tree(&self, start: &Self::Label) -> Result<Vec<WeightedEdge<Self::Label, Self::Weight>>> {
        let root = prim_root(self, start)?;
        Ok(prim_edges(self, root)
            .into_iter()
            .map(|(u, v, w)| WeightedEdge::new(self.label_of(u).clone(), self.label_of(v).clone(), w))
            .collect())
    }
}

impl<G> MinimumSpanningTree for G where G: LabelledGraph + AdjacencyList + GraphType + Sized {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn clrs_example() {
        let g = WeightedGraph::from_weighted_edges(
            GraphKind::Undirected,
            [
                (('a', 'b'), 4),
                (('a', 'h'), 8),
                (('b', 'c'), 8),
                (('b', 'h'), 11),
                (('c', 'd'), 7),
                (('c', 'f'), 4),
                (('c', 'i'), 2),
                (('d', 'e'), 9),
                (('d', 'f'), 14),
                (('e', 'f'), 10),
                (('f', 'g'), 2),
                (('g', 'h'), 1),
                (('g', 'i'), 6),
                (('h', 'i'), 7),
            ],
        );

        assert_eq!(g.prim(&'a').unwrap(), 37);
        assert_eq!(g.prim(&'e').unwrap(), 37);

        let tree = g.prim_tree(&'a').unwrap();
        assert_eq!(tree.len(), 8);
        assert_eq!(tree[0], WeightedEdge::new('a', 'b', 4));
    }

    #[test]
    fn only_component_of_start() {
        let g = WeightedGraph::from_weighted_edges(
            GraphKind::Undirected,
            [((0, 1), 2.5), ((1, 2), 1.0), ((10, 11), 100.0)],
        );
        assert_eq!(g.prim(&0).unwrap(), 3.5);
        assert_eq!(g.prim(&11).unwrap(), 100.0);
    }

    #[test]
    fn negative_weights_and_parallel_edges() {
        let g = WeightedGraph::from_weighted_edges(
            GraphKind::Undirected,
            [((0, 1), 5), ((0, 1), -3), ((1, 2), 1), ((0, 2), 0)],
        );
        assert_eq!(g.prim(&2).unwrap(), -3);
    }

    #[test]
    fn errors() {
        let directed = WeightedGraph::from_weighted_edges(GraphKind::Directed, [((0, 1), 1)]);
        assert!(matches!(
            directed.prim(&0),
            Err(GraphError::UnsupportedGraphKind { .. })
        ));

        let undirected = WeightedGraph::from_weighted_edges(GraphKind::Undirected, [((0, 1), 1)]);
        assert!(matches!(undirected.prim(&2), Err(GraphError::NodeNotFound(_))));
    }

    #[test]
    fn matches_kruskal_on_random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);
        for _ in 0..20 {
            let topology = random_gnp(rng, GraphKind::Undirected, 30, 0.2);
            let g = WeightedGraph::from_weighted_edges(
                GraphKind::Undirected,
                topology
                    .edges()
                    .map(|e| ((*e.from, *e.to), rng.random_range(-10..50i64)))
                    .collect_vec(),
            );
            if !g.is_connected() {
                continue;
            }

            let mut sets = UnionFind::new(g.number_of_nodes());
            let kruskal: i64 = g
                .inserted_edges()
                .sorted_by_key(|&(_, _, w)| w)
                .filter(|&(u, v, _)| sets.union(u, v))
                .map(|(_, _, w)| w)
                .sum();

            let start = *g.labels().next().unwrap();
            assert_eq!(g.prim(&start).unwrap(), kruskal);
            assert_eq!(g.prim_tree(&start).unwrap().len(), g.len() - 1);
        }
    }
}
