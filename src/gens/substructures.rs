/*!
# Substructure Generators

Adds paths, cycles and cliques over given labels to an existing unweighted graph.
Labels that are not part of the graph yet are inserted with the first edge touching them,
so these helpers double as a compact way to build test graphs.

# Example

```rust
use lgraphs::{prelude::*, gens::*};

let mut g = UnweightedGraph::directed();
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);
g.connect_clique([0, 2, 4], false);

assert_eq!(g.number_of_edges(), 2 + 3 + 6);
assert!(g.has_edge(&4, &2) && g.has_edge(&4, &0));
```
*/

use itertools::Itertools;

use super::*;

/// Paths, cycles and cliques for every unweighted graph that supports edge insertion
pub trait GeneratorSubstructures: GraphEdgeEditing + AdjacencyList<Weight = Unit> {
    /// Connects the given labels in order with a **simple path**.
    ///
    /// Each consecutive pair of labels is connected by a single edge.
    ///
    /// # Example
    /// ```rust
    /// use lgraphs::{prelude::*, gens::*};
    ///
    /// let mut g = UnweightedGraph::undirected();
    /// g.connect_path(["a", "b", "c", "d"]);
    ///
    /// assert!(g.has_edge(&"a", &"b"));
    /// assert!(g.has_edge(&"c", &"b"));
    /// assert!(!g.has_edge(&"a", &"d"));
    /// ```
    fn connect_path<P>(&mut self, labels_on_path: P)
    where
        P: IntoIterator<Item = Self::Label>,
    {
        for (u, v) in labels_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v);
        }
    }

    /// Connects the given labels with a **cycle**.
    ///
    /// - Consecutive labels are connected by edges.
    /// - Additionally, the last label is connected back to the first.
    ///   A single label thus receives a self-loop.
    fn connect_cycle<C>(&mut self, labels_in_cycle: C)
    where
        C: IntoIterator<Item = Self::Label>,
    {
        let mut iter = labels_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first.clone();
            for cur in iter {
                self.add_edge(prev, cur.clone());
                prev = cur;
            }

            self.add_edge(prev, first);
        }
    }

    /// Connects all given labels into a **clique** (complete subgraph).
    ///
    /// - If `with_loops` is `true`, each label also gets a self-loop.
    /// - Undirected graphs receive every pair once, directed graphs both orientations.
    fn connect_clique<C>(&mut self, labels: C, with_loops: bool)
    where
        C: IntoIterator<Item = Self::Label>,
        Self: GraphType,
    {
        let labels = labels.into_iter().collect_vec();
        let undirected = self.is_undirected();

        for (i, u) in labels.iter().enumerate() {
            for (j, v) in labels.iter().enumerate() {
                if (i == j && !with_loops) || (undirected && j < i) {
                    continue;
                }

                self.add_edge(u.clone(), v.clone());
            }
        }
    }
}

impl<G> GeneratorSubstructures for G where G: GraphEdgeEditing + AdjacencyList<Weight = Unit> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_path() {
        {
            let mut g = UnweightedGraph::<u32>::directed();
            g.connect_path([]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = UnweightedGraph::directed();
            g.connect_path([1]);
            assert_eq!(g.number_of_edges(), 0);
            assert!(g.is_empty());
        }

        {
            let mut g = UnweightedGraph::directed();
            g.connect_path([0, 3, 1, 4]);
            assert_eq!(
                g.edges().map(|e| (*e.from, *e.to)).collect_vec(),
                vec![(0, 3), (3, 1), (1, 4)]
            );
        }
    }

    #[test]
    fn test_connect_cycle() {
        {
            let mut g = UnweightedGraph::<u32>::directed();
            g.connect_cycle([]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = UnweightedGraph::directed();
            g.connect_cycle([1]);
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_self_loop(&1));
        }

        {
            let mut g = UnweightedGraph::undirected();
            g.connect_cycle(["a", "b", "c", "d"]);
            assert_eq!(g.number_of_edges(), 4);
            assert!(g.has_edge(&"a", &"d"));
        }
    }

    #[test]
    fn test_connect_clique() {
        {
            let mut g = UnweightedGraph::<u32>::undirected();
            g.connect_clique([1], false);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = UnweightedGraph::undirected();
            g.connect_clique([1], true);
            assert_eq!(g.number_of_edges(), 1);
        }

        {
            let mut g = UnweightedGraph::undirected();
            g.connect_clique([1, 2, 4], false);
            assert_eq!(g.number_of_edges(), 3);
        }

        {
            let mut g = UnweightedGraph::directed();
            g.connect_clique([1, 2, 4], true);
            assert_eq!(g.number_of_edges(), 9);
        }
    }
}
