/*!
# Maximum Flow

Edge weights are interpreted as capacities and the maximum `s`-`t` flow is computed with the
Edmonds–Karp algorithm: repeatedly augment along a shortest (by number of arcs) path in the
residual network, found by BFS. This needs `O(n * m)` augmentations, each costing `O(m)`,
i.e. `O(n * m^2)` in total, independent of the capacities.

- Capacities must be non-negative.
- Parallel edges add up.
- An undirected edge `{u, v}` with capacity `c` can carry up to `c` units in either direction.
- Self-loops never carry flow.
*/

use std::collections::VecDeque;

use tracing::debug;

use super::*;

/// Residual network stored as paired arcs: arc `2i` and arc `2i + 1` are reverse to each other.
pub struct ResidualNetwork<C> {
    heads: Vec<Node>,
    residual: Vec<C>,
    out_arcs: Vec<Vec<usize>>,
}

impl<C: Cost> ResidualNetwork<C> {
    /// Builds the residual network of a graph whose costs are used as capacities.
    /// Every inserted directed edge becomes one pair of arcs, every undirected edge two
    /// independent pairs (one per orientation), so no residual exceeds its edge's capacity.
    pub fn new<G>(graph: &G) -> Self
    where
        G: GraphEdgeOrder + GraphType,
        G::Weight: Weight<Cost = C>,
    {
        let mut network = Self {
            heads: Vec::new(),
            residual: Vec::new(),
            out_arcs: vec![Vec::new(); graph.len()],
        };

        for (u, v, w) in graph.inserted_edges() {
            if u == v {
                continue;
            }

            let capacity = w.cost();
            network.add_arc_pair(u, v, capacity, C::zero());
            if graph.is_undirected() {
                network.add_arc_pair(v, u, capacity, C::zero());
            }
        }

        network
    }

    fn add_arc_pair(&mut self, u: Node, v: Node, forward: C, backward: C) {
        self.out_arcs[u as usize].push(self.heads.len());
        self.heads.push(v);
        self.residual.push(forward);

        self.out_arcs[v as usize].push(self.heads.len());
        self.heads.push(u);
        self.residual.push(backward);
    }

    /// Searches a shortest augmenting path by BFS and returns the arcs on it (from `s` to `t`)
    fn augmenting_path(&self, s: Node, t: Node) -> Option<Vec<usize>> {
        let mut pred_arc = vec![usize::MAX; self.out_arcs.len()];
        let mut visited = vec![false; self.out_arcs.len()];
        let mut queue = VecDeque::from([s]);
        visited[s as usize] = true;

        'search: while let Some(u) = queue.pop_front() {
            for &arc in &self.out_arcs[u as usize] {
                let v = self.heads[arc];
                if visited[v as usize] || !(self.residual[arc] > C::zero()) {
                    continue;
                }

                visited[v as usize] = true;
                pred_arc[v as usize] = arc;
                if v == t {
                    break 'search;
                }
                queue.push_back(v);
            }
        }

        if !visited[t as usize] {
            return None;
        }

        let mut path = Vec::new();
        let mut v = t;
        while v != s {
            let arc = pred_arc[v as usize];
            path.push(arc);
            v = self.heads[arc ^ 1];
        }
        path.reverse();
        Some(path)
    }

    /// Runs Edmonds–Karp from `s` to `t` and returns the value of a maximum flow.
    /// The network keeps the final residual capacities.
    /// ** Panics if `s` or `t` is out of range **
    pub fn edmonds_karp(&mut self, s: Node, t: Node) -> C {
        let mut value = C::zero();
        let mut augmentations = 0usize;

        while let Some(path) = self.augmenting_path(s, t) {
            let bottleneck = path
                .iter()
                .map(|&arc| self.residual[arc])
                .reduce(|a, b| a.min_cost(b))
                .unwrap_or_else(C::zero);

            for &arc in &path {
                self.residual[arc] = self.residual[arc] - bottleneck;
                self.residual[arc ^ 1] = self.residual[arc ^ 1] + bottleneck;
            }

            value = value + bottleneck;
            augmentations += 1;
        }

        debug!(augmentations, value = %value, "Edmonds-Karp finished");
        value
    }

    /// Returns the nodes reachable from `s` in the residual network, i.e. the source side of a
    /// minimum cut after [`ResidualNetwork::edmonds_karp`] was run.
    pub fn source_side(&self, s: Node) -> Vec<Node> {
        let mut visited = vec![false; self.out_arcs.len()];
        let mut stack = vec![s];
        visited[s as usize] = true;
        let mut side = Vec::new();

        while let Some(u) = stack.pop() {
            side.push(u);
            for &arc in &self.out_arcs[u as usize] {
                let v = self.heads[arc];
                if !visited[v as usize] && self.residual[arc] > C::zero() {
                    visited[v as usize] = true;
                    stack.push(v);
                }
            }
        }

        side.sort_unstable();
        side
    }
}

fn flow_endpoints<G>(graph: &G, source: &G::Label, sink: &G::Label) -> Result<(Node, Node)>
where
    G: LabelledGraph + AdjacencyList,
{
    let s = graph.try_node_of(source)?;
    let t = graph.try_node_of(sink)?;
    if s == t {
        return Err(GraphError::SourceIsSink(format!("{source:?}")));
    }

    if let Some((u, v, w)) = graph.find_negative_weight() {
        return Err(GraphError::negative_weight(
            "Edmonds-Karp",
            graph.label_of(u),
            graph.label_of(v),
            &w,
        ));
    }

    Ok((s, t))
}

/// Provides maximum flows / minimum cuts where edge weights are capacities
pub trait NetworkFlow: LabelledGraph + GraphEdgeOrder + GraphType + Sized {
    /// Returns the value of a maximum flow from `source` to `sink` (Edmonds–Karp).
    ///
    /// # Errors
    /// - [`GraphError::NodeNotFound`] if `source` or `sink` is not part of the graph
    /// - [`GraphError::SourceIsSink`] if both are the same node
    /// - [`GraphError::NegativeWeightUnsupported`] if some capacity is negative
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = WeightedGraph::from_weighted_edges(
    ///     GraphKind::Directed,
    ///     [(("s", "a"), 3), (("s", "b"), 2), (("a", "b"), 1), (("a", "t"), 2), (("b", "t"), 3)],
    /// );
    /// assert_eq!(g.max_flow(&"s", &"t").unwrap(), 5);
    /// assert_eq!(g.max_flow(&"t", &"s").unwrap(), 0);
    /// ```
    fn max_flow(&self, source: &Self::Label, sink: &Self::Label) -> Result<CostOf<Self>> {
        let (s, t) = flow_endpoints(self, source, sink)?;
        Ok(ResidualNetwork::new(self).edmonds_karp(s, t))
    }

    /// Returns the value of a maximum flow together with the source side of a minimum cut.
    /// Errors are the same as for [`NetworkFlow::max_flow`].
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = WeightedGraph::from_weighted_edges(
    ///     GraphKind::Undirected,
    ///     [((1, 2), 5.0), ((2, 3), 1.5), ((3, 4), 9.0)],
    /// );
    /// assert_eq!(g.min_cut(&1, &4).unwrap(), (1.5, vec![1, 2]));
    /// ```
    fn min_cut(
        &self,
        source: &Self::Label,
        sink: &Self::Label,
    ) -> Result<(CostOf<Self>, Vec<Self::Label>)> {
        let (s, t) = flow_endpoints(self, source, sink)?;
        let mut network = ResidualNetwork::new(self);
        let value = network.edmonds_karp(s, t);
        Ok((value, self.labels_of(network.source_side(s))))
    }
}

impl<G> NetworkFlow for G where G: LabelledGraph + GraphEdgeOrder + GraphType + Sized {}
