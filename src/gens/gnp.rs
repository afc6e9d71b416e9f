use super::*;

/// Returns an iterator over all candidate pairs of a `G(n,p)` graph on the nodes `0..n`:
/// ordered pairs `(u, v)` with `u != v` for directed graphs, pairs with `u < v` otherwise.
fn candidate_pairs(kind: GraphKind, n: NumNodes) -> impl Iterator<Item = (Node, Node)> {
    (0..n).flat_map(move |u| {
        let first = match kind {
            GraphKind::Directed => 0,
            GraphKind::Undirected => u + 1,
        };
        (first..n).filter(move |&v| v != u).map(move |v| (u, v))
    })
}

/// Generates a `G(n,p)` graph: every candidate pair on the labels `0..n` becomes an edge with
/// probability `p`, independent from each other. Self-loops are never generated.
///
/// As nodes only exist as endpoints of edges, labels without any edge are not part of the
/// returned graph, i.e. it may have fewer than `n` nodes.
///
/// ** Panics if `p` is not a valid probability **
///
/// # Examples
/// ```
/// use lgraphs::{prelude::*, gens::*};
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64Mcg;
///
/// let rng = &mut Pcg64Mcg::seed_from_u64(1);
/// let complete = random_gnp(rng, GraphKind::Undirected, 10, 1.0);
/// assert_eq!(complete.number_of_edges(), 45);
///
/// let empty = random_gnp(rng, GraphKind::Directed, 10, 0.0);
/// assert!(empty.is_empty());
/// ```
pub fn random_gnp<R: Rng>(
    rng: &mut R,
    kind: GraphKind,
    n: NumNodes,
    p: f64,
) -> UnweightedGraph<Node> {
    assert!((0.0..=1.0).contains(&p), "Invalid probability {p}");

    let mut graph = UnweightedGraph::new(kind);
    for (u, v) in candidate_pairs(kind, n) {
        if rng.random_bool(p) {
            graph.add_edge(u, v);
        }
    }

    debug!(
        kind = %kind,
        n,
        p,
        edges = graph.number_of_edges(),
        "Generated G(n,p) graph"
    );
    graph
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn candidates() {
        assert_eq!(
            candidate_pairs(GraphKind::Undirected, 3).collect_vec(),
            vec![(0, 1), (0, 2), (1, 2)]
        );
        assert_eq!(candidate_pairs(GraphKind::Directed, 3).count(), 6);
        assert_eq!(candidate_pairs(GraphKind::Directed, 0).count(), 0);
    }

    #[test]
    fn edges_are_simple() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        for kind in [GraphKind::Directed, GraphKind::Undirected] {
            let g = random_gnp(rng, kind, 50, 0.2);
            assert_eq!(g.kind(), kind);
            assert!(g.labels().all(|&u| u < 50));
            assert!(g.edges().all(|e| e.from != e.to));
            assert!(g.edges().map(|e| (*e.from, *e.to)).all_unique());
        }
    }

    #[test]
    fn expected_density() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let g = random_gnp(rng, GraphKind::Directed, 200, 0.1);
        // 39800 candidates, expecting 3980 edges
        let m = g.number_of_edges() as f64;
        assert!((3500.0..4500.0).contains(&m), "{m}");
    }
}
