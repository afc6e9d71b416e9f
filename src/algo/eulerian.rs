use std::fmt::Display;

use super::*;

/// Classification of a graph with respect to Eulerian walks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EulerianClass {
    /// No walk uses every edge exactly once
    NotEulerian,
    /// There is an Eulerian path, but no Eulerian circuit
    SemiEulerian,
    /// There is an Eulerian circuit
    Eulerian,
}

impl Display for EulerianClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EulerianClass::NotEulerian => write!(f, "not eulerian"),
            EulerianClass::SemiEulerian => write!(f, "semi-eulerian"),
            EulerianClass::Eulerian => write!(f, "eulerian"),
        }
    }
}

pub trait Eulerian: AdjacencyList + GraphType + Sized {
    /// Classifies the graph by the existence of Eulerian paths and circuits.
    ///
    /// - The graph has to be connected (see [`Connectivity::is_connected`]),
    ///   otherwise it is [`EulerianClass::NotEulerian`]. This includes graphs without edges.
    /// - Undirected: no node of odd degree gives an Eulerian circuit, exactly two give an Eulerian path.
    ///   Self-loops count twice towards the degree.
    /// - Directed: in-degree equals out-degree everywhere gives an Eulerian circuit. If exactly
    ///   one node has one more outgoing edge and exactly one node has one more incoming edge,
    ///   while all others are balanced, there is an Eulerian path.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = UnweightedGraph::undirected();
    /// g.connect_cycle(['a', 'b', 'c']);
    /// assert_eq!(g.eulerian(), EulerianClass::Eulerian);
    ///
    /// let mut g = UnweightedGraph::undirected();
    /// g.connect_path(['a', 'b', 'c']);
    /// assert_eq!(g.eulerian(), EulerianClass::SemiEulerian);
    /// ```
    fn eulerian(&self) -> EulerianClass {
        if !self.is_connected() {
            return EulerianClass::NotEulerian;
        }

        match self.kind() {
            GraphKind::Undirected => {
                let odd = self
                    .vertices()
                    .filter(|&u| self.degree_of(u) % 2 == 1)
                    .count();
                match odd {
                    0 => EulerianClass::Eulerian,
                    2 => EulerianClass::SemiEulerian,
                    _ => EulerianClass::NotEulerian,
                }
            }
            GraphKind::Directed => {
                let in_degs = self.in_degrees();
                let mut surplus_out = 0;
                let mut surplus_in = 0;

                for u in self.vertices() {
                    let out_deg = self.degree_of(u) as i64;
                    let in_deg = in_degs[u as usize] as i64;
                    match out_deg - in_deg {
                        0 => {}
                        1 => surplus_out += 1,
                        -1 => surplus_in += 1,
                        _ => return EulerianClass::NotEulerian,
                    }
                }

                match (surplus_out, surplus_in) {
                    (0, 0) => EulerianClass::Eulerian,
                    (1, 1) => EulerianClass::SemiEulerian,
                    _ => EulerianClass::NotEulerian,
                }
            }
        }
    }
}

impl<G> Eulerian for G where G: AdjacencyList + GraphType + Sized {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;

    #[test]
    fn undirected() {
        let mut g = UnweightedGraph::undirected();
        g.connect_cycle(0..6);
        assert_eq!(g.eulerian(), EulerianClass::Eulerian);

        g.add_edge(0, 3);
        assert_eq!(g.eulerian(), EulerianClass::SemiEulerian);

        g.add_edge(1, 4);
        assert_eq!(g.eulerian(), EulerianClass::NotEulerian);

        g.add_edge(2, 2);
        assert_eq!(g.eulerian(), EulerianClass::NotEulerian);
    }

    #[test]
    fn self_loops_keep_parity() {
        let mut g = UnweightedGraph::undirected();
        g.connect_path(["x", "y"]);
        g.add_edge("y", "y");
        assert_eq!(g.eulerian(), EulerianClass::SemiEulerian);
    }

    #[test]
    fn disconnected_or_empty() {
        let mut g = UnweightedGraph::undirected();
        assert_eq!(g.eulerian(), EulerianClass::NotEulerian);

        g.connect_cycle(0..3);
        g.connect_cycle(10..13);
        assert_eq!(g.eulerian(), EulerianClass::NotEulerian);
    }

    #[test]
    fn directed() {
        let mut g = UnweightedGraph::directed();
        g.connect_cycle(0..5);
        assert_eq!(g.eulerian(), EulerianClass::Eulerian);

        let mut g = UnweightedGraph::directed();
        g.connect_path(0..5);
        assert_eq!(g.eulerian(), EulerianClass::SemiEulerian);

        // 0 -> 1 <- 2 has two nodes with surplus in-degree
        let g = UnweightedGraph::from_edges(GraphKind::Directed, [(0, 1), (2, 1)]);
        assert_eq!(g.eulerian(), EulerianClass::NotEulerian);
    }

    #[test]
    fn display() {
        assert_eq!(EulerianClass::SemiEulerian.to_string(), "semi-eulerian");
    }
}
