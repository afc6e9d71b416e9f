use std::fmt::{Debug, Display};

/// An edge is defined by two labelled endpoints.
/// Whether it is directed depends on the graph it was taken from.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<T>(pub T, pub T);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl<T: Display> Display for Edge<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl<T: Debug> Debug for Edge<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?})", self.0, self.1)
    }
}

impl<T: PartialEq> Edge<T> {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl<T: Clone> Edge<T> {
    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1.clone(), self.0.clone())
    }
}

impl<T: Ord + Clone> Edge<T> {
    /// Normalizes the edge such that the smaller endpoint comes first
    pub fn normalized(&self) -> Self {
        if self.0 <= self.1 {
            self.clone()
        } else {
            self.reverse()
        }
    }
}

impl<T> From<(T, T)> for Edge<T> {
    fn from(value: (T, T)) -> Self {
        Edge(value.0, value.1)
    }
}

impl<T: Clone> From<&(T, T)> for Edge<T> {
    fn from(value: &(T, T)) -> Self {
        Edge(value.0.clone(), value.1.clone())
    }
}

/// An edge together with its weight, as inserted into a graph.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WeightedEdge<T, W> {
    pub from: T,
    pub to: T,
    pub weight: W,
}

impl<T, W> WeightedEdge<T, W> {
    pub fn new(from: T, to: T, weight: W) -> Self {
        Self { from, to, weight }
    }

    /// Drops the weight
    pub fn into_edge(self) -> Edge<T> {
        Edge(self.from, self.to)
    }
}

impl<T, W> From<((T, T), W)> for WeightedEdge<T, W> {
    fn from(((from, to), weight): ((T, T), W)) -> Self {
        Self { from, to, weight }
    }
}

impl<T, W> From<(T, T, W)> for WeightedEdge<T, W> {
    fn from((from, to, weight): (T, T, W)) -> Self {
        Self { from, to, weight }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalize_and_reverse() {
        let e = Edge(5, 2);
        assert_eq!(e.reverse(), Edge(2, 5));
        assert_eq!(e.normalized(), Edge(2, 5));
        assert_eq!(Edge(1, 3).normalized(), Edge(1, 3));
        assert!(Edge('a', 'a').is_loop());
        assert_eq!(format!("{}", Edge("u", "v")), "(u,v)");
    }

    #[test]
    fn weighted_from_tuples() {
        let e: WeightedEdge<&str, i64> = (("a", "b"), -3).into();
        assert_eq!(e.weight, -3);
        assert_eq!(e.into_edge(), Edge("a", "b"));
    }
}
