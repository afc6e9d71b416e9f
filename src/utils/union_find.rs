use super::*;

/// Disjoint-set forest over the nodes `0..n` with path halving and union by size.
///
/// # Examples
/// ```
/// use lgraphs::utils::UnionFind;
///
/// let mut uf = UnionFind::new(4);
/// assert!(uf.union(0, 1));
/// assert!(uf.union(2, 3));
/// assert!(!uf.union(1, 0));
/// assert_eq!(uf.number_of_sets(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<Node>,
    size: Vec<NumNodes>,
    sets: NumNodes,
}

impl UnionFind {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n as usize],
            sets: n,
        }
    }

    /// Returns the representative of the set containing `u`
    /// ** Panics if `u >= n` **
    pub fn find(&mut self, mut u: Node) -> Node {
        while self.parent[u as usize] != u {
            let grand_parent = self.parent[self.parent[u as usize] as usize];
            self.parent[u as usize] = grand_parent;
            u = grand_parent;
        }
        u
    }

    /// Merges the sets containing `u` and `v`.
    /// Returns *false* if both already were in the same set.
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let mut ru = self.find(u);
        let mut rv = self.find(v);
        if ru == rv {
            return false;
        }

        if self.size[ru as usize] < self.size[rv as usize] {
            std::mem::swap(&mut ru, &mut rv);
        }
        self.parent[rv as usize] = ru;
        self.size[ru as usize] += self.size[rv as usize];
        self.sets -= 1;
        true
    }

    /// Returns *true* if `u` and `v` are in the same set
    pub fn same_set(&mut self, u: Node, v: Node) -> bool {
        self.find(u) == self.find(v)
    }

    /// Number of disjoint sets
    pub fn number_of_sets(&self) -> NumNodes {
        self.sets
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn chain_of_unions() {
        let mut uf = UnionFind::new(100);
        for u in 1..100 {
            assert!(uf.union(u - 1, u));
        }
        assert_eq!(uf.number_of_sets(), 1);
        assert!(uf.same_set(0, 99));
    }

    #[test]
    fn random_unions_match_naive_labels() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let n = 50;

        for _ in 0..20 {
            let mut uf = UnionFind::new(n);
            let mut label: Vec<Node> = (0..n).collect();

            for _ in 0..30 {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);

                let merged = uf.union(u, v);
                let (lu, lv) = (label[u as usize], label[v as usize]);
                assert_eq!(merged, lu != lv);
                for l in label.iter_mut() {
                    if *l == lv {
                        *l = lu;
                    }
                }
            }

            for u in 0..n {
                for v in 0..n {
                    assert_eq!(uf.same_set(u, v), label[u as usize] == label[v as usize]);
                }
            }
        }
    }
}
