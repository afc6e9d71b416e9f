use std::cmp::Ordering;

use super::*;

/// Entry of a [`BinaryHeap`](std::collections::BinaryHeap) that pops the *smallest* key first.
///
/// Keys only need to be partially ordered so that floating point costs can be used;
/// incomparable keys are treated as equal.
/// Ties are broken by the smaller node to keep the pop order deterministic.
#[derive(Debug, Clone, Copy)]
pub struct MinHeapEntry<C> {
    pub key: C,
    pub node: Node,
}

impl<C> MinHeapEntry<C> {
    pub fn new(key: C, node: Node) -> Self {
        Self { key, node }
    }
}

impl<C: PartialOrd> PartialEq for MinHeapEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: PartialOrd> Eq for MinHeapEntry<C> {}

impl<C: PartialOrd> PartialOrd for MinHeapEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: PartialOrd> Ord for MinHeapEntry<C> {
    // reversed, since `BinaryHeap` is a max-heap
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .partial_cmp(&self.key)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn pops_minimum_first() {
        let mut heap = BinaryHeap::new();
        heap.push(MinHeapEntry::new(3.5, 0));
        heap.push(MinHeapEntry::new(-1.0, 1));
        heap.push(MinHeapEntry::new(2.0, 2));
        heap.push(MinHeapEntry::new(2.0, 3));

        let order: Vec<Node> = std::iter::from_fn(|| heap.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec![1, 2, 3, 0]);
    }
}
