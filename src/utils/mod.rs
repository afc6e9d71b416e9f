/*!
# Utilities

Provides small data structures shared by several algorithms:
- [`UnionFind`]: disjoint sets over dense node ids (undirected cycle detection),
- [`MinHeapEntry`]: an entry of a min-priority queue keyed by a partially ordered cost
  (Dijkstra, Prim).

You probably do not need to interact with this module directly.
*/

use crate::prelude::*;

mod heap;
mod union_find;

pub use heap::*;
pub use union_find::*;
