/*!
# Graph Algorithms

This module provides a suite of **graph algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use lgraphs::algo::*;
```
and gain access to traversals, connectivity, cycles, shortest paths, spanning trees and flows.

Every algorithm is a trait with a blanket implementation for all graphs providing the required
operations. Label-level methods (e.g. `graph.bfs(&start)`) translate to dense ids, run the
algorithm and translate the result back. Id-level building blocks such as [`BFS`], [`DFS`]
or [`TopoSearch`] are iterators, making it easy to consume results lazily.
*/

mod bellman_ford;
mod bipartite;
mod bridges;
mod connectivity;
mod eulerian;
mod mst;
mod network_flow;
mod shortest_path;
mod topology;
mod traversal;

use crate::{
    error::{GraphError, Result},
    prelude::*,
    utils::*,
};

pub use bellman_ford::*;
pub use bipartite::*;
pub use bridges::*;
pub use connectivity::*;
pub use eulerian::*;
pub use mst::*;
pub use network_flow::*;
pub use shortest_path::*;
pub use topology::*;
pub use traversal::*;
