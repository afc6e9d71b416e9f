/*!
`lgraphs` is a graph data structure & algorithms library for **l**abelled graphs:
nodes are identified by arbitrary hashable labels (`&str`, `char`, integers, your own types, ...)
and edges optionally carry numeric weights.

# Representation

A [`Graph<T, W>`](crate::repr::Graph) stores adjacency lists over labels `T` with edge weights `W`.

- Graphs are either **directed** or **undirected** ([`GraphKind`](crate::repr::GraphKind)),
  fixed at construction. In an undirected graph, `add_edge(u, v)` stores `u -> v` and `v -> u`.
- Unweighted graphs use the [`Unit`](crate::weight::Unit) weight (every edge costs one).
  Weighted graphs use any primitive number, negative values included.
- Nodes only exist as endpoints of edges; there are no isolated nodes.

Internally every label is interned to a dense id [`Node`](crate::node::Node) (`u32`) in insertion
order. All algorithms work on these ids and translate back to labels for their results, so every
algorithm is deterministic for a given insertion order.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, weights, errors, basic graph operations and the graph itself,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS (`graph.bfs(&start)`),
  connected components, topological sorting, bridges, SCCs, shortest paths, MST and maximum flow,
- [`io`] includes writers for the Dot-Format and a plain edge list format (which can also be read),
- [`gens`] includes substructure generators (paths/cycles/cliques) and a random `G(n,p)` generator.

In most use-cases, `use lgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use lgraphs::{prelude::*, algo::*};

let mut g = WeightedGraph::directed();
g.add_weighted_edge("A", "B", 1);
g.add_weighted_edge("B", "C", 2);

assert_eq!(g.shortest_path(&"A", &"C").unwrap(), 3);
assert!(matches!(g.shortest_path(&"C", &"A"), Err(GraphError::NoPathExists { .. })));
```

# Errors

Fallible operations return [`error::Result`]. Unknown labels, unreachable targets, negative weights
where they are not supported and malformed input are reported as [`GraphError`](crate::error::GraphError)
variants; no operation signals failure through sentinel values.

# Logging

Algorithm choices and fallbacks are reported through [`tracing`](https://docs.rs/tracing);
the library never installs a subscriber.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub mod utils;
pub mod weight;

/// `lgraphs::prelude` includes definitions for nodes, edges, weights, errors, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{
        edge::*,
        error::GraphError,
        node::*,
        ops::*,
        repr::*,
        weight::*,
    };
}

pub use prelude::*;
