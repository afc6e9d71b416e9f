/*!
# Graph Generators

This module provides generators for constructing graphs, mainly for tests and benchmarks:

- [`GeneratorSubstructures`] adds paths, cycles and cliques over given labels to an existing
  unweighted graph.
- [`random_gnp`] samples an Erdős–Rényi `G(n,p)` graph: every possible edge exists with
  probability `p`, independent from each other. Use a seeded RNG (e.g. `rand_pcg::Pcg64Mcg`)
  for reproducible instances.
*/

use rand::Rng;
use tracing::debug;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;
