/*!
# Graph Algorithms

This module provides a suite of **graph algorithms** built on top of the graph
representations in this crate. All algorithms are re-exported at the top level
of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversal, strong connectivity, shortest paths, spanning
trees, and minimum cuts.

Algorithms that operate on a graph are provided as traits with blanket
implementations, making them directly callable as methods
(`graph.dijkstra(0)`, `graph.kosaraju()`, ...). The traversal skeletons
accept a visitor so that one engine serves every hook-based use case.
*/

mod min_cut;
mod mst;
mod scc;
mod shortest_path;
mod traversal;

use crate::{prelude::*, utils::*};

pub use min_cut::*;
pub use mst::*;
pub use scc::*;
pub use shortest_path::*;
pub use traversal::*;
