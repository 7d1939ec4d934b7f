/*!
`wgraphs` is a weighted graph data structure & algorithms library covering the
classical repertoire: hook-driven breadth- and depth-first search, strongly
connected components, single-source and all-pairs shortest paths, minimum
spanning trees, and randomized minimum cuts.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of
nodes in the graph. As most common graphs do not exceed `2^32` nodes, this
should normally suffice and save space as compared to `u64/usize`.
**Edges** are the tuple-struct `Edge(Node, Node, Weight)` with `Weight = i64`;
edges inserted without an explicit weight carry the default weight `1`, and
[`INFINITE_WEIGHT`](crate::edge::INFINITE_WEIGHT) serves as the "no edge /
unreachable" sentinel of the distance algorithms.

### Directed vs Undirected

Directedness is a property of the *insertion*, not of the graph: a directed
insertion adds the single arc `(u, v)`, an undirected insertion adds both
opposing arcs. The two styles can be mixed freely in one graph.

### Available Representations

There is one storage backend, [`AdjArray`](crate::repr::AdjArray): one
arc-vector per vertex, keeping insertion order and permitting parallel arcs.

# Design

All algorithms are provided as traits with blanket implementations on the
graph representation, making them directly callable as methods
(`graph.dijkstra(0)`, `graph.kosaraju()`, `graph.prim(0)`, ...). The traversal
skeletons additionally accept a [`TraversalVisitor`](crate::algo::TraversalVisitor)
so that one engine serves every hook-based use case; searches hand their
bookkeeping back to the caller as an explicit
[`TraversalState`](crate::algo::TraversalState), so runs are independent and
reentrant. Randomized algorithms take the random number generator as a
parameter for reproducibility.

# Usage

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your
needs:
- [`prelude`] includes definitions for nodes, edges, basic graph operations,
  and the graph representation,
- [`algo`] includes the algorithm traits implemented on graphs itself,
- [`utils`] includes the small abstractions the algorithms are parameterized
  over (most notably the [`Set`](crate::utils::Set) trait behind the traversal
  bookkeeping).

# When to use

You should only use this library if the following apply:
- Your graphs are unlabelled with integer edge weights
- You want to work in *Rust*
- You require only the classical algorithms on otherwise basic graphs.

In all other cases, it might make sense for you to check out
[petgraph](https://crates.io/crates/petgraph) who provide a more extensive
library for general graphs in *Rust*.
*/

pub mod algo;
pub mod edge;
pub mod node;
pub mod ops;
pub mod repr;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `wgraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
