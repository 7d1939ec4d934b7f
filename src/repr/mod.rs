/*!
# Graph Representations

Storage backends for weighted graphs. Currently there is one:

- [`AdjArray`]: one arc-vector per vertex, the weighted counterpart of a
  classic adjacency array.

Directedness is a property of the *insertion*, not of the representation: an
undirected edge is stored as its two opposing arcs (see
[`GraphEdgeEditing::try_add_undirected_edge`](crate::ops::GraphEdgeEditing::try_add_undirected_edge)).
*/

use crate::{ops::*, *};

mod adj_array;

pub use adj_array::*;
