use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns a range over V. In contrast to `self.vertices()`, the range
    /// does not borrow self and hence may be used where additional mutable
    /// references of self are needed.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns full bitset with one entry per node
    fn vertex_bitset_set(&self) -> NodeBitSet {
        NodeBitSet::new_all_set(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of arcs of the graph.
    /// An undirected insertion contributes two arcs.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the targets of all outgoing arcs of `u`,
    /// in insertion order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns an iterator over `(target, weight)` pairs of all outgoing
    /// arcs of `u`, in insertion order.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns the number of outgoing arcs of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over all out-degrees
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum out-degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.weighted_neighbors_of(u)
            .map(move |(v, w)| Edge(u, v, w))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns an iterator over all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> {
        let mut edges = self.edges(only_normalized).collect_vec();
        edges.sort_unstable();
        edges.into_iter()
    }
}

/// Trait for accessing the outgoing arcs of a node as a slice
pub trait NeighborsSlice {
    /// Returns a slice-reference over the outgoing arcs of a given vertex
    fn as_arcs_slice(&self, u: Node) -> &[(Node, Weight)];
}

/// Trait for positional access into a neighborhood, required by algorithms
/// that keep an explicit cursor per vertex (e.g. the iterative DFS)
pub trait IndexedAdjacencyList: AdjacencyList {
    /// Returns the ith outgoing arc (0-indexed) of a given vertex
    /// ** Panics if `u >= n || i >= deg(u)` **
    fn ith_weighted_neighbor(&self, u: Node, i: NumNodes) -> (Node, Weight);
}

impl<G: NeighborsSlice + AdjacencyList> IndexedAdjacencyList for G {
    #[inline]
    fn ith_weighted_neighbor(&self, u: Node, i: NumNodes) -> (Node, Weight) {
        self.as_arcs_slice(u)[i as usize]
    }
}

/// Trait to test existence of certain edges in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if at least one arc (u,v) exists in the graph.
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns the weight of the lightest arc (u,v), if any exists.
    /// ** Panics if `u >= n` **
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight>;
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges.
///
/// Out-of-range endpoints are reported via the boolean return value of the
/// `try_*` methods; a failed insertion never mutates the graph. Parallel
/// arcs are permitted and not deduplicated (graph contraction relies on
/// multi-edges surviving).
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the arc `(u, v)` with weight `weight` to the graph.
    /// Returns *false* and leaves the graph untouched if `u` or `v` is not
    /// a vertex of the graph.
    fn try_add_edge(&mut self, u: Node, v: Node, weight: Weight) -> bool;

    /// [`GraphEdgeEditing::try_add_edge`] with the default weight of `1`
    fn try_add_unweighted_edge(&mut self, u: Node, v: Node) -> bool {
        self.try_add_edge(u, v, DEFAULT_WEIGHT)
    }

    /// Adds the arcs `(u, v)` and `(v, u)`, both with weight `weight`.
    /// Returns *false* and inserts neither arc if an endpoint is not a
    /// vertex of the graph.
    fn try_add_undirected_edge(&mut self, u: Node, v: Node, weight: Weight) -> bool;

    /// Adds the arc *(u,v)* to the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node, weight: Weight) {
        assert!(self.try_add_edge(u, v, weight));
    }

    /// Adds all arcs in the collection.
    /// ** Panics if any endpoint is out of range **
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v, w);
        }
    }

    /// Adds both arcs of every edge in the collection.
    /// ** Panics if any endpoint is out of range **
    fn add_undirected_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            assert!(self.try_add_undirected_edge(u, v, w));
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over arcs
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;

    /// Create a graph from a number of nodes and an iterator over undirected
    /// edges (both arcs are inserted per edge)
    fn from_undirected_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>)
        -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }

    fn from_undirected_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Self {
        let mut graph = Self::new(n);
        graph.add_undirected_edges(edges);
        graph
    }
}

/// Derives the reverse orientation of a graph
pub trait GraphReverse: AdjacencyList + GraphFromScratch {
    /// Returns the graph with every arc flipped, weights preserved
    fn reversed(&self) -> Self {
        Self::from_edges(
            self.number_of_nodes(),
            self.edges(false).map(|e| e.reversed()),
        )
    }
}

impl<G: AdjacencyList + GraphFromScratch> GraphReverse for G {}
