use super::*;

/// A weighted graph stored as one arc-vector per vertex.
///
/// Arcs keep their insertion order and parallel arcs are allowed. The
/// memory layout makes arc iteration and positional lookup cheap, at the
/// cost of O(deg) edge-existence queries.
#[derive(Clone)]
pub struct AdjArray {
    arcs: Vec<Vec<(Node, Weight)>>,
    num_edges: NumEdges,
}

impl GraphNodeOrder for AdjArray {
    fn number_of_nodes(&self) -> NumNodes {
        self.arcs.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }
}

impl GraphEdgeOrder for AdjArray {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjArray {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.arcs[u as usize].iter().map(|&(v, _)| v)
    }

    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.arcs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.arcs[u as usize].len() as NumNodes
    }
}

impl NeighborsSlice for AdjArray {
    fn as_arcs_slice(&self, u: Node) -> &[(Node, Weight)] {
        &self.arcs[u as usize]
    }
}

impl AdjacencyTest for AdjArray {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.arcs[u as usize].iter().any(|&(x, _)| x == v)
    }

    fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
        self.arcs[u as usize]
            .iter()
            .filter_map(|&(x, w)| (x == v).then_some(w))
            .min()
    }
}

impl GraphNew for AdjArray {
    fn new(n: NumNodes) -> Self {
        assert!(n > 0);
        Self {
            arcs: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }
}

impl GraphEdgeEditing for AdjArray {
    fn try_add_edge(&mut self, u: Node, v: Node, weight: Weight) -> bool {
        if u >= self.number_of_nodes() || v >= self.number_of_nodes() {
            return false;
        }

        self.arcs[u as usize].push((v, weight));
        self.num_edges += 1;

        true
    }

    fn try_add_undirected_edge(&mut self, u: Node, v: Node, weight: Weight) -> bool {
        // validate both endpoints up front so that a failure never leaves
        // half an edge behind
        if u >= self.number_of_nodes() || v >= self.number_of_nodes() {
            return false;
        }

        // a self-loop is stored twice as well, mirroring two directed inserts
        self.arcs[u as usize].push((v, weight));
        self.arcs[v as usize].push((u, weight));
        self.num_edges += 2;

        true
    }
}
