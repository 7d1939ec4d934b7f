use super::*;

/// Minimum spanning tree computation via **Prim's algorithm**.
///
/// The implementation shares its skeleton with the heap-free Dijkstra: each
/// round scans all vertices for the cheapest one not yet in the tree, then
/// relaxes its outgoing arcs. The difference is the relaxation itself, which
/// compares the raw arc weight instead of a cumulative path distance.
pub trait MinimumSpanningTree: AdjacencyList {
    /// Grows a minimum spanning tree from `start` and returns its edges
    /// `(parent, child, weight)` in the order the child vertices joined the
    /// tree.
    ///
    /// The graph is treated as undirected only insofar as its arcs allow:
    /// the tree can only grow along arcs in their stored direction, so
    /// callers wanting MST semantics insert their edges undirected.
    /// Connectivity is not checked; on a disconnected graph the result
    /// spans just the component of `start` and has fewer than `n - 1` edges.
    /// ** Panics if `start >= n` **
    fn prim(&self, start: Node) -> Vec<Edge> {
        let n = self.len();
        let mut tree = Vec::with_capacity(n.saturating_sub(1));

        let mut distance = vec![INFINITE_WEIGHT; n];
        let mut parent = vec![INVALID_NODE; n];
        let mut in_tree = self.vertex_bitset_unset();

        distance[start as usize] = 0;
        let mut node = start;

        while !in_tree.get_bit(node) {
            in_tree.set_bit(node);

            // the candidate distance of a neighbor is the raw arc weight
            for (v, w) in self.weighted_neighbors_of(node) {
                if !in_tree.get_bit(v) && distance[v as usize] > w {
                    distance[v as usize] = w;
                    parent[v as usize] = node;
                }
            }

            node = start;
            let mut min_dist = INFINITE_WEIGHT;
            for u in self.vertices_range() {
                if !in_tree.get_bit(u) && distance[u as usize] < min_dist {
                    min_dist = distance[u as usize];
                    node = u;
                }
            }

            if min_dist != INFINITE_WEIGHT {
                tree.push(Edge(parent[node as usize], node, min_dist));
            }
        }

        tree
    }
}

impl<G> MinimumSpanningTree for G where G: AdjacencyList {}
