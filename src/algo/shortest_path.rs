use super::*;

/// Shortest path queries over weighted graphs.
///
/// Single-source distances use **Dijkstra's algorithm** in its heap-free
/// O(n*m) form: each round scans all vertices for the unprocessed one with
/// minimum tentative distance, then relaxes its outgoing arcs. All-pairs
/// distances use **Floyd-Warshall** on a dense distance matrix.
///
/// None of these methods validate their input. Dijkstra requires non-negative
/// arc weights and Floyd-Warshall the absence of negative cycles; violating
/// either yields silently wrong distances.
pub trait ShortestPaths: AdjacencyList {
    /// Returns the distance from `start` to every vertex of the graph.
    /// Unreachable vertices keep the [`INFINITE_WEIGHT`] sentinel.
    ///
    /// Among equidistant candidates the vertex with the lowest index is
    /// expanded first.
    /// ** Panics if `start >= n` **
    fn dijkstra(&self, start: Node) -> Vec<Weight> {
        let mut distance = vec![INFINITE_WEIGHT; self.len()];
        let mut in_tree = self.vertex_bitset_unset();

        distance[start as usize] = 0;
        let mut node = start;

        while !in_tree.get_bit(node) {
            in_tree.set_bit(node);

            // relax the outgoing arcs of the expanded vertex
            let through_node = distance[node as usize];
            for (v, w) in self.weighted_neighbors_of(node) {
                if distance[v as usize] > through_node + w {
                    distance[v as usize] = through_node + w;
                }
            }

            // select the unprocessed vertex with minimum tentative distance;
            // if none is reachable, `node` stays processed and the loop ends
            node = start;
            let mut min_dist = INFINITE_WEIGHT;
            for u in self.vertices_range() {
                if !in_tree.get_bit(u) && distance[u as usize] < min_dist {
                    min_dist = distance[u as usize];
                    node = u;
                }
            }
        }

        distance
    }

    /// Returns the direct-arc distance matrix of the graph: `0` on the
    /// diagonal, the lightest arc weight for `(u, v)` arcs present in the
    /// graph, and [`INFINITE_WEIGHT`] everywhere else.
    fn distance_matrix(&self) -> Vec<Vec<Weight>> {
        let mut matrix = vec![vec![INFINITE_WEIGHT; self.len()]; self.len()];

        for u in self.vertices_range() {
            matrix[u as usize][u as usize] = 0;
        }
        for Edge(u, v, w) in self.edges(false) {
            let entry = &mut matrix[u as usize][v as usize];
            *entry = w.min(*entry);
        }

        matrix
    }

    /// Returns the matrix of shortest distances between all pairs of
    /// vertices, i.e. [`ShortestPaths::distance_matrix`] run through
    /// [`floyd_warshall`].
    fn all_pairs_shortest_paths(&self) -> Vec<Vec<Weight>> {
        let mut matrix = self.distance_matrix();
        floyd_warshall(&mut matrix);
        matrix
    }
}

impl<G> ShortestPaths for G where G: AdjacencyList {}

/// Floyd-Warshall's algorithm: updates the given direct-arc distance matrix
/// in place so that afterwards `matrix[i][j]` holds the shortest distance
/// from `i` to `j`.
///
/// The matrix must be square with `0` on the diagonal and [`INFINITE_WEIGHT`]
/// for missing arcs (the layout produced by
/// [`ShortestPaths::distance_matrix`]). Negative weights are supported; in
/// the presence of a negative cycle the result is meaningless.
pub fn floyd_warshall(matrix: &mut [Vec<Weight>]) {
    let n = matrix.len();

    for k in 0..n {
        for i in 0..n {
            // the sentinel must never enter the addition
            if matrix[i][k] == INFINITE_WEIGHT {
                continue;
            }
            for j in 0..n {
                if matrix[k][j] != INFINITE_WEIGHT {
                    let through_k = matrix[i][k] + matrix[k][j];
                    if through_k < matrix[i][j] {
                        matrix[i][j] = through_k;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn dijkstra_cycle_with_chord() {
        // undirected 4-cycle of unit weight plus a heavy chord that never
        // pays off
        let graph = AdjArray::from_undirected_edges(
            4,
            [(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1), (0, 2, 5)],
        );

        assert_eq!(graph.dijkstra(0), vec![0, 1, 2, 1]);
    }

    #[test]
    fn dijkstra_prefers_lighter_detours() {
        let graph = AdjArray::from_edges(4, [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1)]);

        assert_eq!(graph.dijkstra(0), vec![0, 3, 1, 4]);
    }

    #[test]
    fn dijkstra_unreachable_vertices_stay_infinite() {
        let graph = AdjArray::from_edges(5, [(0, 1, 2), (1, 2, 2), (3, 4, 1)]);

        let distance = graph.dijkstra(0);
        assert_eq!(distance[..3], [0, 2, 4]);
        assert_eq!(distance[3], INFINITE_WEIGHT);
        assert_eq!(distance[4], INFINITE_WEIGHT);

        // arcs out of the unreached component point nowhere relevant
        let distance = graph.dijkstra(3);
        assert_eq!(distance, vec![INFINITE_WEIGHT, INFINITE_WEIGHT, INFINITE_WEIGHT, 0, 1]);
    }

    #[test]
    fn dijkstra_takes_the_lightest_parallel_arc() {
        let graph = AdjArray::from_edges(2, [(0, 1, 7), (0, 1, 3)]);
        assert_eq!(graph.dijkstra(0), vec![0, 3]);
    }

    #[test]
    fn dijkstra_reduces_to_bfs_on_unit_weights() {
        let rng = &mut Pcg64Mcg::seed_from_u64(8);

        for n in [10 as NumNodes, 30, 60] {
            let edges = (0..(n * 3))
                .map(|_| Edge::unweighted(rng.random_range(0..n), rng.random_range(0..n)))
                .collect_vec();
            let graph = AdjArray::from_edges(n, edges);

            let distance = graph.dijkstra(0);
            let state = graph.bfs(0, &mut ());

            for u in graph.vertices_range() {
                match state.depth_of(u) {
                    Some(d) => assert_eq!(distance[u as usize], d as Weight),
                    None => assert_eq!(distance[u as usize], INFINITE_WEIGHT),
                }
            }
        }
    }

    #[test]
    fn distance_matrix_layout() {
        let graph = AdjArray::from_edges(3, [(0, 1, 4), (0, 1, 2), (1, 2, -3)]);

        let matrix = graph.distance_matrix();
        assert_eq!(
            matrix,
            vec![
                vec![0, 2, INFINITE_WEIGHT],
                vec![INFINITE_WEIGHT, 0, -3],
                vec![INFINITE_WEIGHT, INFINITE_WEIGHT, 0],
            ]
        );
    }

    #[test]
    fn floyd_warshall_handles_negative_weights() {
        // the direct arc (0, 1) is beaten by the detour through 2
        let graph = AdjArray::from_edges(4, [(0, 1, 4), (0, 2, 2), (2, 1, -1), (1, 3, 3)]);

        let matrix = graph.all_pairs_shortest_paths();
        assert_eq!(matrix[0], vec![0, 1, 2, 4]);
        assert_eq!(matrix[2], vec![INFINITE_WEIGHT, -1, 0, 2]);
        assert_eq!(matrix[3][0], INFINITE_WEIGHT);
    }

    #[test]
    fn floyd_warshall_matches_dijkstra() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);

        for n in [8 as NumNodes, 20, 40] {
            let edges = (0..(n * 4))
                .map(|_| {
                    Edge(
                        rng.random_range(0..n),
                        rng.random_range(0..n),
                        rng.random_range(1..50),
                    )
                })
                .collect_vec();
            let graph = AdjArray::from_edges(n, edges);

            let matrix = graph.all_pairs_shortest_paths();
            for u in graph.vertices_range() {
                assert_eq!(matrix[u as usize], graph.dijkstra(u), "row {u}");
            }
        }
    }
}
