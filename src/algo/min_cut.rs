use rand::{seq::SliceRandom, Rng};

use super::*;

/// A single run of **Karger's graph contraction** over the given edge list:
/// returns the size of *a* cut of the `n`-vertex multigraph.
///
/// The edges are shuffled uniformly with the caller's generator, then
/// contracted in that order (self-loops skipped) until two vertex classes
/// remain; the returned value is the number of edges crossing between the
/// two classes. One run finds a true minimum cut with probability at least
/// `1 / binom(n, 2)`, so callers repeat the run (order `n^2` times), each
/// time on the same edge list, and keep the minimum.
///
/// Parallel edges are meaningful input and must not be deduplicated
/// beforehand. The edge list is only permuted, never shrunk, so it can be
/// reused across runs.
/// ** Panics if `n < 2`, if an endpoint is `>= n`, or if the graph is too
/// sparse to contract to two classes (e.g. disconnected) **
pub fn graph_contraction<R>(edges: &mut [Edge], n: NumNodes, rng: &mut R) -> NumEdges
where
    R: Rng + ?Sized,
{
    assert!(n >= 2);

    edges.shuffle(rng);

    // vertex -> representative class; contraction relabels one class
    // wholesale, so lookups never chase chains
    let mut representative = (0..n).collect::<Vec<Node>>();

    let mut remaining = n;
    let mut next_edge = 0;
    while remaining > 2 {
        let Edge(x, y, _) = edges[next_edge];
        next_edge += 1;

        let class_x = representative[x as usize];
        let class_y = representative[y as usize];
        if class_x == class_y {
            // contracted into a self-loop earlier, skip
            continue;
        }

        for class in representative.iter_mut() {
            if *class == class_x {
                *class = class_y;
            }
        }
        remaining -= 1;
    }

    edges
        .iter()
        .filter(|e| representative[e.0 as usize] != representative[e.1 as usize])
        .count() as NumEdges
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    /// Minimum observed cut over `runs` contractions of the same edge list
    fn best_of(edges: &mut [Edge], n: NumNodes, runs: usize, rng: &mut impl Rng) -> NumEdges {
        (0..runs)
            .map(|_| graph_contraction(edges, n, rng))
            .min()
            .unwrap()
    }

    #[test]
    fn two_vertices_need_no_contraction() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        // whatever the shuffle, every parallel edge crosses the cut
        let mut edges = vec![Edge::unweighted(0, 1); 5];
        assert_eq!(graph_contraction(&mut edges, 2, rng), 5);
    }

    #[test]
    fn same_seed_same_cut() {
        let edges = (0..8)
            .map(|u| Edge::unweighted(u, (u + 1) % 8))
            .collect_vec();

        let cut_with_seed = |seed| {
            let rng = &mut Pcg64Mcg::seed_from_u64(seed);
            graph_contraction(&mut edges.clone(), 8, rng)
        };

        assert_eq!(cut_with_seed(7), cut_with_seed(7));
    }

    #[test]
    fn any_run_yields_a_valid_cut() {
        // two triangles joined by a single bridge: every cut has >= 1 edge,
        // and no contraction cut can exceed the total edge count
        let mut edges = vec![
            Edge::unweighted(0, 1),
            Edge::unweighted(1, 2),
            Edge::unweighted(2, 0),
            Edge::unweighted(3, 4),
            Edge::unweighted(4, 5),
            Edge::unweighted(5, 3),
            Edge::unweighted(2, 3),
        ];

        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        for _ in 0..50 {
            let cut = graph_contraction(&mut edges, 6, rng);
            assert!((1..=7).contains(&cut));
        }
    }

    #[test]
    fn repeated_runs_find_the_bridge() {
        // the bridge (2, 3) is the unique minimum cut
        let mut edges = vec![
            Edge::unweighted(0, 1),
            Edge::unweighted(1, 2),
            Edge::unweighted(2, 0),
            Edge::unweighted(3, 4),
            Edge::unweighted(4, 5),
            Edge::unweighted(5, 3),
            Edge::unweighted(2, 3),
        ];

        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        assert_eq!(best_of(&mut edges, 6, 100, rng), 1);
    }

    #[test]
    fn repeated_runs_find_the_cycle_cut() {
        // a cycle's minimum cut is any two of its edges
        let n: NumNodes = 10;
        let mut edges = (0..n)
            .map(|u| Edge::unweighted(u, (u + 1) % n))
            .collect_vec();

        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        assert_eq!(best_of(&mut edges, n, (n * n) as usize, rng), 2);
    }

    #[test]
    fn parallel_edges_raise_the_cut() {
        // two cliques of four, connected by a tripled edge: min cut 3
        let mut edges = Vec::new();
        for group in [[0, 1, 2, 3], [4, 5, 6, 7]] {
            for (i, &u) in group.iter().enumerate() {
                for &v in &group[(i + 1)..] {
                    edges.push(Edge::unweighted(u, v));
                }
            }
        }
        edges.extend([Edge::unweighted(3, 4); 3]);

        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        assert_eq!(best_of(&mut edges, 8, 200, rng), 3);
    }
}
