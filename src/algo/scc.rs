use fxhash::FxHashMap;
use itertools::Itertools;

use super::*;

/// First pass of Kosaraju's algorithm: remember the order in which vertices
/// finish.
struct FinishOrder {
    order: Vec<Node>,
}

impl TraversalVisitor for FinishOrder {
    fn on_vertex_finished(&mut self, u: Node) -> SearchControl {
        self.order.push(u);
        SearchControl::Continue
    }
}

/// Second pass of Kosaraju's algorithm: every vertex entered from the current
/// root belongs to the root's component.
struct LeaderAssignment<'a> {
    leader_of: &'a mut [Node],
    current_root: Node,
}

impl TraversalVisitor for LeaderAssignment<'_> {
    fn on_vertex_discovered(&mut self, u: Node) -> SearchControl {
        self.leader_of[u as usize] = self.current_root;
        SearchControl::Continue
    }
}

/// Strong connectivity queries for directed graphs.
///
/// All methods are implementations of **Kosaraju's algorithm**: a first DFS
/// sweep over the reverse graph records the order in which vertices finish;
/// a second sweep over the original graph, rooting searches in decreasing
/// finish order, then discovers exactly one strongly connected component per
/// root. The traversal engine's edge hook is unused by both sweeps.
pub trait StrongConnectivity: IndexedAdjacencyList + GraphFromScratch {
    /// Returns for every vertex the *leader* of its strongly connected
    /// component. Two vertices share a leader if and only if they are
    /// mutually reachable; every leader is a member of its own component.
    fn kosaraju(&self) -> Vec<Node> {
        let n = self.number_of_nodes();

        // First sweep: finish order on the reverse graph, roots tried in
        // decreasing vertex order
        let reverse = self.reversed();
        let mut finish = FinishOrder {
            order: Vec::with_capacity(n as usize),
        };
        let mut state = TraversalState::<NodeBitSet>::new(n);
        for u in self.vertices_range().rev() {
            if !state.did_discover(u) {
                reverse.dfs_with_state(u, &mut finish, &mut state);
            }
        }

        // Second sweep: original orientation, roots in decreasing finish
        // order; each search tree is one component
        let mut leader_of = vec![INVALID_NODE; n as usize];
        let mut state = TraversalState::<NodeBitSet>::new(n);
        for &root in finish.order.iter().rev() {
            if !state.did_discover(root) {
                let mut assign = LeaderAssignment {
                    leader_of: &mut leader_of,
                    current_root: root,
                };
                self.dfs_with_state(root, &mut assign, &mut state);
            }
        }

        leader_of
    }

    /// Returns the strongly connected components as vertex lists, in
    /// unspecified order. Use [`sort_components`] for a canonical ordering.
    fn strongly_connected_components(&self) -> Vec<Vec<Node>> {
        let mut components: FxHashMap<Node, Vec<Node>> = FxHashMap::default();
        for (u, leader) in self.kosaraju().into_iter().enumerate() {
            components.entry(leader).or_default().push(u as Node);
        }
        components.into_values().collect()
    }

    /// Returns the number of strongly connected components
    fn number_of_strongly_connected_components(&self) -> NumNodes {
        self.kosaraju().into_iter().unique().count() as NumNodes
    }
}

impl<G> StrongConnectivity for G where G: IndexedAdjacencyList + GraphFromScratch {}

/// Sorts the nodes in each component increasingly and then the components
/// themselves lexicographically.
pub fn sort_components(mut components: Vec<Vec<Node>>) -> Vec<Vec<Node>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_by(|a, b| a[0].cmp(&b[0]));
    components
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_cycles_with_a_bridge() {
        // two directed triangles, one arc from the first into the second
        let graph = AdjArray::from_edges(
            6,
            [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (2, 3)],
        );

        let leader_of = graph.kosaraju();

        assert_eq!(leader_of[0], leader_of[1]);
        assert_eq!(leader_of[1], leader_of[2]);
        assert_eq!(leader_of[3], leader_of[4]);
        assert_eq!(leader_of[4], leader_of[5]);
        assert_ne!(leader_of[0], leader_of[3]);

        assert_eq!(graph.number_of_strongly_connected_components(), 2);
    }

    #[test]
    fn leaders_are_members_of_their_component() {
        let graph = AdjArray::from_edges(
            5,
            [(0, 1), (1, 0), (1, 2), (2, 3), (3, 4), (4, 2)],
        );

        let leader_of = graph.kosaraju();
        for u in graph.vertices_range() {
            let leader = leader_of[u as usize];
            assert_eq!(leader_of[leader as usize], leader);
        }
    }

    #[test]
    fn scc() {
        let graph = AdjArray::from_edges(
            8,
            [
                (0, 1),
                (1, 2),
                (1, 4),
                (1, 5),
                (2, 6),
                (2, 3),
                (3, 2),
                (3, 7),
                (4, 0),
                (4, 5),
                (5, 6),
                (6, 5),
                (7, 3),
                (7, 6),
            ],
        );

        let sccs = sort_components(graph.strongly_connected_components());
        assert_eq!(sccs.len(), 3);
        assert_eq!(sccs[0], [0, 1, 4]);
        assert_eq!(sccs[1], [2, 3, 7]);
        assert_eq!(sccs[2], [5, 6]);
    }

    #[test]
    fn scc_tree() {
        let graph = AdjArray::from_edges(7, [(0, 1), (1, 2), (1, 3), (1, 4), (3, 5), (3, 6)]);

        // in a directed tree each vertex is a strongly connected component
        let sccs = sort_components(graph.strongly_connected_components());
        assert_eq!(sccs.len(), 7);
        for (i, scc) in sccs.iter().enumerate() {
            assert_eq!(scc, &[i as Node]);
        }
    }

    #[test]
    fn self_loops_and_isolated_vertices() {
        // {0,1} is a pair, 2 has a self-loop, 3 is isolated
        let graph = AdjArray::from_edges(4, [(0, 1), (1, 0), (2, 2)]);

        let sccs = sort_components(graph.strongly_connected_components());
        assert_eq!(sccs.len(), 3);
        assert_eq!(sccs[0], [0, 1]);
        assert_eq!(sccs[1], [2]);
        assert_eq!(sccs[2], [3]);
    }

    #[test]
    fn scc_long_cycle() {
        // assert that we can deal with very deep searches
        let n: NumNodes = 10_000;
        let mut graph = AdjArray::new(n);
        for u in 0..n {
            graph.add_edge(u, (u + 1) % n, 1);
        }

        let leader_of = graph.kosaraju();
        assert!(leader_of.iter().all(|&l| l == leader_of[0]));
        assert_eq!(graph.number_of_strongly_connected_components(), 1);
    }
}
