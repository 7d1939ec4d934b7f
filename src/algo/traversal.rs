/*!
Hook-driven graph traversal.

This module provides the breadth-first and depth-first search skeletons the
rest of the algorithm suite builds on:
- [`TraversalVisitor`]: three callbacks fired at well-defined moments of a
  search, each returning a [`SearchControl`] verdict.
- [`TraversalState`]: the discovered/processed/parent bookkeeping of one
  search, allocated fresh per run and handed back to the caller. The
  visited-sets are parameterized by a [`Set`] implementation (dense bitset
  by default).
- [`Traversal`]: a trait exposing the searches directly as methods on graph
  data structures.

Both searches only reach vertices connected to the start vertex; the
`*_with_state` variants share one state across several runs so that callers
can sweep disconnected graphs root by root (as the strong-connectivity
algorithm does).
*/

use std::collections::VecDeque;

use super::*;

/// Verdict returned by every [`TraversalVisitor`] callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchControl {
    /// Keep searching
    #[default]
    Continue,
    /// Unwind the search cooperatively: no further vertices or edges are
    /// visited. State mutations made up to this point are kept.
    Finish,
}

impl SearchControl {
    fn is_finish(self) -> bool {
        matches!(self, SearchControl::Finish)
    }
}

/// Extension points of the traversal skeletons.
///
/// All callbacks default to doing nothing and continuing, so implementors
/// only override the moments they care about. The unit type `()` serves as
/// the no-op visitor for plain reachability sweeps.
pub trait TraversalVisitor {
    /// Called when the search expands `u`: for BFS when `u` is dequeued
    /// (before its arcs are scanned), for DFS when the search first enters
    /// `u`.
    fn on_vertex_discovered(&mut self, _u: Node) -> SearchControl {
        SearchControl::Continue
    }

    /// Called for arcs scanned from the frontier.
    ///
    /// The two engines deliberately differ in which arcs they report:
    /// - BFS fires for every arc `(u, v)` where `v` is not yet processed,
    ///   including arcs to already-discovered vertices.
    /// - DFS fires for tree arcs (arcs discovering `v`) and for back arcs
    ///   to a discovered-but-unprocessed `v` other than `u`'s parent in the
    ///   search tree. The latter signal a cycle.
    fn on_edge_examined(&mut self, _u: Node, _v: Node) -> SearchControl {
        SearchControl::Continue
    }

    /// Called once all arcs of `u` have been scanned, just before `u` is
    /// marked as processed.
    fn on_vertex_finished(&mut self, _u: Node) -> SearchControl {
        SearchControl::Continue
    }
}

impl TraversalVisitor for () {}

/// Bookkeeping of a single search (or of several searches sharing it):
/// which vertices were discovered, which were fully processed, and the
/// search forest in form of a parent array.
pub struct TraversalState<S = NodeBitSet>
where
    S: Set<Node>,
{
    discovered: S,
    processed: S,
    parent: Vec<Node>,
}

impl<S> TraversalState<S>
where
    S: Set<Node> + FromCapacity,
{
    /// Creates pristine state for a graph of `n` vertices
    pub fn new(n: NumNodes) -> Self {
        Self {
            discovered: S::from_total_used_capacity(n as usize, n as usize),
            processed: S::from_total_used_capacity(n as usize, n as usize),
            parent: vec![INVALID_NODE; n as usize],
        }
    }
}

impl<S> TraversalState<S>
where
    S: Set<Node>,
{
    /// Returns *true* if `u` was discovered by the search
    pub fn did_discover(&self, u: Node) -> bool {
        self.discovered.contains(&u)
    }

    /// Returns *true* if all arcs of `u` have been scanned
    pub fn did_process(&self, u: Node) -> bool {
        self.processed.contains(&u)
    }

    /// Returns the number of discovered vertices
    pub fn number_of_discovered(&self) -> NumNodes {
        self.discovered.len() as NumNodes
    }

    /// Parent of `u` in the search forest.
    /// `None` for roots and for vertices the search never reached.
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        let p = self.parent[u as usize];
        (p != INVALID_NODE).then_some(p)
    }

    /// Length of the parent chain from `u` up to its root, or `None` if `u`
    /// was never discovered. For a BFS this is the hop-distance from the
    /// start vertex.
    pub fn depth_of(&self, u: Node) -> Option<NumNodes> {
        if !self.did_discover(u) {
            return None;
        }

        let mut depth = 0;
        let mut node = u;
        while let Some(p) = self.parent_of(node) {
            depth += 1;
            node = p;
        }

        Some(depth)
    }
}

struct StackFrame {
    node: Node,
    next_arc: NumNodes,
}

/// Spots back arcs by tracking which targets were already announced as
/// discovered before the arc fired.
struct CycleSpotter {
    announced: NodeBitSet,
    found: bool,
}

impl TraversalVisitor for CycleSpotter {
    fn on_vertex_discovered(&mut self, u: Node) -> SearchControl {
        self.announced.set_bit(u);
        SearchControl::Continue
    }

    fn on_edge_examined(&mut self, _u: Node, v: Node) -> SearchControl {
        if self.announced.get_bit(v) {
            self.found = true;
            return SearchControl::Finish;
        }
        SearchControl::Continue
    }
}

/// Provides the traversal skeletons (BFS, DFS, cycle checks) as methods
/// directly on graph data structures.
pub trait Traversal: AdjacencyList + Sized {
    /// Runs a breadth-first search from `start`, firing the visitor's hooks,
    /// and returns the resulting [`TraversalState`].
    ///
    /// Vertices are finished in non-decreasing order of their hop-distance
    /// from `start`; the parent array records the BFS tree.
    /// ** Panics if `start >= n` **
    fn bfs<V>(&self, start: Node, visitor: &mut V) -> TraversalState
    where
        V: TraversalVisitor,
    {
        let mut state = TraversalState::new(self.number_of_nodes());
        self.bfs_with_state(start, visitor, &mut state);
        state
    }

    /// [`Traversal::bfs`] continuing on existing state, so that repeated
    /// calls cover a disconnected graph. `start` must not have been
    /// discovered by an earlier run on the same state.
    fn bfs_with_state<V, S>(&self, start: Node, visitor: &mut V, state: &mut TraversalState<S>)
    where
        V: TraversalVisitor,
        S: Set<Node>,
    {
        debug_assert!(!state.did_discover(start));

        let mut queue = VecDeque::new();
        state.discovered.insert(start);
        queue.push_back(start);

        while let Some(u) = queue.pop_front() {
            state.processed.insert(u);
            if visitor.on_vertex_discovered(u).is_finish() {
                return;
            }

            for v in self.neighbors_of(u) {
                if !state.did_process(v) && visitor.on_edge_examined(u, v).is_finish() {
                    return;
                }

                if !state.did_discover(v) {
                    state.discovered.insert(v);
                    state.parent[v as usize] = u;
                    queue.push_back(v);
                }
            }

            if visitor.on_vertex_finished(u).is_finish() {
                return;
            }
        }
    }

    /// Runs a depth-first search from `start`, firing the visitor's hooks,
    /// and returns the resulting [`TraversalState`].
    ///
    /// The search keeps explicit stack frames instead of recursing, so deep
    /// graphs cannot overflow the call stack.
    /// ** Panics if `start >= n` **
    fn dfs<V>(&self, start: Node, visitor: &mut V) -> TraversalState
    where
        V: TraversalVisitor,
        Self: IndexedAdjacencyList,
    {
        let mut state = TraversalState::new(self.number_of_nodes());
        self.dfs_with_state(start, visitor, &mut state);
        state
    }

    /// [`Traversal::dfs`] continuing on existing state, so that repeated
    /// calls cover a disconnected graph. `start` must not have been
    /// discovered by an earlier run on the same state.
    fn dfs_with_state<V, S>(&self, start: Node, visitor: &mut V, state: &mut TraversalState<S>)
    where
        V: TraversalVisitor,
        S: Set<Node>,
        Self: IndexedAdjacencyList,
    {
        debug_assert!(!state.did_discover(start));

        let mut stack: Vec<StackFrame> = Vec::with_capacity(32);

        state.discovered.insert(start);
        if visitor.on_vertex_discovered(start).is_finish() {
            return;
        }
        stack.push(StackFrame {
            node: start,
            next_arc: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let u = frame.node;
            let mut descend = None;

            while frame.next_arc < self.degree_of(u) {
                let (v, _) = self.ith_weighted_neighbor(u, frame.next_arc);
                frame.next_arc += 1;

                if !state.did_discover(v) {
                    // tree arc: announce it, then enter v
                    state.parent[v as usize] = u;
                    if visitor.on_edge_examined(u, v).is_finish() {
                        return;
                    }

                    state.discovered.insert(v);
                    if visitor.on_vertex_discovered(v).is_finish() {
                        return;
                    }

                    descend = Some(v);
                    break;
                } else if !state.did_process(v) && state.parent_of(u) != Some(v) {
                    // back arc to an ancestor: the reachable subgraph
                    // contains a cycle
                    if visitor.on_edge_examined(u, v).is_finish() {
                        return;
                    }
                }
            }

            if let Some(v) = descend {
                stack.push(StackFrame {
                    node: v,
                    next_arc: 0,
                });
                continue;
            }

            let verdict = visitor.on_vertex_finished(u);
            state.processed.insert(u);
            stack.pop();
            if verdict.is_finish() {
                return;
            }
        }
    }

    /// Returns *true* if the subgraph reachable from `start` contains a
    /// cycle, using the DFS back-arc signal.
    ///
    /// The arc returning to the immediate search-tree parent is not counted
    /// (in an undirected graph that arc is the traversed edge itself), so a
    /// directed two-cycle between parent and child goes unreported.
    /// ** Panics if `start >= n` **
    fn contains_cycle(&self, start: Node) -> bool
    where
        Self: IndexedAdjacencyList,
    {
        let mut spotter = CycleSpotter {
            announced: self.vertex_bitset_unset(),
            found: false,
        };
        self.dfs(start, &mut spotter);
        spotter.found
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
