/*!
# Generic Graph Search

A single traversal algorithm, written once over the [`Frontier`] capability.
Instantiating it with a [`Queue`] yields **BFS**, with a [`Stack`] **DFS**;
the algorithm itself never branches on which discipline it was given.

The search reports the **visitation rank** of the target: the 1-indexed
position at which the target is removed from the frontier, in the traversal's
own visitation order. This is *not* shortest-path distance; for BFS it counts
every vertex dequeued up to and including the target, which coincides with
hop count plus one only in path-shaped graphs.
*/

use std::marker::PhantomData;

use bitvec::prelude::*;

use crate::{
    frontier::{Frontier, Queue, Stack},
    graph::AdjGraph,
    node::Node,
};

/// Sentinel returned by [`Search::search`] when the target is not reachable
/// from the start vertex.
pub const NOT_FOUND: i64 = -1;

/// A graph search parameterized by its frontier discipline.
///
/// Borrows the graph for its lifetime; the graph is read-only during a search.
/// Each call to [`Search::search`] owns a fresh frontier and visited marker,
/// so repeated calls on the same instance share no state.
pub struct Search<'a, F> {
    graph: &'a AdjGraph,
    _frontier: PhantomData<F>,
}

/// Breadth-first search: a [`Search`] driven by a FIFO [`Queue`] frontier.
pub type Bfs<'a> = Search<'a, Queue<Node>>;

/// Depth-first search: a [`Search`] driven by a LIFO [`Stack`] frontier.
pub type Dfs<'a> = Search<'a, Stack<Node>>;

impl<'a, F> Search<'a, F>
where
    F: Frontier<Node>,
{
    /// Creates a search over the given graph.
    pub fn new(graph: &'a AdjGraph) -> Self {
        Self {
            graph,
            _frontier: PhantomData,
        }
    }

    /// Traverses the graph from `start` until `target` is removed from the
    /// frontier and returns its 1-indexed visitation rank, or [`NOT_FOUND`]
    /// once the whole component containing `start` is exhausted.
    ///
    /// A vertex is marked visited the moment it is *added* to the frontier,
    /// so each vertex enters the frontier at most once even when the
    /// adjacency lists contain duplicate entries. Visited markers are indexed
    /// by dense slot, hence ids do not need to be contiguous or zero-based.
    ///
    /// If `start == target`, the start vertex is still added and immediately
    /// removed, yielding rank `1`. A `target` that is not a vertex of the
    /// graph is simply never found.
    ///
    /// ** Panics if `start` is not a vertex of the graph **
    ///
    /// # Examples
    /// ```
    /// use gsearch::prelude::*;
    ///
    /// let g = AdjGraph::from_edges(0..4, [(0, 1), (1, 2), (2, 3)]);
    /// assert_eq!(g.bfs().search(0, 3), 4);
    /// assert_eq!(g.dfs().search(0, 0), 1);
    /// ```
    pub fn search(&self, start: Node, target: Node) -> i64 {
        let mut visited = bitvec![0; self.graph.len()];
        let mut frontier = F::new();

        visited.set(self.graph.require_slot(start) as usize, true);
        frontier.add(start);

        let mut rank: i64 = 0;
        while !frontier.is_empty() {
            let u = frontier.remove();
            rank += 1;

            if u == target {
                return rank;
            }

            for w in self.graph.neighbors_of(u) {
                // stored neighbors were validated at edge insertion
                let slot = self.graph.require_slot(w) as usize;
                if !visited[slot] {
                    visited.set(slot, true);
                    frontier.add(w);
                }
            }
        }

        NOT_FOUND
    }
}

impl AdjGraph {
    /// Returns a breadth-first [`Search`] over this graph.
    pub fn bfs(&self) -> Bfs<'_> {
        Bfs::new(self)
    }

    /// Returns a depth-first [`Search`] over this graph.
    pub fn dfs(&self) -> Dfs<'_> {
        Dfs::new(self)
    }
}
