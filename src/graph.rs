/*!
# Adjacency-List Graph

An undirected graph built incrementally from vertex and edge insertions.

External node ids are arbitrary `u32` labels; they do not need to be contiguous
or zero-based. Internally, each inserted id is assigned the next dense [`Slot`]
and `position` maps ids to slots, so all per-node storage stays a flat vector.

Rejected insertions (duplicate vertex, missing edge endpoint) are **non-fatal**:
they mutate nothing, return an explicit [`InsertError`], and emit an advisory
`tracing` event. There is no deletion; once built, a graph only grows.
*/

use fxhash::FxHashMap;
use itertools::Itertools;
use thiserror::Error;
use tracing::debug;

use crate::{edge::Edge, node::*};

/// A rejected (and thereby skipped) insertion into an [`AdjGraph`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InsertError {
    /// The vertex id is already present in the graph
    #[error("vertex {0} is already present in the graph")]
    DuplicateVertex(Node),

    /// An edge endpoint was never inserted as a vertex
    #[error("endpoint {0} is not a vertex of the graph")]
    MissingEndpoint(Node),
}

/// An undirected graph stored as per-slot adjacency lists with an
/// id-to-slot indirection table.
///
/// Neighbor lists store external ids in insertion order. Edges are kept
/// symmetrically; neither self-loops nor parallel edges are rejected, so
/// duplicate insertions produce duplicate adjacency entries.
#[derive(Debug, Clone, Default)]
pub struct AdjGraph {
    adjacency: Vec<Vec<Node>>,
    position: FxHashMap<Node, Slot>,
    num_edges: NumEdges,
}

impl AdjGraph {
    /// Creates an empty graph with no vertices and no edges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from an iterator of vertex ids followed by an iterator
    /// of edges. Rejected insertions are skipped (they are non-fatal by
    /// contract), so duplicate ids and dangling edges are silently dropped.
    ///
    /// # Examples
    /// ```
    /// use gsearch::prelude::*;
    ///
    /// let g = AdjGraph::from_edges(0..4, [(0, 1), (1, 2), (2, 3)]);
    /// assert_eq!(g.number_of_nodes(), 4);
    /// assert_eq!(g.number_of_edges(), 3);
    /// ```
    pub fn from_edges(
        vertices: impl IntoIterator<Item = Node>,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Self {
        let mut graph = Self::new();
        graph.insert_vertices(vertices);
        graph.insert_edges(edges);
        graph
    }

    /// Inserts the vertex `v` into the graph.
    ///
    /// If `v` is already present, nothing is mutated and
    /// [`InsertError::DuplicateVertex`] is returned.
    pub fn insert_vertex(&mut self, v: Node) -> Result<(), InsertError> {
        if self.position.contains_key(&v) {
            debug!(vertex = v, "skipped insertion of duplicate vertex");
            return Err(InsertError::DuplicateVertex(v));
        }

        self.position.insert(v, self.adjacency.len() as Slot);
        self.adjacency.push(Vec::new());

        Ok(())
    }

    /// Inserts the undirected edge `{u, v}` into the graph, appending `v` to
    /// `u`'s neighbor list and `u` to `v`'s.
    ///
    /// If either endpoint is absent, nothing is mutated and
    /// [`InsertError::MissingEndpoint`] names the first missing one.
    ///
    /// Self-loops and parallel edges are **not** rejected: a self-loop stores
    /// its id twice in the same list, and repeating an edge duplicates both
    /// adjacency entries. The search algorithm tolerates both via its visited
    /// marker.
    pub fn insert_edge(&mut self, u: Node, v: Node) -> Result<(), InsertError> {
        let (pu, pv) = match (self.slot_of(u), self.slot_of(v)) {
            (Some(pu), Some(pv)) => (pu, pv),
            (missing_u, _) => {
                let missing = if missing_u.is_none() { u } else { v };
                debug!(
                    edge = %Edge(u, v),
                    missing,
                    "skipped insertion of edge with missing endpoint"
                );
                return Err(InsertError::MissingEndpoint(missing));
            }
        };

        self.adjacency[pu as usize].push(v);
        self.adjacency[pv as usize].push(u);
        self.num_edges += 1;

        Ok(())
    }

    /// Inserts all vertices in the collection, skipping rejected ones.
    pub fn insert_vertices(&mut self, vertices: impl IntoIterator<Item = Node>) {
        for v in vertices {
            let _ = self.insert_vertex(v);
        }
    }

    /// Inserts all edges in the collection, skipping rejected ones.
    pub fn insert_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for edge in edges {
            let Edge(u, v) = edge.into();
            let _ = self.insert_edge(u, v);
        }
    }

    /// Returns the number of vertices of the graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.adjacency.len() as NumNodes
    }

    /// Returns the number of vertices as usize
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of edges of the graph. Self-loops and parallel
    /// edges each count once per successful insertion.
    pub fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    /// Returns *true* if `v` is a vertex of the graph
    pub fn contains_vertex(&self, v: Node) -> bool {
        self.position.contains_key(&v)
    }

    /// Returns the dense slot assigned to `v`, or `None` if `v` was never
    /// inserted. Slots form the contiguous range `0..number_of_nodes` in
    /// vertex-insertion order.
    pub fn slot_of(&self, v: Node) -> Option<Slot> {
        self.position.get(&v).copied()
    }

    /// Looks up the slot of a vertex that must exist.
    /// ** Panics if `v` is not a vertex of the graph **
    pub(crate) fn require_slot(&self, v: Node) -> Slot {
        match self.slot_of(v) {
            Some(slot) => slot,
            None => panic!("node {v} is not a vertex of the graph"),
        }
    }

    /// Returns an iterator over the neighbors of `v` in edge-insertion order.
    /// Duplicate entries appear as often as they were inserted.
    /// ** Panics if `v` is not a vertex of the graph **
    pub fn neighbors_of(&self, v: Node) -> impl Iterator<Item = Node> + '_ {
        self.adjacency[self.require_slot(v) as usize].iter().copied()
    }

    /// Returns the number of adjacency entries of `v`, counting duplicates.
    /// ** Panics if `v` is not a vertex of the graph **
    pub fn degree_of(&self, v: Node) -> NumNodes {
        self.adjacency[self.require_slot(v) as usize].len() as NumNodes
    }

    /// Returns an iterator over all vertex ids in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.position.keys().copied()
    }

    /// Returns all vertex ids in increasing order.
    pub fn ordered_vertices(&self) -> impl Iterator<Item = Node> {
        self.vertices().sorted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_vertex_is_a_nop() {
        let mut graph = AdjGraph::new();

        assert_eq!(graph.insert_vertex(5), Ok(()));
        assert_eq!(graph.insert_vertex(5), Err(InsertError::DuplicateVertex(5)));

        assert_eq!(graph.number_of_nodes(), 1);
        assert_eq!(graph.number_of_edges(), 0);
        assert_eq!(graph.neighbors_of(5).count(), 0);
    }

    #[test]
    fn duplicate_vertex_preserves_adjacency() {
        let mut graph = AdjGraph::from_edges([1, 2], [(1, 2)]);
        let slot = graph.slot_of(1).unwrap();

        assert_eq!(graph.insert_vertex(1), Err(InsertError::DuplicateVertex(1)));

        assert_eq!(graph.slot_of(1), Some(slot));
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![2]);
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn missing_endpoint_is_a_nop() {
        let mut graph = AdjGraph::new();
        graph.insert_vertices([1]);

        assert_eq!(graph.insert_edge(1, 99), Err(InsertError::MissingEndpoint(99)));
        assert_eq!(graph.insert_edge(99, 1), Err(InsertError::MissingEndpoint(99)));

        assert_eq!(graph.number_of_edges(), 0);
        assert_eq!(graph.neighbors_of(1).count(), 0);
    }

    #[test]
    fn edges_are_symmetric() {
        let graph = AdjGraph::from_edges(0..3, [(0, 1), (1, 2)]);

        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![1]);
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![0, 2]);
        assert_eq!(graph.neighbors_of(2).collect_vec(), vec![1]);
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn parallel_edges_duplicate_adjacency_entries() {
        let mut graph = AdjGraph::from_edges(0..2, [(0, 1)]);
        assert_eq!(graph.insert_edge(0, 1), Ok(()));

        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![1, 1]);
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![0, 0]);
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn self_loop_is_stored_twice() {
        let mut graph = AdjGraph::new();
        graph.insert_vertices([7]);
        assert_eq!(graph.insert_edge(7, 7), Ok(()));

        assert_eq!(graph.neighbors_of(7).collect_vec(), vec![7, 7]);
        assert_eq!(graph.degree_of(7), 2);
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn non_contiguous_ids() {
        let graph = AdjGraph::from_edges([10, 20, 30], [(10, 20), (20, 30)]);

        assert_eq!(graph.number_of_nodes(), 3);
        assert!(graph.contains_vertex(20));
        assert!(!graph.contains_vertex(0));
        assert_eq!(graph.neighbors_of(20).collect_vec(), vec![10, 30]);
        assert_eq!(graph.ordered_vertices().collect_vec(), vec![10, 20, 30]);
    }

    #[test]
    fn slots_are_dense_and_in_insertion_order() {
        let mut graph = AdjGraph::new();
        graph.insert_vertices([42, 7, 13]);

        assert_eq!(graph.slot_of(42), Some(0));
        assert_eq!(graph.slot_of(7), Some(1));
        assert_eq!(graph.slot_of(13), Some(2));
        assert_eq!(graph.slot_of(0), None);
    }

    #[test]
    fn lenient_bulk_insertion_skips_rejections() {
        let graph = AdjGraph::from_edges([1, 2, 2], [(1, 2), (1, 3), (2, 1)]);

        assert_eq!(graph.number_of_nodes(), 2);
        // (1, 3) is dangling and dropped; (2, 1) is a tolerated parallel edge
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    #[should_panic(expected = "is not a vertex")]
    fn neighbors_of_unknown_vertex_panics() {
        AdjGraph::new().neighbors_of(3).count();
    }
}
