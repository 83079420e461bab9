/*!
`gsearch` is a small educational graph-search library built around one idea:
**BFS and DFS are the same algorithm**, differing only in the discipline of the
container holding pending work.

# Representation

We represent **nodes** as `u32` labels. Ids may be arbitrary (non-contiguous,
non-zero-based); the graph maps each id to an internal dense slot via an
indirection table, so adjacency storage stays a flat vector. **Edges** are
undirected and stored symmetrically in per-node neighbor lists. Self-loops and
parallel edges are kept verbatim; the search tolerates them through its
visited marker.

# Design

There are three pieces:
- [`frontier`] defines the [`Frontier`](frontier::Frontier) capability
  (`add` / `remove` / `is_empty`) with a LIFO [`Stack`](frontier::Stack) and a
  FIFO [`Queue`](frontier::Queue) implementation,
- [`graph`] provides the adjacency-list [`AdjGraph`](graph::AdjGraph) with
  explicit [`InsertError`](graph::InsertError) results for rejected
  insertions,
- [`search`] implements the generic traversal once over the frontier
  capability; [`Bfs`](search::Bfs) and [`Dfs`](search::Dfs) are type aliases
  selecting the concrete frontier.

`search(start, target)` returns the target's **visitation rank** (the
1-indexed position at which it leaves the frontier), not its distance, and
`-1` when the target is unreachable.

# Usage

```
use gsearch::prelude::*;

let mut g = AdjGraph::new();
g.insert_vertices(0..4);
g.insert_edges([(0, 1), (1, 2), (2, 3)]);

assert_eq!(g.bfs().search(0, 3), 4);
assert_eq!(g.dfs().search(0, 0), 1);
assert_eq!(g.bfs().search(3, 3), 1);
```

In most use-cases, `use gsearch::prelude::*;` suffices for your needs.
*/

pub mod edge;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod search;

/// `gsearch::prelude` includes definitions for nodes and edges, the frontier
/// abstraction, the graph representation, and the search algorithms.
pub mod prelude {
    pub use super::{
        edge::Edge,
        frontier::{Frontier, Queue, Stack},
        graph::{AdjGraph, InsertError},
        node::{Node, NumEdges, NumNodes, Slot},
        search::{Bfs, Dfs, Search, NOT_FOUND},
    };
}
