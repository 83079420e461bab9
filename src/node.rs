/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
This saves space over `usize`/`u64` and lets us manipulate node values directly.

Node ids are **external labels**: any `u32` is a valid id, and ids are neither
required to be contiguous nor to start at `0`. The graph maps each id to an
internal [`Slot`] that indexes its dense adjacency storage.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX`
pub type Node = u32;

/// There can be at most `2^32` nodes in a graph!
pub type NumNodes = Node;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Internal dense index into the adjacency storage.
///
/// Slots are assigned in vertex-insertion order and always form the
/// contiguous range `0..number_of_nodes`, in contrast to external ids.
pub type Slot = u32;
