/*!
`wgraphs` is a graph data structure & algorithms library designed for graphs that are
- **w**ord-labelled : Vertices are non-empty alphanumeric identifiers such as `"a"` or `"v17"`
- **w**eighted : Every edge carries a non-negative integer weight
- **directed** : This one does not fit the naming scheme (but every edge has an orientation)

# Representation

We represent **vertices** as owned strings, validated on insertion: an identifier is accepted
iff it is non-empty and consists of ASCII alphanumeric characters only. Identifiers are
case-sensitive, so `"a"` and `"A"` name different vertices.

The graph itself is an ordered map from each vertex to its ordered neighborhood, mapping every
successor to the weight of the connecting edge. Since the edges `(u, v)` and `(v, u)` are
distinct, all degree and adjacency queries distinguish the outgoing from the incoming direction.

Three shapes are unrepresentable by construction and rejected on insertion:
- **self-loops**: no edge may connect a vertex to itself,
- **duplicate edges**: at most one edge per ordered vertex pair,
- **negative weights**: ruled out entirely by the unsigned weight type.

# Design

All algorithms are provided as lazy iterator structs over borrowed vertex identifiers that can
be advanced, inspected, and abandoned mid-run. Alternatively, the commonly used functionalities
are implemented via traits on the graph itself, making them usable as plain method calls
(`graph.bfs(start)`, `graph.dijkstra(source)`, ...) that validate their arguments and return
owned results.

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes definitions for vertices and weights, the error type, basic graph
  operation traits, and the graph representation itself,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS/DFS,
  shortest paths via Dijkstra, topological ordering, and tree/connectivity checks,
- [`io`] includes a writer that renders a graph as its adjacency listing.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

# When to use
You should only use this library if the following apply:
- Your vertices are naturally named by short identifiers
- You want to work in *Rust*
- You require only basic functionality for weighted directed graphs.

In all other cases, it might make sense for you to check out
[petgraph](https://crates.io/crates/petgraph) who provide a more extensive library for general
graphs in *Rust*.
*/

pub mod algo;
pub mod error;
pub mod graph;
pub mod io;
pub mod ops;
#[cfg(test)]
pub(crate) mod testing;
pub mod vertex;

/// `wgraphs::prelude` includes definitions for vertices and weights, the error type, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{error::*, graph::*, ops::*, vertex::*};
}
