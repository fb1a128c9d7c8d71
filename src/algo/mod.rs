/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the storage in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversals, topological ordering, shortest paths, and connectivity checks.
Where possible, algorithms are provided as **iterators**, making it easy to consume results lazily;
the trait methods on top of them validate their inputs and materialize owned results.
*/

mod connectivity;
mod dijkstra;
mod traversal;

use crate::prelude::*;

pub use connectivity::*;
pub use dijkstra::*;
pub use traversal::*;
