/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- Generic traversal iterators (BFS, DFS) over borrowed vertex identifiers.
- Topological ordering for directed acyclic graphs via Kahn's algorithm.
- A high-level `Traversal` trait that exposes the validated, materializing
  variants of these algorithms directly as methods on graph data structures.

The iterators are lazy and mark vertices as visited at discovery time, i.e.
when they enter the frontier, so no vertex is ever yielded twice. Neighbors
are expanded in ascending identifier order, which makes every traversal
deterministic.
*/

use std::collections::VecDeque;

use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;

use super::*;

/// Abstraction for the traversal frontier data structure.
///
/// A `VertexSequencer` is responsible for storing the "to be visited"
/// vertices during a traversal. Different implementations determine
/// the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait VertexSequencer<T> {
    /// Creates a new sequencer initialized with a single vertex.
    fn init(u: T) -> Self;

    /// Pushes a vertex into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next vertex from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> VertexSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from([u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> VertexSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of vertices to visit and a
/// set of discovered vertices. Neighbors are pushed in ascending identifier
/// order, so a stack frontier processes the largest-labelled undiscovered
/// neighbor first while a queue frontier preserves the ascending order per
/// level.
pub struct TraversalSearch<'a, G, S>
where
    G: WeightedAdjacency,
    S: VertexSequencer<&'a Vertex>,
{
    graph: &'a G,
    visited: FxHashSet<&'a str>,
    sequencer: S,
}

/// A BFS traversal iterator over the graph, visiting vertices in
/// breadth-first order from a given starting vertex.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<&'a Vertex>>;

/// A DFS traversal iterator over the graph, visiting vertices in
/// depth-first order from a given starting vertex.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<&'a Vertex>>;

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: WeightedAdjacency,
    S: VertexSequencer<&'a Vertex>,
{
    /// Creates a new traversal iterator starting from `start`.
    ///
    /// `start` is expected to reference a vertex stored in the graph (see
    /// [`GraphOrder::get_vertex`]); an unknown start yields only itself.
    pub fn new(graph: &'a G, start: &'a Vertex) -> Self {
        let mut visited = FxHashSet::with_capacity_and_hasher(graph.order(), Default::default());
        visited.insert(start.as_str());
        Self {
            graph,
            visited,
            sequencer: S::init(start),
        }
    }

    /// Returns *true* if `u` has already been discovered by the search
    pub fn did_visit_vertex(&self, u: &str) -> bool {
        self.visited.contains(u)
    }
}

impl<'a, G, S> Iterator for TraversalSearch<'a, G, S>
where
    G: WeightedAdjacency,
    S: VertexSequencer<&'a Vertex>,
{
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;
        for (v, _) in self.graph.neighbors_of(u.as_str()) {
            if self.visited.insert(v.as_str()) {
                self.sequencer.push(v);
            }
        }
        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let frontier = self.sequencer.cardinality();
        let undiscovered = self.graph.order().saturating_sub(self.visited.len());
        (frontier, Some(frontier + undiscovered))
    }
}

/// Iterator implementing topological ordering over a directed acyclic graph.
///
/// Uses Kahn's algorithm:
/// - Initializes with all vertices of in-degree 0, in ascending order.
/// - Repeatedly dequeues a vertex, decreasing the in-degrees of its
///   successors, and enqueues vertices whose in-degree drops to 0.
/// - Stops once all vertices are output or a cycle is detected.
///
/// The frontier is a FIFO queue, so vertices leave in discovery order.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: FxHashMap<&'a Vertex, usize>,
    queue: VecDeque<&'a Vertex>,
}

impl<'a, G> TopoSearch<'a, G>
where
    G: WeightedAdjacency,
{
    fn new(graph: &'a G) -> Self {
        let mut in_degs: FxHashMap<&'a Vertex, usize> = FxHashMap::default();
        for (_, v, _) in graph.edges() {
            *in_degs.entry(v).or_insert(0) += 1;
        }

        let queue: VecDeque<&'a Vertex> = graph
            .vertices()
            .filter(|u| !in_degs.contains_key(u))
            .collect();

        Self {
            graph,
            in_degs,
            queue,
        }
    }
}

impl<'a, G> Iterator for TopoSearch<'a, G>
where
    G: WeightedAdjacency,
{
    type Item = &'a Vertex;

    /// Returns the next vertex in topological order, if available.
    ///
    /// - Each returned vertex is guaranteed to appear after all its predecessors.
    /// - If the graph has a cycle, iteration terminates early without
    ///   covering all vertices.
    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for (v, _) in self.graph.neighbors_of(u.as_str()) {
            // every edge destination was counted in `new`
            if let Some(in_deg) = self.in_degs.get_mut(&v) {
                *in_deg -= 1;
                if *in_deg == 0 {
                    self.queue.push_back(v);
                }
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.graph.order()))
    }
}

/// Provides convenient traversal methods (BFS, DFS, topological order, etc.)
pub trait Traversal: WeightedAdjacency + Sized {
    /// Returns the vertices reachable from `start` in **depth-first search
    /// (DFS) order** as an owned sequence.
    ///
    /// Neighbors are pushed in ascending identifier order, so among the
    /// undiscovered successors of a vertex the largest one is processed first.
    ///
    /// # Errors
    /// - [`GraphError::UnknownVertex`] if `start` does not exist
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = Graph::new();
    /// for v in ["a", "b", "c"] {
    ///     g.insert_vertex(v).unwrap();
    /// }
    /// g.insert_edge("a", "b", 1).unwrap();
    /// g.insert_edge("b", "c", 2).unwrap();
    ///
    /// assert_eq!(g.dfs("a").unwrap(), vec!["a", "b", "c"]);
    /// assert_eq!(g.dfs("c").unwrap(), vec!["c"]);
    /// assert!(g.dfs("x").is_err());
    /// ```
    fn dfs(&self, start: &str) -> Result<Vec<Vertex>> {
        let start = self
            .get_vertex(start)
            .ok_or_else(|| GraphError::unknown(start, VertexRole::Start))?;
        Ok(self.dfs_search(start).cloned().collect())
    }

    /// Returns the vertices reachable from `start` in **breadth-first search
    /// (BFS) order** as an owned sequence.
    ///
    /// Within one level, vertices appear in ascending identifier order.
    ///
    /// # Errors
    /// - [`GraphError::UnknownVertex`] if `start` does not exist
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = Graph::new();
    /// for v in ["a", "b", "c"] {
    ///     g.insert_vertex(v).unwrap();
    /// }
    /// g.insert_edge("a", "b", 1).unwrap();
    /// g.insert_edge("a", "c", 2).unwrap();
    ///
    /// assert_eq!(g.bfs("a").unwrap(), vec!["a", "b", "c"]);
    /// ```
    fn bfs(&self, start: &str) -> Result<Vec<Vertex>> {
        let start = self
            .get_vertex(start)
            .ok_or_else(|| GraphError::unknown(start, VertexRole::Start))?;
        Ok(self.bfs_search(start).cloned().collect())
    }

    /// Returns a lazy DFS iterator starting from a stored vertex reference
    fn dfs_search<'a>(&'a self, start: &'a Vertex) -> DFS<'a, Self> {
        DFS::new(self, start)
    }

    /// Returns a lazy BFS iterator starting from a stored vertex reference
    fn bfs_search<'a>(&'a self, start: &'a Vertex) -> BFS<'a, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator yielding vertices in a valid **topological order**.
    ///
    /// Terminates early if the graph contains a cycle.
    fn topo_search(&self) -> TopoSearch<'_, Self> {
        TopoSearch::new(self)
    }

    /// Computes a topological order of the whole graph using Kahn's algorithm.
    ///
    /// - Returns `Some(order)` where every vertex appears after all its
    ///   predecessors, if the graph is acyclic.
    /// - Returns `None` if the graph contains a cycle.
    ///
    /// Vertices of equal depth leave the FIFO frontier in discovery order,
    /// seeded ascending, so the result is deterministic.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = Graph::new();
    /// for v in ["a", "b", "c"] {
    ///     g.insert_vertex(v).unwrap();
    /// }
    /// g.insert_edge("a", "b", 1).unwrap();
    /// g.insert_edge("b", "c", 2).unwrap();
    ///
    /// assert_eq!(g.topological_sort(), Some(vec!["a".into(), "b".into(), "c".into()]));
    ///
    /// g.insert_edge("c", "a", 3).unwrap(); // introduce cycle
    /// assert_eq!(g.topological_sort(), None);
    /// ```
    fn topological_sort(&self) -> Option<Vec<Vertex>> {
        let order = self.topo_search().collect_vec();
        (order.len() == self.order()).then(|| order.into_iter().cloned().collect())
    }

    /// Returns `true` if the graph is **acyclic**.
    ///
    /// Implementation: runs a topological search and checks whether
    /// all vertices were output.
    fn is_acyclic(&self) -> bool {
        self.topo_search().count() == self.order()
    }
}

impl<G> Traversal for G where G: WeightedAdjacency + Sized {}
