//! Read-only capability traits separating graph storage from the algorithms
//! built on top of it.

use crate::vertex::{Vertex, Weight};

/// Provides getters pertaining to the vertex-size of a graph
pub trait GraphOrder {
    /// Returns the number of vertices of the graph
    fn order(&self) -> usize;

    /// Returns an iterator over V in ascending identifier order
    fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_;

    /// Returns a reference to the stored identifier equal to `id`, if present.
    ///
    /// The returned reference borrows from the graph, which makes it suitable
    /// as the starting point of the lazy search iterators in [`crate::algo`].
    fn get_vertex(&self, id: &str) -> Option<&Vertex>;

    /// Returns *true* if a vertex with the given identifier exists
    fn has_vertex(&self, id: &str) -> bool {
        self.get_vertex(id).is_some()
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.order() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphSize {
    /// Returns the number of edges of the graph
    fn size(&self) -> usize;

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.size() == 0
    }
}

/// Getters for weighted neighborhoods & edges
pub trait WeightedAdjacency: GraphOrder + Sized {
    /// Returns an iterator over the outgoing neighborhood of a given vertex in
    /// ascending identifier order, paired with the weight of the connecting
    /// edge. The iterator is empty if `u` has no outgoing edges or does not
    /// exist.
    fn neighbors_of<'a>(&'a self, u: &'a str) -> impl Iterator<Item = (&'a Vertex, Weight)> + 'a;

    /// Returns the weight of the edge `(u, v)` if it exists
    fn weight_of(&self, u: &str, v: &str) -> Option<Weight> {
        self.neighbors_of(u)
            .find_map(|(nbr, weight)| (nbr.as_str() == v).then_some(weight))
    }

    /// Returns *true* if the edge `(u, v)` exists in the graph
    fn has_edge(&self, u: &str, v: &str) -> bool {
        self.weight_of(u, v).is_some()
    }

    /// Returns the number of outgoing neighbors of `u`, or `0` if `u` does not exist
    fn out_degree_of(&self, u: &str) -> usize {
        self.neighbors_of(u).count()
    }

    /// Returns an iterator over all edges `(source, destination, weight)` in
    /// ascending source-then-destination order
    fn edges(&self) -> impl Iterator<Item = (&Vertex, &Vertex, Weight)> + '_ {
        self.vertices().flat_map(move |u| {
            self.neighbors_of(u.as_str())
                .map(move |(v, weight)| (u, v, weight))
        })
    }
}
