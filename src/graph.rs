/*!
# Graph Representation

The graph is stored as an ordered map of ordered maps: every vertex owns a
neighborhood that maps each successor to the weight of the connecting edge.
Ordered maps on both levels make every enumeration in the crate deterministic,
ascending by identifier, which traversal order, topological seeding, and the
adjacency listing all rely on.

All mutating operations validate their arguments before touching any state, so
a returned error guarantees the graph is exactly as it was.
*/

use std::collections::BTreeMap;

use crate::{
    error::{GraphError, Result, VertexRole},
    ops::{GraphOrder, GraphSize, WeightedAdjacency},
    vertex::{is_valid_vertex, Vertex, Weight},
};

/// A weighted directed graph over validated text identifiers.
///
/// Self-loops, duplicate edges, and negative weights cannot be represented;
/// the first two are rejected on insertion, the latter is ruled out by the
/// unsigned [`Weight`] type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<Vertex, BTreeMap<Vertex, Weight>>,
}

impl Graph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new isolated vertex.
    ///
    /// # Errors
    /// - [`GraphError::InvalidVertex`] if the identifier fails [`is_valid_vertex`]
    /// - [`GraphError::DuplicateVertex`] if the vertex already exists
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let mut graph = Graph::new();
    /// assert!(graph.insert_vertex("a").is_ok());
    /// assert_eq!(
    ///     graph.insert_vertex("a"),
    ///     Err(GraphError::DuplicateVertex("a".into()))
    /// );
    /// assert_eq!(graph.order(), 1);
    /// ```
    pub fn insert_vertex<V>(&mut self, vertex: V) -> Result<()>
    where
        V: Into<Vertex>,
    {
        let vertex = vertex.into();
        if !is_valid_vertex(&vertex) {
            return Err(GraphError::InvalidVertex(vertex));
        }
        if self.adjacency.contains_key(&vertex) {
            return Err(GraphError::DuplicateVertex(vertex));
        }
        self.adjacency.insert(vertex, BTreeMap::new());
        Ok(())
    }

    /// Removes a vertex and every edge incident to it.
    ///
    /// Outgoing edges vanish together with the vertex's neighborhood; incoming
    /// edges are stripped by scanning all remaining neighborhoods.
    ///
    /// # Errors
    /// - [`GraphError::UnknownVertex`] if the vertex does not exist
    pub fn remove_vertex(&mut self, vertex: &str) -> Result<()> {
        if self.adjacency.remove(vertex).is_none() {
            return Err(GraphError::unknown(vertex, VertexRole::Vertex));
        }
        for neighbors in self.adjacency.values_mut() {
            neighbors.remove(vertex);
        }
        Ok(())
    }

    /// Inserts the directed edge `(source, destination)` with the given weight.
    ///
    /// Only this direction is added; the reverse edge is unaffected.
    ///
    /// # Errors
    /// - [`GraphError::UnknownVertex`] if either endpoint does not exist
    ///   (the source is checked first)
    /// - [`GraphError::SelfLoop`] if both endpoints are equal
    /// - [`GraphError::DuplicateEdge`] if the edge already exists
    pub fn insert_edge(&mut self, source: &str, destination: &str, weight: Weight) -> Result<()> {
        if !self.adjacency.contains_key(source) {
            return Err(GraphError::unknown(source, VertexRole::Source));
        }
        if !self.adjacency.contains_key(destination) {
            return Err(GraphError::unknown(destination, VertexRole::Destination));
        }
        if source == destination {
            return Err(GraphError::SelfLoop(source.into()));
        }
        if let Some(neighbors) = self.adjacency.get_mut(source) {
            if neighbors.contains_key(destination) {
                return Err(GraphError::DuplicateEdge {
                    from: source.into(),
                    to: destination.into(),
                });
            }
            neighbors.insert(destination.into(), weight);
        }
        Ok(())
    }

    /// Removes the directed edge `(source, destination)`.
    ///
    /// # Errors
    /// - [`GraphError::UnknownVertex`] if either endpoint does not exist
    ///   (the source is checked first)
    /// - [`GraphError::NoSuchEdge`] if no such edge exists
    pub fn remove_edge(&mut self, source: &str, destination: &str) -> Result<()> {
        if !self.adjacency.contains_key(source) {
            return Err(GraphError::unknown(source, VertexRole::Source));
        }
        if !self.adjacency.contains_key(destination) {
            return Err(GraphError::unknown(destination, VertexRole::Destination));
        }
        if let Some(neighbors) = self.adjacency.get_mut(source) {
            if neighbors.remove(destination).is_none() {
                return Err(GraphError::NoSuchEdge {
                    from: source.into(),
                    to: destination.into(),
                });
            }
        }
        Ok(())
    }

    /// Returns the number of outgoing edges of a vertex.
    ///
    /// # Errors
    /// - [`GraphError::UnknownVertex`] if the vertex does not exist
    pub fn out_degree(&self, vertex: &str) -> Result<usize> {
        match self.adjacency.get(vertex) {
            Some(neighbors) => Ok(neighbors.len()),
            None => Err(GraphError::unknown(vertex, VertexRole::Vertex)),
        }
    }

    /// Returns the number of incoming edges of a vertex.
    ///
    /// No reverse index is maintained, so this scans every neighborhood and is
    /// considerably more costly than [`Graph::out_degree`].
    ///
    /// # Errors
    /// - [`GraphError::UnknownVertex`] if the vertex does not exist
    pub fn in_degree(&self, vertex: &str) -> Result<usize> {
        if !self.adjacency.contains_key(vertex) {
            return Err(GraphError::unknown(vertex, VertexRole::Vertex));
        }
        Ok(self
            .adjacency
            .values()
            .filter(|neighbors| neighbors.contains_key(vertex))
            .count())
    }
}

impl GraphOrder for Graph {
    fn order(&self) -> usize {
        self.adjacency.len()
    }

    fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.adjacency.keys()
    }

    fn get_vertex(&self, id: &str) -> Option<&Vertex> {
        self.adjacency.get_key_value(id).map(|(id, _)| id)
    }

    fn has_vertex(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }
}

impl GraphSize for Graph {
    fn size(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }
}

impl WeightedAdjacency for Graph {
    fn neighbors_of<'a>(&'a self, u: &'a str) -> impl Iterator<Item = (&'a Vertex, Weight)> + 'a {
        self.adjacency
            .get(u)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(v, &weight)| (v, weight)))
    }

    fn weight_of(&self, u: &str, v: &str) -> Option<Weight> {
        self.adjacency.get(u)?.get(v).copied()
    }

    fn has_edge(&self, u: &str, v: &str) -> bool {
        self.weight_of(u, v).is_some()
    }

    fn out_degree_of(&self, u: &str) -> usize {
        self.adjacency.get(u).map_or(0, BTreeMap::len)
    }
}
