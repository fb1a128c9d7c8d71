use fxhash::FxHashMap;

use super::*;

/// Provides reachability and tree-shape queries on directed graphs
pub trait Connectivity: WeightedAdjacency + Traversal + Sized {
    /// Returns `true` if every vertex of the graph is reachable from `start`
    /// by following directed edges.
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
    /// assert_eq!(g.is_connected("a"), Ok(true));
    /// assert_eq!(g.is_connected("c"), Ok(false));
    /// ```
    fn is_connected(&self, start: &str) -> Result<bool> {
        let start = self
            .get_vertex(start)
            .ok_or_else(|| GraphError::unknown(start, VertexRole::Start))?;
        Ok(self.dfs_search(start).count() == self.order())
    }

    /// Returns the root vertex if the graph is a **directed tree**, i.e. an
    /// arborescence:
    ///
    /// - exactly one vertex (the root) has in-degree 0,
    /// - every other vertex has in-degree 1,
    /// - every vertex is reachable from the root.
    ///
    /// Returns `None` otherwise; the empty graph is not a tree.
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
    /// assert_eq!(g.is_tree(), Some("a".into()));
    ///
    /// g.insert_edge("b", "c", 3).unwrap(); // second edge into c
    /// assert_eq!(g.is_tree(), None);
    /// ```
    fn is_tree(&self) -> Option<Vertex> {
        let mut in_degrees: FxHashMap<&Vertex, usize> = FxHashMap::default();
        for (_, v, _) in self.edges() {
            let in_deg = in_degrees.entry(v).or_insert(0);
            *in_deg += 1;
            if *in_deg == 2 {
                return None;
            }
        }

        // exactly one vertex without incoming edges
        if in_degrees.len() + 1 != self.order() {
            return None;
        }

        let root = self.vertices().find(|u| !in_degrees.contains_key(u))?;
        (self.dfs_search(root).count() == self.order()).then(|| root.clone())
    }
}

impl<G> Connectivity for G where G: WeightedAdjacency + Traversal + Sized {}
