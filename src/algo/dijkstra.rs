/*!
Single-source shortest paths for non-negatively weighted graphs.

Since edge weights are unsigned, Dijkstra's algorithm applies directly: a lazy
[`DijkstraSearch`] iterator settles vertices in ascending distance order, and
the [`ShortestPaths`] trait exposes a validated, materializing variant that
collects the distances of all reachable vertices into a map.
*/

use std::{
    cmp::Reverse,
    collections::{BTreeMap, BinaryHeap},
};

use fxhash::FxHashMap;

use super::*;

/// Iterator implementing Dijkstra's algorithm from a single source vertex.
///
/// Yields `(vertex, distance)` pairs in the order the vertices are settled,
/// i.e. ascending by distance with ties broken by ascending identifier.
/// Unreachable vertices are never yielded.
///
/// The heap may hold outdated entries for already improved vertices; they are
/// skipped on pop by comparing against the best known distance.
pub struct DijkstraSearch<'a, G> {
    graph: &'a G,
    distances: FxHashMap<&'a Vertex, Weight>,
    heap: BinaryHeap<Reverse<(Weight, &'a Vertex)>>,
}

impl<'a, G> DijkstraSearch<'a, G>
where
    G: WeightedAdjacency,
{
    /// Creates a new shortest-path iterator rooted at `source`.
    ///
    /// `source` is expected to reference a vertex stored in the graph (see
    /// [`GraphOrder::get_vertex`]).
    pub fn new(graph: &'a G, source: &'a Vertex) -> Self {
        let mut distances = FxHashMap::default();
        distances.insert(source, 0);

        Self {
            graph,
            distances,
            heap: BinaryHeap::from([Reverse((0, source))]),
        }
    }

    /// Returns the best distance known *so far* for `u`.
    ///
    /// Only final once `u` has been yielded by the iterator.
    pub fn tentative_distance(&self, u: &Vertex) -> Weight {
        self.distances.get(u).copied().unwrap_or(UNREACHABLE)
    }
}

impl<'a, G> Iterator for DijkstraSearch<'a, G>
where
    G: WeightedAdjacency,
{
    type Item = (&'a Vertex, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(Reverse((dist, u))) = self.heap.pop() {
            let best = self.distances.get(&u).copied().unwrap_or(UNREACHABLE);
            if dist > best {
                // outdated entry, u was settled or improved before
                continue;
            }

            for (v, weight) in self.graph.neighbors_of(u.as_str()) {
                let next = dist.saturating_add(weight);
                let known = self.distances.get(&v).copied().unwrap_or(UNREACHABLE);
                if next < known {
                    self.distances.insert(v, next);
                    self.heap.push(Reverse((next, v)));
                }
            }

            return Some((u, dist));
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.graph.order()))
    }
}

/// Provides shortest-path distance queries on weighted graphs
pub trait ShortestPaths: WeightedAdjacency + Sized {
    /// Computes the shortest-path distances from `source` to every reachable
    /// vertex using **Dijkstra's algorithm**.
    ///
    /// The returned map contains an entry for each reachable vertex, the
    /// source itself included with distance 0. Unreachable vertices have no
    /// entry.
    ///
    /// # Errors
    /// - [`GraphError::UnknownVertex`] if `source` does not exist
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = Graph::new();
    /// for v in ["a", "b", "c", "z"] {
    ///     g.insert_vertex(v).unwrap();
    /// }
    /// g.insert_edge("a", "b", 1).unwrap();
    /// g.insert_edge("b", "c", 2).unwrap();
    /// g.insert_edge("a", "c", 5).unwrap();
    ///
    /// let dist = g.dijkstra("a").unwrap();
    /// assert_eq!(dist.get("b"), Some(&1));
    /// assert_eq!(dist.get("c"), Some(&3));
    /// assert_eq!(dist.get("z"), None);
    /// ```
    fn dijkstra(&self, source: &str) -> Result<BTreeMap<Vertex, Weight>> {
        let source = self
            .get_vertex(source)
            .ok_or_else(|| GraphError::unknown(source, VertexRole::Start))?;
        Ok(self
            .dijkstra_search(source)
            .map(|(v, dist)| (v.clone(), dist))
            .collect())
    }

    /// Returns a lazy shortest-path iterator rooted at a stored vertex reference
    fn dijkstra_search<'a>(&'a self, source: &'a Vertex) -> DijkstraSearch<'a, Self> {
        DijkstraSearch::new(self, source)
    }
}

impl<G> ShortestPaths for G where G: WeightedAdjacency + Sized {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::{graph_from, label, random_graph};

    fn distances(pairs: &[(&str, Weight)]) -> BTreeMap<Vertex, Weight> {
        pairs.iter().map(|&(v, d)| (v.into(), d)).collect()
    }

    #[test]
    fn distances_accumulate_along_shortest_routes() {
        let graph = graph_from(
            &["a", "b", "c"],
            &[("a", "b", 1), ("b", "c", 2), ("a", "c", 5)],
        );
        assert_eq!(
            graph.dijkstra("a").unwrap(),
            distances(&[("a", 0), ("b", 1), ("c", 3)])
        );
    }

    #[test]
    fn unreachable_vertices_are_omitted() {
        let graph = graph_from(&["a", "b", "z"], &[("a", "b", 1), ("z", "a", 1)]);
        assert_eq!(
            graph.dijkstra("a").unwrap(),
            distances(&[("a", 0), ("b", 1)])
        );
    }

    #[test]
    fn outdated_heap_entries_are_skipped() {
        // c is first discovered at distance 4 and later improved via b
        let graph = graph_from(
            &["a", "b", "c"],
            &[("a", "b", 1), ("a", "c", 4), ("b", "c", 1)],
        );
        assert_eq!(
            graph.dijkstra("a").unwrap(),
            distances(&[("a", 0), ("b", 1), ("c", 2)])
        );
    }

    #[test]
    fn zero_weight_edges_propagate_distance() {
        let graph = graph_from(&["a", "b", "c"], &[("a", "b", 0), ("b", "c", 0)]);
        assert_eq!(
            graph.dijkstra("a").unwrap(),
            distances(&[("a", 0), ("b", 0), ("c", 0)])
        );
    }

    #[test]
    fn source_alone_maps_to_zero() {
        let graph = graph_from(&["a", "b"], &[("b", "a", 3)]);
        assert_eq!(graph.dijkstra("a").unwrap(), distances(&[("a", 0)]));
    }

    #[test]
    fn dijkstra_rejects_unknown_source() {
        let graph = graph_from(&["a"], &[]);
        assert_eq!(
            graph.dijkstra("x"),
            Err(GraphError::unknown("x", VertexRole::Start))
        );
    }

    #[test]
    fn search_settles_in_ascending_distance_order() {
        let graph = graph_from(
            &["a", "b", "c", "d"],
            &[("a", "c", 2), ("a", "b", 2), ("c", "d", 1), ("b", "d", 4)],
        );
        let source = graph.get_vertex("a").unwrap();

        let settled = graph
            .dijkstra_search(source)
            .map(|(v, d)| (v.as_str(), d))
            .collect_vec();
        // equal distances settle in ascending identifier order
        assert_eq!(settled, vec![("a", 0), ("b", 2), ("c", 2), ("d", 3)]);
    }

    #[test]
    fn tentative_distances_tighten_while_settling() {
        let graph = graph_from(
            &["a", "b", "c"],
            &[("a", "b", 1), ("a", "c", 4), ("b", "c", 1)],
        );
        let source = graph.get_vertex("a").unwrap();
        let c = graph.get_vertex("c").unwrap();

        let mut search = graph.dijkstra_search(source);
        assert_eq!(search.tentative_distance(c), UNREACHABLE);

        assert_eq!(search.next().map(|(v, d)| (v.as_str(), d)), Some(("a", 0)));
        assert_eq!(search.tentative_distance(c), 4);

        assert_eq!(search.next().map(|(v, d)| (v.as_str(), d)), Some(("b", 1)));
        assert_eq!(search.tentative_distance(c), 2);
    }

    /// Reference implementation: relax all edges until a fixpoint is reached.
    fn bellman_ford(graph: &Graph, source: &str) -> BTreeMap<Vertex, Weight> {
        let mut dist: BTreeMap<Vertex, Weight> = BTreeMap::new();
        dist.insert(source.into(), 0);

        loop {
            let mut changed = false;
            for (u, v, w) in graph.edges() {
                if let Some(&du) = dist.get(u) {
                    let next = du + w;
                    if dist.get(v).map_or(true, |&dv| next < dv) {
                        dist.insert(v.clone(), next);
                        changed = true;
                    }
                }
            }
            if !changed {
                return dist;
            }
        }
    }

    #[test]
    fn dijkstra_matches_relaxation_fixpoint() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [10, 20, 50] {
            for _ in 0..10 {
                let graph = random_graph(rng, n, n * 4);
                let source = label(0);
                assert_eq!(
                    graph.dijkstra(&source).unwrap(),
                    bellman_ford(&graph, &source)
                );
            }
        }
    }
}
