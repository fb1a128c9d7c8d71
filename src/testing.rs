//! Shared helpers for the unit tests of this crate.

use itertools::Itertools;
use rand::Rng;

use crate::prelude::*;

/// Builds a graph from literal vertices and weighted edges
pub(crate) fn graph_from(vertices: &[&str], edges: &[(&str, &str, Weight)]) -> Graph {
    let mut graph = Graph::new();
    for v in vertices {
        graph.insert_vertex(*v).unwrap();
    }
    for (u, v, w) in edges {
        graph.insert_edge(u, v, *w).unwrap();
    }
    graph
}

/// Identifier of the `i`-th generated vertex
pub(crate) fn label(i: usize) -> Vertex {
    format!("v{i}")
}

/// Creates a list of at most `m_ub` random edges between the vertices
/// `label(0)..label(n)`, without self-loops or duplicate pairs
pub(crate) fn random_edges<R: Rng>(rng: &mut R, n: usize, m_ub: usize) -> Vec<(Vertex, Vertex, Weight)> {
    let mut edges = (0..m_ub)
        .filter_map(|_| {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            (u != v).then(|| (label(u), label(v), rng.random_range(1..100)))
        })
        .collect_vec();
    edges.sort_unstable();
    edges.dedup_by(|a, b| a.0 == b.0 && a.1 == b.1);

    edges
}

/// Creates a graph with vertices `label(0)..label(n)` and at most `m_ub`
/// random edges
pub(crate) fn random_graph<R: Rng>(rng: &mut R, n: usize, m_ub: usize) -> Graph {
    let mut graph = Graph::new();
    for i in 0..n {
        graph.insert_vertex(label(i)).unwrap();
    }
    for (u, v, w) in random_edges(rng, n, m_ub) {
        graph.insert_edge(&u, &v, w).unwrap();
    }
    graph
}
