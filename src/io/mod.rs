/*!
# IO

Utilities for writing graphs to different output targets.

## Output Format

The only supported format is the **adjacency listing**: one line per vertex in
ascending identifier order, each followed by its outgoing `(neighbor, weight)`
pairs in ascending neighbor order.

```text
[a] --> (b, 1), (c, 2)
[b] --> (c, 3)
[c] -->
```

A vertex without outgoing edges keeps the arrow and nothing after it. The
listing is purely an enumeration of the graph; writing never mutates it.

## Traits

To generalize over writing:
- [`GraphWriter`] is implemented by writers for a specific format.
- [`AdjacencyListWrite`] is a shorthand implemented by all graphs that
  expose their weighted adjacencies.
*/

use std::{
    fs::File,
    io::{BufWriter, Result, Write},
    path::Path,
};

use itertools::Itertools;

use crate::prelude::*;

/// Trait for types that can write graphs in a specific format.
///
/// This trait provides both a low-level method to write to any
/// [`Write`] instance and a convenience wrapper to write directly
/// to files.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// A writer for the adjacency listing format
#[derive(Debug, Copy, Clone, Default)]
pub struct AdjacencyListingWriter;

impl AdjacencyListingWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G> GraphWriter<G> for AdjacencyListingWriter
where
    G: WeightedAdjacency,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        for u in graph.vertices() {
            let neighbors = graph
                .neighbors_of(u.as_str())
                .map(|(v, weight)| format!("({v}, {weight})"))
                .join(", ");

            if neighbors.is_empty() {
                writeln!(writer, "[{u}] -->")?;
            } else {
                writeln!(writer, "[{u}] --> {neighbors}")?;
            }
        }
        Ok(())
    }
}

/// Trait for writing a graph to a writer as an adjacency listing.
/// Shorthand for default settings.
pub trait AdjacencyListWrite {
    /// Tries to write the graph to a writer
    fn try_write_adjacency_list<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_adjacency_list_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_adjacency_list(writer)
    }
}

impl<G> AdjacencyListWrite for G
where
    G: WeightedAdjacency,
{
    fn try_write_adjacency_list<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        AdjacencyListingWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::graph_from;

    fn listing(graph: &Graph) -> String {
        let mut buffer = Vec::new();
        graph.try_write_adjacency_list(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn listing_enumerates_vertices_with_their_neighbors() {
        let graph = graph_from(
            &["a", "b", "c", "d"],
            &[("a", "b", 1), ("a", "c", 2), ("b", "c", 3)],
        );
        assert_eq!(
            listing(&graph),
            "[a] --> (b, 1), (c, 2)\n[b] --> (c, 3)\n[c] -->\n[d] -->\n"
        );
    }

    #[test]
    fn listing_of_empty_graph_is_empty() {
        assert_eq!(listing(&Graph::new()), "");
    }

    #[test]
    fn listing_is_independent_of_insertion_order() {
        let graph = graph_from(&["c", "a", "b"], &[("b", "c", 2), ("b", "a", 1)]);
        assert_eq!(listing(&graph), "[a] -->\n[b] --> (a, 1), (c, 2)\n[c] -->\n");
    }

    #[test]
    fn listing_orders_identifiers_by_byte_value() {
        // uppercase sorts before lowercase
        let graph = graph_from(&["a", "A", "B"], &[("a", "A", 10)]);
        assert_eq!(listing(&graph), "[A] -->\n[B] -->\n[a] --> (A, 10)\n");
    }
}
