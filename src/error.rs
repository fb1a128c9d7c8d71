//! Error taxonomy for fallible graph operations.
//!
//! Every error carries the offending identifiers, so callers can render exact
//! user-facing messages or match on the failure kind programmatically.

use std::fmt;

use thiserror::Error;

use crate::vertex::Vertex;

/// Position in which a vertex was referenced when it was found missing.
///
/// The distinction only affects the rendered message; all missing-vertex
/// failures share the [`GraphError::UnknownVertex`] kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexRole {
    /// Referenced directly, e.g. by a removal or degree query
    Vertex,
    /// Referenced as the source endpoint of an edge
    Source,
    /// Referenced as the destination endpoint of an edge
    Destination,
    /// Referenced as the starting vertex of a search
    Start,
}

impl fmt::Display for VertexRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VertexRole::Vertex => "vertex",
            VertexRole::Source => "source vertex",
            VertexRole::Destination => "destination vertex",
            VertexRole::Start => "starting vertex",
        })
    }
}

/// All the ways a graph operation can fail.
///
/// Checks always run before any mutation, so a returned error guarantees the
/// graph is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The identifier is empty or contains a non-alphanumeric character
    #[error("vertex identifier `{0}` is not valid")]
    InvalidVertex(Vertex),

    /// A vertex with this identifier already exists
    #[error("vertex `{0}` already exists in the graph")]
    DuplicateVertex(Vertex),

    /// No vertex with this identifier exists
    #[error("{role} `{id}` does not exist in the graph")]
    UnknownVertex {
        /// The missing identifier
        id: Vertex,
        /// How the identifier was referenced
        role: VertexRole,
    },

    /// An edge between these endpoints already exists.
    ///
    /// `from`/`to` instead of source/destination: `thiserror` reserves a
    /// field named `source` for error chaining.
    #[error("an edge already exists from vertex `{from}` to vertex `{to}`")]
    DuplicateEdge {
        /// Source endpoint of the rejected edge
        from: Vertex,
        /// Destination endpoint of the rejected edge
        to: Vertex,
    },

    /// Both endpoints of the edge are the same vertex
    #[error("self-loop on vertex `{0}` is not allowed")]
    SelfLoop(Vertex),

    /// No edge between these endpoints exists
    #[error("no edge exists from vertex `{from}` to vertex `{to}`")]
    NoSuchEdge {
        /// Source endpoint of the missing edge
        from: Vertex,
        /// Destination endpoint of the missing edge
        to: Vertex,
    },
}

impl GraphError {
    /// Shorthand for an [`GraphError::UnknownVertex`] error with the given role
    pub fn unknown<V>(id: V, role: VertexRole) -> Self
    where
        V: Into<Vertex>,
    {
        GraphError::UnknownVertex {
            id: id.into(),
            role,
        }
    }
}

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_identifiers() {
        assert_eq!(
            GraphError::InvalidVertex("a b".into()).to_string(),
            "vertex identifier `a b` is not valid"
        );
        assert_eq!(
            GraphError::DuplicateVertex("a".into()).to_string(),
            "vertex `a` already exists in the graph"
        );
        assert_eq!(
            GraphError::SelfLoop("a".into()).to_string(),
            "self-loop on vertex `a` is not allowed"
        );
        assert_eq!(
            GraphError::DuplicateEdge {
                from: "a".into(),
                to: "b".into(),
            }
            .to_string(),
            "an edge already exists from vertex `a` to vertex `b`"
        );
        assert_eq!(
            GraphError::NoSuchEdge {
                from: "a".into(),
                to: "b".into(),
            }
            .to_string(),
            "no edge exists from vertex `a` to vertex `b`"
        );
    }

    #[test]
    fn unknown_vertex_message_depends_on_role() {
        assert_eq!(
            GraphError::unknown("x", VertexRole::Vertex).to_string(),
            "vertex `x` does not exist in the graph"
        );
        assert_eq!(
            GraphError::unknown("x", VertexRole::Source).to_string(),
            "source vertex `x` does not exist in the graph"
        );
        assert_eq!(
            GraphError::unknown("x", VertexRole::Destination).to_string(),
            "destination vertex `x` does not exist in the graph"
        );
        assert_eq!(
            GraphError::unknown("x", VertexRole::Start).to_string(),
            "starting vertex `x` does not exist in the graph"
        );
    }

    #[test]
    fn roles_share_one_error_kind() {
        let source_missing = GraphError::unknown("x", VertexRole::Source);
        assert!(matches!(source_missing, GraphError::UnknownVertex { .. }));
    }
}
