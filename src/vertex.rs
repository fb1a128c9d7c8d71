/*!
# Vertex Representation

We choose `Vertex = String` as vertices are user-supplied, case-sensitive text labels.
Identifiers are only considered valid if they are non-empty and consist entirely of ASCII
alphanumeric characters; every mutating graph operation rejects anything else up front.

Edge weights are `Weight = u64`: using an unsigned type rules out negative weights at the
type level and a fixed width keeps behavior identical across platforms.
*/

/// Vertices are non-empty, case-sensitive, ASCII-alphanumeric identifiers
pub type Vertex = String;

/// Edge weights are unsigned integers; [`Weight::MAX`] is reserved as [`UNREACHABLE`]
pub type Weight = u64;

/// Distance-value that is considered unreachable.
///
/// Shortest-path computations use this as the implicit "infinite" tentative
/// distance; it never appears in reported results.
pub const UNREACHABLE: Weight = Weight::MAX;

/// Returns *true* if `id` is a valid vertex identifier, i.e. non-empty and
/// entirely ASCII alphanumeric.
///
/// This is a pure predicate on the identifier and ignores graph state.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// assert!(is_valid_vertex("a1"));
/// assert!(!is_valid_vertex(""));
/// assert!(!is_valid_vertex("a-1"));
/// ```
pub fn is_valid_vertex(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_alphanumeric())
}
