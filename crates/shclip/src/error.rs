//! Error types for clipping operations.

use thiserror::Error;

use crate::geom2::Segment;

/// Precondition violations surfaced by the clipper.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipError {
    /// The lines through the two segments are (numerically) parallel.
    #[error("degenerate intersection: lines through {a:?} and {b:?} are parallel")]
    DegenerateIntersection { a: Segment, b: Segment },

    /// The clip polygon has too few vertices to bound a region.
    #[error("clip polygon needs at least 3 vertices, got {vertices}")]
    DegenerateClip { vertices: usize },
}
