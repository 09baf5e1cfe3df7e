//! Diagnostic types for the non-fatal conditions the kernel can hit.
//!
//! Neither pipeline returns a `Result`: per the resource model, capacity
//! exhaustion and degenerate input are signalled through truncated return
//! counts and a debug assertion, exactly as in the original source this
//! kernel is based on. These enums exist so that the truncation/assertion
//! path has a name instead of a bare `bool`, and a human-readable message
//! for the [`log::warn!`] calls made on that path.

/// A non-fatal condition encountered while triangulating a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TriangulateWarning {
    /// `out` ran out of room before all ears were clipped; the returned
    /// count covers only the triangles that fit.
    #[error("triangulation output buffer exhausted after {written} indices")]
    OutputCapacityExceeded {
        /// Indices written before truncation.
        written: usize,
    },
    /// The stall counter exceeded `2 * size` consecutive non-ear
    /// iterations; the input is not a simple polygon or is numerically
    /// pathological.
    #[error("ear-clipping stalled with {remaining} vertices remaining; input is not simple")]
    NonSimplePolygon {
        /// Vertices still left in the query list when the loop aborted.
        remaining: usize,
    },
}

/// A non-fatal condition encountered while clipping two polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClipWarning {
    /// A ring's backing storage had no room left for another intersection
    /// node.
    #[error("ring backing storage exhausted at capacity {capacity}")]
    RingCapacityExceeded {
        /// The ring's capacity at the time of the failed insert.
        capacity: usize,
    },
    /// The shared vertex pool had no room left for another emitted vertex.
    #[error("vertex pool exhausted after {written} vertices")]
    VertexPoolExceeded {
        /// Vertices written before truncation.
        written: usize,
    },
    /// The polygon entry buffer had no room left for another output
    /// polygon.
    #[error("polygon buffer exhausted after {written} polygons")]
    PolygonPoolExceeded {
        /// Polygons written before truncation.
        written: usize,
    },
}
