//! Fixed numerical thresholds used by the clipping pipeline.
//!
//! These are nondimensional: callers are expected to work in coordinate
//! magnitudes compatible with a fixed `1e-4` vertex displacement and a
//! fixed `1e-6` cross-product floor.

/// Below this magnitude, a cross product is treated as zero and the two
/// edges under test are considered parallel (skipped rather than divided
/// by a near-zero denominator).
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// An alpha within this distance of 0 or 1 is treated as landing on a
/// vertex rather than cleanly inside an edge, and triggers the degeneracy
/// perturbation instead of an intersection insertion.
pub const DEGENERACY_ALPHA_EPSILON: f32 = 1e-5;

/// Magnitude of the perturbation applied to a vertex that a degenerate
/// intersection would otherwise land on.
pub const DEGENERACY_NUDGE: f32 = 1e-4;

/// Build-time winding-emission configuration: whether
/// [`crate::triangulate::triangulate_ear_clip`] emits clockwise-wound
/// triangles. The only configuration flag this crate exposes; flip it to
/// emit counter-clockwise instead.
pub const EMIT_CLOCKWISE_TRIANGLES: bool = true;
