//! A self-contained 2-D polygon geometry kernel: ear-clipping triangulation
//! and Greiner-Hormann polygon clipping.
//!
//! Both pipelines operate entirely on caller-supplied buffers. Nothing in
//! this crate allocates on the hot path; scratch space and output space are
//! slices the caller owns, and every entry point signals capacity exhaustion
//! through a truncated return count (plus a [`log::warn!`] record) rather
//! than a `Result`.
//!
//! Two pipelines share only the [`Point`] type:
//!
//! - [`triangulate`] — ear-clipping triangulation of a single simple
//!   polygon into a triangle index stream.
//! - [`clip`] — Greiner-Hormann Boolean clipping (intersection, union, and
//!   the two asymmetric differences) of two simple polygons.

pub mod clip;
pub mod error;
pub mod konst;
pub mod orientation;
pub mod point;
pub mod triangulate;

pub use clip::{
    ClipResult, Direction, PolygonEntry, Ring, RingNode, clip_build_ring, clip_emit_polygons,
    clip_emit_single_polygon, clip_find_intersections, clip_mark_entry_exit,
};
pub use orientation::is_polygon_clockwise;
pub use point::{Point, Vector};
pub use triangulate::{Winding, triangulate_ear_clip};
