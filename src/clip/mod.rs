//! Greiner-Hormann Boolean clipping of two simple polygons.
//!
//! The pipeline runs in four phases, each a free function operating on
//! [`Ring`]s backed by caller-owned storage:
//!
//! 0. [`clip_build_ring`] — wrap a flat vertex slice in a circular
//!    doubly-linked list.
//! 1. [`clip_find_intersections`] — find every edge-edge crossing between
//!    the two rings and splice in paired intersection nodes.
//! 2. [`clip_mark_entry_exit`] — classify each intersection as where the
//!    traversal enters or leaves the other polygon.
//! 3. [`clip_emit_polygons`] / [`clip_emit_single_polygon`] — walk both
//!    rings, crossing over at each intersection, to assemble the output
//!    polygon(s).
//!
//! Which of the four Boolean operations comes out of phases 2-3 is chosen
//! entirely by the `Direction` pair passed to [`clip_mark_entry_exit`]; the
//! emission phase is the same code regardless of operation.

mod emit;
mod intersect;
mod mark;
mod ring;

pub use emit::{ClipResult, PolygonEntry, clip_emit_polygons, clip_emit_single_polygon};
pub use intersect::clip_find_intersections;
pub use mark::clip_mark_entry_exit;
pub use ring::{Direction, Ring, RingNode, clip_build_ring, flags};
