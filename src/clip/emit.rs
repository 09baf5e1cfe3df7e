//! Phase 3: walk both rings, crossing over at paired intersections, to
//! emit the clipped output polygon(s) into a shared vertex pool.

use crate::clip::ring::{Direction, Ring, flags};
use crate::error::ClipWarning;
use crate::point::Point;

/// One emitted output polygon: a span into the shared vertex pool passed
/// to [`clip_emit_polygons`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PolygonEntry {
    /// Offset of this polygon's first vertex in the shared pool.
    pub start: usize,
    /// Number of vertices this polygon occupies.
    pub len: usize,
}

/// Totals returned by [`clip_emit_polygons`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ClipResult {
    /// How many output polygons were emitted.
    pub polygon_count: usize,
    /// How many vertices were consumed across all of them.
    pub vertex_count: usize,
}

struct Pool<'a> {
    out: &'a mut [Point],
    put: usize,
}

impl<'a> Pool<'a> {
    fn push(&mut self, p: Point) -> bool {
        if self.put >= self.out.len() {
            log::warn!("{}", ClipWarning::VertexPoolExceeded { written: self.put });
            return false;
        }
        self.out[self.put] = p;
        self.put += 1;
        true
    }
}

/// Which ring is "current" during the dual-ring traversal; swaps on every
/// crossing.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Which {
    A,
    B,
}

/// Walks from `i` on the current ring until the next not-yet-visited
/// intersection is reached (following `next` or `prev` depending on the
/// starting node's exit flag), appending every node's position to `pool`.
/// Returns the index of the intersection node that halted the walk, or
/// `None` if the pool ran out of room mid-walk.
fn walk_to_next_intersection(ring: &mut Ring, start: usize, pool: &mut Pool) -> Option<usize> {
    let go_prev = ring.node(start).is_exit();
    let mut i = start;
    loop {
        i = if go_prev {
            ring.node(i).prev as usize
        } else {
            ring.node(i).next as usize
        };
        ring.node_mut(i).flags |= flags::PROCESSED;
        if !pool.push(ring.node(i).pos) {
            return None;
        }
        if ring.node(i).is_intersection() {
            return Some(i);
        }
    }
}

/// Assembles one output polygon starting at the just-discovered,
/// not-yet-processed intersection `start` on `start_which`. Returns the
/// vertex count emitted, or `None` if the pool ran out mid-assembly.
fn assemble_polygon(a: &mut Ring, b: &mut Ring, start: usize, start_which: Which, pool: &mut Pool) -> Option<usize> {
    let first_put = pool.put;

    let mut which = start_which;
    let mut i = start;
    match which {
        Which::A => a.node_mut(i).flags |= flags::PROCESSED,
        Which::B => b.node_mut(i).flags |= flags::PROCESSED,
    }

    loop {
        let next_intersection = match which {
            Which::A => walk_to_next_intersection(a, i, pool)?,
            Which::B => walk_to_next_intersection(b, i, pool)?,
        };

        let neighbor = match which {
            Which::A => a.node(next_intersection).neighbor as usize,
            Which::B => b.node(next_intersection).neighbor as usize,
        };
        which = match which {
            Which::A => Which::B,
            Which::B => Which::A,
        };
        i = neighbor;
        match which {
            Which::A => a.node_mut(i).flags |= flags::PROCESSED,
            Which::B => b.node_mut(i).flags |= flags::PROCESSED,
        }

        if i == start && which == start_which {
            break;
        }
    }

    Some(pool.put - first_put)
}

fn push_polygon(
    polygons: &mut [PolygonEntry],
    polygon_count: &mut usize,
    start: usize,
    len: usize,
) -> bool {
    if *polygon_count >= polygons.len() {
        log::warn!(
            "{}",
            ClipWarning::PolygonPoolExceeded {
                written: *polygon_count
            }
        );
        return false;
    }
    polygons[*polygon_count] = PolygonEntry { start, len };
    *polygon_count += 1;
    true
}

fn push_original(ring: &Ring, pool: &mut Pool) -> Option<usize> {
    let first_put = pool.put;
    for i in 0..ring.original_size() {
        if !pool.push(ring.node(i).pos) {
            return None;
        }
    }
    Some(pool.put - first_put)
}

/// Phase 3: emits every clipped output polygon, crossing rings at each
/// paired intersection. Returns the totals; [`PolygonEntry`] values in
/// `polygons_out` beyond the returned `polygon_count` are left untouched.
///
/// When no edge intersections exist at all, falls back to the resolved
/// containment behaviour for each Boolean operation (see `clip_mark_entry_exit`
/// for the direction-to-operation mapping): intersection emits the
/// contained polygon, union emits the containing one (or both, if
/// disjoint), and each asymmetric difference emits the minuend unchanged,
/// unless the minuend itself is the contained polygon, in which case it
/// emits nothing.
pub fn clip_emit_polygons(
    a: &mut Ring,
    b: &mut Ring,
    polygons_out: &mut [PolygonEntry],
    vertex_pool_out: &mut [Point],
) -> ClipResult {
    let mut pool = Pool {
        out: vertex_pool_out,
        put: 0,
    };
    let mut polygon_count = 0usize;

    if a.is_empty() {
        return ClipResult::default();
    }

    let mut has_intersections = false;
    let mut i = a.node(0).next as usize;
    'outer: while i != 0 {
        if a.node(i).is_intersection() && !a.node(i).is_processed() {
            has_intersections = true;
            let start = pool.put;
            let Some(len) = assemble_polygon(a, b, i, Which::A, &mut pool) else {
                push_polygon(polygons_out, &mut polygon_count, start, pool.put - start);
                return ClipResult {
                    polygon_count,
                    vertex_count: pool.put,
                };
            };
            if !push_polygon(polygons_out, &mut polygon_count, start, len) {
                return ClipResult {
                    polygon_count,
                    vertex_count: pool.put,
                };
            }
        }
        i = a.node(i).next as usize;
        if i == 0 {
            break 'outer;
        }
    }

    if !has_intersections {
        let a_dir = a.direction();
        let b_dir = b.direction();
        let a_inside_b = b.contains_point(a.node(0).pos);
        let b_inside_a = !b.is_empty() && a.contains_point(b.node(0).pos);

        let mut emit_ring = |ring: &Ring, polygon_count: &mut usize, pool: &mut Pool| -> bool {
            let start = pool.put;
            match push_original(ring, pool) {
                Some(len) => push_polygon(polygons_out, polygon_count, start, len),
                None => {
                    push_polygon(polygons_out, polygon_count, start, pool.put - start);
                    false
                }
            }
        };

        match (a_dir, b_dir) {
            (Direction::Forward, Direction::Forward) => {
                // A ∩ B: emit whichever polygon is the one fully contained.
                if a_inside_b {
                    emit_ring(a, &mut polygon_count, &mut pool);
                } else if b_inside_a {
                    emit_ring(b, &mut polygon_count, &mut pool);
                }
            }
            (Direction::Backward, Direction::Backward) => {
                // A ∪ B: emit the outer contour, or both if disjoint.
                if a_inside_b {
                    emit_ring(b, &mut polygon_count, &mut pool);
                } else if b_inside_a {
                    emit_ring(a, &mut polygon_count, &mut pool);
                } else {
                    if emit_ring(a, &mut polygon_count, &mut pool) {
                        emit_ring(b, &mut polygon_count, &mut pool);
                    }
                }
            }
            (Direction::Backward, Direction::Forward) => {
                // A \ B: B entirely inside A degenerates to A (no holes);
                // A entirely inside B vanishes; disjoint leaves A intact.
                if b_inside_a || !a_inside_b {
                    emit_ring(a, &mut polygon_count, &mut pool);
                }
            }
            (Direction::Forward, Direction::Backward) => {
                // B \ A: symmetric to the A \ B case above.
                if a_inside_b || !b_inside_a {
                    emit_ring(b, &mut polygon_count, &mut pool);
                }
            }
        }
    }

    ClipResult {
        polygon_count,
        vertex_count: pool.put,
    }
}

/// Convenience wrapper: invokes Phase 3 expecting at most one output
/// polygon and returns its vertex count (0 if none was emitted).
pub fn clip_emit_single_polygon(a: &mut Ring, b: &mut Ring, vertex_pool_out: &mut [Point]) -> usize {
    let mut entry = [PolygonEntry::default(); 1];
    let result = clip_emit_polygons(a, b, &mut entry, vertex_pool_out);
    if result.polygon_count > 0 {
        entry[0].len
    } else {
        0
    }
}
