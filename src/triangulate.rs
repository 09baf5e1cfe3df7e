//! Ear-clipping triangulation of a single simple polygon.
//!
//! Mirrors the rotating three-vertex query window of the classic
//! ear-clipping loop: no allocation, a caller-supplied scratch index list,
//! and a stall counter that bails out on non-simple input instead of
//! spinning forever.

use crate::error::TriangulateWarning;
use crate::konst::EMIT_CLOCKWISE_TRIANGLES;
use crate::point::Point;

/// Which winding order the caller wants emitted triangles to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

fn is_triangle_clockwise(a: Point, b: Point, c: Point) -> bool {
    let bx = b.x - a.x;
    let by = b.y - a.y;
    let cx = c.x - a.x;
    let cy = c.y - a.y;
    bx * cy - by * cx >= 0.0
}

/// Barycentric point-in-triangle test via projection onto the two edge
/// vectors from `a`. The triangle is treated as closed (`r >= 0 && s >= 0
/// && r + s <= 1`).
fn point_inside_triangle(a: Point, b: Point, c: Point, v: Point) -> bool {
    let bx = b.x - a.x;
    let by = b.y - a.y;
    let cx = c.x - a.x;
    let cy = c.y - a.y;
    let vx = v.x - a.x;
    let vy = v.y - a.y;

    let bc = bx * cx + by * cy;
    let vc = vx * cx + vy * cy;
    let vb = vx * bx + vy * by;
    let cc = cx * cx + cy * cy;
    let bb = bx * bx + by * by;

    let inv_denom = 1.0 / (bb * cc - bc * bc);
    let r = (cc * vb - bc * vc) * inv_denom;
    let s = (bb * vc - bc * vb) * inv_denom;

    r >= 0.0 && s >= 0.0 && r + s <= 1.0
}

fn is_triangle_ear(a: usize, b: usize, c: usize, vertices: &[Point], clockwise: bool) -> bool {
    let (va, vb, vc) = (vertices[a], vertices[b], vertices[c]);
    if is_triangle_clockwise(va, vb, vc) != clockwise {
        return false;
    }

    for (i, &v) in vertices.iter().enumerate() {
        if i == a || i == b || i == c {
            continue;
        }
        if point_inside_triangle(va, vb, vc, v) {
            return false;
        }
    }

    true
}

/// Triangulates a simple polygon via ear clipping, writing a stream of
/// triangle indices (always a multiple of 3) into `out`.
///
/// `scratch` is the query list the algorithm shrinks as ears are clipped;
/// it must be at least `vertices.len()` long. `index_offset` is added to
/// every emitted index, letting the caller place several polygons'
/// indices into a shared index buffer at different vertex offsets.
///
/// Returns the number of indices written. Two conditions can make that
/// fewer than `3 * (vertices.len() - 2)`:
///
/// - `out` runs out of room: as many complete triangles as fit are
///   emitted, [`TriangulateWarning::OutputCapacityExceeded`] is logged.
/// - the input is not a simple polygon (or is numerically pathological):
///   the stall counter trips after `2 * size` non-ear iterations and
///   [`TriangulateWarning::NonSimplePolygon`] is logged.
pub fn triangulate_ear_clip(
    vertices: &[Point],
    winding_in: Winding,
    scratch: &mut [usize],
    index_offset: u32,
    out: &mut [u32],
) -> usize {
    let count = vertices.len();
    debug_assert!(scratch.len() >= count, "scratch list too small");
    if count < 3 {
        return 0;
    }

    let clockwise = winding_in == Winding::Clockwise;
    let emit_clockwise = EMIT_CLOCKWISE_TRIANGLES;

    let mut size = count.min(scratch.len());
    for (i, slot) in scratch.iter_mut().enumerate().take(size) {
        *slot = i;
    }

    let mut written = 0usize;
    let (mut a, mut b, mut current) = (0usize, 1usize, 2usize);
    let mut stall = 0usize;

    while size > 2 {
        let c = current;
        if is_triangle_ear(scratch[a], scratch[b], scratch[c], vertices, clockwise) {
            if written + 3 > out.len() {
                log::warn!(
                    "{}",
                    TriangulateWarning::OutputCapacityExceeded { written }
                );
                break;
            }

            let (ia, ib, ic) = (scratch[a], scratch[b], scratch[c]);
            if clockwise == emit_clockwise {
                out[written] = ia as u32 + index_offset;
                out[written + 1] = ib as u32 + index_offset;
                out[written + 2] = ic as u32 + index_offset;
            } else {
                out[written] = ia as u32 + index_offset;
                out[written + 1] = ic as u32 + index_offset;
                out[written + 2] = ib as u32 + index_offset;
            }
            written += 3;

            size -= 1;
            scratch.copy_within(b + 1..size + 1, b);
            stall = 0;

            current = a;
            if current >= size {
                current -= size;
            }
            if current >= 2 {
                a = current - 2;
                b = current - 1;
            } else {
                a = size - (2 - current);
                b = if current >= 1 {
                    current - 1
                } else {
                    size - (1 - current)
                };
            }
        } else {
            a = b;
            b = current;
            current += 1;
            if current >= size {
                current = 0;
                a = size - 2;
                b = size - 1;
            }
            stall += 1;
            if stall > 2 * size {
                log::warn!(
                    "{}",
                    TriangulateWarning::NonSimplePolygon { remaining: size }
                );
                break;
            }
        }
    }

    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle_area(p: &[Point], i: u32, j: u32, k: u32) -> f32 {
        let (a, b, c) = (p[i as usize], p[j as usize], p[k as usize]);
        0.5 * ((b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)).abs()
    }

    #[test]
    fn square_emits_two_triangles_summing_to_unit_area() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let mut scratch = [0usize; 4];
        let mut out = [0u32; 6];
        let written =
            triangulate_ear_clip(&square, Winding::Clockwise, &mut scratch, 0, &mut out);
        assert_eq!(written, 6);

        let area = triangle_area(&square, out[0], out[1], out[2])
            + triangle_area(&square, out[3], out[4], out[5]);
        assert_relative_eq!(area, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn triangle_is_identity() {
        let tri = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
        let mut scratch = [0usize; 3];
        let mut out = [0u32; 3];
        let written =
            triangulate_ear_clip(&tri, Winding::Clockwise, &mut scratch, 0, &mut out);
        assert_eq!(written, 3);
        let mut indices = out.to_vec();
        indices.sort();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn degenerate_count_returns_zero() {
        let mut scratch = [0usize; 2];
        let mut out = [0u32; 3];
        let two_points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        assert_eq!(
            triangulate_ear_clip(
                &two_points,
                Winding::CounterClockwise,
                &mut scratch,
                0,
                &mut out
            ),
            0
        );
    }

    #[test]
    fn insufficient_output_capacity_truncates() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let mut scratch = [0usize; 4];
        let mut out = [0u32; 3]; // room for only one triangle
        let written =
            triangulate_ear_clip(&square, Winding::Clockwise, &mut scratch, 0, &mut out);
        assert_eq!(written, 3);
    }

    #[test]
    fn index_offset_shifts_every_emitted_index() {
        let tri = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
        let mut scratch = [0usize; 3];
        let mut out = [0u32; 3];
        triangulate_ear_clip(&tri, Winding::Clockwise, &mut scratch, 100, &mut out);
        assert!(out.iter().all(|&i| (100..103).contains(&i)));
    }

    #[test]
    fn all_indices_within_begin_plus_count() {
        let pentagon = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 1.5),
            Point::new(1.0, 3.0),
            Point::new(-1.0, 1.5),
        ];
        let mut scratch = [0usize; 5];
        let mut out = [0u32; 9];
        let written = triangulate_ear_clip(
            &pentagon,
            Winding::Clockwise,
            &mut scratch,
            10,
            &mut out,
        );
        assert_eq!(written, 9);
        assert!(out[..written].iter().all(|&i| (10..15).contains(&i)));
    }
}
