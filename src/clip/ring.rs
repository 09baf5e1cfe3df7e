//! The intersection-augmented doubly-linked ring: Phase 0 of clipping, plus
//! the node type and small queries both later phases share.

use crate::error::ClipWarning;
use crate::point::Point;

/// Bit set over a ring node's three-valued state.
pub mod flags {
    /// The node was inserted by Phase 1 at an edge-edge crossing.
    pub const INTERSECTION: u8 = 1 << 0;
    /// Phase 2 determined this intersection is where the traversal leaves
    /// the other polygon (as opposed to entering it).
    pub const EXIT: u8 = 1 << 1;
    /// Phase 3 has already walked over this node while assembling an
    /// output polygon.
    pub const PROCESSED: u8 = 1 << 2;
}

/// One vertex of a [`Ring`]: either an original polygon vertex or an
/// intersection inserted by Phase 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct RingNode {
    /// Position. For an intersection node this is the computed crossing
    /// point, not a re-use of either source vertex.
    pub pos: Point,
    /// Index of the next node in geometric walk order.
    pub next: u32,
    /// Index of the previous node in geometric walk order.
    pub prev: u32,
    /// For an intersection node, the index of its paired twin on the
    /// other ring. Meaningless otherwise.
    pub neighbor: u32,
    /// For an intersection node, its parametric position in `[0, 1]`
    /// along the original edge it was inserted on. Used only to keep
    /// insertion order consistent with crossing order on a shared edge.
    pub alpha: f32,
    /// See [`flags`].
    pub flags: u8,
}

impl RingNode {
    fn is(&self, flag: u8) -> bool {
        self.flags & flag != 0
    }

    pub fn is_intersection(&self) -> bool {
        self.is(flags::INTERSECTION)
    }

    pub fn is_exit(&self) -> bool {
        self.is(flags::EXIT)
    }

    pub fn is_processed(&self) -> bool {
        self.is(flags::PROCESSED)
    }
}

/// Which way a ring's entry/exit toggling is read during Phase 2 and 3.
/// Chosen per-ring; the (a, b) pair selects the Boolean operation (see
/// [`crate::clip::clip_mark_entry_exit`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// A circular doubly-linked vertex list backed by caller-owned storage,
/// augmented with intersection nodes as clipping proceeds.
///
/// Indices `[0, original_size)` are the original polygon's vertices in
/// input order and never move. Indices `[original_size, size)` are
/// intersection nodes appended by Phase 1, in insertion order. `next`/
/// `prev` encode the geometric walk order, which is independent of this
/// physical layout.
pub struct Ring<'a> {
    pub(crate) nodes: &'a mut [RingNode],
    pub(crate) original_size: usize,
    pub(crate) size: usize,
    pub(crate) direction: Option<Direction>,
}

impl<'a> Ring<'a> {
    pub fn original_size(&self) -> usize {
        self.original_size
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, index: usize) -> &RingNode {
        &self.nodes[index]
    }

    pub(crate) fn node_mut(&mut self, index: usize) -> &mut RingNode {
        &mut self.nodes[index]
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
            .expect("clip_mark_entry_exit must run before this ring is read for its direction")
    }

    /// Inserts a new node *after* `at`, linking it into the ring, and
    /// returns its physical index. Returns `None` (logging a
    /// [`ClipWarning::RingCapacityExceeded`]) if the backing storage is
    /// full.
    pub(crate) fn insert_after(&mut self, at: usize, node: RingNode) -> Option<usize> {
        if self.size >= self.nodes.len() {
            log::warn!(
                "{}",
                ClipWarning::RingCapacityExceeded {
                    capacity: self.nodes.len()
                }
            );
            return None;
        }

        let new_index = self.size;
        let old_next = self.nodes[at].next;

        self.nodes[new_index] = RingNode {
            prev: at as u32,
            next: old_next,
            ..node
        };
        self.nodes[old_next as usize].prev = new_index as u32;
        self.nodes[at].next = new_index as u32;
        self.size += 1;
        Some(new_index)
    }

    /// Even-odd horizontal-ray crossing count over this ring's *original*
    /// edges. Used by Phase 2 to seed the initial inside/outside state
    /// and by Phase 3's no-intersection containment fallback.
    pub fn contains_point(&self, p: Point) -> bool {
        let count = self.original_size;
        if count == 0 {
            return false;
        }
        let mut crossings = 0u32;
        let mut prev_index = count - 1;
        for i in 0..count {
            let cur = self.nodes[i].pos;
            let prev = self.nodes[prev_index].pos;
            if (p.y <= prev.y && p.y > cur.y) || (p.y > prev.y && p.y <= cur.y) {
                let alpha = (prev.y - p.y) / (prev.y - cur.y);
                let x_intersection = prev.x + alpha * (cur.x - prev.x);
                if p.x < x_intersection {
                    crossings += 1;
                }
            }
            prev_index = i;
        }
        crossings % 2 == 1
    }
}

/// Phase 0: converts a flat vertex array into a [`Ring`] backed by
/// `backing`. The ring starts with `original_size == vertices.len()` and
/// no intersection nodes; `backing` must be generous enough for Phase 1 to
/// append every intersection it finds, since the ring never resizes.
pub fn clip_build_ring<'a>(vertices: &[Point], backing: &'a mut [RingNode]) -> Ring<'a> {
    let count = vertices.len();
    debug_assert!(
        backing.len() >= count,
        "backing storage smaller than vertex count"
    );

    for (i, node) in backing.iter_mut().enumerate().take(count) {
        *node = RingNode {
            pos: vertices[i],
            next: ((i + 1) % count) as u32,
            prev: ((i + count - 1) % count) as u32,
            neighbor: 0,
            alpha: 0.0,
            flags: 0,
        };
    }

    Ring {
        nodes: backing,
        original_size: count,
        size: count,
        direction: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_ring_links_are_circular() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let mut backing = [RingNode::default(); 8];
        let ring = clip_build_ring(&square, &mut backing);
        assert_eq!(ring.original_size(), 4);
        assert_eq!(ring.len(), 4);
        for i in 0..4 {
            assert_eq!(ring.node(i).next as usize, (i + 1) % 4);
            assert_eq!(ring.node(i).prev as usize, (i + 3) % 4);
        }
    }

    #[test]
    fn contains_point_even_odd() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        let mut backing = [RingNode::default(); 4];
        let ring = clip_build_ring(&square, &mut backing);
        assert!(ring.contains_point(Point::new(1.0, 1.0)));
        assert!(!ring.contains_point(Point::new(3.0, 3.0)));
    }
}
