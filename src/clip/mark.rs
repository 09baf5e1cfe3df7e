//! Phase 2: mark each intersection on each ring as an entry or an exit
//! point, parametrised by a per-ring traversal direction.

use crate::clip::ring::{Direction, Ring, flags};

fn mark_single(current: &mut Ring, other: &Ring, dir: Direction) {
    if current.is_empty() {
        current.direction = Some(dir);
        return;
    }

    let mut inside = other.contains_point(current.node(0).pos);
    if dir != Direction::Forward {
        inside = !inside;
    }

    let mut i = current.node(0).next as usize;
    while i != 0 {
        if current.node(i).is_intersection() {
            if inside {
                current.node_mut(i).flags |= flags::EXIT;
            }
            inside = !inside;
        }
        i = current.node(i).next as usize;
    }

    current.direction = Some(dir);
}

/// Phase 2: marks every intersection on `a` and `b` as entry or exit,
/// remembering each ring's chosen direction so Phase 3 can read it back.
///
/// The `(dir_a, dir_b)` pair selects the Boolean operation:
///
/// | `dir_a`  | `dir_b`  | Result  |
/// |----------|----------|---------|
/// | Forward  | Forward  | A ∩ B   |
/// | Backward | Forward  | A \ B   |
/// | Forward  | Backward | B \ A   |
/// | Backward | Backward | A ∪ B   |
pub fn clip_mark_entry_exit(a: &mut Ring, b: &mut Ring, dir_a: Direction, dir_b: Direction) {
    mark_single(a, b, dir_a);
    mark_single(b, a, dir_b);
}
