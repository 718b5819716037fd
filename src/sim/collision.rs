//! Axis-aligned bounding-box overlap test
//!
//! Every collision check in the simulation goes through [`overlaps`]. Boxes
//! are shrunk to 80% of their nominal sprite size so that near-misses against
//! the triangular/pentagonal sprites don't register as hits.

use glam::Vec2;

use crate::consts::HITBOX_SCALE;

/// Check whether two entity bounding boxes intersect on both axes.
///
/// `size_a`/`size_b` are the nominal (square) sprite sizes; the effective
/// hitbox is `HITBOX_SCALE` times that, centered on the position.
#[inline]
pub fn overlaps(a: Vec2, size_a: f32, b: Vec2, size_b: f32) -> bool {
    let half_a = size_a * HITBOX_SCALE / 2.0;
    let half_b = size_b * HITBOX_SCALE / 2.0;
    a.x - half_a < b.x + half_b
        && a.x + half_a > b.x - half_b
        && a.y - half_a < b.y + half_b
        && a.y + half_a > b.y - half_b
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_at_same_position() {
        assert!(overlaps(Vec2::new(100.0, 100.0), 20.0, Vec2::new(100.0, 100.0), 20.0));
    }

    #[test]
    fn test_miss_when_far_apart() {
        assert!(!overlaps(Vec2::new(0.0, 0.0), 20.0, Vec2::new(100.0, 0.0), 20.0));
        assert!(!overlaps(Vec2::new(0.0, 0.0), 20.0, Vec2::new(0.0, 100.0), 20.0));
    }

    #[test]
    fn test_shrunk_hitbox_excludes_nominal_touch() {
        // Nominal half-sizes sum to 20, so boxes at distance 18 touch at full
        // size but miss at 80% (effective reach 16).
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(18.0, 0.0);
        assert!(!overlaps(a, 20.0, b, 20.0));
        assert!(overlaps(a, 20.0, Vec2::new(15.0, 0.0), 20.0));
    }

    #[test]
    fn test_axis_separation() {
        // Overlapping on x but separated on y is a miss
        assert!(!overlaps(Vec2::new(0.0, 0.0), 20.0, Vec2::new(2.0, 50.0), 20.0));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -1000.0f32..1000.0, ay in -1000.0f32..1000.0,
            bx in -1000.0f32..1000.0, by in -1000.0f32..1000.0,
            sa in 1.0f32..50.0, sb in 1.0f32..50.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(overlaps(a, sa, b, sb), overlaps(b, sb, a, sa));
        }

        #[test]
        fn prop_coincident_boxes_always_overlap(
            x in -1000.0f32..1000.0, y in -1000.0f32..1000.0,
            sa in 1.0f32..50.0, sb in 1.0f32..50.0,
        ) {
            let p = Vec2::new(x, y);
            prop_assert!(overlaps(p, sa, p, sb));
        }
    }
}
