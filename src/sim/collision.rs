//! Axis-aligned collision geometry
//!
//! Everything in the game is a rectangle, so collision is a pair of
//! inclusive interval checks. No swept tests: at these speeds a ball can in
//! principle tunnel through a thin box in one tick, which is accepted.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{GOAL_CENTER_Y, GOAL_HEIGHT};

/// An axis-aligned box, inclusive on all edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: IVec2,
    pub max: IVec2,
}

impl Aabb {
    pub fn from_top_left(pos: IVec2, width: i32, height: i32) -> Self {
        Self {
            min: pos,
            max: pos + IVec2::new(width, height),
        }
    }

    /// Inclusive overlap test: touching edges count as a hit
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// True if this box's full vertical span lies inside the goal band
    /// centered on mid-height
    pub fn in_goal_window(&self) -> bool {
        let top = GOAL_CENTER_Y - GOAL_HEIGHT / 2;
        let bottom = GOAL_CENTER_Y + GOAL_HEIGHT / 2;
        self.min.y >= top && self.max.y <= bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_box() -> impl Strategy<Value = Aabb> {
        (0..2000i32, 0..1200i32, 1..300i32, 1..300i32)
            .prop_map(|(x, y, w, h)| Aabb::from_top_left(IVec2::new(x, y), w, h))
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in arb_box(), b in arb_box()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn strictly_disjoint_boxes_never_overlap(a in arb_box(), b in arb_box()) {
            let disjoint_x = a.max.x < b.min.x || b.max.x < a.min.x;
            let disjoint_y = a.max.y < b.min.y || b.max.y < a.min.y;
            prop_assume!(disjoint_x || disjoint_y);
            prop_assert!(!a.overlaps(&b));
        }
    }

    #[test]
    fn touching_edges_collide() {
        let a = Aabb::from_top_left(IVec2::new(0, 0), 10, 10);
        let b = Aabb::from_top_left(IVec2::new(10, 0), 10, 10);
        assert!(a.overlaps(&b));

        let c = Aabb::from_top_left(IVec2::new(0, 10), 10, 10);
        assert!(a.overlaps(&c));

        let d = Aabb::from_top_left(IVec2::new(11, 0), 10, 10);
        assert!(!a.overlaps(&d));
    }

    #[test]
    fn goal_window_requires_full_vertical_span() {
        let top = GOAL_CENTER_Y - GOAL_HEIGHT / 2;
        let bottom = GOAL_CENTER_Y + GOAL_HEIGHT / 2;

        // Fully inside
        let inside = Aabb::from_top_left(IVec2::new(0, top + 1), 30, 30);
        assert!(inside.in_goal_window());

        // Straddling the top edge
        let straddling = Aabb::from_top_left(IVec2::new(0, top - 1), 30, 30);
        assert!(!straddling.in_goal_window());

        // Touching both edges exactly still counts (inclusive)
        let exact = Aabb::from_top_left(IVec2::new(0, top), 30, bottom - top);
        assert!(exact.in_goal_window());
    }
}
