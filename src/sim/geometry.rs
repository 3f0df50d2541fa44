//! Geometry primitives for the flat board
//!
//! Positions are `glam::Vec2` in world units, origin at the top-left corner of
//! the board, y growing downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner plus size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.w, self.y + self.h)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Point on (or inside) the rectangle closest to `p`
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min(), self.max())
    }

    /// Check if a point lies inside the rectangle (edges included)
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }
}

/// Clamp a scalar into `[min, max]`
///
/// Unlike `f32::clamp` this never panics: an inverted range (a board smaller
/// than the entity) collapses to `min`.
#[inline]
pub fn clamp(v: f32, min: f32, max: f32) -> f32 {
    v.min(max).max(min)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Clamp a circle center so the whole circle stays on a `width` x `height` board
pub fn clamp_to_board(pos: Vec2, radius: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        clamp(pos.x, radius, width - radius),
        clamp(pos.y, radius, height - radius),
    )
}

/// Check whether a circle overlaps a rectangle (touching counts)
///
/// Closest-point test: clamp the center onto the rectangle and compare the
/// squared distance against the squared radius.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance_squared(closest) <= radius * radius
}

/// Check a circle against a set of rectangles
pub fn circle_hits_any(center: Vec2, radius: f32, rects: &[Rect]) -> bool {
    rects.iter().any(|r| circle_rect_overlap(center, radius, r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_circle_rect_overlap_inside() {
        let rect = Rect::new(200.0, 120.0, 120.0, 80.0);
        assert!(circle_rect_overlap(Vec2::new(250.0, 150.0), 14.0, &rect));
    }

    #[test]
    fn test_circle_rect_overlap_edge_and_corner() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);

        // Just touching the right edge
        assert!(circle_rect_overlap(Vec2::new(110.0, 50.0), 10.0, &rect));
        // Just short of the right edge
        assert!(!circle_rect_overlap(Vec2::new(110.5, 50.0), 10.0, &rect));

        // Near the corner: axis distances are both < r, but diagonal is > r
        assert!(!circle_rect_overlap(Vec2::new(108.0, 108.0), 10.0, &rect));
        assert!(circle_rect_overlap(Vec2::new(106.0, 106.0), 10.0, &rect));
    }

    #[test]
    fn test_clamp_to_board() {
        let p = clamp_to_board(Vec2::new(-50.0, 900.0), 14.0, 800.0, 480.0);
        assert_eq!(p, Vec2::new(14.0, 466.0));

        let inside = Vec2::new(300.0, 200.0);
        assert_eq!(clamp_to_board(inside, 14.0, 800.0, 480.0), inside);
    }

    #[test]
    fn test_clamp_inverted_range() {
        assert_eq!(clamp(5.0, 10.0, 2.0), 10.0);
    }

    #[test]
    fn test_distance() {
        assert!((distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)) - 5.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_overlap_matches_sampled_boundary(
            cx in -50.0f32..250.0,
            cy in -50.0f32..250.0,
            r in 1.0f32..40.0,
        ) {
            let rect = Rect::new(50.0, 60.0, 100.0, 70.0);
            let center = Vec2::new(cx, cy);
            let hit = circle_rect_overlap(center, r, &rect);

            // Inside the rectangle always overlaps
            if rect.contains_point(center) {
                prop_assert!(hit);
            }
            // Farther than r from every edge point never overlaps
            let closest = rect.closest_point(center);
            if center.distance(closest) > r + 1e-3 {
                prop_assert!(!hit);
            }
        }

        #[test]
        fn prop_clamp_to_board_stays_inside(
            x in -1000.0f32..2000.0,
            y in -1000.0f32..2000.0,
        ) {
            let p = clamp_to_board(Vec2::new(x, y), 14.0, 800.0, 480.0);
            prop_assert!(p.x >= 14.0 && p.x <= 786.0);
            prop_assert!(p.y >= 14.0 && p.y <= 466.0);
        }
    }
}
