//! Axis-aligned rectangles for paddles and the circle test against them
//!
//! Screen convention: x grows to the right, y grows downward, and a rectangle
//! is anchored at its top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::clamp;

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Point on (or inside) the rectangle closest to `p`, by per-axis clamp
    pub fn nearest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            clamp(p.x, self.x, self.right()),
            clamp(p.y, self.y, self.bottom()),
        )
    }
}

/// Check whether a circle touches or overlaps a rectangle
///
/// Touching exactly (distance == radius) counts as a hit.
pub fn circle_rect_collision(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let nearest = rect.nearest_point(center);
    center.distance_squared(nearest) <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_point_outside() {
        let rect = Rect::new(10.0, 20.0, 12.0, 90.0);
        assert_eq!(rect.nearest_point(Vec2::new(0.0, 0.0)), Vec2::new(10.0, 20.0));
        assert_eq!(rect.nearest_point(Vec2::new(50.0, 60.0)), Vec2::new(22.0, 60.0));
    }

    #[test]
    fn test_nearest_point_inside_is_identity() {
        let rect = Rect::new(10.0, 20.0, 12.0, 90.0);
        let p = Vec2::new(15.0, 50.0);
        assert_eq!(rect.nearest_point(p), p);
    }

    #[test]
    fn test_circle_touching_edge_counts() {
        let rect = Rect::new(30.0, 100.0, 12.0, 90.0);
        // Exactly radius away from the right face
        assert!(circle_rect_collision(Vec2::new(51.0, 150.0), 9.0, &rect));
        // A hair further is a miss
        assert!(!circle_rect_collision(Vec2::new(51.5, 150.0), 9.0, &rect));
    }

    #[test]
    fn test_circle_touching_corner_counts() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        // 3-4-5 triangle from the bottom-right corner
        assert!(circle_rect_collision(Vec2::new(13.0, 14.0), 5.0, &rect));
        assert!(!circle_rect_collision(Vec2::new(13.0, 14.0), 4.9, &rect));
    }

    #[test]
    fn test_circle_far_away() {
        let rect = Rect::new(30.0, 100.0, 12.0, 90.0);
        assert!(!circle_rect_collision(Vec2::new(400.0, 250.0), 9.0, &rect));
    }

    #[test]
    fn test_circle_center_inside_rect() {
        let rect = Rect::new(30.0, 100.0, 12.0, 90.0);
        assert!(circle_rect_collision(Vec2::new(35.0, 120.0), 9.0, &rect));
    }
}
