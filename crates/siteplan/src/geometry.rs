//! Axis-aligned rectangle primitives used by the placement rules.
//!
//! All rule distances in this crate are edge-to-edge: [`Rect::distance`] is the
//! single distance method, used for both the separation rule and the
//! neighbour-mix rule so the two stay consistent with each other.
use glam::Vec2;

/// Axis-aligned rectangle in site-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Lower-left corner.
    pub min: Vec2,
    /// Upper-right corner.
    pub max: Vec2,
}

impl Rect {
    /// Create a rectangle from its lower-left and upper-right corners.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from a lower-left origin and a size.
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    pub fn centroid(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// True if `other` lies entirely within this rectangle. Edge contact counts
    /// as contained.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min.x >= self.min.x
            && other.min.y >= self.min.y
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
    }

    /// Open-interval AABB overlap test. Rectangles that merely touch at an edge
    /// or corner do NOT intersect; only [`Rect::distance`] treats touching as
    /// zero-distance contact.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.max.x <= other.min.x
            || other.max.x <= self.min.x
            || self.max.y <= other.min.y
            || other.max.y <= self.min.y)
    }

    /// Edge-to-edge Euclidean distance between two rectangles.
    ///
    /// Per axis the delta is the gap between the nearest edges, or 0 when the
    /// projections overlap or touch. Intersecting or touching rectangles are at
    /// distance 0.
    pub fn distance(&self, other: &Rect) -> f32 {
        let dx = if self.max.x < other.min.x {
            other.min.x - self.max.x
        } else if other.max.x < self.min.x {
            self.min.x - other.max.x
        } else {
            0.0
        };

        let dy = if self.max.y < other.min.y {
            other.min.y - self.max.y
        } else if other.max.y < self.min.y {
            self.min.y - other.max.y
        } else {
            0.0
        };

        Vec2::new(dx, dy).length()
    }
}
