//! Point and triangle value types.
//!
//! - `Point`: immutable, id assigned by the external registry at insertion
//!   time. The core never generates or mutates ids.
//! - `Triangle`: built from an ordered triple; `area` is derived on demand
//!   rather than stored, so it can never go stale.

use nalgebra::Vector2;

use super::kernel::{is_valid_triangle, triangle_area};

/// A plotted point. Value-like: cheap to copy, compared by `id`.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub id: u64,
    pub pos: Vector2<f64>,
}

impl Point {
    #[inline]
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        Self {
            id,
            pos: Vector2::new(x, y),
        }
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Point {}

/// A triangle over three registry points, tagged with a display label
/// ("min"/"max" in the finished result).
#[derive(Clone, Debug)]
pub struct Triangle {
    pub label: String,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Triangle {
    pub fn new(label: impl Into<String>, p1: Point, p2: Point, p3: Point) -> Self {
        Self {
            label: label.into(),
            p1,
            p2,
            p3,
        }
    }

    /// Shoelace area. Derived, never cached.
    #[inline]
    pub fn area(&self) -> f64 {
        triangle_area(&self.p1, &self.p2, &self.p3)
    }

    /// False iff the three points are exactly collinear.
    #[inline]
    pub fn is_valid(&self) -> bool {
        is_valid_triangle(&self.p1, &self.p2, &self.p3)
    }

    #[inline]
    pub fn points(&self) -> (&Point, &Point, &Point) {
        (&self.p1, &self.p2, &self.p3)
    }
}
