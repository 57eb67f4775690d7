//! Total kernel functions: triangle area and the collinearity test.

use super::types::Point;

/// Shoelace area of the triangle `(p1, p2, p3)`:
/// `0.5 * |x1(y2−y3) + x2(y3−y1) + x3(y1−y2)|`.
/// Defined for any input; exactly collinear points give 0 by construction.
#[inline]
pub fn triangle_area(p1: &Point, p2: &Point, p3: &Point) -> f64 {
    0.5 * (p1.x() * (p2.y() - p3.y()) + p2.x() * (p3.y() - p1.y()) + p3.x() * (p1.y() - p2.y()))
        .abs()
}

/// Cross-product test on the edge vectors `p1→p2` and `p2→p3`.
/// Exact comparison: returns false only for exactly collinear points.
#[inline]
pub fn is_valid_triangle(p1: &Point, p2: &Point, p3: &Point) -> bool {
    (p2.y() - p1.y()) * (p3.x() - p2.x()) != (p3.y() - p2.y()) * (p2.x() - p1.x())
}
