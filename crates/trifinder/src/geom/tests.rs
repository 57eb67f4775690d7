use super::*;
use proptest::prelude::*;

#[test]
fn unit_right_triangle_area() {
    let a = Point::new(0, 0.0, 0.0);
    let b = Point::new(1, 0.0, 1.0);
    let c = Point::new(2, 1.0, 0.0);
    assert_eq!(triangle_area(&a, &b, &c), 0.5);
    assert!(is_valid_triangle(&a, &b, &c));
}

#[test]
fn slanted_half_area_triangles() {
    // Integer fixtures at non-axis-aligned slopes: exact shoelace values.
    let t1 = Triangle::new(
        "t1",
        Point::new(0, 1.0, 5.0),
        Point::new(1, 4.0, 6.0),
        Point::new(2, 0.0, 7.0),
    );
    // 0.5 * |1·(6−7) + 4·(7−5) + 0·(5−6)| = 3.5
    assert_eq!(t1.area(), 3.5);
    let t2 = Triangle::new(
        "t2",
        Point::new(0, 34.0, 26.0),
        Point::new(1, 34.0, 25.0),
        Point::new(2, 35.0, 25.0),
    );
    assert_eq!(t2.area(), 0.5);
    assert!(t2.is_valid());
}

#[test]
fn area_is_permutation_invariant() {
    let a = Point::new(0, -3.0, 2.0);
    let b = Point::new(1, 7.0, -1.0);
    let c = Point::new(2, 4.0, 9.0);
    let base = triangle_area(&a, &b, &c);
    assert_eq!(triangle_area(&b, &c, &a), base);
    assert_eq!(triangle_area(&c, &a, &b), base);
    assert_eq!(triangle_area(&b, &a, &c), base);
}

#[test]
fn collinear_axes_rejected() {
    // Horizontal
    let h = [
        Point::new(0, 0.0, 2.0),
        Point::new(1, 3.0, 2.0),
        Point::new(2, -5.0, 2.0),
    ];
    assert!(!is_valid_triangle(&h[0], &h[1], &h[2]));
    // Vertical
    let v = [
        Point::new(0, 1.0, 0.0),
        Point::new(1, 1.0, 4.0),
        Point::new(2, 1.0, -9.0),
    ];
    assert!(!is_valid_triangle(&v[0], &v[1], &v[2]));
    // Collinear triples have exactly zero area by the shoelace formula.
    assert_eq!(triangle_area(&h[0], &h[1], &h[2]), 0.0);
}

#[test]
fn coincident_points_rejected() {
    let a = Point::new(0, 2.0, 3.0);
    let b = Point::new(1, 2.0, 3.0);
    let c = Point::new(2, 8.0, -1.0);
    assert!(!is_valid_triangle(&a, &b, &c));
}

proptest! {
    // Integer coordinates in a range where every product in the cross test is
    // exact in f64, so "exactly collinear" is decidable.
    #[test]
    fn synthetic_collinear_triples_are_invalid(
        bx in -1000i32..1000, by in -1000i32..1000,
        dx in -100i32..100, dy in -100i32..100,
        s in -10i32..10, t in -10i32..10,
    ) {
        prop_assume!(dx != 0 || dy != 0);
        let p1 = Point::new(0, bx as f64, by as f64);
        let p2 = Point::new(1, (bx + s * dx) as f64, (by + s * dy) as f64);
        let p3 = Point::new(2, (bx + t * dx) as f64, (by + t * dy) as f64);
        prop_assert!(!is_valid_triangle(&p1, &p2, &p3));
        prop_assert_eq!(triangle_area(&p1, &p2, &p3), 0.0);
    }

    #[test]
    fn validity_iff_nonzero_cross(
        x1 in -500i32..500, y1 in -500i32..500,
        x2 in -500i32..500, y2 in -500i32..500,
        x3 in -500i32..500, y3 in -500i32..500,
    ) {
        let p1 = Point::new(0, x1 as f64, y1 as f64);
        let p2 = Point::new(1, x2 as f64, y2 as f64);
        let p3 = Point::new(2, x3 as f64, y3 as f64);
        let cross = (y2 - y1) as i64 * (x3 - x2) as i64 - (y3 - y2) as i64 * (x2 - x1) as i64;
        prop_assert_eq!(is_valid_triangle(&p1, &p2, &p3), cross != 0);
        // Valid implies strictly positive area on integer inputs.
        if cross != 0 {
            prop_assert!(triangle_area(&p1, &p2, &p3) > 0.0);
        }
    }
}
