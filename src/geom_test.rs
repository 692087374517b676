#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_default_is_zero() {
    assert_eq!(Point::default(), Point::ZERO);
}

#[test]
fn point_length() {
    assert!(approx_eq(Point::new(3.0, 4.0).length(), 5.0));
    assert!(approx_eq(Point::ZERO.length(), 0.0));
}

#[test]
fn point_distance_sq() {
    let a = Point::new(1.0, 1.0);
    let b = Point::new(4.0, 5.0);
    assert!(approx_eq(a.distance_sq(b), 25.0));
    assert!(approx_eq(b.distance_sq(a), 25.0));
}

#[test]
fn point_arithmetic() {
    let a = Point::new(1.0, 2.0);
    let b = Point::new(10.0, 20.0);
    assert_eq!(a + b, Point::new(11.0, 22.0));
    assert_eq!(b - a, Point::new(9.0, 18.0));
    assert_eq!(a * 3.0, Point::new(3.0, 6.0));

    let mut c = a;
    c += b;
    assert_eq!(c, Point::new(11.0, 22.0));
}

// --- Size ---

#[test]
fn size_empty_when_any_side_is_zero() {
    assert!(Size::new(0.0, 10.0).is_empty());
    assert!(Size::new(10.0, 0.0).is_empty());
    assert!(Size::default().is_empty());
}

#[test]
fn size_empty_when_negative_or_not_finite() {
    assert!(Size::new(-1.0, 10.0).is_empty());
    assert!(Size::new(f64::NAN, 10.0).is_empty());
    assert!(Size::new(10.0, f64::INFINITY).is_empty());
}

#[test]
fn size_not_empty() {
    assert!(!Size::new(1.0, 1.0).is_empty());
}

#[test]
fn size_center() {
    assert_eq!(Size::new(200.0, 100.0).center(), Point::new(100.0, 50.0));
}

// --- Rect ---

#[test]
fn rect_center() {
    let r = Rect::new(10.0, 20.0, 100.0, 40.0);
    assert_eq!(r.center(), Point::new(60.0, 40.0));
}
