use crate::assert_float_eq;
use crate::models::{Vec2, Vec3};
use approx::assert_relative_eq;
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn test_vec3_arithmetic() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-4.0, 0.5, 2.0);

    assert_eq!(a + b, Vec3::new(-3.0, 2.5, 5.0));
    assert_eq!(a - b, Vec3::new(5.0, 1.5, 1.0));
    assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
    assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
    assert_float_eq(a.dot(b), -4.0 + 1.0 + 6.0, 1e-12, None);

    let mut c = a;
    c += b;
    c -= a;
    assert_eq!(c, b);
    // `a` is a copy, untouched by the compound assignments
    assert_eq!(a, Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_vec3_cross_is_orthogonal() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-2.0, 0.5, 4.0);
    let c = a.cross(b);
    assert_float_eq(c.dot(a), 0.0, 1e-12, Some("cross product should be orthogonal to a"));
    assert_float_eq(c.dot(b), 0.0, 1e-12, Some("cross product should be orthogonal to b"));
}

#[test]
fn test_vec3_normalize() {
    let v = Vec3::new(3.0, 0.0, 4.0).normalize();
    assert_float_eq(v.length(), 1.0, 1e-12, None);
    assert_float_eq(v.x, 0.6, 1e-12, None);
    assert_float_eq(v.z, 0.8, 1e-12, None);

    // Zero-length vectors come back unchanged instead of turning into NaN
    assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
}

#[test]
fn test_vec3_distance() {
    let a = Vec3::new(1.0, 1.0, 1.0);
    let b = Vec3::new(4.0, 5.0, 1.0);
    assert_float_eq(a.distance(b), 5.0, 1e-12, None);
    assert_float_eq(b.distance(a), 5.0, 1e-12, None);
}

#[test]
fn test_axis_rotations_are_right_handed() {
    let x = Vec3::new(1.0, 0.0, 0.0);
    let y = Vec3::new(0.0, 1.0, 0.0);
    let z = Vec3::new(0.0, 0.0, 1.0);

    let r = y.rotate_x(FRAC_PI_2);
    assert_relative_eq!(r.y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(r.z, 1.0, epsilon = 1e-12);

    let r = z.rotate_y(FRAC_PI_2);
    assert_relative_eq!(r.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(r.z, 0.0, epsilon = 1e-12);

    let r = x.rotate_z(FRAC_PI_2);
    assert_relative_eq!(r.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(r.y, 1.0, epsilon = 1e-12);
}

#[test]
fn test_rotation_preserves_length() {
    let v = Vec3::new(0.5, -0.5, 0.5);
    let rotated = v.rotate_euler(Vec3::new(0.3, -1.2, PI / 5.0));
    assert_relative_eq!(rotated.length(), v.length(), epsilon = 1e-12);
}

#[test]
fn test_nan_propagates() {
    let v = Vec3::new(f64::NAN, 0.0, 0.0) + Vec3::new(1.0, 1.0, 1.0);
    assert!(v.x.is_nan());
    assert!(v.length().is_nan());
}

#[test]
fn test_vec2_operations() {
    let a = Vec2::new(3.0, 4.0);
    let b = Vec2::new(1.0, 1.0);
    assert_float_eq(a.length(), 5.0, 1e-12, None);
    assert_eq!(a - b, Vec2::new(2.0, 3.0));
    assert_eq!(a + b, Vec2::new(4.0, 5.0));
    assert_eq!(b * 3.0, Vec2::new(3.0, 3.0));
    assert_float_eq(a.dot(b), 7.0, 1e-12, None);
    assert_float_eq(a.distance(Vec2::ZERO), 5.0, 1e-12, None);
    assert_float_eq(a.normalize().length(), 1.0, 1e-12, None);
    assert!(!Vec2::new(f64::INFINITY, 0.0).is_finite());
}
