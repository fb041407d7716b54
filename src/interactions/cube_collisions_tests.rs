use crate::assert_float_eq;
use crate::interactions::{
    detect_cube_contact,
    resolve_boundary_collision,
    resolve_cube_contact,
    resolve_ground_collision,
};
use crate::models::{RigidCube, Vec3};
use crate::utils::DEFAULT_CUBE_CONSTANTS;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn cube_at(x: f64, y: f64, z: f64) -> RigidCube {
    RigidCube::new(0, Vec3::new(x, y, z), 0, 0, 0.0)
}

#[test]
fn test_ground_bounce_reverses_with_restitution() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut cube = cube_at(0.0, 0.3, 0.0);
    cube.velocity = Vec3::new(0.0, -5.0, 0.0);

    let touched = resolve_ground_collision(&DEFAULT_CUBE_CONSTANTS, &mut cube, &mut rng);

    assert!(touched);
    assert_float_eq(cube.position.y, 0.0, 1e-12, Some("cube should be clamped onto its target"));
    assert_float_eq(cube.velocity.y, 2.5, 1e-12, Some("bounce should keep half the speed, reversed"));
    // jitter is bounded by 0.1 * |vy|
    assert!(cube.velocity.x.abs() <= 0.25);
    assert!(cube.velocity.z.abs() <= 0.25);
    assert!(cube.angular_velocity.x.abs() <= 0.05);
    assert!(cube.angular_velocity.z.abs() <= 0.05);
    assert_eq!(cube.angular_velocity.y, 0.0);
}

#[test]
fn test_ground_slow_contact_applies_friction() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut cube = cube_at(0.0, 0.0, 0.0);
    cube.velocity = Vec3::new(1.0, 0.05, -2.0);

    resolve_ground_collision(&DEFAULT_CUBE_CONSTANTS, &mut cube, &mut rng);

    assert_float_eq(cube.velocity.x, 0.8, 1e-12, None);
    assert_float_eq(cube.velocity.z, -1.6, 1e-12, None);
    assert_eq!(cube.velocity.y, 0.0);
    assert_eq!(cube.angular_velocity, Vec3::ZERO);
}

#[test]
fn test_ground_bounce_needs_a_real_rebound() {
    let mut rng = StdRng::seed_from_u64(3);

    // above the threshold on the way in, below it once restitution is applied
    let mut slow = cube_at(0.0, 0.0, 0.0);
    slow.velocity = Vec3::new(0.0, 0.15, 0.0);
    resolve_ground_collision(&DEFAULT_CUBE_CONSTANTS, &mut slow, &mut rng);
    assert_eq!(slow.velocity.y, 0.0, "a weak impact is resting contact");

    let mut fast = cube_at(0.0, 0.0, 0.0);
    fast.velocity = Vec3::new(0.0, 0.25, 0.0);
    resolve_ground_collision(&DEFAULT_CUBE_CONSTANTS, &mut fast, &mut rng);
    assert_float_eq(fast.velocity.y, -0.125, 1e-12, None);
}

#[test]
fn test_ground_ignored_above_target() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut cube = cube_at(0.0, -3.0, 0.0);
    cube.velocity = Vec3::new(0.0, 4.0, 0.0);

    assert!(!resolve_ground_collision(&DEFAULT_CUBE_CONSTANTS, &mut cube, &mut rng));
    assert_eq!(cube.position.y, -3.0);
    assert_eq!(cube.velocity.y, 4.0);
}

#[test]
fn test_boundary_reflects_each_axis() {
    let mut cube = cube_at(12.0, 0.0, -10.5);
    cube.velocity = Vec3::new(4.0, 1.0, -2.0);

    resolve_boundary_collision(&DEFAULT_CUBE_CONSTANTS, &mut cube);

    assert_eq!(cube.position.x, 10.0);
    assert_eq!(cube.position.z, -10.0);
    assert_float_eq(cube.velocity.x, -2.0, 1e-12, None);
    assert_float_eq(cube.velocity.z, 1.0, 1e-12, None);
    assert_eq!(cube.velocity.y, 1.0, "boundary must not touch the vertical axis");
}

#[test]
fn test_boundary_leaves_inner_cubes_alone() {
    let mut cube = cube_at(9.9, 0.0, -10.0);
    cube.velocity = Vec3::new(3.0, 0.0, -3.0);

    resolve_boundary_collision(&DEFAULT_CUBE_CONSTANTS, &mut cube);

    assert_eq!(cube.position, Vec3::new(9.9, 0.0, -10.0));
    assert_eq!(cube.velocity, Vec3::new(3.0, 0.0, -3.0));
}

#[test]
fn test_detect_contact() {
    let a = cube_at(1.5, 0.0, 0.0);
    let b = cube_at(0.0, 0.0, 0.0);

    let contact = detect_cube_contact(&a, &b).expect("cubes 1.5 apart should overlap");
    assert_float_eq(contact.overlap, 0.5, 1e-12, None);
    assert_eq!(contact.normal, Vec3::new(1.0, 0.0, 0.0));

    let far = cube_at(2.0, 0.0, 0.0);
    assert!(detect_cube_contact(&far, &b).is_none(), "touching cubes are not overlapping");
}

#[test]
fn test_resolve_contact_conserves_normal_momentum() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut a = cube_at(0.0, 0.0, 0.0);
    let mut b = cube_at(1.2, 0.9, 0.0);
    a.velocity = Vec3::new(3.0, 1.0, 0.5);
    b.velocity = Vec3::new(-1.0, -2.0, 0.0);

    let contact = detect_cube_contact(&a, &b).unwrap();
    let normal = contact.normal;
    let before = a.mass * a.velocity.dot(normal) + b.mass * b.velocity.dot(normal);

    let j = resolve_cube_contact(&DEFAULT_CUBE_CONSTANTS, &mut a, &mut b, &contact, &mut rng);
    let after = a.mass * a.velocity.dot(normal) + b.mass * b.velocity.dot(normal);

    assert!(j > 0.0, "approaching cubes should exchange an impulse");
    assert_relative_eq!(before, after, epsilon = 1e-9);
}

#[test]
fn test_resolve_contact_separates_and_wakes() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut a = cube_at(1.0, 0.0, 0.0);
    let mut b = cube_at(0.0, 0.0, 0.0);
    b.settled = true;

    let contact = detect_cube_contact(&a, &b).unwrap();
    resolve_cube_contact(&DEFAULT_CUBE_CONSTANTS, &mut a, &mut b, &contact, &mut rng);

    assert_float_eq(a.position.x, 1.5, 1e-12, None);
    assert_float_eq(b.position.x, -0.5, 1e-12, None);
    assert_float_eq(a.position.distance(b.position), 2.0, 1e-12, None);
    assert!(!a.settled);
    assert!(!b.settled);
}

#[test]
fn test_resolve_contact_skips_separating_pairs() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut a = cube_at(1.0, 0.0, 0.0);
    let mut b = cube_at(0.0, 0.0, 0.0);
    a.velocity = Vec3::new(2.0, 0.0, 0.0);
    b.velocity = Vec3::new(-2.0, 0.0, 0.0);

    let contact = detect_cube_contact(&a, &b).unwrap();
    let j = resolve_cube_contact(&DEFAULT_CUBE_CONSTANTS, &mut a, &mut b, &contact, &mut rng);

    assert_eq!(j, 0.0);
    assert_eq!(a.velocity, Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(b.velocity, Vec3::new(-2.0, 0.0, 0.0));
    assert_eq!(a.angular_velocity, Vec3::ZERO);
}
