use log::trace;
use rand::Rng;

use crate::models::{RigidCube, Vec3};
use crate::utils::CubeConstants;

/// Penetration data for two overlapping cubes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeContact {
    /// How far the two collision spheres overlap.
    pub overlap: f64,
    /// Unit vector pointing from the second cube towards the first.
    pub normal: Vec3,
}

/// Clamps a cube onto its resting height and bounces or brakes it.
///
/// Does nothing while the cube is still above its slot (`position.y < target_y`,
/// screen space grows downward). An impact bounces only if the rebound speed
/// (after restitution) is above `collision_threshold`; the bounce picks up a
/// little horizontal and angular jitter. Anything slower is resting contact:
/// the cube stops vertically and bleeds horizontal speed through friction.
///
/// Judging the rebound rather than the incoming speed keeps the single step
/// of gravity a resting cube picks up from re-triggering a bounce forever.
///
/// Returns `true` when the cube touched the ground this step.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rs_cube_stack::interactions::resolve_ground_collision;
/// use rs_cube_stack::models::{RigidCube, Vec3};
/// use rs_cube_stack::utils::DEFAULT_CUBE_CONSTANTS;
///
/// let mut cube = RigidCube::new(0, Vec3::new(0.0, 0.0, 0.0), 0, 0, 0.0);
/// cube.velocity = Vec3::new(0.0, -5.0, 0.0);
/// let mut rng = StdRng::seed_from_u64(7);
///
/// assert!(resolve_ground_collision(&DEFAULT_CUBE_CONSTANTS, &mut cube, &mut rng));
/// assert_eq!(cube.velocity.y, 2.5);
/// ```
pub fn resolve_ground_collision<R: Rng>(
    constants: &CubeConstants,
    cube: &mut RigidCube,
    rng: &mut R,
) -> bool {
    if cube.position.y < cube.target_y {
        return false;
    }

    cube.position.y = cube.target_y;

    let rebound = cube.velocity.y.abs() * constants.restitution;
    if rebound > constants.collision_threshold {
        cube.velocity.y = -cube.velocity.y * constants.restitution;

        let bounce_speed = cube.velocity.y.abs();
        cube.velocity.x += (rng.random::<f64>() - 0.5) * bounce_speed * 0.2;
        cube.velocity.z += (rng.random::<f64>() - 0.5) * bounce_speed * 0.2;

        cube.angular_velocity.x += (rng.random::<f64>() - 0.5) * 0.1;
        cube.angular_velocity.z += (rng.random::<f64>() - 0.5) * 0.1;
        trace!("cube {} bounced with vy={:.3}", cube.id, cube.velocity.y);
    } else {
        // resting contact: the ground cancels what is left of the fall
        cube.velocity.y = 0.0;
        cube.velocity.x *= constants.friction;
        cube.velocity.z *= constants.friction;
    }

    true
}

/// Keeps a cube inside the square `[-boundary, boundary]` on X and Z,
/// reflecting the velocity on each axis it crossed.
pub fn resolve_boundary_collision(constants: &CubeConstants, cube: &mut RigidCube) {
    let bounds = constants.boundary;

    if cube.position.x.abs() > bounds {
        cube.position.x = cube.position.x.signum() * bounds;
        cube.velocity.x *= -constants.restitution;
    }
    if cube.position.z.abs() > bounds {
        cube.position.z = cube.position.z.signum() * bounds;
        cube.velocity.z *= -constants.restitution;
    }
}

/// Sphere-approximate overlap test between two cubes.
///
/// Returns `None` when the centres are at least `size_a + size_b` apart.
/// Coincident centres overlap fully but yield a zero normal, so only the
/// velocity exchange (not the separation) has any effect for them.
pub fn detect_cube_contact(a: &RigidCube, b: &RigidCube) -> Option<CubeContact> {
    let delta = a.position - b.position;
    let distance = delta.length();
    let min_distance = a.size + b.size;

    if distance < min_distance {
        Some(CubeContact {
            overlap: min_distance - distance,
            normal: delta.normalize(),
        })
    } else {
        None
    }
}

/// Pushes two overlapping cubes apart and exchanges an impulse along the
/// contact normal.
///
/// Both cubes are separated by half the overlap regardless of their motion.
/// The impulse is skipped when they are already separating. Either way both
/// cubes are woken up.
///
/// Returns the impulse magnitude that was applied, `0.0` when separating.
pub fn resolve_cube_contact<R: Rng>(
    constants: &CubeConstants,
    a: &mut RigidCube,
    b: &mut RigidCube,
    contact: &CubeContact,
    rng: &mut R,
) -> f64 {
    let push = contact.normal * (contact.overlap / 2.0);
    a.position += push;
    b.position -= push;

    a.unsettle();
    b.unsettle();

    let relative_velocity = a.velocity - b.velocity;
    let vel_along_normal = relative_velocity.dot(contact.normal);

    if vel_along_normal > 0.0 {
        return 0.0;
    }

    let j = -(1.0 + constants.restitution) * vel_along_normal;
    let impulse = contact.normal * j;

    a.velocity += impulse * (1.0 / a.mass);
    b.velocity -= impulse * (1.0 / b.mass);

    a.angular_velocity += random_spin(rng);
    b.angular_velocity += random_spin(rng);

    trace!("cubes {} and {} exchanged impulse {:.3}", a.id, b.id, j);
    j
}

fn random_spin<R: Rng>(rng: &mut R) -> Vec3 {
    Vec3::new(
        rng.random::<f64>() * 0.2 - 0.1,
        rng.random::<f64>() * 0.2 - 0.1,
        rng.random::<f64>() * 0.2 - 0.1,
    )
}
