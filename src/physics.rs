// src/physics.rs

use log::{debug, trace};
use rand::Rng;

use crate::interactions::{
    detect_cube_contact,
    resolve_boundary_collision,
    resolve_cube_contact,
    resolve_ground_collision,
};
use crate::models::{RigidCube, Vec3};
pub use crate::utils::CubeConstants;

/// Vertical (upward) component of a click impulse. Up is negative y.
const CLICK_IMPULSE_UP: f64 = -5.0;
/// Horizontal click impulses are drawn from `[-CLICK_IMPULSE_SPREAD / 2, CLICK_IMPULSE_SPREAD / 2)`.
const CLICK_IMPULSE_SPREAD: f64 = 5.0;
/// Largest absolute rotation, in radians, given to a cube when it settles.
const SETTLED_WOBBLE: f64 = 0.05;

impl RigidCube {
    /// Advances a falling cube by `dt` seconds.
    ///
    /// Order per step: gravity and damping, ground, boundary, every neighbour,
    /// rotation, then the settlement check. Settled cubes are left untouched.
    /// `neighbors` must not contain `self`; the borrow checker enforces that.
    ///
    /// # Example
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use rs_cube_stack::models::{RigidCube, Vec3};
    /// use rs_cube_stack::utils::DEFAULT_CUBE_CONSTANTS;
    ///
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let mut cube = RigidCube::new(0, Vec3::new(0.0, -10.0, 0.0), 0, 0, 0.0);
    /// cube.update(0.016, std::iter::empty::<&mut RigidCube>(), &DEFAULT_CUBE_CONSTANTS, &mut rng);
    ///
    /// assert!(cube.velocity.y > 0.0);
    /// assert!(cube.position.y > -10.0);
    /// ```
    pub fn update<'a, I, R>(&mut self, dt: f64, neighbors: I, constants: &CubeConstants, rng: &mut R)
    where
        I: IntoIterator<Item = &'a mut RigidCube>,
        R: Rng,
    {
        if self.settled {
            return;
        }

        self.integrate(dt, constants);
        resolve_ground_collision(constants, self, rng);
        resolve_boundary_collision(constants, self);

        for other in neighbors {
            if let Some(contact) = detect_cube_contact(self, other) {
                resolve_cube_contact(constants, self, other, &contact, rng);
            }
        }

        self.integrate_rotation(dt, constants);
        if self.is_at_rest(constants) {
            self.settle(rng);
        }
    }

    /// Applies gravity, isotropic damping and moves the cube.
    ///
    /// `air_resistance` damps all three axes equally; it is a cheap stand-in
    /// for drag, not a drag model.
    pub fn integrate(&mut self, dt: f64, constants: &CubeConstants) {
        self.velocity.y += constants.gravity * dt;
        self.velocity = self.velocity * constants.air_resistance;
        self.position += self.velocity * dt;
    }

    pub fn integrate_rotation(&mut self, dt: f64, constants: &CubeConstants) {
        self.rotation += self.angular_velocity * dt;
        self.angular_velocity = self.angular_velocity * constants.rotational_damping;
    }

    /// True when the cube has practically stopped at its slot height.
    pub fn is_at_rest(&self, constants: &CubeConstants) -> bool {
        let threshold = constants.settlement_threshold;
        self.velocity.max_abs_component() < threshold
            && (self.position.y - self.target_y).abs() < threshold
    }

    /// Brings the cube to rest at its target height with a slight random tilt.
    pub fn settle<R: Rng>(&mut self, rng: &mut R) {
        self.velocity = Vec3::ZERO;
        self.angular_velocity = Vec3::ZERO;
        self.position.y = self.target_y;
        self.settled = true;

        self.rotation = Vec3::new(
            random_wobble(rng),
            random_wobble(rng),
            random_wobble(rng),
        );
        trace!("cube {} settled at y={}", self.id, self.target_y);
    }

    /// Kicks the cube upward and outward unless it was pushed less than
    /// `click_cooldown` seconds ago.
    ///
    /// Returns whether the impulse was applied.
    pub fn handle_click<R: Rng>(&mut self, now: f64, constants: &CubeConstants, rng: &mut R) -> bool {
        if !self.is_clickable(now) {
            trace!("cube {} ignored click at t={:.3}", self.id, now);
            return false;
        }

        self.velocity += Vec3::new(
            (rng.random::<f64>() - 0.5) * CLICK_IMPULSE_SPREAD,
            CLICK_IMPULSE_UP,
            (rng.random::<f64>() - 0.5) * CLICK_IMPULSE_SPREAD,
        );
        self.settled = false;
        self.next_impulse_at = now + constants.click_cooldown;
        debug!("cube {} pushed at t={:.3}", self.id, now);
        true
    }
}

fn random_wobble<R: Rng>(rng: &mut R) -> f64 {
    rng.random::<f64>() * 2.0 * SETTLED_WOBBLE - SETTLED_WOBBLE
}

/// Steps every cube once, in insertion order, against all of the others.
///
/// Each cube sees its neighbours' state as already updated earlier in the
/// same pass, matching a sequential per-object update loop.
pub fn update_cubes<R: Rng>(cubes: &mut [RigidCube], dt: f64, constants: &CubeConstants, rng: &mut R) {
    for index in 0..cubes.len() {
        let (before, rest) = cubes.split_at_mut(index);
        if let Some((cube, after)) = rest.split_first_mut() {
            cube.update(dt, before.iter_mut().chain(after.iter_mut()), constants, rng);
        }
    }
}
