use crate::models::Vec3;
use crate::rendering::TextureHandle;

/// Radius of the sphere used to approximate a cube in pairwise collisions.
///
/// Half the rendered edge length, so face-to-face neighbours touch without overlapping.
pub const DEFAULT_CUBE_SIZE: f64 = 1.0;
pub const DEFAULT_CUBE_MASS: f64 = 1.0;

/// The two states a cube moves between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeState {
    /// Integrating motion every tick.
    Falling,
    /// At rest in its stack slot; `update` is a no-op until something pushes it.
    Settled,
}

/// A cube with its own simplified rigid-body state.
///
/// Invariant: when `settled` is true both velocities are zero and
/// `position.y == target_y`.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidCube {
    pub id: u64,
    pub position: Vec3,
    /// Euler angles in radians, applied X then Y then Z.
    pub rotation: Vec3,
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
    pub grid_x: i64,
    pub grid_z: i64,
    pub target_y: f64,
    pub settled: bool,
    pub size: f64,
    pub mass: f64,
    /// Earliest time (seconds) at which a click impulse is accepted again.
    pub next_impulse_at: f64,
    pub texture: Option<TextureHandle>,
}

impl RigidCube {
    /// Creates a falling cube at rest in the given stack column.
    ///
    /// # Example
    /// ```
    /// use rs_cube_stack::models::{CubeState, RigidCube, Vec3};
    ///
    /// let cube = RigidCube::new(0, Vec3::new(0.0, -10.0, 0.0), 0, 0, 0.0);
    /// assert_eq!(cube.state(), CubeState::Falling);
    /// assert!(cube.texture.is_none());
    /// ```
    pub fn new(id: u64, position: Vec3, grid_x: i64, grid_z: i64, target_y: f64) -> Self {
        RigidCube {
            id,
            position,
            rotation: Vec3::ZERO,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            grid_x,
            grid_z,
            target_y,
            settled: false,
            size: DEFAULT_CUBE_SIZE,
            mass: DEFAULT_CUBE_MASS,
            next_impulse_at: f64::NEG_INFINITY,
            texture: None,
        }
    }

    pub fn with_texture(mut self, texture: TextureHandle) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn bind_texture(&mut self, texture: TextureHandle) {
        self.texture = Some(texture);
    }

    pub fn state(&self) -> CubeState {
        if self.settled {
            CubeState::Settled
        } else {
            CubeState::Falling
        }
    }

    pub fn is_clickable(&self, now: f64) -> bool {
        now >= self.next_impulse_at
    }

    pub fn unsettle(&mut self) {
        self.settled = false;
    }
}
