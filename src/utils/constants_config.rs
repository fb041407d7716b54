// src/utils/constants_config.rs
use crate::rendering::Rgba;
use crate::utils::{
    DEFAULT_CUBE_CONSTANTS,
    DEFAULT_PROJECTION_CONSTANTS,
    DEFAULT_STACK_CONSTANTS,
};

/// Physical constants shared by every cube in a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeConstants {
    /// Downward acceleration. Screen space grows downward, so this is positive.
    pub gravity: f64,
    /// Fraction of the normal velocity kept (and reversed) after a bounce.
    pub restitution: f64,
    /// Multiplier applied to horizontal velocity while resting on the ground.
    pub friction: f64,
    /// Per-step isotropic velocity damping.
    pub air_resistance: f64,
    /// Per-step angular velocity damping.
    pub rotational_damping: f64,
    /// Minimum vertical speed that still produces a bounce.
    pub collision_threshold: f64,
    /// Velocity and height error below which a cube settles.
    pub settlement_threshold: f64,
    /// Half-width of the square region cubes are kept in on X and Z.
    pub boundary: f64,
    /// Seconds a cube ignores further clicks after being pushed.
    pub click_cooldown: f64,
}

impl Default for CubeConstants {
    fn default() -> Self {
        DEFAULT_CUBE_CONSTANTS
    }
}

impl CubeConstants {
    pub fn new(
        gravity: Option<f64>,
        restitution: Option<f64>,
        friction: Option<f64>,
        boundary: Option<f64>,
        click_cooldown: Option<f64>,
    ) -> Self {
        let default = DEFAULT_CUBE_CONSTANTS;
        Self {
            gravity: gravity.unwrap_or(default.gravity),
            restitution: restitution.unwrap_or(default.restitution),
            friction: friction.unwrap_or(default.friction),
            boundary: boundary.unwrap_or(default.boundary),
            click_cooldown: click_cooldown.unwrap_or(default.click_cooldown),
            ..default
        }
    }
}

/// Camera and styling parameters for the projection pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConstants {
    /// Numerator of the perspective divide (`K`).
    pub focal_length: f64,
    /// Distance added to camera-space z before the divide (`D`).
    pub camera_distance: f64,
    /// Scale applied to the unit cube so that it is drawn with this edge length.
    pub vertex_scale: f64,
    /// Half extent, in pixels per unit of cube size, of the click hit box.
    pub hit_half_extent_px: f64,
    pub edge_color: Rgba,
    pub background_color: Rgba,
}

impl Default for ProjectionConstants {
    fn default() -> Self {
        DEFAULT_PROJECTION_CONSTANTS
    }
}

impl ProjectionConstants {
    pub fn new(focal_length: Option<f64>, camera_distance: Option<f64>, vertex_scale: Option<f64>) -> Self {
        let default = DEFAULT_PROJECTION_CONSTANTS;
        Self {
            focal_length: focal_length.unwrap_or(default.focal_length),
            camera_distance: camera_distance.unwrap_or(default.camera_distance),
            vertex_scale: vertex_scale.unwrap_or(default.vertex_scale),
            ..default
        }
    }

    /// Perspective scale factor for a camera-space depth.
    ///
    /// Depths at or behind the camera plane yield non-finite or negative
    /// scales; the texture solve rejects those faces downstream.
    ///
    /// # Example
    /// ```
    /// use rs_cube_stack::utils::DEFAULT_PROJECTION_CONSTANTS;
    ///
    /// assert_eq!(DEFAULT_PROJECTION_CONSTANTS.perspective_scale(1.0), 25.0);
    /// ```
    pub fn perspective_scale(&self, z: f64) -> f64 {
        self.focal_length / (z + self.camera_distance)
    }
}

/// Parameters mapping screen clicks onto stack columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackConstants {
    /// Grid cell size as a fraction of the surface width (for X) and height (for Z).
    pub cell_fraction: f64,
    /// World-space spacing between neighbouring columns.
    pub cell_world_size: f64,
    /// Subtracted from the column coordinate so the grid straddles the origin.
    pub world_offset: f64,
    /// Height each stacked cube occupies.
    pub layer_height: f64,
    /// How far above its slot a new cube appears.
    pub spawn_drop: f64,
}

impl Default for StackConstants {
    fn default() -> Self {
        DEFAULT_STACK_CONSTANTS
    }
}

impl StackConstants {
    pub fn target_y_for(&self, occupancy: u32) -> f64 {
        occupancy as f64 * self.layer_height
    }

    pub fn world_coordinate(&self, cell: i64) -> f64 {
        cell as f64 * self.cell_world_size - self.world_offset
    }
}
