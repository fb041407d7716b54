use std::collections::HashMap;

use log::trace;

use crate::errors::CubeSceneError;
use crate::models::Vec3;
use crate::utils::StackConstants;

/// Where a newly placed cube belongs and where it starts falling from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub grid_x: i64,
    pub grid_z: i64,
    pub target_y: f64,
    pub spawn: Vec3,
}

/// Number of cubes spawned into each stack column.
///
/// Occupancy is reserved when a cube is spawned, not when it lands, and is
/// never decremented.
#[derive(Debug, Clone, Default)]
pub struct StackGrid {
    constants: StackConstants,
    occupancy: HashMap<(i64, i64), u32>,
}

impl StackGrid {
    pub fn new(constants: StackConstants) -> Self {
        StackGrid {
            constants,
            occupancy: HashMap::new(),
        }
    }

    pub fn constants(&self) -> &StackConstants {
        &self.constants
    }

    /// Maps a click on a `width` x `height` surface to a stack column.
    ///
    /// # Example
    /// ```
    /// use rs_cube_stack::scene::StackGrid;
    /// use rs_cube_stack::utils::DEFAULT_STACK_CONSTANTS;
    ///
    /// let grid = StackGrid::new(DEFAULT_STACK_CONSTANTS);
    /// assert_eq!(grid.grid_position_for(250.0, 130.0, 800, 600), Ok((3, 2)));
    /// assert!(grid.grid_position_for(-1.0, 130.0, 800, 600).is_err());
    /// ```
    pub fn grid_position_for(&self, x: f64, y: f64, width: u32, height: u32) -> Result<(i64, i64), CubeSceneError> {
        let (w, h) = (width as f64, height as f64);
        if !(x >= 0.0 && x < w && y >= 0.0 && y < h) {
            return Err(CubeSceneError::OutOfRangeInput { x, y });
        }

        let cell_w = w * self.constants.cell_fraction;
        let cell_h = h * self.constants.cell_fraction;
        Ok(((x / cell_w).floor() as i64, (y / cell_h).floor() as i64))
    }

    pub fn stack_height_at(&self, grid_x: i64, grid_z: i64) -> u32 {
        self.occupancy.get(&(grid_x, grid_z)).copied().unwrap_or(0)
    }

    /// Claims the next slot in a column and returns its occupancy before the claim.
    pub fn reserve(&mut self, grid_x: i64, grid_z: i64) -> u32 {
        let count = self.occupancy.entry((grid_x, grid_z)).or_insert(0);
        let below = *count;
        *count += 1;
        below
    }

    /// Reserves the next slot in the column under `(x, y)` and computes the
    /// cube's resting height and spawn point.
    pub fn place(&mut self, x: f64, y: f64, width: u32, height: u32) -> Result<Placement, CubeSceneError> {
        let (grid_x, grid_z) = self.grid_position_for(x, y, width, height)?;
        let below = self.reserve(grid_x, grid_z);
        let target_y = self.constants.target_y_for(below);

        let spawn = Vec3::new(
            self.constants.world_coordinate(grid_x),
            target_y - self.constants.spawn_drop,
            self.constants.world_coordinate(grid_z),
        );
        trace!("column ({}, {}) now holds {} cube(s)", grid_x, grid_z, below + 1);

        Ok(Placement { grid_x, grid_z, target_y, spawn })
    }

    pub fn columns(&self) -> usize {
        self.occupancy.len()
    }
}
