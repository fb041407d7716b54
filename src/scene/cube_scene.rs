use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::errors::CubeSceneError;
use crate::models::RigidCube;
use crate::physics::update_cubes;
use crate::rendering::{contains_point, render_frame, Surface, TextureHandle};
use crate::scene::StackGrid;
use crate::utils::{CubeConstants, ProjectionConstants, StackConstants};

/// Produces pointer clicks and frame ticks for [`CubeScene::run`].
pub trait InputSource {
    /// Next pending click in surface pixels, if any.
    fn poll_click(&mut self) -> Option<(f64, f64)>;

    /// Seconds elapsed since the previous frame, or `None` once the source is exhausted.
    fn next_tick(&mut self) -> Option<f64>;
}

/// What a click did to the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    /// The cube under the pointer received an impulse.
    Pushed(u64),
    /// The cube under the pointer is still cooling down from its last push.
    Debounced(u64),
    /// Nothing was hit, so a new cube was stacked into the column under the pointer.
    Spawned(u64),
    /// The click was outside the surface.
    Ignored,
}

/// A set of cubes falling into stack columns, with the state needed to
/// advance and draw them.
///
/// Cubes are kept in insertion order and never removed. Clicks are handled
/// between ticks.
pub struct CubeScene {
    width: u32,
    height: u32,
    cubes: Vec<RigidCube>,
    grid: StackGrid,
    constants: CubeConstants,
    projection: ProjectionConstants,
    texture: Option<TextureHandle>,
    rng: StdRng,
    next_id: u64,
    clock: f64,
}

impl CubeScene {
    /// Creates an empty scene for a `width` x `height` surface with default
    /// constants and an entropy-seeded RNG.
    ///
    /// Needs the `os_rng` feature (on by default); use [`CubeScene::with_seed`]
    /// where the platform has no entropy source.
    ///
    /// # Example
    /// ```
    /// use rs_cube_stack::scene::CubeScene;
    ///
    /// let scene = CubeScene::new(800, 600);
    /// assert!(scene.cubes().is_empty());
    /// ```
    #[cfg(feature = "os_rng")]
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_rng(
            width,
            height,
            CubeConstants::default(),
            ProjectionConstants::default(),
            StackConstants::default(),
            StdRng::from_os_rng(),
        )
    }

    /// Creates a scene whose random jitter is reproducible.
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Self {
        Self::with_rng(
            width,
            height,
            CubeConstants::default(),
            ProjectionConstants::default(),
            StackConstants::default(),
            StdRng::seed_from_u64(seed),
        )
    }

    pub fn with_rng(
        width: u32,
        height: u32,
        constants: CubeConstants,
        projection: ProjectionConstants,
        stack: StackConstants,
        rng: StdRng,
    ) -> Self {
        CubeScene {
            width,
            height,
            cubes: Vec::new(),
            grid: StackGrid::new(stack),
            constants,
            projection,
            texture: None,
            rng,
            next_id: 0,
            clock: 0.0,
        }
    }

    /// Binds the texture used for every cube, including ones already spawned.
    pub fn set_texture(&mut self, texture: TextureHandle) {
        self.texture = Some(texture);
        for cube in &mut self.cubes {
            cube.bind_texture(texture);
        }
    }

    /// Tracks the surface size used to map clicks to columns and cubes.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn cubes(&self) -> &[RigidCube] {
        &self.cubes
    }

    pub fn grid(&self) -> &StackGrid {
        &self.grid
    }

    /// Seconds of simulated time since the scene was created.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Routes a click at time `now`: the top-most cube under the pointer is
    /// pushed, otherwise a new cube is stacked into the column below it.
    pub fn click(&mut self, x: f64, y: f64, now: f64) -> ClickOutcome {
        let (width, height) = (self.width, self.height);
        let projection = self.projection;
        let hit = self
            .cubes
            .iter_mut()
            .rev()
            .find(|cube| contains_point(cube, x, y, width, height, &projection));

        if let Some(cube) = hit {
            let id = cube.id;
            return if cube.handle_click(now, &self.constants, &mut self.rng) {
                ClickOutcome::Pushed(id)
            } else {
                ClickOutcome::Debounced(id)
            };
        }

        match self.spawn_at(x, y) {
            Ok(id) => ClickOutcome::Spawned(id),
            Err(e) => {
                warn!("Ignoring click: {}", e);
                ClickOutcome::Ignored
            }
        }
    }

    /// Stacks a new cube into the column under `(x, y)` and returns its id.
    pub fn spawn_at(&mut self, x: f64, y: f64) -> Result<u64, CubeSceneError> {
        let placement = self.grid.place(x, y, self.width, self.height)?;

        let id = self.next_id;
        self.next_id += 1;

        let mut cube = RigidCube::new(id, placement.spawn, placement.grid_x, placement.grid_z, placement.target_y);
        cube.texture = self.texture;
        self.cubes.push(cube);

        debug!(
            "spawned cube {} in column ({}, {}) with target y={}",
            id, placement.grid_x, placement.grid_z, placement.target_y
        );
        Ok(id)
    }

    /// Advances every cube by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        self.clock += dt;
        update_cubes(&mut self.cubes, dt, &self.constants, &mut self.rng);
    }

    /// Draws the whole scene and returns the number of faces drawn.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<usize, CubeSceneError> {
        self.resize(surface.width(), surface.height());
        render_frame(surface, &self.cubes, &self.projection)
    }

    /// Drives the scene from `input` until it stops producing ticks: pending
    /// clicks first, then one update and one render per tick.
    ///
    /// Returns the number of frames rendered.
    pub fn run<I, S>(&mut self, input: &mut I, surface: &mut S) -> Result<u64, CubeSceneError>
    where
        I: InputSource + ?Sized,
        S: Surface + ?Sized,
    {
        self.resize(surface.width(), surface.height());
        let mut frames = 0;

        loop {
            while let Some((x, y)) = input.poll_click() {
                self.click(x, y, self.clock);
            }
            let Some(dt) = input.next_tick() else {
                break;
            };

            self.tick(dt);
            self.render(surface)?;
            frames += 1;
        }

        info!("Scene ran {} frame(s) with {} cube(s)", frames, self.cubes.len());
        Ok(frames)
    }
}
