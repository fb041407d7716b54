// rs_cube_stack_wasm/src/lib.rs
// Browser binding: drives a cube scene on a 2D canvas.

mod canvas_surface;

pub use canvas_surface::CanvasSurface;

use rs_cube_stack::rendering::Surface;
use rs_cube_stack::scene::{ClickOutcome, CubeScene};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

#[wasm_bindgen]
pub struct WasmCubeScene {
    scene: CubeScene,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl WasmCubeScene {
    /// Builds a scene drawing onto `ctx`, textured with an already loaded `image`.
    ///
    /// The browser gives no OS entropy to wasm, so the jitter RNG is always
    /// seeded by the caller, e.g. with `Date.now()`. Equal seeds replay the
    /// same scene.
    #[wasm_bindgen(constructor)]
    pub fn new(ctx: CanvasRenderingContext2d, image: HtmlImageElement, seed: f64) -> Self {
        let mut surface = CanvasSurface::new(ctx);
        let texture = surface.add_texture(image);

        let (width, height) = (surface.width(), surface.height());
        let mut scene = CubeScene::with_seed(width, height, seed_from_js(seed));
        scene.set_texture(texture);

        Self { scene, surface }
    }

    /// Handles a click in canvas pixels at time `now` (seconds).
    ///
    /// Returns whether the click pushed or spawned a cube.
    #[wasm_bindgen]
    pub fn click(&mut self, x: f64, y: f64, now: f64) -> bool {
        self.scene.resize(self.surface.width(), self.surface.height());
        matches!(
            self.scene.click(x, y, now),
            ClickOutcome::Pushed(_) | ClickOutcome::Spawned(_)
        )
    }

    #[wasm_bindgen]
    pub fn tick(&mut self, dt: f64) {
        self.scene.tick(dt);
    }

    /// Draws the current frame and returns the number of faces drawn.
    #[wasm_bindgen]
    pub fn render(&mut self) -> Result<usize, JsValue> {
        self.scene
            .render(&mut self.surface)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn cube_count(&self) -> usize {
        self.scene.cubes().len()
    }
}

/// JS numbers are doubles; whole values up to 2^53 map onto themselves, anything
/// else (fractions, NaN, negatives) keeps its bit pattern so it still seeds distinctly.
fn seed_from_js(seed: f64) -> u64 {
    if seed.is_finite() && seed >= 0.0 && seed.fract() == 0.0 && seed <= 9_007_199_254_740_992.0 {
        seed as u64
    } else {
        seed.to_bits()
    }
}
