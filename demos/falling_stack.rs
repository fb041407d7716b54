// demos/falling_stack.rs
// Run with RUST_LOG=debug to watch cubes spawn and settle.

use std::collections::VecDeque;
use std::error::Error;

use rs_cube_stack::rendering::{RecordingSurface, TextureHandle};
use rs_cube_stack::scene::{CubeScene, InputSource};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const FRAME: f64 = 1.0 / 60.0;

/// Clicks a few columns, waits, then pokes the first cube.
struct ScriptedClicks {
    frame: u64,
    last_frame: u64,
    schedule: VecDeque<(u64, f64, f64)>,
}

impl InputSource for ScriptedClicks {
    fn poll_click(&mut self) -> Option<(f64, f64)> {
        match self.schedule.front() {
            Some(&(at, x, y)) if at <= self.frame => {
                self.schedule.pop_front();
                Some((x, y))
            }
            _ => None,
        }
    }

    fn next_tick(&mut self) -> Option<f64> {
        if self.frame >= self.last_frame {
            return None;
        }
        self.frame += 1;
        Some(FRAME)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut scene = CubeScene::with_seed(WIDTH, HEIGHT, 7);
    scene.set_texture(TextureHandle::new(0, 64, 64));

    let mut input = ScriptedClicks {
        frame: 0,
        last_frame: 600,
        schedule: VecDeque::from(vec![
            (0, 250.0, 130.0),
            (30, 250.0, 130.0),
            (60, 250.0, 130.0),
            (90, 650.0, 450.0),
            (120, 90.0, 500.0),
        ]),
    };
    let mut surface = RecordingSurface::new(WIDTH, HEIGHT);

    let frames = scene.run(&mut input, &mut surface)?;

    println!("Ran {} frames ({:.2} s simulated)", frames, scene.clock());
    for cube in scene.cubes() {
        println!(
            "cube {}: column ({}, {}), y={:.3} target={:.1} {:?}",
            cube.id,
            cube.grid_x,
            cube.grid_z,
            cube.position.y,
            cube.target_y,
            cube.state()
        );
    }
    println!("Last frame issued {} draw commands", surface.commands.len());

    Ok(())
}
