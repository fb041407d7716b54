mod stack_grid;
mod cube_scene;

pub use stack_grid::*;
pub use cube_scene::*;
