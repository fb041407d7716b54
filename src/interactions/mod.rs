mod cube_collisions;

pub use cube_collisions::*;

#[cfg(test)]
mod cube_collisions_tests;
