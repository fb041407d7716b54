mod vector;
mod rigid_cube;

pub use vector::*;
pub use rigid_cube::*;

#[cfg(test)]
mod vector_tests;
