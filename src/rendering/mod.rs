mod surface;
mod geometry;
mod projection;
mod texture_mapping;
mod pipeline;
mod recording;

pub use surface::*;
pub use geometry::*;
pub use projection::*;
pub use texture_mapping::*;
pub use pipeline::*;
pub use recording::*;

#[cfg(test)]
mod pipeline_tests;
