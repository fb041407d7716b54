use std::fmt;
use std::error::Error;

/// Represents errors that can occur while placing or drawing cubes.
///
/// Physics integration never produces an error; every variant here comes from
/// the input or rendering side of the scene.
#[derive(Debug, Clone, PartialEq)]
pub enum CubeSceneError {
    /// A collaborator needed by the operation is missing (e.g. a cube with no texture bound).
    InvalidConfiguration(String),
    /// The affine texture solve hit a zero-extent triangle or produced non-finite values.
    DegenerateGeometry,
    /// A click landed outside the surface bounds.
    OutOfRangeInput { x: f64, y: f64 },
}

impl fmt::Display for CubeSceneError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CubeSceneError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            CubeSceneError::DegenerateGeometry => write!(f, "Degenerate geometry in texture mapping"),
            CubeSceneError::OutOfRangeInput { x, y } => write!(f, "Input ({}, {}) is outside the surface", x, y),
        }
    }
}

impl Error for CubeSceneError {}
