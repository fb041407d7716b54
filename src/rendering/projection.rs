use crate::models::{RigidCube, Vec2, Vec3};
use crate::rendering::{CubeFace, UNIT_CUBE_VERTICES};
use crate::utils::ProjectionConstants;

/// A cube's eight corners after transformation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedCube {
    /// Rotated, scaled and translated corners, before the perspective divide.
    pub camera_space: [Vec3; 8],
    /// The same corners in surface pixels.
    pub screen: [Vec2; 8],
}

/// Projects a camera-space point onto a surface of the given size.
pub fn project_point(point: Vec3, width: u32, height: u32, projection: &ProjectionConstants) -> Vec2 {
    let scale = projection.perspective_scale(point.z);
    Vec2::new(
        width as f64 / 2.0 + point.x * scale,
        height as f64 / 2.0 + point.y * scale,
    )
}

/// Rotates (X, Y, Z order), scales, translates and projects the unit cube's
/// corners for `cube`.
///
/// # Example
/// ```
/// use rs_cube_stack::models::{RigidCube, Vec2, Vec3};
/// use rs_cube_stack::rendering::transform_vertices;
/// use rs_cube_stack::utils::DEFAULT_PROJECTION_CONSTANTS;
///
/// let cube = RigidCube::new(0, Vec3::ZERO, 0, 0, 0.0);
/// let projected = transform_vertices(&cube, 800, 600, &DEFAULT_PROJECTION_CONSTANTS);
///
/// // corner (0.5, 0.5, 0.5) lands at z = 1, where the perspective scale is 25
/// assert_eq!(projected.screen[6], Vec2::new(425.0, 325.0));
/// ```
pub fn transform_vertices(
    cube: &RigidCube,
    width: u32,
    height: u32,
    projection: &ProjectionConstants,
) -> ProjectedCube {
    let camera_space = UNIT_CUBE_VERTICES.map(|vertex| {
        vertex.rotate_euler(cube.rotation) * projection.vertex_scale + cube.position
    });
    let screen = camera_space.map(|point| project_point(point, width, height, projection));

    ProjectedCube { camera_space, screen }
}

/// Mean camera-space depth of a face's corners.
pub fn face_depth(face: &CubeFace, camera_space: &[Vec3; 8]) -> f64 {
    face.vertices.iter().map(|&i| camera_space[i].z).sum::<f64>() / face.vertices.len() as f64
}

/// Painter's order: farthest face (largest z) first, nearest last.
///
/// Ties keep their input order. Exact only for convex, non-overlapping
/// geometry, which is all a single cube ever is.
pub fn sort_faces_by_depth(faces: &[CubeFace], camera_space: &[Vec3; 8]) -> Vec<CubeFace> {
    let mut sorted = faces.to_vec();
    sorted.sort_by(|a, b| face_depth(b, camera_space).total_cmp(&face_depth(a, camera_space)));
    sorted
}

/// Screen position of the cube's centre.
pub fn screen_position(cube: &RigidCube, width: u32, height: u32, projection: &ProjectionConstants) -> Vec2 {
    project_point(cube.position, width, height, projection)
}

/// Screen-space hit test against a square around the cube's projected centre.
pub fn contains_point(
    cube: &RigidCube,
    x: f64,
    y: f64,
    width: u32,
    height: u32,
    projection: &ProjectionConstants,
) -> bool {
    let centre = screen_position(cube, width, height, projection);
    let half_size = cube.size * projection.hit_half_extent_px;

    x >= centre.x - half_size
        && x <= centre.x + half_size
        && y >= centre.y - half_size
        && y <= centre.y + half_size
}
