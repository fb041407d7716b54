use crate::models::{Vec2, Vec3};

/// Corners of the unit cube centred on the origin.
pub const UNIT_CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
];

/// Texture coordinates shared by every face, in the same order as the face's vertices.
pub const FACE_UVS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceName {
    Front,
    Right,
    Back,
    Left,
    Top,
    Bottom,
}

/// One quad of the cube: its vertex indices in winding order and its UVs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeFace {
    pub name: FaceName,
    pub vertices: [usize; 4],
    pub uvs: [Vec2; 4],
}

pub const CUBE_FACES: [CubeFace; 6] = [
    CubeFace { name: FaceName::Front, vertices: [0, 1, 2, 3], uvs: FACE_UVS },
    CubeFace { name: FaceName::Right, vertices: [1, 5, 6, 2], uvs: FACE_UVS },
    CubeFace { name: FaceName::Back, vertices: [5, 4, 7, 6], uvs: FACE_UVS },
    CubeFace { name: FaceName::Left, vertices: [4, 0, 3, 7], uvs: FACE_UVS },
    CubeFace { name: FaceName::Top, vertices: [3, 2, 6, 7], uvs: FACE_UVS },
    CubeFace { name: FaceName::Bottom, vertices: [4, 5, 1, 0], uvs: FACE_UVS },
];
