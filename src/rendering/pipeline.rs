use log::warn;
use rayon::prelude::*;

use crate::errors::CubeSceneError;
use crate::models::{RigidCube, Vec2};
use crate::rendering::{
    face_texture_transform,
    sort_faces_by_depth,
    transform_vertices,
    CubeFace,
    ProjectedCube,
    Surface,
    TextureHandle,
    CUBE_FACES,
};
use crate::utils::ProjectionConstants;

fn trace_face_path<S: Surface + ?Sized>(surface: &mut S, face: &CubeFace, screen: &[Vec2; 8]) {
    surface.begin_path();
    let first = screen[face.vertices[0]];
    surface.move_to(first.x, first.y);
    for &index in &face.vertices[1..] {
        let point = screen[index];
        surface.line_to(point.x, point.y);
    }
    surface.close_path();
}

/// Fills one face with the texture and outlines it.
///
/// The texture transform is solved before anything is drawn, so a
/// degenerate face leaves the surface untouched.
pub fn render_face<S: Surface + ?Sized>(
    surface: &mut S,
    face: &CubeFace,
    screen: &[Vec2; 8],
    texture: &TextureHandle,
    projection: &ProjectionConstants,
) -> Result<(), CubeSceneError> {
    let transform = face_texture_transform(face, screen, texture)?;

    trace_face_path(surface, face, screen);
    surface.fill_with_pattern(texture, &transform);

    trace_face_path(surface, face, screen);
    surface.stroke_path(&projection.edge_color);
    Ok(())
}

/// Draws an already projected cube back to front.
///
/// Returns the number of faces drawn. Faces whose texture mapping is
/// degenerate are logged and skipped; a cube without a texture is a
/// configuration error.
pub fn draw_projected_cube<S: Surface + ?Sized>(
    surface: &mut S,
    cube: &RigidCube,
    projected: &ProjectedCube,
    projection: &ProjectionConstants,
) -> Result<usize, CubeSceneError> {
    let texture = cube.texture.ok_or_else(|| {
        CubeSceneError::InvalidConfiguration(format!("cube {} has no texture bound", cube.id))
    })?;

    let mut drawn = 0;
    for face in sort_faces_by_depth(&CUBE_FACES, &projected.camera_space) {
        match render_face(surface, &face, &projected.screen, &texture, projection) {
            Ok(()) => drawn += 1,
            Err(CubeSceneError::DegenerateGeometry) => {
                warn!("Skipping degenerate {:?} face of cube {}", face.name, cube.id);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(drawn)
}

/// Projects and draws a single cube.
///
/// # Example
/// ```
/// use rs_cube_stack::models::{RigidCube, Vec3};
/// use rs_cube_stack::rendering::{render_cube, RecordingSurface, TextureHandle};
/// use rs_cube_stack::utils::DEFAULT_PROJECTION_CONSTANTS;
///
/// let mut surface = RecordingSurface::new(800, 600);
/// let cube = RigidCube::new(0, Vec3::ZERO, 0, 0, 0.0).with_texture(TextureHandle::new(0, 64, 64));
///
/// let drawn = render_cube(&mut surface, &cube, &DEFAULT_PROJECTION_CONSTANTS).unwrap();
/// assert_eq!(drawn, 6);
/// ```
pub fn render_cube<S: Surface + ?Sized>(
    surface: &mut S,
    cube: &RigidCube,
    projection: &ProjectionConstants,
) -> Result<usize, CubeSceneError> {
    let projected = transform_vertices(cube, surface.width(), surface.height(), projection);
    draw_projected_cube(surface, cube, &projected, projection)
}

/// Clears the surface and draws every cube in order.
///
/// Projection is pure, so it runs across the rayon pool; the draw calls
/// themselves are issued sequentially in cube order. Returns the total
/// number of faces drawn.
pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    cubes: &[RigidCube],
    projection: &ProjectionConstants,
) -> Result<usize, CubeSceneError> {
    surface.clear();
    surface.fill_rect(&projection.background_color);

    let (width, height) = (surface.width(), surface.height());
    let projected: Vec<ProjectedCube> = cubes
        .par_iter()
        .map(|cube| transform_vertices(cube, width, height, projection))
        .collect();

    let mut drawn = 0;
    for (cube, projected) in cubes.iter().zip(projected.iter()) {
        drawn += draw_projected_cube(surface, cube, projected, projection)?;
    }
    Ok(drawn)
}
