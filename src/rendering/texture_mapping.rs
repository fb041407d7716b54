use crate::errors::CubeSceneError;
use crate::models::Vec2;
use crate::rendering::{AffineTransform, CubeFace, TextureHandle};

/// Source triangles with a smaller (absolute) signed double area are treated as degenerate.
const MIN_SOURCE_AREA: f64 = 1e-12;

/// Solves the affine transform that carries the three `src` points onto the
/// three `dst` points.
///
/// Fails with `DegenerateGeometry` when the source points are collinear (no
/// unique solution) or when any input or result is non-finite, e.g. a
/// corner projected from behind the camera.
///
/// # Example
/// ```
/// use rs_cube_stack::models::Vec2;
/// use rs_cube_stack::rendering::solve_affine;
///
/// let src = [Vec2::new(0.0, 0.0), Vec2::new(64.0, 0.0), Vec2::new(64.0, 64.0)];
/// let dst = [Vec2::new(10.0, 20.0), Vec2::new(42.0, 20.0), Vec2::new(42.0, 52.0)];
/// let m = solve_affine(&src, &dst).unwrap();
///
/// assert_eq!(m.apply(64.0, 64.0), (42.0, 52.0));
/// ```
pub fn solve_affine(src: &[Vec2; 3], dst: &[Vec2; 3]) -> Result<AffineTransform, CubeSceneError> {
    if !src.iter().chain(dst.iter()).all(|p| p.is_finite()) {
        return Err(CubeSceneError::DegenerateGeometry);
    }

    let u1 = src[1] - src[0];
    let u2 = src[2] - src[0];
    let v1 = dst[1] - dst[0];
    let v2 = dst[2] - dst[0];

    let det = u1.x * u2.y - u2.x * u1.y;
    if det.abs() < MIN_SOURCE_AREA {
        return Err(CubeSceneError::DegenerateGeometry);
    }

    let a = (v1.x * u2.y - v2.x * u1.y) / det;
    let c = (v2.x * u1.x - v1.x * u2.x) / det;
    let b = (v1.y * u2.y - v2.y * u1.y) / det;
    let d = (v2.y * u1.x - v1.y * u2.x) / det;

    let transform = AffineTransform {
        a,
        b,
        c,
        d,
        e: dst[0].x - a * src[0].x - c * src[0].y,
        f: dst[0].y - b * src[0].x - d * src[0].y,
    };

    if transform.is_finite() {
        Ok(transform)
    } else {
        Err(CubeSceneError::DegenerateGeometry)
    }
}

/// Maps a face's texture onto its projected quad.
///
/// Only the first three corners are used: an affine map is fixed by three
/// point pairs, so the fourth corner is matched only approximately once the
/// face is foreshortened.
pub fn face_texture_transform(
    face: &CubeFace,
    screen: &[Vec2; 8],
    texture: &TextureHandle,
) -> Result<AffineTransform, CubeSceneError> {
    let texel = |uv: Vec2| Vec2::new(uv.x * texture.width as f64, uv.y * texture.height as f64);

    let src = [texel(face.uvs[0]), texel(face.uvs[1]), texel(face.uvs[2])];
    let dst = [
        screen[face.vertices[0]],
        screen[face.vertices[1]],
        screen[face.vertices[2]],
    ];

    solve_affine(&src, &dst)
}
