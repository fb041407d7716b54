use crate::errors::CubeSceneError;
use crate::models::{RigidCube, Vec2, Vec3};
use crate::rendering::{
    render_cube,
    render_frame,
    transform_vertices,
    DrawCommand,
    RecordingSurface,
    Rgba,
    TextureHandle,
};
use crate::utils::DEFAULT_PROJECTION_CONSTANTS;

const TEXTURE: TextureHandle = TextureHandle { id: 3, width: 64, height: 64 };

fn textured_cube(position: Vec3) -> RigidCube {
    RigidCube::new(0, position, 0, 0, 0.0).with_texture(TEXTURE)
}

#[test]
fn test_render_without_texture_is_a_configuration_error() {
    let mut surface = RecordingSurface::new(800, 600);
    let cube = RigidCube::new(7, Vec3::ZERO, 0, 0, 0.0);

    let result = render_cube(&mut surface, &cube, &DEFAULT_PROJECTION_CONSTANTS);

    assert!(matches!(result, Err(CubeSceneError::InvalidConfiguration(_))));
    assert!(surface.commands.is_empty(), "nothing should be drawn for an unbound cube");
}

#[test]
fn test_render_cube_fills_and_outlines_every_face() {
    let mut surface = RecordingSurface::new(800, 600);
    let cube = textured_cube(Vec3::ZERO);

    let drawn = render_cube(&mut surface, &cube, &DEFAULT_PROJECTION_CONSTANTS).unwrap();

    assert_eq!(drawn, 6);
    assert_eq!(surface.fill_count(), 6);
    assert_eq!(surface.stroke_count(), 6);

    // each face is a fill followed by its outline in the edge colour
    for pair in surface.commands.chunks(2) {
        match (&pair[0], &pair[1]) {
            (
                DrawCommand::FillPattern { path: fill_path, texture, .. },
                DrawCommand::Stroke { path: stroke_path, color },
            ) => {
                assert_eq!(fill_path.len(), 4);
                assert_eq!(fill_path, stroke_path);
                assert_eq!(*texture, TEXTURE);
                assert_eq!(*color, Rgba::new(0, 0, 0, 0.2));
            }
            other => panic!("unexpected command pair {:?}", other),
        }
    }
}

#[test]
fn test_render_cube_starts_with_the_far_face() {
    let mut surface = RecordingSurface::new(800, 600);
    let cube = textured_cube(Vec3::ZERO);
    let projected = transform_vertices(&cube, 800, 600, &DEFAULT_PROJECTION_CONSTANTS);

    render_cube(&mut surface, &cube, &DEFAULT_PROJECTION_CONSTANTS).unwrap();

    let back: Vec<Vec2> = [5, 4, 7, 6].iter().map(|&i| projected.screen[i]).collect();
    let front: Vec<Vec2> = [0, 1, 2, 3].iter().map(|&i| projected.screen[i]).collect();

    match surface.commands.first() {
        Some(DrawCommand::FillPattern { path, .. }) => assert_eq!(*path, back),
        other => panic!("expected a fill first, got {:?}", other),
    }
    match surface.commands.last() {
        Some(DrawCommand::Stroke { path, .. }) => assert_eq!(*path, front),
        other => panic!("expected a stroke last, got {:?}", other),
    }
}

#[test]
fn test_degenerate_texture_skips_faces_without_failing() {
    let mut surface = RecordingSurface::new(800, 600);
    let cube = RigidCube::new(0, Vec3::ZERO, 0, 0, 0.0).with_texture(TextureHandle::new(1, 0, 0));

    let drawn = render_cube(&mut surface, &cube, &DEFAULT_PROJECTION_CONSTANTS).unwrap();

    assert_eq!(drawn, 0);
    assert!(surface.commands.is_empty());
}

#[test]
fn test_corners_on_the_camera_plane_skip_only_their_faces() {
    let mut surface = RecordingSurface::new(800, 600);
    // near corners land exactly on z = -D, where the perspective divide blows up
    let cube = textured_cube(Vec3::new(0.0, 0.0, -14.0));

    let drawn = render_cube(&mut surface, &cube, &DEFAULT_PROJECTION_CONSTANTS).unwrap();

    assert_eq!(drawn, 1, "only the far face has finite corners");
    assert_eq!(surface.fill_count(), 1);
}

#[test]
fn test_render_frame_clears_then_draws_in_order() {
    let mut surface = RecordingSurface::new(640, 480);
    let cubes = vec![
        textured_cube(Vec3::new(-3.0, 0.0, 0.0)),
        textured_cube(Vec3::new(3.0, 2.0, 1.0)),
    ];

    let drawn = render_frame(&mut surface, &cubes, &DEFAULT_PROJECTION_CONSTANTS).unwrap();

    assert_eq!(drawn, 12);
    assert_eq!(surface.commands[0], DrawCommand::Clear);
    assert_eq!(surface.commands[1], DrawCommand::FillRect(Rgba::new(0xf0, 0xf0, 0xf0, 1.0)));
    assert_eq!(surface.fill_count(), 12);

    // the first cube sits left of centre, so its faces come first
    match &surface.commands[2] {
        DrawCommand::FillPattern { path, .. } => assert!(path.iter().all(|p| p.x < 320.0)),
        other => panic!("expected a fill, got {:?}", other),
    }
}

#[test]
fn test_render_frame_propagates_missing_texture() {
    let mut surface = RecordingSurface::new(640, 480);
    let cubes = vec![
        textured_cube(Vec3::ZERO),
        RigidCube::new(1, Vec3::new(2.0, 0.0, 0.0), 0, 0, 0.0),
    ];

    let result = render_frame(&mut surface, &cubes, &DEFAULT_PROJECTION_CONSTANTS);
    assert!(matches!(result, Err(CubeSceneError::InvalidConfiguration(_))));
}
