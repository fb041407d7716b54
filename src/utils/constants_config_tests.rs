use crate::assert_float_eq;
use crate::utils::{CubeConstants, ProjectionConstants, StackConstants, DEFAULT_CUBE_CONSTANTS};

#[test]
fn test_cube_constants_defaults() {
    let constants = CubeConstants::default();
    assert_eq!(constants, DEFAULT_CUBE_CONSTANTS);
    assert_float_eq(constants.gravity, 9.81, 1e-12, None);
    assert_float_eq(constants.restitution, 0.5, 1e-12, None);
    assert_float_eq(constants.click_cooldown, 1.0, 1e-12, None);
}

#[test]
fn test_cube_constants_partial_override() {
    let constants = CubeConstants::new(Some(1.62), None, None, Some(4.0), None);
    assert_float_eq(constants.gravity, 1.62, 1e-12, Some("gravity should be overridden"));
    assert_float_eq(constants.boundary, 4.0, 1e-12, Some("boundary should be overridden"));
    assert_float_eq(constants.friction, 0.8, 1e-12, Some("friction should keep its default"));
    assert_float_eq(constants.settlement_threshold, 0.01, 1e-12, None);
}

#[test]
fn test_perspective_scale() {
    let projection = ProjectionConstants::default();
    assert_float_eq(projection.perspective_scale(0.0), 400.0 / 15.0, 1e-12, None);
    assert_float_eq(projection.perspective_scale(-1.0), 400.0 / 14.0, 1e-12, None);

    let custom = ProjectionConstants::new(Some(100.0), Some(5.0), None);
    assert_float_eq(custom.perspective_scale(5.0), 10.0, 1e-12, None);
    assert_float_eq(custom.vertex_scale, 2.0, 1e-12, None);
}

#[test]
fn test_stack_constants_layout() {
    let stack = StackConstants::default();
    assert_float_eq(stack.target_y_for(0), 0.0, 1e-12, None);
    assert_float_eq(stack.target_y_for(3), 6.0, 1e-12, None);
    assert_float_eq(stack.world_coordinate(0), -10.0, 1e-12, None);
    assert_float_eq(stack.world_coordinate(7), 4.0, 1e-12, None);
}
