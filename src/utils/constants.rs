use crate::rendering::Rgba;
use crate::utils;

pub const DEFAULT_CUBE_CONSTANTS: utils::CubeConstants = utils::CubeConstants {
    gravity: 9.81,
    restitution: 0.5,
    friction: 0.8,
    air_resistance: 0.99,
    rotational_damping: 0.95,
    collision_threshold: 0.1,
    settlement_threshold: 0.01,
    boundary: 10.0,
    click_cooldown: 1.0,
};

pub const DEFAULT_PROJECTION_CONSTANTS: utils::ProjectionConstants = utils::ProjectionConstants {
    focal_length: 400.0,
    camera_distance: 15.0,
    vertex_scale: 2.0,
    hit_half_extent_px: 40.0,
    edge_color: Rgba { r: 0, g: 0, b: 0, a: 0.2 },
    background_color: Rgba { r: 0xf0, g: 0xf0, b: 0xf0, a: 1.0 },
};

pub const DEFAULT_STACK_CONSTANTS: utils::StackConstants = utils::StackConstants {
    cell_fraction: 0.1,
    cell_world_size: 2.0,
    world_offset: 10.0,
    layer_height: 2.0,
    spawn_drop: 10.0,
};
