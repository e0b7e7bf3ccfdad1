//! Demo scene for the headless binary.

use bevy_ecs::prelude::*;
use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strata_camera::actions::{GEAR_UP, MOVE_FORWARD, TURN_LEFT};
use strata_camera::{Camera, CameraController};
use strata_config::Config;
use strata_ecs::{InputState, Name, Position, Velocity};
use strata_grid::{Grid, GridAxis};
use strata_lighting::{Canvas, Sun};
use tracing::info;

/// Half-width of the square wanderers start in.
pub const WANDER_EXTENT: f32 = 1024.0;

/// Marks an entity drifting at a constant velocity.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Wanderer;

/// Entities spawned by [`spawn_demo_scene`].
#[derive(Debug, Clone)]
pub struct DemoScene {
    pub camera: Entity,
    pub sun: Entity,
    pub canvas: Entity,
    /// Template entity every grid tile is an instance of.
    pub tile: Entity,
    pub grid: Entity,
    pub wanderers: Vec<Entity>,
}

/// Spawns a camera, a sun, a canvas, one grid, and
/// `config.simulation.wanderers` wanderers.
///
/// Wanderer placement is seeded from `config.grid.seed`.
pub fn spawn_demo_scene(world: &mut World, config: &Config) -> DemoScene {
    let camera = world
        .spawn((
            Name::new("camera"),
            Camera::default(),
            CameraController {
                gear: config.camera.start_gear.max(CameraController::MIN_GEAR),
                limit_y: config.camera.limit_y,
                max_y: config.camera.max_y,
            },
        ))
        .id();
    let sun = world.spawn((Name::new("sun"), Sun)).id();
    let canvas = world.spawn((Name::new("canvas"), Canvas::default())).id();

    let tile = world.spawn(Name::new("tile")).id();
    let axis = GridAxis::new(config.grid.count, config.grid.spacing)
        .with_variation(config.grid.variation);
    let grid = world
        .spawn((
            Name::new("grid"),
            Position::new(0.0, 0.0, 0.0),
            Grid {
                x: axis,
                z: axis,
                prefab: Some(tile),
                ..Default::default()
            },
        ))
        .id();

    let mut rng = ChaCha8Rng::seed_from_u64(config.grid.seed);
    let speed = config.simulation.wander_speed.max(0.0);
    let wanderers = (0..config.simulation.wanderers)
        .map(|i| {
            let start = Vec3::new(
                rng.random_range(-WANDER_EXTENT..WANDER_EXTENT),
                0.0,
                rng.random_range(-WANDER_EXTENT..WANDER_EXTENT),
            );
            let heading = rng.random_range(0.0..std::f32::consts::TAU);
            let velocity = Vec3::new(heading.cos(), 0.0, heading.sin()) * speed;
            world
                .spawn((
                    Name::new(format!("wanderer-{i}")),
                    Wanderer,
                    Position(start),
                    Velocity(velocity),
                ))
                .id()
        })
        .collect::<Vec<_>>();

    info!(wanderers = wanderers.len(), "spawned demo scene");

    DemoScene {
        camera,
        sun,
        canvas,
        tile,
        grid,
        wanderers,
    }
}

/// Scripted fly-through: shift up and fly forward for the first third,
/// cruise for the second, then stop and turn for the rest.
pub fn demo_camera_input(input: &mut InputState, frame: u64, frames: u64) {
    let third = (frames / 3).max(1);
    if frame == 0 {
        input.press(MOVE_FORWARD);
        input.press(GEAR_UP);
    }
    if frame == third {
        input.release(GEAR_UP);
    }
    if frame == 2 * third {
        input.release(MOVE_FORWARD);
        input.press(TURN_LEFT);
    }
}
