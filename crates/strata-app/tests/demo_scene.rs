//! The demo scene driven end to end through the imported game.

use bevy_ecs::prelude::*;
use strata_app::{SimulationLoop, apply_config, demo_camera_input, import_game, spawn_demo_scene};
use strata_cells::query::{cell_at, cell_of};
use strata_cells::{InCell, WorldCell};
use strata_config::Config;
use strata_ecs::{InputState, Parent, Position, create_world};
use strata_grid::InstanceOf;
use strata_lighting::{Canvas, DirectionalLight, TimeOfDay};

fn config() -> Config {
    let mut config = Config::default();
    config.simulation.wanderers = 24;
    config.simulation.wander_speed = 300.0;
    config.grid.count = 3;
    config.grid.seed = 11;
    config
}

fn run(config: &Config, frames: u64) -> (World, strata_app::DemoScene) {
    let mut world = create_world();
    apply_config(&mut world, config);
    let mut sim = SimulationLoop::from_config(&config.simulation);
    import_game(&mut world, sim.schedules_mut());
    let scene = spawn_demo_scene(&mut world, config);

    sim.run(&mut world, frames, |world, frame| {
        let mut input = world.resource_mut::<InputState>();
        demo_camera_input(&mut input, frame, frames);
    });
    (world, scene)
}

#[test]
fn wanderers_stay_in_the_cell_under_them() {
    let (world, scene) = run(&config(), 90);

    for &e in &scene.wanderers {
        let position = world.get::<Position>(e).unwrap().0;
        let cell = cell_of(&world, e).expect("wanderer is tracked");
        assert!(world.get::<WorldCell>(cell).is_some());
        assert_eq!(cell_at(&world, position), Some(cell));
    }
}

#[test]
fn grid_tiles_are_spawned_but_not_tracked() {
    let (mut world, scene) = run(&config(), 3);

    let mut tiles = world.query::<(Entity, &InstanceOf, &Parent)>();
    let tiles: Vec<(Entity, Entity, Entity)> = tiles
        .iter(&world)
        .map(|(e, instance, parent)| (e, instance.0, parent.0))
        .collect();

    assert_eq!(tiles.len(), 9);
    for (tile, template, parent) in tiles {
        assert_eq!(template, scene.tile);
        assert_eq!(parent, scene.grid);
        assert!(world.get::<InCell>(tile).is_none());
    }
    assert!(world.get::<InCell>(scene.grid).is_some());
}

#[test]
fn camera_flies_forward_and_is_tracked() {
    let (world, scene) = run(&config(), 60);

    let position = world.get::<Position>(scene.camera).unwrap().0;
    assert!(position.z > 0.0);
    assert!(world.get::<InCell>(scene.camera).is_some());
}

#[test]
fn daylight_reaches_sun_and_canvas() {
    let (world, scene) = run(&config(), 10);

    let clock = world.resource::<TimeOfDay>();
    assert!(clock.t > 0.5);

    let light = world.get::<DirectionalLight>(scene.sun).unwrap();
    assert!(light.intensity > 1.0);
    let ambient = world.get::<Canvas>(scene.canvas).unwrap().ambient_light;
    assert!(ambient.length() > 0.0);
}

#[test]
fn same_config_same_outcome() {
    let (world_a, scene_a) = run(&config(), 30);
    let (world_b, scene_b) = run(&config(), 30);

    for (&a, &b) in scene_a.wanderers.iter().zip(&scene_b.wanderers) {
        assert_eq!(world_a.get::<Position>(a), world_b.get::<Position>(b));
    }
}
