//! Headless Strata simulation.
//!
//! Loads `config.ron` (created with defaults on first run), applies CLI
//! overrides, spawns the demo scene, and runs a fixed number of frames.
//! Run with `cargo run -p strata-app -- --frames 1200 --wanderers 500`.

use std::path::PathBuf;

use clap::Parser;
use strata_app::{
    SimulationLoop, apply_config, demo_camera_input, import_game, spawn_demo_scene,
};
use strata_camera::CameraController;
use strata_cells::{InCell, Quadrant, WorldCellStats, WorldCells};
use strata_config::{CliArgs, Config, default_config_dir};
use strata_ecs::{InputState, Position, TimeRes, create_world};
use strata_grid::InstanceOf;
use strata_lighting::{Canvas, TimeOfDay};
use tracing::info;

fn main() {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| PathBuf::from(".strata"));

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    strata_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));
    info!(config_dir = %config_dir.display(), "starting strata");

    let mut world = create_world();
    apply_config(&mut world, &config);

    let mut sim = SimulationLoop::from_config(&config.simulation);
    import_game(&mut world, sim.schedules_mut());
    sim.schedules_mut().initialize_all(&mut world);

    let scene = spawn_demo_scene(&mut world, &config);

    let frames = config.simulation.frames;
    sim.run(&mut world, frames, |world, frame| {
        if let Some(mut input) = world.get_resource_mut::<InputState>() {
            demo_camera_input(&mut input, frame, frames);
        }
    });

    let elapsed = world.resource::<TimeRes>().elapsed;
    let cells = world.resource::<WorldCells>();
    let per_quadrant = Quadrant::ALL.map(|q| cells.quadrant_len(q));
    info!(
        frames = sim.frame_count(),
        elapsed,
        cells = cells.len(),
        ?per_quadrant,
        "simulation finished"
    );

    let stats = *world.resource::<WorldCellStats>();
    info!(
        classified = stats.classified,
        reassigned = stats.reassigned,
        cells_created = stats.cells_created,
        "last frame cell activity"
    );

    let tracked = world.query::<&InCell>().iter(&world).count();
    let tiles = world.query::<&InstanceOf>().iter(&world).count();
    info!(tracked, tiles, "scene summary");

    if let (Some(position), Some(controller)) = (
        world.get::<Position>(scene.camera),
        world.get::<CameraController>(scene.camera),
    ) {
        info!(position = ?position.0, gear = controller.gear, "camera");
    }
    if let Some(canvas) = world.get::<Canvas>(scene.canvas) {
        let clock = world.resource::<TimeOfDay>();
        info!(t = clock.t, ambient = ?canvas.ambient_light, "lighting");
    }
}
