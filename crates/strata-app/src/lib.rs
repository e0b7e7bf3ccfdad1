//! Strata application layer.
//!
//! Wires every gameplay crate into one set of [`EngineSchedules`](strata_ecs::EngineSchedules),
//! maps the loaded [`Config`](strata_config::Config) onto their resources, and
//! drives the world headlessly with explicit frame times.

mod game;
pub mod scene;
pub mod sim_loop;

pub use game::{CellReport, apply_config, camera_settings, import_game, report_world_cells};
pub use scene::{DemoScene, Wanderer, demo_camera_input, spawn_demo_scene};
pub use sim_loop::SimulationLoop;
