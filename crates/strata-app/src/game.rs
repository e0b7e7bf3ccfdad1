//! Game import: every gameplay system registered into one set of schedules.

use bevy_ecs::prelude::*;
use strata_camera::{CameraSettings, register_camera_systems};
use strata_cells::{WorldCellStats, WorldCells, register_world_cell_systems};
use strata_config::{CameraConfig, Config};
use strata_ecs::{
    EngineSchedule, EngineSchedules, FixedUpdateSet, InputState, PostUpdateSet, TimeRes,
    configure_all_ordering, integrate_angular_velocity, integrate_velocity,
};
use strata_grid::{GridRng, register_grid_systems};
use strata_lighting::{TimeOfDay, register_lighting_systems};
use tracing::{debug, info};

/// How often [`report_world_cells`] logs the directory size.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellReport {
    /// Frames between reports; `0` disables periodic reports.
    pub interval: u64,
}

/// Registers the core resources, stage ordering, integration, and every
/// gameplay module's systems.
///
/// Resources already present in `world` are kept, so [`apply_config`] may
/// run before or after this.
pub fn import_game(world: &mut World, schedules: &mut EngineSchedules) {
    world.init_resource::<TimeRes>();
    world.init_resource::<InputState>();
    world.init_resource::<CellReport>();

    configure_all_ordering(schedules);

    schedules.add_system(
        EngineSchedule::FixedUpdate,
        (integrate_velocity, integrate_angular_velocity).in_set(FixedUpdateSet::Integration),
    );

    register_world_cell_systems(world, schedules);
    register_camera_systems(world, schedules);
    register_lighting_systems(world, schedules);
    register_grid_systems(world, schedules);

    schedules.add_system(
        EngineSchedule::PostUpdate,
        report_world_cells.in_set(PostUpdateSet::Diagnostics),
    );

    info!("game systems imported");
}

pub fn camera_settings(camera: &CameraConfig) -> CameraSettings {
    CameraSettings {
        acceleration: camera.acceleration,
        deceleration: camera.deceleration,
        angular_acceleration: camera.angular_acceleration,
        angular_deceleration: camera.angular_deceleration,
        max_angular_speed: camera.max_angular_speed,
        gear_factor: camera.gear_factor,
        ..CameraSettings::default()
    }
}

/// Overwrites the tunable resources with values from `config`.
pub fn apply_config(world: &mut World, config: &Config) {
    world.insert_resource(camera_settings(&config.camera));
    world.insert_resource(TimeOfDay {
        t: config.lighting.start_time,
        speed: config.lighting.speed,
    });
    world.insert_resource(GridRng::from_seed(config.grid.seed));
    world.insert_resource(CellReport {
        interval: config.debug.report_interval,
    });
    debug!(seed = config.grid.seed, "applied config to world");
}

/// Logs the frame's cell reassignments, and the directory size every
/// [`CellReport::interval`] frames.
///
/// **Stage:** PostUpdate, `PostUpdateSet::Diagnostics`.
pub fn report_world_cells(
    time: Res<TimeRes>,
    report: Res<CellReport>,
    cells: Res<WorldCells>,
    stats: Res<WorldCellStats>,
) {
    if stats.reassigned > 0 || stats.cells_created > 0 {
        debug!(
            tick = time.tick,
            classified = stats.classified,
            reassigned = stats.reassigned,
            cells_created = stats.cells_created,
            "world cells updated"
        );
    }
    if report.interval > 0 && time.tick % report.interval == 0 {
        info!(tick = time.tick, cells = cells.len(), "world cell directory");
    }
}
