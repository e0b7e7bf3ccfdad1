//! Grid regeneration system and its random source.

use bevy_ecs::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strata_ecs::{
    EngineSchedule, EngineSchedules, Parent, Position, Rotation, UpdateSet, despawn_descendants,
};
use tracing::{debug, info, warn};

use crate::{Grid, GridError, InstanceOf, plan_grid};

/// Deterministic random source for tile jitter and template choice.
#[derive(Resource, Debug, Clone)]
pub struct GridRng(pub ChaCha8Rng);

impl GridRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for GridRng {
    fn default() -> Self {
        Self::from_seed(0)
    }
}

/// Rebuilds the tiles of every grid added or changed since the last run.
///
/// Previous descendants are despawned first. A descriptor that cannot be
/// instantiated leaves the grid empty and logs a warning.
///
/// **Stage:** Update, `UpdateSet::Controllers` (exclusive).
pub fn instantiate_grids(world: &mut World, changed: &mut QueryState<(Entity, &Grid), Changed<Grid>>) {
    let grids: Vec<(Entity, Grid)> = changed
        .iter(world)
        .map(|(entity, grid)| (entity, grid.clone()))
        .collect();

    for (entity, grid) in grids {
        let removed = despawn_descendants(world, entity);
        match spawn_tiles(world, entity, &grid) {
            Ok(spawned) => info!(?entity, removed, spawned, "instantiated grid"),
            Err(err) => warn!(?entity, removed, %err, "grid left empty"),
        }
    }
}

fn spawn_tiles(world: &mut World, parent: Entity, grid: &Grid) -> Result<usize, GridError> {
    if let Some(missing) = grid
        .templates()
        .into_iter()
        .find(|&template| world.get_entity(template).is_err())
    {
        return Err(GridError::MissingTemplate(missing));
    }

    let tiles = {
        let mut rng = world.get_resource_or_insert_with(GridRng::default);
        plan_grid(grid, &mut rng.0)?
    };

    for tile in &tiles {
        let mut spawned = world.spawn((
            InstanceOf(tile.template),
            Position(tile.position),
            Parent(parent),
        ));
        if tile.yaw != 0.0 {
            spawned.insert(Rotation::new(0.0, tile.yaw, 0.0));
        }
    }
    debug!(?parent, count = tiles.len(), "spawned grid tiles");
    Ok(tiles.len())
}

/// Insert a default [`GridRng`] (unless already present) and register the
/// grid system.
pub fn register_grid_systems(world: &mut World, schedules: &mut EngineSchedules) {
    world.init_resource::<GridRng>();

    schedules.add_system(
        EngineSchedule::Update,
        instantiate_grids.in_set(UpdateSet::Controllers),
    );
}
