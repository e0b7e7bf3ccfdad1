//! Bootstrap and three-phase update systems for world-cell membership.
//!
//! | Phase    | Stage      | Reads                    | Writes                      |
//! |----------|------------|--------------------------|-----------------------------|
//! | attach   | PreUpdate  | `Position`, `Parent`     | `WorldCellCache` (insert)   |
//! | classify | PostUpdate | `Position`               | `WorldCellCache.current_*`  |
//! | commit   | PostUpdate | `WorldCellCache`         | `WorldCells`, `InCell`      |
//! | baseline | PostUpdate | `WorldCellCache`         | `WorldCellCache.committed_*`|
//!
//! Only the commit phase touches the directory, so cells are never created
//! for entities whose cell did not change.

use bevy_ecs::prelude::*;
use strata_ecs::{
    EngineSchedule, EngineSchedules, Parent, Position, PostUpdateSet, PreUpdateSet,
    has_ancestor_with,
};
use tracing::{debug, trace};

use crate::{InCell, WorldCell, WorldCellCache, WorldCells, cell_key};

/// Positioned entities not yet tracked. Losing a positioned ancestor leaves
/// no change tick on the entity itself, so this has no change filter.
type AttachFilter = (With<Position>, Without<WorldCellCache>, Without<WorldCell>);

/// Entities that moved, plus caches attached since the last pass.
type ClassifyFilter = Or<(Changed<Position>, Added<WorldCellCache>)>;

/// Ordered sub-phases of the spatial index.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum WorldCellSet {
    /// Attach caches to untracked root entities.
    Attach,
    /// Hash moved positions into their caches.
    Classify,
    /// Resolve cells and rewrite membership edges.
    Commit,
    /// Record the committed key.
    Baseline,
}

/// Per-frame counters written by the pipeline.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorldCellStats {
    /// Entities re-hashed this frame.
    pub classified: usize,
    /// Entities whose membership edge was rewritten this frame.
    pub reassigned: usize,
    /// Cell entities created this frame.
    pub cells_created: usize,
}

/// Attaches a fresh [`WorldCellCache`] to every untracked positioned entity
/// none of whose ancestors is positioned. Compound entities are tracked at
/// their root only.
///
/// Entities skipped here are revisited each frame, so a child is picked up
/// once it is unparented or its positioned ancestor is despawned or loses
/// its [`Position`].
pub fn attach_world_cell_cache(
    mut commands: Commands,
    candidates: Query<Entity, AttachFilter>,
    parents: Query<&Parent>,
    positioned: Query<(), With<Position>>,
) {
    let parent_of = |e: Entity| parents.get(e).ok().map(|p| p.0);
    for entity in &candidates {
        if has_ancestor_with(entity, parent_of, |ancestor| positioned.contains(ancestor)) {
            continue;
        }
        trace!(?entity, "tracking world cell");
        commands.entity(entity).try_insert(WorldCellCache::new());
    }
}

/// Phase 1: recompute the cell key of every entity whose position changed,
/// or whose cache was just attached.
pub fn classify_world_cells(
    stats: Option<ResMut<WorldCellStats>>,
    mut query: Query<(&Position, &mut WorldCellCache), ClassifyFilter>,
) {
    let mut classified = 0;
    for (position, mut cache) in &mut query {
        let key = cell_key(position.0.x, position.0.z);
        cache.quadrant = key.quadrant;
        cache.current_id = key.id;
        classified += 1;
    }
    if classified > 0 {
        trace!(classified, "classified world cells");
    }
    if let Some(mut stats) = stats {
        *stats = WorldCellStats {
            classified,
            ..Default::default()
        };
    }
}

/// Phase 2: for every cache whose key moved, resolve the cell (creating it
/// on first sight) and point the entity's [`InCell`] edge at it.
pub fn commit_world_cells(
    mut commands: Commands,
    mut cells: ResMut<WorldCells>,
    mut stats: Option<ResMut<WorldCellStats>>,
    query: Query<(Entity, &WorldCellCache), Changed<WorldCellCache>>,
) {
    for (entity, cache) in &query {
        if !cache.is_dirty() {
            continue;
        }
        let key = cache.key();
        let mut created = false;
        let cell = cells.get_or_create(key, |coord| {
            created = true;
            commands.spawn((WorldCell, coord)).id()
        });
        if created {
            debug!(?cell, quadrant = key.quadrant.index(), id = key.id, "created world cell");
        }
        commands.entity(entity).try_insert(InCell(cell));

        if let Some(stats) = stats.as_deref_mut() {
            stats.reassigned += 1;
            stats.cells_created += usize::from(created);
        }
    }
}

/// Phase 3: copy the current key into the committed key.
///
/// Written without change detection so a committed cache is not revisited
/// on the next frame.
pub fn baseline_world_cells(mut query: Query<&mut WorldCellCache, Changed<WorldCellCache>>) {
    let mut committed = 0;
    for mut cache in &mut query {
        if cache.is_dirty() {
            cache.bypass_change_detection().commit();
            committed += 1;
        }
    }
    if committed > 0 {
        trace!(committed, "baselined world cells");
    }
}

/// Insert the directory and stats resources and register every spatial
/// index system into `schedules`.
pub fn register_world_cell_systems(world: &mut World, schedules: &mut EngineSchedules) {
    world.init_resource::<WorldCells>();
    world.init_resource::<WorldCellStats>();

    schedules.add_system(
        EngineSchedule::PreUpdate,
        attach_world_cell_cache
            .in_set(WorldCellSet::Attach)
            .in_set(PreUpdateSet::Bootstrap),
    );
    schedules.add_system(
        EngineSchedule::PostUpdate,
        (
            classify_world_cells.in_set(WorldCellSet::Classify),
            commit_world_cells.in_set(WorldCellSet::Commit),
            baseline_world_cells.in_set(WorldCellSet::Baseline),
        )
            .chain()
            .in_set(PostUpdateSet::SpatialIndexUpdate),
    );
}
