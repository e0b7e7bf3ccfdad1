//! Read-only lookups over cell membership.

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::{CellCoord, InCell, WorldCells, cell_key};

/// The cell `entity` currently belongs to, if it is tracked and committed.
pub fn cell_of(world: &World, entity: Entity) -> Option<Entity> {
    world.get::<InCell>(entity).map(|in_cell| in_cell.0)
}

/// Every entity whose membership edge points at `cell`.
pub fn entities_in_cell(world: &mut World, cell: Entity) -> Vec<Entity> {
    let mut members = world.query::<(Entity, &InCell)>();
    members
        .iter(world)
        .filter(|(_, in_cell)| in_cell.0 == cell)
        .map(|(entity, _)| entity)
        .collect()
}

/// The cell covering `position`, if one has been created. Never creates.
pub fn cell_at(world: &World, position: Vec3) -> Option<Entity> {
    world
        .get_resource::<WorldCells>()?
        .get(cell_key(position.x, position.z))
}

/// Centroid and extent of a cell entity.
pub fn cell_coord(world: &World, cell: Entity) -> Option<CellCoord> {
    world.get::<CellCoord>(cell).copied()
}
