//! Components owned by the spatial index.

use bevy_ecs::prelude::*;

use crate::{CELL_ID_SENTINEL, CellKey, Quadrant};

/// Per-entity record of the cell an entity hashes to and the cell it is
/// currently committed to.
///
/// Attached once to every tracked root entity. Phase 1 writes the current
/// key, phase 2 compares it against the committed key, phase 3 copies it
/// over.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldCellCache {
    /// Cell id computed from the entity's latest position.
    pub current_id: u64,
    /// Cell id the membership edge points at.
    pub committed_id: u64,
    /// Quadrant `current_id` belongs to.
    pub quadrant: Quadrant,
    /// Quadrant `committed_id` belongs to.
    pub committed_quadrant: Quadrant,
}

impl WorldCellCache {
    /// A fresh cache that is guaranteed to be assigned a cell on its first
    /// pipeline pass, wherever the entity spawned.
    pub fn new() -> Self {
        Self {
            current_id: 0,
            committed_id: CELL_ID_SENTINEL,
            quadrant: Quadrant::PosXPosY,
            committed_quadrant: Quadrant::PosXPosY,
        }
    }

    /// Key the entity currently hashes to.
    pub fn key(&self) -> CellKey {
        CellKey {
            quadrant: self.quadrant,
            id: self.current_id,
        }
    }

    /// True when the current key differs from the committed one.
    pub fn is_dirty(&self) -> bool {
        self.current_id != self.committed_id || self.quadrant != self.committed_quadrant
    }

    /// Makes the current key the committed one.
    pub fn commit(&mut self) {
        self.committed_id = self.current_id;
        self.committed_quadrant = self.quadrant;
    }
}

impl Default for WorldCellCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Marker for cell entities created by the directory.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorldCell;

/// Centroid and edge length of a cell, in world units on the horizontal
/// plane. `y` is the world Z axis.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct CellCoord {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// Exclusive membership edge from a tracked entity to its cell entity.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InCell(pub Entity);
