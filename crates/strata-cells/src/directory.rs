//! Directory of world-cell entities, partitioned by quadrant.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

use crate::{CellCoord, CellKey, Quadrant};

/// Maps every observed [`CellKey`] to the entity representing that cell.
///
/// One map per quadrant, because cell ids repeat across quadrants. Cells
/// are created on first observation and never removed.
#[derive(Resource, Debug, Default)]
pub struct WorldCells {
    quadrants: [FxHashMap<u64, Entity>; 4],
}

impl WorldCells {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cell entity for `key`, calling `spawn` to create it if
    /// the key has never been seen.
    ///
    /// `spawn` receives the decoded centroid and runs at most once per key
    /// for the lifetime of the directory.
    pub fn get_or_create(&mut self, key: CellKey, spawn: impl FnOnce(CellCoord) -> Entity) -> Entity {
        *self.quadrants[key.quadrant.index()]
            .entry(key.id)
            .or_insert_with(|| spawn(key.coord()))
    }

    /// Look up an existing cell without creating it.
    pub fn get(&self, key: CellKey) -> Option<Entity> {
        self.quadrants[key.quadrant.index()].get(&key.id).copied()
    }

    /// Total number of cells across all quadrants.
    pub fn len(&self) -> usize {
        self.quadrants.iter().map(|map| map.len()).sum()
    }

    /// Return true if no cell has been created yet.
    pub fn is_empty(&self) -> bool {
        self.quadrants.iter().all(|map| map.is_empty())
    }

    /// Number of cells in one quadrant.
    pub fn quadrant_len(&self, quadrant: Quadrant) -> usize {
        self.quadrants[quadrant.index()].len()
    }

    /// Iterate every `(key, cell)` pair, quadrant by quadrant.
    pub fn iter(&self) -> impl Iterator<Item = (CellKey, Entity)> + '_ {
        Quadrant::ALL.into_iter().flat_map(move |quadrant| {
            self.quadrants[quadrant.index()]
                .iter()
                .map(move |(&id, &cell)| (CellKey { quadrant, id }, cell))
        })
    }
}
