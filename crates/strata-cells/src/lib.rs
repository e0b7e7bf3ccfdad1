//! World-cell spatial index.
//!
//! Buckets every positioned root entity into a square cell of
//! [`CELL_SIZE`] world units on the horizontal (X/Z) plane. Cells are
//! entities themselves, created lazily the first time something enters
//! them, and tracked entities point at theirs through [`InCell`].
//!
//! The hash ([`cell_key`]) and the directory ([`WorldCells`]) do not depend
//! on the ECS; the systems in this crate adapt them to `bevy_ecs` change
//! detection so entities that do not move cost nothing per frame.

mod components;
mod directory;
mod hash;
pub mod query;
mod systems;

pub use components::{CellCoord, InCell, WorldCell, WorldCellCache};
pub use directory::WorldCells;
pub use hash::{CELL_ID_SENTINEL, CELL_SHIFT, CELL_SIZE, CellKey, Quadrant, cell_key};
pub use systems::{
    WorldCellSet, WorldCellStats, attach_world_cell_cache, baseline_world_cells,
    classify_world_cells, commit_world_cells, register_world_cell_systems,
};
