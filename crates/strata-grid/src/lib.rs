//! Procedural grid instantiation.
//!
//! A [`Grid`] component describes a lattice (or a rectangular border) of
//! tiles. Whenever it is added or changed, the previous tiles are removed
//! and new ones are spawned as children of the grid entity, each an
//! [`InstanceOf`] a template chosen from the descriptor.

mod error;
mod grid;
mod plan;
mod systems;

pub use error::GridError;
pub use grid::{Grid, GridAxis, GridSlot, InstanceOf, MAX_VARIATIONS};
pub use plan::{GridTile, plan_grid};
pub use systems::{GridRng, instantiate_grids, register_grid_systems};
