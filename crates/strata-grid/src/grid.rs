//! Grid descriptor components.

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::GridError;

/// Variations past this index are ignored.
pub const MAX_VARIATIONS: usize = 20;

/// Layout along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridAxis {
    /// Tiles along the axis; `0` is treated as `1`.
    pub count: u32,
    /// Distance between tile centers. Ignored in border mode.
    pub spacing: f32,
    /// Width of the uniform jitter applied to each tile on this axis.
    pub variation: f32,
}

impl GridAxis {
    pub fn new(count: u32, spacing: f32) -> Self {
        Self {
            count,
            spacing,
            variation: 0.0,
        }
    }

    pub fn with_variation(mut self, variation: f32) -> Self {
        self.variation = variation;
        self
    }
}

impl Default for GridAxis {
    fn default() -> Self {
        Self::new(1, 1.0)
    }
}

/// A weighted template choice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSlot {
    pub prefab: Entity,
    /// Relative weight; slots with zero chance are never picked.
    pub chance: f32,
}

/// Describes the tiles to spawn under this entity.
///
/// With a zero `border` the grid fills `x.count * y.count * z.count`
/// lattice points. With any non-zero `border` only the rectangle's
/// perimeter on the XZ plane is tiled, spaced `border / count` apart.
#[derive(Component, Clone, Debug, PartialEq, Default)]
pub struct Grid {
    pub x: GridAxis,
    pub y: GridAxis,
    pub z: GridAxis,
    pub border: Vec3,
    pub border_offset: Vec3,
    /// Template used for every tile. When unset, tiles pick from `variations`.
    pub prefab: Option<Entity>,
    pub variations: Vec<GridSlot>,
}

impl Grid {
    pub fn is_border(&self) -> bool {
        self.border != Vec3::ZERO
    }

    /// The variations actually considered.
    pub fn active_variations(&self) -> &[GridSlot] {
        &self.variations[..self.variations.len().min(MAX_VARIATIONS)]
    }

    /// Every entity a tile of this grid may instantiate.
    pub fn templates(&self) -> Vec<Entity> {
        match self.prefab {
            Some(prefab) => vec![prefab],
            None => self
                .active_variations()
                .iter()
                .filter(|slot| slot.chance > 0.0)
                .map(|slot| slot.prefab)
                .collect(),
        }
    }

    /// Checks that the descriptor names at least one usable template.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.prefab.is_some() {
            return Ok(());
        }
        for (index, slot) in self.active_variations().iter().enumerate() {
            if !slot.chance.is_finite() || slot.chance < 0.0 {
                return Err(GridError::InvalidChance {
                    index,
                    chance: slot.chance,
                });
            }
        }
        if self.active_variations().iter().all(|slot| slot.chance == 0.0) {
            return Err(GridError::NoTemplate);
        }
        Ok(())
    }
}

/// Links a spawned tile to the template it was created from.
///
/// Tiles do not receive copies of the template's components. A tile owns
/// only its [`Position`](strata_ecs::Position), its
/// [`Parent`](strata_ecs::Parent), and a yaw
/// [`Rotation`](strata_ecs::Rotation) when one was rolled. Everything else
/// (meshes, materials, gameplay data) is read from the template through
/// this link, so editing the template affects every tile at once.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InstanceOf(pub Entity);
