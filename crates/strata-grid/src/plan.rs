//! Tile layout for a grid descriptor, independent of the ECS.

use std::f32::consts::FRAC_PI_2;

use bevy_ecs::entity::Entity;
use glam::Vec3;
use rand::Rng;

use crate::{Grid, GridError, GridSlot};

/// Smallest spacing used in uniform mode.
const MIN_SPACING: f32 = 0.001;

/// One tile to spawn, relative to the grid entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridTile {
    pub template: Entity,
    pub position: Vec3,
    /// Yaw in radians. Non-zero only for tiles on the X sides of a border.
    pub yaw: f32,
}

struct Layout {
    count: [u32; 3],
    spacing: Vec3,
    half: Vec3,
    variation: Vec3,
}

impl Layout {
    fn new(grid: &Grid) -> Self {
        let count = [grid.x.count.max(1), grid.y.count.max(1), grid.z.count.max(1)];
        let counts = Vec3::new(count[0] as f32, count[1] as f32, count[2] as f32);
        let spacing = if grid.is_border() {
            grid.border / counts
        } else {
            Vec3::new(grid.x.spacing, grid.y.spacing, grid.z.spacing).max(Vec3::splat(MIN_SPACING))
        };
        Self {
            count,
            spacing,
            half: (counts - Vec3::ONE) / 2.0 * spacing,
            variation: Vec3::new(grid.x.variation, grid.y.variation, grid.z.variation),
        }
    }

    /// Center of lattice index `i` on `axis`.
    fn offset(&self, axis: usize, i: u32) -> f32 {
        i as f32 * self.spacing[axis] - self.half[axis]
    }
}

/// Picks a template: the fixed prefab, or a weighted draw over the
/// variations with positive chance.
fn pick_template<R: Rng>(
    prefab: Option<Entity>,
    slots: &[GridSlot],
    total: f32,
    rng: &mut R,
) -> Option<Entity> {
    if prefab.is_some() {
        return prefab;
    }
    let p = rng.random::<f32>() * total;
    let mut cumulative = 0.0;
    let mut last = None;
    for slot in slots.iter().filter(|slot| slot.chance > 0.0) {
        cumulative += slot.chance;
        last = Some(slot.prefab);
        if p <= cumulative {
            return last;
        }
    }
    last
}

fn jitter<R: Rng>(variation: Vec3, rng: &mut R) -> Vec3 {
    let mut offset = Vec3::ZERO;
    for axis in 0..3 {
        let width = variation[axis];
        if width != 0.0 {
            offset[axis] = rng.random::<f32>() * width - width / 2.0;
        }
    }
    offset
}

/// Computes every tile of `grid`, drawing jitter and template choices from
/// `rng`.
pub fn plan_grid<R: Rng>(grid: &Grid, rng: &mut R) -> Result<Vec<GridTile>, GridError> {
    grid.validate()?;

    let layout = Layout::new(grid);
    let slots = grid.active_variations();
    let total: f32 = slots.iter().map(|slot| slot.chance).sum();

    let mut lattice = Vec::new();
    if grid.is_border() {
        let z_edge = grid.border.z / 2.0 + grid.border_offset.z;
        for i in 0..layout.count[0] {
            let x = layout.offset(0, i);
            lattice.push((Vec3::new(x, 0.0, -z_edge), 0.0));
            lattice.push((Vec3::new(x, 0.0, z_edge), 0.0));
        }
        let x_edge = grid.border.x / 2.0 + grid.border_offset.x;
        for i in 0..layout.count[2] {
            let z = layout.offset(2, i);
            lattice.push((Vec3::new(x_edge, 0.0, z), FRAC_PI_2));
            lattice.push((Vec3::new(-x_edge, 0.0, z), FRAC_PI_2));
        }
    } else {
        for xi in 0..layout.count[0] {
            for yi in 0..layout.count[1] {
                for zi in 0..layout.count[2] {
                    let center = Vec3::new(
                        layout.offset(0, xi),
                        layout.offset(1, yi),
                        layout.offset(2, zi),
                    );
                    lattice.push((center, 0.0));
                }
            }
        }
    }

    let mut tiles = Vec::with_capacity(lattice.len());
    for (center, yaw) in lattice {
        let position = center + jitter(layout.variation, rng);
        let Some(template) = pick_template(grid.prefab, slots, total, rng) else {
            return Err(GridError::NoTemplate);
        };
        tiles.push(GridTile {
            template,
            position,
            yaw,
        });
    }
    Ok(tiles)
}
