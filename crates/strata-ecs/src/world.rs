//! World factory function and core resource registration.

use bevy_ecs::prelude::*;

use crate::{InputState, TimeRes};

/// Registers the core engine resources into the given world with defaults.
///
/// Gameplay crates insert their own resources (cell directory, time of
/// day, grid RNG) when their systems are registered.
pub fn register_core_resources(world: &mut World) {
    world.insert_resource(TimeRes::default());
    world.insert_resource(InputState::default());
}

/// Creates and returns an ECS world with [`TimeRes`] and [`InputState`]
/// pre-inserted.
pub fn create_world() -> World {
    let mut world = World::new();
    register_core_resources(&mut world);
    world
}
