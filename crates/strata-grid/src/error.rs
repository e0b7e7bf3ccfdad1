use bevy_ecs::entity::Entity;
use thiserror::Error;

/// Reasons a grid descriptor cannot be instantiated.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("grid has no prefab and no variation with a positive chance")]
    NoTemplate,

    #[error("variation {index} has invalid chance {chance}")]
    InvalidChance { index: usize, chance: f32 },

    #[error("template entity {0:?} does not exist")]
    MissingTemplate(Entity),
}
