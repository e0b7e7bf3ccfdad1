//! Host-side ECS core shared by every Strata gameplay crate.
//!
//! Provides the transform components, the parent hierarchy, the time and
//! input resources, and the staged [`EngineSchedules`] runner that drives
//! one simulation step.

mod components;
mod hierarchy;
mod input;
mod integration;
mod schedule;
mod system_ordering;
mod time;
mod world;

pub use components::{AngularVelocity, Name, Position, Rotation, SpatialBundle, Velocity};
pub use hierarchy::{Parent, ancestors, despawn_descendants, has_ancestor_with};
pub use input::InputState;
pub use integration::{integrate_angular_velocity, integrate_velocity};
pub use schedule::{EngineSchedule, EngineSchedules};
pub use system_ordering::{
    FixedUpdateSet, PostUpdateSet, PreUpdateSet, UpdateSet, configure_all_ordering,
    configure_fixedupdate_ordering, configure_postupdate_ordering, configure_preupdate_ordering,
    configure_update_ordering,
};
pub use time::TimeRes;
pub use world::{create_world, register_core_resources};
