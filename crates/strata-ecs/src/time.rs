//! Time resource for the ECS world.

use bevy_ecs::prelude::*;

/// Global time resource inserted into the ECS world at creation.
///
/// [`EngineSchedules::run`](crate::EngineSchedules::run) advances it before
/// any stage executes, so systems read frame timing from here instead of
/// receiving it as a parameter.
#[derive(Resource, Debug, Clone, Default)]
pub struct TimeRes {
    /// Seconds elapsed since the previous frame.
    pub delta: f32,
    /// Fixed simulation step in seconds, valid inside `FixedUpdate`.
    pub fixed_delta: f32,
    /// Total seconds elapsed since the first frame.
    pub elapsed: f64,
    /// Number of frames run so far.
    pub tick: u64,
}

impl TimeRes {
    /// Record one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.delta = dt as f32;
        self.elapsed += dt;
        self.tick += 1;
    }
}
