//! Headless frame driver.
//!
//! Frames advance by an explicit, fixed frame time instead of wall-clock
//! time, so runs are reproducible. Fixed-rate integration inside a frame is
//! handled by the accumulator in [`EngineSchedules`].

use bevy_ecs::world::World;
use strata_config::SimulationConfig;
use strata_ecs::{EngineSchedules, InputState};
use tracing::{trace, warn};

/// Maximum frame time. Longer frames are clamped to avoid running dozens
/// of fixed steps to catch up.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Runs frames of a world with a constant frame time.
pub struct SimulationLoop {
    schedules: EngineSchedules,
    frame_dt: f64,
    frame_count: u64,
}

impl SimulationLoop {
    /// `frame_dt` is clamped to `(0, MAX_FRAME_TIME]`; non-positive values
    /// fall back to the fixed step.
    pub fn new(schedules: EngineSchedules, frame_dt: f64) -> Self {
        let frame_dt = if frame_dt.is_nan() || frame_dt <= 0.0 {
            warn!(frame_dt, "frame time must be positive, using the fixed step");
            schedules.fixed_dt()
        } else if frame_dt > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_dt * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            MAX_FRAME_TIME
        } else {
            frame_dt
        };

        Self {
            schedules,
            frame_dt,
            frame_count: 0,
        }
    }

    /// Fresh schedules with the configured fixed rate and frame time.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let fixed_dt = if config.fixed_hz > 0.0 {
            1.0 / config.fixed_hz
        } else {
            warn!(fixed_hz = config.fixed_hz, "fixed rate must be positive, using 60 Hz");
            1.0 / 60.0
        };
        Self::new(EngineSchedules::with_fixed_dt(fixed_dt), config.frame_time)
    }

    pub fn schedules_mut(&mut self) -> &mut EngineSchedules {
        &mut self.schedules
    }

    /// Runs one frame.
    pub fn step(&mut self, world: &mut World) {
        self.schedules.run(world, self.frame_dt);
        self.frame_count += 1;
        trace!(frame = self.frame_count, "frame complete");
    }

    /// Runs `frames` frames. Before each one, the input edges of the
    /// previous frame are cleared and `before_frame` is called with the
    /// index of the frame about to run.
    pub fn run(
        &mut self,
        world: &mut World,
        frames: u64,
        mut before_frame: impl FnMut(&mut World, u64),
    ) {
        for _ in 0..frames {
            if let Some(mut input) = world.get_resource_mut::<InputState>() {
                input.clear_transients();
            }
            before_frame(world, self.frame_count);
            self.step(world);
        }
    }

    pub fn frame_dt(&self) -> f64 {
        self.frame_dt
    }

    /// Frames run so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
