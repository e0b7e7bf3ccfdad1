//! Engine schedule labels and the ordered schedule runner.

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::{IntoSystemConfigs, ScheduleLabel};

/// Maximum number of fixed-update steps per frame to prevent spiral-of-death.
const MAX_FIXED_STEPS_PER_FRAME: u32 = 10;

/// Labels for each engine execution stage.
///
/// Stages run in the order listed, top to bottom, every frame.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EngineSchedule {
    /// Attach missing components, apply input.
    PreUpdate,
    /// Deterministic integration at 60 Hz.
    FixedUpdate,
    /// Controllers and render-facing sync.
    Update,
    /// Spatial index maintenance and validation.
    PostUpdate,
}

impl EngineSchedule {
    /// All stages in execution order.
    pub const ALL: [EngineSchedule; 4] = [
        EngineSchedule::PreUpdate,
        EngineSchedule::FixedUpdate,
        EngineSchedule::Update,
        EngineSchedule::PostUpdate,
    ];
}

/// Ordered collection of [`Schedule`]s that drives one engine frame.
///
/// `FixedUpdate` uses a time-accumulator pattern to tick at a stable 60 Hz
/// regardless of the actual frame rate.
pub struct EngineSchedules {
    schedules: Vec<(EngineSchedule, Schedule)>,
    fixed_accumulator: f64,
    fixed_dt: f64,
}

impl EngineSchedules {
    /// Create a new set of engine schedules with default fixed timestep (1/60 s).
    pub fn new() -> Self {
        Self::with_fixed_dt(1.0 / 60.0)
    }

    /// Create engine schedules with a custom fixed timestep in seconds.
    pub fn with_fixed_dt(fixed_dt: f64) -> Self {
        let schedules = EngineSchedule::ALL
            .into_iter()
            .map(|label| {
                let schedule = Schedule::new(label.clone());
                (label, schedule)
            })
            .collect();

        Self {
            schedules,
            fixed_accumulator: 0.0,
            fixed_dt,
        }
    }

    /// Register a system (or system tuple) into a specific stage.
    pub fn add_system<M>(&mut self, stage: EngineSchedule, system: impl IntoSystemConfigs<M>) {
        match self.get_schedule_mut(&stage) {
            Some(schedule) => {
                schedule.add_systems(system);
            }
            None => panic!("Unknown stage: {stage:?}"),
        }
    }

    /// Run all stages in order for one frame.
    ///
    /// Advances [`TimeRes`](crate::TimeRes) first when present. `FixedUpdate`
    /// may run 0–[`MAX_FIXED_STEPS_PER_FRAME`] times based on accumulated
    /// delta time. All other stages run exactly once.
    pub fn run(&mut self, world: &mut World, frame_dt: f64) {
        if let Some(mut time) = world.get_resource_mut::<crate::TimeRes>() {
            time.advance(frame_dt);
            time.fixed_delta = self.fixed_dt as f32;
        }

        self.run_stage(EngineSchedule::PreUpdate, world);

        self.fixed_accumulator += frame_dt;
        let mut steps: u32 = 0;
        while self.fixed_accumulator >= self.fixed_dt && steps < MAX_FIXED_STEPS_PER_FRAME {
            self.run_stage(EngineSchedule::FixedUpdate, world);
            self.fixed_accumulator -= self.fixed_dt;
            steps += 1;
        }

        self.run_stage(EngineSchedule::Update, world);
        self.run_stage(EngineSchedule::PostUpdate, world);
    }

    /// Returns the current fixed-update accumulator value in seconds.
    pub fn fixed_accumulator(&self) -> f64 {
        self.fixed_accumulator
    }

    /// Returns the fixed timestep in seconds (default 1/60).
    pub fn fixed_dt(&self) -> f64 {
        self.fixed_dt
    }

    /// Returns a mutable reference to the schedule for a given stage.
    ///
    /// Useful for configuring system sets and ordering constraints.
    pub fn get_schedule_mut(&mut self, stage: &EngineSchedule) -> Option<&mut Schedule> {
        self.schedules
            .iter_mut()
            .find(|(label, _)| label == stage)
            .map(|(_, schedule)| schedule)
    }

    /// Force-initialize all schedules, validating the dependency graph.
    ///
    /// Panics with a descriptive error if any cycle is detected.
    pub fn initialize_all(&mut self, world: &mut World) {
        for (label, schedule) in &mut self.schedules {
            if let Err(err) = schedule.initialize(world) {
                panic!("schedule {label:?} failed to build: {err}");
            }
        }
    }

    fn run_stage(&mut self, target: EngineSchedule, world: &mut World) {
        if let Some(schedule) = self.get_schedule_mut(&target) {
            schedule.run(world);
        }
    }
}

impl Default for EngineSchedules {
    fn default() -> Self {
        Self::new()
    }
}
