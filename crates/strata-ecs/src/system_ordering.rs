//! System set definitions and ordering constraints for engine stages.
//!
//! Each stage groups its systems into named [`SystemSet`]s. Inter-set
//! ordering keeps the data flow one-directional: bootstrap before
//! integration, controllers before render-facing sync, and spatial
//! indexing after everything that moves entities.

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::Schedule;

use crate::{EngineSchedule, EngineSchedules};

/// Sets for systems in the PreUpdate stage.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PreUpdateSet {
    /// Apply this frame's input events.
    Input,
    /// Attach components that newly spawned entities are missing.
    Bootstrap,
}

/// Sets for systems in the FixedUpdate stage.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FixedUpdateSet {
    /// Integrate velocities into transforms.
    Integration,
}

/// Sets for systems in the Update stage.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum UpdateSet {
    /// Controllers that turn input and time into velocities and rotations.
    Controllers,
    /// Copy transforms into render-facing components.
    Sync,
}

/// Sets for systems in the PostUpdate stage.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PostUpdateSet {
    /// Rebuild spatial acceleration structures from final positions.
    SpatialIndexUpdate,
    /// Read-only reporting over the settled frame.
    Diagnostics,
}

/// Configure ordering constraints for the PreUpdate stage.
pub fn configure_preupdate_ordering(schedule: &mut Schedule) {
    schedule.configure_sets(PreUpdateSet::Input.before(PreUpdateSet::Bootstrap));
}

/// Configure ordering constraints for the FixedUpdate stage.
///
/// A single set today; kept as a function so every stage is configured the
/// same way.
pub fn configure_fixedupdate_ordering(schedule: &mut Schedule) {
    schedule.configure_sets(FixedUpdateSet::Integration);
}

/// Configure ordering constraints for the Update stage.
pub fn configure_update_ordering(schedule: &mut Schedule) {
    schedule.configure_sets(UpdateSet::Controllers.before(UpdateSet::Sync));
}

/// Configure ordering constraints for the PostUpdate stage.
pub fn configure_postupdate_ordering(schedule: &mut Schedule) {
    schedule.configure_sets(PostUpdateSet::SpatialIndexUpdate.before(PostUpdateSet::Diagnostics));
}

/// Apply every stage's ordering constraints to `schedules`.
pub fn configure_all_ordering(schedules: &mut EngineSchedules) {
    let configure: [(EngineSchedule, fn(&mut Schedule)); 4] = [
        (EngineSchedule::PreUpdate, configure_preupdate_ordering),
        (EngineSchedule::FixedUpdate, configure_fixedupdate_ordering),
        (EngineSchedule::Update, configure_update_ordering),
        (EngineSchedule::PostUpdate, configure_postupdate_ordering),
    ];
    for (stage, apply) in configure {
        if let Some(schedule) = schedules.get_schedule_mut(&stage) {
            apply(schedule);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Resource, Default)]
    struct ExecutionOrder(Vec<&'static str>);

    fn push(label: &'static str) -> impl FnMut(ResMut<ExecutionOrder>) {
        move |mut order: ResMut<ExecutionOrder>| order.0.push(label)
    }

    #[test]
    fn test_bootstrap_runs_after_input() {
        let mut world = World::new();
        world.insert_resource(ExecutionOrder::default());

        let mut schedule = Schedule::default();
        configure_preupdate_ordering(&mut schedule);
        schedule.add_systems((
            push("bootstrap").in_set(PreUpdateSet::Bootstrap),
            push("input").in_set(PreUpdateSet::Input),
        ));

        schedule.run(&mut world);

        assert_eq!(world.resource::<ExecutionOrder>().0, vec!["input", "bootstrap"]);
    }

    #[test]
    fn test_sync_runs_after_controllers() {
        let mut world = World::new();
        world.insert_resource(ExecutionOrder::default());

        let mut schedule = Schedule::default();
        configure_update_ordering(&mut schedule);
        schedule.add_systems((
            push("sync").in_set(UpdateSet::Sync),
            push("controller").in_set(UpdateSet::Controllers),
        ));

        schedule.run(&mut world);

        assert_eq!(world.resource::<ExecutionOrder>().0, vec!["controller", "sync"]);
    }

    #[test]
    fn test_diagnostics_run_after_spatial_index() {
        let mut world = World::new();
        world.insert_resource(ExecutionOrder::default());

        let mut schedule = Schedule::default();
        configure_postupdate_ordering(&mut schedule);
        schedule.add_systems((
            push("diagnostics").in_set(PostUpdateSet::Diagnostics),
            push("spatial").in_set(PostUpdateSet::SpatialIndexUpdate),
        ));

        schedule.run(&mut world);

        assert_eq!(world.resource::<ExecutionOrder>().0, vec!["spatial", "diagnostics"]);
    }

    #[test]
    fn test_configure_all_ordering_applies_to_engine_schedules() {
        let mut world = World::new();
        world.insert_resource(ExecutionOrder::default());
        world.insert_resource(crate::TimeRes::default());

        let mut schedules = EngineSchedules::new();
        configure_all_ordering(&mut schedules);
        schedules.add_system(EngineSchedule::Update, push("sync").in_set(UpdateSet::Sync));
        schedules.add_system(
            EngineSchedule::Update,
            push("controller").in_set(UpdateSet::Controllers),
        );

        schedules.run(&mut world, 1.0 / 60.0);

        assert_eq!(world.resource::<ExecutionOrder>().0, vec!["controller", "sync"]);
    }
}
