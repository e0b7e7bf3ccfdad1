//! Explicit-Euler integration of velocities into transforms.
//!
//! Both systems run in [`FixedUpdate`](crate::EngineSchedule::FixedUpdate)
//! and step by [`TimeRes::fixed_delta`]. Entities at rest are not written,
//! so their `Position` keeps its change tick and downstream change-filtered
//! systems skip them.

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::{AngularVelocity, Position, Rotation, TimeRes, Velocity};

/// Advances [`Position`] by [`Velocity`] times the fixed step.
///
/// **Stage:** FixedUpdate (reads `Velocity`, writes `Position`).
pub fn integrate_velocity(time: Res<TimeRes>, mut query: Query<(&mut Position, &Velocity)>) {
    let dt = time.fixed_delta;
    for (mut pos, vel) in &mut query {
        if vel.0 == Vec3::ZERO {
            continue;
        }
        pos.0 += vel.0 * dt;
    }
}

/// Advances [`Rotation`] by [`AngularVelocity`] times the fixed step.
///
/// **Stage:** FixedUpdate (reads `AngularVelocity`, writes `Rotation`).
pub fn integrate_angular_velocity(
    time: Res<TimeRes>,
    mut query: Query<(&mut Rotation, &AngularVelocity)>,
) {
    let dt = time.fixed_delta;
    for (mut rot, av) in &mut query {
        if av.0 == Vec3::ZERO {
            continue;
        }
        rot.0 += av.0 * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_time(dt: f32) -> TimeRes {
        TimeRes {
            fixed_delta: dt,
            ..Default::default()
        }
    }

    #[test]
    fn test_velocity_moves_position() {
        let mut world = World::new();
        world.insert_resource(fixed_time(0.5));
        let e = world
            .spawn((Position::new(1.0, 0.0, 0.0), Velocity::new(2.0, 0.0, -4.0)))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(integrate_velocity);
        schedule.run(&mut world);

        assert_eq!(world.get::<Position>(e).unwrap().0, Vec3::new(2.0, 0.0, -2.0));
    }

    #[test]
    fn test_angular_velocity_turns_rotation() {
        let mut world = World::new();
        world.insert_resource(fixed_time(0.1));
        let e = world
            .spawn((Rotation::default(), AngularVelocity::new(0.0, 10.0, 0.0)))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(integrate_angular_velocity);
        schedule.run(&mut world);

        let rot = world.get::<Rotation>(e).unwrap();
        assert!((rot.0.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_resting_entity_is_not_marked_changed() {
        #[derive(Resource, Default)]
        struct Moved(usize);

        let mut world = World::new();
        world.insert_resource(fixed_time(1.0));
        world.insert_resource(Moved::default());
        world.spawn((Position::default(), Velocity::default()));

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                integrate_velocity,
                |mut moved: ResMut<Moved>, q: Query<(), Changed<Position>>| {
                    moved.0 = q.iter().count();
                },
            )
                .chain(),
        );

        // First run sees the spawn.
        schedule.run(&mut world);
        assert_eq!(world.resource::<Moved>().0, 1);

        schedule.run(&mut world);
        assert_eq!(world.resource::<Moved>().0, 0);
    }
}
