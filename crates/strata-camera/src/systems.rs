//! Camera bootstrap, acceleration, and sync systems.

use bevy_ecs::prelude::*;
use glam::Vec3;
use strata_ecs::{
    AngularVelocity, EngineSchedule, EngineSchedules, InputState, Position, PreUpdateSet,
    Rotation, TimeRes, UpdateSet, Velocity,
};
use tracing::debug;

use crate::actions::*;
use crate::{Camera, CameraController, CameraSettings};

/// Controlled cameras still missing part of their transform.
type MissingTransform = (
    With<Camera>,
    With<CameraController>,
    Or<(
        Without<Position>,
        Without<Rotation>,
        Without<Velocity>,
        Without<AngularVelocity>,
    )>,
);

/// Cameras whose transform moved since the last sync.
type MovedCamera = (
    With<CameraController>,
    Or<(Changed<Position>, Changed<Rotation>)>,
);

/// Moves `v` toward zero by `amount` without crossing it.
fn decelerate(v: f32, amount: f32) -> f32 {
    if v > 0.0 {
        (v - amount).max(0.0)
    } else if v < 0.0 {
        (v + amount).min(0.0)
    } else {
        v
    }
}

/// Gives controlled cameras whatever transform components they lack.
/// Existing values are left untouched.
///
/// **Stage:** PreUpdate, `PreUpdateSet::Bootstrap`.
pub fn attach_camera_transform(
    mut commands: Commands,
    settings: Res<CameraSettings>,
    query: Query<
        (
            Entity,
            Has<Position>,
            Has<Rotation>,
            Has<Velocity>,
            Has<AngularVelocity>,
        ),
        MissingTransform,
    >,
) {
    for (entity, has_position, has_rotation, has_velocity, has_angular) in &query {
        let mut camera = commands.entity(entity);
        if !has_position {
            camera.try_insert(Position(settings.spawn_position));
        }
        if !has_rotation {
            camera.try_insert(Rotation::default());
        }
        if !has_velocity {
            camera.try_insert(Velocity::default());
        }
        if !has_angular {
            camera.try_insert(AngularVelocity::default());
        }
        debug!(?entity, "attached camera transform");
    }
}

/// Turns held movement, turning, and gear actions into velocity changes.
/// Brakes on every axis that received no input this frame.
///
/// **Stage:** Update, `UpdateSet::Controllers`.
pub fn accelerate_camera(
    input: Res<InputState>,
    time: Res<TimeRes>,
    settings: Res<CameraSettings>,
    mut query: Query<(
        &Rotation,
        &mut Velocity,
        &mut AngularVelocity,
        &mut CameraController,
    )>,
) {
    let dt = time.delta;
    let held = |action: &str| input.is_active(action);

    for (rotation, mut velocity, mut angular, mut controller) in &mut query {
        let gear = controller.gear;
        let speed = velocity.0.length();

        let mut moved = false;
        if speed < gear * settings.gear_factor {
            let accel = gear * dt * settings.acceleration;
            let yaw = rotation.0.y;
            let forward = Vec3::new(yaw.sin(), 0.0, yaw.cos());
            let right = Vec3::new(yaw.cos(), 0.0, -yaw.sin());
            let bindings = [
                (MOVE_FORWARD, forward),
                (MOVE_BACK, -forward),
                (MOVE_RIGHT, right),
                (MOVE_LEFT, -right),
                (MOVE_UP, Vec3::NEG_Y),
                (MOVE_DOWN, Vec3::Y),
            ];
            for (action, direction) in bindings {
                if held(action) {
                    velocity.0 += direction * accel;
                    moved = true;
                }
            }
        }
        if speed > 0.0 && !moved {
            let braking = gear * dt * settings.acceleration * settings.deceleration;
            let v = velocity.0;
            let n = (v / speed).abs();
            velocity.0 = Vec3::new(
                decelerate(v.x, braking * n.x),
                decelerate(v.y, braking * n.y),
                decelerate(v.z, braking * n.z),
            );
        }

        let mut turned = false;
        if angular.0.length() < settings.max_angular_speed {
            let step = dt * settings.angular_acceleration;
            let bindings = [
                (TURN_RIGHT, Vec3::new(0.0, step, 0.0)),
                (TURN_LEFT, Vec3::new(0.0, -step, 0.0)),
                (LOOK_UP, Vec3::new(-step, 0.0, 0.0)),
                (LOOK_DOWN, Vec3::new(step, 0.0, 0.0)),
            ];
            for (action, delta) in bindings {
                if held(action) {
                    angular.0 += delta;
                    turned = true;
                }
            }
        }
        if !turned && (angular.0.x != 0.0 || angular.0.y != 0.0) {
            let braking = dt * settings.angular_acceleration * settings.angular_deceleration;
            let av = angular.0;
            angular.0 = Vec3::new(decelerate(av.x, braking), decelerate(av.y, braking), av.z);
        }

        let mut next_gear = gear;
        if held(GEAR_DOWN) {
            next_gear -= dt * CameraController::GEAR_RATE;
        }
        if held(GEAR_UP) {
            next_gear += dt * CameraController::GEAR_RATE;
        }
        let next_gear = next_gear.max(CameraController::MIN_GEAR);
        if next_gear != gear {
            controller.gear = next_gear;
        }
    }
}

/// Cancels downward velocity that would carry a limited camera past
/// `max_y` within this frame.
///
/// **Stage:** Update, `UpdateSet::Controllers`, after [`accelerate_camera`].
pub fn limit_camera_y(
    time: Res<TimeRes>,
    mut query: Query<(&Position, &mut Velocity, &CameraController)>,
) {
    for (position, mut velocity, controller) in &mut query {
        if !controller.limit_y {
            continue;
        }
        let step = velocity.0.y * time.delta;
        if step > 0.0 && position.0.y + step > controller.max_y {
            velocity.0.y = 0.0;
        }
    }
}

/// Copies the controlled transform into [`Camera`].
///
/// **Stage:** Update, `UpdateSet::Sync`.
pub fn sync_camera(mut query: Query<(&mut Camera, &Position, &Rotation), MovedCamera>) {
    for (mut camera, position, rotation) in &mut query {
        camera.position = position.0;
        camera.look_at = position.0 + rotation.direction();
    }
}

/// Insert default [`CameraSettings`] (unless already present) and register
/// the camera systems.
pub fn register_camera_systems(world: &mut World, schedules: &mut EngineSchedules) {
    world.init_resource::<CameraSettings>();

    schedules.add_system(
        EngineSchedule::PreUpdate,
        attach_camera_transform.in_set(PreUpdateSet::Bootstrap),
    );
    schedules.add_system(
        EngineSchedule::Update,
        (accelerate_camera, limit_camera_y)
            .chain()
            .in_set(UpdateSet::Controllers),
    );
    schedules.add_system(EngineSchedule::Update, sync_camera.in_set(UpdateSet::Sync));
}
