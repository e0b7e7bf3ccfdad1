//! Camera components and tuning.

use bevy_ecs::prelude::*;
use glam::Vec3;

/// Render-facing camera state, written by [`sync_camera`](crate::sync_camera).
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            look_at: Vec3::Z,
            up: Vec3::Y,
            fov: 30.0_f32.to_radians(),
        }
    }
}

/// Per-camera controller state.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct CameraController {
    /// Speed multiplier; top speed is `gear * gear_factor`. Never below
    /// [`CameraController::MIN_GEAR`].
    pub gear: f32,
    /// Stop downward motion at `max_y`.
    pub limit_y: bool,
    pub max_y: f32,
}

impl CameraController {
    pub const MIN_GEAR: f32 = 0.1;

    /// Gear units per second while a gear action is held.
    pub const GEAR_RATE: f32 = 10.0;
}

impl Default for CameraController {
    fn default() -> Self {
        Self {
            gear: 1.0,
            limit_y: false,
            max_y: 0.0,
        }
    }
}

/// Acceleration constants shared by every camera.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct CameraSettings {
    /// Linear acceleration per unit of gear, in units/s².
    pub acceleration: f32,
    /// Fraction of `acceleration` applied as braking when no move action is held.
    pub deceleration: f32,
    /// Angular acceleration in rad/s².
    pub angular_acceleration: f32,
    /// Multiple of `angular_acceleration` applied as braking.
    pub angular_deceleration: f32,
    /// Turning stops accelerating above this angular speed (rad/s).
    pub max_angular_speed: f32,
    /// Top linear speed per unit of gear.
    pub gear_factor: f32,
    /// Where bootstrapped cameras start.
    pub spawn_position: Vec3,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            acceleration: 40.0,
            deceleration: 0.3,
            angular_acceleration: 5.0,
            angular_deceleration: 2.0,
            max_angular_speed: 1.5,
            gear_factor: 5.0,
            spawn_position: Vec3::new(0.0, -1.5, 0.0),
        }
    }
}
