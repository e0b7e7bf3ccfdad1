//! Fly-through camera controller driven by [`InputState`](strata_ecs::InputState)
//! actions.
//!
//! The controller only produces velocities; the engine's fixed-step
//! integration moves the camera. World Y points down, so "up" actions
//! decrease `y` and [`CameraController::max_y`] acts as a floor.

pub mod actions;
mod controller;
mod systems;

pub use controller::{Camera, CameraController, CameraSettings};
pub use systems::{
    accelerate_camera, attach_camera_transform, limit_camera_y, register_camera_systems,
    sync_camera,
};
