use bevy_ecs::prelude::*;
use glam::Vec3;

/// Shared day/night clock.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct TimeOfDay {
    pub t: f32,
    /// Units of `t` per second of simulated time.
    pub speed: f32,
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self { t: 0.5, speed: 0.02 }
    }
}

/// Render-facing directional light, assembled from the entity's transform,
/// [`LightColor`], and [`LightIntensity`].
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    /// Point the light aims at: `position` plus the rotation's unit direction.
    pub direction: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::Z,
            color: Vec3::ONE,
            intensity: 1.0,
        }
    }
}

/// Linear RGB color of a light source.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct LightColor(pub Vec3);

impl Default for LightColor {
    fn default() -> Self {
        Self(Vec3::ONE)
    }
}

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct LightIntensity(pub f32);

impl Default for LightIntensity {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Marks the light driven by [`TimeOfDay`].
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sun;

/// Scene-wide render settings that follow the clock.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Canvas {
    pub ambient_light: Vec3,
}
