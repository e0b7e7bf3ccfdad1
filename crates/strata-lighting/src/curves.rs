//! Pure lighting curves over the day/night clock.

use std::f32::consts::PI;

use glam::Vec3;

pub const SUN_DAY: Vec3 = Vec3::new(0.8, 0.8, 0.6);
pub const SUN_TWILIGHT: Vec3 = Vec3::new(1.0, 0.1, 0.01);

/// Sun height below which its color starts shifting toward [`SUN_TWILIGHT`].
pub const TWILIGHT_HEIGHT: f32 = 0.3;

/// Keeps the sun faintly lit just before sunrise and after sunset.
pub const HORIZON_GLOW: f32 = 0.07;

pub const AMBIENT_DAY: Vec3 = Vec3::new(0.03, 0.06, 0.09);
pub const AMBIENT_NIGHT: Vec3 = Vec3::new(0.001, 0.008, 0.016);
pub const AMBIENT_TWILIGHT: Vec3 = Vec3::new(0.01, 0.017, 0.02);

/// Half-width of the twilight band in normalized sun height.
pub const TWILIGHT_ZONE: f32 = 0.2;

/// Sun pitch in radians for clock value `t`.
pub fn sun_angle(t: f32) -> f32 {
    (t + 1.0) * PI
}

/// Sine of the sun's elevation: `1` at noon, `-1` at midnight.
pub fn sun_height(t: f32) -> f32 {
    -sun_angle(t).sin()
}

pub fn sun_color(height: f32) -> Vec3 {
    let low = TWILIGHT_HEIGHT - height;
    if low > 0.0 {
        SUN_DAY.lerp(SUN_TWILIGHT, (low / TWILIGHT_HEIGHT).min(1.0))
    } else {
        SUN_DAY
    }
}

pub fn sun_intensity(height: f32) -> f32 {
    (height + HORIZON_GLOW).max(0.0)
}

/// Ambient color: night to day by sun height, pulled toward the twilight
/// tint near the horizon.
pub fn ambient_color(height: f32) -> Vec3 {
    let s = ((height + 1.0) / 2.0).clamp(0.0, 1.0);
    let twilight = (TWILIGHT_ZONE - (s - 0.5).abs()).max(0.0) / TWILIGHT_ZONE;
    AMBIENT_NIGHT.lerp(AMBIENT_DAY, s).lerp(AMBIENT_TWILIGHT, twilight)
}
