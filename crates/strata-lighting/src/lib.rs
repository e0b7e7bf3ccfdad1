//! Day/night cycle: a shared clock, the sun it drives, and ambient light.
//!
//! [`TimeOfDay::t`] advances by `speed` per second. One unit of `t` is half
//! a day: noon falls on `t = 0.5`, midnight on `t = 1.5`, and the horizon
//! crossings on whole numbers.

mod components;
pub mod curves;
mod systems;

pub use components::{Canvas, DirectionalLight, LightColor, LightIntensity, Sun, TimeOfDay};
pub use systems::{
    advance_time_of_day, attach_sun_components, register_lighting_systems,
    sync_directional_light, update_ambient_light, update_sun,
};
