//! Clock, sun, ambient, and light sync systems.

use bevy_ecs::prelude::*;
use glam::Vec3;
use strata_ecs::{
    EngineSchedule, EngineSchedules, Position, PreUpdateSet, Rotation, TimeRes, UpdateSet,
};
use tracing::debug;

use crate::curves::{ambient_color, sun_angle, sun_color, sun_height, sun_intensity};
use crate::{Canvas, DirectionalLight, LightColor, LightIntensity, Sun, TimeOfDay};

/// Suns missing any of the components the sun system writes.
type IncompleteSun = (
    With<Sun>,
    Or<(
        Without<Rotation>,
        Without<DirectionalLight>,
        Without<LightColor>,
        Without<LightIntensity>,
    )>,
);

/// Lights with at least one changed input.
type LightInputsChanged = Or<(
    Added<DirectionalLight>,
    Changed<Position>,
    Changed<Rotation>,
    Changed<LightColor>,
    Changed<LightIntensity>,
)>;

/// Gives every [`Sun`] the rotation, color, and intensity it is driven through.
///
/// **Stage:** PreUpdate, `PreUpdateSet::Bootstrap`.
pub fn attach_sun_components(
    mut commands: Commands,
    query: Query<
        (
            Entity,
            Has<Rotation>,
            Has<DirectionalLight>,
            Has<LightColor>,
            Has<LightIntensity>,
        ),
        IncompleteSun,
    >,
) {
    for (entity, has_rotation, has_light, has_color, has_intensity) in &query {
        let mut sun = commands.entity(entity);
        if !has_rotation {
            sun.try_insert(Rotation::default());
        }
        if !has_light {
            sun.try_insert(DirectionalLight::default());
        }
        if !has_color {
            sun.try_insert(LightColor::default());
        }
        if !has_intensity {
            sun.try_insert(LightIntensity::default());
        }
        debug!(?entity, "attached sun components");
    }
}

/// **Stage:** Update, `UpdateSet::Controllers`.
pub fn advance_time_of_day(time: Res<TimeRes>, mut clock: ResMut<TimeOfDay>) {
    let step = time.delta * clock.speed;
    if step != 0.0 {
        clock.t += step;
    }
}

/// Points every [`Sun`] along the clock and sets its color and intensity.
/// While the clock is unchanged only suns added since the last run are
/// written.
///
/// **Stage:** Update, `UpdateSet::Controllers`, after [`advance_time_of_day`].
pub fn update_sun(
    clock: Res<TimeOfDay>,
    mut suns: Query<(Ref<Sun>, &mut Rotation, &mut LightColor, &mut LightIntensity)>,
) {
    let all = clock.is_changed();
    let height = sun_height(clock.t);
    for (sun, mut rotation, mut color, mut intensity) in &mut suns {
        if !all && !sun.is_added() {
            continue;
        }
        rotation.0.x = sun_angle(clock.t);
        color.0 = sun_color(height);
        intensity.0 = sun_intensity(height);
    }
}

/// Same gating as [`update_sun`], for [`Canvas::ambient_light`].
///
/// **Stage:** Update, `UpdateSet::Controllers`, after [`advance_time_of_day`].
pub fn update_ambient_light(clock: Res<TimeOfDay>, mut canvases: Query<&mut Canvas>) {
    let all = clock.is_changed();
    let ambient = ambient_color(sun_height(clock.t));
    for mut canvas in &mut canvases {
        if all || canvas.is_added() {
            canvas.ambient_light = ambient;
        }
    }
}

/// Copies transform, color, and intensity into [`DirectionalLight`].
/// Lights without a [`Position`] aim from the origin.
///
/// **Stage:** Update, `UpdateSet::Sync`.
pub fn sync_directional_light(
    mut lights: Query<
        (
            &mut DirectionalLight,
            Option<&Position>,
            Option<&Rotation>,
            Option<&LightColor>,
            Option<&LightIntensity>,
        ),
        LightInputsChanged,
    >,
) {
    for (mut light, position, rotation, color, intensity) in &mut lights {
        let origin = position.map_or(Vec3::ZERO, |p| p.0);
        if position.is_some() {
            light.position = origin;
        }
        if let Some(rotation) = rotation {
            light.direction = origin + rotation.direction();
        }
        if let Some(color) = color {
            light.color = color.0;
        }
        if let Some(intensity) = intensity {
            light.intensity = intensity.0;
        }
    }
}

/// Insert the default [`TimeOfDay`] (unless already present) and register
/// the lighting systems.
pub fn register_lighting_systems(world: &mut World, schedules: &mut EngineSchedules) {
    world.init_resource::<TimeOfDay>();

    schedules.add_system(
        EngineSchedule::PreUpdate,
        attach_sun_components.in_set(PreUpdateSet::Bootstrap),
    );
    schedules.add_system(
        EngineSchedule::Update,
        (advance_time_of_day, (update_sun, update_ambient_light))
            .chain()
            .in_set(UpdateSet::Controllers),
    );
    schedules.add_system(
        EngineSchedule::Update,
        sync_directional_light.in_set(UpdateSet::Sync),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{AMBIENT_DAY, SUN_DAY};

    fn world_at(t: f32, speed: f32, dt: f32) -> World {
        let mut world = World::new();
        world.insert_resource(TimeRes {
            delta: dt,
            ..Default::default()
        });
        world.insert_resource(TimeOfDay { t, speed });
        world
    }

    fn day_cycle() -> Schedule {
        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                attach_sun_components,
                advance_time_of_day,
                (update_sun, update_ambient_light),
                sync_directional_light,
            )
                .chain(),
        );
        schedule
    }

    #[test]
    fn test_clock_advances_by_speed() {
        let mut world = world_at(0.0, 0.5, 0.1);
        let mut schedule = Schedule::default();
        schedule.add_systems(advance_time_of_day);

        schedule.run(&mut world);
        schedule.run(&mut world);

        assert!((world.resource::<TimeOfDay>().t - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_sun_at_noon() {
        let mut world = world_at(0.5, 0.0, 0.1);
        let sun = world.spawn(Sun).id();
        let canvas = world.spawn(Canvas::default()).id();

        day_cycle().run(&mut world);

        let light = world.get::<DirectionalLight>(sun).unwrap();
        assert_eq!(light.color, SUN_DAY);
        assert!(light.intensity > 1.0);
        assert!((world.get::<Rotation>(sun).unwrap().0.x - 1.5 * std::f32::consts::PI).abs() < 1e-5);
        let ambient = world.get::<Canvas>(canvas).unwrap().ambient_light;
        assert!((ambient - AMBIENT_DAY).length() < 1e-4);
    }

    #[test]
    fn test_sun_at_night_is_off() {
        let mut world = world_at(1.5, 0.0, 0.1);
        let sun = world.spawn(Sun).id();

        day_cycle().run(&mut world);

        assert_eq!(world.get::<LightIntensity>(sun).unwrap().0, 0.0);
        assert_eq!(world.get::<DirectionalLight>(sun).unwrap().intensity, 0.0);
    }

    #[test]
    fn test_noon_light_points_at_zenith_in_y_down_world() {
        let mut world = world_at(0.5, 0.0, 0.1);
        let sun = world.spawn((Sun, Position::new(0.0, 0.0, 0.0))).id();

        day_cycle().run(&mut world);

        let light = world.get::<DirectionalLight>(sun).unwrap();
        assert!((light.direction - Vec3::new(0.0, -1.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_sun_untouched_while_clock_is_paused() {
        let mut world = world_at(0.5, 0.0, 0.1);
        let sun = world.spawn(Sun).id();
        let mut schedule = day_cycle();
        schedule.run(&mut world);

        world.get_mut::<LightColor>(sun).unwrap().0 = Vec3::ZERO;
        schedule.run(&mut world);

        assert_eq!(world.get::<LightColor>(sun).unwrap().0, Vec3::ZERO);
        assert_eq!(world.get::<DirectionalLight>(sun).unwrap().color, Vec3::ZERO);
    }

    #[test]
    fn test_late_sun_and_canvas_follow_paused_clock() {
        let mut world = world_at(0.5, 0.0, 0.1);
        let mut schedule = day_cycle();
        schedule.run(&mut world);

        let sun = world.spawn(Sun).id();
        let canvas = world.spawn(Canvas::default()).id();
        for _ in 0..3 {
            schedule.run(&mut world);
        }

        let noon = sun_intensity(sun_height(0.5));
        assert!((noon - 1.07).abs() < 1e-5);
        assert!((world.get::<LightIntensity>(sun).unwrap().0 - noon).abs() < 1e-6);
        assert!((world.get::<DirectionalLight>(sun).unwrap().intensity - noon).abs() < 1e-6);
        let ambient = world.get::<Canvas>(canvas).unwrap().ambient_light;
        assert!((ambient - AMBIENT_DAY).length() < 1e-4);
    }

    #[test]
    fn test_late_sun_leaves_existing_suns_alone() {
        let mut world = world_at(0.5, 0.0, 0.1);
        let mut schedule = day_cycle();
        let first = world.spawn(Sun).id();
        schedule.run(&mut world);
        world.get_mut::<LightColor>(first).unwrap().0 = Vec3::ZERO;

        let second = world.spawn(Sun).id();
        schedule.run(&mut world);

        assert_eq!(world.get::<LightColor>(first).unwrap().0, Vec3::ZERO);
        assert_eq!(world.get::<LightColor>(second).unwrap().0, SUN_DAY);
    }

    #[test]
    fn test_sync_copies_plain_light_inputs() {
        let mut world = World::new();
        let e = world
            .spawn((
                DirectionalLight::default(),
                Position::new(1.0, 2.0, 3.0),
                LightColor(Vec3::new(0.1, 0.2, 0.3)),
                LightIntensity(0.25),
            ))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(sync_directional_light);
        schedule.run(&mut world);

        let light = world.get::<DirectionalLight>(e).unwrap();
        assert_eq!(light.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(light.color, Vec3::new(0.1, 0.2, 0.3));
        assert_eq!(light.intensity, 0.25);
        assert_eq!(light.direction, DirectionalLight::default().direction);
    }

    #[test]
    fn test_bootstrap_keeps_existing_color() {
        let mut world = World::new();
        let sun = world.spawn((Sun, LightColor(Vec3::X))).id();

        let mut schedule = Schedule::default();
        schedule.add_systems(attach_sun_components);
        schedule.run(&mut world);

        assert_eq!(world.get::<LightColor>(sun).unwrap().0, Vec3::X);
        assert!(world.get::<DirectionalLight>(sun).is_some());
        assert!(world.get::<Rotation>(sun).is_some());
        assert!(world.get::<LightIntensity>(sun).is_some());
    }
}
