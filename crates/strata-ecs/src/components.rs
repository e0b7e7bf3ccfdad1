//! Transform and motion components shared across all gameplay crates.
//!
//! Positions are plain `f32` world units. The horizontal plane is X/Z and
//! Y is vertical with positive Y pointing down, the convention the camera
//! and sun systems are written against.

use bevy_ecs::prelude::*;
use glam::Vec3;

/// World-space position of an entity.
///
/// For entities with a [`Parent`](crate::Parent) the value is relative to
/// the parent; only hierarchy roots are classified into world cells.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct Position(pub Vec3);

impl Position {
    /// Creates a new [`Position`] from world-unit coordinates.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }
}

/// Orientation as Euler angles in radians: `x` is pitch, `y` is yaw and
/// `z` is roll.
///
/// Controllers integrate yaw and pitch independently, which a quaternion
/// would make awkward, so the angles are stored directly.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct Rotation(pub Vec3);

impl Rotation {
    /// Creates a new [`Rotation`] from pitch/yaw/roll angles in radians.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Unit vector the rotation faces, derived from pitch and yaw.
    ///
    /// A zero rotation faces +Z.
    pub fn direction(&self) -> Vec3 {
        let (pitch, yaw) = (self.0.x, self.0.y);
        Vec3::new(
            yaw.sin() * pitch.cos(),
            pitch.sin(),
            yaw.cos() * pitch.cos(),
        )
    }
}

/// Linear velocity in world units per second.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct Velocity(pub Vec3);

impl Velocity {
    /// Creates a new [`Velocity`].
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }
}

/// Angular velocity in radians per second, applied per Euler axis.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct AngularVelocity(pub Vec3);

impl AngularVelocity {
    /// Creates a new [`AngularVelocity`].
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }
}

/// Human-readable debug name for an entity. Used in log messages only.
#[derive(Component, Clone, Debug, PartialEq, Eq, Default)]
pub struct Name(pub String);

impl Name {
    /// Creates a new [`Name`] from anything that converts to `String`.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// Bundle grouping the components a moving entity needs.
#[derive(Bundle, Default)]
pub struct SpatialBundle {
    /// World-space position.
    pub position: Position,
    /// Orientation.
    pub rotation: Rotation,
    /// Linear velocity.
    pub velocity: Velocity,
    /// Angular velocity.
    pub angular_velocity: AngularVelocity,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_position_can_be_added_to_entity() {
        let mut world = World::new();
        let entity = world.spawn(Position::new(1.0, 2.0, 3.0)).id();
        let pos = world.get::<Position>(entity).unwrap();
        assert_eq!(pos.0, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_query_by_component_type() {
        let mut world = World::new();
        world.spawn((Position::new(1.0, 2.0, 3.0), Velocity::new(10.0, 0.0, 0.0)));
        world.spawn(Position::new(4.0, 5.0, 6.0));
        world.spawn(Velocity::new(0.0, 0.0, 5.0));

        let mut query = world.query::<(&Position, &Velocity)>();
        let results: Vec<_> = query.iter(&world).collect();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0.0, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(results[0].1.0, Vec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn test_zero_rotation_faces_positive_z() {
        let dir = Rotation::default().direction();
        assert!((dir - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_quarter_yaw_faces_positive_x() {
        let dir = Rotation::new(0.0, FRAC_PI_2, 0.0).direction();
        assert!((dir - Vec3::X).length() < 1e-6, "got {dir}");
    }

    #[test]
    fn test_quarter_pitch_faces_up() {
        let dir = Rotation::new(FRAC_PI_2, 0.0, 0.0).direction();
        assert!((dir - Vec3::Y).length() < 1e-6, "got {dir}");
    }

    #[test]
    fn test_spatial_bundle_spawns_all_components() {
        let mut world = World::new();
        let entity = world.spawn(SpatialBundle::default()).id();
        assert!(world.get::<Position>(entity).is_some());
        assert!(world.get::<Rotation>(entity).is_some());
        assert!(world.get::<Velocity>(entity).is_some());
        assert!(world.get::<AngularVelocity>(entity).is_some());
    }

    #[test]
    fn test_default_name_is_empty() {
        assert_eq!(Name::default().0, "");
        assert_eq!(Name::new("sun").0, "sun");
    }
}
