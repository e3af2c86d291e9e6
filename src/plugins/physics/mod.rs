use avian3d::PhysicsPlugins;
use bevy::app::{App, Plugin};
use bevy::prelude::{Fixed, Time};

pub mod gravity;

pub use gravity::{
    GravitationalBody, GravitationalPlugin, GravitationalPoint, GravitationalSystem,
    GravitationalSystemSet, GravityError, LocalGravity, SphericalGravitationalPoint,
};

use crate::constants::physics::PHYSICS_TICK_RATE_HZ;

/// Uniform gravity applied by avian to every body. Gravitational points replace it,
/// so [`PhysicsPlugin`] sets it to zero.
pub type GlobalGravity = avian3d::dynamics::integrator::Gravity;

pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PhysicsPlugins::default())
            .insert_resource(Time::<Fixed>::from_hz(PHYSICS_TICK_RATE_HZ))
            .insert_resource(GlobalGravity::ZERO)
            .add_plugins(GravitationalPlugin);
    }
}
