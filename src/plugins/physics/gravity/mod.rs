use avian3d::{
    math::{AdjustPrecision, Scalar, Vector},
    prelude::*,
};
use bevy::prelude::*;
use thiserror::Error;

pub mod point;
pub mod sync;
pub mod system;

pub use point::SphericalGravitationalPoint;
pub use system::GravitationalSystem;

use sync::{apply_local_gravities, compute_local_gravities, sync_gravitational_points};

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum GravitationalSystemSet {
    /// Copies [`GlobalTransform`] translations into [`SphericalGravitationalPoint`]s.
    SyncPoints,
    /// Samples the [`GravitationalSystem`] for every [`GravitationalBody`] and
    /// writes the result to its [`LocalGravity`].
    Compute,
    /// Integrates [`LocalGravity`] into the [`LinearVelocity`] of dynamic bodies.
    Apply,
}

/// Registers the [`GravitationalSystem`] resource and the systems that feed
/// gravitational points into the physics step.
///
/// The systems run in [`FixedPostUpdate`] ahead of [`PhysicsSet::Prepare`].
pub struct GravitationalPlugin;

impl Plugin for GravitationalPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GravitationalSystem>()
            .register_type::<LocalGravity>()
            .register_type::<GravitationalBody>()
            .configure_sets(
                FixedPostUpdate,
                (
                    GravitationalSystemSet::SyncPoints,
                    GravitationalSystemSet::Compute,
                    GravitationalSystemSet::Apply,
                )
                    .chain()
                    .before(PhysicsSet::Prepare),
            )
            .add_systems(
                FixedPostUpdate,
                (
                    sync_gravitational_points.in_set(GravitationalSystemSet::SyncPoints),
                    compute_local_gravities.in_set(GravitationalSystemSet::Compute),
                    apply_local_gravities.in_set(GravitationalSystemSet::Apply),
                ),
            );
    }
}

/// A source of gravitational pull that can be sampled at any world location.
pub trait GravitationalPoint {
    /// The force this point exerts on `location`. Zero when `location` is out of range.
    fn force_at(&self, location: Vector) -> Vector;
}

#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum GravityError {
    #[error("gravitational radius must be finite and non-negative, got {0}")]
    InvalidRadius(Scalar),
}

/// Marks an entity as affected by the gravitational points in the [`GravitationalSystem`].
#[derive(Component, Reflect, Debug, Default, Copy, Clone)]
#[reflect(Component)]
#[require(LocalGravity)]
pub struct GravitationalBody;

/// The gravity currently acting on a [`GravitationalBody`].
#[derive(Component, Reflect, Debug, Default, Copy, Clone, PartialEq)]
#[reflect(Component)]
#[require(Transform)]
pub struct LocalGravity(pub Vector);

impl LocalGravity {
    pub fn new(gravity: Vector) -> Self {
        Self(gravity)
    }

    pub fn as_vec(&self) -> Vector {
        self.0
    }

    pub fn set(&mut self, gravity: Vector) {
        self.0 = gravity;
    }
}
