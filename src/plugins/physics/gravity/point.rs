use bevy::ecs::{component::ComponentId, world::DeferredWorld};

use super::*;
use crate::constants::physics::{DEFAULT_GRAVITATIONAL_RADIUS, DEFAULT_GRAVITATIONAL_STRENGTH};

/// A sphere-shaped gravitational point.
///
/// Pulls every queried location inside its radius toward its center with a
/// constant force of [`strength`](Self::strength). A global point ignores the
/// radius and pulls everything.
///
/// Inserting the component registers the entity with the [`GravitationalSystem`]
/// resource, removing it (or despawning the entity) unregisters it. Replacing it
/// keeps the registration; the position is always taken from the entity's transform.
///
/// # Example
/// ```
/// use avian3d::math::Vector;
/// use gravitational_points::plugins::physics::{GravitationalPoint, SphericalGravitationalPoint};
///
/// let point = SphericalGravitationalPoint::new(9.82, 5.0).unwrap();
/// let force = point.force_at(Vector::new(3.0, 0.0, 0.0));
/// assert!((force.x + 9.82).abs() < 1e-5);
/// ```
#[derive(Component, Debug, Copy, Clone, PartialEq)]
#[require(Transform)]
#[component(
    on_add = on_add_gravitational_point,
    on_insert = on_insert_gravitational_point,
    on_remove = on_remove_gravitational_point
)]
pub struct SphericalGravitationalPoint {
    strength: Scalar,
    radius: Scalar,
    radius_sqr: Scalar,
    is_global: bool,
    position: Vector,
}

impl Default for SphericalGravitationalPoint {
    fn default() -> Self {
        Self {
            strength: DEFAULT_GRAVITATIONAL_STRENGTH,
            radius: DEFAULT_GRAVITATIONAL_RADIUS,
            radius_sqr: DEFAULT_GRAVITATIONAL_RADIUS * DEFAULT_GRAVITATIONAL_RADIUS,
            is_global: false,
            position: Vector::ZERO,
        }
    }
}

impl SphericalGravitationalPoint {
    pub fn new(strength: Scalar, radius: Scalar) -> Result<Self, GravityError> {
        let mut point = Self {
            strength,
            ..Default::default()
        };
        point.set_radius(radius)?;
        Ok(point)
    }

    /// A point that affects every location regardless of distance.
    pub fn global(strength: Scalar) -> Self {
        Self {
            strength,
            is_global: true,
            ..Default::default()
        }
    }

    pub fn with_position(mut self, position: Vector) -> Self {
        self.position = position;
        self
    }

    pub fn strength(&self) -> Scalar {
        self.strength
    }

    pub fn set_strength(&mut self, strength: Scalar) {
        self.strength = strength;
    }

    /// Radius of the influence sphere. Ignored when [`is_global`](Self::is_global) is true.
    pub fn radius(&self) -> Scalar {
        self.radius
    }

    pub fn radius_sqr(&self) -> Scalar {
        self.radius_sqr
    }

    /// Sets the radius and the cached squared radius together.
    ///
    /// Negative and non-finite values are rejected and leave the point untouched.
    /// A radius of zero is allowed; a non-global point then affects nothing.
    pub fn set_radius(&mut self, radius: Scalar) -> Result<(), GravityError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(GravityError::InvalidRadius(radius));
        }
        self.radius = radius;
        self.radius_sqr = radius * radius;
        Ok(())
    }

    pub fn is_global(&self) -> bool {
        self.is_global
    }

    pub fn set_global(&mut self, is_global: bool) {
        self.is_global = is_global;
    }

    /// World-space center, kept in sync with the entity's [`GlobalTransform`]
    /// by [`sync_gravitational_points`](super::sync::sync_gravitational_points).
    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn set_position(&mut self, position: Vector) {
        self.position = position;
    }

    /// Whether `location` lies inside the influence of this point.
    pub fn affects(&self, location: Vector) -> bool {
        self.is_global || (self.position - location).length_squared() < self.radius_sqr
    }
}

impl GravitationalPoint for SphericalGravitationalPoint {
    fn force_at(&self, location: Vector) -> Vector {
        if !self.affects(location) {
            return Vector::ZERO;
        }
        (self.position - location).normalize_or_zero() * self.strength
    }
}

fn on_insert_gravitational_point(mut world: DeferredWorld, entity: Entity, _id: ComponentId) {
    // GlobalTransform may not be propagated yet, the local translation is the best guess until the next sync
    let translation = world
        .get::<Transform>(entity)
        .map(|transform| transform.translation);
    if let Some(translation) = translation {
        if let Some(mut point) = world.get_mut::<SphericalGravitationalPoint>(entity) {
            point.position = translation.adjust_precision();
        }
    }
}

fn on_add_gravitational_point(mut world: DeferredWorld, entity: Entity, _id: ComponentId) {
    let Some(mut system) = world.get_resource_mut::<GravitationalSystem>() else {
        warn!(
            "Entity {entity} has a SphericalGravitationalPoint but the GravitationalSystem resource is missing. \
            Did you forget to add the GravitationalPlugin?"
        );
        return;
    };
    system.register(entity);
}

fn on_remove_gravitational_point(mut world: DeferredWorld, entity: Entity, _id: ComponentId) {
    if let Some(mut system) = world.get_resource_mut::<GravitationalSystem>() {
        system.unregister(entity);
    }
}
