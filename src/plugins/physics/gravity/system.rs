use super::*;

/// Registry of the gravitational points that are currently active.
///
/// Only holds [`Entity`] ids; the points themselves stay owned by their entities.
/// Points are registered and unregistered by the component hooks on
/// [`SphericalGravitationalPoint`], but [`register`](Self::register) and
/// [`unregister`](Self::unregister) are public for code that manages the
/// lifecycle itself.
#[derive(Resource, Debug, Default, Clone)]
pub struct GravitationalSystem {
    points: Vec<Entity>,
}

impl GravitationalSystem {
    /// Returns `false` if the entity was already registered.
    pub fn register(&mut self, entity: Entity) -> bool {
        if self.contains(entity) {
            return false;
        }
        debug!("registered gravitational point {entity}");
        self.points.push(entity);
        true
    }

    /// Returns `false` if the entity wasn't registered.
    pub fn unregister(&mut self, entity: Entity) -> bool {
        let Some(index) = self.points.iter().position(|point| *point == entity) else {
            return false;
        };
        debug!("unregistered gravitational point {entity}");
        self.points.swap_remove(index);
        true
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.points.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.points.iter().copied()
    }

    /// Sums the force of every registered point at `location`.
    ///
    /// `lookup` resolves an entity to its point. Entities it can't resolve are skipped.
    pub fn gravity_at<'a, P, F>(&self, location: Vector, lookup: F) -> Vector
    where
        P: GravitationalPoint + 'a,
        F: Fn(Entity) -> Option<&'a P>,
    {
        self.points
            .iter()
            .filter_map(|entity| lookup(*entity))
            .fold(Vector::ZERO, |gravity, point| {
                gravity + point.force_at(location)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bevy::utils::HashMap;

    fn entities(count: u32) -> Vec<Entity> {
        (0..count).map(Entity::from_raw).collect()
    }

    #[test]
    fn register_rejects_duplicates() {
        let mut system = GravitationalSystem::default();
        let ids = entities(2);
        let (a, b) = (ids[0], ids[1]);

        assert!(system.register(a));
        assert!(!system.register(a));
        assert!(system.register(b));
        assert_eq!(system.len(), 2);
    }

    #[test]
    fn unregister_unknown_is_noop() {
        let mut system = GravitationalSystem::default();
        let ids = entities(2);
        let (a, b) = (ids[0], ids[1]);
        system.register(a);

        assert!(!system.unregister(b));
        assert!(system.unregister(a));
        assert!(!system.unregister(a));
        assert!(system.is_empty());
    }

    #[test]
    fn gravity_sums_registered_points() {
        let mut system = GravitationalSystem::default();
        let ids = entities(3);
        let points: HashMap<Entity, SphericalGravitationalPoint> = HashMap::from_iter([
            (ids[0], SphericalGravitationalPoint::new(9.82, 5.0).unwrap()),
            (
                ids[1],
                SphericalGravitationalPoint::new(2.0, 100.0)
                    .unwrap()
                    .with_position(Vector::new(0.0, 10.0, 0.0)),
            ),
            // out of range
            (
                ids[2],
                SphericalGravitationalPoint::new(50.0, 1.0)
                    .unwrap()
                    .with_position(Vector::new(-20.0, 0.0, 0.0)),
            ),
        ]);
        for id in &ids {
            system.register(*id);
        }

        let gravity = system.gravity_at(Vector::ZERO, |entity| points.get(&entity));
        // origin coincides with the first point, which contributes nothing
        assert_relative_eq!(gravity.x, 0.0);
        assert_relative_eq!(gravity.y, 2.0, epsilon = 1e-5);

        let gravity = system.gravity_at(Vector::new(3.0, 0.0, 0.0), |entity| points.get(&entity));
        let expected_second = Vector::new(-3.0, 10.0, 0.0).normalize() * 2.0;
        assert_relative_eq!(gravity.x, -9.82 + expected_second.x, epsilon = 1e-4);
        assert_relative_eq!(gravity.y, expected_second.y, epsilon = 1e-4);
        assert_relative_eq!(gravity.z, 0.0);
    }

    #[test]
    fn gravity_skips_unregistered_and_unresolved() {
        let mut system = GravitationalSystem::default();
        let ids = entities(3);
        let points: HashMap<Entity, SphericalGravitationalPoint> = HashMap::from_iter([
            (ids[0], SphericalGravitationalPoint::global(1.0)),
            (ids[1], SphericalGravitationalPoint::global(100.0)),
        ]);
        system.register(ids[0]);
        // registered without a point behind it
        system.register(ids[2]);

        let gravity = system.gravity_at(Vector::X, |entity| points.get(&entity));
        assert_relative_eq!(gravity.x, -1.0, epsilon = 1e-5);
        assert_eq!(system.iter().collect::<Vec<_>>(), vec![ids[0], ids[2]]);
    }

    #[test]
    fn empty_system_has_no_gravity() {
        let system = GravitationalSystem::default();
        let gravity = system.gravity_at(Vector::ONE, |_| None::<&SphericalGravitationalPoint>);

        assert_eq!(gravity, Vector::ZERO);
    }
}
