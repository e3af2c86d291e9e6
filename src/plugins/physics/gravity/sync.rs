use super::*;

/// Copies the world translation of every gravitational point into the point itself,
/// so force queries don't need access to the transform hierarchy.
pub fn sync_gravitational_points(
    mut query: Query<
        (&GlobalTransform, &mut SphericalGravitationalPoint),
        Or<(Changed<GlobalTransform>, Changed<SphericalGravitationalPoint>)>,
    >,
) {
    for (transform, mut point) in query.iter_mut() {
        let position = transform.translation().adjust_precision();
        if point.position() != position {
            point.set_position(position);
        }
    }
}

/// Samples the [`GravitationalSystem`] at the position of every [`GravitationalBody`]
/// and stores the result in its [`LocalGravity`].
pub fn compute_local_gravities(
    system: Res<GravitationalSystem>,
    points: Query<&SphericalGravitationalPoint>,
    mut bodies: Query<(&GlobalTransform, &mut LocalGravity), With<GravitationalBody>>,
) {
    bodies
        .par_iter_mut()
        .for_each(|(transform, mut local_gravity)| {
            let location = transform.translation().adjust_precision();
            local_gravity.set(system.gravity_at(location, |entity| points.get(entity).ok()));
        });
}

/// Accelerates dynamic rigid bodies by their [`LocalGravity`].
pub fn apply_local_gravities(
    time: Res<Time>,
    mut query: Query<(&RigidBody, &LocalGravity, &mut LinearVelocity)>,
) {
    let delta_seconds = time.delta_secs().adjust_precision();
    for (rigid_body, gravity, mut linear_velocity) in query.iter_mut() {
        if !rigid_body.is_dynamic() || gravity.0 == Vector::ZERO {
            continue;
        }
        linear_velocity.0 += gravity.0 * delta_seconds;
    }
}
