use avian3d::{
    math::AsF32,
    prelude::{PhysicsDebugPlugin, PhysicsGizmos},
};
use bevy::{
    diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin},
    prelude::*,
};
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use crate::keybinds::{TOGGLE_GRAVITY_GIZMOS, TOGGLE_PHYSICS_GIZMOS};
use crate::plugins::physics::SphericalGravitationalPoint;

/// How the influence boundary of each gravitational point is drawn.
#[derive(Resource, Debug, Clone)]
pub struct GravityGizmoConfig {
    pub enabled: bool,
    pub color: Color,
}

impl Default for GravityGizmoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            color: Color::srgb(1.0, 0.0, 1.0),
        }
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GravityGizmoConfig>()
            .add_plugins((
                FrameTimeDiagnosticsPlugin,
                LogDiagnosticsPlugin::default(),
                WorldInspectorPlugin::default(),
                PhysicsDebugPlugin::default(),
            ))
            .add_systems(
                Update,
                (
                    toggle_gizmos.run_if(resource_changed::<ButtonInput<KeyCode>>),
                    draw_gravitational_points
                        .run_if(|config: Res<GravityGizmoConfig>| config.enabled),
                ),
            );
    }
}

fn toggle_gizmos(
    mut gravity_config: ResMut<GravityGizmoConfig>,
    mut gizmo_config_store: ResMut<GizmoConfigStore>,
    keyboard: Res<ButtonInput<KeyCode>>,
) {
    if keyboard.just_pressed(TOGGLE_GRAVITY_GIZMOS) {
        gravity_config.enabled = !gravity_config.enabled;
    }
    if keyboard.just_pressed(TOGGLE_PHYSICS_GIZMOS) {
        let (config, _) = gizmo_config_store.config_mut::<PhysicsGizmos>();
        config.enabled = !config.enabled;
    }
}

fn gizmo_radius(point: &SphericalGravitationalPoint) -> f32 {
    point.radius() as f32
}

/// Draws the influence sphere of every gravitational point as a wireframe.
fn draw_gravitational_points(
    config: Res<GravityGizmoConfig>,
    query: Query<&SphericalGravitationalPoint>,
    mut gizmos: Gizmos,
) {
    for point in query.iter() {
        gizmos.sphere(
            Isometry3d::from_translation(point.position().f32()),
            gizmo_radius(point),
            config.color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gizmo_radius_follows_point_radius() {
        let mut point = SphericalGravitationalPoint::new(9.82, 5.0).unwrap();
        assert_eq!(gizmo_radius(&point), 5.0);

        point.set_radius(12.5).unwrap();
        assert_eq!(gizmo_radius(&point), 12.5);
    }
}
