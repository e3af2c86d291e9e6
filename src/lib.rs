pub mod constants;
pub mod keybinds;
pub mod plugins;

use avian3d::prelude::{Collider, RigidBody};
use bevy::app::{App, Plugin, Startup};
use bevy::color::Color;
use bevy::log::error;
use bevy::math::Vec3;
use bevy::pbr::{AmbientLight, DirectionalLight, MeshMaterial3d, StandardMaterial};
use bevy::prelude::{
    default, Assets, Camera3d, ClearColor, Commands, Component, Cuboid, Mesh, Mesh3d, Name,
    ResMut, Sphere, Transform,
};

use crate::constants::physics::DEFAULT_GRAVITATIONAL_STRENGTH;
use crate::plugins::physics::{GravitationalBody, PhysicsPlugin, SphericalGravitationalPoint};

const PLANET_RADIUS: f32 = 8.0;
const PLANET_INFLUENCE_RADIUS: f32 = 30.0;

/// Sandbox scene: a planet with a spherical gravitational point and a ring of
/// bodies falling toward it.
pub struct SandboxPlugin;

impl Plugin for SandboxPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::linear_rgb(0.1, 0.1, 0.1)))
            .insert_resource(AmbientLight {
                color: Color::WHITE,
                brightness: 400.0,
            })
            .add_plugins(PhysicsPlugin)
            .add_systems(Startup, setup);

        #[cfg(debug_assertions)]
        {
            use crate::plugins::debug::DebugPlugin;
            app.add_plugins(DebugPlugin);
        }
    }
}

#[derive(Component, Default)]
pub struct SandboxCamera;

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        SandboxCamera,
        Camera3d::default(),
        Transform::from_xyz(0.0, 20.0, 60.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let planet = match SphericalGravitationalPoint::new(
        DEFAULT_GRAVITATIONAL_STRENGTH,
        PLANET_INFLUENCE_RADIUS.into(),
    ) {
        Ok(planet) => planet,
        Err(err) => {
            error!("failed to create planet: {err}");
            return;
        }
    };
    commands.spawn((
        Name::new("Planet"),
        planet,
        RigidBody::Static,
        Collider::sphere(PLANET_RADIUS.into()),
        Mesh3d(meshes.add(Sphere::new(PLANET_RADIUS))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.5, 0.3))),
        Transform::default(),
    ));

    let body_mesh = meshes.add(Cuboid::from_length(1.0));
    let body_material = materials.add(Color::srgb(0.8, 0.7, 0.6));
    for i in 0..12 {
        let angle = i as f32 / 12.0 * std::f32::consts::TAU;
        let distance = PLANET_RADIUS + 4.0 + (i % 4) as f32 * 5.0;
        commands.spawn((
            Name::new(format!("Body {i}")),
            GravitationalBody,
            RigidBody::Dynamic,
            Collider::cuboid(1.0, 1.0, 1.0),
            Mesh3d(body_mesh.clone()),
            MeshMaterial3d(body_material.clone()),
            Transform::from_xyz(angle.cos() * distance, angle.sin() * distance, 0.0),
        ));
    }
}
