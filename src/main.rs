#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::prelude::*;

use gravitational_points::SandboxPlugin;

fn main() -> AppExit {
    let window = Window {
        title: "Gravitational Points".into(),
        resolution: (1280.0, 720.0).into(),
        ..default()
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_plugins(SandboxPlugin)
        .run()
}
