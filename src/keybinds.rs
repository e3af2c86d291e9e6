use bevy::prelude::KeyCode;

#[cfg(debug_assertions)]
pub const TOGGLE_GRAVITY_GIZMOS: KeyCode = KeyCode::F1;
#[cfg(debug_assertions)]
pub const TOGGLE_PHYSICS_GIZMOS: KeyCode = KeyCode::F2;
