#[cfg(debug_assertions)]
pub mod debug;
pub mod physics;

pub use physics::PhysicsPlugin;
