use avian3d::math::Scalar;

pub const PHYSICS_TICK_RATE_HZ: f64 = 144.0;

pub const DEFAULT_GRAVITATIONAL_STRENGTH: Scalar = 9.82;
pub const DEFAULT_GRAVITATIONAL_RADIUS: Scalar = 1.0;
