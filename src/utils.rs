use crate::body::RigidBody;
use crate::engine::PhysicsEngine;
use crate::error::{PhysicsError, Result};
use crate::vector::Vector2D;

/// Two unit-mass circles of radius 20 heading straight at each other along
/// `y = 300`, starting at `x = 100` and `x = 700`. No gravity.
pub fn head_on_pair(speed: f64) -> Result<PhysicsEngine> {
    let mut engine = PhysicsEngine::new(Vector2D::ZERO);
    engine.add_body(RigidBody::circle(
        Vector2D::new(100.0, 300.0),
        Vector2D::new(speed, 0.0),
        1.0,
        20.0,
    )?);
    engine.add_body(RigidBody::circle(
        Vector2D::new(700.0, 300.0),
        Vector2D::new(-speed, 0.0),
        1.0,
        20.0,
    )?);
    Ok(engine)
}

/// Generates `n` dynamic circles scattered over a `width` x `height` box, resting
/// on a row of static circles along the bottom edge. The same `seed` always
/// produces the same scene. `width` and `height` must be finite and non-negative.
/// - Radii are between 5 and 15, mass grows with the area.
/// - Velocities are random in both axes, up to 50 units per second.
pub fn scatter(n: usize, width: f64, height: f64, seed: u64) -> Result<PhysicsEngine> {
    if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
        return Err(PhysicsError::InvalidBounds(width, height));
    }

    let mut rng = fastrand::Rng::with_seed(seed);
    let mut engine = PhysicsEngine::default();

    // Static floor made of overlapping circles
    let floor_radius = 20.0;
    let mut x = 0.0;
    while x <= width {
        engine.add_body(RigidBody::fixed_circle(
            Vector2D::new(x, height + floor_radius),
            floor_radius,
        )?);
        x += floor_radius;
    }

    for _ in 0..n {
        let radius = 5.0 + rng.f64() * 10.0;
        let mass = radius * radius * 0.01;
        let pos = Vector2D::new(rng.f64() * width, rng.f64() * height);
        let vel = Vector2D::new(rng.f64() * 100.0 - 50.0, rng.f64() * 100.0 - 50.0);

        engine.add_body(RigidBody::circle(pos, vel, mass, radius)?);
    }

    Ok(engine)
}
