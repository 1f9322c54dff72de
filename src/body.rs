use crate::error::{PhysicsError, Result};
use crate::vector::Vector2D;

/// Collision geometry carried by a body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// No geometry; the body is integrated but never collides.
    Point,
    Circle { radius: f64 },
}

/// A mass-bearing point body, optionally with a circle for overlap testing.
///
/// A body of mass 0 is static: its inverse mass is 0, so forces, impulses and
/// positional correction never move it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigidBody {
    /// Position vector.
    pub position: Vector2D,
    /// Velocity vector.
    pub velocity: Vector2D,
    /// Acceleration accumulated since the last step (reset each step).
    pub acceleration: Vector2D,
    mass: f64,
    inv_mass: f64,
    shape: Shape,
}

impl RigidBody {
    /// Creates a body without collision geometry.
    pub fn new(position: Vector2D, velocity: Vector2D, mass: f64) -> Result<Self> {
        if !mass.is_finite() || mass < 0.0 {
            return Err(PhysicsError::InvalidMass(mass));
        }

        Ok(Self {
            position,
            velocity,
            acceleration: Vector2D::ZERO,
            mass,
            inv_mass: if mass == 0.0 { 0.0 } else { 1.0 / mass },
            shape: Shape::Point,
        })
    }

    /// Creates a circle body, the only shape that takes part in collisions.
    #[doc(alias = "CircleBody")]
    pub fn circle(position: Vector2D, velocity: Vector2D, mass: f64, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PhysicsError::InvalidRadius(radius));
        }

        let mut body = Self::new(position, velocity, mass)?;
        body.shape = Shape::Circle { radius };
        Ok(body)
    }

    /// A body that never moves.
    pub fn fixed_circle(position: Vector2D, radius: f64) -> Result<Self> {
        Self::circle(position, Vector2D::ZERO, 0.0, radius)
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn inv_mass(&self) -> f64 {
        self.inv_mass
    }

    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Radius of the bounding circle, if the body has one.
    pub fn radius(&self) -> Option<f64> {
        match self.shape {
            Shape::Circle { radius } => Some(radius),
            Shape::Point => None,
        }
    }

    /// Accumulates `force * inv_mass` into the acceleration.
    pub fn apply_force(&mut self, force: Vector2D) {
        self.acceleration += force * self.inv_mass;
    }

    pub fn clear_forces(&mut self) {
        self.acceleration = Vector2D::ZERO;
    }

    /// Semi-implicit Euler: velocity first, then position with the new velocity.
    /// Clears the accumulated acceleration afterwards.
    pub(crate) fn integrate(&mut self, dt: f64) {
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
        self.clear_forces();
    }

    pub fn momentum(&self) -> Vector2D {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }
}
