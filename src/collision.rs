//! Pairwise circle collision detection and impulse-based resolution.
//!
//! Resolution handles one pair at a time. Chains of overlapping bodies are not
//! solved globally; they settle over successive steps through positional
//! correction.

use crate::body::RigidBody;
use crate::vector::Vector2D;

/// Coefficient of restitution. 1.0 is perfectly elastic.
pub const RESTITUTION: f64 = 1.0;
/// Fraction of the penetration (beyond the slop) removed per resolution.
pub const CORRECTION_PERCENT: f64 = 0.2;
/// Penetration depth that is tolerated without positional correction.
pub const CORRECTION_SLOP: f64 = 0.01;

/// Geometry of a pair of circles, seen from `a` towards `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Unit vector from `a` to `b`.
    pub normal: Vector2D,
    /// Distance between centers, 1.0 when the centers coincide.
    pub distance: f64,
    /// Sum of radii minus distance. Positive when overlapping.
    pub penetration: f64,
}

/// True iff both bodies have a bounding circle and their centers are closer
/// than the sum of their radii. Touching circles do not collide.
pub fn detect_collision(a: &RigidBody, b: &RigidBody) -> bool {
    match (a.radius(), b.radius()) {
        (Some(ra), Some(rb)) => a.position.distance(&b.position) < ra + rb,
        _ => false,
    }
}

/// Contact geometry of two overlapping circles, or `None` if they don't collide.
pub fn contact(a: &RigidBody, b: &RigidBody) -> Option<Contact> {
    if !detect_collision(a, b) {
        return None;
    }
    manifold(a, b)
}

fn manifold(a: &RigidBody, b: &RigidBody) -> Option<Contact> {
    let radius_sum = a.radius()? + b.radius()?;

    let mut n = b.position - a.position;
    let mut distance = n.magnitude();
    // Coincident centers: push apart along +x
    if distance == 0.0 {
        n = Vector2D::new(1.0, 0.0);
        distance = 1.0;
    }

    Some(Contact {
        normal: n / distance,
        distance,
        penetration: radius_sum - distance,
    })
}

/// Resolves a collision between two circle bodies.
///
/// Applies an impulse along the contact normal followed by positional
/// correction of the penetration beyond [`CORRECTION_SLOP`]. Nothing happens
/// when the bodies don't overlap, when either lacks a circle, when they are
/// already separating, or when both are static. Returns whether the bodies
/// were changed.
pub fn resolve_collision(a: &mut RigidBody, b: &mut RigidBody) -> bool {
    let Some(contact) = contact(a, b) else {
        return false;
    };
    let n = contact.normal;

    let vel_along_normal = (b.velocity - a.velocity).dot(&n);
    if vel_along_normal > 0.0 {
        return false;
    }

    let inv_mass_sum = a.inv_mass() + b.inv_mass();
    if inv_mass_sum == 0.0 {
        log::warn!(
            "skipping collision between two static bodies at {:?} and {:?}",
            a.position,
            b.position
        );
        return false;
    }

    let j = -(1.0 + RESTITUTION) * vel_along_normal / inv_mass_sum;
    let impulse = n * j;
    a.velocity -= impulse * a.inv_mass();
    b.velocity += impulse * b.inv_mass();

    let depth = (contact.penetration - CORRECTION_SLOP).max(0.0);
    let correction = n * (depth / inv_mass_sum * CORRECTION_PERCENT);
    a.position -= correction * a.inv_mass();
    b.position += correction * b.inv_mass();

    log::trace!(
        "resolved contact: normal {:?}, impulse {}, penetration {}",
        n,
        j,
        contact.penetration
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn circle(x: f64, y: f64, vx: f64, vy: f64, mass: f64, radius: f64) -> RigidBody {
        RigidBody::circle(Vector2D::new(x, y), Vector2D::new(vx, vy), mass, radius).unwrap()
    }

    #[test]
    fn test_detects_overlap() {
        let a = circle(0.0, 0.0, 0.0, 0.0, 1.0, 10.0);
        let b = circle(15.0, 0.0, 0.0, 0.0, 1.0, 10.0);
        assert!(detect_collision(&a, &b));
        assert!(detect_collision(&b, &a));
    }

    #[test]
    fn test_touching_is_not_colliding() {
        let a = circle(0.0, 0.0, 0.0, 0.0, 1.0, 10.0);
        let b = circle(20.0, 0.0, 0.0, 0.0, 1.0, 10.0);
        assert!(!detect_collision(&a, &b));
        assert!(contact(&a, &b).is_none());
    }

    #[test]
    fn test_point_bodies_never_collide() {
        let a = RigidBody::new(Vector2D::ZERO, Vector2D::ZERO, 1.0).unwrap();
        let b = circle(0.0, 0.0, 0.0, 0.0, 1.0, 10.0);
        assert!(!detect_collision(&a, &b));
        assert!(!detect_collision(&b, &a));
        assert!(!detect_collision(&a, &a));
    }

    #[test]
    fn test_contact_geometry() {
        let a = circle(0.0, 0.0, 0.0, 0.0, 1.0, 10.0);
        let b = circle(0.0, 16.0, 0.0, 0.0, 1.0, 10.0);
        let c = contact(&a, &b).unwrap();
        assert_eq!(c.normal, Vector2D::new(0.0, 1.0));
        assert_eq!(c.distance, 16.0);
        assert_eq!(c.penetration, 4.0);
    }

    #[test]
    fn test_coincident_centers_use_x_axis() {
        let a = circle(5.0, 5.0, 0.0, 0.0, 1.0, 2.0);
        let b = circle(5.0, 5.0, 0.0, 0.0, 1.0, 2.0);
        let c = contact(&a, &b).unwrap();
        assert_eq!(c.normal, Vector2D::new(1.0, 0.0));
        assert_eq!(c.distance, 1.0);
        assert_eq!(c.penetration, 3.0);
    }

    #[test]
    fn test_equal_mass_head_on_swaps_velocities() {
        let mut a = circle(0.0, 0.0, 50.0, 0.0, 1.0, 20.0);
        let mut b = circle(39.0, 0.0, -50.0, 0.0, 1.0, 20.0);

        assert!(resolve_collision(&mut a, &mut b));
        assert!((a.velocity - Vector2D::new(-50.0, 0.0)).magnitude() < EPS);
        assert!((b.velocity - Vector2D::new(50.0, 0.0)).magnitude() < EPS);
    }

    #[test]
    fn test_elastic_conserves_momentum_and_energy() {
        let mut a = circle(0.0, 0.0, 30.0, 10.0, 2.0, 10.0);
        let mut b = circle(12.0, 5.0, -10.0, 0.0, 5.0, 10.0);
        let p0 = a.momentum() + b.momentum();
        let e0 = a.kinetic_energy() + b.kinetic_energy();

        assert!(resolve_collision(&mut a, &mut b));

        let p1 = a.momentum() + b.momentum();
        let e1 = a.kinetic_energy() + b.kinetic_energy();
        assert!((p1 - p0).magnitude() < 1e-9);
        assert!((e1 - e0).abs() < 1e-6);
    }

    #[test]
    fn test_separating_pair_is_untouched() {
        let mut a = circle(0.0, 0.0, -5.0, 0.0, 1.0, 10.0);
        let mut b = circle(15.0, 0.0, 5.0, 0.0, 1.0, 10.0);
        let (a0, b0) = (a, b);

        assert!(!resolve_collision(&mut a, &mut b));
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn test_approaching_pair_without_overlap_is_untouched() {
        let mut a = circle(0.0, 0.0, 5.0, 0.0, 1.0, 1.0);
        let mut b = circle(100.0, 0.0, -5.0, 0.0, 1.0, 1.0);
        let (a0, b0) = (a, b);

        assert!(!detect_collision(&a, &b));
        assert!(!resolve_collision(&mut a, &mut b));
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn test_touching_pair_is_not_resolved() {
        let mut a = circle(0.0, 0.0, 5.0, 0.0, 1.0, 10.0);
        let mut b = circle(20.0, 0.0, -5.0, 0.0, 1.0, 10.0);

        assert!(!resolve_collision(&mut a, &mut b));
        assert_eq!(a.velocity, Vector2D::new(5.0, 0.0));
    }

    #[test]
    fn test_correction_reduces_overlap() {
        let mut a = circle(0.0, 0.0, 1.0, 0.0, 1.0, 10.0);
        let mut b = circle(14.0, 0.0, 0.0, 0.0, 1.0, 10.0);
        let before = a.position.distance(&b.position);

        assert!(resolve_collision(&mut a, &mut b));

        let after = a.position.distance(&b.position);
        assert!(after > before);
        assert!(after <= 20.0);
        // One pass removes CORRECTION_PERCENT of the penetration beyond the slop
        let expected = before + (20.0 - before - CORRECTION_SLOP) * CORRECTION_PERCENT;
        assert!((after - expected).abs() < EPS);
    }

    #[test]
    fn test_penetration_within_slop_is_not_corrected() {
        let mut a = circle(0.0, 0.0, 1.0, 0.0, 1.0, 10.0);
        let mut b = circle(19.995, 0.0, 0.0, 0.0, 1.0, 10.0);
        let (pa, pb) = (a.position, b.position);

        assert!(resolve_collision(&mut a, &mut b));
        assert_eq!(a.position, pa);
        assert_eq!(b.position, pb);
    }

    #[test]
    fn test_static_body_is_never_moved() {
        let mut wall = RigidBody::fixed_circle(Vector2D::new(0.0, 0.0), 10.0).unwrap();
        let mut ball = circle(0.0, 15.0, 0.0, -20.0, 1.0, 10.0);

        assert!(resolve_collision(&mut wall, &mut ball));
        assert_eq!(wall.position, Vector2D::ZERO);
        assert_eq!(wall.velocity, Vector2D::ZERO);
        // Full reflection off an immovable body
        assert!((ball.velocity - Vector2D::new(0.0, 20.0)).magnitude() < EPS);
        assert!(ball.position.y > 15.0);
    }

    #[test]
    fn test_two_static_bodies_are_skipped() {
        let mut a = RigidBody::fixed_circle(Vector2D::new(0.0, 0.0), 10.0).unwrap();
        let mut b = RigidBody::fixed_circle(Vector2D::new(5.0, 0.0), 10.0).unwrap();

        assert!(!resolve_collision(&mut a, &mut b));
        assert!(a.velocity.x.is_finite());
        assert_eq!(a.position, Vector2D::ZERO);
        assert_eq!(b.position, Vector2D::new(5.0, 0.0));
    }
}
