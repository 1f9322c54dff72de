use crate::{
    body::RigidBody,
    collision::{detect_collision, resolve_collision},
    config::EngineConfig,
    error::{PhysicsError, Result},
    vector::Vector2D,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Index of a body inside a [`PhysicsEngine`]. Bodies are never removed, so a
/// handle stays valid for the lifetime of the engine that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(usize);

impl BodyHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What happened during one call to [`PhysicsEngine::step`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Number of pairs passed to detection, always `k * (k - 1) / 2`.
    pub pairs_checked: usize,
    /// Pairs that were found overlapping. Pairs of two static bodies are never
    /// counted since nothing can move them.
    pub contacts: usize,
    /// Overlapping pairs that received an impulse.
    pub resolved: usize,
}

/// Owns the bodies and advances them under a constant gravity.
#[derive(Debug, Clone)]
pub struct PhysicsEngine {
    /// Collection of all bodies, in insertion order. Pairs are visited in this order.
    bodies: Vec<RigidBody>,
    /// Constant acceleration applied to every dynamic body.
    gravity: Vector2D,
    /// Simulated time in seconds.
    elapsed: f64,
    /// Number of steps taken.
    frame: usize,
}

impl Default for PhysicsEngine {
    fn default() -> Self {
        Self::new(EngineConfig::DEFAULT_GRAVITY)
    }
}

impl PhysicsEngine {
    pub fn new(gravity: Vector2D) -> Self {
        log::debug!("creating physics engine with gravity {:?}", gravity);
        Self {
            bodies: Vec::new(),
            gravity,
            elapsed: 0.0,
            frame: 0,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.gravity))
    }

    /// Appends a body. No duplicate checking is done.
    pub fn add_body(&mut self, body: RigidBody) -> BodyHandle {
        let handle = BodyHandle(self.bodies.len());
        log::debug!(
            "adding body {} at {:?} (mass {}, radius {:?})",
            handle.0,
            body.position,
            body.mass(),
            body.radius()
        );
        self.bodies.push(body);
        handle
    }

    pub fn body(&self, handle: BodyHandle) -> Result<&RigidBody> {
        self.bodies
            .get(handle.0)
            .ok_or(PhysicsError::UnknownBody(handle.0))
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody> {
        self.bodies
            .get_mut(handle.0)
            .ok_or(PhysicsError::UnknownBody(handle.0))
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn gravity(&self) -> Vector2D {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vector2D) {
        self.gravity = gravity;
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Advances the simulation by `dt` seconds.
    /// Integrates every dynamic body, then detects and resolves every overlapping pair.
    pub fn step(&mut self, dt: f64) -> StepStats {
        self.iterate(dt);
        let stats = self.collide();

        self.elapsed += dt;
        self.frame += 1;
        log::trace!(
            "step {}: {} pairs checked, {} contacts, {} resolved",
            self.frame,
            stats.pairs_checked,
            stats.contacts,
            stats.resolved
        );
        stats
    }

    /// Applies gravity and integrates position and velocity of all dynamic bodies.
    /// Static bodies are skipped entirely.
    pub fn iterate(&mut self, dt: f64) {
        let gravity = self.gravity;
        let update = move |body: &mut RigidBody| {
            if body.is_static() {
                return;
            }
            body.apply_force(gravity * body.mass());
            body.integrate(dt);
        };

        #[cfg(feature = "parallel")]
        self.bodies.par_iter_mut().for_each(update);

        #[cfg(not(feature = "parallel"))]
        self.bodies.iter_mut().for_each(update);
    }

    /// Checks every unordered pair `(i, j)`, `i < j`, and resolves the overlapping ones.
    #[cfg(not(feature = "parallel"))]
    pub fn collide(&mut self) -> StepStats {
        let n = self.bodies.len();
        let mut stats = StepStats::default();

        for i in 0..n {
            for j in i + 1..n {
                stats.pairs_checked += 1;
                if !needs_resolution(&self.bodies[i], &self.bodies[j]) {
                    continue;
                }
                stats.contacts += 1;

                let (a, b) = pair_mut(&mut self.bodies, i, j);
                if resolve_collision(a, b) {
                    stats.resolved += 1;
                }
            }
        }

        stats
    }

    /// Checks every unordered pair `(i, j)`, `i < j`, and resolves the overlapping ones.
    /// Detection runs in parallel against the integrated positions; resolution
    /// then runs serially in `(i, j)` order so no body is written concurrently.
    #[cfg(feature = "parallel")]
    pub fn collide(&mut self) -> StepStats {
        let n = self.bodies.len();
        let bodies = &self.bodies;

        let candidates: Vec<(usize, usize)> = (0..n)
            .into_par_iter()
            .flat_map_iter(|i| {
                (i + 1..n)
                    .filter(move |&j| needs_resolution(&bodies[i], &bodies[j]))
                    .map(move |j| (i, j))
            })
            .collect();

        let mut stats = StepStats {
            pairs_checked: n * n.saturating_sub(1) / 2,
            contacts: candidates.len(),
            resolved: 0,
        };

        for (i, j) in candidates {
            let (a, b) = pair_mut(&mut self.bodies, i, j);
            if resolve_collision(a, b) {
                stats.resolved += 1;
            }
        }

        stats
    }

    /// Sum of the momentum of all bodies.
    pub fn total_momentum(&self) -> Vector2D {
        self.bodies
            .iter()
            .fold(Vector2D::ZERO, |acc, body| acc + body.momentum())
    }

    /// Sum of the kinetic energy of all bodies.
    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(RigidBody::kinetic_energy).sum()
    }
}

/// Overlapping pairs with at least one dynamic body.
fn needs_resolution(a: &RigidBody, b: &RigidBody) -> bool {
    !(a.is_static() && b.is_static()) && detect_collision(a, b)
}

/// Mutable references to two distinct bodies, `i < j`.
fn pair_mut(bodies: &mut [RigidBody], i: usize, j: usize) -> (&mut RigidBody, &mut RigidBody) {
    debug_assert!(i < j);
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
