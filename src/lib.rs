//! Minimal 2D rigid-body simulation.
//!
//! Bodies fall under a constant gravity, circles that overlap are pushed apart
//! with an impulse along the contact normal plus a small positional correction.
//! Rendering and the frame loop live outside this crate: a driver calls
//! [`PhysicsEngine::step`] once per frame (directly or through
//! [`FixedTimestep`]) and reads [`PhysicsEngine::bodies`] afterwards.

pub mod body;
pub mod c_api;
pub mod collision;
pub mod config;
pub mod engine;
pub mod error;
pub mod scheduler;
pub mod utils;
pub mod vector;

pub use body::{RigidBody, Shape};
pub use collision::{Contact, contact, detect_collision, resolve_collision};
pub use config::EngineConfig;
pub use engine::{BodyHandle, PhysicsEngine, StepStats};
pub use error::{PhysicsError, Result};
pub use scheduler::FixedTimestep;
pub use vector::Vector2D;
