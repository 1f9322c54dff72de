//! Engine settings that can be loaded from any serde format.
//!
//! ```json
//! {
//!   "gravity": { "x": 0.0, "y": 9.81 },
//!   "timestep": 0.016,
//!   "max_steps_per_frame": 8
//! }
//! ```
//!
//! Missing fields fall back to [`EngineConfig::default`].

use serde::{Deserialize, Serialize};

use crate::error::{PhysicsError, Result};
use crate::vector::Vector2D;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub gravity: Vector2D, // constant acceleration applied to every dynamic body, +y points down
    pub timestep: f64, // fixed step size in seconds used by the scheduler
    pub max_steps_per_frame: u32, // cap on steps taken for one frame delta
}

impl EngineConfig {
    pub const DEFAULT_GRAVITY: Vector2D = Vector2D::new(0.0, 9.81);
    pub const DEFAULT_TIMESTEP: f64 = 0.016;
    pub const DEFAULT_MAX_STEPS: u32 = 8;

    pub fn validate(&self) -> Result<()> {
        if !self.timestep.is_finite() || self.timestep <= 0.0 {
            return Err(PhysicsError::InvalidTimestep(self.timestep));
        }
        if self.max_steps_per_frame == 0 {
            return Err(PhysicsError::InvalidStepCap(self.max_steps_per_frame));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gravity: Self::DEFAULT_GRAVITY,
            timestep: Self::DEFAULT_TIMESTEP,
            max_steps_per_frame: Self::DEFAULT_MAX_STEPS,
        }
    }
}
