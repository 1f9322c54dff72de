//! Fixed-timestep driver for [`PhysicsEngine`].
//!
//! Frame deltas measured by the caller are accumulated and consumed in whole
//! steps of `dt`, so the simulation advances at the same cadence no matter how
//! irregular the frames are. Stopping the simulation means no longer calling
//! [`FixedTimestep::advance`].

use crate::config::EngineConfig;
use crate::engine::PhysicsEngine;
use crate::error::{PhysicsError, Result};

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    dt: f64,
    max_steps_per_frame: u32,
    accumulator: f64,
}

impl FixedTimestep {
    pub fn new(dt: f64, max_steps_per_frame: u32) -> Result<Self> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(PhysicsError::InvalidTimestep(dt));
        }
        if max_steps_per_frame == 0 {
            return Err(PhysicsError::InvalidStepCap(max_steps_per_frame));
        }

        Ok(Self {
            dt,
            max_steps_per_frame,
            accumulator: 0.0,
        })
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.timestep, config.max_steps_per_frame)
    }

    /// Steps at the rate given in steps per second.
    pub fn from_rate(steps_per_second: u32, max_steps_per_frame: u32) -> Result<Self> {
        Self::new(1.0 / f64::from(steps_per_second), max_steps_per_frame)
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Adds `frame_delta` seconds and steps `engine` as many times as fit.
    /// Returns the number of steps taken.
    ///
    /// At most `max_steps_per_frame` steps are taken per call. Time beyond that
    /// is dropped so a slow frame can't trigger ever longer catch-up frames.
    pub fn advance(&mut self, engine: &mut PhysicsEngine, frame_delta: f64) -> u32 {
        if frame_delta.is_finite() && frame_delta > 0.0 {
            self.accumulator += frame_delta;
        }

        let mut steps = 0;
        while self.accumulator >= self.dt && steps < self.max_steps_per_frame {
            engine.step(self.dt);
            self.accumulator -= self.dt;
            steps += 1;
        }

        if self.accumulator >= self.dt {
            log::warn!(
                "dropping {:.4}s of simulation time after {} steps",
                self.accumulator - self.accumulator % self.dt,
                steps
            );
            self.accumulator %= self.dt;
        }

        steps
    }

    /// Fraction of a step left in the accumulator, for interpolating rendered positions.
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.dt
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
