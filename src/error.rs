use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("Invalid mass {0}: mass must be finite and non-negative")]
    InvalidMass(f64),

    #[error("Invalid radius {0}: radius must be finite and positive")]
    InvalidRadius(f64),

    #[error("Invalid timestep {0}: timestep must be finite and positive")]
    InvalidTimestep(f64),

    #[error("Invalid step cap {0}: at least one step per frame is required")]
    InvalidStepCap(u32),

    #[error("Invalid scene bounds {0} x {1}: bounds must be finite and non-negative")]
    InvalidBounds(f64, f64),

    #[error("No body with index {0}")]
    UnknownBody(usize),
}

pub type Result<T> = std::result::Result<T, PhysicsError>;
