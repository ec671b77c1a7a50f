use thiserror::Error;

use crate::simulation::Phase;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LifeError {
    #[error("invalid board dimension {size}, expected a positive size")]
    InvalidDimension { size: i32 },

    #[error("cell ({x}, {y}) is outside of a {dimension}x{dimension} board")]
    IndexOutOfRange { x: i32, y: i32, dimension: i32 },

    #[error("invalid occupancy probability {probability}, expected a value in [0, 1]")]
    InvalidProbability { probability: f64 },

    #[error("cannot {action} a simulation that is {phase}")]
    InvalidPhase { phase: Phase, action: &'static str },
}

pub type Result<T> = std::result::Result<T, LifeError>;
