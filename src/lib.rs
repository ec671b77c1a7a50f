//! Core library for Conway's Game of Life on a bounded square grid.

pub mod board;
pub mod engine;
pub mod error;
pub mod pos;
pub mod seed;
pub mod simulation;

pub use board::{Board, CellState};
pub use engine::{
    BoardWindow, StepEngine, neighbor_count, next_generation, next_generation_parallel,
};
pub use error::LifeError;
pub use pos::Pos2;
pub use seed::{FillMode, randomize};
pub use simulation::{Phase, Simulation};
