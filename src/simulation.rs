use std::fmt;

use rand::Rng;
use tracing::{debug, info};

use crate::{
    Board, FillMode, StepEngine,
    error::{LifeError, Result},
};

/// Lifecycle of a [`Simulation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Created,
    Seeded,
    Stepping,
    Terminated,
}
impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Created => "created",
            Self::Seeded => "seeded",
            Self::Stepping => "stepping",
            Self::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

/// Owns the current board and walks it through the generation sequence
///
/// `Created -> Seeded -> Stepping -> Terminated`. The board can be seeded
/// any number of times before the first step; once terminated no further
/// step is allowed.
#[derive(Debug)]
pub struct Simulation {
    board: Board,
    engine: StepEngine,
    phase: Phase,
    generation: u64,
}

impl Simulation {
    pub fn new(size: i32, engine: StepEngine) -> Result<Self> {
        Ok(Self {
            board: Board::new(size)?,
            engine,
            phase: Phase::Created,
            generation: 0,
        })
    }

    pub fn seed<R: Rng + ?Sized>(&mut self, fill: FillMode, rng: &mut R) -> Result<()> {
        self.expect_phase(&[Phase::Created, Phase::Seeded], "seed")?;
        fill.fill(&mut self.board, rng)?;
        self.phase = Phase::Seeded;
        debug!(?fill, alive = self.board.alive_count(), "seeded simulation");
        Ok(())
    }

    /// Replaces the current board with the next generation
    pub fn step(&mut self) -> Result<&Board> {
        self.expect_phase(&[Phase::Seeded, Phase::Stepping], "step")?;
        self.board = self.engine.step(&self.board);
        self.phase = Phase::Stepping;
        self.generation += 1;
        Ok(&self.board)
    }

    pub fn terminate(&mut self) {
        if self.phase != Phase::Terminated {
            info!(generation = self.generation, "simulation terminated");
        }
        self.phase = Phase::Terminated;
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn expect_phase(&self, allowed: &[Phase], action: &'static str) -> Result<()> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(LifeError::InvalidPhase {
                phase: self.phase,
                action,
            })
        }
    }
}
