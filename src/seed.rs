use rand::Rng;
use tracing::debug;

use crate::{
    Board, CellState,
    error::{LifeError, Result},
};

/// Reseeds every cell of `board` independently
///
/// For each cell a value `r` is drawn uniformly from `[0, 1)` and the cell is
/// set alive iff `r <= probability`, giving an expected live fraction of
/// `probability`. Pass a seeded rng to reproduce a pattern exactly.
///
/// The board is left untouched if `probability` is not within `[0, 1]`.
pub fn randomize<R: Rng + ?Sized>(board: &mut Board, probability: f64, rng: &mut R) -> Result<()> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(LifeError::InvalidProbability { probability });
    }

    for cell in board.cells_mut() {
        let r: f64 = rng.random();
        *cell = CellState::from(r <= probability);
    }
    debug!(
        probability,
        alive = board.alive_count(),
        size = board.dimension(),
        "randomized board"
    );
    Ok(())
}

/// How a fresh board gets populated
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillMode {
    /// Independent cells, alive with the given probability
    Random(f64),
    /// Checkerboard with the origin alive
    Alternating,
    All,
    Empty,
}
impl FillMode {
    /// Parses a mode name; `random` takes its probability from the caller
    pub fn parse<S: AsRef<str>>(s: S, probability: f64) -> Option<Self> {
        match s.as_ref() {
            "random" => Some(Self::Random(probability)),
            "alternating" => Some(Self::Alternating),
            "all" => Some(Self::All),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    pub fn fill<R: Rng + ?Sized>(self, board: &mut Board, rng: &mut R) -> Result<()> {
        match self {
            Self::Random(p) => return randomize(board, p, rng),
            Self::Alternating => {
                let n = board.dimension() as usize;
                for (i, cell) in board.cells_mut().iter_mut().enumerate() {
                    let (x, y) = (i % n, i / n);
                    *cell = CellState::from((x + y) % 2 == 0);
                }
            }
            Self::All => board.fill(CellState::Alive),
            Self::Empty => board.fill(CellState::Dead),
        }
        Ok(())
    }
}
