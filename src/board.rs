use tracing::debug;

use crate::{
    engine::BoardWindow,
    error::{LifeError, Result},
    pos::Pos2,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}
impl CellState {
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}
impl From<bool> for CellState {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }
}

/// A fixed-size square grid of [`CellState`]s
///
/// The dimension is chosen at construction and never changes. Cells are
/// stored row-major, so row `y` occupies `cells[y * n..(y + 1) * n]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dimension: i32,
    cells: Vec<CellState>,
}

impl Board {
    /// Creates an all-dead board of `size` by `size` cells
    pub fn new(size: i32) -> Result<Self> {
        if size <= 0 {
            return Err(LifeError::InvalidDimension { size });
        }
        let n = size as usize;
        debug!(size, "created board");
        Ok(Self {
            dimension: size,
            cells: vec![CellState::Dead; n * n],
        })
    }

    /// Creates a board with exactly the given positions alive
    pub fn from_alive<I, P>(size: i32, alive: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Pos2>,
    {
        let mut board = Self::new(size)?;
        for pos in alive {
            let pos = pos.into();
            board.set(pos.x, pos.y, CellState::Alive)?;
        }
        Ok(board)
    }

    /// Wraps an already materialized row-major buffer
    pub(crate) fn from_cells(dimension: i32, cells: Vec<CellState>) -> Self {
        debug_assert_eq!(
            cells.len(),
            (dimension as usize) * (dimension as usize),
            "cell buffer does not match dimension"
        );
        Self { dimension, cells }
    }

    #[inline]
    pub fn dimension(&self) -> i32 {
        self.dimension
    }

    pub fn get(&self, x: i32, y: i32) -> Result<CellState> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, x: i32, y: i32, state: CellState) -> Result<()> {
        let idx = self.index(x, y)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Sets every cell to `state`
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// Whether the cell at `pos` is alive, treating off-grid positions as dead
    #[inline]
    pub(crate) fn is_alive_or_off_grid(&self, pos: Pos2) -> bool {
        pos.within(self.dimension) && self.cells[self.offset(pos)].is_alive()
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|state| state.is_alive()).count()
    }

    /// Alive positions in row-major order
    pub fn alive_cells(&self) -> impl Iterator<Item = Pos2> + '_ {
        let n = self.dimension as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, state)| state.is_alive())
            .map(move |(i, _)| Pos2::new((i % n) as i32, (i / n) as i32))
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [CellState] {
        &mut self.cells
    }

    /// A read-only view of the half-open rectangle `top_left..bottom_right`
    pub fn window(&self, top_left: Pos2, bottom_right: Pos2) -> BoardWindow<'_> {
        BoardWindow::new(self, top_left, bottom_right)
    }

    fn index(&self, x: i32, y: i32) -> Result<usize> {
        let pos = Pos2::new(x, y);
        if !pos.within(self.dimension) {
            return Err(LifeError::IndexOutOfRange {
                x,
                y,
                dimension: self.dimension,
            });
        }
        Ok(self.offset(pos))
    }

    #[inline]
    fn offset(&self, pos: Pos2) -> usize {
        pos.y as usize * self.dimension as usize + pos.x as usize
    }
}
