mod index;
mod window;

pub use self::window::BoardWindow;
use crate::{
    Board, CellState, Pos2,
    error::{LifeError, Result},
};
use rayon::prelude::*;
use tracing::trace;

/// Computes successive generations of a [`Board`]
///
/// The engine holds no state between calls; it only decides whether rows are
/// computed on the calling thread or spread over rayon's pool. Both modes
/// produce identical boards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepEngine {
    parallel: bool,
}

impl StepEngine {
    pub fn serial() -> Self {
        Self { parallel: false }
    }
    pub fn parallel() -> Self {
        Self { parallel: true }
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn step(&self, board: &Board) -> Board {
        if self.parallel {
            next_generation_parallel(board)
        } else {
            next_generation(board)
        }
    }
}

/// Produces the generation following `board`, leaving `board` untouched
pub fn next_generation(board: &Board) -> Board {
    let n = board.dimension() as usize;
    let mut cells = vec![CellState::Dead; n * n];
    for (y, row) in cells.chunks_mut(n).enumerate() {
        next_row(board, y as i32, row);
    }

    let next = Board::from_cells(board.dimension(), cells);
    trace!(alive = next.alive_count(), "stepped generation");
    next
}

/// Same as [`next_generation`], with rows computed in parallel
///
/// Each worker reads the shared input board and writes a disjoint row of the
/// output buffer.
pub fn next_generation_parallel(board: &Board) -> Board {
    let n = board.dimension() as usize;
    let mut cells = vec![CellState::Dead; n * n];
    cells
        .par_chunks_mut(n)
        .enumerate()
        .for_each(|(y, row)| next_row(board, y as i32, row));

    let next = Board::from_cells(board.dimension(), cells);
    trace!(alive = next.alive_count(), "stepped generation in parallel");
    next
}

/// Number of alive cells among the (up to 8) neighbors of `(x, y)`
///
/// Neighbors outside the board are not counted; there is no wraparound.
pub fn neighbor_count(board: &Board, x: i32, y: i32) -> Result<u32> {
    let pos = Pos2::new(x, y);
    if !pos.within(board.dimension()) {
        return Err(LifeError::IndexOutOfRange {
            x,
            y,
            dimension: board.dimension(),
        });
    }
    Ok((neighborhood(board, pos) & !index::CENTER).count_ones())
}

fn next_row(board: &Board, y: i32, row: &mut [CellState]) {
    let table = index::rule_table();
    for (x, cell) in row.iter_mut().enumerate() {
        let grid = neighborhood(board, Pos2::new(x as i32, y));
        *cell = CellState::from(table[grid]);
    }
}

/// Packs the 3x3 block centered on `center` into a 9-bit value
///
/// Bit `(dy + 1) * 3 + (dx + 1)` holds the state of `center + (dx, dy)`;
/// positions off the board contribute a zero bit.
fn neighborhood(board: &Board, center: Pos2) -> usize {
    let mut grid = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if board.is_alive_or_off_grid(center + Pos2::new(dx, dy)) {
                grid |= 1usize << ((dy + 1) * 3 + (dx + 1));
            }
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alive(board: &Board) -> Vec<(i32, i32)> {
        board.alive_cells().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn empty_board_stays_empty() {
        for size in [1, 2, 7] {
            let board = Board::new(size).unwrap();
            assert_eq!(next_generation(&board).alive_count(), 0);
        }
    }

    #[test]
    fn isolated_cell_dies() {
        let board = Board::from_alive(5, [(2, 2)]).unwrap();

        assert_eq!(next_generation(&board).alive_count(), 0);
    }

    #[test]
    fn block_is_still_life() {
        let board = Board::from_alive(4, [(1, 1), (2, 1), (1, 2), (2, 2)]).unwrap();

        assert_eq!(next_generation(&board), board);
    }

    #[test]
    fn blinker_has_period_two() {
        let horizontal = Board::from_alive(5, [(1, 2), (2, 2), (3, 2)]).unwrap();

        let vertical = next_generation(&horizontal);
        assert_eq!(alive(&vertical), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(next_generation(&vertical), horizontal);
    }

    #[test]
    fn input_is_not_mutated() {
        let board = Board::from_alive(5, [(1, 2), (2, 2), (3, 2)]).unwrap();
        let before = board.clone();

        let _ = next_generation(&board);
        let _ = next_generation_parallel(&board);
        assert_eq!(board, before);
    }

    #[test]
    fn edges_do_not_wrap() {
        // a blinker against the left edge would grow a cell at x = n - 1 if the
        // topology wrapped around
        let board = Board::from_alive(5, [(0, 1), (0, 2), (0, 3)]).unwrap();

        let next = next_generation(&board);
        assert_eq!(alive(&next), vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn blinker_on_top_edge_is_clipped() {
        let board = Board::from_alive(5, [(1, 0), (2, 0), (3, 0)]).unwrap();

        let next = next_generation(&board);
        assert_eq!(alive(&next), vec![(2, 0), (2, 1)]);
        assert_eq!(next.get(2, 4), Ok(CellState::Dead));
    }

    #[test]
    fn full_board_counts_respect_topology() {
        let mut board = Board::new(4).unwrap();
        board.fill(CellState::Alive);

        assert_eq!(neighbor_count(&board, 0, 0), Ok(3));
        assert_eq!(neighbor_count(&board, 3, 3), Ok(3));
        assert_eq!(neighbor_count(&board, 1, 0), Ok(5));
        assert_eq!(neighbor_count(&board, 0, 2), Ok(5));
        assert_eq!(neighbor_count(&board, 1, 1), Ok(8));
    }

    #[test]
    fn neighbor_count_excludes_center() {
        let board = Board::from_alive(3, [(1, 1)]).unwrap();

        assert_eq!(neighbor_count(&board, 1, 1), Ok(0));
        assert_eq!(neighbor_count(&board, 0, 0), Ok(1));
    }

    #[test]
    fn neighbor_count_checks_bounds() {
        let board = Board::new(3).unwrap();

        assert_eq!(
            neighbor_count(&board, 3, 0),
            Err(LifeError::IndexOutOfRange { x: 3, y: 0, dimension: 3 })
        );
    }

    #[test]
    fn single_cell_board() {
        let board = Board::from_alive(1, [(0, 0)]).unwrap();

        assert_eq!(neighbor_count(&board, 0, 0), Ok(0));
        assert_eq!(next_generation(&board).alive_count(), 0);
    }

    #[test]
    fn engine_modes_agree() {
        let board = Board::from_alive(6, [(0, 0), (1, 0), (2, 0), (4, 3), (5, 3), (5, 4), (2, 5)])
            .unwrap();

        assert!(StepEngine::parallel().is_parallel());
        assert_eq!(StepEngine::serial().step(&board), StepEngine::parallel().step(&board));
    }
}
