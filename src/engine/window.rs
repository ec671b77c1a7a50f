use crate::{Board, Pos2};

/// Read-only rectangular view of a [`Board`] for renderers
///
/// Covers the half-open rectangle `tl..br`; the parts of it that fall off the
/// board are simply empty.
pub struct BoardWindow<'a> {
    tl: Pos2,
    br: Pos2,
    board: &'a Board,
}
impl<'a> BoardWindow<'a> {
    pub fn new(board: &'a Board, top_left: Pos2, bottom_right: Pos2) -> Self {
        Self {
            tl: top_left,
            br: bottom_right,
            board,
        }
    }

    /// Alive positions inside the window, in row-major order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Pos2> + 'a {
        let rx = self.tl.x..self.br.x;
        let ry = self.tl.y..self.br.y;
        self.board
            .alive_cells()
            .filter(move |pos| rx.contains(&pos.x) && ry.contains(&pos.y))
    }
}

impl std::fmt::Display for BoardWindow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // padding is computed from the previous cell, so rows must come in order
        debug_assert!(self.iter().is_sorted(), "window cells are not row-major");

        let mut last = self.tl - Pos2 { x: 1, y: 0 };
        for alive in self.iter() {
            // a row change restarts the padding from the window's left edge
            let lines = alive.y - last.y;
            let padding = match lines {
                0 => alive.x - last.x - 1,
                _ => alive.x - self.tl.x,
            };
            write!(
                f,
                "{0:\n<1$}{0: <2$}█",
                "", lines as usize, padding as usize
            )?;
            last = alive;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_clips_to_rectangle() {
        let board = Board::from_alive(5, [(0, 0), (2, 1), (3, 3), (4, 4)]).unwrap();
        let window = board.window(Pos2::new(1, 1), Pos2::new(4, 4));

        assert_eq!(window.iter().collect::<Vec<_>>(), vec![Pos2::new(2, 1), Pos2::new(3, 3)]);
    }

    #[test]
    fn displays_blinker() {
        let board = Board::from_alive(5, [(2, 1), (2, 2), (2, 3)]).unwrap();
        let window = board.window(Pos2::new(0, 0), Pos2::new(5, 5));

        assert_eq!(window.to_string(), "\n  █\n  █\n  █");
    }

    #[test]
    fn offset_window_pads_from_its_left_edge() {
        let board = Board::from_alive(6, [(3, 2), (5, 2), (2, 3)]).unwrap();
        let window = board.window(Pos2::new(2, 2), Pos2::new(6, 4));

        assert!(window.iter().is_sorted());
        assert_eq!(window.to_string(), " █ █\n█");
    }

    #[test]
    fn window_past_the_edge_is_empty() {
        let board = Board::from_alive(3, [(1, 1)]).unwrap();
        let window = board.window(Pos2::new(3, 3), Pos2::new(10, 10));

        assert_eq!(window.iter().count(), 0);
        assert_eq!(window.to_string(), "");
    }
}
