//! Hypothetical line state through a single point
//!
//! A `LineWindow` copies the cells of one line (one of the four directions)
//! around a point into a small array, with the point itself treated as
//! already holding the mover's stone. Pattern checks then run on the copy,
//! so lookahead never touches the board.

use crate::board::{Board, Direction, Pos, Stone};

/// A cell as seen by the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cell {
    Own,
    Empty,
    Opponent,
    Edge,
}

#[derive(Debug, Clone)]
pub(crate) struct LineWindow {
    cells: Vec<Cell>,
    positions: Vec<Option<Pos>>,
    center: usize,
}

impl LineWindow {
    /// Window of `radius` cells on each side of `pos` along `dir`
    pub fn through(board: &Board, pos: Pos, stone: Stone, dir: Direction, radius: usize) -> Self {
        let size = board.size();
        let opponent = stone.opponent();
        let mut cells = Vec::with_capacity(2 * radius + 1);
        let mut positions = Vec::with_capacity(2 * radius + 1);

        for step in -(radius as i32)..=radius as i32 {
            let at = pos.offset(dir, step, size);
            let cell = match at {
                None => Cell::Edge,
                Some(_) if step == 0 => Cell::Own,
                Some(p) => match board.cell(p) {
                    s if s == stone => Cell::Own,
                    s if s == opponent => Cell::Opponent,
                    _ => Cell::Empty,
                },
            };
            cells.push(cell);
            positions.push(at);
        }

        Self {
            cells,
            positions,
            center: radius,
        }
    }

    #[inline]
    pub fn center(&self) -> usize {
        self.center
    }

    /// Cell at an index; anything past the window reads as `Edge`
    #[inline]
    pub fn cell(&self, idx: isize) -> Cell {
        if idx < 0 {
            return Cell::Edge;
        }
        self.cells.get(idx as usize).copied().unwrap_or(Cell::Edge)
    }

    pub fn pos(&self, idx: usize) -> Option<Pos> {
        self.positions.get(idx).copied().flatten()
    }

    /// Copy of the window with one more own stone
    pub fn with_stone(&self, idx: usize) -> Self {
        let mut next = self.clone();
        next.cells[idx] = Cell::Own;
        next
    }

    /// Inclusive bounds of the run of own stones containing `idx`
    pub fn run(&self, idx: usize) -> (usize, usize) {
        debug_assert_eq!(self.cells[idx], Cell::Own);
        let mut start = idx;
        while start > 0 && self.cells[start - 1] == Cell::Own {
            start -= 1;
        }
        let mut end = idx;
        while end + 1 < self.cells.len() && self.cells[end + 1] == Cell::Own {
            end += 1;
        }
        (start, end)
    }

    /// Length of the run through the center stone
    pub fn center_run_len(&self) -> usize {
        let (start, end) = self.run(self.center);
        end - start + 1
    }

    /// Positions covered by an index range, skipping off-board cells
    pub fn positions(&self, start: usize, end: usize) -> Vec<Pos> {
        (start..=end).filter_map(|idx| self.pos(idx)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: u8, stones: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::new(size);
        for &(row, col, stone) in stones {
            board.set(Pos::new(row, col), stone).unwrap();
        }
        board
    }

    #[test]
    fn test_window_marks_center_as_own() {
        let board = Board::new(15);
        let window = LineWindow::through(&board, Pos::new(7, 7), Stone::Black, Direction::Horizontal, 3);
        assert_eq!(window.center(), 3);
        assert_eq!(window.cell(3), Cell::Own);
        assert_eq!(window.cell(7), Cell::Edge);
        assert_eq!(window.center_run_len(), 1);
        // Board untouched
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_window_edges_and_opponents() {
        let board = board_with(15, &[(0, 1, Stone::White), (0, 2, Stone::Black)]);
        let window = LineWindow::through(&board, Pos::new(0, 0), Stone::Black, Direction::Horizontal, 2);
        assert_eq!(window.cell(0), Cell::Edge);
        assert_eq!(window.cell(1), Cell::Edge);
        assert_eq!(window.cell(2), Cell::Own);
        assert_eq!(window.cell(3), Cell::Opponent);
        assert_eq!(window.cell(4), Cell::Own);
        assert_eq!(window.cell(-1), Cell::Edge);
        assert_eq!(window.cell(99), Cell::Edge);
        assert_eq!(window.pos(1), None);
        assert_eq!(window.pos(4), Some(Pos::new(0, 2)));
    }

    #[test]
    fn test_run_through_added_stone() {
        // _ B [B] _ B _
        let board = board_with(15, &[(7, 6, Stone::Black), (7, 9, Stone::Black)]);
        let window = LineWindow::through(&board, Pos::new(7, 7), Stone::Black, Direction::Horizontal, 4);
        assert_eq!(window.center_run_len(), 2);

        let filled = window.with_stone(window.center() + 1);
        assert_eq!(filled.center_run_len(), 4);
        assert_eq!(
            filled.positions(3, 6),
            vec![Pos::new(7, 6), Pos::new(7, 7), Pos::new(7, 8), Pos::new(7, 9)]
        );
    }

    #[test]
    fn test_diagonal_window() {
        let board = board_with(9, &[(3, 5, Stone::White), (5, 3, Stone::White)]);
        let window =
            LineWindow::through(&board, Pos::new(4, 4), Stone::White, Direction::DiagonalDownLeft, 1);
        assert_eq!(window.center_run_len(), 3);
        let (start, end) = window.run(window.center());
        assert_eq!(window.positions(start, end), vec![Pos::new(3, 5), Pos::new(4, 4), Pos::new(5, 3)]);
    }
}
