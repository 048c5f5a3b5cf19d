//! Board representation for Gomoku variants

pub mod bitboard;
pub mod board;


use std::fmt;

use serde::{Deserialize, Serialize};

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Smallest supported board (must still fit a five)
pub const MIN_BOARD_SIZE: u8 = 5;
/// Largest supported board (25x25 = 625 cells)
pub const MAX_BOARD_SIZE: u8 = 25;
pub const MAX_CELLS: usize = MAX_BOARD_SIZE as usize * MAX_BOARD_SIZE as usize;

/// Cell state / stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stone::Empty => "empty",
            Stone::Black => "black",
            Stone::White => "white",
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board of the given size
    #[inline]
    pub fn to_index(self, size: u8) -> usize {
        self.row as usize * size as usize + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: u8) -> Self {
        Self {
            row: (idx / size as usize) as u8,
            col: (idx % size as usize) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: u8) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }

    /// Step `steps` cells along a direction, `None` when leaving the board
    #[inline]
    pub fn offset(self, dir: Direction, steps: i32, size: u8) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let r = self.row as i32 + dr * steps;
        let c = self.col as i32 + dc * steps;
        if Pos::is_valid(r, c, size) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }

    /// Board notation such as `H8`: column letter, row counted from the bottom
    pub fn notation(self, size: u8) -> String {
        let col = (b'A' + self.col) as char;
        format!("{}{}", col, size - self.row)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four line directions, in scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// (row, col) step
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}
