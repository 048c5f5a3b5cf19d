//! Sized board with one bitboard per color

use super::bitboard::Bitboard;
use super::{Pos, Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{GameError, Result};

/// Game board of `size x size` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
}

impl Board {
    /// Create an empty board. Sizes are validated by the ruleset; this only
    /// clamps into the supported range so indexing stays in bounds.
    pub fn new(size: u8) -> Self {
        debug_assert!((MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size));
        Self {
            size: size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE),
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size as usize && col < self.size as usize
    }

    /// Turn raw indices into a position, rejecting anything off the board
    pub fn pos(&self, row: usize, col: usize) -> Result<Pos> {
        if self.contains(row, col) {
            Ok(Pos::new(row as u8, col as u8))
        } else {
            Err(GameError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }

    /// Get stone at position
    pub fn get(&self, pos: Pos) -> Result<Stone> {
        let pos = self.pos(pos.row as usize, pos.col as usize)?;
        Ok(self.cell(pos))
    }

    /// Stone at an in-bounds position; off-board reads as `Empty`
    #[inline]
    pub fn cell(&self, pos: Pos) -> Stone {
        if !self.contains(pos.row as usize, pos.col as usize) {
            return Stone::Empty;
        }
        let idx = pos.to_index(self.size);
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Place a stone. Stones are never removed, so an occupied cell is an
    /// error even if the caller already validated the move.
    pub fn set(&mut self, pos: Pos, stone: Stone) -> Result<()> {
        let current = self.get(pos)?;
        if current != Stone::Empty {
            return Err(GameError::CellOccupied(pos));
        }
        let idx = pos.to_index(self.size);
        match stone {
            Stone::Black => self.black.set(idx),
            Stone::White => self.white.set(idx),
            Stone::Empty => {}
        }
        Ok(())
    }

    /// Positions holding the given color, row-major
    pub fn stones(&self, stone: Stone) -> impl Iterator<Item = Pos> + '_ {
        let bits = match stone {
            Stone::Black => Some(self.black.iter_ones()),
            Stone::White => Some(self.white.iter_ones()),
            Stone::Empty => None,
        };
        let size = self.size;
        bits.into_iter()
            .flatten()
            .map(move |idx| Pos::from_index(idx, size))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn cell_count(&self) -> u32 {
        self.size as u32 * self.size as u32
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() == self.cell_count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }
}
