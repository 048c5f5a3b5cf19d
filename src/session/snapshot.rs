//! Serializable view of a session's board

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Pos, Stone};

use super::game::{GameSession, GameStatus, Player};

/// Cell label in a snapshot; serializes as `"empty"`, `"black"` or `"white"`
pub type CellLabel = Stone;

/// Board grid plus the highlights a renderer needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: u8,
    /// Row-major grid, `rows[row][col]`
    pub rows: Vec<Vec<CellLabel>>,
    pub last_move: Option<Pos>,
    pub winning_line: Option<Vec<Pos>>,
    pub status: GameStatus,
    pub to_move: Option<Player>,
}

impl BoardSnapshot {
    pub fn capture(session: &GameSession) -> Self {
        let board = session.board();
        let size = board.size();
        let rows = (0..size)
            .map(|row| (0..size).map(|col| board.cell(Pos::new(row, col))).collect())
            .collect();

        Self {
            size,
            rows,
            last_move: session.last_move().map(|mv| mv.pos),
            winning_line: session.winning_line().map(|line| line.stones.clone()),
            status: session.status(),
            to_move: session.current_player(),
        }
    }

    pub fn label(&self, row: usize, col: usize) -> Option<CellLabel> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }
}

/// Plain-text grid: `X` black, `O` white, `.` empty
impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Stone::Black => 'X',
                    Stone::White => 'O',
                    Stone::Empty => '.',
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
