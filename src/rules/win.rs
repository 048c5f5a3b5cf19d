//! Win and draw detection
//!
//! Win conditions, checked through the last stone only:
//! 1. Exactly `win_length` in a row always wins, except under the Caro rule
//!    when both ends are closed by the opponent.
//! 2. A longer line wins only if the ruleset lets that color win by overline.

use serde::Serialize;

use crate::board::{Board, Direction, Pos, Stone};

use super::line::{Cell, LineWindow};
use super::ruleset::RuleSet;

/// A completed winning line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinningLine {
    pub stone: Stone,
    pub direction: Direction,
    /// Every stone of the line, ordered along the direction
    pub stones: Vec<Pos>,
}

/// Board verdict after a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Win(WinningLine),
    Draw,
    Ongoing,
}

/// Check whether the stone at `last` completes a winning line.
///
/// Directions are tried in the order horizontal, vertical, diagonal
/// down-right, diagonal down-left; the first qualifying line is returned.
pub fn check_win(board: &Board, rules: &RuleSet, last: Pos) -> Option<WinningLine> {
    let stone = board.cell(last);
    if stone == Stone::Empty {
        return None;
    }
    let win = rules.win_length() as usize;
    let radius = board.size() as usize;

    Direction::ALL.into_iter().find_map(|direction| {
        let window = LineWindow::through(board, last, stone, direction, radius);
        let (start, end) = window.run(window.center());
        let len = end - start + 1;

        let wins = match len.cmp(&win) {
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Greater => rules.overline_wins(stone),
            std::cmp::Ordering::Equal => {
                !(rules.requires_unblocked_win()
                    && window.cell(start as isize - 1) == Cell::Opponent
                    && window.cell(end as isize + 1) == Cell::Opponent)
            }
        };

        wins.then(|| WinningLine {
            stone,
            direction,
            stones: window.positions(start, end),
        })
    })
}

/// A full board with no winner is a draw
pub fn is_draw(board: &Board, winner: Option<&WinningLine>) -> bool {
    winner.is_none() && board.is_full()
}

/// Win, draw or neither, as seen from the last stone placed
pub fn evaluate(board: &Board, rules: &RuleSet, last: Pos) -> Verdict {
    let winner = check_win(board, rules, last);
    if is_draw(board, winner.as_ref()) {
        return Verdict::Draw;
    }
    winner.map_or(Verdict::Ongoing, Verdict::Win)
}
