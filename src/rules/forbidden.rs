//! Forbidden move rules for the restricted player (Renju-style)
//!
//! Definitions, relative to the ruleset's win length `L`:
//! - five: exactly `L` in a row (more, if the player's overlines win)
//! - four: one more stone makes a five that includes the new stone.
//!   A straight four `_OOOO_` counts once, `O_OOO_O` counts twice.
//! - three: one more stone makes a straight four, i.e. a run of `L - 1`
//!   with both ends empty and each end completing a five.
//!
//! Everything is evaluated on a [`LineWindow`], as if the stone were placed.

use crate::board::{Board, Direction, Pos, Stone};

use super::line::{Cell, LineWindow};
use super::ruleset::{ForbiddenRule, RuleSet};

/// What a hypothetical stone makes along one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineShape {
    pub five: bool,
    pub overline: bool,
    pub fours: u8,
    pub three: bool,
}

/// Shape summary over all four directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveShape {
    pub five: bool,
    pub overline: bool,
    pub fours: u8,
    pub threes: u8,
}

struct Lengths {
    win: usize,
    /// Overlines do not count as a five
    exact: bool,
}

impl Lengths {
    #[inline]
    fn is_five(&self, run: usize) -> bool {
        run == self.win || (!self.exact && run > self.win)
    }
}

/// Classify the line through `pos` in one direction
pub fn line_shape(board: &Board, rules: &RuleSet, pos: Pos, stone: Stone, dir: Direction) -> LineShape {
    let win = rules.win_length() as usize;
    let lengths = Lengths {
        win,
        exact: !rules.overline_wins(stone),
    };
    let window = LineWindow::through(board, pos, stone, dir, win + 1);
    let run = window.center_run_len();

    let mut shape = LineShape {
        five: lengths.is_five(run),
        overline: run > win,
        ..LineShape::default()
    };
    if shape.five || shape.overline {
        return shape;
    }

    shape.fours = count_fours(&window, &lengths);
    if shape.fours == 0 {
        shape.three = has_three(&window, &lengths);
    }
    shape
}

/// Empty points within reach of the center that complete a five through it
fn five_completions(window: &LineWindow, lengths: &Lengths) -> Vec<usize> {
    let center = window.center();
    let reach = lengths.win - 1;
    (center.saturating_sub(reach)..=center + reach)
        .filter(|&idx| idx != center && window.cell(idx as isize) == Cell::Empty)
        .filter(|&idx| {
            let filled = window.with_stone(idx);
            let (start, end) = filled.run(center);
            (start..=end).contains(&idx) && lengths.is_five(end - start + 1)
        })
        .collect()
}

fn count_fours(window: &LineWindow, lengths: &Lengths) -> u8 {
    let completions = five_completions(window, lengths);
    match completions.as_slice() {
        // Both ends of one straight four
        [a, b] if b - a == lengths.win => 1,
        points => points.len() as u8,
    }
}

/// Is there an empty point turning this line into a straight four?
fn has_three(window: &LineWindow, lengths: &Lengths) -> bool {
    let center = window.center();
    let reach = lengths.win - 1;
    (center.saturating_sub(reach)..=center + reach)
        .filter(|&idx| idx != center && window.cell(idx as isize) == Cell::Empty)
        .any(|idx| is_straight_four(&window.with_stone(idx), idx, lengths))
}

fn is_straight_four(window: &LineWindow, added: usize, lengths: &Lengths) -> bool {
    let (start, end) = window.run(window.center());
    if end - start + 1 != lengths.win - 1 || !(start..=end).contains(&added) {
        return false;
    }
    let (before, after) = (start as isize - 1, end as isize + 1);
    [before, after].iter().all(|&flank| {
        window.cell(flank) == Cell::Empty && {
            let filled = window.with_stone(flank as usize);
            let (s, e) = filled.run(window.center());
            lengths.is_five(e - s + 1)
        }
    })
}

/// Combine the four directions for a hypothetical move
pub fn move_shape(board: &Board, rules: &RuleSet, pos: Pos, stone: Stone) -> MoveShape {
    Direction::ALL
        .iter()
        .map(|&dir| line_shape(board, rules, pos, stone, dir))
        .fold(MoveShape::default(), |acc, line| MoveShape {
            five: acc.five || line.five,
            overline: acc.overline || line.overline,
            fours: acc.fours + line.fours,
            threes: acc.threes + line.three as u8,
        })
}

/// Which forbidden rule, if any, a move by `stone` at `pos` would break.
///
/// Only the restricted player is ever checked. A five excuses double-threes
/// and double-fours but not an overline.
pub fn forbidden_rule(board: &Board, rules: &RuleSet, pos: Pos, stone: Stone) -> Option<ForbiddenRule> {
    if !rules.is_restricted(stone) {
        return None;
    }
    let shape = move_shape(board, rules, pos, stone);

    let overline_banned = rules.forbids(ForbiddenRule::Overline) || !rules.allow_overlines();
    if shape.overline && overline_banned {
        return Some(ForbiddenRule::Overline);
    }
    if shape.five {
        return None;
    }
    if rules.forbids(ForbiddenRule::DoubleFour) && shape.fours >= 2 {
        return Some(ForbiddenRule::DoubleFour);
    }
    if rules.forbids(ForbiddenRule::DoubleThree) && shape.threes >= 2 {
        return Some(ForbiddenRule::DoubleThree);
    }
    None
}

/// Count open threes a move would create (across directions)
pub fn count_free_threes(board: &Board, rules: &RuleSet, pos: Pos, stone: Stone) -> u8 {
    move_shape(board, rules, pos, stone).threes
}
