//! Move legality: bounds, occupancy, turn order and forbidden moves

use crate::board::{Board, Pos, Stone};
use crate::error::{GameError, Result};
use crate::session::{Move, Player};

use super::forbidden::forbidden_rule;
use super::ruleset::RuleSet;

/// Who is expected to act, with which color, and whether the opening
/// protocol is still dictating placements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub player: Player,
    pub stone: Stone,
    pub opening: bool,
}

/// Decide whether `mv` may be played on `board`.
///
/// Never mutates the board; forbidden patterns are evaluated on a copy of
/// the affected lines with the stone already in place.
pub fn validate(board: &Board, rules: &RuleSet, mv: &Move, turn: &Turn) -> Result<()> {
    if board.get(mv.pos)? != Stone::Empty {
        return Err(GameError::CellOccupied(mv.pos));
    }

    if mv.player != turn.player {
        return Err(GameError::NotYourTurn {
            expected: turn.player,
            got: mv.player,
        });
    }
    debug_assert_eq!(mv.stone, turn.stone);

    // Opening placements follow the protocol, not the forbidden-move policy
    if turn.opening {
        return Ok(());
    }

    if let Some(rule) = forbidden_rule(board, rules, mv.pos, mv.stone) {
        return Err(GameError::ForbiddenMove { pos: mv.pos, rule });
    }

    Ok(())
}

/// Quick legality check for a color, ignoring turn order
///
/// Used for hover previews: occupied, off-board and forbidden points are
/// all reported as invalid.
pub fn is_valid_move(board: &Board, rules: &RuleSet, pos: Pos, stone: Stone) -> bool {
    matches!(board.get(pos), Ok(Stone::Empty)) && forbidden_rule(board, rules, pos, stone).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ForbiddenRule;

    fn mv(row: u8, col: u8, player: Player, stone: Stone) -> Move {
        Move {
            pos: Pos::new(row, col),
            player,
            stone,
            index: 0,
        }
    }

    fn black_turn(opening: bool) -> Turn {
        Turn {
            player: Player::First,
            stone: Stone::Black,
            opening,
        }
    }

    #[test]
    fn test_valid_move_empty_board() {
        let board = Board::new(15);
        let rules = RuleSet::standard();
        let m = mv(7, 7, Player::First, Stone::Black);
        assert_eq!(validate(&board, &rules, &m, &black_turn(false)), Ok(()));
    }

    #[test]
    fn test_occupied_rejected() {
        let mut board = Board::new(15);
        board.set(Pos::new(7, 7), Stone::White).unwrap();
        let rules = RuleSet::standard();
        let m = mv(7, 7, Player::First, Stone::Black);
        assert_eq!(
            validate(&board, &rules, &m, &black_turn(false)),
            Err(GameError::CellOccupied(Pos::new(7, 7)))
        );
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let board = Board::new(8);
        let rules = RuleSet::preset("mini").unwrap();
        let m = mv(8, 0, Player::First, Stone::Black);
        assert_eq!(
            validate(&board, &rules, &m, &black_turn(false)),
            Err(GameError::OutOfBounds { row: 8, col: 0, size: 8 })
        );
    }

    #[test]
    fn test_wrong_player_rejected() {
        let board = Board::new(15);
        let rules = RuleSet::standard();
        let m = mv(7, 7, Player::Second, Stone::Black);
        assert_eq!(
            validate(&board, &rules, &m, &black_turn(false)),
            Err(GameError::NotYourTurn {
                expected: Player::First,
                got: Player::Second
            })
        );
    }

    #[test]
    fn test_forbidden_skipped_during_opening() {
        let mut board = Board::new(15);
        for (row, col) in [(7, 6), (7, 8), (6, 7), (8, 7)] {
            board.set(Pos::new(row, col), Stone::Black).unwrap();
        }
        let rules = RuleSet::preset("renju").unwrap();
        let m = mv(7, 7, Player::First, Stone::Black);

        assert_eq!(
            validate(&board, &rules, &m, &black_turn(false)),
            Err(GameError::ForbiddenMove {
                pos: Pos::new(7, 7),
                rule: ForbiddenRule::DoubleThree
            })
        );
        assert_eq!(validate(&board, &rules, &m, &black_turn(true)), Ok(()));
        assert!(!is_valid_move(&board, &rules, Pos::new(7, 7), Stone::Black));
        assert!(is_valid_move(&board, &rules, Pos::new(7, 7), Stone::White));
    }
}
