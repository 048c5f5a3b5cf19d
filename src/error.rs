//! Error taxonomy for the rule engine

use thiserror::Error;

use crate::board::Pos;
use crate::rules::ForbiddenRule;
use crate::session::{GameStatus, Player};

/// Every way a rule-engine call can be rejected.
///
/// Rejections never leave a session half-updated; each variant carries the
/// offending position, seat or policy so a front end can explain it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The coordinate is outside the board
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: u8 },

    /// The cell already holds a stone
    #[error("position {0} is already occupied")]
    CellOccupied(Pos),

    /// A seat tried to act out of turn
    #[error("it is {expected}'s turn, not {got}'s")]
    NotYourTurn { expected: Player, got: Player },

    /// The move breaks the forbidden-move policy for the restricted player
    #[error("move at {pos} is forbidden ({rule})")]
    ForbiddenMove { pos: Pos, rule: ForbiddenRule },

    /// The game already ended
    #[error("game is already over ({0})")]
    GameAlreadyTerminal(GameStatus),

    /// A ruleset could not be built from its configuration
    #[error("invalid rule configuration: {0}")]
    InvalidConfiguration(String),

    /// The opening protocol is waiting for a color choice, not a stone
    #[error("{0} must choose a color before any stone is placed")]
    DecisionPending(Player),

    /// A color choice was submitted while no choice is open
    #[error("no color choice is pending")]
    NoDecisionPending,

    /// The choice is not one the protocol offers at this point
    #[error("choice not available: {0}")]
    InvalidChoice(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
