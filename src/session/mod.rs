//! Game sessions: turn order, opening protocol, status and history
//!
//! The free functions here are the engine's outward interface; a front end
//! or persistence layer needs nothing else.

mod game;
pub mod opening;
pub mod registry;
pub mod snapshot;

use std::sync::Arc;

pub use game::{Action, GameSession, GameStatus, Move, MoveOutcome, PendingDecision, Player};
pub use opening::{OpeningState, Swap2Choice};
pub use registry::{SessionId, SessionRegistry};
pub use snapshot::{BoardSnapshot, CellLabel};

use crate::error::Result;
use crate::rules::RuleSet;

pub fn create_session(rules: Arc<RuleSet>) -> GameSession {
    GameSession::new(rules)
}

pub fn apply_move(
    session: &mut GameSession,
    player: Player,
    row: usize,
    col: usize,
) -> Result<MoveOutcome> {
    session.apply_move(player, row, col)
}

pub fn resign(session: &mut GameSession, player: Player) -> Result<GameStatus> {
    session.resign(player)
}

pub fn serialize_board(session: &GameSession) -> BoardSnapshot {
    session.serialize_board()
}
