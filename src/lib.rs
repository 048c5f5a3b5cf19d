//! Gomoku rule engine
//!
//! Rules and win detection for Gomoku and its common variants:
//! - Board sizes from 5x5 to 25x25
//! - Overlines as wins or non-wins, per ruleset
//! - Renju forbidden moves (double-three, double-four, overline) for one color
//! - Caro: a five closed at both ends by the opponent does not win
//! - Swap2 opening protocol
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Rulesets, move validation, forbidden patterns, win detection
//! - [`session`]: Game sessions, opening protocol, snapshots, session registry
//! - [`ui`]: Desktop front end (egui)
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use gomoku::{create_session, GameStatus, Player, RuleSet};
//!
//! let rules = Arc::new(RuleSet::preset("standard").unwrap());
//! let mut session = create_session(rules);
//!
//! let outcome = session.apply_move(Player::First, 7, 7).unwrap();
//! assert_eq!(outcome.status, GameStatus::Active);
//! assert_eq!(outcome.next_player, Some(Player::Second));
//!
//! // Occupied cells are rejected and nothing changes
//! assert!(session.apply_move(Player::Second, 7, 7).is_err());
//! assert_eq!(session.history().len(), 1);
//! ```

pub mod board;
pub mod error;
pub mod rules;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Direction, Pos, Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use error::{GameError, Result};
pub use rules::{ForbiddenRule, OpeningProtocol, RuleSet, RuleSetConfig, WinningLine};
pub use session::{
    apply_move, create_session, resign, serialize_board, BoardSnapshot, GameSession, GameStatus,
    Move, MoveOutcome, Player, SessionId, SessionRegistry, Swap2Choice,
};
