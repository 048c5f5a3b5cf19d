//! Game rules for Gomoku variants
//!
//! This module implements the rule engine:
//! - Ruleset configuration and presets
//! - Move validation (turn order, forbidden moves)
//! - Win conditions (five, overline policy, Caro unblocked wins) and draws

pub mod config;
pub mod forbidden;
mod line;
pub mod ruleset;
pub mod validator;
pub mod win;

// Re-exports for convenient access
pub use config::RuleSetConfig;
pub use forbidden::{count_free_threes, forbidden_rule, move_shape, LineShape, MoveShape};
pub use ruleset::{ForbiddenRule, OpeningProtocol, RuleSet, PRESETS};
pub use validator::{is_valid_move, validate, Turn};
pub use win::{check_win, evaluate, is_draw, Verdict, WinningLine};
