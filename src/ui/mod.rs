//! GUI module for the Gomoku game
//!
//! Native hotseat board using egui/eframe. Everything it shows comes from a
//! `GameSession` and its board snapshot.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::{GameState, MoveTimer};
