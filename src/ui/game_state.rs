//! Game state management for the Gomoku GUI

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::session::{Action, GameSession, GameStatus, MoveOutcome, Player, Swap2Choice};
use crate::{Pos, RuleSet, Stone};

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Hotseat game: both seats share the mouse, the session enforces turns
pub struct GameState {
    pub session: GameSession,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self {
            session: GameSession::new(rules),
            move_timer: MoveTimer::default(),
            message: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.session.shared_rules());
    }

    /// Start over under a different ruleset
    pub fn switch_rules(&mut self, rules: Arc<RuleSet>) {
        *self = Self::new(rules);
    }

    pub fn is_over(&self) -> bool {
        self.session.status().is_terminal()
    }

    /// Color the hover preview should show
    pub fn stone_to_play(&self) -> Stone {
        self.session.stone_to_play()
    }

    /// Whether the seat to move could legally play at `pos`
    pub fn can_play(&self, pos: Pos) -> bool {
        self.session
            .current_player()
            .is_some_and(|player| {
                self.session
                    .check_move(player, pos.row as usize, pos.col as usize)
                    .is_ok()
            })
    }

    /// Attempt to place a stone for whichever seat is to move
    /// Place a stone for whichever seat is to move.
    /// A rejection is stored in `message` and yields `None`.
    pub fn try_place_stone(&mut self, pos: Pos) -> Option<MoveOutcome> {
        let Some(player) = self.session.current_player() else {
            self.message = Some("Game is over".to_string());
            return None;
        };

        match self.session.apply_move(player, pos.row as usize, pos.col as usize) {
            Ok(outcome) => {
                self.move_timer.stop();
                if outcome.next_player.is_some() {
                    self.move_timer.start();
                }
                self.message = None;
                Some(outcome)
            }
            Err(err) => {
                self.message = Some(err.to_string());
                None
            }
        }
    }

    pub fn choose(&mut self, choice: Swap2Choice) {
        let Some(pending) = self.session.pending_decision() else {
            return;
        };
        match self.session.choose_color(pending.player, choice) {
            Ok(()) => {
                self.message = None;
                self.move_timer.start();
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    pub fn resign(&mut self) {
        if let Some(player) = self.session.current_player() {
            if let Err(err) = self.session.resign(player) {
                self.message = Some(err.to_string());
            }
            self.move_timer.stop();
        }
    }

    /// Undo the last stone (and any choice made after it)
    pub fn undo(&mut self) {
        let actions = self.session.actions();
        let Some(last_place) = actions
            .iter()
            .rposition(|a| matches!(a, Action::Place { .. }))
        else {
            return;
        };

        // Simple undo: replay everything before the last stone
        let kept = actions[..last_place].to_vec();
        match GameSession::replay(self.session.shared_rules(), &kept) {
            Ok(session) => {
                self.session = session;
                self.message = None;
                self.move_timer.start();
            }
            Err(err) => self.message = Some(format!("Undo failed: {err}")),
        }
    }

    /// Short line describing whose turn it is or how the game ended
    pub fn status_text(&self) -> String {
        match self.session.status() {
            GameStatus::Active => {
                if let Some(pending) = self.session.pending_decision() {
                    return format!("{} to choose a color", seat_name(pending.player));
                }
                let stone = self.session.stone_to_play();
                match self.session.current_player() {
                    Some(player) => format!("{} to play {}", seat_name(player), stone),
                    None => String::new(),
                }
            }
            GameStatus::Won(player) => {
                let stone = self
                    .session
                    .winning_line()
                    .map_or(Stone::Empty, |line| line.stone);
                format!("{} wins with {}!", seat_name(player), stone)
            }
            GameStatus::Drawn => "Draw: the board is full".to_string(),
            GameStatus::Resigned(player) => {
                format!("{} resigned, {} wins", seat_name(player), seat_name(player.other()))
            }
        }
    }
}

pub fn seat_name(player: Player) -> &'static str {
    match player {
        Player::First => "Player 1",
        Player::Second => "Player 2",
    }
}
