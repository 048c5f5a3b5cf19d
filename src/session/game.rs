//! Game session: one board, one ruleset, two seats

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, Stone};
use crate::error::{GameError, Result};
use crate::rules::{evaluate, validate, RuleSet, Turn, Verdict, WinningLine};

use super::opening::{OpeningState, Swap2Choice};
use super::snapshot::BoardSnapshot;

/// Seat at the table, independent of stone color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    First,
    Second,
}

impl Player {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::First => write!(f, "first player"),
            Player::Second => write!(f, "second player"),
        }
    }
}

/// Lifecycle of a game. Once it leaves `Active` it never changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "player", rename_all = "lowercase")]
pub enum GameStatus {
    Active,
    Won(Player),
    Drawn,
    /// The named seat resigned
    Resigned(Player),
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Active
    }

    /// Seat that won, by line or by the opponent resigning
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::Resigned(player) => Some(player.other()),
            GameStatus::Active | GameStatus::Drawn => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Active => write!(f, "in progress"),
            GameStatus::Won(player) => write!(f, "won by {player}"),
            GameStatus::Drawn => write!(f, "drawn"),
            GameStatus::Resigned(player) => write!(f, "{player} resigned"),
        }
    }
}

/// An accepted stone placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub pos: Pos,
    pub player: Player,
    pub stone: Stone,
    /// 0-based position in the history
    pub index: usize,
}

/// Everything a seat can do to a session, in the order it happened.
/// Replaying the log rebuilds the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Place { player: Player, row: usize, col: usize },
    Choose { player: Player, choice: Swap2Choice },
    Resign { player: Player },
}

/// Result of an accepted move
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub mv: Move,
    pub status: GameStatus,
    pub winning_line: Option<WinningLine>,
    /// Seat expected to act next, `None` once the game is over
    pub next_player: Option<Player>,
}

/// A color decision the opening protocol is waiting on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PendingDecision {
    pub player: Player,
    pub choices: &'static [Swap2Choice],
}

/// One game between two seats under a fixed ruleset
#[derive(Debug, Clone)]
pub struct GameSession {
    rules: Arc<RuleSet>,
    board: Board,
    history: Vec<Move>,
    actions: Vec<Action>,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    opening: OpeningState,
    /// Seat playing black; fixed to `First` unless swap2 decides otherwise
    black_seat: Player,
}

impl GameSession {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        let board = Board::new(rules.board_size());
        let opening = OpeningState::start(rules.opening_protocol());
        tracing::debug!(
            rules = rules.name(),
            size = rules.board_size(),
            "new session"
        );
        Self {
            rules,
            board,
            history: Vec::new(),
            actions: Vec::new(),
            status: GameStatus::Active,
            winning_line: None,
            opening,
            black_seat: Player::First,
        }
    }

    /// Rebuild a session by replaying a recorded action log
    pub fn replay(rules: Arc<RuleSet>, actions: &[Action]) -> Result<Self> {
        let mut session = Self::new(rules);
        for action in actions {
            match *action {
                Action::Place { player, row, col } => {
                    session.apply_move(player, row, col)?;
                }
                Action::Choose { player, choice } => session.choose_color(player, choice)?,
                Action::Resign { player } => {
                    session.resign(player)?;
                }
            }
        }
        Ok(session)
    }

    // ---- accessors ----

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn shared_rules(&self) -> Arc<RuleSet> {
        Arc::clone(&self.rules)
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    pub fn opening_state(&self) -> OpeningState {
        self.opening
    }

    pub fn pending_decision(&self) -> Option<PendingDecision> {
        if self.status.is_terminal() {
            return None;
        }
        self.opening.decider().map(|player| PendingDecision {
            player,
            choices: self.opening.choices(),
        })
    }

    /// Seat currently holding a color
    pub fn seat_of(&self, stone: Stone) -> Option<Player> {
        match stone {
            Stone::Black => Some(self.black_seat),
            Stone::White => Some(self.black_seat.other()),
            Stone::Empty => None,
        }
    }

    /// Color of the next stone to be placed
    pub fn stone_to_play(&self) -> Stone {
        self.opening
            .placement_stone(self.history.len())
            .unwrap_or_else(|| self.alternating_stone())
    }

    /// Seat expected to act next: place a stone or, under swap2, make a
    /// color choice. `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        if self.status.is_terminal() {
            return None;
        }
        self.opening
            .decider()
            .or_else(|| self.opening.placer())
            .or_else(|| self.seat_of(self.stone_to_play()))
    }

    // ---- actions ----

    /// Dry run of `apply_move`: same checks, nothing committed
    pub fn check_move(&self, player: Player, row: usize, col: usize) -> Result<Pos> {
        self.ensure_active()?;
        let pos = self.board.pos(row, col)?;
        if let Some(decider) = self.opening.decider() {
            return Err(GameError::DecisionPending(decider));
        }
        let (mv, turn) = self.candidate(pos, player);
        validate(&self.board, &self.rules, &mv, &turn)?;
        Ok(pos)
    }

    /// Validate and commit a stone for `player`.
    ///
    /// A rejected move leaves the board, history, status and turn exactly
    /// as they were.
    pub fn apply_move(&mut self, player: Player, row: usize, col: usize) -> Result<MoveOutcome> {
        let pos = match self.check_move(player, row, col) {
            Ok(pos) => pos,
            Err(err) => {
                tracing::debug!(%player, row, col, error = %err, "move rejected");
                return Err(err);
            }
        };
        let (mv, _) = self.candidate(pos, player);

        self.board.set(mv.pos, mv.stone)?;
        self.history.push(mv);
        self.actions.push(Action::Place { player, row, col });
        self.opening = self.opening.after_placement(self.history.len());

        tracing::debug!(
            "move {}: {} plays {} at {}",
            mv.index,
            player,
            mv.stone,
            mv.pos.notation(self.board.size())
        );

        match evaluate(&self.board, &self.rules, mv.pos) {
            Verdict::Win(line) => {
                self.finish(GameStatus::Won(player));
                self.winning_line = Some(line);
            }
            Verdict::Draw => self.finish(GameStatus::Drawn),
            Verdict::Ongoing => {}
        }

        Ok(MoveOutcome {
            mv,
            status: self.status,
            winning_line: self.winning_line.clone(),
            next_player: self.current_player(),
        })
    }

    /// `player` concedes; the other seat wins
    pub fn resign(&mut self, player: Player) -> Result<GameStatus> {
        self.ensure_active()?;
        self.actions.push(Action::Resign { player });
        self.finish(GameStatus::Resigned(player));
        Ok(self.status)
    }

    /// Answer a swap2 color decision
    pub fn choose_color(&mut self, player: Player, choice: Swap2Choice) -> Result<()> {
        self.ensure_active()?;
        let (next, black_seat) = self.opening.choose(player, choice).map_err(|err| {
            tracing::debug!(%player, ?choice, error = %err, "choice rejected");
            err
        })?;

        self.opening = next;
        if let Some(seat) = black_seat {
            self.black_seat = seat;
            tracing::info!("colors settled: {} plays black", seat);
        }
        self.actions.push(Action::Choose { player, choice });
        Ok(())
    }

    pub fn serialize_board(&self) -> BoardSnapshot {
        BoardSnapshot::capture(self)
    }

    // ---- internals ----

    fn ensure_active(&self) -> Result<()> {
        match self.status {
            GameStatus::Active => Ok(()),
            terminal => Err(GameError::GameAlreadyTerminal(terminal)),
        }
    }

    /// The move `player` would make at `pos`, and the turn it is checked against
    fn candidate(&self, pos: Pos, player: Player) -> (Move, Turn) {
        let stone = self.stone_to_play();
        let expected = self
            .opening
            .placer()
            .or_else(|| self.seat_of(stone))
            .unwrap_or(Player::First);
        let mv = Move {
            pos,
            player,
            stone,
            index: self.history.len(),
        };
        let turn = Turn {
            player: expected,
            stone,
            opening: self.opening.is_placement(),
        };
        (mv, turn)
    }

    /// Black moves first and the colors alternate. Counting stones rather
    /// than looking at the last one keeps this right after a swap2 opening.
    fn alternating_stone(&self) -> Stone {
        let black = self.board.stones(Stone::Black).count();
        let white = self.board.stones(Stone::White).count();
        if black > white {
            Stone::White
        } else {
            Stone::Black
        }
    }

    fn finish(&mut self, status: GameStatus) {
        debug_assert!(!self.status.is_terminal());
        self.status = status;
        tracing::info!(moves = self.history.len(), "game over: {}", status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(preset: &str) -> GameSession {
        GameSession::new(Arc::new(RuleSet::preset(preset).unwrap()))
    }

    fn play(session: &mut GameSession, moves: &[(usize, usize)]) {
        for &(row, col) in moves {
            let player = session.current_player().unwrap();
            session.apply_move(player, row, col).unwrap();
        }
    }

    #[test]
    fn test_first_plays_black() {
        let s = session("standard");
        assert_eq!(s.current_player(), Some(Player::First));
        assert_eq!(s.stone_to_play(), Stone::Black);
        assert_eq!(s.seat_of(Stone::White), Some(Player::Second));
        assert_eq!(s.seat_of(Stone::Empty), None);
    }

    #[test]
    fn test_alternation() {
        let mut s = session("standard");
        let out = s.apply_move(Player::First, 7, 7).unwrap();
        assert_eq!(out.mv.stone, Stone::Black);
        assert_eq!(out.mv.index, 0);
        assert_eq!(out.next_player, Some(Player::Second));
        assert_eq!(s.stone_to_play(), Stone::White);

        let out = s.apply_move(Player::Second, 7, 8).unwrap();
        assert_eq!(out.mv.stone, Stone::White);
        assert_eq!(out.mv.index, 1);
        assert_eq!(s.current_player(), Some(Player::First));
    }

    #[test]
    fn test_rejection_is_atomic() {
        let mut s = session("standard");
        s.apply_move(Player::First, 7, 7).unwrap();
        let before = s.clone();

        assert_eq!(
            s.apply_move(Player::Second, 7, 7),
            Err(GameError::CellOccupied(Pos::new(7, 7)))
        );
        assert_eq!(
            s.apply_move(Player::First, 3, 3),
            Err(GameError::NotYourTurn {
                expected: Player::Second,
                got: Player::First
            })
        );
        assert!(matches!(
            s.apply_move(Player::Second, 15, 0),
            Err(GameError::OutOfBounds { .. })
        ));

        assert_eq!(s.board(), before.board());
        assert_eq!(s.history(), before.history());
        assert_eq!(s.actions(), before.actions());
        assert_eq!(s.current_player(), before.current_player());
    }

    #[test]
    fn test_win_ends_game() {
        let mut s = session("standard");
        play(&mut s, &[(7, 3), (0, 0), (7, 4), (0, 1), (7, 5), (0, 2), (7, 6), (0, 3)]);
        let out = s.apply_move(Player::First, 7, 7).unwrap();

        assert_eq!(out.status, GameStatus::Won(Player::First));
        assert_eq!(out.next_player, None);
        assert_eq!(out.winning_line.as_ref().map(|l| l.stones.len()), Some(5));
        assert_eq!(s.winning_line(), out.winning_line.as_ref());
        assert_eq!(s.current_player(), None);
        assert_eq!(
            s.apply_move(Player::Second, 10, 10),
            Err(GameError::GameAlreadyTerminal(GameStatus::Won(Player::First)))
        );
    }

    #[test]
    fn test_resign() {
        let mut s = session("freestyle");
        s.apply_move(Player::First, 7, 7).unwrap();
        let status = s.resign(Player::Second).unwrap();
        assert_eq!(status, GameStatus::Resigned(Player::Second));
        assert_eq!(status.winner(), Some(Player::First));
        assert_eq!(
            s.resign(Player::First),
            Err(GameError::GameAlreadyTerminal(GameStatus::Resigned(Player::Second)))
        );
    }

    #[test]
    fn test_check_move_commits_nothing() {
        let s = session("standard");
        assert_eq!(s.check_move(Player::First, 7, 7), Ok(Pos::new(7, 7)));
        assert!(s.board().is_board_empty());
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_forbidden_move_for_restricted_seat() {
        let mut s = session("renju");
        // Black builds an open cross around (7,7); White plays far away
        play(&mut s, &[(7, 6), (0, 0), (7, 8), (0, 2), (6, 7), (0, 4), (8, 7), (0, 6)]);
        assert!(matches!(
            s.apply_move(Player::First, 7, 7),
            Err(GameError::ForbiddenMove { .. })
        ));
        assert_eq!(s.history().len(), 8);
        assert_eq!(s.current_player(), Some(Player::First));
    }

    #[test]
    fn test_swap2_take_white() {
        let mut s = session("swap2");
        assert_eq!(s.current_player(), Some(Player::First));
        s.apply_move(Player::First, 7, 7).unwrap();
        s.apply_move(Player::First, 7, 8).unwrap();
        let out = s.apply_move(Player::First, 8, 7).unwrap();
        assert_eq!(out.next_player, Some(Player::Second));

        let pending = s.pending_decision().unwrap();
        assert_eq!(pending.player, Player::Second);
        assert_eq!(pending.choices.len(), 3);
        assert_eq!(
            s.apply_move(Player::Second, 3, 3),
            Err(GameError::DecisionPending(Player::Second))
        );

        s.choose_color(Player::Second, Swap2Choice::TakeWhite).unwrap();
        assert_eq!(s.pending_decision(), None);
        assert_eq!(s.seat_of(Stone::White), Some(Player::Second));
        assert_eq!(s.stone_to_play(), Stone::White);
        assert_eq!(s.current_player(), Some(Player::Second));
    }

    #[test]
    fn test_swap2_place_two_then_first_takes_black() {
        let mut s = session("swap2");
        for (row, col) in [(7, 7), (7, 8), (8, 7)] {
            s.apply_move(Player::First, row, col).unwrap();
        }
        s.choose_color(Player::Second, Swap2Choice::PlaceTwo).unwrap();
        assert_eq!(s.current_player(), Some(Player::Second));
        assert_eq!(s.stone_to_play(), Stone::Black);
        s.apply_move(Player::Second, 9, 9).unwrap();
        assert_eq!(s.stone_to_play(), Stone::White);
        s.apply_move(Player::Second, 6, 6).unwrap();

        assert_eq!(s.pending_decision().map(|p| p.player), Some(Player::First));
        assert!(matches!(
            s.choose_color(Player::First, Swap2Choice::PlaceTwo),
            Err(GameError::InvalidChoice(_))
        ));
        s.choose_color(Player::First, Swap2Choice::TakeBlack).unwrap();

        assert_eq!(s.seat_of(Stone::Black), Some(Player::First));
        assert_eq!(s.stone_to_play(), Stone::White);
        assert_eq!(s.current_player(), Some(Player::Second));
        assert_eq!(
            s.choose_color(Player::First, Swap2Choice::TakeBlack),
            Err(GameError::NoDecisionPending)
        );
    }

    #[test]
    fn test_replay_matches_live_session() {
        let mut live = session("swap2");
        for (row, col) in [(7, 7), (7, 8), (8, 7)] {
            live.apply_move(Player::First, row, col).unwrap();
        }
        live.choose_color(Player::Second, Swap2Choice::TakeBlack).unwrap();
        live.apply_move(Player::First, 9, 9).unwrap();
        live.resign(Player::Second).unwrap();

        let restored = GameSession::replay(live.shared_rules(), live.actions()).unwrap();
        assert_eq!(restored.board(), live.board());
        assert_eq!(restored.history(), live.history());
        assert_eq!(restored.status(), live.status());
        assert_eq!(restored.seat_of(Stone::Black), Some(Player::Second));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::Won(Player::First).to_string(), "won by first player");
        assert_eq!(
            GameStatus::Resigned(Player::Second).to_string(),
            "second player resigned"
        );
        assert!(!GameStatus::Active.is_terminal());
        assert!(GameStatus::Drawn.is_terminal());
    }
}
