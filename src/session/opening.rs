//! Swap2 opening protocol
//!
//! 1. First places black, white, black.
//! 2. Second takes white, takes black, or places two more (black, white).
//! 3. After two more stones, First picks a color.
//!
//! Whoever ends up with white plays the next stone.

use serde::{Deserialize, Serialize};

use crate::board::Stone;
use crate::error::{GameError, Result};
use crate::rules::OpeningProtocol;

use super::game::Player;

/// A color decision offered by swap2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Swap2Choice {
    TakeWhite,
    TakeBlack,
    PlaceTwo,
}

/// Where a session stands in its opening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningState {
    /// Ordinary alternation (no protocol, or protocol finished)
    Free,
    /// First places the initial three stones
    InitialPlacement,
    /// Second decides after three stones
    SecondChooses,
    /// Second places the extra two stones
    ExtraPlacement,
    /// First decides after five stones
    FirstChooses,
}

const INITIAL_STONES: [Stone; 3] = [Stone::Black, Stone::White, Stone::Black];
const EXTRA_STONES: [Stone; 2] = [Stone::Black, Stone::White];

impl OpeningState {
    pub fn start(protocol: OpeningProtocol) -> Self {
        match protocol {
            OpeningProtocol::None => OpeningState::Free,
            OpeningProtocol::Swap2 => OpeningState::InitialPlacement,
        }
    }

    /// Placements here follow the protocol instead of the forbidden-move policy
    pub fn is_placement(self) -> bool {
        matches!(self, OpeningState::InitialPlacement | OpeningState::ExtraPlacement)
    }

    /// Seat that must decide before play continues
    pub fn decider(self) -> Option<Player> {
        match self {
            OpeningState::SecondChooses => Some(Player::Second),
            OpeningState::FirstChooses => Some(Player::First),
            _ => None,
        }
    }

    /// Seat placing stones during a protocol placement step
    pub fn placer(self) -> Option<Player> {
        match self {
            OpeningState::InitialPlacement => Some(Player::First),
            OpeningState::ExtraPlacement => Some(Player::Second),
            _ => None,
        }
    }

    /// Choices offered at this point
    pub fn choices(self) -> &'static [Swap2Choice] {
        match self {
            OpeningState::SecondChooses => &[
                Swap2Choice::TakeWhite,
                Swap2Choice::TakeBlack,
                Swap2Choice::PlaceTwo,
            ],
            OpeningState::FirstChooses => &[Swap2Choice::TakeWhite, Swap2Choice::TakeBlack],
            _ => &[],
        }
    }

    /// Color of the next protocol stone, given how many stones are down
    pub fn placement_stone(self, placed: usize) -> Option<Stone> {
        match self {
            OpeningState::InitialPlacement => INITIAL_STONES.get(placed).copied(),
            OpeningState::ExtraPlacement => placed
                .checked_sub(INITIAL_STONES.len())
                .and_then(|i| EXTRA_STONES.get(i).copied()),
            _ => None,
        }
    }

    /// State after a stone lands, given the new stone count
    pub fn after_placement(self, placed: usize) -> Self {
        match self {
            OpeningState::InitialPlacement if placed >= INITIAL_STONES.len() => {
                OpeningState::SecondChooses
            }
            OpeningState::ExtraPlacement if placed >= INITIAL_STONES.len() + EXTRA_STONES.len() => {
                OpeningState::FirstChooses
            }
            other => other,
        }
    }

    /// Apply a choice. Returns the next state and, once colors are settled,
    /// the seat that plays black.
    pub fn choose(self, player: Player, choice: Swap2Choice) -> Result<(Self, Option<Player>)> {
        let decider = self.decider().ok_or(GameError::NoDecisionPending)?;
        if player != decider {
            return Err(GameError::NotYourTurn {
                expected: decider,
                got: player,
            });
        }
        if !self.choices().contains(&choice) {
            return Err(GameError::InvalidChoice(format!(
                "{choice:?} is not offered to {player} at this point"
            )));
        }

        let outcome = match choice {
            Swap2Choice::PlaceTwo => (OpeningState::ExtraPlacement, None),
            Swap2Choice::TakeBlack => (OpeningState::Free, Some(player)),
            Swap2Choice::TakeWhite => (OpeningState::Free, Some(player.other())),
        };
        Ok(outcome)
    }
}
