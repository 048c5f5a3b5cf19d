//! Immutable rule configuration shared by every session of a variant

use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::RuleSetConfig;
use crate::board::{Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{GameError, Result};

/// Named restrictions applied to the restricted player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ForbiddenRule {
    DoubleThree,
    DoubleFour,
    Overline,
}

impl ForbiddenRule {
    pub fn name(self) -> &'static str {
        match self {
            ForbiddenRule::DoubleThree => "double-three",
            ForbiddenRule::DoubleFour => "double-four",
            ForbiddenRule::Overline => "overline",
        }
    }
}

impl fmt::Display for ForbiddenRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Special opening sequence replacing free placement for the first turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningProtocol {
    #[default]
    None,
    Swap2,
}

/// A validated, immutable ruleset.
///
/// Fields are private: a `RuleSet` only exists once its configuration has
/// passed [`RuleSet::new`], so sessions never see a degenerate variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    name: String,
    board_size: u8,
    win_length: u8,
    allow_overlines: bool,
    forbidden: Vec<ForbiddenRule>,
    restricted: Option<Stone>,
    opening: OpeningProtocol,
    requires_unblocked_win: bool,
}

/// Preset names, in menu order
pub const PRESETS: [&str; 7] = [
    "standard",
    "freestyle",
    "freestyle19",
    "renju",
    "caro",
    "mini",
    "swap2",
];

impl RuleSet {
    /// Validate a configuration into a ruleset
    pub fn new(config: RuleSetConfig) -> Result<Self> {
        validate(&config)?;
        let mut forbidden = config.forbidden;
        forbidden.sort_by_key(|rule| *rule as u8);
        forbidden.dedup();
        Ok(Self::build(config.name, config.board_size, config.win_length)
            .overlines(config.allow_overlines)
            .restrict(config.restricted, forbidden)
            .opening(config.opening)
            .unblocked(config.requires_unblocked_win))
    }

    /// Parse and validate a TOML rules document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: RuleSetConfig = toml::from_str(source)
            .map_err(|e| GameError::InvalidConfiguration(e.to_string()))?;
        Self::new(config)
    }

    /// Look up a preset by name
    pub fn preset(name: &str) -> Option<Self> {
        let rules = match name {
            "standard" => Self::standard(),
            "freestyle" => Self::build("freestyle", 15, 5),
            "freestyle19" => Self::build("freestyle19", 19, 5),
            "renju" => Self::build("renju", 15, 5).restrict(
                Some(Stone::Black),
                vec![
                    ForbiddenRule::DoubleThree,
                    ForbiddenRule::DoubleFour,
                    ForbiddenRule::Overline,
                ],
            ),
            "caro" => Self::build("caro", 15, 5).unblocked(true),
            "mini" => Self::build("mini", 8, 5),
            "swap2" => Self::build("swap2", 15, 5)
                .overlines(false)
                .opening(OpeningProtocol::Swap2),
            _ => return None,
        };
        Some(rules)
    }

    pub fn presets() -> impl Iterator<Item = RuleSet> {
        PRESETS.iter().filter_map(|name| Self::preset(name))
    }

    /// 15x15, five exactly; a longer line does not win for either side
    pub fn standard() -> Self {
        Self::build("standard", 15, 5).overlines(false)
    }

    fn build(name: impl Into<String>, board_size: u8, win_length: u8) -> Self {
        Self {
            name: name.into(),
            board_size,
            win_length,
            allow_overlines: true,
            forbidden: Vec::new(),
            restricted: None,
            opening: OpeningProtocol::None,
            requires_unblocked_win: false,
        }
    }

    fn overlines(mut self, allow: bool) -> Self {
        self.allow_overlines = allow;
        self
    }

    fn restrict(mut self, stone: Option<Stone>, forbidden: Vec<ForbiddenRule>) -> Self {
        self.restricted = stone;
        self.forbidden = forbidden;
        self
    }

    fn opening(mut self, opening: OpeningProtocol) -> Self {
        self.opening = opening;
        self
    }

    fn unblocked(mut self, required: bool) -> Self {
        self.requires_unblocked_win = required;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board_size(&self) -> u8 {
        self.board_size
    }

    pub fn win_length(&self) -> u8 {
        self.win_length
    }

    pub fn allow_overlines(&self) -> bool {
        self.allow_overlines
    }

    pub fn forbidden(&self) -> &[ForbiddenRule] {
        &self.forbidden
    }

    pub fn opening_protocol(&self) -> OpeningProtocol {
        self.opening
    }

    pub fn requires_unblocked_win(&self) -> bool {
        self.requires_unblocked_win
    }

    /// The color subject to forbidden-move checks, if any
    pub fn restricted_player(&self) -> Option<Stone> {
        self.restricted
    }

    pub fn forbids(&self, rule: ForbiddenRule) -> bool {
        self.forbidden.contains(&rule)
    }

    pub fn is_restricted(&self, stone: Stone) -> bool {
        self.restricted == Some(stone)
    }

    /// Whether a line longer than the win length wins for this color
    pub fn overline_wins(&self, stone: Stone) -> bool {
        self.allow_overlines && !(self.is_restricted(stone) && self.forbids(ForbiddenRule::Overline))
    }

    /// Back to the serializable configuration form
    pub fn to_config(&self) -> RuleSetConfig {
        RuleSetConfig {
            name: self.name.clone(),
            board_size: self.board_size,
            win_length: self.win_length,
            allow_overlines: self.allow_overlines,
            forbidden: self.forbidden.clone(),
            restricted: self.restricted,
            opening: self.opening,
            requires_unblocked_win: self.requires_unblocked_win,
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<RuleSetConfig> for RuleSet {
    type Error = GameError;

    fn try_from(config: RuleSetConfig) -> Result<Self> {
        Self::new(config)
    }
}

fn validate(config: &RuleSetConfig) -> Result<()> {
    let invalid = |msg: String| -> Result<()> { Err(GameError::InvalidConfiguration(msg)) };

    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&config.board_size) {
        return invalid(format!(
            "board size {} outside {}..={}",
            config.board_size, MIN_BOARD_SIZE, MAX_BOARD_SIZE
        ));
    }
    if config.win_length < 3 {
        return invalid(format!("win length {} is too short", config.win_length));
    }
    if config.win_length % 2 == 0 {
        return invalid(format!("win length {} must be odd", config.win_length));
    }
    if config.win_length > config.board_size {
        return invalid(format!(
            "win length {} does not fit a {}x{} board",
            config.win_length, config.board_size, config.board_size
        ));
    }
    match config.restricted {
        Some(Stone::Empty) => return invalid("restricted player must be a color".to_string()),
        None if !config.forbidden.is_empty() => {
            return invalid("forbidden rules need a restricted player".to_string())
        }
        _ => {}
    }
    Ok(())
}
