//! Serializable rules configuration (TOML rules files, persisted variants)

use serde::{Deserialize, Serialize};

use super::ruleset::{ForbiddenRule, OpeningProtocol};
use crate::board::Stone;

/// Raw, unvalidated rule settings.
///
/// Missing keys fall back to a 15x15 freestyle game. Turn one into a
/// [`RuleSet`](super::RuleSet) with `RuleSet::new`.
///
/// ```toml
/// name = "renju"
/// board_size = 15
/// win_length = 5
/// allow_overlines = true
/// forbidden = ["double-three", "double-four", "overline"]
/// restricted = "black"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSetConfig {
    pub name: String,
    pub board_size: u8,
    pub win_length: u8,
    pub allow_overlines: bool,
    pub forbidden: Vec<ForbiddenRule>,
    pub restricted: Option<Stone>,
    pub opening: OpeningProtocol,
    pub requires_unblocked_win: bool,
}

impl Default for RuleSetConfig {
    fn default() -> Self {
        Self {
            name: "custom".to_string(),
            board_size: 15,
            win_length: 5,
            allow_overlines: true,
            forbidden: Vec::new(),
            restricted: None,
            opening: OpeningProtocol::None,
            requires_unblocked_win: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::rules::RuleSet;

    #[test]
    fn test_default_config() {
        let config = RuleSetConfig::default();
        assert_eq!(config.board_size, 15);
        assert_eq!(config.win_length, 5);
        assert!(config.forbidden.is_empty());
        assert!(RuleSet::new(config).is_ok());
    }

    #[test]
    fn test_parse_renju_file() {
        let source = r#"
            name = "tournament renju"
            forbidden = ["double-three", "double-four", "overline"]
            restricted = "black"
        "#;
        let rules = RuleSet::from_toml_str(source).unwrap();
        assert_eq!(rules.name(), "tournament renju");
        assert_eq!(rules.restricted_player(), Some(Stone::Black));
        assert_eq!(rules.forbidden().len(), 3);
        assert_eq!(rules, {
            let mut expected = RuleSet::preset("renju").unwrap().to_config();
            expected.name = "tournament renju".to_string();
            RuleSet::new(expected).unwrap()
        });
    }

    #[test]
    fn test_parse_caro_swap2_file() {
        let source = r#"
            board_size = 19
            opening = "swap2"
            requires_unblocked_win = true
        "#;
        let rules = RuleSet::from_toml_str(source).unwrap();
        assert_eq!(rules.board_size(), 19);
        assert_eq!(rules.opening_protocol(), OpeningProtocol::Swap2);
        assert!(rules.requires_unblocked_win());
    }

    #[test]
    fn test_parse_rejects_unknown_rule_name() {
        let source = r#"
            restricted = "black"
            forbidden = ["triple-three"]
        "#;
        assert!(matches!(
            RuleSet::from_toml_str(source),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        assert!(matches!(
            RuleSet::from_toml_str("board_size = 26"),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            RuleSet::from_toml_str("win_length = 4"),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_config_serialization() {
        let config = RuleSet::preset("swap2").unwrap().to_config();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let deserialized: RuleSetConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized, config);
    }
}
