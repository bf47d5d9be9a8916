//! Match configuration collected by the setup screen.

use crate::assignment::PlayerSlot;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Minimum number of rounds in a match.
pub const MIN_ROUNDS: u8 = 1;

/// Maximum number of rounds in a match.
pub const MAX_ROUNDS: u8 = 10;

/// Immutable settings for one match.
///
/// Names are stored trimmed. Construction is the only error path in the
/// crate; a config that exists is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Name of player one.
    player_one_name: String,

    /// Name of player two.
    player_two_name: String,

    /// Number of rounds to play (1-10).
    total_rounds: u8,
}

impl MatchConfig {
    /// Creates a validated match configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MatchConfigError`] if either name is empty after trimming
    /// or `total_rounds` is outside 1-10.
    #[instrument]
    pub fn new(
        player_one_name: &str,
        player_two_name: &str,
        total_rounds: u8,
    ) -> Result<Self, MatchConfigError> {
        let player_one_name = player_one_name.trim();
        let player_two_name = player_two_name.trim();

        if player_one_name.is_empty() {
            return Err(MatchConfigError::new("Player one name is empty"));
        }
        if player_two_name.is_empty() {
            return Err(MatchConfigError::new("Player two name is empty"));
        }
        if !(MIN_ROUNDS..=MAX_ROUNDS).contains(&total_rounds) {
            return Err(MatchConfigError::new(format!(
                "Total rounds must be between {} and {}, got {}",
                MIN_ROUNDS, MAX_ROUNDS, total_rounds
            )));
        }

        debug!(player_one_name, player_two_name, total_rounds, "Match configured");
        Ok(Self {
            player_one_name: player_one_name.to_string(),
            player_two_name: player_two_name.to_string(),
            total_rounds,
        })
    }

    /// Returns the configured name for the given player.
    pub fn player_name(&self, slot: PlayerSlot) -> &str {
        match slot {
            PlayerSlot::One => &self.player_one_name,
            PlayerSlot::Two => &self.player_two_name,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid match configuration: {} at {}:{}", message, file, line)]
pub struct MatchConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl MatchConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = MatchConfig::new("Ann", "Bo", 3).expect("Valid config");
        assert_eq!(config.player_one_name(), "Ann");
        assert_eq!(config.player_two_name(), "Bo");
        assert_eq!(*config.total_rounds(), 3);
    }

    #[test]
    fn test_names_are_trimmed() {
        let config = MatchConfig::new("  Ann ", "\tBo\n", 1).expect("Valid config");
        assert_eq!(config.player_one_name(), "Ann");
        assert_eq!(config.player_two_name(), "Bo");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(MatchConfig::new("   ", "Bo", 3).is_err());
        assert!(MatchConfig::new("Ann", "", 3).is_err());
    }

    #[test]
    fn test_rounds_out_of_range_rejected() {
        assert!(MatchConfig::new("Ann", "Bo", 0).is_err());
        assert!(MatchConfig::new("Ann", "Bo", 11).is_err());
        assert!(MatchConfig::new("Ann", "Bo", 10).is_ok());
    }
}
