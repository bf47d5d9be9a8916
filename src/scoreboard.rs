//! Score tracking and outcome decisions across rounds.

use crate::assignment::PlayerSlot;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Accumulated scores for a match.
///
/// Scores never decrease. A decisive round awards the winner one point;
/// a tied round awards both players one point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scores {
    /// Player one's score.
    player_one: u32,

    /// Player two's score.
    player_two: u32,
}

impl Scores {
    /// Creates a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the score of the given player.
    pub fn of(&self, slot: PlayerSlot) -> u32 {
        match slot {
            PlayerSlot::One => self.player_one,
            PlayerSlot::Two => self.player_two,
        }
    }

    /// Awards a decisive round to `winner`.
    pub(crate) fn award_win(&mut self, winner: PlayerSlot) {
        match winner {
            PlayerSlot::One => self.player_one += 1,
            PlayerSlot::Two => self.player_two += 1,
        }
    }

    /// Awards a tied round to both players.
    pub(crate) fn award_tie(&mut self) {
        self.player_one += 1;
        self.player_two += 1;
    }
}

/// Outcome of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The round was won by the given player.
    Decisive(PlayerSlot),
    /// The board filled with no winner.
    Tie,
}

/// Outcome of the whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// The match was won by the given player.
    Decisive(PlayerSlot),
    /// Final scores were equal.
    Tie,
}

/// Decides the match winner from final scores.
///
/// The strictly higher score wins; equal scores tie.
#[instrument]
pub fn decide_match_winner(scores: &Scores) -> MatchOutcome {
    if scores.of(PlayerSlot::One) > scores.of(PlayerSlot::Two) {
        MatchOutcome::Decisive(PlayerSlot::One)
    } else if scores.of(PlayerSlot::Two) > scores.of(PlayerSlot::One) {
        MatchOutcome::Decisive(PlayerSlot::Two)
    } else {
        MatchOutcome::Tie
    }
}
