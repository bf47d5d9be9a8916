//! Per-round assignment of marks to players.

use crate::games::tictactoe::Mark;
use crate::rng::MatchRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Logical player in a match, independent of which mark they hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    /// Player one (named first on the setup screen).
    One,
    /// Player two.
    Two,
}

impl PlayerSlot {
    /// Returns the other player.
    pub fn other(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }
}

/// Which player holds which mark for one round.
///
/// Only player one's mark is stored; player two always holds the
/// opposing mark, so the mapping cannot overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkAssignment {
    player_one: Mark,
}

impl MarkAssignment {
    /// Creates an assignment giving `player_one` the supplied mark.
    pub fn new(player_one: Mark) -> Self {
        Self { player_one }
    }

    /// Returns the mark held by the given player this round.
    pub fn mark_of(self, slot: PlayerSlot) -> Mark {
        match slot {
            PlayerSlot::One => self.player_one,
            PlayerSlot::Two => self.player_one.opponent(),
        }
    }

    /// Returns the player holding the given mark this round.
    pub fn holder_of(self, mark: Mark) -> PlayerSlot {
        if mark == self.player_one {
            PlayerSlot::One
        } else {
            PlayerSlot::Two
        }
    }

    /// Returns the player who moves first this round (the holder of `X`).
    pub fn first_mover(self) -> PlayerSlot {
        self.holder_of(Mark::X)
    }
}

/// Computes the mark assignment for a round.
///
/// Odd rounds give player one `X`, even rounds give player two `X`.
/// When `total_rounds` is odd the final round cannot alternate evenly,
/// so its assignment is drawn at random (50/50) instead.
#[instrument(skip(rng))]
pub fn assign_marks_for_round(round: u8, total_rounds: u8, rng: &mut MatchRng) -> MarkAssignment {
    let randomized_final = total_rounds % 2 == 1 && round == total_rounds;
    let player_one_first = if randomized_final {
        let first = rng.gen_bool(0.5);
        debug!(round, player_one_first = first, "Randomized final-round assignment");
        first
    } else {
        round % 2 == 1
    };

    if player_one_first {
        MarkAssignment::new(Mark::X)
    } else {
        MarkAssignment::new(Mark::O)
    }
}
