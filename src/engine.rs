//! Match state machine: rounds, turns, scoring, and terminal outcomes.

use crate::assignment::{assign_marks_for_round, MarkAssignment, PlayerSlot};
use crate::games::tictactoe::{rules, Board, Mark, Position, RoundStatus, Square};
use crate::match_config::MatchConfig;
use crate::rng::MatchRng;
use crate::scoreboard::{decide_match_winner, MatchOutcome, RoundOutcome, Scores};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Phase of the match state machine.
///
/// The setup phase has no engine at all; an engine exists only between
/// "start match" and "reset match".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// A round is being played.
    RoundInProgress,
    /// The current round has an outcome; waiting to advance.
    RoundEnded,
    /// All rounds are played and the match outcome is final.
    MatchComplete,
}

/// Drives one match from the first round to the final outcome.
///
/// Commands that violate their preconditions (wrong phase, occupied
/// square, out-of-range index) are ignored without touching state; the
/// view layer is expected to prevent them but is not trusted to.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    config: MatchConfig,
    rng: MatchRng,
    board: Board,
    current_round: u8,
    to_move: Mark,
    assignment: MarkAssignment,
    scores: Scores,
    history: Vec<Position>,
    round_outcome: Option<RoundOutcome>,
    match_outcome: Option<MatchOutcome>,
    phase: MatchPhase,
}

impl MatchEngine {
    /// Starts a match with an entropy-seeded random source.
    pub fn new(config: MatchConfig) -> Self {
        Self::with_rng(config, MatchRng::from_entropy())
    }

    /// Starts a match with the supplied random source.
    ///
    /// Seeded sources make the final-round assignment of odd-length
    /// matches reproducible in tests.
    #[instrument(skip(config, rng), fields(total_rounds = *config.total_rounds()))]
    pub fn with_rng(config: MatchConfig, mut rng: MatchRng) -> Self {
        let total_rounds = *config.total_rounds();
        let assignment = assign_marks_for_round(1, total_rounds, &mut rng);
        info!(
            player_one = %config.player_one_name(),
            player_two = %config.player_two_name(),
            total_rounds,
            first_mover = ?assignment.first_mover(),
            "Match started"
        );
        Self {
            config,
            rng,
            board: Board::new(),
            current_round: 1,
            to_move: Mark::X,
            assignment,
            scores: Scores::new(),
            history: Vec::new(),
            round_outcome: None,
            match_outcome: None,
            phase: MatchPhase::RoundInProgress,
        }
    }

    /// Places the current mark at `index` (0-8, row-major).
    ///
    /// Ignored unless a round is in progress, the index is in range, and
    /// the square is empty.
    #[instrument(skip(self), fields(round = self.current_round, to_move = ?self.to_move))]
    pub fn place_mark(&mut self, index: usize) {
        if self.phase != MatchPhase::RoundInProgress {
            debug!(phase = ?self.phase, "Ignoring placement outside an active round");
            return;
        }
        let Some(position) = Position::from_index(index) else {
            debug!(index, "Ignoring placement at out-of-range index");
            return;
        };
        if !self.board.is_empty(position) {
            debug!(%position, "Ignoring placement on occupied square");
            return;
        }

        let mark = self.to_move;
        self.board.set(position, Square::Occupied(mark));
        self.history.push(position);

        match rules::evaluate(&self.board) {
            RoundStatus::Won(winner) => {
                let slot = self.assignment.holder_of(winner);
                self.scores.award_win(slot);
                self.finish_round(RoundOutcome::Decisive(slot));
            }
            RoundStatus::Draw => {
                self.scores.award_tie();
                self.finish_round(RoundOutcome::Tie);
            }
            RoundStatus::InProgress => {
                self.to_move = mark.opponent();
            }
        }
    }

    /// Advances past an ended round.
    ///
    /// After the final round this transitions to `MatchComplete`;
    /// otherwise the next round begins with a fresh board and a newly
    /// computed mark assignment. Ignored unless the phase is `RoundEnded`.
    #[instrument(skip(self), fields(round = self.current_round))]
    pub fn advance_round(&mut self) {
        if self.phase != MatchPhase::RoundEnded {
            debug!(phase = ?self.phase, "Ignoring round advance");
            return;
        }
        if self.match_outcome.is_some() {
            info!(outcome = ?self.match_outcome, "Match complete");
            self.phase = MatchPhase::MatchComplete;
            return;
        }
        self.current_round += 1;
        self.begin_round();
    }

    /// Replays the current round from an empty board.
    ///
    /// Scores and the round counter are preserved; the round's mark
    /// assignment is recomputed (re-randomized when the randomized
    /// final-round branch applies). Ignored once the match is complete.
    #[instrument(skip(self), fields(round = self.current_round))]
    pub fn reset_current_round(&mut self) {
        if self.phase == MatchPhase::MatchComplete {
            debug!("Ignoring round reset after match completion");
            return;
        }
        // A final round that ended but was reset before advancing takes
        // its eagerly computed match outcome with it.
        self.match_outcome = None;
        self.begin_round();
    }

    fn begin_round(&mut self) {
        let total_rounds = *self.config.total_rounds();
        self.assignment = assign_marks_for_round(self.current_round, total_rounds, &mut self.rng);
        self.board = Board::new();
        self.history.clear();
        self.to_move = Mark::X;
        self.round_outcome = None;
        self.phase = MatchPhase::RoundInProgress;
        info!(
            round = self.current_round,
            first_mover = ?self.assignment.first_mover(),
            "Round started"
        );
    }

    fn finish_round(&mut self, outcome: RoundOutcome) {
        info!(round = self.current_round, ?outcome, "Round ended");
        self.round_outcome = Some(outcome);
        self.phase = MatchPhase::RoundEnded;
        // The final round decides the match as soon as it ends; the
        // phase still reaches MatchComplete only through advance_round.
        if self.current_round == *self.config.total_rounds() {
            self.match_outcome = Some(decide_match_winner(&self.scores));
        }
    }

    /// Returns the match configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current round number (1-based).
    pub fn current_round(&self) -> u8 {
        self.current_round
    }

    /// Returns the mark whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns this round's mark assignment.
    pub fn assignment(&self) -> MarkAssignment {
        self.assignment
    }

    /// Returns the accumulated scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Returns the positions played this round, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns the current round's outcome, if the round has ended.
    pub fn round_outcome(&self) -> Option<RoundOutcome> {
        self.round_outcome
    }

    /// Returns the match outcome, available once the final round ends.
    pub fn match_outcome(&self) -> Option<MatchOutcome> {
        self.match_outcome
    }

    /// Returns the current phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Captures an owned snapshot of everything a renderer needs.
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            player_one_name: self.config.player_one_name().clone(),
            player_two_name: self.config.player_two_name().clone(),
            total_rounds: *self.config.total_rounds(),
            current_round: self.current_round,
            board: self.board.clone(),
            to_move: self.to_move,
            assignment: self.assignment,
            scores: self.scores,
            round_outcome: self.round_outcome,
            match_outcome: self.match_outcome,
            phase: self.phase,
        }
    }
}

/// Owned view of a match for rendering.
///
/// The view layer only reads snapshots; all mutation goes through
/// engine commands.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// Name of player one.
    player_one_name: String,
    /// Name of player two.
    player_two_name: String,
    /// Configured number of rounds.
    total_rounds: u8,
    /// Current round number (1-based).
    current_round: u8,
    /// Current board.
    board: Board,
    /// Mark whose turn it is.
    to_move: Mark,
    /// This round's mark assignment.
    assignment: MarkAssignment,
    /// Accumulated scores.
    scores: Scores,
    /// Outcome of the current round, once ended.
    round_outcome: Option<RoundOutcome>,
    /// Outcome of the match, once the final round ends.
    match_outcome: Option<MatchOutcome>,
    /// Current phase.
    phase: MatchPhase,
}

impl MatchSnapshot {
    /// Returns the configured name for the given player.
    pub fn player_name(&self, slot: PlayerSlot) -> &str {
        match slot {
            PlayerSlot::One => &self.player_one_name,
            PlayerSlot::Two => &self.player_two_name,
        }
    }

    /// Returns the name of the player holding the given mark this round.
    pub fn name_of_mark(&self, mark: Mark) -> &str {
        self.player_name(self.assignment.holder_of(mark))
    }

    /// Returns the round winner's name for the round banner, if decisive.
    pub fn round_winner_name(&self) -> Option<&str> {
        match self.round_outcome {
            Some(RoundOutcome::Decisive(slot)) => Some(self.player_name(slot)),
            _ => None,
        }
    }

    /// True if the current round ended in a tie.
    pub fn is_round_tie(&self) -> bool {
        self.round_outcome == Some(RoundOutcome::Tie)
    }

    /// Returns the match winner's name for the winner modal, if decisive.
    pub fn match_winner_name(&self) -> Option<&str> {
        match self.match_outcome {
            Some(MatchOutcome::Decisive(slot)) => Some(self.player_name(slot)),
            _ => None,
        }
    }

    /// True if the match ended with equal scores.
    pub fn is_match_tie(&self) -> bool {
        self.match_outcome == Some(MatchOutcome::Tie)
    }
}
