//! Match session management for a visual front end.
//!
//! Wraps the engine in the setup/playing lifecycle, publishes events the
//! view layer re-renders on, and owns the deferred auto-advance that
//! starts the next round after one ends.

use crate::engine::{MatchEngine, MatchPhase, MatchSnapshot};
use crate::games::tictactoe::{Mark, Position};
use crate::match_config::{MatchConfig, MatchConfigError};
use crate::rng::MatchRng;
use crate::scoreboard::{MatchOutcome, RoundOutcome};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};
use tracing::{debug, info, instrument, warn};

/// Delay between a round ending and the automatic advance to the next.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(2000);

/// Messages sent from the session to the view layer.
///
/// The view layer issues commands and receives snapshots synchronously;
/// events exist so it also learns about transitions it did not initiate,
/// such as the timer-driven round advance.
#[derive(Debug, Clone)]
pub enum MatchEvent {
    /// A match was configured and round 1 started.
    MatchStarted,
    /// A mark was placed on the board.
    MarkPlaced {
        /// Where the mark was placed.
        position: Position,
        /// Which mark was placed.
        mark: Mark,
    },
    /// The current round ended; the auto-advance is armed.
    RoundEnded {
        /// How the round ended.
        outcome: RoundOutcome,
    },
    /// A new round started.
    RoundStarted {
        /// The new round number (1-based).
        round: u8,
    },
    /// The final round was advanced past and the match outcome is final.
    MatchCompleted {
        /// How the match ended.
        outcome: MatchOutcome,
    },
    /// The match was discarded; back to setup.
    MatchReset,
}

/// Drives a match on behalf of a visual front end.
///
/// Holds no engine while on the setup screen and one engine while
/// playing. All commands run to completion under the session lock; the
/// only asynchronous element is the auto-advance task, which is
/// cancelled whenever an ended round is left by any other path.
///
/// Must be used inside a Tokio runtime; the auto-advance timer spawns
/// onto it.
#[derive(Debug)]
pub struct MatchSession {
    engine: Arc<Mutex<Option<MatchEngine>>>,
    event_tx: mpsc::UnboundedSender<MatchEvent>,
    auto_advance: Option<JoinHandle<()>>,
}

impl MatchSession {
    /// Creates a session in the setup state, publishing events on `event_tx`.
    #[instrument(skip(event_tx))]
    pub fn new(event_tx: mpsc::UnboundedSender<MatchEvent>) -> Self {
        info!("Creating match session");
        Self {
            engine: Arc::new(Mutex::new(None)),
            event_tx,
            auto_advance: None,
        }
    }

    /// Starts a match, replacing any match already in progress.
    ///
    /// # Errors
    ///
    /// Returns [`MatchConfigError`] if a name is blank or the round count
    /// is outside 1-10; the previous state is untouched in that case.
    #[instrument(skip(self))]
    pub fn start_match(
        &mut self,
        player_one_name: &str,
        player_two_name: &str,
        total_rounds: u8,
    ) -> Result<MatchSnapshot, MatchConfigError> {
        self.start_match_with_rng(
            player_one_name,
            player_two_name,
            total_rounds,
            MatchRng::from_entropy(),
        )
    }

    /// Starts a match with an injected random source.
    ///
    /// Lets tests force either branch of the final-round coin flip.
    #[instrument(skip(self, rng))]
    pub fn start_match_with_rng(
        &mut self,
        player_one_name: &str,
        player_two_name: &str,
        total_rounds: u8,
        rng: MatchRng,
    ) -> Result<MatchSnapshot, MatchConfigError> {
        let config = MatchConfig::new(player_one_name, player_two_name, total_rounds)?;
        self.cancel_auto_advance();
        let engine = MatchEngine::with_rng(config, rng);
        let snapshot = engine.snapshot();
        *self.engine.lock().unwrap() = Some(engine);
        self.emit(MatchEvent::MatchStarted);
        Ok(snapshot)
    }

    /// Places the current mark at `index` (0-8, row-major).
    ///
    /// Returns the post-command snapshot, unchanged when the engine
    /// rejects the placement, or `None` on the setup screen. Ending a
    /// round arms the auto-advance timer.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, index: usize) -> Option<MatchSnapshot> {
        let (snapshot, placed, round_ended) = {
            let mut guard = self.engine.lock().unwrap();
            let engine = guard.as_mut()?;
            let moves_before = engine.history().len();
            let mark = engine.to_move();
            engine.place_mark(index);
            let placed = if engine.history().len() > moves_before {
                engine.history().last().map(|&position| (position, mark))
            } else {
                None
            };
            let round_ended = placed.is_some() && engine.phase() == MatchPhase::RoundEnded;
            (engine.snapshot(), placed, round_ended)
        };

        if let Some((position, mark)) = placed {
            self.emit(MatchEvent::MarkPlaced { position, mark });
        }
        if round_ended {
            if let Some(outcome) = *snapshot.round_outcome() {
                self.emit(MatchEvent::RoundEnded { outcome });
            }
            self.arm_auto_advance();
        }
        Some(snapshot)
    }

    /// Advances past an ended round without waiting for the timer.
    ///
    /// Normally the timer drives this; exposed for tests and for
    /// skip-delay controls. Returns `None` on the setup screen.
    #[instrument(skip(self))]
    pub fn advance_round(&mut self) -> Option<MatchSnapshot> {
        self.cancel_auto_advance();
        let (snapshot, event) = {
            let mut guard = self.engine.lock().unwrap();
            let engine = guard.as_mut()?;
            let was_ended = engine.phase() == MatchPhase::RoundEnded;
            engine.advance_round();
            let event = if was_ended { advance_event(engine) } else { None };
            (engine.snapshot(), event)
        };
        if let Some(event) = event {
            self.emit(event);
        }
        Some(snapshot)
    }

    /// Replays the current round: clears the board and recomputes its
    /// mark assignment, keeping scores and the round counter.
    ///
    /// Cancels a pending auto-advance so a stale timer cannot act on the
    /// replayed round. Returns `None` on the setup screen.
    #[instrument(skip(self))]
    pub fn reset_current_round(&mut self) -> Option<MatchSnapshot> {
        self.cancel_auto_advance();
        let (snapshot, reset) = {
            let mut guard = self.engine.lock().unwrap();
            let engine = guard.as_mut()?;
            let was_complete = engine.phase() == MatchPhase::MatchComplete;
            engine.reset_current_round();
            (engine.snapshot(), !was_complete)
        };
        if reset {
            self.emit(MatchEvent::RoundStarted {
                round: *snapshot.current_round(),
            });
        }
        Some(snapshot)
    }

    /// Discards the match and returns to the setup state.
    #[instrument(skip(self))]
    pub fn reset_match(&mut self) {
        self.cancel_auto_advance();
        let had_match = self.engine.lock().unwrap().take().is_some();
        if had_match {
            info!("Match discarded, back to setup");
            self.emit(MatchEvent::MatchReset);
        } else {
            debug!("Ignoring match reset on setup screen");
        }
    }

    /// Returns a snapshot of the current match, or `None` on the setup
    /// screen.
    pub fn snapshot(&self) -> Option<MatchSnapshot> {
        self.engine.lock().unwrap().as_ref().map(MatchEngine::snapshot)
    }

    /// Arms the fire-once auto-advance for the round that just ended.
    fn arm_auto_advance(&mut self) {
        self.cancel_auto_advance();
        debug!(delay = ?AUTO_ADVANCE_DELAY, "Arming auto-advance");
        let engine = Arc::clone(&self.engine);
        let event_tx = self.event_tx.clone();
        self.auto_advance = Some(tokio::spawn(async move {
            sleep(AUTO_ADVANCE_DELAY).await;
            let event = {
                let mut guard = engine.lock().unwrap();
                let Some(engine) = guard.as_mut() else {
                    return;
                };
                // Lost-race guard: if the round was already left by
                // another path, the timer has nothing left to do.
                if engine.phase() != MatchPhase::RoundEnded {
                    debug!(phase = ?engine.phase(), "Auto-advance found round already left");
                    return;
                }
                engine.advance_round();
                advance_event(engine)
            };
            if let Some(event) = event {
                if event_tx.send(event).is_err() {
                    warn!("Event receiver dropped, auto-advance event lost");
                }
            }
        }));
    }

    /// Cancels a pending auto-advance, if any.
    fn cancel_auto_advance(&mut self) {
        if let Some(handle) = self.auto_advance.take() {
            handle.abort();
            debug!("Cancelled pending auto-advance");
        }
    }

    fn emit(&self, event: MatchEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("Event receiver dropped");
        }
    }
}

impl Drop for MatchSession {
    fn drop(&mut self) {
        self.cancel_auto_advance();
    }
}

/// Event describing what an `advance_round` transition produced.
fn advance_event(engine: &MatchEngine) -> Option<MatchEvent> {
    match engine.phase() {
        MatchPhase::MatchComplete => engine
            .match_outcome()
            .map(|outcome| MatchEvent::MatchCompleted { outcome }),
        MatchPhase::RoundInProgress => Some(MatchEvent::RoundStarted {
            round: engine.current_round(),
        }),
        MatchPhase::RoundEnded => None,
    }
}
