//! Gridclash - a round-based tic-tac-toe match engine.
//!
//! Two players fight a configured number of rounds on a 3x3 grid; the
//! crate tracks scores across rounds, alternates which player moves
//! first, and decides the match winner. It is an embedded library for a
//! visual front end: the view layer issues commands, reads snapshots,
//! and re-renders on events.
//!
//! # Architecture
//!
//! - **Games**: board, marks, and the pure rules deciding a round
//! - **Engine**: the match state machine (rounds, turns, scores)
//! - **Session**: setup/playing lifecycle, events, auto round advance
//!
//! # Example
//!
//! ```no_run
//! use gridclash::{MatchSession, MatchEvent};
//! use tokio::sync::mpsc;
//!
//! # async fn example() -> Result<(), gridclash::MatchConfigError> {
//! let (event_tx, _event_rx) = mpsc::unbounded_channel::<MatchEvent>();
//! let mut session = MatchSession::new(event_tx);
//!
//! let snapshot = session.start_match("Ann", "Bo", 3)?;
//! assert_eq!(*snapshot.current_round(), 1);
//!
//! // The view layer forwards square clicks as board indices.
//! session.place_mark(4);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod assignment;
mod engine;
mod games;
mod match_config;
mod rng;
mod scoreboard;
mod session;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{rules, Board, Mark, Position, RoundStatus, Square};

// Crate-level exports - Match configuration
pub use match_config::{MatchConfig, MatchConfigError, MAX_ROUNDS, MIN_ROUNDS};

// Crate-level exports - Mark assignment
pub use assignment::{assign_marks_for_round, MarkAssignment, PlayerSlot};

// Crate-level exports - Random source
pub use rng::MatchRng;

// Crate-level exports - Scores and outcomes
pub use scoreboard::{decide_match_winner, MatchOutcome, RoundOutcome, Scores};

// Crate-level exports - Match engine
pub use engine::{MatchEngine, MatchPhase, MatchSnapshot};

// Crate-level exports - Session management
pub use session::{MatchEvent, MatchSession, AUTO_ADVANCE_DELAY};
