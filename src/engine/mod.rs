//! Match engine and state management.

use alloc::vec::Vec;
use core::time::Duration;

use rand_chacha::ChaCha8Rng;

use crate::classifier::GestureClassifier;
use crate::clock::{self, Timestamp};
use crate::error::{ConfigError, MatchError};
use crate::opponent::{MoveSource, RandomMoves};
use crate::options::MatchOptions;
use crate::result::RoundRecord;
use crate::sync::Mutex;

mod pause;
mod round;
pub mod state;

use state::MatchState;
pub use state::{MatchAction, MatchSnapshot, Phase};

/// A rock-paper-scissors match engine driven by gestures and caller time.
///
/// The engine owns the match state, the in-session round history, and the
/// opponent's move source. Every operation takes `&self` and serializes on an
/// internal lock, so one engine can be shared by reference with whichever
/// front-end is rendering it.
pub struct MatchEngine<S = RandomMoves<ChaCha8Rng>> {
    /// Match options.
    options: MatchOptions,
    /// Classifier built from the options.
    classifier: GestureClassifier,
    /// Current match state.
    state: Mutex<MatchState>,
    /// Completed rounds of the current match.
    history: Mutex<Vec<RoundRecord>>,
    /// Opponent move source.
    opponent: Mutex<S>,
}

impl MatchEngine {
    /// Creates a new engine whose opponent is seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use handrps::{MatchEngine, MatchOptions, Phase};
    ///
    /// let engine = MatchEngine::new(MatchOptions::default(), 42).unwrap();
    /// assert_eq!(engine.phase(), Phase::AwaitingStart);
    /// ```
    pub fn new(options: MatchOptions, seed: u64) -> Result<Self, ConfigError> {
        Self::with_source(options, RandomMoves::seeded(seed))
    }
}

impl<S: MoveSource> MatchEngine<S> {
    /// Creates a new engine with a custom opponent move source.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    pub fn with_source(options: MatchOptions, source: S) -> Result<Self, ConfigError> {
        options.validate()?;

        let classifier = GestureClassifier::new(options.classifier, options.close_threshold);
        let state = MatchState::new(options.max_rounds, Timestamp::ZERO);

        Ok(Self {
            options,
            classifier,
            state: Mutex::new(state),
            history: Mutex::new(Vec::new()),
            opponent: Mutex::new(source),
        })
    }

    /// Returns the match options.
    pub const fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Returns the classifier used by [`tick`](Self::tick).
    pub const fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.state.lock().phase
    }

    /// Returns the completed rounds of the current match, oldest first.
    ///
    /// Never holds more records than the rounds a later
    /// [`snapshot`](Self::snapshot) reports as played.
    pub fn history(&self) -> Vec<RoundRecord> {
        let state = self.state.lock();
        let history = self.history.lock().clone();
        drop(state);
        history
    }

    /// Returns a read-only copy of the match state as seen at `now`.
    pub fn snapshot(&self, now: Timestamp) -> MatchSnapshot {
        let state = *self.state.lock();

        MatchSnapshot {
            phase: state.phase,
            phase_entered_at: state.phase_entered_at,
            remaining: if state.paused {
                None
            } else {
                self.budget(state.phase)
                    .map(|budget| clock::remaining(now, state.phase_entered_at, budget))
            },
            rounds_played: state.rounds_played,
            max_rounds: state.max_rounds,
            human_score: state.human_score,
            opponent_score: state.opponent_score,
            ties: state.ties,
            last_human_move: state.last_human_move,
            last_opponent_move: state.last_opponent_move,
            last_outcome: state.last_outcome,
            winner: state.winner(),
            paused: state.paused,
        }
    }

    /// Discards the current match and starts over in
    /// [`Phase::AwaitingStart`].
    ///
    /// The state and history are rebuilt from scratch rather than reset field
    /// by field. The opponent source is kept, so a seeded opponent continues
    /// its sequence instead of replaying it.
    pub fn restart(&self, now: Timestamp) {
        let mut state = self.state.lock();
        *self.history.lock() = Vec::new();
        *state = MatchState::new(self.options.max_rounds, now);
        log::debug!("match restarted");
    }

    /// Returns the time budget of a timed phase.
    const fn budget(&self, phase: Phase) -> Option<Duration> {
        match phase {
            Phase::Countdown => Some(self.options.countdown),
            Phase::Sampling => self.options.sampling_timeout,
            Phase::RoundBreak => Some(self.options.round_break),
            Phase::AwaitingStart | Phase::Finished => None,
        }
    }

    fn illegal(action: MatchAction, phase: Phase) -> MatchError {
        MatchError::IllegalTransition { action, phase }
    }
}
