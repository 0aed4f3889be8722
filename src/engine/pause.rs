use crate::clock::Timestamp;
use crate::error::MatchError;
use crate::opponent::MoveSource;

use super::{MatchAction, MatchEngine, Phase};

impl<S: MoveSource> MatchEngine<S> {
    /// Freezes the match.
    ///
    /// While paused, [`step`](Self::step) and [`tick`](Self::tick) leave the
    /// state untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is not in a timed phase or is already
    /// paused.
    pub fn pause(&self, now: Timestamp) -> Result<(), MatchError> {
        let mut state = self.state.lock();
        if !state.phase.is_timed() || state.paused {
            return Err(Self::illegal(MatchAction::Pause, state.phase));
        }

        state.paused = true;
        log::debug!("paused in {:?} at {:?}", state.phase, now.as_duration());
        Ok(())
    }

    /// Continues a paused match at `now`.
    ///
    /// A match paused before its gesture was taken goes back to a fresh
    /// countdown. A match paused during the result display gets a fresh break.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is not paused.
    pub fn resume(&self, now: Timestamp) -> Result<(), MatchError> {
        let mut state = self.state.lock();
        if !state.paused {
            return Err(Self::illegal(MatchAction::Resume, state.phase));
        }

        let phase = match state.phase {
            Phase::RoundBreak => Phase::RoundBreak,
            _ => Phase::Countdown,
        };
        *state = state.entering(phase, now);
        log::debug!("resumed into {phase:?}");
        Ok(())
    }

    /// Returns whether the match is paused.
    pub fn is_paused(&self) -> bool {
        self.state.lock().paused
    }
}
