use crate::clock::{self, Timestamp};
use crate::error::MatchError;
use crate::landmark::{HandLandmarks, Landmark};
use crate::moves::{Gesture, Move};
use crate::opponent::MoveSource;
use crate::options::TimeoutPolicy;
use crate::result::{RoundOutcome, RoundRecord};

use super::state::MatchState;
use super::{MatchAction, MatchEngine, Phase};

impl<S: MoveSource> MatchEngine<S> {
    /// Starts the match, entering the first countdown at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the match has already started.
    pub fn start_match(&self, now: Timestamp) -> Result<(), MatchError> {
        let mut state = self.state.lock();
        if state.phase != Phase::AwaitingStart {
            return Err(Self::illegal(MatchAction::Start, state.phase));
        }

        *state = state.entering(Phase::Countdown, now);
        log::debug!("match started, {} rounds", state.max_rounds);
        Ok(())
    }

    /// Advances the match with an already classified gesture.
    ///
    /// At most one phase transition happens per call. The gesture only
    /// matters while sampling. Before the match starts, and while paused,
    /// this changes nothing.
    ///
    /// Returns the phase after the step.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is finished. The state is left
    /// unchanged.
    pub fn step(&self, now: Timestamp, gesture: Option<Gesture>) -> Result<Phase, MatchError> {
        self.advance(now, gesture, MatchAction::Step)
    }

    /// Validates and classifies raw detector output, then advances the match.
    ///
    /// Pass `None` when the detector found no hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is finished or the landmarks are
    /// malformed. In both cases the state is left unchanged.
    pub fn tick(
        &self,
        now: Timestamp,
        landmarks: Option<&[Landmark]>,
    ) -> Result<Phase, MatchError> {
        self.ensure_running(MatchAction::Tick)?;

        let hand = landmarks
            .map(HandLandmarks::try_from)
            .transpose()
            .inspect_err(|err| log::warn!("rejected landmarks: {err}"))?;

        self.tick_hand(now, hand.as_ref())
    }

    /// Classifies an already validated hand, then advances the match.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is finished.
    pub fn tick_hand(
        &self,
        now: Timestamp,
        hand: Option<&HandLandmarks>,
    ) -> Result<Phase, MatchError> {
        let gesture = hand.and_then(|hand| self.classifier.classify(hand));
        self.advance(now, gesture, MatchAction::Tick)
    }

    fn ensure_running(&self, action: MatchAction) -> Result<(), MatchError> {
        let phase = self.state.lock().phase;
        if phase == Phase::Finished {
            return Err(Self::illegal(action, phase));
        }
        Ok(())
    }

    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    fn advance(
        &self,
        now: Timestamp,
        gesture: Option<Gesture>,
        action: MatchAction,
    ) -> Result<Phase, MatchError> {
        let mut state = self.state.lock();
        if state.phase == Phase::Finished {
            return Err(Self::illegal(action, state.phase));
        }
        if state.paused {
            return Ok(state.phase);
        }

        let (next, record) = match state.phase {
            Phase::AwaitingStart | Phase::Finished => return Ok(state.phase),
            Phase::Countdown => {
                if !clock::is_expired(now, state.phase_entered_at, self.options.countdown) {
                    return Ok(state.phase);
                }
                (state.entering(Phase::Sampling, now), None)
            }
            Phase::Sampling => match gesture {
                Some(gesture) => {
                    let (next, record) = self.play_round(*state, gesture.into(), now);
                    (next, Some(record))
                }
                None => match self.sampling_timeout(*state, now) {
                    Some((next, record)) => (next, record),
                    None => return Ok(state.phase),
                },
            },
            Phase::RoundBreak => {
                if !clock::is_expired(now, state.phase_entered_at, self.options.round_break) {
                    return Ok(state.phase);
                }
                if state.rounds_played >= state.max_rounds {
                    (state.entering(Phase::Finished, now), None)
                } else {
                    (state.entering(Phase::Countdown, now), None)
                }
            }
        };

        log::debug!("{:?} -> {:?}", state.phase, next.phase);
        if next.phase == Phase::Finished {
            log::info!(
                "match finished {}-{} ({} ties)",
                next.human_score,
                next.opponent_score,
                next.ties
            );
        }
        *state = next;
        if let Some(record) = record {
            self.history.lock().push(record);
        }

        Ok(state.phase)
    }

    fn play_round(
        &self,
        state: MatchState,
        human: Move,
        now: Timestamp,
    ) -> (MatchState, RoundRecord) {
        let opponent = self.opponent.lock().next_move();
        let outcome = RoundOutcome::resolve(human, opponent);
        log::info!(
            "round {}: {human:?} vs {opponent:?}, {outcome:?}",
            state.rounds_played + 1
        );
        state.completing_round(Some(human), Some(opponent), outcome, now)
    }

    /// Returns the transition taken when sampling has run out of time.
    fn sampling_timeout(
        &self,
        state: MatchState,
        now: Timestamp,
    ) -> Option<(MatchState, Option<RoundRecord>)> {
        let timeout = self.options.sampling_timeout?;
        if !clock::is_expired(now, state.phase_entered_at, timeout) {
            return None;
        }

        match self.options.timeout_policy {
            TimeoutPolicy::Reprompt => {
                log::debug!("no gesture in time, restarting countdown");
                Some((state.entering(Phase::Countdown, now), None))
            }
            TimeoutPolicy::Forfeit => {
                log::info!("round {} forfeited", state.rounds_played + 1);
                let (next, record) =
                    state.completing_round(None, None, RoundOutcome::OpponentWins, now);
                Some((next, Some(record)))
            }
        }
    }
}
