//! Match state types.

use core::time::Duration;

use crate::clock::Timestamp;
use crate::moves::Move;
use crate::result::{RoundOutcome, RoundRecord};

/// Match phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for the player to start the match.
    AwaitingStart,
    /// Counting down to the next round.
    Countdown,
    /// Waiting for a recognizable gesture.
    Sampling,
    /// Showing the result of the round just played.
    RoundBreak,
    /// All rounds have been played.
    Finished,
}

impl Phase {
    /// Returns whether the phase runs against a time budget.
    #[must_use]
    pub const fn is_timed(self) -> bool {
        matches!(self, Self::Countdown | Self::Sampling | Self::RoundBreak)
    }
}

/// Operations a caller can request, used to report illegal transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchAction {
    /// Start the match.
    Start,
    /// Advance with an already classified gesture.
    Step,
    /// Advance with raw detector output.
    Tick,
    /// Freeze the timed phases.
    Pause,
    /// Continue after a pause.
    Resume,
}

/// The authoritative match state.
///
/// Transitions never edit a live state in place. Each one builds the complete
/// next value and the engine commits it with a single assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MatchState {
    pub phase: Phase,
    pub phase_entered_at: Timestamp,
    pub rounds_played: u32,
    pub max_rounds: u32,
    pub human_score: u32,
    pub opponent_score: u32,
    pub ties: u32,
    pub last_human_move: Option<Move>,
    pub last_opponent_move: Option<Move>,
    pub last_outcome: Option<RoundOutcome>,
    pub paused: bool,
}

impl MatchState {
    pub const fn new(max_rounds: u32, now: Timestamp) -> Self {
        Self {
            phase: Phase::AwaitingStart,
            phase_entered_at: now,
            rounds_played: 0,
            max_rounds,
            human_score: 0,
            opponent_score: 0,
            ties: 0,
            last_human_move: None,
            last_opponent_move: None,
            last_outcome: None,
            paused: false,
        }
    }

    /// Returns this state moved into `phase` at `now`.
    pub const fn entering(self, phase: Phase, now: Timestamp) -> Self {
        let mut next = self;
        next.phase = phase;
        next.phase_entered_at = now;
        next.paused = false;
        if matches!(phase, Phase::Countdown) {
            next.last_human_move = None;
            next.last_opponent_move = None;
            next.last_outcome = None;
        }
        next
    }

    /// Returns this state with one more completed round, now in the break.
    pub fn completing_round(
        self,
        human: Option<Move>,
        opponent: Option<Move>,
        outcome: RoundOutcome,
        now: Timestamp,
    ) -> (Self, RoundRecord) {
        let mut next = self.entering(Phase::RoundBreak, now);
        next.rounds_played += 1;
        match outcome {
            RoundOutcome::HumanWins => next.human_score += 1,
            RoundOutcome::OpponentWins => next.opponent_score += 1,
            RoundOutcome::Tie => next.ties += 1,
        }
        next.last_human_move = human;
        next.last_opponent_move = opponent;
        next.last_outcome = Some(outcome);

        let record = RoundRecord {
            round: next.rounds_played,
            human,
            opponent,
            outcome,
            decided_at: now,
        };
        (next, record)
    }

    pub const fn winner(&self) -> Option<RoundOutcome> {
        match self.phase {
            Phase::Finished => Some(RoundOutcome::from_scores(
                self.human_score,
                self.opponent_score,
            )),
            _ => None,
        }
    }
}

/// A read-only copy of the match state for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSnapshot {
    /// Current phase.
    pub phase: Phase,
    /// When the current phase was entered.
    pub phase_entered_at: Timestamp,
    /// Time left in the current phase, if it is timed and not paused.
    pub remaining: Option<Duration>,
    /// Rounds completed so far.
    pub rounds_played: u32,
    /// Rounds in the match.
    pub max_rounds: u32,
    /// Rounds won by the human.
    pub human_score: u32,
    /// Rounds won by the opponent.
    pub opponent_score: u32,
    /// Rounds tied.
    pub ties: u32,
    /// The human's move in the round just played.
    pub last_human_move: Option<Move>,
    /// The opponent's move in the round just played.
    pub last_opponent_move: Option<Move>,
    /// Outcome of the round just played.
    pub last_outcome: Option<RoundOutcome>,
    /// Match winner, once the match is finished.
    pub winner: Option<RoundOutcome>,
    /// Whether the match is paused.
    pub paused: bool,
}

impl MatchSnapshot {
    /// Returns the remaining time rounded up to whole seconds, for countdown
    /// displays.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use handrps::clock::Timestamp;
    /// use handrps::{MatchEngine, MatchOptions};
    ///
    /// let engine = MatchEngine::new(MatchOptions::default(), 7).unwrap();
    /// engine.start_match(Timestamp::ZERO).unwrap();
    /// let snapshot = engine.snapshot(Timestamp::from_millis(500));
    /// assert_eq!(snapshot.remaining, Some(Duration::from_millis(2500)));
    /// assert_eq!(snapshot.display_seconds(), Some(3));
    /// ```
    #[must_use]
    pub const fn display_seconds(&self) -> Option<u64> {
        match self.remaining {
            Some(left) if left.subsec_nanos() > 0 => Some(left.as_secs().saturating_add(1)),
            Some(left) => Some(left.as_secs()),
            None => None,
        }
    }
}
