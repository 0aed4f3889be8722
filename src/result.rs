//! Round outcomes and the per-round record.

use crate::clock::Timestamp;
use crate::moves::Move;

/// Result of a single round, or of a whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// The human player won.
    HumanWins,
    /// The opponent won.
    OpponentWins,
    /// Neither side won.
    Tie,
}

impl RoundOutcome {
    /// Resolves a round from both moves.
    ///
    /// # Example
    ///
    /// ```
    /// use handrps::{Move, RoundOutcome};
    ///
    /// assert_eq!(RoundOutcome::resolve(Move::Rock, Move::Scissors), RoundOutcome::HumanWins);
    /// assert_eq!(RoundOutcome::resolve(Move::Rock, Move::Paper), RoundOutcome::OpponentWins);
    /// assert_eq!(RoundOutcome::resolve(Move::Paper, Move::Paper), RoundOutcome::Tie);
    /// ```
    #[must_use]
    pub fn resolve(human: Move, opponent: Move) -> Self {
        if human == opponent {
            Self::Tie
        } else if human.beats(opponent) {
            Self::HumanWins
        } else {
            Self::OpponentWins
        }
    }

    /// Decides a match winner from the final scores.
    #[must_use]
    pub const fn from_scores(human_score: u32, opponent_score: u32) -> Self {
        if human_score > opponent_score {
            Self::HumanWins
        } else if human_score < opponent_score {
            Self::OpponentWins
        } else {
            Self::Tie
        }
    }
}

/// A completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRecord {
    /// The 1-based round number.
    pub round: u32,
    /// The human's move (`None` if the round was forfeited).
    pub human: Option<Move>,
    /// The opponent's move (`None` if the round was forfeited).
    pub opponent: Option<Move>,
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// When the round was decided.
    pub decided_at: Timestamp,
}
