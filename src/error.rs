//! Error types for match operations.

use thiserror::Error;

use crate::engine::{MatchAction, Phase};

/// Errors that can occur when validating detector output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LandmarkError {
    /// The detector reported the wrong number of points.
    #[error("expected {expected} landmarks, found {found}")]
    WrongPointCount {
        /// Required number of points.
        expected: usize,
        /// Number of points supplied.
        found: usize,
    },
    /// A coordinate is NaN or infinite.
    #[error("landmark {index} has a non-finite coordinate")]
    NonFinite {
        /// Offending landmark index.
        index: usize,
    },
    /// A coordinate lies outside the normalized `[0, 1]` range.
    #[error("landmark {index} is outside the normalized range")]
    OutOfRange {
        /// Offending landmark index.
        index: usize,
    },
}

/// Errors that can occur while driving a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The action is not allowed in the current phase.
    #[error("cannot {action:?} while in {phase:?}")]
    IllegalTransition {
        /// The rejected action.
        action: MatchAction,
        /// The phase the match was in.
        phase: Phase,
    },
    /// The landmark set handed to the engine is malformed.
    #[error("invalid landmarks: {0}")]
    InvalidInput(#[from] LandmarkError),
}

/// Errors that can occur when validating match options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A match needs at least one round.
    #[error("a match needs at least one round")]
    ZeroRounds,
    /// The close threshold must be finite and within `(0, 1]`.
    #[error("close threshold must be finite and within (0, 1]")]
    InvalidThreshold,
    /// A sampling timeout of zero would expire every round immediately.
    #[error("sampling timeout must be non-zero")]
    ZeroSamplingTimeout,
}
