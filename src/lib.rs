//! A camera-driven rock-paper-scissors match engine with optional `no_std`
//! support.
//!
//! The crate turns hand landmarks from an external detector into gestures and
//! runs a [`MatchEngine`] through countdown, sampling, and result phases over
//! a fixed number of rounds. Cameras, detectors, and rendering stay with the
//! caller: a driving loop feeds landmarks and the current [`Timestamp`] into
//! [`MatchEngine::tick`] and polls [`MatchEngine::snapshot`] to draw.
//!
//! # Example
//!
//! ```
//! use handrps::{MatchEngine, MatchOptions, Move, Phase, ScriptedMoves, Timestamp};
//! use handrps::Gesture;
//!
//! let options = MatchOptions::default().with_max_rounds(1);
//! let engine = MatchEngine::with_source(options, ScriptedMoves::repeat(Move::Scissors)).unwrap();
//!
//! engine.start_match(Timestamp::ZERO).unwrap();
//! assert_eq!(engine.step(Timestamp::from_secs(3), None), Ok(Phase::Sampling));
//! assert_eq!(engine.step(Timestamp::from_secs(3), Some(Gesture::Rock)), Ok(Phase::RoundBreak));
//! assert_eq!(engine.step(Timestamp::from_secs(5), None), Ok(Phase::Finished));
//! assert_eq!(engine.snapshot(Timestamp::from_secs(5)).human_score, 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod classifier;
pub mod clock;
pub mod engine;
pub mod error;
pub mod landmark;
pub mod moves;
pub mod opponent;
pub mod options;
pub mod result;
mod sync;

// Re-export main types
pub use classifier::{DEFAULT_CLOSE_THRESHOLD, GestureClassifier, classify};
pub use clock::Timestamp;
pub use engine::{MatchAction, MatchEngine, MatchSnapshot, Phase};
pub use error::{ConfigError, LandmarkError, MatchError};
pub use landmark::{HandLandmarks, LANDMARK_COUNT, Landmark, LandmarkDetector};
pub use moves::{Gesture, Move};
pub use opponent::{MoveSource, RandomMoves, ScriptedMoves};
pub use options::{ClassifierKind, Handedness, MatchOptions, TimeoutPolicy};
pub use result::{RoundOutcome, RoundRecord};
