//! Match configuration options.

use core::time::Duration;

use crate::error::ConfigError;

/// Which hand the player shows to the camera, as reported by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Handedness {
    /// Right hand.
    #[default]
    Right,
    /// Left hand.
    Left,
}

/// Gesture classification strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ClassifierKind {
    /// Thumb-to-index proximity for rock, fingertip heights for paper and
    /// scissors.
    #[default]
    Proximity,
    /// Count of raised fingers, thumb included.
    FingerCount(Handedness),
}

/// What happens when sampling runs out of time without a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeoutPolicy {
    /// Restart the round countdown.
    #[default]
    Reprompt,
    /// Award the round to the opponent.
    Forfeit,
}

/// Configuration options for a match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use handrps::MatchOptions;
///
/// let options = MatchOptions::default()
///     .with_max_rounds(5)
///     .with_round_break(Duration::from_secs(3));
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOptions {
    /// Number of rounds in a match.
    pub max_rounds: u32,
    /// Length of the countdown before each round.
    pub countdown: Duration,
    /// Length of the result display after each round.
    pub round_break: Duration,
    /// Maximum thumb-to-index distance, per axis, that counts as rock.
    ///
    /// Measured in normalized image coordinates, so it does not scale with
    /// the hand's distance from the camera.
    pub close_threshold: f32,
    /// Gesture classification strategy.
    pub classifier: ClassifierKind,
    /// How long sampling waits for a gesture. `None` waits indefinitely.
    pub sampling_timeout: Option<Duration>,
    /// What happens when `sampling_timeout` expires.
    pub timeout_policy: TimeoutPolicy,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            max_rounds: 3,
            countdown: Duration::from_secs(3),
            round_break: Duration::from_secs(2),
            close_threshold: 0.1,
            classifier: ClassifierKind::Proximity,
            sampling_timeout: None,
            timeout_policy: TimeoutPolicy::Reprompt,
        }
    }
}

impl MatchOptions {
    /// Checks the options for values that cannot produce a playable match.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_rounds` is zero, the close threshold is not a
    /// finite value in `(0, 1]`, or the sampling timeout is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use handrps::{ConfigError, MatchOptions};
    ///
    /// let options = MatchOptions::default().with_max_rounds(0);
    /// assert_eq!(options.validate(), Err(ConfigError::ZeroRounds));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }

        if !self.close_threshold.is_finite()
            || self.close_threshold <= 0.0
            || self.close_threshold > 1.0
        {
            return Err(ConfigError::InvalidThreshold);
        }

        if self.sampling_timeout.is_some_and(|timeout| timeout.is_zero()) {
            return Err(ConfigError::ZeroSamplingTimeout);
        }

        Ok(())
    }

    /// Sets the number of rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use handrps::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_max_rounds(5);
    /// assert_eq!(options.max_rounds, 5);
    /// ```
    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Sets the countdown length.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use handrps::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_countdown(Duration::from_secs(5));
    /// assert_eq!(options.countdown, Duration::from_secs(5));
    /// ```
    #[must_use]
    pub const fn with_countdown(mut self, countdown: Duration) -> Self {
        self.countdown = countdown;
        self
    }

    /// Sets the result display length.
    #[must_use]
    pub const fn with_round_break(mut self, round_break: Duration) -> Self {
        self.round_break = round_break;
        self
    }

    /// Sets the rock detection threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use handrps::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_close_threshold(0.05);
    /// assert_eq!(options.close_threshold, 0.05);
    /// ```
    #[must_use]
    pub const fn with_close_threshold(mut self, threshold: f32) -> Self {
        self.close_threshold = threshold;
        self
    }

    /// Sets the classification strategy.
    ///
    /// # Example
    ///
    /// ```
    /// use handrps::{ClassifierKind, Handedness, MatchOptions};
    ///
    /// let options = MatchOptions::default()
    ///     .with_classifier(ClassifierKind::FingerCount(Handedness::Left));
    /// assert_eq!(options.classifier, ClassifierKind::FingerCount(Handedness::Left));
    /// ```
    #[must_use]
    pub const fn with_classifier(mut self, classifier: ClassifierKind) -> Self {
        self.classifier = classifier;
        self
    }

    /// Sets how long sampling waits for a gesture.
    #[must_use]
    pub const fn with_sampling_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.sampling_timeout = timeout;
        self
    }

    /// Sets what happens when sampling times out.
    #[must_use]
    pub const fn with_timeout_policy(mut self, policy: TimeoutPolicy) -> Self {
        self.timeout_policy = policy;
        self
    }
}
