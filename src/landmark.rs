//! Hand landmark types and the detector seam.

use crate::error::LandmarkError;

/// Number of landmarks the detector reports per hand.
pub const LANDMARK_COUNT: usize = 21;

/// Thumb IP joint.
pub const THUMB_IP: usize = 3;
/// Thumb tip.
pub const THUMB_TIP: usize = 4;
/// Index finger tip.
pub const INDEX_TIP: usize = 8;
/// Middle finger tip.
pub const MIDDLE_TIP: usize = 12;
/// Ring finger tip.
pub const RING_TIP: usize = 16;
/// Pinky tip.
pub const PINKY_TIP: usize = 20;

/// Fingertips of the four non-thumb fingers, index first.
pub const FINGER_TIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// Returns the lower joint compared against a fingertip.
///
/// # Panics
///
/// Panics if `tip < 2`.
#[must_use]
pub const fn lower_joint(tip: usize) -> usize {
    tip - 2
}

/// A single normalized 2D keypoint.
///
/// Both coordinates are in `[0, 1]`; `y` grows downward as in image space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position (0 is the top of the frame).
    pub y: f32,
}

impl Landmark {
    /// Creates a new landmark.
    ///
    /// Note: This function does not validate the coordinates. Validation
    /// happens when a full set is assembled into [`HandLandmarks`].
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    const fn is_normalized(self) -> bool {
        self.x >= 0.0 && self.x <= 1.0 && self.y >= 0.0 && self.y <= 1.0
    }
}

/// A validated set of 21 landmarks for one detected hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandLandmarks {
    points: [Landmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    /// Validates raw detector output.
    ///
    /// # Errors
    ///
    /// Returns an error if there are not exactly [`LANDMARK_COUNT`] points, or
    /// if any coordinate is not finite or falls outside `[0, 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// use handrps::{HandLandmarks, Landmark, LandmarkError};
    ///
    /// let short = [Landmark::new(0.5, 0.5); 20];
    /// assert_eq!(
    ///     HandLandmarks::new(&short).unwrap_err(),
    ///     LandmarkError::WrongPointCount { expected: 21, found: 20 }
    /// );
    /// ```
    pub fn new(points: &[Landmark]) -> Result<Self, LandmarkError> {
        let points: [Landmark; LANDMARK_COUNT] =
            points
                .try_into()
                .map_err(|_| LandmarkError::WrongPointCount {
                    expected: LANDMARK_COUNT,
                    found: points.len(),
                })?;

        for (index, point) in points.iter().enumerate() {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(LandmarkError::NonFinite { index });
            }
            if !point.is_normalized() {
                return Err(LandmarkError::OutOfRange { index });
            }
        }

        Ok(Self { points })
    }

    /// Returns the landmark at `index` in the detector's numbering.
    ///
    /// # Panics
    ///
    /// Panics if `index >= LANDMARK_COUNT`.
    #[must_use]
    pub const fn point(&self, index: usize) -> Landmark {
        self.points[index]
    }

    /// Returns all landmarks.
    #[must_use]
    pub const fn points(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.points
    }

    /// Returns whether a fingertip sits above its lower joint.
    ///
    /// # Panics
    ///
    /// Panics if `tip < 2` or `tip >= LANDMARK_COUNT`.
    #[must_use]
    pub const fn is_extended(&self, tip: usize) -> bool {
        self.points[tip].y < self.points[lower_joint(tip)].y
    }

    /// Returns whether a fingertip sits below its lower joint.
    ///
    /// # Panics
    ///
    /// Panics if `tip < 2` or `tip >= LANDMARK_COUNT`.
    #[must_use]
    pub const fn is_curled(&self, tip: usize) -> bool {
        self.points[tip].y > self.points[lower_joint(tip)].y
    }
}

impl TryFrom<&[Landmark]> for HandLandmarks {
    type Error = LandmarkError;

    fn try_from(points: &[Landmark]) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

/// A source of hand landmarks, such as a camera-backed detector.
///
/// Driving loops own their detector and pass its output to
/// [`MatchEngine::tick_hand`](crate::MatchEngine::tick_hand). The engine never
/// holds or calls a detector.
pub trait LandmarkDetector {
    /// Input the detector consumes, e.g. a decoded camera frame.
    type Frame;
    /// Failure reported by the detector.
    type Error;

    /// Detects the first hand in `frame`.
    ///
    /// Returns `Ok(None)` when no hand is visible.
    ///
    /// # Errors
    ///
    /// Returns the detector's own error when detection fails.
    fn detect(&mut self, frame: &Self::Frame) -> Result<Option<HandLandmarks>, Self::Error>;
}
