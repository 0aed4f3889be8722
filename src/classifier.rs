//! Gesture classification from hand landmarks.

use crate::error::LandmarkError;
use crate::landmark::{
    FINGER_TIPS, HandLandmarks, INDEX_TIP, Landmark, MIDDLE_TIP, PINKY_TIP, RING_TIP, THUMB_IP,
    THUMB_TIP,
};
use crate::moves::Gesture;
use crate::options::{ClassifierKind, Handedness};

/// Default rock detection threshold, in normalized coordinates.
pub const DEFAULT_CLOSE_THRESHOLD: f32 = 0.1;

const fn axis_distance(a: f32, b: f32) -> f32 {
    if a > b { a - b } else { b - a }
}

/// Maps a validated landmark set to an optional gesture.
///
/// The classifier holds only configuration; classification is pure and the
/// same input always yields the same output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureClassifier {
    kind: ClassifierKind,
    close_threshold: f32,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(ClassifierKind::Proximity, DEFAULT_CLOSE_THRESHOLD)
    }
}

impl GestureClassifier {
    /// Creates a classifier.
    #[must_use]
    pub const fn new(kind: ClassifierKind, close_threshold: f32) -> Self {
        Self {
            kind,
            close_threshold,
        }
    }

    /// Returns the classification strategy.
    #[must_use]
    pub const fn kind(&self) -> ClassifierKind {
        self.kind
    }

    /// Classifies a validated hand.
    ///
    /// Returns `None` when the hand matches no gesture.
    #[must_use]
    pub fn classify(&self, hand: &HandLandmarks) -> Option<Gesture> {
        let gesture = match self.kind {
            ClassifierKind::Proximity => self.classify_proximity(hand),
            ClassifierKind::FingerCount(handedness) => classify_finger_count(hand, handedness),
        };
        log::trace!("classified hand as {gesture:?}");
        gesture
    }

    /// Validates raw detector output and classifies it.
    ///
    /// # Errors
    ///
    /// Returns an error if the points do not form a valid [`HandLandmarks`].
    pub fn classify_points(&self, points: &[Landmark]) -> Result<Option<Gesture>, LandmarkError> {
        let hand = HandLandmarks::new(points)?;
        Ok(self.classify(&hand))
    }

    /// Returns whether the thumb tip touches the index fingertip.
    #[must_use]
    pub fn is_rock(&self, hand: &HandLandmarks) -> bool {
        let thumb = hand.point(THUMB_TIP);
        let index = hand.point(INDEX_TIP);
        axis_distance(thumb.x, index.x) < self.close_threshold
            && axis_distance(thumb.y, index.y) < self.close_threshold
    }

    // Order matters: rock is tested first and wins when several predicates hold.
    fn classify_proximity(&self, hand: &HandLandmarks) -> Option<Gesture> {
        if self.is_rock(hand) {
            Some(Gesture::Rock)
        } else if is_paper(hand) {
            Some(Gesture::Paper)
        } else if is_scissors(hand) {
            Some(Gesture::Scissors)
        } else {
            None
        }
    }
}

/// Returns whether all four fingers are extended.
#[must_use]
pub fn is_paper(hand: &HandLandmarks) -> bool {
    FINGER_TIPS.iter().all(|&tip| hand.is_extended(tip))
}

/// Returns whether index and middle are extended while ring and pinky curl.
#[must_use]
pub fn is_scissors(hand: &HandLandmarks) -> bool {
    hand.is_extended(INDEX_TIP)
        && hand.is_extended(MIDDLE_TIP)
        && hand.is_curled(RING_TIP)
        && hand.is_curled(PINKY_TIP)
}

/// Returns which fingers are raised, thumb first.
#[must_use]
pub fn raised_fingers(hand: &HandLandmarks, handedness: Handedness) -> [bool; 5] {
    let tip = hand.point(THUMB_TIP).x;
    let joint = hand.point(THUMB_IP).x;
    let thumb = match handedness {
        Handedness::Right => tip > joint,
        Handedness::Left => tip < joint,
    };

    [
        thumb,
        hand.is_extended(INDEX_TIP),
        hand.is_extended(MIDDLE_TIP),
        hand.is_extended(RING_TIP),
        hand.is_extended(PINKY_TIP),
    ]
}

fn classify_finger_count(hand: &HandLandmarks, handedness: Handedness) -> Option<Gesture> {
    let fingers = raised_fingers(hand, handedness);
    match fingers.iter().filter(|&&up| up).count() {
        0 => Some(Gesture::Rock),
        5 => Some(Gesture::Paper),
        2 if fingers[1] && fingers[2] => Some(Gesture::Scissors),
        _ => None,
    }
}

/// Classifies raw detector output with the default proximity strategy.
///
/// # Errors
///
/// Returns an error if the points do not form a valid [`HandLandmarks`].
///
/// # Example
///
/// ```
/// use handrps::{classify, Landmark, LandmarkError};
///
/// let points = [Landmark::new(0.5, 0.5); 21];
/// // Every tip sits on top of the thumb tip, which reads as a fist.
/// assert_eq!(classify(&points), Ok(Some(handrps::Gesture::Rock)));
///
/// assert!(matches!(classify(&points[..20]), Err(LandmarkError::WrongPointCount { .. })));
/// ```
pub fn classify(points: &[Landmark]) -> Result<Option<Gesture>, LandmarkError> {
    GestureClassifier::default().classify_points(points)
}
