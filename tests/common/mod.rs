//! Landmark builders shared by the integration tests.

#![allow(dead_code)]

use handrps::{HandLandmarks, LANDMARK_COUNT, Landmark};

pub const TIPS: [usize; 4] = [8, 12, 16, 20];

/// Builds a right hand with each non-thumb finger extended or curled, and the
/// thumb tip placed at `thumb`.
///
/// Lower joints sit at y = 0.5; extended tips at 0.3, curled tips at 0.7. The
/// thumb IP joint sits at x = 0.3.
pub fn hand_points(thumb: (f32, f32), extended: [bool; 4]) -> Vec<Landmark> {
    let mut points = vec![Landmark::new(0.5, 0.5); LANDMARK_COUNT];
    points[3] = Landmark::new(0.3, 0.6);
    points[4] = Landmark::new(thumb.0, thumb.1);

    for (finger, (&tip, &up)) in TIPS.iter().zip(extended.iter()).enumerate() {
        let x = 0.4 + 0.1 * finger as f32;
        points[tip - 2] = Landmark::new(x, 0.5);
        points[tip] = Landmark::new(x, if up { 0.3 } else { 0.7 });
    }

    points
}

/// Thumb tucked away from the index fingertip.
pub const THUMB_AWAY: (f32, f32) = (0.1, 0.9);

pub fn paper() -> Vec<Landmark> {
    hand_points(THUMB_AWAY, [true; 4])
}

pub fn scissors() -> Vec<Landmark> {
    hand_points(THUMB_AWAY, [true, true, false, false])
}

/// A fist with the thumb resting on the curled index fingertip.
pub fn rock() -> Vec<Landmark> {
    hand_points((0.42, 0.68), [false; 4])
}

/// One finger up: matches no gesture.
pub fn pointing() -> Vec<Landmark> {
    hand_points(THUMB_AWAY, [true, false, false, false])
}

pub fn validated(points: &[Landmark]) -> HandLandmarks {
    HandLandmarks::new(points).unwrap()
}
