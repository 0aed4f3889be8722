//! Gesture classification tests.

mod common;

use common::{THUMB_AWAY, hand_points, paper, pointing, rock, scissors, validated};
use handrps::classifier::{is_paper, is_scissors, raised_fingers};
use handrps::{
    ClassifierKind, Gesture, GestureClassifier, HandLandmarks, Handedness, Landmark,
    LandmarkError, Move, RoundOutcome, classify,
};
use proptest::prelude::*;

#[test]
fn proximity_recognizes_each_gesture() {
    assert_eq!(classify(&rock()), Ok(Some(Gesture::Rock)));
    assert_eq!(classify(&paper()), Ok(Some(Gesture::Paper)));
    assert_eq!(classify(&scissors()), Ok(Some(Gesture::Scissors)));
    assert_eq!(classify(&pointing()), Ok(None));
}

#[test]
fn rock_takes_priority_over_paper() {
    // Open hand with the thumb tip right next to the index tip.
    let points = hand_points((0.45, 0.32), [true; 4]);
    let hand = validated(&points);
    let classifier = GestureClassifier::default();

    assert!(classifier.is_rock(&hand));
    assert!(is_paper(&hand));
    assert_eq!(classifier.classify(&hand), Some(Gesture::Rock));
}

#[test]
fn rock_threshold_is_strict_and_configurable() {
    // Thumb level with the curled index tip, 0.12 to its right.
    let points = hand_points((0.52, 0.7), [false; 4]);
    let hand = validated(&points);

    let default = GestureClassifier::default();
    assert!(!default.is_rock(&hand));
    assert_eq!(default.classify(&hand), None);

    let loose = GestureClassifier::new(ClassifierKind::Proximity, 0.2);
    assert_eq!(loose.classify(&hand), Some(Gesture::Rock));
}

#[test]
fn wrong_point_count_is_rejected() {
    let points = paper();

    assert_eq!(
        classify(&points[..20]),
        Err(LandmarkError::WrongPointCount {
            expected: 21,
            found: 20
        })
    );

    let mut long = points;
    long.push(Landmark::new(0.5, 0.5));
    assert_eq!(
        HandLandmarks::new(&long).unwrap_err(),
        LandmarkError::WrongPointCount {
            expected: 21,
            found: 22
        }
    );

    assert!(matches!(
        classify(&[]),
        Err(LandmarkError::WrongPointCount { found: 0, .. })
    ));
}

#[test]
fn malformed_coordinates_are_rejected() {
    let mut points = paper();
    points[7] = Landmark::new(1.5, 0.5);
    assert_eq!(classify(&points), Err(LandmarkError::OutOfRange { index: 7 }));

    let mut points = paper();
    points[0] = Landmark::new(0.5, -0.01);
    assert_eq!(classify(&points), Err(LandmarkError::OutOfRange { index: 0 }));

    let mut points = paper();
    points[12] = Landmark::new(f32::NAN, 0.5);
    assert_eq!(classify(&points), Err(LandmarkError::NonFinite { index: 12 }));
}

#[test]
fn boundary_coordinates_are_accepted() {
    let mut points = paper();
    points[0] = Landmark::new(0.0, 1.0);
    points[1] = Landmark::new(1.0, 0.0);
    assert_eq!(classify(&points), Ok(Some(Gesture::Paper)));
}

#[test]
fn finger_count_strategy() {
    let right = GestureClassifier::new(ClassifierKind::FingerCount(Handedness::Right), 0.1);

    // Thumb tucked left of its joint: not raised on a right hand.
    let fist = validated(&hand_points((0.2, 0.6), [false; 4]));
    assert_eq!(raised_fingers(&fist, Handedness::Right), [false; 5]);
    assert_eq!(right.classify(&fist), Some(Gesture::Rock));

    let open = validated(&hand_points((0.45, 0.6), [true; 4]));
    assert_eq!(raised_fingers(&open, Handedness::Right), [true; 5]);
    assert_eq!(right.classify(&open), Some(Gesture::Paper));

    let victory = validated(&hand_points((0.2, 0.6), [true, true, false, false]));
    assert_eq!(right.classify(&victory), Some(Gesture::Scissors));

    // Thumb plus index and middle is three fingers, not scissors.
    let three = validated(&hand_points((0.45, 0.6), [true, true, false, false]));
    assert_eq!(right.classify(&three), None);

    // The same tucked thumb reads as raised on a left hand.
    let left = GestureClassifier::new(ClassifierKind::FingerCount(Handedness::Left), 0.1);
    assert!(raised_fingers(&fist, Handedness::Left)[0]);
    assert_eq!(left.classify(&fist), None);
}

#[test]
fn gestures_convert_to_moves() {
    assert_eq!(Move::from(Gesture::Rock), Move::Rock);
    assert_eq!(Move::from(Gesture::Paper), Move::Paper);
    assert_eq!(Move::from(Gesture::Scissors), Move::Scissors);
}

#[test]
fn resolution_is_antisymmetric() {
    for human in Move::ALL {
        assert!(!human.beats(human));
        assert_eq!(RoundOutcome::resolve(human, human), RoundOutcome::Tie);

        for opponent in Move::ALL.into_iter().filter(|&m| m != human) {
            assert!(human.beats(opponent) ^ opponent.beats(human));

            let forward = RoundOutcome::resolve(human, opponent);
            let backward = RoundOutcome::resolve(opponent, human);
            assert_ne!(forward, RoundOutcome::Tie);
            assert_eq!(
                forward == RoundOutcome::HumanWins,
                backward == RoundOutcome::OpponentWins
            );
        }
    }

    assert_eq!(
        RoundOutcome::resolve(Move::Paper, Move::Rock),
        RoundOutcome::HumanWins
    );
    assert_eq!(
        RoundOutcome::resolve(Move::Scissors, Move::Paper),
        RoundOutcome::HumanWins
    );
    assert_eq!(
        RoundOutcome::resolve(Move::Scissors, Move::Rock),
        RoundOutcome::OpponentWins
    );
}

#[test]
fn match_winner_from_scores() {
    assert_eq!(RoundOutcome::from_scores(2, 1), RoundOutcome::HumanWins);
    assert_eq!(RoundOutcome::from_scores(0, 1), RoundOutcome::OpponentWins);
    assert_eq!(RoundOutcome::from_scores(0, 0), RoundOutcome::Tie);
}

fn any_points() -> impl Strategy<Value = Vec<Landmark>> {
    prop::collection::vec(
        (0.0f32..=1.0, 0.0f32..=1.0).prop_map(|(x, y)| Landmark::new(x, y)),
        21,
    )
}

proptest! {
    #[test]
    fn classification_is_deterministic(points in any_points()) {
        let first = classify(&points);
        let second = classify(&points);
        prop_assert!(first.is_ok());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn paper_and_scissors_never_overlap(points in any_points()) {
        let hand = validated(&points);
        prop_assert!(!(is_paper(&hand) && is_scissors(&hand)));
    }

    #[test]
    fn classification_follows_priority(points in any_points()) {
        let hand = validated(&points);
        let classifier = GestureClassifier::default();

        let expected = if classifier.is_rock(&hand) {
            Some(Gesture::Rock)
        } else if is_paper(&hand) {
            Some(Gesture::Paper)
        } else if is_scissors(&hand) {
            Some(Gesture::Scissors)
        } else {
            None
        };
        prop_assert_eq!(classifier.classify(&hand), expected);
    }
}

#[test]
fn thumb_far_from_index_is_never_rock() {
    let hand = validated(&hand_points(THUMB_AWAY, [false; 4]));
    assert_eq!(GestureClassifier::default().classify(&hand), None);
}

#[test]
#[should_panic]
fn fingertip_checks_reject_wrist_indices() {
    let hand = validated(&paper());
    let _ = hand.is_extended(1);
}

#[test]
fn hand_converts_from_points() {
    let points = scissors();
    let hand = HandLandmarks::try_from(points.as_slice()).unwrap();
    assert!(is_scissors(&hand));
    assert_eq!(
        HandLandmarks::try_from(&points[..3]),
        Err(LandmarkError::WrongPointCount {
            expected: 21,
            found: 3
        })
    );
}
