//! Gesture and move types.

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};

/// A hand shape recognized from landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Closed fist.
    Rock,
    /// Open hand.
    Paper,
    /// Index and middle fingers extended.
    Scissors,
}

/// A committed choice used to resolve a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Rock.
    Rock,
    /// Paper.
    Paper,
    /// Scissors.
    Scissors,
}

impl Move {
    /// All moves, in a fixed order.
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// Returns the move this one defeats.
    #[must_use]
    pub const fn beaten(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }

    /// Returns whether this move defeats `other`.
    ///
    /// # Example
    ///
    /// ```
    /// use handrps::Move;
    ///
    /// assert!(Move::Rock.beats(Move::Scissors));
    /// assert!(!Move::Scissors.beats(Move::Rock));
    /// assert!(!Move::Paper.beats(Move::Paper));
    /// ```
    #[must_use]
    pub fn beats(self, other: Self) -> bool {
        self.beaten() == other
    }
}

impl From<Gesture> for Move {
    fn from(gesture: Gesture) -> Self {
        match gesture {
            Gesture::Rock => Self::Rock,
            Gesture::Paper => Self::Paper,
            Gesture::Scissors => Self::Scissors,
        }
    }
}

impl Distribution<Move> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        match rng.random_range(0..3u8) {
            0 => Move::Rock,
            1 => Move::Paper,
            _ => Move::Scissors,
        }
    }
}
