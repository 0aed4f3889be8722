//! Opponent move sources.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::moves::Move;

/// Supplies the opponent's move for each round.
pub trait MoveSource {
    /// Draws the next opponent move.
    fn next_move(&mut self) -> Move;
}

impl<F> MoveSource for F
where
    F: FnMut() -> Move,
{
    fn next_move(&mut self) -> Move {
        self()
    }
}

/// Uniformly random moves from any random number generator.
#[derive(Debug, Clone)]
pub struct RandomMoves<R> {
    rng: R,
}

impl<R: Rng> RandomMoves<R> {
    /// Wraps a random number generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomMoves<ChaCha8Rng> {
    /// Creates a reproducible source from a seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> MoveSource for RandomMoves<R> {
    fn next_move(&mut self) -> Move {
        self.rng.random()
    }
}

/// Replays a fixed sequence of moves, wrapping around at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedMoves {
    moves: Vec<Move>,
    next: usize,
}

impl ScriptedMoves {
    /// Creates a script.
    ///
    /// Returns `None` if `moves` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use handrps::{Move, MoveSource, ScriptedMoves};
    ///
    /// let mut script = ScriptedMoves::new([Move::Rock, Move::Paper]).unwrap();
    /// assert_eq!(script.next_move(), Move::Rock);
    /// assert_eq!(script.next_move(), Move::Paper);
    /// assert_eq!(script.next_move(), Move::Rock);
    /// ```
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Option<Self> {
        let moves: Vec<Move> = moves.into_iter().collect();
        if moves.is_empty() {
            return None;
        }
        Some(Self { moves, next: 0 })
    }

    /// Creates a script that always plays `mv`.
    #[must_use]
    pub fn repeat(mv: Move) -> Self {
        Self {
            moves: alloc::vec![mv],
            next: 0,
        }
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self) -> Move {
        let mv = self.moves[self.next];
        self.next = (self.next + 1) % self.moves.len();
        mv
    }
}
