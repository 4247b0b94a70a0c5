//! Random placement sources for walls and apples
//!
//! The board never picks coordinates itself; it asks a [`RandomSource`] for a
//! candidate and validates it. [`SeededRandom`] is the real thing,
//! [`ScriptedRandom`] replays fixed candidates so games can be reproduced in
//! tests.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::direction::Direction;

/// Coordinate handed out by [`ScriptedRandom`] once a queue runs dry
///
/// Negative, so every board rejects it as out of bounds.
pub const EXHAUSTED: (i32, i32) = (-1, -1);

/// Supplies candidate placements for new walls and apples
pub trait RandomSource {
    /// Candidate wall center and travel direction
    fn random_wall_data(&mut self) -> (i32, i32, Direction);

    /// Candidate apple location
    fn random_apple_data(&mut self) -> (i32, i32);
}

/// Uniform placements inside a `width` x `height` board
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
    width: usize,
    height: usize,
}

impl SeededRandom {
    /// Create a source for the given board size, reproducible when `seed` is set
    pub fn new(width: usize, height: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { rng, width, height }
    }

    fn random_coordinate(&mut self) -> (i32, i32) {
        let column = self.rng.gen_range(0..self.width.max(1)) as i32;
        let row = self.rng.gen_range(0..self.height.max(1)) as i32;
        (column, row)
    }
}

impl RandomSource for SeededRandom {
    fn random_wall_data(&mut self) -> (i32, i32, Direction) {
        let (column, row) = self.random_coordinate();
        let direction = *Direction::ALL
            .choose(&mut self.rng)
            .unwrap_or(&Direction::Up);
        (column, row, direction)
    }

    fn random_apple_data(&mut self) -> (i32, i32) {
        self.random_coordinate()
    }
}

/// Replays fixed placement candidates in order
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    walls: VecDeque<(i32, i32, Direction)>,
    apples: VecDeque<(i32, i32)>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue wall candidates
    pub fn with_walls<I>(mut self, walls: I) -> Self
    where
        I: IntoIterator<Item = (i32, i32, Direction)>,
    {
        self.walls.extend(walls);
        self
    }

    /// Queue apple candidates
    pub fn with_apples<I>(mut self, apples: I) -> Self
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        self.apples.extend(apples);
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn random_wall_data(&mut self) -> (i32, i32, Direction) {
        self.walls
            .pop_front()
            .unwrap_or((EXHAUSTED.0, EXHAUSTED.1, Direction::Up))
    }

    fn random_apple_data(&mut self) -> (i32, i32) {
        self.apples.pop_front().unwrap_or(EXHAUSTED)
    }
}
