//! Core simulation for wall snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Screens and randomness reach it only through the [`GameDisplay`] and
//! [`RandomSource`] traits.

pub mod board;
pub mod cell;
pub mod config;
pub mod direction;
pub mod display;
pub mod engine;
pub mod random;
pub mod snake;
pub mod wall;

// Re-export commonly used types
pub use board::Board;
pub use cell::{Cell, CellColor, Position};
pub use config::{ConfigError, GameConfig};
pub use direction::Direction;
pub use display::GameDisplay;
pub use engine::{GameOverReason, RoundEngine, RoundReport};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use snake::{Snake, GROWTH_PER_APPLE};
pub use wall::{Wall, WALL_LENGTH};
