//! Wall Snake - snake on a grid with walls sliding across it
//!
//! This library provides:
//! - The round-based simulation core (game module)
//! - TUI rendering and a recording display (render module)
//! - Keyboard mapping (input module)
//! - Session statistics (metrics module)
//! - Terminal and headless execution modes (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
