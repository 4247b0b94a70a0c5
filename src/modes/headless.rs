//! Headless mode: play a whole game without a screen
//!
//! Nobody steers, so outside debug mode the snake runs straight until it
//! leaves the board or a wall cuts it down. Mostly useful with `--debug` and
//! a round limit, to watch wall and apple traffic in the logs.

use anyhow::{Result, bail};
use tracing::info;

use crate::game::{GameConfig, GameOverReason, RoundEngine, SeededRandom};
use crate::render::FrameBuffer;

/// Final numbers of a headless game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessSummary {
    pub rounds: u64,
    pub score: u64,
    pub snake_length: usize,
    pub walls: usize,
    pub apples: usize,
    pub reason: Option<GameOverReason>,
}

pub struct HeadlessMode {
    config: GameConfig,
}

impl HeadlessMode {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<HeadlessSummary> {
        self.config.validate()?;
        if self.config.debug && self.config.round_limit().is_none() {
            bail!("a debug game never ends on its own; set a positive round limit");
        }

        let random = SeededRandom::new(
            self.config.board_width,
            self.config.board_height,
            self.config.seed,
        );
        let mut engine = RoundEngine::new(&self.config, FrameBuffer::new(), random);
        let score = engine.run();

        let board = engine.board();
        let summary = HeadlessSummary {
            rounds: board.rounds(),
            score,
            snake_length: board.snake().len(),
            walls: board.walls().len(),
            apples: board.apples().len(),
            reason: engine.over_reason(),
        };

        info!(
            rounds = summary.rounds,
            score = summary.score,
            snake_length = summary.snake_length,
            walls = summary.walls,
            apples = summary.apples,
            reason = ?summary.reason,
            "headless game finished"
        );

        Ok(summary)
    }
}
