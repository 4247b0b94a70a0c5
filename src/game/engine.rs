use tracing::{debug, info};

use super::{
    board::Board, cell::Position, config::GameConfig, display::GameDisplay,
    random::RandomSource,
};

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// A wall hit the head, or left at most one segment
    CutByWall,
    /// The round limit was reached
    RoundLimit,
    /// Part of the snake left the board
    OutOfBounds,
    /// The snake ran into itself
    Tangled,
}

/// What happened during one round
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoundReport {
    /// Round index this report is for
    pub round: u64,
    /// Apples the snake ate
    pub apples_eaten: usize,
    /// Apples destroyed by walls
    pub apples_crushed: usize,
    /// Where a wall cut the snake, if it did
    pub cut_at: Option<Position>,
    /// Set on the round that ended the game
    pub game_over: Option<GameOverReason>,
}

/// Drives a [`Board`] round by round against its display and random source
pub struct RoundEngine<D, R> {
    board: Board,
    display: D,
    random: R,
    wall_target: usize,
    apple_target: usize,
    round_limit: Option<u64>,
    started: bool,
    over_reason: Option<GameOverReason>,
}

impl<D: GameDisplay, R: RandomSource> RoundEngine<D, R> {
    /// Create an engine for a fresh board
    pub fn new(config: &GameConfig, display: D, random: R) -> Self {
        Self::with_board(config, Board::new(config), display, random)
    }

    /// Create an engine around a prepared board
    pub fn with_board(config: &GameConfig, board: Board, display: D, random: R) -> Self {
        Self {
            board,
            display,
            random,
            wall_target: config.wall_count,
            apple_target: config.apple_count,
            round_limit: config.round_limit(),
            started: false,
            over_reason: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn is_over(&self) -> bool {
        self.board.is_over()
    }

    /// Why the game ended, once it has
    pub fn over_reason(&self) -> Option<GameOverReason> {
        self.over_reason
    }

    /// Set up round zero: first placements and the first frame
    ///
    /// Runs once; later calls do nothing.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        self.display.show_score(self.board.score());
        self.spawn();
        self.board.draw(&mut self.display);
        self.display.end_round();
    }

    /// Play until the game is over, returning the final score
    pub fn run(&mut self) -> u64 {
        self.start();
        while !self.is_over() {
            self.play_round();
        }
        self.board.score()
    }

    /// Play one round
    ///
    /// Starts the game first if needed. Does nothing once the game is over.
    pub fn play_round(&mut self) -> RoundReport {
        self.start();

        if self.is_over() {
            return RoundReport {
                round: self.board.rounds(),
                ..Default::default()
            };
        }

        self.board.add_round();
        let mut report = RoundReport {
            round: self.board.rounds(),
            ..Default::default()
        };

        let key = self.display.get_key_clicked();
        self.board.read_key(key);
        self.board.update_moving_objects();

        report.apples_crushed = self.crush_apples();
        if !self.board.is_debug() {
            report.apples_eaten = self.feed_snake();
        }

        self.spawn();

        self.display.show_score(self.board.score());
        self.board.draw(&mut self.display);
        self.display.end_round();

        if !self.board.is_debug() {
            report.cut_at = self.cut_snake();
        }

        self.check_game_over();
        report.game_over = if self.is_over() { self.over_reason } else { None };
        report
    }

    /// Remove every apple sitting under a wall
    fn crush_apples(&mut self) -> usize {
        let crushed: Vec<Position> = self
            .board
            .apples()
            .iter()
            .map(|apple| apple.position())
            .filter(|&pos| self.board.walls().iter().any(|wall| wall.occupies(pos)))
            .collect();

        for &pos in &crushed {
            self.board.remove_apple(pos);
            debug!(column = pos.column, row = pos.row, "apple crushed by wall");
        }
        crushed.len()
    }

    /// Eat every apple under the snake's head
    fn feed_snake(&mut self) -> usize {
        let eaten: Vec<Position> = self
            .board
            .apples()
            .iter()
            .map(|apple| apple.position())
            .filter(|&pos| self.board.snake().is_head_at(pos))
            .collect();

        for &pos in &eaten {
            self.board.remove_apple(pos);
            self.board.grow_snake();
            let gained = (self.board.snake().len() as f64).sqrt().floor() as u64;
            self.board.increase_score(gained);
            debug!(gained, score = self.board.score(), "apple eaten");
        }
        eaten.len()
    }

    /// Top walls and apples up by one placement attempt each
    fn spawn(&mut self) {
        if self.board.walls().len() < self.wall_target {
            self.board.add_wall(&mut self.random);
        }
        if self.board.apples().len() < self.apple_target {
            self.board.add_apple(&mut self.random);
        }
    }

    /// Let walls cut through the snake, returning the last cut position
    fn cut_snake(&mut self) -> Option<Position> {
        let mut last_cut = None;

        for index in 0..self.board.walls().len() {
            let hit = {
                let wall = &self.board.walls()[index];
                self.board.snake().first_collision(wall.cells())
            };
            let Some(hit) = hit else {
                continue;
            };
            last_cut = Some(hit);

            if self.board.snake().is_head_at(hit) {
                debug!(column = hit.column, row = hit.row, "wall hit the head");
                self.end_game(GameOverReason::CutByWall);
                break;
            }

            self.board.cut_snake_tail(hit);
            debug!(
                column = hit.column,
                row = hit.row,
                remaining = self.board.snake().len(),
                "snake cut by wall"
            );
            if self.board.snake().len() <= 1 {
                self.end_game(GameOverReason::CutByWall);
                break;
            }
        }

        last_cut
    }

    fn check_game_over(&mut self) {
        if self.is_over() {
            return;
        }

        if self
            .round_limit
            .is_some_and(|limit| self.board.rounds() >= limit)
        {
            self.end_game(GameOverReason::RoundLimit);
        } else if !self.board.is_debug() && self.board.is_snake_out_of_bounds() {
            self.end_game(GameOverReason::OutOfBounds);
        } else if !self.board.is_debug() && self.board.is_snake_tangled() {
            self.end_game(GameOverReason::Tangled);
        }
    }

    fn end_game(&mut self, reason: GameOverReason) {
        if self.is_over() {
            return;
        }
        self.board.mark_over();
        self.over_reason = Some(reason);
        info!(
            ?reason,
            rounds = self.board.rounds(),
            score = self.board.score(),
            length = self.board.snake().len(),
            "game over"
        );
    }
}
