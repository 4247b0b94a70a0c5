use tracing::debug;

use super::cell::{Cell, CellColor, Position};
use super::config::GameConfig;
use super::direction::Direction;
use super::display::GameDisplay;
use super::random::RandomSource;
use super::snake::Snake;
use super::wall::Wall;

/// Complete game state: the snake, walls, apples and bookkeeping
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    snake: Snake,
    walls: Vec<Wall>,
    apples: Vec<Cell>,
    rounds: u64,
    score: u64,
    pending_key: Option<Direction>,
    debug: bool,
    is_over: bool,
}

impl Board {
    /// Create a board with the starting snake centred on it
    pub fn new(config: &GameConfig) -> Self {
        let head = Position::new(
            (config.board_width / 2) as i32,
            (config.board_height / 2) as i32,
        );
        Self::with_snake(config, Snake::new(head, config.initial_snake_length))
    }

    /// Create a board around a prepared snake
    pub fn with_snake(config: &GameConfig, snake: Snake) -> Self {
        Self {
            width: config.board_width,
            height: config.board_height,
            snake,
            walls: Vec::new(),
            apples: Vec::new(),
            rounds: 0,
            score: 0,
            pending_key: None,
            debug: config.debug,
            is_over: false,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn apples(&self) -> &[Cell] {
        &self.apples
    }

    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// End the game; there is no way back
    pub fn mark_over(&mut self) {
        self.is_over = true;
    }

    pub fn add_round(&mut self) {
        self.rounds += 1;
    }

    pub fn increase_score(&mut self, value: u64) {
        self.score += value;
    }

    /// Remember the key pressed this round for the next snake move
    pub fn read_key(&mut self, key: Option<Direction>) {
        self.pending_key = key;
    }

    /// Check if a position is within the board
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.column >= 0
            && (pos.column as i64) < self.width as i64
            && pos.row >= 0
            && (pos.row as i64) < self.height as i64
    }

    /// Move walls (on even rounds) and then, outside debug mode, the snake
    pub fn update_moving_objects(&mut self) {
        if self.rounds % 2 == 0 {
            for wall in &mut self.walls {
                wall.advance();
            }
        }
        self.remove_walls();

        if !self.debug {
            self.snake.steer(self.pending_key);
            self.snake.advance();
        }
    }

    /// True if no cell of `wall` overlaps the snake, another wall or an apple
    ///
    /// The snake is ignored in debug mode.
    pub fn is_wall_valid_to_place(&self, wall: &Wall) -> bool {
        wall.cells().iter().all(|cell| {
            let pos = cell.position();
            (self.debug || !self.snake.occupies(pos))
                && !self.walls.iter().any(|existing| existing.occupies(pos))
                && !self.apples.iter().any(|apple| apple.position() == pos)
        })
    }

    /// Try to place one wall from a random candidate
    ///
    /// Only the center has to be on the board. Failure is expected and is
    /// retried by the caller on a later round.
    pub fn add_wall<R: RandomSource + ?Sized>(&mut self, random: &mut R) -> bool {
        let (column, row, direction) = random.random_wall_data();
        let center = Position::new(column, row);
        if !self.is_in_bounds(center) {
            return false;
        }

        let wall = Wall::new(center, direction);
        if !self.is_wall_valid_to_place(&wall) {
            return false;
        }

        debug!(column, row, ?direction, "wall placed");
        self.walls.push(wall);
        true
    }

    /// A wall leaves the board once both its tail and middle cells are off it
    pub fn should_remove_wall(&self, wall: &Wall) -> bool {
        !self.is_in_bounds(wall.tail()) && !self.is_in_bounds(wall.body())
    }

    /// Drop every wall that has left the board
    pub fn remove_walls(&mut self) {
        let before = self.walls.len();
        let walls = std::mem::take(&mut self.walls);
        let kept: Vec<Wall> = walls
            .into_iter()
            .filter(|wall| !self.should_remove_wall(wall))
            .collect();
        self.walls = kept;

        let removed = before - self.walls.len();
        if removed > 0 {
            debug!(removed, "walls left the board");
        }
    }

    /// True if `pos` is free of the snake, walls and apples
    pub fn is_apple_valid_to_place(&self, pos: Position) -> bool {
        !self.snake.occupies(pos)
            && !self.walls.iter().any(|wall| wall.occupies(pos))
            && !self.apples.iter().any(|apple| apple.position() == pos)
    }

    /// Try to place one apple from a random candidate
    pub fn add_apple<R: RandomSource + ?Sized>(&mut self, random: &mut R) -> bool {
        let (column, row) = random.random_apple_data();
        let pos = Position::new(column, row);
        if !self.is_in_bounds(pos) || !self.is_apple_valid_to_place(pos) {
            return false;
        }

        debug!(column, row, "apple placed");
        self.apples.push(Cell::new(pos, CellColor::Green));
        true
    }

    /// Remove the apple at `pos`, returning whether there was one
    pub fn remove_apple(&mut self, pos: Position) -> bool {
        match self.apples.iter().position(|apple| apple.position() == pos) {
            Some(index) => {
                self.apples.remove(index);
                true
            }
            None => false,
        }
    }

    /// Feed the snake one apple's worth of growth
    pub fn grow_snake(&mut self) {
        self.snake.grow();
    }

    /// Cut the snake from the tail up to and including `at`
    pub fn cut_snake_tail(&mut self, at: Position) {
        if !self.snake.cut(at) {
            debug!(column = at.column, row = at.row, "cut point not on the snake");
        }
    }

    /// True if any snake cell is off the board
    pub fn is_snake_out_of_bounds(&self) -> bool {
        self.snake
            .cells()
            .iter()
            .any(|cell| !self.is_in_bounds(cell.position()))
    }

    pub fn is_snake_tangled(&self) -> bool {
        self.snake.is_tangled()
    }

    /// Send every on-board cell to the display
    ///
    /// Apples go first and walls last, so a wall covers an apple it sits on.
    /// The snake is hidden in debug mode.
    pub fn draw<D: GameDisplay + ?Sized>(&self, display: &mut D) {
        self.draw_cells(&self.apples, display);

        if !self.debug {
            self.draw_cells(self.snake.cells(), display);
        }

        for wall in &self.walls {
            self.draw_cells(wall.cells(), display);
        }
    }

    fn draw_cells<D: GameDisplay + ?Sized>(&self, cells: &[Cell], display: &mut D) {
        for cell in cells {
            let pos = cell.position();
            if self.is_in_bounds(pos) {
                display.draw_cell(pos.column, pos.row, cell.color());
            }
        }
    }
}
