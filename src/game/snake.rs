use std::collections::HashSet;

use super::cell::{Cell, CellColor, Position};
use super::direction::Direction;

/// Segments added per apple eaten, one per following move
pub const GROWTH_PER_APPLE: usize = 3;

/// The snake in the game
///
/// Body cells are stored tail-first, head-last. A location set mirrors the
/// body for O(1) membership tests; every mutation goes through a method that
/// updates both, so the only way for the two to disagree in size is the
/// snake running over itself (see [`Snake::is_tangled`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    cells: Vec<Cell>,
    locations: HashSet<Position>,
    direction: Direction,
    pending_growth: usize,
}

impl Snake {
    /// Create a snake of `length` cells with its head at `head`, body trailing
    /// below it, travelling `Up`
    pub fn new(head: Position, length: usize) -> Self {
        let body = (0..length as i32)
            .rev()
            .map(|i| head.moved_by(0, -i));
        Self::from_positions(body, Direction::Up)
    }

    /// Create a snake from explicit positions, tail-first
    ///
    /// Repeated positions are kept as-is, which yields a tangled snake.
    pub fn from_positions<I>(positions: I, direction: Direction) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let cells: Vec<Cell> = positions
            .into_iter()
            .map(|pos| Cell::new(pos, CellColor::Black))
            .collect();
        let locations = cells.iter().map(Cell::position).collect();

        Self {
            cells,
            locations,
            direction,
            pending_growth: 0,
        }
    }

    /// Body cells, tail first
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.locations.contains(&pos)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of upcoming moves that will keep the tail in place
    pub fn pending_growth(&self) -> usize {
        self.pending_growth
    }

    /// Get the head position, `None` once the snake has been cut away
    pub fn head(&self) -> Option<Position> {
        self.cells.last().map(Cell::position)
    }

    /// Get the tail position
    pub fn tail(&self) -> Option<Position> {
        self.cells.first().map(Cell::position)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Change direction, unless the turn would put the head onto the neck
    ///
    /// `None` and the current direction are ignored. A single-cell snake
    /// can turn anywhere.
    pub fn steer(&mut self, requested: Option<Direction>) {
        let Some(requested) = requested else {
            return;
        };
        if requested == self.direction {
            return;
        }

        if self.cells.len() > 1 {
            let head = self.cells[self.cells.len() - 1];
            let neck = self.cells[self.cells.len() - 2].position();
            if head.next_coordinate(requested) == neck {
                return;
            }
        }

        self.direction = requested;
    }

    /// Move the snake one step in its current direction
    ///
    /// Pending growth keeps the tail in place for this move. Running into
    /// the body is not checked here.
    pub fn advance(&mut self) {
        let Some(head) = self.cells.last() else {
            return;
        };
        let new_head = head.next_coordinate(self.direction);

        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            let tail = self.cells.remove(0);
            self.locations.remove(&tail.position());
        }

        self.cells.push(Cell::new(new_head, CellColor::Black));
        self.locations.insert(new_head);
    }

    /// Schedule growth for one eaten apple
    pub fn grow(&mut self) {
        self.pending_growth += GROWTH_PER_APPLE;
    }

    /// Drop every cell from the tail up to and including `at`
    ///
    /// Returns false, leaving the snake untouched, when no cell is at `at`.
    pub fn cut(&mut self, at: Position) -> bool {
        let Some(index) = self.cells.iter().position(|cell| cell.position() == at) else {
            return false;
        };

        self.cells.drain(..=index);
        self.locations = self.cells.iter().map(Cell::position).collect();
        true
    }

    /// True when the snake has run over itself
    pub fn is_tangled(&self) -> bool {
        self.cells.len() > self.locations.len()
    }

    pub fn is_head_at(&self, pos: Position) -> bool {
        self.head() == Some(pos)
    }

    /// First cell of `others`, in their order, that the snake occupies
    pub fn first_collision(&self, others: &[Cell]) -> Option<Position> {
        others
            .iter()
            .map(Cell::position)
            .find(|pos| self.locations.contains(pos))
    }
}
