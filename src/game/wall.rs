use super::cell::{Cell, CellColor, Position};
use super::direction::Direction;

/// Number of cells in every wall
pub const WALL_LENGTH: usize = 3;

/// A rigid three-cell obstacle sliding along its own axis
///
/// Cells are ordered tail-first in the direction of travel, so the last
/// cell is the one leading the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    cells: Vec<Cell>,
    direction: Direction,
}

impl Wall {
    /// Build a wall centred on `center`, lying along the axis of `direction`
    pub fn new(center: Position, direction: Direction) -> Self {
        let half = (WALL_LENGTH / 2) as i32;
        let (d_column, d_row) = direction.delta();
        let cells = (-half..=half)
            .map(|i| Cell::new(center.moved_by(d_column * i, d_row * i), CellColor::Blue))
            .collect();

        Self { cells, direction }
    }

    /// Wall cells, tail first
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.cells.iter().any(|cell| cell.position() == pos)
    }

    /// The trailing cell
    pub fn tail(&self) -> Position {
        self.cells[0].position()
    }

    /// The middle cell
    pub fn body(&self) -> Position {
        self.cells[self.cells.len() / 2].position()
    }

    /// Slide the wall one step: the tail cell becomes the new head
    pub fn advance(&mut self) {
        let head = self.cells[self.cells.len() - 1];
        let mut moved = self.cells.remove(0);
        moved.set_position(head.next_coordinate(self.direction));
        self.cells.push(moved);
    }
}
