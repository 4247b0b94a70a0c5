use super::direction::Direction;

/// A coordinate on the board, `(column, row)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub column: i32,
    pub row: i32,
}

impl Position {
    pub fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Move position by delta
    pub fn moved_by(&self, d_column: i32, d_row: i32) -> Self {
        Self {
            column: self.column + d_column,
            row: self.row + d_row,
        }
    }

    /// Move position one step in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (d_column, d_row) = direction.delta();
        self.moved_by(d_column, d_row)
    }
}

impl From<(i32, i32)> for Position {
    fn from((column, row): (i32, i32)) -> Self {
        Self::new(column, row)
    }
}

/// Color tag carried by every cell; display metadata only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellColor {
    /// Snake body
    Black,
    /// Walls
    Blue,
    /// Apples
    Green,
}

/// A single colored cell on the board
///
/// Equality compares location and color; placement logic only ever
/// compares [`Cell::position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    color: CellColor,
}

impl Cell {
    pub fn new(position: Position, color: CellColor) -> Self {
        Self { position, color }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn color(&self) -> CellColor {
        self.color
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// The coordinate one step away from this cell in `direction`
    pub fn next_coordinate(&self, direction: Direction) -> Position {
        self.position.moved_in_direction(direction)
    }
}
