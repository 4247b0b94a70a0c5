use crate::game::{CellColor, Direction, GameDisplay, Position};

/// A [`GameDisplay`] that keeps the last finished frame in memory
///
/// Cells drawn during a round collect in a pending frame; `end_round`
/// publishes it. Pacing is left to whoever drives the engine, so
/// `end_round` never blocks.
#[derive(Debug, Clone, Default)]
pub struct FrameBuffer {
    pending: Vec<(Position, CellColor)>,
    presented: Vec<(Position, CellColor)>,
    score: u64,
    key: Option<Direction>,
    frames_presented: u64,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a direction for the next round; a later key replaces it
    pub fn push_key(&mut self, direction: Direction) {
        self.key = Some(direction);
    }

    /// Cells of the last finished frame, in draw order
    pub fn cells(&self) -> &[(Position, CellColor)] {
        &self.presented
    }

    /// Color drawn last at `pos` in the finished frame
    pub fn color_at(&self, pos: Position) -> Option<CellColor> {
        self.presented
            .iter()
            .rev()
            .find(|(cell, _)| *cell == pos)
            .map(|(_, color)| *color)
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl GameDisplay for FrameBuffer {
    fn draw_cell(&mut self, column: i32, row: i32, color: CellColor) {
        self.pending.push((Position::new(column, row), color));
    }

    fn show_score(&mut self, score: u64) {
        self.score = score;
    }

    fn get_key_clicked(&mut self) -> Option<Direction> {
        self.key.take()
    }

    fn end_round(&mut self) {
        self.presented = std::mem::take(&mut self.pending);
        self.frames_presented += 1;
    }
}
