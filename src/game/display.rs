use super::cell::CellColor;
use super::direction::Direction;

/// Output and input surface the round engine talks to
///
/// Implementations decide how cells reach the screen and how rounds are
/// paced; the engine only relies on the call order within a round.
pub trait GameDisplay {
    /// Paint one cell for the frame in progress
    fn draw_cell(&mut self, column: i32, row: i32, color: CellColor);

    /// Present the current score
    fn show_score(&mut self, score: u64);

    /// The direction requested since the last round, if any
    fn get_key_clicked(&mut self) -> Option<Direction>;

    /// Finish the frame; may block to pace the game
    fn end_round(&mut self);
}
