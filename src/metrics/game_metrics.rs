use std::time::{Duration, Instant};

/// Session statistics shown around the board in the terminal mode
///
/// The game clock runs from `start_game` until `finish_game`; a finished
/// game keeps showing the time it lasted until the next one starts.
#[derive(Debug, Clone)]
pub struct GameMetrics {
    running_since: Option<Instant>,
    game_time: Duration,
    final_scores: Vec<u64>,
}

impl GameMetrics {
    /// Start a session with the first game's clock already running
    pub fn new() -> Self {
        Self {
            running_since: Some(Instant::now()),
            game_time: Duration::ZERO,
            final_scores: Vec::new(),
        }
    }

    /// Refresh the displayed game time
    pub fn tick(&mut self) {
        if let Some(since) = self.running_since {
            self.game_time = since.elapsed();
        }
    }

    pub fn start_game(&mut self) {
        self.running_since = Some(Instant::now());
        self.game_time = Duration::ZERO;
    }

    /// Stop the clock and record the final score
    pub fn finish_game(&mut self, score: u64) {
        self.tick();
        self.running_since = None;
        self.final_scores.push(score);
    }

    pub fn games_played(&self) -> usize {
        self.final_scores.len()
    }

    pub fn high_score(&self) -> u64 {
        self.final_scores.iter().copied().max().unwrap_or(0)
    }

    /// Mean score over finished games, zero before the first one ends
    pub fn average_score(&self) -> f64 {
        if self.final_scores.is_empty() {
            return 0.0;
        }
        self.final_scores.iter().sum::<u64>() as f64 / self.final_scores.len() as f64
    }

    /// Game time as `mm:ss`
    pub fn clock(&self) -> String {
        let secs = self.game_time.as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_format() {
        let mut metrics = GameMetrics::new();
        metrics.game_time = Duration::from_secs(125);
        assert_eq!(metrics.clock(), "02:05");

        metrics.game_time = Duration::from_secs(3661);
        assert_eq!(metrics.clock(), "61:01");
    }

    #[test]
    fn test_scores_across_games() {
        let mut metrics = GameMetrics::new();
        assert_eq!(metrics.high_score(), 0);
        assert_eq!(metrics.average_score(), 0.0);

        metrics.finish_game(10);
        metrics.start_game();
        metrics.finish_game(4);
        assert_eq!(metrics.games_played(), 2);
        assert_eq!(metrics.high_score(), 10);
        assert_eq!(metrics.average_score(), 7.0);
    }

    #[test]
    fn test_clock_stops_at_game_over() {
        let mut metrics = GameMetrics::new();
        metrics.finish_game(0);
        metrics.game_time = Duration::from_secs(42);

        metrics.tick();
        assert_eq!(metrics.clock(), "00:42");

        metrics.start_game();
        assert_eq!(metrics.clock(), "00:00");
    }
}
