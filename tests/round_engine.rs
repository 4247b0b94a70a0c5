use wall_snake::game::{
    Board, CellColor, Direction, GameConfig, GameOverReason, Position, RoundEngine,
    ScriptedRandom, Snake, Wall,
};
use wall_snake::render::FrameBuffer;

fn engine_with(
    config: &GameConfig,
    snake: Snake,
    random: ScriptedRandom,
) -> RoundEngine<FrameBuffer, ScriptedRandom> {
    let board = Board::with_snake(config, snake);
    RoundEngine::with_board(config, board, FrameBuffer::new(), random)
}

#[test]
fn snake_advances_one_cell_on_a_quiet_round() {
    let config = GameConfig::new(20, 20);
    let config = GameConfig {
        wall_count: 0,
        apple_count: 0,
        ..config
    };
    let mut engine = RoundEngine::new(&config, FrameBuffer::new(), ScriptedRandom::new());

    let tail_before = engine.board().snake().tail();
    let report = engine.play_round();

    let snake = engine.board().snake();
    assert_eq!(snake.head(), Some(Position::new(10, 11)));
    assert_ne!(snake.tail(), tail_before);
    assert_eq!(snake.len(), 3);
    assert_eq!(engine.board().score(), 0);
    assert_eq!(report.game_over, None);
}

#[test]
fn apple_on_snake_is_not_placed() {
    let config = GameConfig {
        apple_count: 1,
        ..GameConfig::small()
    };
    // (5, 4) is the middle of the starting snake
    let mut engine = RoundEngine::new(
        &config,
        FrameBuffer::new(),
        ScriptedRandom::new().with_apples([(5, 4), (2, 2)]),
    );

    engine.start();
    assert!(engine.board().apples().is_empty());

    engine.play_round();
    assert_eq!(engine.board().apples().len(), 1);
    assert_eq!(engine.board().apples()[0].position(), Position::new(2, 2));
    assert_eq!(engine.display().cells().len(), 4);
}

#[test]
fn eating_at_length_six_scores_two() {
    let config = GameConfig {
        apple_count: 1,
        ..GameConfig::small()
    };
    let snake = Snake::from_positions(
        (1..7).map(|column| Position::new(column, 2)),
        Direction::Right,
    );
    let mut engine = engine_with(&config, snake, ScriptedRandom::new().with_apples([(7, 2)]));

    let report = engine.play_round();
    assert_eq!(report.apples_eaten, 1);
    assert_eq!(engine.board().snake().len(), 6);
    assert_eq!(engine.board().score(), 2);
    assert_eq!(engine.display().score(), 2);

    // growth lands over the next three rounds
    for expected in [7, 8, 9] {
        engine.display_mut().push_key(Direction::Up);
        engine.play_round();
        assert_eq!(engine.board().snake().len(), expected);
    }
}

#[test]
fn wall_cutting_the_body_drops_the_tail() {
    let config = GameConfig {
        debug: false,
        wall_count: 1,
        ..GameConfig::small()
    };
    // snake along row 3 heading right, head ends at (6, 3) after round 1
    let snake = Snake::from_positions(
        (0..6).map(|column| Position::new(column, 3)),
        Direction::Right,
    );
    // vertical wall above row 3, heading down
    let random = ScriptedRandom::new().with_walls([(2, 5, Direction::Down)]);
    let mut engine = engine_with(&config, snake, random);

    engine.start();
    assert_eq!(engine.board().walls().len(), 1);

    // round 1: walls stay put, snake moves right
    let report = engine.play_round();
    assert_eq!(report.cut_at, None);

    // round 2: wall slides down to (2, 5)..(2, 3) and lands on the tail
    let report = engine.play_round();
    assert_eq!(report.cut_at, Some(Position::new(2, 3)));
    let snake = engine.board().snake();
    assert_eq!(snake.tail(), Some(Position::new(3, 3)));
    assert_eq!(snake.head(), Some(Position::new(7, 3)));
    assert_eq!(snake.len(), 5);
    assert!(!engine.is_over());
}

#[test]
fn wall_hitting_the_head_ends_the_game() {
    let config = GameConfig {
        wall_count: 1,
        ..GameConfig::small()
    };
    // wall lying across the column the snake climbs
    let random = ScriptedRandom::new().with_walls([(4, 6, Direction::Right)]);
    let mut engine = RoundEngine::new(&config, FrameBuffer::new(), random);

    engine.start();
    let before = engine.board().snake().len();

    // head moves from (5, 5) into the wall cell (5, 6)
    let report = engine.play_round();
    assert_eq!(report.cut_at, Some(Position::new(5, 6)));
    assert_eq!(report.game_over, Some(GameOverReason::CutByWall));
    assert!(engine.is_over());
    // no truncation once the head is hit
    assert_eq!(engine.board().snake().len(), before);
}

#[test]
fn cut_leaving_one_segment_ends_the_game() {
    let config = GameConfig {
        wall_count: 1,
        ..GameConfig::small()
    };
    // two-cell snake heading right along row 3
    let snake = Snake::from_positions([Position::new(1, 3), Position::new(2, 3)], Direction::Right);
    // wall slides down onto the tail at (3, 3) on round 2
    let random = ScriptedRandom::new().with_walls([(3, 5, Direction::Down)]);
    let mut engine = engine_with(&config, snake, random);

    engine.play_round();
    assert!(!engine.is_over());

    let report = engine.play_round();
    assert_eq!(report.cut_at, Some(Position::new(3, 3)));
    assert_eq!(engine.board().snake().head(), Some(Position::new(4, 3)));
    assert_eq!(engine.board().snake().len(), 1);
    assert_eq!(report.game_over, Some(GameOverReason::CutByWall));
}

#[test]
fn every_wall_on_the_body_cuts_in_turn() {
    let config = GameConfig {
        wall_count: 2,
        ..GameConfig::small()
    };
    // eight cells along row 3 heading right
    let snake = Snake::from_positions(
        (0..8).map(|column| Position::new(column, 3)),
        Direction::Right,
    );
    // first wall placed on round 0, second on round 1
    let random = ScriptedRandom::new()
        .with_walls([(2, 5, Direction::Down), (5, 5, Direction::Down)]);
    let mut engine = engine_with(&config, snake, random);

    let report = engine.play_round();
    assert_eq!(report.cut_at, None);
    assert_eq!(engine.board().walls().len(), 2);

    // round 2: both walls drop onto row 3, at (2, 3) and then (5, 3)
    let report = engine.play_round();
    assert_eq!(report.cut_at, Some(Position::new(5, 3)));
    assert_eq!(report.game_over, None);

    let snake = engine.board().snake();
    assert_eq!(snake.len(), 4);
    assert_eq!(snake.tail(), Some(Position::new(6, 3)));
    assert_eq!(snake.head(), Some(Position::new(9, 3)));
}

#[test]
fn cutting_stops_once_the_snake_is_down_to_one_segment() {
    let config = GameConfig {
        wall_count: 2,
        ..GameConfig::small()
    };
    let snake = Snake::from_positions(
        [Position::new(1, 3), Position::new(2, 3)],
        Direction::Right,
    );
    // first wall lands on the tail at (3, 3), second on the head at (4, 3)
    let random = ScriptedRandom::new()
        .with_walls([(3, 5, Direction::Down), (4, 5, Direction::Down)]);
    let mut engine = engine_with(&config, snake, random);

    engine.play_round();
    assert_eq!(engine.board().walls().len(), 2);
    assert!(!engine.is_over());

    let report = engine.play_round();
    assert_eq!(report.cut_at, Some(Position::new(3, 3)));
    assert_eq!(report.game_over, Some(GameOverReason::CutByWall));
    assert_eq!(engine.board().snake().len(), 1);
    assert_eq!(engine.board().snake().head(), Some(Position::new(4, 3)));
}

#[test]
fn walls_leave_only_once_tail_and_middle_are_off() {
    let config = GameConfig {
        debug: true,
        ..GameConfig::small()
    };
    let board = Board::new(&config);

    let gone = Wall::new(Position::new(-2, 4), Direction::Left);
    let hanging = Wall::new(Position::new(0, 4), Direction::Right);
    assert!(board.should_remove_wall(&gone));
    assert!(!board.should_remove_wall(&hanging));
}

#[test]
fn wall_drawn_over_apple_and_apple_then_crushed() {
    let config = GameConfig {
        debug: true,
        wall_count: 1,
        apple_count: 1,
        ..GameConfig::small()
    };
    // a wall sliding left onto an apple
    let random = ScriptedRandom::new()
        .with_walls([(6, 1, Direction::Left)])
        .with_apples([(4, 1)]);
    let mut engine = RoundEngine::new(&config, FrameBuffer::new(), random);

    engine.start();
    assert_eq!(
        engine.display().color_at(Position::new(4, 1)),
        Some(CellColor::Green)
    );

    engine.play_round();
    let report = engine.play_round();
    assert_eq!(report.apples_crushed, 1);
    assert!(engine.board().apples().is_empty());
    assert_eq!(
        engine.display().color_at(Position::new(4, 1)),
        Some(CellColor::Blue)
    );
}

#[test]
fn round_limit_in_debug_mode() {
    let config = GameConfig {
        debug: true,
        max_rounds: 3,
        ..GameConfig::small()
    };
    let mut engine = RoundEngine::new(&config, FrameBuffer::new(), ScriptedRandom::new());

    let score = engine.run();
    assert_eq!(score, 0);
    assert_eq!(engine.board().rounds(), 3);
    assert_eq!(engine.display().frames_presented(), 4);
    assert_eq!(engine.over_reason(), Some(GameOverReason::RoundLimit));
}

#[test]
fn game_over_is_permanent() {
    let config = GameConfig::small();
    let mut engine = RoundEngine::new(&config, FrameBuffer::new(), ScriptedRandom::new());

    engine.run();
    assert!(engine.is_over());
    let rounds = engine.board().rounds();

    for _ in 0..3 {
        let report = engine.play_round();
        assert_eq!(report.game_over, None);
        assert!(engine.is_over());
    }
    assert_eq!(engine.board().rounds(), rounds);
}
