#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::io::Cursor;
    use twenty48::{
        ui::NullRenderer, AiPlayer, Board, CliPlayer, GameConfig, GameEngine, GameHistory,
        GameRunner, GameStatus,
    };

    fn engine(rows: [[u32; 4]; 4]) -> GameEngine {
        GameEngine::from_board(GameConfig::default(), Board::from_rows(rows).unwrap()).unwrap()
    }

    #[test]
    fn test_scripted_session_then_quit() {
        let input = Cursor::new("a\nx\nq\n");
        let player = CliPlayer::new(input, Vec::<u8>::new());
        let mut runner = GameRunner::new(
            Box::new(player),
            Box::new(NullRenderer),
            engine([[2, 2, 4, 0], [0; 4], [0; 4], [0; 4]]),
            SmallRng::seed_from_u64(12345),
        );
        let mut history = GameHistory::new();
        runner.run(&mut history).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.records()[0].score, 4);
        assert_eq!(history.records()[0].moves, 1);
    }

    #[test]
    fn test_restart_then_decline() {
        let input = Cursor::new("r\nn\n");
        let player = CliPlayer::new(input, Vec::<u8>::new());
        let mut runner = GameRunner::new(
            Box::new(player),
            Box::new(NullRenderer),
            engine([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]),
            SmallRng::seed_from_u64(1),
        );
        let mut history = GameHistory::new();
        runner.run(&mut history).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.records()[0].outcome, GameStatus::AwaitingRestart);
    }

    #[test]
    fn test_win_then_keep_going() {
        // decline restart, keep going, one move, then quit
        let input = Cursor::new("n\ny\nd\nq\n");
        let player = CliPlayer::new(input, Vec::<u8>::new());
        let mut runner = GameRunner::new(
            Box::new(player),
            Box::new(NullRenderer),
            engine([[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]]),
            SmallRng::seed_from_u64(8),
        );
        let mut history = GameHistory::new();
        runner.run(&mut history).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.records()[0].moves, 1);
        assert_eq!(history.records()[0].max_tile, 2048);
        assert_eq!(runner.engine().status(), GameStatus::Playing);
    }

    #[test]
    fn test_ai_plays_to_the_end() {
        let mut rng = SmallRng::seed_from_u64(99);
        let engine = GameEngine::new(GameConfig::default(), &mut rng).unwrap();
        let mut runner =
            GameRunner::new(Box::new(AiPlayer::new(2)), Box::new(NullRenderer), engine, rng);
        let mut history = GameHistory::new();
        runner.run(&mut history).unwrap();
        assert_eq!(history.len(), 2);
        for rec in history.records() {
            assert!(matches!(rec.outcome, GameStatus::Won | GameStatus::Lost));
            assert!(rec.moves > 0);
        }
    }
}
