use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use twenty48::{Board, Direction, GameConfig, GameEngine, GameStatus};

fn tile() -> impl Strategy<Value = u32> {
    prop_oneof![3 => Just(0u32), 2 => (1u32..=10).prop_map(|e| 1 << e)]
}

fn board() -> impl Strategy<Value = Board> {
    proptest::array::uniform4(proptest::array::uniform4(tile()))
        .prop_map(|rows| Board::from_rows(rows).unwrap())
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

fn total(b: &Board) -> u32 {
    b.rows().iter().flatten().sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn unmoved_means_unchanged_and_unscored(b in board(), dir in direction()) {
        let mut after = b;
        let res = after.apply_move(dir);
        if !res.moved {
            prop_assert_eq!(res.score_delta, 0);
            prop_assert_eq!(after, b);
        } else {
            prop_assert_ne!(after, b);
        }
    }

    #[test]
    fn moves_preserve_tile_sum(b in board(), dir in direction()) {
        let mut after = b;
        after.apply_move(dir);
        prop_assert_eq!(total(&after), total(&b));
    }

    #[test]
    fn shifted_matches_apply_move(b in board(), dir in direction()) {
        let mut moved = b;
        let res = moved.apply_move(dir);
        prop_assert_eq!(b.shifted(dir), (moved, res));
    }

    #[test]
    fn board_with_empty_cell_is_not_over(b in board()) {
        if b.empty_count() > 0 {
            prop_assert!(!b.is_game_over());
        }
    }

    #[test]
    fn real_move_spawns_exactly_one_tile(b in board(), dir in direction(), seed in any::<u64>()) {
        let mut engine = GameEngine::from_board(GameConfig::default(), b).unwrap();
        prop_assume!(engine.status() == GameStatus::Playing);
        let mut rng = SmallRng::seed_from_u64(seed);

        let mut expected = b;
        let res = expected.apply_move(dir);
        let out = engine.step(dir, &mut rng).unwrap();
        prop_assert_eq!(out.result, res);

        if res.moved {
            let (r, c, v) = out.spawned.unwrap();
            prop_assert!(v == 2 || v == 4);
            prop_assert_eq!(expected.get(r, c), Some(0));
            prop_assert_eq!(engine.board().empty_count() + 1, expected.empty_count());
            prop_assert_eq!(engine.moves(), 1);
            prop_assert_eq!(engine.score(), res.score_delta);
        } else {
            prop_assert_eq!(out.spawned, None);
            prop_assert_eq!(*engine.board(), b);
            prop_assert_eq!(engine.moves(), 0);
        }
    }
}
