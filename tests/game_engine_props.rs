use proptest::prelude::*;
use tictactoe::{
    evaluate, GameEngine, GameStatus, MoveError, MoveOutcome, Outcome, RecordedEvents, Symbol,
    Verdict, BOARD_CELLS, PLAYER_ONE,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every step keeps the engine consistent with a fresh evaluation of its board.
    #[test]
    fn engine_matches_board_evaluation(moves in prop::collection::vec(0..12usize, 0..30)) {
        let mut engine = GameEngine::with_events(RecordedEvents::new());

        for index in moves {
            let before = engine.snapshot();
            let renders_before = engine.events().render_count();
            let mover = engine.current_player();

            match engine.make_move(index) {
                Ok(outcome) => {
                    prop_assert_eq!(engine.board().slots()[index], Some(mover.symbol()));
                    prop_assert_eq!(engine.events().render_count(), renders_before + 1);
                    match outcome {
                        MoveOutcome::Continue(next) => {
                            prop_assert_ne!(next, mover);
                            prop_assert_eq!(engine.current_player(), next);
                            prop_assert_eq!(evaluate(engine.board()), None);
                        }
                        MoveOutcome::Won(p) => {
                            prop_assert_eq!(p, mover);
                            prop_assert_eq!(engine.current_player(), mover);
                            prop_assert_eq!(evaluate(engine.board()), Some(Verdict::Win(p.symbol())));
                        }
                        MoveOutcome::Tie => {
                            prop_assert_eq!(evaluate(engine.board()), Some(Verdict::Tie));
                        }
                    }
                }
                Err(err) => {
                    prop_assert_eq!(engine.snapshot(), before);
                    prop_assert_eq!(engine.events().render_count(), renders_before);
                    match err {
                        MoveError::InvalidIndex { index: i } => {
                            prop_assert!(i >= BOARD_CELLS)
                        }
                        MoveError::GameAlreadyOver => {
                            prop_assert!(engine.is_over())
                        }
                        MoveError::CellOccupied { index: i } => {
                            prop_assert!(engine.board().slots()[i].is_some())
                        }
                    }
                }
            }

            prop_assert_eq!(engine.is_over(), evaluate(engine.board()).is_some());
            let xs = engine.board().count(Symbol::X);
            let os = engine.board().count(Symbol::O);
            prop_assert!(xs == os || xs == os + 1);
        }
    }

    /// Restart returns any reachable state to the initial one.
    #[test]
    fn restart_is_total(moves in prop::collection::vec(0..9usize, 0..20)) {
        let initial = GameEngine::new().snapshot();
        let mut engine = GameEngine::new();
        for index in moves {
            let _ = engine.make_move(index);
        }
        engine.restart_game();
        prop_assert_eq!(engine.snapshot(), initial);
        prop_assert_eq!(engine.status(), GameStatus::InProgress(PLAYER_ONE));
    }

    /// Once terminal, nothing but restart changes the engine.
    #[test]
    fn terminal_state_is_frozen(moves in prop::collection::vec(0..9usize, 0..40), probe in 0..9usize) {
        let mut engine = GameEngine::new();
        for index in moves {
            let _ = engine.make_move(index);
        }
        if let GameStatus::Terminal(outcome) = engine.status() {
            let before = engine.snapshot();
            prop_assert_eq!(engine.make_move(probe), Err(MoveError::GameAlreadyOver));
            prop_assert_eq!(engine.snapshot(), before);
            prop_assert_eq!(engine.status(), GameStatus::Terminal(outcome));
            if let Outcome::Win(p) = outcome {
                prop_assert_eq!(engine.current_player(), p);
            }
        }
    }
}
