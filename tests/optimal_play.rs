//! End-to-end tests for the minimax engine

use oxo::{best_move, best_moves, max_value, min_value, Board, Cell, Game, GameOutcome, Move, Player};

mod root_values {
    use super::*;

    #[test]
    fn test_perfect_play_from_empty_board_is_a_draw() {
        let initial = Board::new();
        assert_eq!(max_value(&initial), 0);
        assert_eq!(min_value(&initial), 0);
    }

    #[test]
    fn test_every_opening_is_a_draw() {
        let initial = Board::new();
        for mv in initial.available_moves() {
            let after = initial.make_move(mv).unwrap();
            assert_eq!(min_value(&after), 0, "opening {mv} should be drawn");
        }
    }
}

mod concrete_positions {
    use super::*;

    #[test]
    fn test_two_empty_cell_board() {
        // X O X
        // O X O
        // . . O
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::O;
        cells[2] = Cell::X;
        cells[3] = Cell::O;
        cells[4] = Cell::X;
        cells[5] = Cell::O;
        cells[8] = Cell::O;
        let board = Board { cells };

        assert_eq!(board.winner(), None);
        assert!(!board.is_terminal());
        assert_eq!(
            board.available_moves(),
            vec![Move::new(2, 0), Move::new(2, 1)]
        );
    }

    #[test]
    fn test_completed_top_row() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;
        let board = Board { cells };

        assert_eq!(board.winner(), Some(Player::X));
        assert!(board.is_terminal());
        assert_eq!(board.utility(), 1);
    }

    #[test]
    fn test_full_board_without_a_line() {
        // X O X
        // X O O
        // O X X
        let board = Board::from_string("XOXXOOOXX").unwrap();

        assert_eq!(board.winner(), None);
        assert!(board.is_terminal());
        assert!(board.is_draw());
        assert_eq!(board.utility(), 0);
    }

    #[test]
    fn test_empty_board_opening_move() {
        let initial = Board::new();
        let opening = best_move(&initial).unwrap();

        assert!(initial.available_moves().contains(&opening));

        // Every first move draws, so all nine are optimal; the returned
        // one must still be among the provably optimal corner/center set.
        let corner_or_center = [
            Move::new(0, 0),
            Move::new(0, 2),
            Move::new(1, 1),
            Move::new(2, 0),
            Move::new(2, 2),
        ];
        assert!(corner_or_center.contains(&opening));
    }

    #[test]
    fn test_fork_is_winning() {
        // X O .
        // . X .
        // . . O
        let board = Board::from_string("XO..X...O").unwrap();
        assert_eq!(board.to_move(), Player::X);

        // X has no immediate win, but the bottom-left corner forks the
        // left column and the anti-diagonal, so the position is a forced
        // win.
        assert_eq!(max_value(&board), 1);

        let mv = best_move(&board).unwrap();
        let after = board.make_move(mv).unwrap();
        assert_eq!(min_value(&after), 1);
    }
}

mod tactical_play {
    use super::*;

    #[test]
    fn test_takes_the_win_over_the_block() {
        // X X .
        // O O .
        // . . .
        // X both wins at (0, 2) and blocks at (1, 2); winning is better.
        let board = Board::from_string("XX.OO....").unwrap();
        assert_eq!(best_move(&board), Some(Move::new(0, 2)));
    }

    #[test]
    fn test_blocks_the_only_threat() {
        // X X .
        // . O .
        // . . .
        let board = Board::from_string("XX..O....").unwrap();
        assert_eq!(board.to_move(), Player::O);
        assert_eq!(best_move(&board), Some(Move::new(0, 2)));
        assert_eq!(best_moves(&board), vec![Move::new(0, 2)]);
    }
}

mod adversarial {
    use super::*;

    fn engine_never_loses_from(board: Board, engine: Player) {
        if board.is_terminal() {
            assert_ne!(
                board.winner(),
                Some(engine.opponent()),
                "engine lost from {}",
                board.encode()
            );
            return;
        }

        if board.to_move() == engine {
            let mv = best_move(&board).expect("non-terminal board has a best move");
            engine_never_loses_from(board.make_move(mv).unwrap(), engine);
        } else {
            for mv in board.available_moves() {
                engine_never_loses_from(board.make_move(mv).unwrap(), engine);
            }
        }
    }

    #[test]
    fn test_engine_as_x_never_loses() {
        engine_never_loses_from(Board::new(), Player::X);
    }

    #[test]
    fn test_engine_as_o_never_loses() {
        engine_never_loses_from(Board::new(), Player::O);
    }
}

mod self_play {
    use super::*;

    #[test]
    fn test_perfect_self_play_draws() {
        let mut game = Game::new();
        let mut board = Board::new();

        while let Some(mv) = best_move(&board) {
            game.play(mv).unwrap();
            board = game.current_state().unwrap();
        }

        assert!(board.is_terminal());
        assert_eq!(game.outcome, Some(GameOutcome::Draw));
        assert_eq!(game.moves.len(), 9);
    }
}
