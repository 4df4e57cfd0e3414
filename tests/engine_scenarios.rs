//! Scenario tests for the minimax engine
//! Checks the engine against positions whose correct answer is known

use noughts::{
    Engine, GameConfig, Series,
    adapters::{NoopObserver, RandomMoves},
    search::{DRAW, LOSS, NEG_INFINITY, POS_INFINITY, WIN},
    tictactoe::{Board, LineAnalyzer, Move, Symbol},
};

fn board(s: &str) -> Board {
    Board::from_string(s).unwrap()
}

mod immediate_tactics {
    use super::*;

    #[test]
    fn test_completes_own_row() {
        // O O .
        // X . .
        // X . .   X cannot win in one either way
        let b = board("OO./X../X..");
        let decision = Engine::standard().choose(&b, Symbol::X, Symbol::O).unwrap();
        assert_eq!(decision.chosen, Some(Move::new(0, 2)));
        assert_eq!(decision.score, WIN);
        assert!(LineAnalyzer::standard().won_by(&decision.board, Symbol::O));
    }

    #[test]
    fn test_blocks_human_line() {
        // X X .
        // . O .
        // . . .
        let b = board("XX./.O./...");
        let decision = Engine::standard().choose(&b, Symbol::X, Symbol::O).unwrap();
        assert_eq!(decision.chosen, Some(Move::new(0, 2)));
        assert_eq!(decision.score, DRAW);
    }

    #[test]
    fn test_own_win_beats_blocking() {
        // O O .
        // X X .
        // X . .
        // X threatens 1,2 but O wins outright at 0,2.
        let b = board("OO./XX./X..");
        let decision = Engine::standard().choose(&b, Symbol::X, Symbol::O).unwrap();
        assert_eq!(decision.chosen, Some(Move::new(0, 2)));
        assert_eq!(decision.score, WIN);
    }

    #[test]
    fn test_lost_position_scores_minus_one() {
        // X has two open lines (0,2 and 2,0); O cannot block both.
        let b = board("XX./X../..O");
        let decision = Engine::standard().choose(&b, Symbol::X, Symbol::O).unwrap();
        assert_eq!(decision.score, LOSS);
        assert!(decision.chosen.is_some());
    }
}

mod terminal_positions {
    use super::*;

    #[test]
    fn test_full_board_is_draw() {
        let full = board("XOX/XOO/OXX");
        let analyzer = LineAnalyzer::standard();
        assert!(analyzer.is_draw(&full));
        assert!(full.available_moves().is_empty());

        let result = Engine::standard().search(
            &full,
            true,
            NEG_INFINITY,
            POS_INFINITY,
            Symbol::X,
            Symbol::O,
        )
        .unwrap();
        assert_eq!(result.score, DRAW);
        assert_eq!(result.board, Some(full));
    }
}

mod perfect_play {
    use super::*;

    #[test]
    fn test_empty_board_value_is_draw() {
        let empty = Board::standard();
        for (player, opponent) in [(Symbol::O, Symbol::X), (Symbol::X, Symbol::O)] {
            let result = noughts::search(&empty, true, NEG_INFINITY, POS_INFINITY, player, opponent).unwrap();
            assert_eq!(result.score, DRAW);
        }
    }

    #[test]
    fn test_opening_move_is_top_left_corner() {
        // Every opening draws; row-major tie-breaking keeps the first.
        let decision = Engine::standard()
            .choose(&Board::standard(), Symbol::O, Symbol::X)
            .unwrap();
        assert_eq!(decision.chosen, Some(Move::new(0, 0)));
        assert_eq!(decision.score, DRAW);
    }

    #[test]
    fn test_optimal_self_play_ends_in_draw() {
        let engine = Engine::standard();
        let lines = LineAnalyzer::standard();
        let mut board = Board::standard();

        for ply in 0..9 {
            let mover = Symbol::for_ply(ply);
            let decision = engine.choose(&board, mover.opponent(), mover).unwrap();
            assert_eq!(decision.score, DRAW, "value changed at ply {ply}");
            board = decision.board;
            assert!(lines.winner(&board).is_none());
        }

        assert!(lines.is_draw(&board));
    }

    #[test]
    fn test_engine_never_loses_to_random_play() {
        let mut series = Series::new(GameConfig::new()).unwrap();
        let mut random = RandomMoves::with_seed(2024);

        for game in 0..60 {
            series
                .play_round(Symbol::for_ply(game), &mut random, &mut NoopObserver)
                .unwrap();
        }

        let tally = series.scoreboard();
        assert_eq!(tally.rounds(), 60);
        assert_eq!(tally.victories, 0, "random side beat the engine");
        assert!(tally.defeats > 0, "engine should punish random mistakes");
    }
}

mod small_boards {
    use super::*;

    #[test]
    fn test_two_by_two_first_player_always_wins() {
        // Any two cells of a 2x2 board form a line.
        let engine = Engine::for_size(2);
        let empty = Board::empty(2).unwrap();
        let result = engine.search(&empty, true, NEG_INFINITY, POS_INFINITY, Symbol::O, Symbol::X).unwrap();
        assert_eq!(result.score, WIN);

        let after_x = empty.with_move(Move::new(0, 0), Symbol::X).unwrap();
        let decision = engine.choose(&after_x, Symbol::X, Symbol::O).unwrap();
        assert_eq!(decision.score, LOSS);
        // All replies lose equally; the first enumerated is kept
        assert_eq!(decision.chosen, Some(Move::new(0, 1)));
    }
}
