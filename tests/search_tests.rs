//! End-to-end search tests: full games, decision bounds, the snapshot path
//! a request-handling collaborator would take.

use ten_engine::{decide, Board, BoardSnapshot, Move, MctsSearch, Player, SearchConfig};

// =============================================================================
// Full games
// =============================================================================

#[test]
fn test_two_engines_play_a_full_game() {
    let mut black = MctsSearch::new(
        SearchConfig::default()
            .with_time_budget_ms(2)
            .with_seed(11),
    );
    let mut white = MctsSearch::new(
        SearchConfig::default()
            .with_time_budget_ms(2)
            .with_seed(22),
    );

    let mut board = Board::new();
    let mut moves_played = 0;
    while board.game_status().is_none() {
        let engine = match board.current_player() {
            Player::Black => &mut black,
            Player::White => &mut white,
        };
        let decision = engine.decide(&board).unwrap();

        assert!(board.is_legal(decision.mv), "engine must answer legally");
        assert!(decision.win_percentage <= 100);
        assert!(decision.rollouts > 0);

        board = board.apply_unchecked(decision.mv);
        moves_played += 1;
        assert!(moves_played <= 81, "a game cannot outlast the tile count");
    }

    assert!(board.game_status().is_some());
}

// =============================================================================
// Decision bounds and lifecycle
// =============================================================================

#[test]
fn test_decision_bounds_on_opening_board() {
    let board = Board::new();
    let decision = decide(&board, 20).unwrap();

    assert!(board.is_legal(decision.mv));
    assert!(decision.win_percentage <= 100);
    // 81 children in the first batch alone.
    assert!(decision.rollouts >= 81);
}

#[test]
fn test_engine_is_reusable_across_positions() {
    let mut search = MctsSearch::new(SearchConfig::default().with_time_budget_ms(2));

    let opening = Board::new();
    let first = search.decide(&opening).unwrap();
    let midgame = opening.apply_unchecked(first.mv);
    let second = search.decide(&midgame).unwrap();

    assert!(midgame.is_legal(second.mv));
}

#[test]
fn test_decide_on_finished_game_is_an_error() {
    // Every sub-board resolved, black 5, white 4, no status line.
    let mut snapshot = BoardSnapshot::starting_position();
    for s in [0usize, 1, 5, 6, 7] {
        snapshot.tiles[s] = [1, 1, 1, 0, 0, 0, 0, 0, 0];
    }
    for s in [2usize, 3, 4, 8] {
        snapshot.tiles[s] = [-1, -1, -1, 0, 0, 0, 0, 0, 0];
    }
    let board = Board::from_snapshot(&snapshot).unwrap();

    assert_eq!(board.game_status(), Some(Player::Black));
    assert!(decide(&board, 5).is_err());
}

// =============================================================================
// Snapshot-in, decision-out (request collaborator path)
// =============================================================================

#[test]
fn test_decide_from_wire_snapshot() {
    // Mid-game position as a collaborator would transmit it: black owns
    // sub-board 0, play is forced into sub-board 4.
    let payload = r#"{
        "tiles": [
            [1, 1, 1, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [-1, 0, 0, 0, 1, 0, 0, 0, -1],
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0]
        ],
        "forced_sub_board": 4,
        "current_player": 1
    }"#;
    let snapshot: BoardSnapshot = serde_json::from_str(payload).unwrap();
    let board = Board::from_snapshot(&snapshot).unwrap();

    let decision = decide(&board, 20).unwrap();

    assert_eq!(decision.mv.sub_board, 4, "forcing constrains the answer");
    assert!(board.is_legal(decision.mv));

    // The decision itself is transmissible.
    let response = serde_json::to_value(decision).unwrap();
    assert_eq!(response["mv"]["sub_board"], 4);
}

#[test]
fn test_forced_win_is_taken() {
    // Black owns sub-boards 0 and 1; tile 2 of sub-board 2 completes the
    // top row of sub-boards and wins outright.
    let mut snapshot = BoardSnapshot::starting_position();
    snapshot.tiles[0] = [1, 1, 1, 0, 0, 0, 0, 0, 0];
    snapshot.tiles[1] = [1, 1, 1, 0, 0, 0, 0, 0, 0];
    snapshot.tiles[2] = [1, 1, 0, 0, -1, -1, -1, 1, 1];
    snapshot.forced_sub_board = 2;
    let board = Board::from_snapshot(&snapshot).unwrap();

    let decision = decide(&board, 100).unwrap();

    assert_eq!(decision.mv, Move::new(2, 2));
    assert_eq!(decision.win_percentage, 100);
}
