//! Demonstration driver: two engine instances play a full game against each
//! other, rendering the board and logging move-by-move progress.
//!
//! Usage: `selfplay [time_budget_ms]` (defaults to 1500 per move).

use tracing::info;

use ten_engine::{Board, MctsSearch, Player, SearchConfig};

fn mark(tile: Option<Player>) -> char {
    match tile {
        None => '.',
        Some(Player::Black) => 'b',
        Some(Player::White) => 'w',
    }
}

/// Render the nine sub-boards as a 3x3 grid of 3x3 grids.
fn render(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("-----------------\n");
    for row in 0..3 {
        for inner_row in 0..3 {
            for col in 0..3 {
                let sub_board = row * 3 + col;
                for t in 0..3 {
                    out.push(mark(board.tile(sub_board, inner_row * 3 + t)));
                    if t < 2 {
                        out.push(' ');
                    }
                }
                if col < 2 {
                    out.push('|');
                }
            }
            out.push('\n');
        }
        if row < 2 {
            out.push_str("- - -*- - -*- - -\n");
        }
    }
    out.push_str("-----------------");
    out
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let budget: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1500);

    let mut black = MctsSearch::new(
        SearchConfig::default()
            .with_time_budget_ms(budget)
            .with_seed(1),
    );
    let mut white = MctsSearch::new(
        SearchConfig::default()
            .with_time_budget_ms(budget)
            .with_seed(2),
    );

    let mut board = Board::new();
    let mut move_number = 1u32;
    loop {
        println!("{} to move", board.current_player());
        println!("{}", render(&board));

        let engine = match board.current_player() {
            Player::Black => &mut black,
            Player::White => &mut white,
        };
        let decision = engine.decide(&board).expect("game is still undecided");
        board = board.apply_unchecked(decision.mv);

        info!(
            move_number,
            mv = %decision.mv,
            win_percentage = decision.win_percentage,
            rollouts = decision.rollouts,
            "move played"
        );

        if let Some(winner) = board.game_status() {
            println!("{}", render(&board));
            println!("{winner} wins.");
            break;
        }
        move_number += 1;
    }
}
