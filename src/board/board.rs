//! The Ultimate Tic-Tac-Toe rules engine.
//!
//! A [`Board`] is an immutable snapshot of the full game state: applying a
//! move produces a new board and never touches the old one, so snapshots can
//! be shared freely across concurrent rollouts.
//!
//! The full board is nine 3x3 sub-boards. Tile `t` of sub-board `s` lives at
//! flat index `s * 9 + t`. The same eight-line win test decides both a
//! sub-board (over its tiles) and the whole game (over the sub-board
//! statuses).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::moves::Move;
use crate::core::Player;

/// Sentinel for "any open sub-board may be played".
pub const ANY_SUB_BOARD: i8 = -1;

/// Legal moves for one position.
///
/// Inline capacity of nine covers the forced-sub-board case; only positions
/// with a free choice of sub-board spill to the heap.
pub type MoveList = SmallVec<[Move; 9]>;

/// The eight three-in-a-row lines of a 3x3 slice.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Resolution state of one 3x3 sub-board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubBoardStatus {
    /// Undecided: no winning line yet and at least one empty tile.
    Open,
    /// Three in a row for the player.
    Won(Player),
    /// Every tile occupied, no winning line.
    Drawn,
}

/// An immutable snapshot of the full game state.
///
/// Sub-board statuses and win counters are derived from the tiles and kept
/// consistent by every constructor, so [`Board::game_status`] and
/// [`Board::is_legal`] never rescan the whole board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// 81 tiles, indexed `sub_board * 9 + tile`.
    tiles: [Option<Player>; 81],
    /// Status per sub-board, a pure function of its nine tiles.
    sub_boards: [SubBoardStatus; 9],
    /// Sub-board the mover must play in, or [`ANY_SUB_BOARD`].
    forced_sub_board: i8,
    /// Sub-boards won by black.
    black_won: u8,
    /// Sub-boards won by white.
    white_won: u8,
    /// Player to move.
    current_player: Player,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The canonical starting position: empty board, black to move, free
    /// choice of sub-board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiles: [None; 81],
            sub_boards: [SubBoardStatus::Open; 9],
            forced_sub_board: ANY_SUB_BOARD,
            black_won: 0,
            white_won: 0,
            current_player: Player::Black,
        }
    }

    /// Rebuild a board from raw tiles, recomputing every derived field.
    ///
    /// Used by snapshot reconstruction; callers are responsible for the
    /// validity of the raw values.
    pub(super) fn from_parts(
        tiles: [Option<Player>; 81],
        forced_sub_board: i8,
        current_player: Player,
    ) -> Self {
        let mut sub_boards = [SubBoardStatus::Open; 9];
        let mut black_won = 0;
        let mut white_won = 0;
        for (s, status) in sub_boards.iter_mut().enumerate() {
            *status = Self::slice_status(&slice_of(&tiles, s));
            match *status {
                SubBoardStatus::Won(Player::Black) => black_won += 1,
                SubBoardStatus::Won(Player::White) => white_won += 1,
                _ => {}
            }
        }
        Self {
            tiles,
            sub_boards,
            forced_sub_board,
            black_won,
            white_won,
            current_player,
        }
    }

    // === Accessors ===

    /// The player to move.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Sub-board the mover is constrained to, or [`ANY_SUB_BOARD`].
    #[must_use]
    pub fn forced_sub_board(&self) -> i8 {
        self.forced_sub_board
    }

    /// The tile at `(sub_board, tile)`.
    #[must_use]
    pub fn tile(&self, sub_board: usize, tile: usize) -> Option<Player> {
        self.tiles[sub_board * 9 + tile]
    }

    /// Status of one sub-board.
    #[must_use]
    pub fn sub_board_status(&self, sub_board: usize) -> SubBoardStatus {
        self.sub_boards[sub_board]
    }

    /// Number of sub-boards won by `player`.
    #[must_use]
    pub fn sub_boards_won(&self, player: Player) -> u8 {
        match player {
            Player::Black => self.black_won,
            Player::White => self.white_won,
        }
    }

    // === Rules ===

    /// Check whether `mv` is legal on this board.
    ///
    /// Out-of-range indices and moves outside an active forced sub-board are
    /// rejected; otherwise the target sub-board must be open and the target
    /// tile empty.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        if mv.sub_board < 0 || mv.sub_board > 8 || mv.tile < 0 || mv.tile > 8 {
            return false;
        }
        if self.forced_sub_board != ANY_SUB_BOARD && self.forced_sub_board != mv.sub_board {
            return false;
        }
        let (s, t) = (mv.sub_board as usize, mv.tile as usize);
        self.sub_boards[s] == SubBoardStatus::Open && self.tiles[s * 9 + t].is_none()
    }

    /// Enumerate every legal move, ascending by (sub-board, tile).
    ///
    /// The order is stable for reproducibility; correctness must not depend
    /// on it.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        if self.forced_sub_board == ANY_SUB_BOARD {
            for s in 0..9 {
                for t in 0..9 {
                    let mv = Move::new(s, t);
                    if self.is_legal(mv) {
                        moves.push(mv);
                    }
                }
            }
        } else {
            for t in 0..9 {
                let mv = Move::new(self.forced_sub_board, t);
                if self.is_legal(mv) {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    /// Apply a pre-validated move, producing the successor board.
    ///
    /// The mover's mark is placed, the affected sub-board's status is
    /// recomputed, the forced sub-board propagates to the one matching the
    /// move's tile index (or is lifted when that sub-board is no longer
    /// open), win counters track an open-to-won transition, and the turn
    /// passes. `self` is left untouched.
    ///
    /// Legality must have been validated beforehand; [`Board::apply`] is the
    /// checked variant.
    #[must_use]
    pub fn apply_unchecked(&self, mv: Move) -> Board {
        let mut next = self.clone();
        let (s, t) = (mv.sub_board as usize, mv.tile as usize);
        let was_open = next.sub_boards[s] == SubBoardStatus::Open;

        next.tiles[s * 9 + t] = Some(self.current_player);
        let status = Self::slice_status(&slice_of(&next.tiles, s));
        next.sub_boards[s] = status;
        if was_open {
            match status {
                SubBoardStatus::Won(Player::Black) => next.black_won += 1,
                SubBoardStatus::Won(Player::White) => next.white_won += 1,
                _ => {}
            }
        }

        next.forced_sub_board = if next.sub_boards[t] == SubBoardStatus::Open {
            mv.tile
        } else {
            ANY_SUB_BOARD
        };
        next.current_player = self.current_player.opponent();
        next
    }

    /// Checked apply: `None` when the move is illegal.
    #[must_use]
    pub fn apply(&self, mv: Move) -> Option<Board> {
        if self.is_legal(mv) {
            Some(self.apply_unchecked(mv))
        } else {
            None
        }
    }

    /// Outcome of the game on this board, if decided.
    ///
    /// The sub-board statuses are checked with the same eight-line rule used
    /// at tile level, with won sub-boards as the marks. With no decisive
    /// line and at least one open sub-board the game continues (`None`).
    /// Once every sub-board is resolved, the side owning more sub-boards
    /// wins; equal counts resolve to white.
    #[must_use]
    pub fn game_status(&self) -> Option<Player> {
        let mut marks = [None; 9];
        for (mark, status) in marks.iter_mut().zip(&self.sub_boards) {
            if let SubBoardStatus::Won(p) = status {
                *mark = Some(*p);
            }
        }
        if let Some(winner) = Self::slice_winner(&marks) {
            return Some(winner);
        }
        if self
            .sub_boards
            .iter()
            .any(|s| *s == SubBoardStatus::Open)
        {
            return None;
        }
        if self.black_won > self.white_won {
            Some(Player::Black)
        } else {
            Some(Player::White)
        }
    }

    // === Win detection ===

    /// Check whether `player` completes any of the eight lines.
    fn player_wins_slice(cells: &[Option<Player>; 9], player: Player) -> bool {
        LINES.iter().any(|line| {
            line.iter().all(|&i| cells[i] == Some(player))
        })
    }

    /// Winner of a 9-cell slice under the primitive tic-tac-toe rule.
    ///
    /// Black is checked before white, matching the order the rest of the
    /// rules assume for malformed inputs.
    fn slice_winner(cells: &[Option<Player>; 9]) -> Option<Player> {
        if Self::player_wins_slice(cells, Player::Black) {
            Some(Player::Black)
        } else if Self::player_wins_slice(cells, Player::White) {
            Some(Player::White)
        } else {
            None
        }
    }

    /// Status of a 9-cell slice: won, else drawn when full, else open.
    fn slice_status(cells: &[Option<Player>; 9]) -> SubBoardStatus {
        match Self::slice_winner(cells) {
            Some(p) => SubBoardStatus::Won(p),
            None if cells.iter().all(|c| c.is_some()) => SubBoardStatus::Drawn,
            None => SubBoardStatus::Open,
        }
    }
}

/// The nine tiles of sub-board `s` as a fixed slice.
fn slice_of(tiles: &[Option<Player>; 81], s: usize) -> [Option<Player>; 9] {
    let mut cells = [None; 9];
    cells.copy_from_slice(&tiles[s * 9..(s + 1) * 9]);
    cells
}
