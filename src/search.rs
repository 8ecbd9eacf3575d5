//! Minimax search with alpha-beta pruning.
//!
//! The search explores the legal-move tree to a fixed depth. Every child
//! position is a fresh clone of its parent with one move applied, so no
//! node ever observes another node's mutations. Leaves are scored by
//! [`static_score`], where positive values favor white and negative values
//! favor black.
//!
//! Children are visited in [`Board::legal_moves`] order and compared with
//! strict `>`/`<`, so among equally scored moves the first one generated is
//! chosen and the result is fully reproducible.

use tracing::debug;

use crate::board::{Board, Outcome};
use crate::constants::{INFTY, REGION_COUNT_WEIGHT, SEARCH_DEPTH, STRAGGLER_WEIGHT, WINNING_VALUE};
use crate::moves::Move;
use crate::piece::Piece;

/// Whether a node picks the largest or the smallest child value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sense {
    /// White's nodes
    Maximize,
    /// Black's nodes
    Minimize,
}

impl Sense {
    /// The sense of the nodes where `side` is to move.
    pub fn for_side(side: Piece) -> Sense {
        if side == Piece::White {
            Sense::Maximize
        } else {
            Sense::Minimize
        }
    }

    #[inline]
    pub fn flip(self) -> Sense {
        match self {
            Sense::Maximize => Sense::Minimize,
            Sense::Minimize => Sense::Maximize,
        }
    }
}

/// An automated player that picks moves by fixed-depth search.
#[derive(Clone, Debug)]
pub struct MachinePlayer {
    /// Search depth in plies
    depth: usize,
    /// Move recorded by the root of the most recent search
    found_move: Option<Move>,
    /// Nodes visited by the most recent search
    nodes: u64,
}

impl Default for MachinePlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl MachinePlayer {
    /// A player searching [`SEARCH_DEPTH`] plies.
    pub fn new() -> Self {
        Self::with_depth(SEARCH_DEPTH)
    }

    /// A player searching `depth` plies.
    ///
    /// # Panics
    /// If `depth` is zero; a zero-depth search never records a move.
    pub fn with_depth(depth: usize) -> Self {
        assert!(depth > 0, "search depth must be at least 1");
        Self {
            depth,
            found_move: None,
            nodes: 0,
        }
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Nodes visited by the most recent call to [`choose_move`](Self::choose_move).
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Pick a move for the side to move on `board`.
    ///
    /// Returns `None` if the game is already over or the side to move has no
    /// legal move.
    pub fn choose_move(&mut self, board: &Board) -> Option<Move> {
        if board.game_over() {
            return None;
        }
        let work = board.clone();
        self.found_move = None;
        self.nodes = 0;

        let sense = Sense::for_side(work.turn());
        let score = self.find_move(&work, self.depth, true, sense, -INFTY, INFTY);

        debug!(
            side = %work.turn(),
            depth = self.depth,
            nodes = self.nodes,
            score,
            best = ?self.found_move.map(|m| m.to_string()),
            "search finished"
        );
        self.found_move
    }

    /// Value of `board` searched `depth` plies deep. When `save_move` is set
    /// the move leading to the best child is stored in `found_move`.
    ///
    /// A maximizing node returns its largest child value, a minimizing node
    /// its smallest; the scan of children stops once `beta <= alpha`.
    /// Depth zero and finished games return [`static_score`] and record
    /// nothing.
    pub fn find_move(
        &mut self,
        board: &Board,
        depth: usize,
        save_move: bool,
        sense: Sense,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;
        if depth == 0 || board.game_over() {
            return static_score(board);
        }

        let mut best_move: Option<Move> = None;
        let mut best = match sense {
            Sense::Maximize => -INFTY,
            Sense::Minimize => INFTY,
        };

        for mv in board.legal_moves() {
            let mut child = board.clone();
            child.make_move(mv);
            let val = self.find_move(&child, depth - 1, false, sense.flip(), alpha, beta);
            match sense {
                Sense::Maximize => {
                    if val > best {
                        best = val;
                        best_move = child.last_move();
                    }
                    alpha = alpha.max(val);
                }
                Sense::Minimize => {
                    if val < best {
                        best = val;
                        best_move = child.last_move();
                    }
                    beta = beta.min(val);
                }
            }
            if beta <= alpha {
                break;
            }
        }

        if save_move {
            self.found_move = best_move;
        }
        best
    }
}

/// Heuristic value of `board`: positive favors white, negative black.
///
/// Finished games score `±WINNING_VALUE` (0 for a tie). Otherwise each side
/// is penalized for pieces outside its largest region and for the number
/// of regions it has.
pub fn static_score(board: &Board) -> i32 {
    match board.winner() {
        Some(Outcome::Win(Piece::White)) => return WINNING_VALUE,
        Some(Outcome::Win(_)) => return -WINNING_VALUE,
        Some(Outcome::Tie) => return 0,
        None => {}
    }

    let white = board.region_sizes(Piece::White);
    let black = board.region_sizes(Piece::Black);
    let max_white = white.first().copied().unwrap_or(0) as i32;
    let max_black = black.first().copied().unwrap_or(0) as i32;
    let num_white = board.piece_count(Piece::White) as i32;
    let num_black = board.piece_count(Piece::Black) as i32;

    let stragglers = (num_black - max_black) - (num_white - max_white);
    let region_difference = black.len() as i32 - white.len() as i32;

    STRAGGLER_WEIGHT * stragglers + REGION_COUNT_WEIGHT * region_difference
}
