//! Lines of Action board state.
//!
//! This module provides the core game logic:
//! - The 8x8 grid, side to move and the log of moves made
//! - Move legality (line counting and blocking)
//! - Making and retracting moves
//! - Region (connected cluster) analysis and win detection
//!
//! Region sizes and the winner are computed lazily and cached in
//! [`OnceCell`]s. Every mutation of the grid resets both cells, so a cached
//! value is never observed stale.

use std::cell::OnceCell;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::constants::{BOARD_SIZE, DEFAULT_MOVE_LIMIT, NUM_SQUARES};
use crate::moves::Move;
use crate::piece::Piece;
use crate::square::{Direction, Square};

/// Initial board contents, indexed `[row][col]` with row 0 = rank 1.
///
/// Note that written out as an array literal the *bottom* rank comes first.
pub type Layout = [[Piece; BOARD_SIZE]; BOARD_SIZE];

const B: Piece = Piece::Black;
const W: Piece = Piece::White;
const E: Piece = Piece::Empty;

/// The standard Lines of Action opening (bottom rank first).
pub const INITIAL_PIECES: Layout = [
    [E, B, B, B, B, B, B, E],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [E, B, B, B, B, B, B, E],
];

/// How a finished game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The given side won.
    Win(Piece),
    /// The move limit was reached with neither side connected.
    Tie,
}

/// Sizes of the connected regions of each side, largest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Regions {
    black: Vec<usize>,
    white: Vec<usize>,
}

/// A Lines of Action position plus the history that led to it.
///
/// Cloning is deep: the clone owns its own grid and move log.
#[derive(Clone, Debug)]
pub struct Board {
    /// Cell contents, indexed by [`Square::index`]
    cells: [Piece; NUM_SQUARES],
    /// Side to move
    turn: Piece,
    /// Moves made and not retracted, oldest first
    moves: Vec<Move>,
    /// Number of half-moves after which the game is a tie
    move_limit: usize,
    /// Region sizes, valid until the next mutation
    regions: OnceCell<Regions>,
    /// Game result (`None` = still in progress), valid until the next mutation
    winner: OnceCell<Option<Outcome>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(&INITIAL_PIECES, Piece::Black)
    }
}

impl Board {
    /// A board with `layout[row][col]` in each cell and `turn` to move.
    pub fn new(layout: &Layout, turn: Piece) -> Self {
        let mut board = Board {
            cells: [Piece::Empty; NUM_SQUARES],
            turn,
            moves: Vec::new(),
            move_limit: 2 * DEFAULT_MOVE_LIMIT,
            regions: OnceCell::new(),
            winner: OnceCell::new(),
        };
        board.initialize(layout, turn);
        board
    }

    /// Reset to `layout` with `turn` to move, clearing history and the move
    /// limit.
    pub fn initialize(&mut self, layout: &Layout, turn: Piece) {
        assert!(turn != Piece::Empty, "side to move must be black or white");
        for (row, rank) in layout.iter().enumerate() {
            for (col, &piece) in rank.iter().enumerate() {
                self.cells[row * BOARD_SIZE + col] = piece;
            }
        }
        self.turn = turn;
        self.moves.clear();
        self.move_limit = 2 * DEFAULT_MOVE_LIMIT;
        self.invalidate();
    }

    /// Reset to the standard opening with black to move.
    pub fn clear(&mut self) {
        self.initialize(&INITIAL_PIECES, Piece::Black);
    }

    /// Contents of `sq`.
    #[inline]
    pub fn get(&self, sq: Square) -> Piece {
        self.cells[sq.index()]
    }

    /// Put `piece` on `sq` without touching the side to move.
    pub fn set(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.index()] = piece;
        self.invalidate();
    }

    /// Change the side to move.
    pub fn set_turn(&mut self, next: Piece) {
        assert!(next != Piece::Empty, "side to move must be black or white");
        self.turn = next;
        self.winner.take();
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Piece {
        self.turn
    }

    /// Number of moves made and not retracted.
    #[inline]
    pub fn moves_made(&self) -> usize {
        self.moves.len()
    }

    /// The most recent move, if any. Captures carry the capture flag.
    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// Per-side move limit currently in force.
    pub fn move_limit(&self) -> usize {
        self.move_limit / 2
    }

    /// Limit each side to `limit` moves before the game is a tie.
    ///
    /// # Panics
    /// If `2 * limit` does not exceed the number of moves already made.
    pub fn set_move_limit(&mut self, limit: usize) {
        let half_moves = limit.saturating_mul(2);
        assert!(
            half_moves > self.moves_made(),
            "move limit {limit} too small: {} moves already made",
            self.moves_made()
        );
        self.move_limit = half_moves;
        self.winner.take();
    }

    /// True iff `from`-`to` is a legal move for the side to move.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        if from == to {
            return false;
        }
        let piece = self.get(from);
        if piece == Piece::Empty || piece != self.turn {
            return false;
        }
        let Some(dir) = from.direction_to(to) else {
            return false;
        };
        if from.distance(to) != self.line_count(from, dir) {
            return false;
        }
        !self.blocked(from, to, dir)
    }

    /// True iff `mv` is legal for the side to move. The capture flag is
    /// ignored.
    pub fn is_legal_move(&self, mv: &Move) -> bool {
        self.is_legal(mv.from(), mv.to())
    }

    /// All legal moves for the side to move, ordered by origin then
    /// destination in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut legal = Vec::new();
        for from in Square::all() {
            if self.get(from) != self.turn {
                continue;
            }
            for to in Square::all() {
                if self.is_legal(from, to) {
                    legal.push(Move::new(from, to));
                }
            }
        }
        legal
    }

    /// Number of pieces of either color on the whole line through `from`
    /// running along `dir`, `from` included.
    fn line_count(&self, from: Square, dir: Direction) -> usize {
        let occupied_towards = |d: Direction| {
            (1..)
                .map_while(|steps| from.move_dest(d, steps))
                .filter(|&sq| self.get(sq) != Piece::Empty)
                .count()
        };
        1 + occupied_towards(dir) + occupied_towards(dir.opposite())
    }

    /// True if an opposing piece lies strictly between `from` and `to`, or
    /// a friendly piece sits on `to`.
    fn blocked(&self, from: Square, to: Square, dir: Direction) -> bool {
        let enemy = self.turn.opposite();
        let jumps_enemy = (1..from.distance(to))
            .filter_map(|steps| from.move_dest(dir, steps))
            .any(|sq| self.get(sq) == enemy);
        jumps_enemy || self.get(to) == self.turn
    }

    /// Play `mv`. A move landing on an opposing piece is logged as a
    /// capture whatever its own flag says.
    ///
    /// # Panics
    /// If `mv` is not legal.
    pub fn make_move(&mut self, mv: Move) {
        assert!(self.is_legal_move(&mv), "illegal move {mv}");
        let (from, to) = (mv.from(), mv.to());
        let mover = self.get(from);
        let logged = if self.get(to) != Piece::Empty && self.get(to) != mover {
            Move::capture(from, to)
        } else {
            Move::new(from, to)
        };
        self.cells[to.index()] = mover;
        self.cells[from.index()] = Piece::Empty;
        self.turn = mover.opposite();
        self.moves.push(logged);
        self.invalidate();
    }

    /// Undo the most recent move, restoring any captured piece.
    ///
    /// # Panics
    /// If no moves have been made.
    pub fn retract(&mut self) {
        let Some(last) = self.moves.pop() else {
            panic!("retract called with no moves made");
        };
        let (from, to) = (last.from(), last.to());
        let mover = self.get(to);
        self.cells[from.index()] = mover;
        self.cells[to.index()] = if last.is_capture() {
            mover.opposite()
        } else {
            Piece::Empty
        };
        self.turn = self.turn.opposite();
        self.invalidate();
    }

    /// Drop cached region and winner data after the grid changes.
    fn invalidate(&mut self) {
        self.regions.take();
        self.winner.take();
    }

    fn regions(&self) -> &Regions {
        self.regions.get_or_init(|| self.compute_regions())
    }

    /// Flood-fill every cluster of 8-adjacent same-colored pieces.
    fn compute_regions(&self) -> Regions {
        let mut visited = [false; NUM_SQUARES];
        let mut regions = Regions::default();

        for start in Square::all() {
            let color = self.get(start);
            if visited[start.index()] || color == Piece::Empty {
                continue;
            }
            let size = self.collect_region(start, color, &mut visited);
            match color {
                Piece::Black => regions.black.push(size),
                Piece::White => regions.white.push(size),
                Piece::Empty => unreachable!(),
            }
        }

        regions.black.sort_unstable_by(|a, b| b.cmp(a));
        regions.white.sort_unstable_by(|a, b| b.cmp(a));
        regions
    }

    /// Size of the unvisited cluster of `color` containing `start`, marking
    /// its cells in `visited`.
    fn collect_region(
        &self,
        start: Square,
        color: Piece,
        visited: &mut [bool; NUM_SQUARES],
    ) -> usize {
        let mut stack = vec![start];
        let mut count = 0;

        while let Some(sq) = stack.pop() {
            if visited[sq.index()] {
                continue;
            }
            visited[sq.index()] = true;
            count += 1;
            for n in sq.adjacent() {
                if !visited[n.index()] && self.get(n) == color {
                    stack.push(n);
                }
            }
        }
        count
    }

    /// Sizes of `side`'s connected regions, largest first. Empty if `side`
    /// has no pieces.
    pub fn region_sizes(&self, side: Piece) -> &[usize] {
        let regions = self.regions();
        match side {
            Piece::Black => regions.black.as_slice(),
            Piece::White => regions.white.as_slice(),
            Piece::Empty => &[],
        }
    }

    /// True iff `side` has at most one region. A side with no pieces counts
    /// as contiguous.
    pub fn pieces_contiguous(&self, side: Piece) -> bool {
        self.region_sizes(side).len() <= 1
    }

    /// Number of cells holding `piece` (`Empty` counts empty cells).
    pub fn piece_count(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|&&p| p == piece).count()
    }

    /// The result of the game, or `None` while it is still in progress.
    ///
    /// If both sides are contiguous, the side *not* to move wins.
    pub fn winner(&self) -> Option<Outcome> {
        *self.winner.get_or_init(|| {
            let white = self.pieces_contiguous(Piece::White);
            let black = self.pieces_contiguous(Piece::Black);
            if white && black {
                Some(Outcome::Win(self.turn.opposite()))
            } else if white {
                Some(Outcome::Win(Piece::White))
            } else if black {
                Some(Outcome::Win(Piece::Black))
            } else if self.moves.len() >= self.move_limit {
                Some(Outcome::Tie)
            } else {
                None
            }
        })
    }

    /// True iff a side has won or the game is tied.
    pub fn game_over(&self) -> bool {
        self.winner().is_some()
    }
}

impl PartialEq for Board {
    /// Boards are equal when their contents and side to move match; history
    /// is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells && self.turn == other.turn
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
        self.turn.hash(state);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===")?;
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "    ")?;
            for col in 0..BOARD_SIZE {
                write!(f, "{} ", self.get(Square::new(col, row)).abbrev())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Next move: {}", self.turn.full_name())?;
        write!(f, "===")
    }
}
