//! Integration tests for loa-rust
//!
//! These exercise the board through its public API using a handful of
//! hand-built positions.

use loa_rust::board::{Board, Layout, Outcome};
use loa_rust::moves::Move;
use loa_rust::piece::Piece;
use loa_rust::square::Square;

const B: Piece = Piece::Black;
const W: Piece = Piece::White;
const E: Piece = Piece::Empty;

// =============================================================================
// Test positions (bottom rank first)
// =============================================================================

/// A "general" middle-game position.
const BOARD1: Layout = [
    [E, B, E, B, B, E, E, E],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, B, B, E, W],
    [W, E, B, E, E, W, E, E],
    [W, E, W, W, E, W, E, E],
    [W, E, E, E, B, E, E, W],
    [E, E, E, E, E, E, E, E],
    [E, B, B, B, E, B, B, E],
];

/// Black, but not white, pieces are contiguous.
const BOARD2: Layout = [
    [E, E, E, E, E, E, E, E],
    [E, E, E, E, E, E, E, E],
    [E, E, E, E, E, E, E, E],
    [E, B, W, B, B, B, E, E],
    [E, W, B, W, W, E, E, E],
    [E, E, B, B, W, W, E, W],
    [E, W, W, B, E, E, E, E],
    [E, E, E, B, E, E, E, E],
];

/// Both sides' pieces are contiguous.
const BOARD3: Layout = [
    [E, E, E, E, E, E, E, E],
    [E, E, E, E, E, E, E, E],
    [E, E, E, E, E, E, E, E],
    [E, B, W, B, W, E, E, E],
    [E, W, B, W, W, E, E, E],
    [E, E, B, B, W, W, W, E],
    [E, W, W, W, E, E, E, E],
    [E, E, E, E, E, E, E, E],
];

const BOARD1_STRING: &str = "===\n\
    \x20   - b b b - b b - \n\
    \x20   - - - - - - - - \n\
    \x20   w - - - b - - w \n\
    \x20   w - w w - w - - \n\
    \x20   w - b - - w - - \n\
    \x20   w - - - b b - w \n\
    \x20   w - - - - - - w \n\
    \x20   - b - b b - - - \n\
    Next move: black\n\
    ===";

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn test_board_dump() {
    assert_eq!(Board::new(&BOARD1, B).to_string(), BOARD1_STRING);
}

#[test]
fn test_clone_dumps_identically() {
    let b0 = Board::new(&BOARD1, B);
    let copy = b0.clone();
    assert_eq!(b0.to_string(), copy.to_string());
}

#[test]
fn test_initial_dump() {
    let expected = "===\n\
        \x20   - b b b b b b - \n\
        \x20   w - - - - - - w \n\
        \x20   w - - - - - - w \n\
        \x20   w - - - - - - w \n\
        \x20   w - - - - - - w \n\
        \x20   w - - - - - - w \n\
        \x20   w - - - - - - w \n\
        \x20   - b b b b b b - \n\
        Next move: black\n\
        ===";
    assert_eq!(Board::default().to_string(), expected);
}

// =============================================================================
// Legality
// =============================================================================

#[test]
fn test_legality() {
    let b = Board::new(&BOARD1, B);
    for legal in ["f3-d5", "f3-h5", "f3-h1", "f3-b3"] {
        assert!(b.is_legal_move(&mv(legal)), "{legal} should be legal");
    }
    for illegal in ["f3-d1", "f3-h3", "f3-e4", "c4-c7", "b1-b4"] {
        assert!(!b.is_legal_move(&mv(illegal)), "{illegal} should be illegal");
    }
}

#[test]
fn test_legal_moves_are_all_legal() {
    let b = Board::new(&BOARD1, B);
    let moves = b.legal_moves();
    assert!(moves.contains(&mv("f3-d5")));
    assert!(!moves.contains(&mv("f3-d1")));
    for m in &moves {
        assert!(b.is_legal_move(m), "{m} listed but not legal");
        assert_eq!(b.get(m.from()), Piece::Black);
    }
}

#[test]
fn test_capture_flag_ignored_by_legality() {
    let b = Board::new(&BOARD1, B);
    assert!(b.is_legal_move(&Move::capture(sq("f3"), sq("d5"))));
}

// =============================================================================
// Contiguity and winner
// =============================================================================

#[test]
fn test_contiguity() {
    let b1 = Board::new(&BOARD1, B);
    assert!(!b1.pieces_contiguous(B));
    assert!(!b1.pieces_contiguous(W));
    assert!(!b1.game_over());

    let b2 = Board::new(&BOARD2, B);
    assert!(b2.pieces_contiguous(B));
    assert!(!b2.pieces_contiguous(W));
    assert!(b2.game_over());
    assert_eq!(b2.winner(), Some(Outcome::Win(B)));

    let b3 = Board::new(&BOARD3, B);
    assert!(b3.pieces_contiguous(W));
    assert!(b3.pieces_contiguous(B));
    assert!(b3.game_over());
}

#[test]
fn test_both_contiguous_side_not_to_move_wins() {
    assert_eq!(Board::new(&BOARD3, B).winner(), Some(Outcome::Win(W)));
    assert_eq!(Board::new(&BOARD3, W).winner(), Some(Outcome::Win(B)));
}

#[test]
fn test_single_cluster_has_one_region() {
    let mut layout: Layout = [[E; 8]; 8];
    for col in 2..6 {
        layout[3][col] = W;
    }
    layout[4][5] = W;
    layout[0][0] = B;
    layout[7][7] = B;
    let b = Board::new(&layout, B);
    assert_eq!(b.region_sizes(W), &[5]);
    assert_eq!(b.region_sizes(B), &[1, 1]);
    assert_eq!(b.winner(), Some(Outcome::Win(W)));
}

// =============================================================================
// Equality, counts and regions
// =============================================================================

#[test]
fn test_equality() {
    assert_eq!(Board::new(&BOARD1, B), Board::new(&BOARD1, B));
    assert_ne!(Board::new(&BOARD1, B), Board::new(&BOARD1, W));
}

#[test]
fn test_piece_counts() {
    let b = Board::new(&BOARD1, B);
    assert_eq!(b.piece_count(E), 40);
    assert_eq!(b.piece_count(B), 12);
    assert_eq!(b.piece_count(W), 12);
}

#[test]
fn test_region_sizes() {
    let b1 = Board::new(&BOARD1, B);
    assert_eq!(b1.region_sizes(W), &[5, 2, 2, 2, 1]);
    assert_eq!(b1.region_sizes(B), &[3, 2, 2, 2, 1, 1, 1]);

    let b2 = Board::new(&BOARD2, B);
    assert_eq!(b2.region_sizes(B), &[9]);
    assert_eq!(b2.region_sizes(W)[0], 6);

    let b3 = Board::new(&BOARD3, B);
    assert_eq!(b3.region_sizes(B), &[5]);
    assert_eq!(b3.region_sizes(W), &[11]);
}

// =============================================================================
// Making and retracting moves
// =============================================================================

#[test]
fn test_move_and_retract() {
    let b0 = Board::new(&BOARD1, B);
    let mut b1 = Board::new(&BOARD1, B);
    assert_eq!(b1.piece_count(W), 12);
    assert_eq!(b1.turn(), B);
    assert_eq!(b1.region_sizes(W).len(), 5);
    assert_eq!(b1.region_sizes(B).len(), 7);

    b1.make_move(mv("f3-d5"));
    assert_eq!(b1.piece_count(W), 11);
    assert_eq!(b1.turn(), W);
    assert_eq!(b1.region_sizes(W).len(), 5);
    assert_eq!(b1.region_sizes(B).len(), 6);
    assert_eq!(b1.region_sizes(W)[0], 5);
    assert_eq!(b1.region_sizes(B)[0], 3);
    assert_eq!(b1.get(Square::new(3, 4)), B, "square d5 after f3-d5");
    assert_eq!(b1.get(Square::new(5, 2)), E, "square f3 after f3-d5");
    assert_eq!(b1.moves_made(), 1);
    assert_eq!(b1.last_move(), Some(Move::capture(sq("f3"), sq("d5"))));

    b1.retract();
    assert_eq!(b1.piece_count(W), 12);
    assert_eq!(b1.turn(), B);
    assert_eq!(b1.region_sizes(W).len(), 5);
    assert_eq!(b1.region_sizes(B).len(), 7);
    assert_eq!(b1.region_sizes(W)[0], 5);
    assert_eq!(b1.region_sizes(B)[0], 3);
    assert_eq!(b1, b0, "board restored after retraction");
    assert_eq!(b1.moves_made(), 0);

    b1.make_move(mv("f3-d5"));
    b1.make_move(mv("f5-f8"));
    assert_eq!(b1.turn(), B);
    assert_eq!(b1.region_sizes(B)[0], 3);
    assert_eq!(b1.region_sizes(B).len(), 6);
    assert_eq!(b1.region_sizes(W)[0], 5);
    assert_eq!(b1.region_sizes(W).len(), 6);
    assert_eq!(b1.piece_count(B), 11);

    b1.retract();
    assert_eq!(b1.region_sizes(W)[0], 5);
    assert_eq!(b1.region_sizes(W).len(), 5);
    assert_eq!(b1.region_sizes(B)[0], 3);
    assert_eq!(b1.region_sizes(B).len(), 6);
    assert_eq!(b1.turn(), W);
}

#[test]
fn test_every_move_retracts_cleanly() {
    let start = Board::new(&BOARD1, B);
    let mut b = start.clone();
    for m in start.legal_moves() {
        b.make_move(m);
        b.retract();
        assert_eq!(b, start, "after {m}");
        assert_eq!(b.moves_made(), 0);
        assert_eq!(b.region_sizes(B), start.region_sizes(B));
        assert_eq!(b.region_sizes(W), start.region_sizes(W));
    }
}

#[test]
fn test_clone_is_independent() {
    let start = Board::default();
    let mut copy = start.clone();
    copy.make_move(mv("b1-b3"));
    assert_eq!(start.moves_made(), 0);
    assert_eq!(start.get(sq("b1")), B);
    assert_ne!(start, copy);
}

#[test]
fn test_move_limit() {
    let mut b = Board::default();
    assert_eq!(b.move_limit(), 60);
    b.set_move_limit(2);
    for m in ["b1-b3", "a2-c2", "b3-b5"] {
        b.make_move(mv(m));
        assert!(!b.game_over(), "game ended early after {m}");
    }
    b.make_move(mv("a3-c3"));
    assert_eq!(b.winner(), Some(Outcome::Tie));
    b.set_move_limit(3);
    assert_eq!(b.winner(), None);
}

#[test]
#[should_panic(expected = "too small")]
fn test_move_limit_cannot_shrink_below_moves_made() {
    let mut b = Board::default();
    b.make_move(mv("b1-b3"));
    b.make_move(mv("a2-c2"));
    b.make_move(mv("b3-b5"));
    b.set_move_limit(1);
}
