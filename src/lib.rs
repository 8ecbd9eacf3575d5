//! loa-rust: a Lines of Action engine.
//!
//! Two sides start on opposite edges of an 8x8 board. A piece moves in a
//! straight or diagonal line exactly as many cells as there are pieces
//! (of either color) on that line, may jump its own pieces but not the
//! opponent's, and captures by landing on an opposing piece. A side wins
//! once all of its pieces form a single connected group.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, rule defaults, and search parameters
//! - [`square`] - Board coordinates and directions
//! - [`piece`] - Cell contents
//! - [`moves`] - Moves and their `a1-b2` text form
//! - [`board`] - Legality, making/retracting moves, regions, and win detection
//! - [`search`] - Alpha-beta minimax player
//! - [`game`] - Text command driver
//!
//! ## Example
//!
//! ```
//! use loa_rust::board::Board;
//! use loa_rust::search::MachinePlayer;
//!
//! // Start from the standard opening, black to move
//! let mut board = Board::default();
//! board.make_move("b1-b3".parse().unwrap());
//!
//! // Let the engine answer for white
//! let mut player = MachinePlayer::with_depth(2);
//! let reply = player.choose_move(&board).unwrap();
//! board.make_move(reply);
//! println!("{board}");
//! ```

pub mod board;
pub mod constants;
pub mod game;
pub mod moves;
pub mod piece;
pub mod search;
pub mod square;
