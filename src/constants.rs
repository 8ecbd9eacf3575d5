//! Constants for board geometry, game rules, and search parameters.
//!
//! Lines of Action is always played on an 8x8 board, so unlike engines for
//! games with several board sizes there is no feature switch here.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const BOARD_SIZE: usize = 8;

/// Number of cells on the board.
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Column and row offsets of the 8 compass directions.
/// Order: North, NorthEast, East, SouthEast, South, SouthWest, West, NorthWest
pub const DELTA: [(isize, isize); 8] = [
    (0, 1),   // North (up one rank)
    (1, 1),   // NE (diagonal)
    (1, 0),   // East (right one file)
    (1, -1),  // SE (diagonal)
    (0, -1),  // South (down one rank)
    (-1, -1), // SW (diagonal)
    (-1, 0),  // West (left one file)
    (-1, 1),  // NW (diagonal)
];

// =============================================================================
// Game Rules
// =============================================================================

/// Default number of moves *per side* before the game is declared a tie.
pub const DEFAULT_MOVE_LIMIT: usize = 60;

// =============================================================================
// Search Parameters
// =============================================================================

/// Fixed search depth in plies.
pub const SEARCH_DEPTH: usize = 3;

/// Score magnitude of a won position (positive: white wins).
pub const WINNING_VALUE: i32 = i32::MAX - 20;

/// Bound larger than any score, used to open the alpha-beta window.
pub const INFTY: i32 = i32::MAX;

/// Weight on the number of pieces lying outside a side's largest region.
pub const STRAGGLER_WEIGHT: i32 = 5;

/// Weight on the number of regions a side has.
pub const REGION_COUNT_WEIGHT: i32 = 2;
