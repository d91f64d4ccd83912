//! Fixed game parameters.
//!
//! The board size is chosen per game at runtime, so this module only holds
//! the values that never change between games: the playable board sizes,
//! the computer's blocking probability, and the characters used to render cells.

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest accepted board size. Boards of size 2 or less are rejected.
pub const MIN_SIZE: usize = 3;

/// Largest accepted board size. Keeps the cell count and the per-move
/// candidate simulation bounded.
pub const MAX_SIZE: usize = 100;

// =============================================================================
// Move Selection
// =============================================================================

/// Probability that the computer blocks a cell which would complete an
/// opponent square. Drawn once per blocking candidate.
pub const BLOCK_PROBABILITY: f64 = 0.30;

// =============================================================================
// Cell Symbols
// =============================================================================

/// White stone.
pub const WHITE_SYMBOL: char = 'W';

/// Black stone.
pub const BLACK_SYMBOL: char = 'B';

/// Empty cell.
pub const EMPTY_SYMBOL: char = '.';

// =============================================================================
// Logging
// =============================================================================

/// Default log level of the binary. Logs go to stderr.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
