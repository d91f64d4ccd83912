//! Squares: a two-player grid game.
//!
//! Players take turns placing White and Black stones on an NxN board. The
//! first color to occupy the four corners of a square wins; the square may be
//! axis-aligned or rotated by 45 degrees, in two sizes each. A full board
//! without a square is a draw.
//!
//! ## Modules
//!
//! - [`constants`] - Board size bounds, blocking probability, cell symbols
//! - [`board`] - The grid, colors and cells
//! - [`squares`] - Square detection over shape templates
//! - [`selector`] - Move selection for computer players
//! - [`game`] - Turn controller
//! - [`command`] - Console command parsing
//! - [`console`] - Text console loop
//! - [`snapshot`] - Stateless JSON requests on board snapshots
//! - [`error`] - Configuration and move errors
//!
//! ## Example
//!
//! ```
//! use squares::board::Color;
//! use squares::game::{Game, Player, Status};
//!
//! let mut game = Game::with_seed(1);
//! game.start(5, Player::user(Color::White), Player::computer(Color::Black))
//!     .unwrap();
//!
//! // White moves, Black answers on its own.
//! let events = game.apply_move(Color::White, 0, 0).unwrap();
//! assert_eq!(events.len(), 2);
//! assert_eq!(game.status(), Status::Active);
//! ```

pub mod board;
pub mod command;
pub mod console;
pub mod constants;
pub mod error;
pub mod game;
pub mod selector;
pub mod snapshot;
pub mod squares;
