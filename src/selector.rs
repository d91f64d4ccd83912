//! Move selection for computer players.
//!
//! Candidates are the board's free cells in row-major order. In priority order:
//!
//! 1. Win now: the first free cell that completes a square for the mover.
//! 2. Block: for each free cell that would complete a square for the
//!    opponent, take it with probability [`BLOCK_PROBABILITY`]. Every such
//!    candidate gets its own draw; the first successful draw wins.
//! 3. Otherwise a uniformly random free cell.
//!
//! Hypothetical moves are tried on private clones of the board.

use tracing::debug;

use crate::board::{Board, Color, Point};
use crate::constants::BLOCK_PROBABILITY;
use crate::squares::has_square;

/// Source of randomness for move selection.
///
/// Implemented for [`fastrand::Rng`]. Tests substitute scripted sources to
/// force the blocking and fallback branches.
pub trait RandomSource {
    /// Uniform index in `0..n`. `n` is never zero.
    fn index(&mut self, n: usize) -> usize;

    /// `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool;
}

impl RandomSource for fastrand::Rng {
    fn index(&mut self, n: usize) -> usize {
        self.usize(..n)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.f64() < p
    }
}

/// Whether placing `color` at `pt` would give `color` a square.
pub fn completes_square(board: &Board, pt: Point, color: Color) -> bool {
    let mut sim = board.clone();
    sim.play(pt.0, pt.1, color) && has_square(&sim, color)
}

/// Pick the next cell for `color`. Returns `None` only when the board is full.
pub fn select_move<R: RandomSource + ?Sized>(
    board: &Board,
    color: Color,
    rng: &mut R,
) -> Option<Point> {
    let free = board.free_cells();
    if free.is_empty() {
        return None;
    }

    if let Some(&pt) = free.iter().find(|&&pt| completes_square(board, pt, color)) {
        debug!(%color, x = pt.0, y = pt.1, "winning move");
        return Some(pt);
    }

    let opponent = color.opponent();
    for &pt in &free {
        if completes_square(board, pt, opponent) && rng.chance(BLOCK_PROBABILITY) {
            debug!(%color, x = pt.0, y = pt.1, "blocking move");
            return Some(pt);
        }
    }

    let pt = free[rng.index(free.len())];
    debug!(%color, x = pt.0, y = pt.1, "random move");
    Some(pt)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    /// Replays fixed answers and records how often each method was called.
    #[derive(Default)]
    struct Scripted {
        chances: VecDeque<bool>,
        indices: VecDeque<usize>,
        chance_calls: usize,
        index_calls: usize,
    }

    impl RandomSource for Scripted {
        fn index(&mut self, n: usize) -> usize {
            self.index_calls += 1;
            let i = self.indices.pop_front().expect("unexpected index draw");
            assert!(i < n);
            i
        }

        fn chance(&mut self, p: f64) -> bool {
            assert_eq!(p, BLOCK_PROBABILITY);
            self.chance_calls += 1;
            self.chances.pop_front().expect("unexpected chance draw")
        }
    }

    fn scripted(chances: &[bool], indices: &[usize]) -> Scripted {
        Scripted {
            chances: chances.iter().copied().collect(),
            indices: indices.iter().copied().collect(),
            ..Default::default()
        }
    }

    fn setup(size: usize, white: &[Point], black: &[Point]) -> Board {
        let mut board = Board::new(size).unwrap();
        for &(x, y) in white {
            assert!(board.play(x, y, Color::White));
        }
        for &(x, y) in black {
            assert!(board.play(x, y, Color::Black));
        }
        board
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut board = Board::new(3).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                board.play(x, y, Color::White);
            }
        }
        let mut rng = scripted(&[], &[]);
        assert_eq!(select_move(&board, Color::Black, &mut rng), None);
    }

    #[test]
    fn test_takes_winning_cell_without_drawing() {
        let board = setup(5, &[(0, 0), (1, 0), (0, 1)], &[(4, 4), (3, 4), (4, 3)]);
        let mut rng = scripted(&[], &[]);
        assert_eq!(select_move(&board, Color::White, &mut rng), Some((1, 1)));
        assert_eq!(rng.chance_calls, 0);
        assert_eq!(rng.index_calls, 0);
    }

    #[test]
    fn test_win_beats_block() {
        // Black threatens (3, 3) but White wins earlier in scan order.
        let board = setup(5, &[(0, 0), (1, 0), (0, 1)], &[(4, 4), (3, 4), (4, 3)]);
        let mut rng = scripted(&[true], &[0]);
        assert_eq!(select_move(&board, Color::White, &mut rng), Some((1, 1)));
    }

    #[test]
    fn test_last_free_cell_that_wins() {
        // 3x3, White to move, only (1, 1) is free and it completes a small square.
        let board = setup(
            3,
            &[(0, 0), (1, 0), (0, 1), (2, 2)],
            &[(2, 0), (2, 1), (0, 2), (1, 2)],
        );
        assert_eq!(board.free_cells(), vec![(1, 1)]);
        let mut rng = scripted(&[], &[]);
        assert_eq!(select_move(&board, Color::White, &mut rng), Some((1, 1)));
    }

    #[test]
    fn test_block_when_draw_succeeds() {
        let board = setup(5, &[(4, 0)], &[(0, 0), (1, 0), (0, 1)]);
        let mut rng = scripted(&[true], &[]);
        assert_eq!(select_move(&board, Color::White, &mut rng), Some((1, 1)));
        assert_eq!(rng.chance_calls, 1);
        assert_eq!(rng.index_calls, 0);
    }

    #[test]
    fn test_random_when_block_draw_fails() {
        let board = setup(5, &[(4, 0)], &[(0, 0), (1, 0), (0, 1)]);
        let free = board.free_cells();
        let mut rng = scripted(&[false], &[5]);
        assert_eq!(select_move(&board, Color::White, &mut rng), Some(free[5]));
        assert_eq!(rng.chance_calls, 1);
        assert_eq!(rng.index_calls, 1);
    }

    #[test]
    fn test_redraws_for_each_blocking_candidate() {
        // Black threatens both (1, 1) and (4, 4).
        let board = setup(
            5,
            &[(2, 2)],
            &[(0, 0), (1, 0), (0, 1), (3, 3), (4, 3), (3, 4)],
        );
        let mut rng = scripted(&[false, true], &[]);
        assert_eq!(select_move(&board, Color::White, &mut rng), Some((4, 4)));
        assert_eq!(rng.chance_calls, 2);
    }

    #[test]
    fn test_no_threats_means_no_block_draws() {
        let board = setup(4, &[(0, 0)], &[(3, 3)]);
        let mut rng = scripted(&[], &[0]);
        assert_eq!(select_move(&board, Color::Black, &mut rng), Some((1, 0)));
        assert_eq!(rng.chance_calls, 0);
    }

    #[test]
    fn test_does_not_modify_board() {
        let board = setup(5, &[(4, 0)], &[(0, 0), (1, 0), (0, 1)]);
        let before = board.clone();
        let mut rng = fastrand::Rng::with_seed(7);
        select_move(&board, Color::White, &mut rng);
        assert_eq!(board, before);
    }

    #[test]
    fn test_seeded_rng_always_picks_free_cell() {
        let mut rng = fastrand::Rng::with_seed(42);
        let mut board = Board::new(4).unwrap();
        let mut color = Color::White;
        while let Some((x, y)) = select_move(&board, color, &mut rng) {
            assert!(board.play(x, y, color));
            color = color.opponent();
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_completes_square() {
        let board = setup(5, &[(0, 0), (1, 0), (0, 1)], &[]);
        assert!(completes_square(&board, (1, 1), Color::White));
        assert!(!completes_square(&board, (1, 1), Color::Black));
        assert!(!completes_square(&board, (0, 0), Color::White));
    }
}
