//! Turn controller.
//!
//! [`Game`] owns the board and the two players, alternates turns, lets
//! computer players move on their own, and ends the game on a square or a
//! full board. Every call reports what happened as a list of [`Event`]s so a
//! front end can echo computer moves made on its behalf.

use tracing::{debug, info, trace, warn};

use crate::board::{Board, Color, Point};
use crate::error::{ConfigError, MoveError};
use crate::selector::{RandomSource, select_move};
use crate::squares::find_square;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    User,
    Computer,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub kind: PlayerKind,
    pub color: Color,
}

impl Player {
    pub fn user(color: Color) -> Self {
        Self {
            kind: PlayerKind::User,
            color,
        }
    }

    pub fn computer(color: Color) -> Self {
        Self {
            kind: PlayerKind::Computer,
            color,
        }
    }

    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Color),
    Draw,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    NotStarted,
    Active,
    Finished(Outcome),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Started,
    Placed { color: Color, point: Point },
    Finished(Outcome),
}

/// Board and players of the current game.
struct Round {
    board: Board,
    players: [Player; 2],
    /// Index into `players` of the side to move.
    mover: usize,
}

pub struct Game<R: RandomSource = fastrand::Rng> {
    round: Option<Round>,
    status: Status,
    rng: R,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    /// A game whose computer moves are reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(fastrand::Rng::with_seed(seed))
    }
}

impl<R: RandomSource> Game<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            round: None,
            status: Status::NotStarted,
            rng,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn board(&self) -> Option<&Board> {
        self.round.as_ref().map(|round| &round.board)
    }

    /// The player whose turn it is, while a game is active.
    pub fn mover(&self) -> Option<Player> {
        match (&self.round, self.status) {
            (Some(round), Status::Active) => Some(round.players[round.mover]),
            _ => None,
        }
    }

    /// Start a new game, replacing any previous one. Player 1 moves first and,
    /// if it is a computer, moves before this returns.
    ///
    /// On error the previous game is left untouched.
    pub fn start(
        &mut self,
        size: usize,
        player1: Player,
        player2: Player,
    ) -> Result<Vec<Event>, ConfigError> {
        if player1.color == player2.color {
            return Err(ConfigError::SameColors(player1.color));
        }
        let board = Board::new(size)?;

        info!(size, ?player1, ?player2, "new game");
        self.round = Some(Round {
            board,
            players: [player1, player2],
            mover: 0,
        });
        self.status = Status::Active;

        let mut events = vec![Event::Started];
        self.play_computers(&mut events);
        Ok(events)
    }

    /// Place a stone for `color`, then let any computer player answer.
    pub fn apply_move(&mut self, color: Color, x: usize, y: usize) -> Result<Vec<Event>, MoveError> {
        let mover = self.mover().ok_or(MoveError::NotActive)?;
        if mover.color != color {
            return Err(MoveError::NotYourTurn {
                color,
                mover: mover.color,
            });
        }

        let mut events = Vec::new();
        if !self.place(x, y, &mut events) {
            debug!(%color, x, y, "illegal placement");
            return Err(MoveError::IllegalPlacement { x, y });
        }
        self.play_computers(&mut events);
        Ok(events)
    }

    /// Place the mover's stone at `(x, y)` and settle the turn: finish the
    /// game on a square or full board, otherwise hand over to the other side.
    fn place(&mut self, x: usize, y: usize, events: &mut Vec<Event>) -> bool {
        let Some(round) = self.round.as_mut() else {
            return false;
        };
        let color = round.players[round.mover].color;
        if !round.board.play(x, y, color) {
            return false;
        }
        debug!(%color, x, y, "placed");
        trace!("\n{}", round.board);
        events.push(Event::Placed {
            color,
            point: (x, y),
        });

        let outcome = if let Some(square) = find_square(&round.board, color) {
            info!(%color, shape = square.shape.name, anchor = ?square.anchor, "square completed");
            Some(Outcome::Winner(color))
        } else if round.board.is_full() {
            Some(Outcome::Draw)
        } else {
            round.mover = 1 - round.mover;
            None
        };
        if let Some(outcome) = outcome {
            self.finish(outcome, events);
        }
        true
    }

    /// Let computer players move until a user is to move or the game ends.
    fn play_computers(&mut self, events: &mut Vec<Event>) {
        while let Some(mover) = self.mover() {
            if !mover.is_computer() {
                break;
            }
            let choice = match &self.round {
                Some(round) => select_move(&round.board, mover.color, &mut self.rng),
                None => None,
            };
            match choice {
                Some((x, y)) => {
                    let placed = self.place(x, y, events);
                    debug_assert!(placed, "selected cell ({x}, {y}) is not free");
                    if !placed {
                        warn!(x, y, "selected cell is not free");
                        break;
                    }
                }
                None => self.finish(Outcome::Draw, events),
            }
        }
    }

    fn finish(&mut self, outcome: Outcome, events: &mut Vec<Event>) {
        info!(?outcome, "game finished");
        self.status = Status::Finished(outcome);
        events.push(Event::Finished(outcome));
    }
}
