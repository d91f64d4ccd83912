//! Stateless requests on board snapshots.
//!
//! A snapshot carries the board size, the cells as one character each in
//! row-major order, and the color to move. Every request builds its own
//! [`Board`] from the snapshot; nothing is kept between requests.
//!
//! The [`serve`] loop speaks JSON lines: one [`Request`] per input line, one
//! response object per output line.
//!
//! ```text
//! {"type":"nextMove","board":{"size":3,"data":"W.B......","nextPlayerColor":"w"}}
//! {"x":1,"y":0,"color":"w"}
//! {"type":"status","board":{"size":3,"data":".........","nextPlayerColor":"b"}}
//! {"status":"ongoing"}
//! ```

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::board::{Board, Color};
use crate::constants::{MAX_SIZE, MIN_SIZE};
use crate::selector::{RandomSource, select_move};
use crate::squares::has_square;

/// Board state as sent by a client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub size: i64,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub next_player_color: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Request {
    NextMove { board: BoardSnapshot },
    Status { board: BoardSnapshot },
    Health,
}

/// A computed move. `color` echoes the snapshot's `nextPlayerColor`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleMove {
    pub x: usize,
    pub y: usize,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub result: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Move(SimpleMove),
    Status(GameStatus),
    Message { message: String },
    Error { error: String },
}

pub const NO_MOVES_MESSAGE: &str = "Game finished or no moves available";

#[derive(Debug)]
pub enum SnapshotError {
    Malformed(serde_json::Error),
    InvalidSize,
    SizeTooLarge,
    MissingData,
    InvalidColor,
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::Malformed(err) => write!(f, "Malformed request: {err}"),
            SnapshotError::InvalidSize => write!(f, "Board size must be greater than 2"),
            SnapshotError::SizeTooLarge => write!(f, "Board size must be at most {MAX_SIZE}"),
            SnapshotError::MissingData => write!(f, "Board data cannot be null or empty"),
            SnapshotError::InvalidColor => write!(f, "nextPlayerColor must be 'w' or 'b'"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Malformed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Malformed(err)
    }
}

impl BoardSnapshot {
    /// Validate the snapshot and build its board and color to move.
    ///
    /// `w`/`W` is White and `b`/`B` is Black; any other character is empty.
    /// Missing trailing cells stay empty and extra characters are ignored.
    pub fn to_board(&self) -> Result<(Board, Color), SnapshotError> {
        let size = usize::try_from(self.size)
            .ok()
            .filter(|&size| size >= MIN_SIZE)
            .ok_or(SnapshotError::InvalidSize)?;
        if size > MAX_SIZE {
            return Err(SnapshotError::SizeTooLarge);
        }
        let data = self
            .data
            .as_deref()
            .filter(|data| !data.is_empty())
            .ok_or(SnapshotError::MissingData)?;
        let color = self
            .next_player_color
            .as_deref()
            .and_then(single_color)
            .ok_or(SnapshotError::InvalidColor)?;

        let mut board = Board::new(size).map_err(|_| SnapshotError::InvalidSize)?;
        for (i, c) in data.chars().take(size * size).enumerate() {
            if let Some(stone) = Color::from_symbol(c) {
                board.play(i % size, i / size, stone);
            }
        }
        Ok((board, color))
    }
}

fn single_color(s: &str) -> Option<Color> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Color::from_symbol(c),
        _ => None,
    }
}

/// Pick a move for the snapshot's color, or `None` on a full board.
pub fn next_move<R: RandomSource + ?Sized>(
    snapshot: &BoardSnapshot,
    rng: &mut R,
) -> Result<Option<SimpleMove>, SnapshotError> {
    let (board, color) = snapshot.to_board()?;
    let pt = select_move(&board, color, rng);
    Ok(pt.map(|(x, y)| SimpleMove {
        x,
        y,
        color: snapshot.next_player_color.clone().unwrap_or_default(),
    }))
}

/// Derive the game status. White's squares are checked before Black's.
pub fn status(snapshot: &BoardSnapshot) -> Result<GameStatus, SnapshotError> {
    let (board, _) = snapshot.to_board()?;
    let result = if has_square(&board, Color::White) {
        Some(format!("{} wins", Color::White))
    } else if has_square(&board, Color::Black) {
        Some(format!("{} wins", Color::Black))
    } else if board.is_full() {
        Some("Draw".to_string())
    } else {
        None
    };
    let status = if result.is_some() { "finished" } else { "ongoing" };
    Ok(GameStatus {
        status: status.to_string(),
        result,
    })
}

/// Answer one request.
pub fn handle<R: RandomSource + ?Sized>(request: &Request, rng: &mut R) -> Response {
    let outcome = match request {
        Request::NextMove { board } => next_move(board, rng).map(|mv| match mv {
            Some(mv) => Response::Move(mv),
            None => Response::Message {
                message: NO_MOVES_MESSAGE.to_string(),
            },
        }),
        Request::Status { board } => status(board).map(Response::Status),
        Request::Health => Ok(Response::Status(GameStatus {
            status: "OK".to_string(),
            result: None,
        })),
    };
    outcome.unwrap_or_else(|err| {
        debug!(%err, "rejected snapshot");
        Response::Error {
            error: err.to_string(),
        }
    })
}

/// Answer one raw JSON line.
pub fn handle_line<R: RandomSource + ?Sized>(line: &str, rng: &mut R) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => handle(&request, rng),
        Err(err) => {
            let err = SnapshotError::from(err);
            warn!(%err, "unreadable request");
            Response::Error {
                error: err.to_string(),
            }
        }
    }
}

/// Serve JSON-line requests until end of input. Blank lines are skipped.
pub fn serve<I: BufRead, O: Write, R: RandomSource + ?Sized>(
    input: I,
    mut output: O,
    rng: &mut R,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let response = handle_line(line, rng);
        serde_json::to_writer(&mut output, &response)?;
        writeln!(output)?;
        output.flush()?;
    }
    Ok(())
}
