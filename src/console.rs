//! Line-oriented game console.
//!
//! Reads one command per line (see [`crate::command`]) and answers with
//! plain text lines:
//!
//! - `New game started`
//! - `W (x, y)` for every stone placed, including computer moves
//! - `Game finished. W wins!` or `Game finished. Draw`
//! - `Incorrect command` for anything malformed or refused
//!
//! ## Example
//!
//! ```ignore
//! use squares::console::Console;
//! let mut console = Console::new();
//! console.run()?;
//! ```

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::command::{Command, parse_command};
use crate::game::{Event, Game, Outcome};
use crate::selector::RandomSource;

pub const INCORRECT_COMMAND: &str = "Incorrect command";

const HELP: &[&str] = &[
    "Available commands:",
    "GAME N, TYPE1 C1, TYPE2 C2 - start a new game (example: GAME 5, user W, comp B)",
    "MOVE X, Y - place a stone (example: MOVE 2, 3)",
    "HELP - list commands",
    "EXIT - quit",
];

/// Result of executing one line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Reply {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }

    fn incorrect() -> Self {
        Self::lines(vec![INCORRECT_COMMAND.to_string()])
    }
}

pub struct Console<R: RandomSource = fastrand::Rng> {
    game: Game<R>,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        Self::with_game(Game::new())
    }
}

impl<R: RandomSource> Console<R> {
    pub fn with_game(game: Game<R>) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    /// Run the command loop on stdin/stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `EXIT` or end of input.
    pub fn run_with<I: BufRead, O: Write>(&mut self, input: I, mut output: O) -> io::Result<()> {
        for line in input.lines() {
            let reply = self.execute(&line?);
            for text in &reply.lines {
                writeln!(output, "{text}")?;
            }
            output.flush()?;
            if reply.quit {
                break;
            }
        }
        Ok(())
    }

    /// Execute one input line.
    pub fn execute(&mut self, line: &str) -> Reply {
        match parse_command(line) {
            Ok(command) => self.execute_command(command),
            Err(err) => {
                debug!(%err, line, "rejected command");
                Reply::incorrect()
            }
        }
    }

    fn execute_command(&mut self, command: Command) -> Reply {
        match command {
            Command::Game { size, players } => {
                match self.game.start(size, players[0], players[1]) {
                    Ok(events) => Reply::lines(render(&events)),
                    Err(err) => {
                        debug!(%err, "game not started");
                        Reply::incorrect()
                    }
                }
            }

            Command::Move { x, y } => {
                let Some(mover) = self.game.mover() else {
                    debug!("move without active game");
                    return Reply::incorrect();
                };
                if mover.is_computer() {
                    return Reply::incorrect();
                }
                match self.game.apply_move(mover.color, x, y) {
                    Ok(events) => Reply::lines(render(&events)),
                    Err(err) => {
                        debug!(%err, "move refused");
                        Reply::incorrect()
                    }
                }
            }

            Command::Help => Reply::lines(HELP.iter().map(|s| s.to_string()).collect()),

            Command::Exit => Reply {
                lines: vec!["Bye".to_string()],
                quit: true,
            },
        }
    }
}

/// Turn game events into console lines.
pub fn render(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .map(|event| match event {
            Event::Started => "New game started".to_string(),
            Event::Placed { color, point } => format!("{color} ({}, {})", point.0, point.1),
            Event::Finished(Outcome::Winner(color)) => format!("Game finished. {color} wins!"),
            Event::Finished(Outcome::Draw) => "Game finished. Draw".to_string(),
        })
        .collect()
}
