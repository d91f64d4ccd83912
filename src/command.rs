//! Parsing of console commands.
//!
//! Keywords are case-insensitive:
//!
//! - `GAME N, TYPE1 C1, TYPE2 C2` - start a game, e.g. `GAME 5, user W, comp B`
//! - `MOVE X, Y` or `MOVE X Y` - place a stone for the side to move
//! - `HELP` - list commands
//! - `EXIT` - quit

use crate::board::Color;
use crate::game::{Player, PlayerKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Game {
        size: usize,
        players: [Player; 2],
    },
    Move {
        x: usize,
        y: usize,
    },
    Help,
    Exit,
}

/// Why a line could not be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    UnknownKeyword(String),
    MissingArguments(&'static str),
    WrongArgumentCount { command: &'static str, expected: usize, got: usize },
    InvalidNumber(String),
    InvalidPlayer(String),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command"),
            CommandError::UnknownKeyword(word) => write!(f, "unknown command: {word}"),
            CommandError::MissingArguments(command) => write!(f, "{command} needs arguments"),
            CommandError::WrongArgumentCount {
                command,
                expected,
                got,
            } => write!(f, "{command} takes {expected} arguments (got {got})"),
            CommandError::InvalidNumber(s) => write!(f, "not a valid number: {s:?}"),
            CommandError::InvalidPlayer(s) => write!(f, "invalid player: {s:?}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse_command(line)
    }
}

/// Parse one input line.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(CommandError::Empty);
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    match keyword.to_uppercase().as_str() {
        "GAME" => parse_game(rest),
        "MOVE" => parse_move(rest),
        "HELP" => Ok(Command::Help),
        "EXIT" => Ok(Command::Exit),
        _ => Err(CommandError::UnknownKeyword(keyword.to_string())),
    }
}

fn parse_game(args: &str) -> Result<Command, CommandError> {
    if args.is_empty() {
        return Err(CommandError::MissingArguments("GAME"));
    }
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(CommandError::WrongArgumentCount {
            command: "GAME",
            expected: 3,
            got: parts.len(),
        });
    }
    let size = parse_number(parts[0])?;
    let players = [parse_player(parts[1])?, parse_player(parts[2])?];
    Ok(Command::Game { size, players })
}

fn parse_move(args: &str) -> Result<Command, CommandError> {
    if args.is_empty() {
        return Err(CommandError::MissingArguments("MOVE"));
    }
    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    if parts.len() != 2 {
        return Err(CommandError::WrongArgumentCount {
            command: "MOVE",
            expected: 2,
            got: parts.len(),
        });
    }
    Ok(Command::Move {
        x: parse_number(parts[0])?,
        y: parse_number(parts[1])?,
    })
}

fn parse_number(s: &str) -> Result<usize, CommandError> {
    s.parse()
        .map_err(|_| CommandError::InvalidNumber(s.to_string()))
}

/// Parse `TYPE COLOR`, e.g. `user W` or `COMP b`.
pub fn parse_player(s: &str) -> Result<Player, CommandError> {
    let invalid = || CommandError::InvalidPlayer(s.to_string());

    let words: Vec<&str> = s.split_whitespace().collect();
    let [kind, color] = words.as_slice() else {
        return Err(invalid());
    };

    let kind = match kind.to_lowercase().as_str() {
        "user" => PlayerKind::User,
        "comp" => PlayerKind::Computer,
        _ => return Err(invalid()),
    };

    let mut chars = color.chars();
    let color = match (chars.next(), chars.next()) {
        (Some(c), None) => Color::from_symbol(c).ok_or_else(invalid)?,
        _ => return Err(invalid()),
    };

    Ok(Player { kind, color })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_game() {
        assert_eq!(
            parse_command("GAME 5, user W, comp B"),
            Ok(Command::Game {
                size: 5,
                players: [Player::user(Color::White), Player::computer(Color::Black)],
            })
        );
    }

    #[test]
    fn test_parse_game_extra_spaces() {
        assert_eq!(
            parse_command("GAME   5  ,   user   W  ,   comp   B   "),
            Ok(Command::Game {
                size: 5,
                players: [Player::user(Color::White), Player::computer(Color::Black)],
            })
        );
    }

    #[test]
    fn test_keywords_case_insensitive() {
        for line in ["game 3, USER b, Comp w", "Game 3, user B, comp W"] {
            assert_eq!(
                parse_command(line),
                Ok(Command::Game {
                    size: 3,
                    players: [Player::user(Color::Black), Player::computer(Color::White)],
                })
            );
        }
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("Exit"), Ok(Command::Exit));
    }

    #[test]
    fn test_parse_move() {
        let expected = Ok(Command::Move { x: 2, y: 3 });
        assert_eq!(parse_command("MOVE 2, 3"), expected);
        assert_eq!(parse_command("MOVE 2 3"), expected);
        assert_eq!(parse_command("move 2,3"), expected);
        assert_eq!(parse_command("  MOVE   2 ,  3  "), expected);
    }

    #[test]
    fn test_parse_move_errors() {
        assert_eq!(
            parse_command("MOVE"),
            Err(CommandError::MissingArguments("MOVE"))
        );
        assert!(matches!(
            parse_command("MOVE 1"),
            Err(CommandError::WrongArgumentCount { got: 1, .. })
        ));
        assert!(matches!(
            parse_command("MOVE 1, 2, 3"),
            Err(CommandError::WrongArgumentCount { got: 3, .. })
        ));
        assert_eq!(
            parse_command("MOVE -1, 0"),
            Err(CommandError::InvalidNumber("-1".to_string()))
        );
        assert_eq!(
            parse_command("MOVE a, 0"),
            Err(CommandError::InvalidNumber("a".to_string()))
        );
    }

    #[test]
    fn test_parse_game_errors() {
        assert_eq!(
            parse_command("GAME"),
            Err(CommandError::MissingArguments("GAME"))
        );
        assert!(matches!(
            parse_command("GAME 5, user W"),
            Err(CommandError::WrongArgumentCount { got: 2, .. })
        ));
        assert_eq!(
            parse_command("GAME x, user W, comp B"),
            Err(CommandError::InvalidNumber("x".to_string()))
        );
        assert!(matches!(
            parse_command("GAME 5, robot W, comp B"),
            Err(CommandError::InvalidPlayer(_))
        ));
    }

    #[test]
    fn test_game_with_invalid_size_still_parses() {
        // Size limits are enforced when the game starts.
        assert!(matches!(
            parse_command("GAME 2, user W, comp B"),
            Ok(Command::Game { size: 2, .. })
        ));
    }

    #[test]
    fn test_empty_and_unknown() {
        assert_eq!(parse_command(""), Err(CommandError::Empty));
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
        assert_eq!(
            parse_command("INVALID_COMMAND"),
            Err(CommandError::UnknownKeyword("INVALID_COMMAND".to_string()))
        );
    }

    #[test]
    fn test_parse_player() {
        assert_eq!(parse_player("user W"), Ok(Player::user(Color::White)));
        assert_eq!(parse_player("COMP b"), Ok(Player::computer(Color::Black)));
        assert!(parse_player("user").is_err());
        assert!(parse_player("user W extra").is_err());
        assert!(parse_player("user WB").is_err());
        assert!(parse_player("user R").is_err());
        assert!(parse_player("human W").is_err());
    }

    #[test]
    fn test_from_str() {
        let cmd: Command = "MOVE 0, 1".parse().unwrap();
        assert_eq!(cmd, Command::Move { x: 0, y: 1 });
    }
}
