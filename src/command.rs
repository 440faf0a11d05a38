//! Parsing of one line of player input into a [`Command`].
//!
//! Grammar: `<verb> [row] [col]`. Tokens past the ones a verb needs are
//! ignored. Coordinates are lenient: a token that is not a number reads as
//! `0`, a negative number is rejected.

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
use core::fmt;

/// A single player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reveal { row: usize, col: usize },
    Flag { row: usize, col: usize },
    Guess { row: usize, col: usize },
    Help,
    NoFog,
    Quit,
    Close,
}

impl Command {
    /// Whether running this command costs a turn.
    pub fn consumes_turn(&self) -> bool {
        !matches!(self, Command::Help)
    }
}

/// Why a line could not be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    UnknownVerb(String),
    MissingCoordinates(&'static str),
    NegativeCoordinate(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Invalid Command: (empty)"),
            ParseError::UnknownVerb(verb) => write!(f, "Invalid Command: {}", verb),
            ParseError::MissingCoordinates(verb) => {
                write!(f, "Invalid Command: {} needs a row and a column", verb)
            }
            ParseError::NegativeCoordinate(tok) => {
                write!(f, "Invalid Command: coordinate {} is negative", tok)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Read a coordinate token; anything non-numeric counts as `0`.
fn parse_coordinate(token: &str) -> Result<usize, ParseError> {
    match token.parse::<i64>() {
        Ok(n) if n < 0 => Err(ParseError::NegativeCoordinate(token.to_string())),
        Ok(n) => Ok(n as usize),
        Err(_) => Ok(0),
    }
}

/// Parse one input line.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let mut tokens = line.split_whitespace();
    let verb = tokens.next().ok_or(ParseError::Empty)?;

    let (name, build): (&'static str, fn(usize, usize) -> Command) = match verb {
        "r" | "reveal" => ("reveal", |row: usize, col: usize| Command::Reveal { row, col }),
        "f" | "flag" => ("flag", |row: usize, col: usize| Command::Flag { row, col }),
        "g" | "guess" => ("guess", |row: usize, col: usize| Command::Guess { row, col }),
        "h" | "help" => return Ok(Command::Help),
        "q" | "quit" => return Ok(Command::Quit),
        "c" | "close" => return Ok(Command::Close),
        "noFog" => return Ok(Command::NoFog),
        other => return Err(ParseError::UnknownVerb(other.to_string())),
    };

    match (tokens.next(), tokens.next()) {
        (Some(r), Some(c)) => Ok(build(parse_coordinate(r)?, parse_coordinate(c)?)),
        _ => Err(ParseError::MissingCoordinates(name)),
    }
}

impl core::str::FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
