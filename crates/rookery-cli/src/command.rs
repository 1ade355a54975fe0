//! Player command parsing.

use rookery_core::{PieceKind, Square};

use crate::error::CliError;

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `a2 to a4`, `a2 a4` or `a2a4` -- move a piece.
    Move {
        /// Square of the piece to move.
        from: Square,
        /// Destination square.
        to: Square,
    },
    /// `board` -- print the board again.
    Board,
    /// `moves <sq>` -- list the legal destinations of a piece.
    Moves(Square),
    /// `set <name> <value>` -- change a controller setting.
    Set {
        /// Setting name.
        name: String,
        /// New value.
        value: String,
    },
    /// `help` -- list the commands.
    Help,
    /// `resign` -- give up the current game.
    Resign,
    /// `quit` -- leave without finishing the game.
    Quit,
    /// Unrecognized input (the first word, or empty for a blank line).
    Unknown(String),
}

/// Parse a single line of player input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&first) = tokens.first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match first.to_ascii_lowercase().as_str() {
        "board" => return Ok(Command::Board),
        "help" => return Ok(Command::Help),
        "resign" => return Ok(Command::Resign),
        "quit" | "exit" => return Ok(Command::Quit),
        "moves" => {
            let target = tokens.get(1).ok_or_else(|| missing("moves"))?;
            return Ok(Command::Moves(parse_square(target)?));
        }
        "set" => {
            let (Some(name), Some(value)) = (tokens.get(1), tokens.get(2)) else {
                return Err(missing("set"));
            };
            return Ok(Command::Set {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
        _ => {}
    }

    parse_move(&tokens, line)
}

/// Parse the answer to the promotion prompt: a piece name such as `queen`,
/// or its letter (`q`).
///
/// Any kind is accepted here; whether it is a legal promotion is up to
/// [`Game::promote`](rookery_core::Game::promote).
pub fn parse_promotion(line: &str) -> Result<PieceKind, CliError> {
    let answer = line.trim();
    let mut chars = answer.chars();
    let by_letter = match (chars.next(), chars.next()) {
        (Some(c), None) => PieceKind::from_fen_char(c),
        _ => None,
    };
    by_letter
        .or_else(|| PieceKind::from_name(answer))
        .ok_or_else(|| CliError::UnknownPieceKind {
            input: answer.to_string(),
        })
}

/// Parse a square name such as `e4`.
pub fn parse_square(token: &str) -> Result<Square, CliError> {
    Square::from_algebraic(token).ok_or_else(|| CliError::InvalidSquare {
        input: token.to_string(),
    })
}

fn parse_move(tokens: &[&str], line: &str) -> Result<Command, CliError> {
    let (from, to) = match tokens {
        [from, to_word, to] if to_word.eq_ignore_ascii_case("to") && looks_like_square(from) => {
            (*from, *to)
        }
        [from, to] if looks_like_square(from) && !to.eq_ignore_ascii_case("to") => (*from, *to),
        [joined] if joined.len() == 4 => match (joined.get(..2), joined.get(2..)) {
            (Some(from), Some(to)) if looks_like_square(from) => (from, to),
            _ => return Ok(Command::Unknown(joined.to_string())),
        },
        [first, ..] if looks_like_square(first) => {
            return Err(CliError::MalformedMove {
                input: line.trim().to_string(),
            });
        }
        [first, ..] => return Ok(Command::Unknown(first.to_string())),
        [] => return Ok(Command::Unknown(String::new())),
    };

    Ok(Command::Move {
        from: parse_square(from)?,
        to: parse_square(to)?,
    })
}

/// A letter followed by a digit; whether it is on the board is checked later.
fn looks_like_square(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1].is_ascii_digit()
}

fn missing(command: &str) -> CliError {
    CliError::MissingArgument {
        command: command.to_string(),
    }
}
