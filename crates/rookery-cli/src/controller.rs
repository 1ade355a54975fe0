//! The turn loop: prompts, move application, promotion and game-over handling.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use rookery_core::{Board, CheckState, Game, Piece, Square, SymbolSet, Team};

use crate::command::{Command, parse_command, parse_promotion};
use crate::config::ControllerConfig;
use crate::error::CliError;

const WELCOME: &str = "Welcome to Chess! State your moves in the form: a2 to a4";

const PROMOTION_PROMPT: &str = "Choose what your pawn will become: knight, bishop, rook, queen";

const HELP: &str = "\
commands:
  a2 to a4                   move a piece (also a2 a4, a2a4)
  moves <square>             list where a piece can go
  board                      print the board
  set symbols unicode|ascii  change the board glyphs
  set hints on|off           show moves that answer a check
  resign                     give up this game
  quit                       leave";

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The side to move was mated.
    Checkmate {
        /// The mated side.
        loser: Team,
    },
    /// The side to move had no legal move and was not in check.
    Stalemate,
    /// A player gave up.
    Resigned {
        /// The side that resigned.
        loser: Team,
    },
    /// The player quit, or input ran out, before the game was decided.
    Abandoned,
}

/// Runs games between two players sharing one text stream.
///
/// White moves first. Each turn the controller announces check, detects
/// checkmate and stalemate, then reads commands until a legal move is
/// made, asking for a promotion piece when a pawn reaches the far row.
pub struct TurnController<R, W> {
    input: R,
    output: W,
    start: Board,
    game: Game,
    turn: Team,
    config: ControllerConfig,
}

impl<R: BufRead, W: Write> TurnController<R, W> {
    /// Create a controller whose games begin from the standard position.
    pub fn new(input: R, output: W) -> Self {
        Self::with_start(input, output, Board::starting_position())
    }

    /// Create a controller whose games begin from `start`, White to move.
    pub fn with_start(input: R, output: W, start: Board) -> Self {
        Self {
            input,
            output,
            game: Game::from_board(start.clone()),
            start,
            turn: Team::White,
            config: ControllerConfig::default(),
        }
    }

    /// Replace the display settings.
    pub fn with_config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    /// The game in progress, or the last one played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The side to move.
    pub fn turn(&self) -> Team {
        self.turn
    }

    /// Current display settings.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Play games until the players decline a rematch, quit, or input ends.
    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            let outcome = self.play_game()?;
            info!(?outcome, "game over");

            let loser = match outcome {
                Outcome::Abandoned => break,
                Outcome::Checkmate { loser } => {
                    writeln!(self.output, "CHECKMATE. {} LOSES", shout(loser))?;
                    Some(loser)
                }
                Outcome::Resigned { loser } => {
                    writeln!(self.output, "{0} RESIGNS. {0} LOSES", shout(loser))?;
                    Some(loser)
                }
                Outcome::Stalemate => {
                    writeln!(self.output, "STALEMATE. TIE GAME")?;
                    None
                }
            };
            debug!(?loser, "result announced");

            writeln!(self.output, "Do you wanna play again?")?;
            self.output.flush()?;
            let again = self.read_line()?;
            if !again.is_some_and(|answer| answer.to_ascii_lowercase().starts_with('y')) {
                break;
            }
        }

        writeln!(self.output, "Thanks for playing!")?;
        self.output.flush()?;
        info!("controller shutting down");
        Ok(())
    }

    /// Play one game from the start position and report how it ended.
    pub fn play_game(&mut self) -> Result<Outcome, CliError> {
        self.game = Game::from_board(self.start.clone());
        self.turn = Team::White;
        info!("new game");
        writeln!(self.output, "{WELCOME}")?;
        self.print_board()?;

        loop {
            let team = self.turn;
            match self.game.check_status(team) {
                CheckState::Checkmate(_) => {
                    writeln!(self.output, "{} KING IN CHECK", shout(team))?;
                    return Ok(Outcome::Checkmate { loser: team });
                }
                CheckState::InCheck(king) => {
                    debug!(team = %team, king = %king, "announcing check");
                    writeln!(self.output, "{} KING IN CHECK", shout(team))?;
                    if self.config.hints {
                        self.print_hints(team)?;
                    }
                }
                CheckState::NotInCheck => {
                    if self.game.stalemate(team) {
                        return Ok(Outcome::Stalemate);
                    }
                }
            }

            if let Some(outcome) = self.take_turn(team)? {
                return Ok(outcome);
            }
            self.print_board()?;
            self.turn = !team;
        }
    }

    /// Read commands until `team` has made a move. `Some` ends the game.
    fn take_turn(&mut self, team: Team) -> Result<Option<Outcome>, CliError> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{} TO MOVE:", shout(team))?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(Some(Outcome::Abandoned));
            };
            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(e) => {
                    warn!(error = %e, "unreadable command");
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };

            match command {
                Command::Move { from, to } => match self.game.apply_move(from, to, team) {
                    Ok(()) => {
                        if let Some(square) = self.game.pending_promotion()
                            && !self.promote(square)?
                        {
                            return Ok(Some(Outcome::Abandoned));
                        }
                        return Ok(None);
                    }
                    Err(e) => {
                        warn!(error = %e, "move rejected");
                        writeln!(self.output, "{e}")?;
                    }
                },
                Command::Board => self.print_board()?,
                Command::Moves(square) => self.print_moves(square)?,
                Command::Set { name, value } => match self.config.apply(&name, &value) {
                    Ok(()) => writeln!(self.output, "{name} set to {value}")?,
                    Err(e) => {
                        warn!(error = %e, "setting rejected");
                        writeln!(self.output, "{e}")?;
                    }
                },
                Command::Help => writeln!(self.output, "{HELP}")?,
                Command::Resign => return Ok(Some(Outcome::Resigned { loser: team })),
                Command::Quit => return Ok(Some(Outcome::Abandoned)),
                Command::Unknown(word) if word.is_empty() => {}
                Command::Unknown(word) => {
                    writeln!(self.output, "unknown command: {word} (try 'help')")?;
                }
            }
        }
    }

    /// Ask for a promotion piece until one is applied. `false` if input ended.
    fn promote(&mut self, square: Square) -> Result<bool, CliError> {
        loop {
            writeln!(self.output, "{PROMOTION_PROMPT}")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };

            let kind = match parse_promotion(&line) {
                Ok(kind) => kind,
                Err(e) => {
                    warn!(error = %e, "unreadable promotion");
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };
            match self.game.promote(square, kind) {
                Ok(()) => return Ok(true),
                Err(e) => {
                    warn!(error = %e, "promotion rejected");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }

    fn print_board(&mut self) -> Result<(), CliError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.game.board().pretty(self.config.symbols))?;
        Ok(())
    }

    fn print_moves(&mut self, square: Square) -> Result<(), CliError> {
        let moves = self.game.legal_moves(square);
        if moves.is_empty() {
            writeln!(self.output, "{square}: no legal moves")?;
        } else {
            writeln!(self.output, "{square}: {}", join_squares(&moves))?;
        }
        Ok(())
    }

    fn print_hints(&mut self, team: Team) -> Result<(), CliError> {
        for (square, moves) in self.game.resolving_moves(team) {
            let glyph = self
                .game
                .board()
                .piece_at(square)
                .map_or('?', |piece| symbol(piece, self.config.symbols));
            writeln!(
                self.output,
                "Potential move: {glyph} on {square} can move to {}",
                join_squares(&moves)
            )?;
        }
        Ok(())
    }

    /// Next input line, trimmed. `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>, CliError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input closed");
            return Ok(None);
        }
        let line = line.trim().to_string();
        debug!(line = %line, "received input");
        Ok(Some(line))
    }
}

fn shout(team: Team) -> String {
    team.name().to_ascii_uppercase()
}

fn symbol(piece: &Piece, symbols: SymbolSet) -> char {
    match symbols {
        SymbolSet::Unicode => piece.glyph(),
        SymbolSet::Ascii => piece.fen_char(),
    }
}

fn join_squares(squares: &[Square]) -> String {
    squares
        .iter()
        .map(Square::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
