//! Line-oriented text driver for playing games.
//!
//! Each input line is either a move (`f3-d5`) or a command. After every
//! accepted line the driver lets automated sides move until a manually
//! controlled side is to move or the game ends.
//!
//! ## Commands
//!
//! - `<from>-<to>` - Make a move for the side to move
//! - `new` - Start a new game from the standard opening
//! - `auto <side>` - Let the search engine play `side`
//! - `manual <side>` - Read `side`'s moves from the input
//! - `random <side>` - Play `side` with uniformly random legal moves
//! - `limit <n>` - Declare a tie after `n` moves per side
//! - `seed <n>` - Reseed the random player
//! - `undo` - Take back moves until a manual side is to move
//! - `dump` - Print the board
//! - `help` - List commands
//! - `quit` - Exit
//!
//! ## Example
//!
//! ```ignore
//! use loa_rust::game::Game;
//! let mut game = Game::new();
//! game.run(std::io::stdin().lock(), std::io::stdout())?;
//! ```

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::board::{Board, Outcome};
use crate::constants::{DEFAULT_MOVE_LIMIT, SEARCH_DEPTH};
use crate::moves::{Move, ParseMoveError};
use crate::piece::Piece;
use crate::search::MachinePlayer;

const HELP: &str = "\
Commands:
  <from>-<to>      make a move, e.g. f3-d5
  new              start a new game
  auto <side>      let the machine play side (black or white)
  manual <side>    enter side's moves by hand
  random <side>    play side with random legal moves
  limit <n>        tie after n moves per side
  seed <n>         reseed the random player
  undo             take back the last manual move
  dump             print the board
  help             print this message
  quit             exit";

/// Who supplies the moves for one side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Controller {
    /// Moves are typed in.
    Manual,
    /// Moves come from [`MachinePlayer`].
    Auto,
    /// Moves are drawn uniformly from the legal moves.
    Random,
}

/// Settings a game is started with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Search depth of the machine player
    pub depth: usize,
    /// Moves per side before a tie
    pub move_limit: usize,
    /// Seed for the random player; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Controller of the black pieces
    pub black: Controller,
    /// Controller of the white pieces
    pub white: Controller,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            depth: SEARCH_DEPTH,
            move_limit: DEFAULT_MOVE_LIMIT,
            seed: None,
            black: Controller::Manual,
            white: Controller::Auto,
        }
    }
}

/// A rejected input line. The game state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("missing argument to `{0}`")]
    MissingArgument(&'static str),
    #[error("invalid side `{0}`: expected black or white")]
    InvalidSide(String),
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error(transparent)]
    BadMove(#[from] ParseMoveError),
    #[error("illegal move: {0}")]
    Illegal(Move),
    #[error("the game is over; type `new` to play again")]
    GameOver,
    #[error("move limit {limit} too small: {made} moves already made")]
    LimitTooSmall { limit: usize, made: usize },
    #[error("no moves to undo")]
    NothingToUndo,
}

/// Game driver state.
pub struct Game {
    /// The authoritative board
    board: Board,
    /// Controllers for black and white, in that order
    controllers: [Controller; 2],
    /// Search engine used by `Auto` sides
    machine: MachinePlayer,
    /// Random source used by `Random` sides
    rng: fastrand::Rng,
    /// Per-side move limit applied to every new game
    move_limit: usize,
    /// Whether the result of the current game has been reported
    announced: bool,
    /// Set by `quit`
    quit: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game with default settings: black manual, white automated.
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    /// A game configured by `config`.
    ///
    /// # Panics
    /// If `config.depth` or `config.move_limit` is 0.
    pub fn with_config(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        let mut board = Board::default();
        board.set_move_limit(config.move_limit);
        Self {
            board,
            controllers: [config.black, config.white],
            machine: MachinePlayer::with_depth(config.depth),
            rng,
            move_limit: config.move_limit,
            announced: false,
            quit: false,
        }
    }

    /// The current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Who plays `side`.
    pub fn controller(&self, side: Piece) -> Controller {
        self.controllers[Self::slot(side)]
    }

    /// Change who plays `side`.
    pub fn set_controller(&mut self, side: Piece, controller: Controller) {
        self.controllers[Self::slot(side)] = controller;
    }

    /// True once `quit` has been executed.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    fn slot(side: Piece) -> usize {
        match side {
            Piece::Black => 0,
            Piece::White => 1,
            Piece::Empty => panic!("Piece::Empty has no controller"),
        }
    }

    /// Read lines from `input` until end of input or `quit`, writing
    /// responses to `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in self.start() {
            writeln!(output, "{line}")?;
        }
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match self.execute(line) {
                Ok(responses) => {
                    for response in responses {
                        writeln!(output, "{response}")?;
                    }
                }
                Err(err) => {
                    warn!(input = line, %err, "rejected input");
                    writeln!(output, "Error: {err}")?;
                }
            }
            output.flush()?;

            if self.quit {
                break;
            }
        }
        Ok(())
    }

    /// Let automated sides move from the current position. Returns the
    /// lines reporting their moves.
    pub fn start(&mut self) -> Vec<String> {
        self.play_automatic()
    }

    /// Execute one input line and return the lines to print.
    pub fn execute(&mut self, line: &str) -> Result<Vec<String>, CommandError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            return Ok(Vec::new());
        };

        let mut responses = match command.to_lowercase().as_str() {
            "new" => {
                self.new_game();
                Vec::new()
            }
            "auto" => self.assign(args, Controller::Auto, "auto")?,
            "manual" => self.assign(args, Controller::Manual, "manual")?,
            "random" => self.assign(args, Controller::Random, "random")?,
            "limit" => {
                let limit = Self::number_arg(args, "limit")? as usize;
                let made = self.board.moves_made();
                if limit.saturating_mul(2) <= made {
                    return Err(CommandError::LimitTooSmall { limit, made });
                }
                self.board.set_move_limit(limit);
                self.move_limit = limit;
                self.announced = false;
                Vec::new()
            }
            "seed" => {
                let seed = Self::number_arg(args, "seed")?;
                self.rng = fastrand::Rng::with_seed(seed);
                Vec::new()
            }
            "undo" => {
                self.undo()?;
                Vec::new()
            }
            "dump" => vec![self.board.to_string()],
            "help" => vec![HELP.to_string()],
            "quit" => {
                self.quit = true;
                return Ok(Vec::new());
            }
            _ if command.contains('-') => {
                self.manual_move(line)?;
                Vec::new()
            }
            _ => return Err(CommandError::Unknown(command.to_string())),
        };

        responses.extend(self.play_automatic());
        Ok(responses)
    }

    fn new_game(&mut self) {
        self.board.clear();
        self.board.set_move_limit(self.move_limit);
        self.announced = false;
        info!(
            black = ?self.controllers[0],
            white = ?self.controllers[1],
            limit = self.move_limit,
            "new game"
        );
    }

    fn assign(
        &mut self,
        args: &[&str],
        controller: Controller,
        command: &'static str,
    ) -> Result<Vec<String>, CommandError> {
        let name = args.first().ok_or(CommandError::MissingArgument(command))?;
        let side =
            Piece::parse_side(name).ok_or_else(|| CommandError::InvalidSide(name.to_string()))?;
        self.set_controller(side, controller);
        Ok(Vec::new())
    }

    fn number_arg(args: &[&str], command: &'static str) -> Result<u64, CommandError> {
        let arg = args.first().ok_or(CommandError::MissingArgument(command))?;
        arg.parse().map_err(|_| CommandError::InvalidNumber(arg.to_string()))
    }

    fn manual_move(&mut self, text: &str) -> Result<(), CommandError> {
        let mv: Move = text.parse()?;
        if self.board.game_over() {
            return Err(CommandError::GameOver);
        }
        if !self.board.is_legal_move(&mv) {
            return Err(CommandError::Illegal(mv));
        }
        self.board.make_move(mv);
        Ok(())
    }

    /// Retract at least one move, then keep retracting until a manual side
    /// is to move so the machine does not immediately replay.
    fn undo(&mut self) -> Result<(), CommandError> {
        if self.board.moves_made() == 0 {
            return Err(CommandError::NothingToUndo);
        }
        self.board.retract();
        while self.board.moves_made() > 0
            && self.controller(self.board.turn()) != Controller::Manual
        {
            self.board.retract();
        }
        self.announced = false;
        Ok(())
    }

    fn random_move(&mut self) -> Option<Move> {
        let moves = self.board.legal_moves();
        if moves.is_empty() {
            return None;
        }
        Some(moves[self.rng.usize(..moves.len())])
    }

    /// Play moves for automated sides until a manual side is to move or the
    /// game ends.
    fn play_automatic(&mut self) -> Vec<String> {
        let mut out = Vec::new();
        loop {
            if let Some(outcome) = self.board.winner() {
                if !self.announced {
                    self.announced = true;
                    info!(?outcome, moves = self.board.moves_made(), "game over");
                    out.push(announcement(outcome));
                }
                break;
            }

            let side = self.board.turn();
            let choice = match self.controller(side) {
                Controller::Manual => break,
                Controller::Auto => self.machine.choose_move(&self.board),
                Controller::Random => self.random_move(),
            };
            let Some(mv) = choice else {
                out.push(format!("* {side} has no legal moves"));
                break;
            };
            self.board.make_move(mv);
            out.push(format!("* {mv}"));
        }
        out
    }
}

fn announcement(outcome: Outcome) -> String {
    match outcome {
        Outcome::Win(Piece::Black) => "* Black wins.".to_string(),
        Outcome::Win(_) => "* White wins.".to_string(),
        Outcome::Tie => "* Tie game.".to_string(),
    }
}
