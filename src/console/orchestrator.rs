//! Game orchestration between two players sharing one console.

use super::input::{InputSource, ReadOutcome};
use crate::games::tictactoe::{Board, BoardError, Game, GameResult, render_grid};
use anyhow::Result;
use std::io::Write;
use tracing::{debug, info, instrument};

/// Drives games over an injected input source and output sink.
///
/// The loop moves through `AwaitingSize → Playing → {Won, Tied, Aborted}`
/// for each game, then asks whether to play again. End of input at any
/// prompt ends the program gracefully.
pub struct Orchestrator<I, W> {
    input: I,
    output: W,
    preset_size: Option<usize>,
}

impl<I: InputSource, W: Write> Orchestrator<I, W> {
    /// Creates an orchestrator that asks for the grid size every game.
    pub fn new(input: I, output: W) -> Self {
        Self {
            input,
            output,
            preset_size: None,
        }
    }

    /// Uses `size` for the first game instead of prompting for it.
    ///
    /// Replays always ask for a fresh size.
    pub fn with_preset_size(mut self, size: Option<usize>) -> Self {
        self.preset_size = size;
        self
    }

    /// Consumes the orchestrator, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays games until the players decline a replay or input runs out.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        info!("Starting console session");

        loop {
            let result = self.play_game()?;
            if result == GameResult::Aborted {
                info!("Input exhausted, ending session");
                return Ok(());
            }

            if !self.ask_replay()? {
                writeln!(self.output, "Thanks for playing!")?;
                self.output.flush()?;
                info!("Session finished");
                return Ok(());
            }
        }
    }

    /// Plays a single game from the size prompt to its result.
    ///
    /// The result message is printed before returning.
    #[instrument(skip(self))]
    pub fn play_game(&mut self) -> Result<GameResult> {
        writeln!(
            self.output,
            "Welcome to Tic-Tac-Toe! Player 1 will be 0, and Player 2 will be X."
        )?;

        let result = match self.choose_size()? {
            Some(mut game) => {
                self.announce_start(game.board())?;
                self.play_turns(&mut game)?
            }
            None => GameResult::Aborted,
        };

        writeln!(self.output, "{}", result)?;
        self.output.flush()?;
        Ok(result)
    }

    /// `AwaitingSize`: reads integers until one makes a valid board.
    ///
    /// Returns `None` if input runs out first.
    fn choose_size(&mut self) -> Result<Option<Game>> {
        if let Some(size) = self.preset_size.take() {
            debug!(size, "Using preset grid size");
            return Ok(Some(Game::new(size)?));
        }

        writeln!(
            self.output,
            "Please choose how big you would like your grid to be. For example, enter 3 to have \
             a standard game of 3x3 tic-tac-toe. Please enter an integer greater than or equal \
             to 3. Please also note that selecting a large number may result in the grid not \
             fitting on the current screen."
        )?;

        loop {
            self.output.flush()?;
            let too_large = match self.input.read_int()? {
                ReadOutcome::EndOfInput => return Ok(None),
                ReadOutcome::Value(value) => {
                    let size = usize::try_from(value).ok();
                    if let Some(game) = size.and_then(|size| Game::new(size).ok()) {
                        return Ok(Some(game));
                    }
                    debug!(value, "Rejected grid size");
                    value > 0 && size.is_none_or(|size| size > Board::MAX_SIZE)
                }
                ReadOutcome::Malformed(token) => {
                    debug!(%token, "Rejected non-integer grid size");
                    false
                }
            };

            if too_large {
                writeln!(
                    self.output,
                    "Please enter an integer no greater than {}.",
                    Board::MAX_SIZE
                )?;
            } else {
                writeln!(
                    self.output,
                    "Please enter an integer greater than or equal to 3."
                )?;
            }
        }
    }

    fn announce_start(&mut self, board: &Board) -> Result<()> {
        writeln!(
            self.output,
            "Starting grid will be displayed below. Enter the number corresponding to the grid \
             location to put in a 0 or an X."
        )?;
        writeln!(
            self.output,
            "To win, simply get {} of your respective symbols in a row!",
            board.size()
        )?;
        self.print_board(board)
    }

    /// `Playing`: prompts the current player until the game has a result.
    fn play_turns(&mut self, game: &mut Game) -> Result<GameResult> {
        let max = game.board().cell_count();

        while !game.result().is_terminal() {
            let player = game.to_move();
            writeln!(self.output, "Player {}'s turn.", player)?;
            writeln!(
                self.output,
                "Enter a number between 1 and {}, inclusive, that has not been claimed already: ",
                max
            )?;
            self.output.flush()?;

            let value = match self.input.read_int()? {
                ReadOutcome::EndOfInput => {
                    game.abort();
                    break;
                }
                ReadOutcome::Malformed(token) => {
                    debug!(%token, %player, "Rejected non-integer move");
                    writeln!(self.output, "Invalid input. Try again, Player {}", player)?;
                    continue;
                }
                ReadOutcome::Value(value) => value,
            };

            // Negative values are just another out-of-range index.
            let index = usize::try_from(value).unwrap_or(0);
            match game.play(index) {
                Ok(GameResult::Tie) => {}
                Ok(_) => self.print_board(game.board())?,
                Err(BoardError::OutOfRange { .. }) => {
                    debug!(value, %player, "Rejected out-of-range move");
                    writeln!(
                        self.output,
                        "Please input a number between 1 and {}, inclusive.",
                        max
                    )?;
                }
                Err(BoardError::CellOccupied { index, owner }) => {
                    debug!(index, %owner, %player, "Rejected move on occupied cell");
                    writeln!(self.output, "Cell already occupied. See the grid below.")?;
                    self.print_board(game.board())?;
                }
                Err(BoardError::GameOver) => break,
                Err(e @ BoardError::InvalidSize(_)) => return Err(e.into()),
            }
        }

        Ok(game.result())
    }

    /// Asks for a replay; only an answer starting with `y` or `Y` accepts.
    fn ask_replay(&mut self) -> Result<bool> {
        write!(self.output, "Do you want to play again? (y/n): ")?;
        self.output.flush()?;

        let again = self
            .input
            .next_token()?
            .is_some_and(|answer| answer.starts_with(['y', 'Y']));
        debug!(again, "Replay answer");
        Ok(again)
    }

    fn print_board(&mut self, board: &Board) -> Result<()> {
        writeln!(self.output, "{}", render_grid(board))?;
        Ok(())
    }
}
