//! Turn-by-turn game state for one N×N game.

use super::error::BoardError;
use super::types::{Board, Player};
use tracing::{debug, info, instrument};

/// Current result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a player owning a full line.
    Win(Player),
    /// Game ended with a full board and no winner.
    Tie,
    /// Input ran out before the game finished.
    Aborted,
}

impl GameResult {
    /// Returns true once the game has finished for any reason.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "Game in progress"),
            GameResult::Win(player) => write!(f, "Player {} wins!", player),
            GameResult::Tie => write!(f, "Tie game! Thanks for playing!"),
            GameResult::Aborted => write!(f, "Program terminated. Have a nice day!"),
        }
    }
}

/// One game: a board, the player to move, and the result so far.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
    result: GameResult,
}

impl Game {
    /// Starts a game on an empty `size`×`size` board with player 1 to move.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] for sizes the board rejects.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let board = Board::new(size)?;
        info!(size, "Game started");
        Ok(Self {
            board,
            to_move: Player::One,
            result: GameResult::InProgress,
        })
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the result so far.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Plays one turn for the current player at the 1-based linear `index`.
    ///
    /// The range is checked first. A board that is already full then ends the
    /// game as a tie without placing anything. Otherwise the mark is placed,
    /// and the game is won if the mover now owns a full line; if not, the turn
    /// passes to the opponent. Failed turns leave the player to move unchanged.
    ///
    /// # Errors
    ///
    /// - [`BoardError::GameOver`] if the game already has a result
    /// - [`BoardError::OutOfRange`] if `index` is outside `1..=N²`
    /// - [`BoardError::CellOccupied`] if the square already holds a mark
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, index: usize) -> Result<GameResult, BoardError> {
        if self.result.is_terminal() {
            return Err(BoardError::GameOver);
        }

        let max = self.board.cell_count();
        if index == 0 || index > max {
            return Err(BoardError::OutOfRange { index, max });
        }

        if self.board.is_full() {
            self.result = GameResult::Tie;
            info!("Board full, game tied");
            return Ok(self.result);
        }

        self.board.place(index, self.to_move)?;

        if self.board.check_win(self.to_move) {
            self.result = GameResult::Win(self.to_move);
            info!(winner = %self.to_move, "Game won");
        } else {
            self.to_move = self.to_move.opponent();
            debug!(next = %self.to_move, "Turn passed");
        }

        Ok(self.result)
    }

    /// Ends the game because no more input can be read.
    #[instrument(skip(self))]
    pub fn abort(&mut self) {
        if !self.result.is_terminal() {
            self.result = GameResult::Aborted;
            info!("Game aborted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let game = Game::new(3).unwrap();
        assert_eq!(game.to_move(), Player::One);
        assert_eq!(game.result(), GameResult::InProgress);
        assert!(!game.board().is_full());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(3).unwrap();
        game.play(1).unwrap();
        assert_eq!(game.to_move(), Player::Two);
        game.play(2).unwrap();
        assert_eq!(game.to_move(), Player::One);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = Game::new(3).unwrap();
        game.play(5).unwrap();

        assert!(matches!(game.play(5), Err(BoardError::CellOccupied { .. })));
        assert_eq!(game.to_move(), Player::Two);

        assert!(matches!(game.play(10), Err(BoardError::OutOfRange { .. })));
        assert_eq!(game.to_move(), Player::Two);
    }

    #[test]
    fn test_left_column_win() {
        let mut game = Game::new(3).unwrap();
        for index in [1, 2, 4, 5] {
            assert_eq!(game.play(index), Ok(GameResult::InProgress));
        }
        assert_eq!(game.play(7), Ok(GameResult::Win(Player::One)));
        assert_eq!(game.to_move(), Player::One);
        assert_eq!(game.result().to_string(), "Player 1 wins!");
    }

    #[test]
    fn test_tie_declared_on_turn_after_board_fills() {
        let mut game = Game::new(3).unwrap();
        for index in [1, 2, 3, 5, 4, 6, 8, 7, 9] {
            assert_eq!(game.play(index), Ok(GameResult::InProgress));
        }
        assert!(game.board().is_full());

        assert_eq!(game.play(1), Ok(GameResult::Tie));
    }

    #[test]
    fn test_range_checked_before_tie() {
        let mut game = Game::new(3).unwrap();
        for index in [1, 2, 3, 5, 4, 6, 8, 7, 9] {
            game.play(index).unwrap();
        }

        assert!(matches!(game.play(42), Err(BoardError::OutOfRange { .. })));
        assert_eq!(game.result(), GameResult::InProgress);
    }

    #[test]
    fn test_finished_game_rejects_moves() {
        let mut game = Game::new(3).unwrap();
        for index in [1, 4, 2, 5, 3] {
            game.play(index).unwrap();
        }
        assert_eq!(game.play(9), Err(BoardError::GameOver));
    }

    #[test]
    fn test_abort_keeps_earlier_result() {
        let mut game = Game::new(3).unwrap();
        game.abort();
        assert_eq!(game.result(), GameResult::Aborted);

        let mut won = Game::new(3).unwrap();
        for index in [1, 4, 2, 5, 3] {
            won.play(index).unwrap();
        }
        won.abort();
        assert_eq!(won.result(), GameResult::Win(Player::One));
    }
}
