use crate::clue::Clue;
use crate::config::{GameConfig, WordLength};
use crate::results::{GameError, GameStatus};
use crate::validation::{is_valid_guess, is_valid_word};
use crate::word_bank::WordBank;
use log::{debug, info};
use rand::Rng;
use std::sync::Arc;

/// A single game: one solution, guessed at until it is found or the guesses run out.
///
/// Guesses are numbered from 1. Only valid guesses use up a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    solution: Arc<str>,
    guess_count: u32,
    max_guesses: u32,
    mixed_length: bool,
    status: GameStatus,
}

impl GameSession {
    /// Constructs a session around the given solution, which is converted to upper case.
    ///
    /// Fails with [`GameError::InvalidSolution`] unless the solution is 4 to 6 letters long.
    pub fn new(
        solution: &str,
        max_guesses: u32,
        mixed_length: bool,
    ) -> Result<GameSession, GameError> {
        if !is_valid_word(solution) {
            return Err(GameError::InvalidSolution {
                solution: solution.to_string(),
            });
        }
        Ok(GameSession {
            solution: Arc::from(solution.to_ascii_uppercase()),
            guess_count: 1,
            max_guesses,
            mixed_length,
            status: GameStatus::InProgress,
        })
    }

    /// Draws a solution from the word bank and constructs a session using the given rules.
    ///
    /// Fails with [`GameError::WordBank`] if the bank has no words left of the required length.
    pub fn start<R: Rng>(
        config: &GameConfig,
        bank: &mut WordBank,
        rng: &mut R,
    ) -> Result<GameSession, GameError> {
        let solution = match config.word_length {
            WordLength::Fixed(length) => bank.take_word(length, rng)?,
            WordLength::Mixed => bank.take_any_word(rng)?,
        };
        let max_guesses = config.max_guesses();
        debug!(
            "Starting game: {} letters, {} guesses, mixed length: {}, blind: {}",
            solution.len(),
            max_guesses,
            config.word_length.is_mixed(),
            config.blind
        );
        Ok(GameSession {
            solution,
            guess_count: 1,
            max_guesses,
            mixed_length: config.word_length.is_mixed(),
            status: GameStatus::InProgress,
        })
    }

    pub fn solution(&self) -> &str {
        &self.solution
    }

    /// The number of the guess to be made next, or of the final guess once the game is over.
    pub fn guess_count(&self) -> u32 {
        self.guess_count
    }

    pub fn max_guesses(&self) -> u32 {
        self.max_guesses
    }

    pub fn is_mixed_length(&self) -> bool {
        self.mixed_length
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The number of guesses that may still be made.
    pub fn guesses_remaining(&self) -> u32 {
        if self.status.is_terminal() {
            return 0;
        }
        (self.max_guesses + 1).saturating_sub(self.guess_count)
    }

    /// Returns whether `guess` would be accepted by this session.
    pub fn is_valid_guess(&self, guess: &str) -> bool {
        is_valid_guess(guess, self.solution.len(), self.mixed_length)
    }

    /// Checks the guess, computes its clue, and advances the game.
    ///
    /// The guess is converted to upper case before it is compared with the solution. An invalid
    /// guess returns [`GameError::InvalidGuess`] and leaves the session unchanged.
    pub fn submit_guess(&mut self, guess: &str) -> Result<Clue, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver {
                status: self.status,
            });
        }
        if !self.is_valid_guess(guess) {
            return Err(GameError::InvalidGuess {
                guess: guess.to_string(),
            });
        }
        let guess = guess.to_ascii_uppercase();
        let clue = Clue::compute(&guess, &self.solution);
        debug!(
            "Guess {}/{}: {} correct, {} present",
            self.guess_count,
            self.max_guesses,
            clue.num_correct(),
            clue.num_present()
        );
        self.apply_clue(&clue);
        Ok(clue)
    }

    /// Advances the game based on the clue for an accepted guess, and returns the new status.
    ///
    /// An exact match wins. Otherwise the guess count goes up, and the game is lost once it
    /// exceeds the maximum. Has no effect once the game is over.
    pub fn apply_clue(&mut self, clue: &Clue) -> GameStatus {
        if self.status.is_terminal() {
            return self.status;
        }
        if clue.is_exact_match() {
            self.status = GameStatus::Won;
            info!("Game won on guess {}", self.guess_count);
            return self.status;
        }
        self.guess_count += 1;
        if self.guess_count > self.max_guesses {
            self.status = GameStatus::Lost;
            info!("Game lost after {} guesses", self.max_guesses);
        }
        self.status
    }
}
