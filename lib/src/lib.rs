mod clue;
mod config;
mod game;
mod play;
mod presenter;
mod results;
mod validation;
mod word_bank;

pub use clue::*;
pub use config::*;
pub use game::GameSession;
pub use play::play_session;
pub use presenter::*;
pub use results::*;
pub use validation::{is_valid_guess, MAX_WORD_LENGTH, MIN_WORD_LENGTH, WORD_LENGTHS};
pub use word_bank::WordBank;
