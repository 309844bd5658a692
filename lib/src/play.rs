use crate::game::GameSession;
use crate::presenter::Presenter;
use crate::results::{GameError, GameStatus};
use std::io::{self, BufRead, Write};

/// Plays `session` to the end, reading one guess per line from `input` and writing prompts and
/// feedback to `output`.
///
/// Invalid guesses are reported and the player is asked again. Returns the final status, or an
/// [`io::ErrorKind::UnexpectedEof`] error if the input ends before the game does.
pub fn play_session<R: BufRead, W: Write>(
    session: &mut GameSession,
    presenter: Presenter,
    input: &mut R,
    output: &mut W,
) -> io::Result<GameStatus> {
    if session.is_mixed_length() {
        write!(output, "Guess the word, it has 4 to 6 letters!")?;
    } else {
        write!(
            output,
            "Guess the {}-letter word!",
            session.solution().len()
        )?;
    }
    writeln!(output, " You have {} guesses.", session.max_guesses())?;

    while !session.status().is_terminal() {
        write!(
            output,
            "Guess {}/{}: ",
            session.guess_count(),
            session.max_guesses()
        )?;
        output.flush()?;

        let mut buffer = String::new();
        if input.read_line(&mut buffer)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Input ended before the game was over.",
            ));
        }
        let guess = buffer.trim();

        match session.submit_guess(guess) {
            Ok(clue) => {
                let feedback = presenter.present(
                    &guess.to_ascii_uppercase(),
                    &clue,
                    session.is_mixed_length(),
                );
                writeln!(output, "{}", feedback)?;
            }
            Err(GameError::InvalidGuess { .. }) => {
                writeln!(
                    output,
                    "The guess is invalid. Check that it has the right length and only letters."
                )?;
            }
            Err(e) => return Err(io::Error::new(io::ErrorKind::Other, e)),
        }
    }

    match session.status() {
        GameStatus::Won => writeln!(
            output,
            "You got it! It took you {} guesses.",
            session.guess_count()
        )?,
        _ => writeln!(
            output,
            "Out of guesses! The word was {}.",
            session.solution()
        )?,
    }
    Ok(session.status())
}
