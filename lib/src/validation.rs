use std::ops::RangeInclusive;

/// The shortest supported word.
pub const MIN_WORD_LENGTH: usize = 4;
/// The longest supported word.
pub const MAX_WORD_LENGTH: usize = 6;
/// All supported word lengths. Mixed-length games accept guesses of any of these lengths.
pub const WORD_LENGTHS: RangeInclusive<usize> = MIN_WORD_LENGTH..=MAX_WORD_LENGTH;

/// Returns whether `guess` is acceptable against a solution of `solution_length` letters.
///
/// A guess must consist only of ASCII letters, in either case. Its length must equal the
/// solution's, unless `mixed_length` is set, in which case any supported length is accepted.
///
/// ```
/// use rs_wordle_game::is_valid_guess;
///
/// assert!(is_valid_guess("splat", 5, false));
/// assert!(is_valid_guess("Bomb", 5, true));
/// assert!(!is_valid_guess("abc1", 4, false));
/// ```
pub fn is_valid_guess(guess: &str, solution_length: usize, mixed_length: bool) -> bool {
    let length = guess.len();
    let length_ok =
        length == solution_length || (mixed_length && WORD_LENGTHS.contains(&length));
    length_ok && length > 0 && guess.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Returns `true` if `word` could be used as a solution.
pub(crate) fn is_valid_word(word: &str) -> bool {
    WORD_LENGTHS.contains(&word.len()) && word.bytes().all(|b| b.is_ascii_alphabetic())
}
