use crate::results::WordBankError;
use crate::validation::{is_valid_word, MAX_WORD_LENGTH, MIN_WORD_LENGTH, WORD_LENGTHS};
use log::debug;
use rand::Rng;
use std::collections::HashMap;
use std::io::BufRead;
use std::sync::Arc;

const EXPLANATION_SEPARATOR: &str = " : ";
const NUM_BUCKETS: usize = MAX_WORD_LENGTH - MIN_WORD_LENGTH + 1;

/// Contains the words that may still be used as solutions, grouped by length.
///
/// Words are removed as they are taken, so a single bank never hands out the same word twice.
/// Each word may carry an explanation, which remains available after the word is taken.
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    buckets: [Vec<Arc<str>>; NUM_BUCKETS],
    explanations: HashMap<Arc<str>, Option<Box<str>>>,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading lines from the given reader.
    ///
    /// Each line should hold either a word, or a word and its explanation separated by `" : "`,
    /// for example:
    ///
    /// ```text
    /// SPLAT : You SPLAT an opponent by dealing enough damage to them.
    /// ```
    ///
    /// Words are converted to upper case. Blank lines, duplicate words, and lines whose word is
    /// not 4 to 6 letters long are ignored.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordBankError> {
        let mut bank = WordBank::default();
        let mut num_ignored = 0;
        for line in word_reader.lines() {
            if !bank.add_line(&line?) {
                num_ignored += 1;
            }
        }
        debug!(
            "Loaded {} words into the word bank, ignored {} lines",
            bank.len(),
            num_ignored
        );
        if bank.is_empty() {
            return Err(WordBankError::Empty);
        }
        Ok(bank)
    }

    /// Constructs a new `WordBank` from the given entries, using the same format as
    /// [`WordBank::from_reader`].
    pub fn from_iterator<S, I>(entries: I) -> Result<Self, WordBankError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut bank = WordBank::default();
        for entry in entries {
            bank.add_line(entry.as_ref());
        }
        if bank.is_empty() {
            return Err(WordBankError::Empty);
        }
        Ok(bank)
    }

    /// Adds the entry on the given line. Returns `false` if the line was ignored.
    fn add_line(&mut self, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() {
            return false;
        }
        let mut parts = line.split(EXPLANATION_SEPARATOR);
        let word = parts.next().unwrap_or_default().trim();
        let explanation = parts.next().map(|text| Box::from(text.trim()));
        if parts.next().is_some() || !is_valid_word(word) {
            return false;
        }
        let word: Arc<str> = Arc::from(word.to_ascii_uppercase());
        if self.explanations.contains_key(&word) {
            return false;
        }
        self.buckets[word.len() - MIN_WORD_LENGTH].push(Arc::clone(&word));
        self.explanations.insert(word, explanation);
        true
    }

    /// Removes and returns a random word of the given length.
    ///
    /// Returns [`WordBankError::OutOfWords`] once every word of this length has been taken.
    pub fn take_word<R: Rng>(
        &mut self,
        length: usize,
        rng: &mut R,
    ) -> Result<Arc<str>, WordBankError> {
        if !WORD_LENGTHS.contains(&length) {
            return Err(WordBankError::UnsupportedLength { length });
        }
        let bucket = &mut self.buckets[length - MIN_WORD_LENGTH];
        if bucket.is_empty() {
            return Err(WordBankError::OutOfWords { length });
        }
        let index = rng.gen_range(0..bucket.len());
        Ok(bucket.swap_remove(index))
    }

    /// Picks a word length at random, then removes and returns a random word of that length.
    ///
    /// Every length is equally likely to be picked, regardless of how many words of each length
    /// remain. This means [`WordBankError::OutOfWords`] may be returned even when words of other
    /// lengths are still available.
    pub fn take_any_word<R: Rng>(&mut self, rng: &mut R) -> Result<Arc<str>, WordBankError> {
        let length = rng.gen_range(WORD_LENGTHS);
        self.take_word(length, rng)
    }

    /// Returns the explanation for the given word, if it has one. Matching ignores case.
    pub fn explanation(&self, word: &str) -> Option<&str> {
        self.explanations
            .get(word.to_ascii_uppercase().as_str())
            .and_then(|explanation| explanation.as_deref())
    }

    /// Returns the number of words of the given length that have not been taken yet.
    pub fn remaining(&self, length: usize) -> usize {
        if !WORD_LENGTHS.contains(&length) {
            return 0;
        }
        self.buckets[length - MIN_WORD_LENGTH].len()
    }

    /// Returns the number of words that have not been taken yet.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Returns `true` if every word has been taken.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}
