#[macro_use]
extern crate assert_matches;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_wordle_game::*;

use std::collections::HashSet;
use std::error::Error;
use std::io::{self, Cursor, Read};
use std::result::Result;

#[test]
fn word_bank_from_reader_succeeds() -> Result<(), WordBankError> {
    let cursor = Cursor::new(String::from(
        "\n\nsplat : You SPLAT opponents with your weapon.\n squid\nBOMB\nink : ignored\n",
    ));

    let word_bank = WordBank::from_reader(cursor)?;

    assert_eq!(word_bank.len(), 3);
    assert_eq!(word_bank.remaining(5), 2);
    assert_eq!(
        word_bank.explanation("Splat"),
        Some("You SPLAT opponents with your weapon.")
    );
    assert_eq!(word_bank.explanation("SQUID"), None);
    Ok(())
}

#[test]
fn word_bank_from_reader_without_words_fails() {
    let cursor = Cursor::new(String::from("ink\nsplatters\n\n"));

    assert_matches!(WordBank::from_reader(cursor), Err(WordBankError::Empty));
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "no access"))
    }
}

#[test]
fn word_bank_from_reader_propagates_io_errors() {
    let reader = io::BufReader::new(FailingReader);

    assert_matches!(WordBank::from_reader(reader), Err(WordBankError::Io(_)));
}

#[test]
fn take_word_never_repeats() -> Result<(), WordBankError> {
    let mut rng = StdRng::seed_from_u64(1);
    let mut bank = WordBank::from_iterator(["splat", "squid", "inked", "bombs"])?;

    let mut taken = HashSet::new();
    for _ in 0..4 {
        let word = bank.take_word(5, &mut rng)?;
        assert!(taken.insert(word));
    }

    assert_matches!(
        bank.take_word(5, &mut rng),
        Err(WordBankError::OutOfWords { length: 5 })
    );
    Ok(())
}

#[test]
fn take_word_keeps_explanation() -> Result<(), WordBankError> {
    let mut rng = StdRng::seed_from_u64(1);
    let mut bank = WordBank::from_iterator(["splat : Dealing enough damage."])?;

    let word = bank.take_word(5, &mut rng)?;

    assert_eq!(&*word, "SPLAT");
    assert_eq!(bank.explanation(&word), Some("Dealing enough damage."));
    Ok(())
}

#[test]
fn take_word_unsupported_length() -> Result<(), WordBankError> {
    let mut rng = StdRng::seed_from_u64(1);
    let mut bank = WordBank::from_iterator(["splat"])?;

    assert_matches!(
        bank.take_word(3, &mut rng),
        Err(WordBankError::UnsupportedLength { length: 3 })
    );
    assert_matches!(
        bank.take_word(7, &mut rng),
        Err(WordBankError::UnsupportedLength { length: 7 })
    );
    Ok(())
}

#[test]
fn take_any_word_fails_on_empty_bucket() -> Result<(), WordBankError> {
    let mut rng = StdRng::seed_from_u64(3);
    let mut bank = WordBank::from_iterator(["splat"])?;

    // The 4- and 6-letter buckets are always empty, and the 5-letter one is after SPLAT.
    let mut results = Vec::new();
    for _ in 0..32 {
        results.push(bank.take_any_word(&mut rng));
    }

    let num_taken = results.iter().filter(|result| result.is_ok()).count();
    assert!(num_taken <= 1);
    assert!(results.iter().all(|result| match result {
        Ok(word) => &**word == "SPLAT",
        Err(WordBankError::OutOfWords { length }) => WORD_LENGTHS.contains(length),
        Err(_) => false,
    }));
    Ok(())
}

#[test]
fn io_errors_convert_with_question_mark() {
    fn read_words(reader: &mut impl Read) -> Result<String, WordBankError> {
        let mut words = String::new();
        reader.read_to_string(&mut words)?;
        Ok(words)
    }

    let result = read_words(&mut FailingReader);

    assert_matches!(
        result,
        Err(WordBankError::Io(ref e)) if e.kind() == io::ErrorKind::PermissionDenied
    );
}

#[test]
fn io_error_message_is_only_in_source() {
    let error = WordBankError::from(io::Error::new(io::ErrorKind::NotFound, "no such file"));

    assert_eq!(error.to_string(), "failed to read word list");
    assert_eq!(
        error.source().map(|source| source.to_string()),
        Some("no such file".to_string())
    );
}
