use proptest::prelude::*;
use rs_wordle_game::*;
use std::collections::HashMap;

#[test]
fn compute_clue_spill_splat() {
    let clue = compute_clue("SPILL", "SPLAT");

    assert!(!clue.is_exact_match());
    assert!(clue.is_correct_length());
    assert_eq!(clue.correct_char(), &[true, true, false, false, false]);
    assert_eq!(clue.has_char(), &[false, false, false, true, false]);
}

#[test]
fn compute_clue_repeated_letters_in_solution() {
    let clue = compute_clue("ABBEY", "BABES");

    assert_eq!(
        clue.letter_results(),
        vec![
            LetterResult::PresentNotHere,
            LetterResult::PresentNotHere,
            LetterResult::Correct,
            LetterResult::Correct,
            LetterResult::NotPresent,
        ]
    );
}

#[test]
fn compute_clue_none_match() {
    let clue = compute_clue("ABCB", "DEFG");

    assert_eq!(clue.letter_results(), vec![LetterResult::NotPresent; 4]);
    assert_eq!(clue.num_correct(), 0);
    assert_eq!(clue.num_present(), 0);
}

#[test]
fn compute_clue_exact_match_requires_identical_strings() {
    assert!(compute_clue("SPLAT", "SPLAT").is_exact_match());
    assert!(!compute_clue("SPLATS", "SPLAT").is_exact_match());
    assert!(!compute_clue("SPLA", "SPLAT").is_exact_match());
    assert!(!compute_clue("TALPS", "SPLAT").is_exact_match());
}

#[test]
fn compute_clue_longer_guess_claims_left_to_right() {
    // Only one T is left after the exact match, and the earliest unmatched guess T takes it.
    let clue = compute_clue("TOTTER", "TOAST");

    assert_eq!(clue.correct_char(), &[true, true, false, false, false, false]);
    assert_eq!(clue.has_char(), &[false, false, true, false, false, false]);
}

fn letter_counts(word: &str) -> HashMap<u8, usize> {
    let mut counts = HashMap::new();
    for letter in word.bytes() {
        *counts.entry(letter).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn clue_never_exceeds_letter_multiplicity(
        guess in "[A-E]{4,6}",
        solution in "[A-E]{4,6}"
    ) {
        let clue = compute_clue(&guess, &solution);
        let solution_counts = letter_counts(&solution);

        let mut matched: HashMap<u8, usize> = HashMap::new();
        for (index, letter) in guess.bytes().enumerate() {
            if clue.correct_char()[index] || clue.has_char()[index] {
                *matched.entry(letter).or_insert(0) += 1;
            }
        }
        for (letter, count) in matched {
            prop_assert!(count <= solution_counts.get(&letter).copied().unwrap_or(0));
        }
    }

    #[test]
    fn clue_has_one_entry_per_guess_letter(
        guess in "[A-Z]{0,8}",
        solution in "[A-Z]{4,6}"
    ) {
        let clue = compute_clue(&guess, &solution);

        prop_assert_eq!(clue.correct_char().len(), guess.len());
        prop_assert_eq!(clue.has_char().len(), guess.len());
        prop_assert_eq!(clue.is_exact_match(), guess == solution);
        prop_assert_eq!(clue.is_correct_length(), guess.len() == solution.len());
        for index in 0..guess.len() {
            prop_assert!(!(clue.correct_char()[index] && clue.has_char()[index]));
        }
    }
}
