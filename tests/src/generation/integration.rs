use std::collections::HashSet;

use anagrm_common::error::InvalidInputError;
use anagrm_common::letters::Letters;
use anagrm_core::{counting, generator};

/// Full pipeline through the text entry point: validation, backtracking
/// search, deduplication, materialization.
#[test]
fn generates_the_full_set_for_distinct_letters() {
    let result = generator::anagrams_of_text(Some("abc"));

    assert!(result.is_ok(), "Generation failed: {:?}", result.err());
    let words: Vec<String> = result.unwrap();
    let set: HashSet<&str> = words.iter().map(String::as_str).collect();

    assert_eq!(
        words.len(),
        6,
        "Three distinct letters must yield 3! arrangements"
    );
    for expected in ["abc", "acb", "bac", "bca", "cab", "cba"] {
        assert!(set.contains(expected), "Missing arrangement: {expected}");
    }
}

#[test]
fn duplicate_letters_shrink_the_result_set() {
    let words = generator::anagrams_of_text(Some("banana")).expect("valid input");
    let set: HashSet<&str> = words.iter().map(String::as_str).collect();

    assert_eq!(
        words.len(),
        60,
        "6!/(3!·2!) distinct arrangements expected, got {}",
        words.len()
    );
    assert_eq!(
        set.len(),
        words.len(),
        "Result list must not contain duplicates"
    );
    assert!(set.contains("banana"), "The input itself is an arrangement");
}

#[test]
fn every_arrangement_keeps_the_input_multiset() {
    let input = "apple";
    let mut expected: Vec<char> = input.chars().collect();
    expected.sort_unstable();

    for word in generator::anagrams_of_text(Some(input)).expect("valid input") {
        let mut actual: Vec<char> = word.chars().collect();
        actual.sort_unstable();
        assert_eq!(actual, expected, "{word} is not a rearrangement of {input}");
    }
}

#[test]
fn closed_form_count_agrees_with_enumeration() -> anyhow::Result<()> {
    for word in ["a", "ab", "Ab", "abc", "aab", "aabbc", "banana"] {
        let letters: Letters = word.parse()?;
        let counted: u128 = counting::distinct_arrangements(&letters)
            .expect("small inputs cannot overflow the count");
        let enumerated: usize = generator::anagrams(&letters).len();

        assert_eq!(
            counted, enumerated as u128,
            "Closed-form count disagrees with the engine for {word}"
        );
    }
    Ok(())
}

#[test]
fn rejection_causes_are_distinguishable() {
    assert_eq!(
        generator::anagrams_of_text(None),
        Err(InvalidInputError::Null)
    );
    assert_eq!(
        generator::anagrams_of_text(Some("")),
        Err(InvalidInputError::Empty)
    );
    assert_eq!(
        generator::anagrams_of_text(Some("a1b")),
        Err(InvalidInputError::NonLetter('1'))
    );
}

#[test]
fn case_is_preserved_and_never_merged() {
    let words = generator::anagrams_of_text(Some("Ab")).expect("valid input");
    let set: HashSet<&str> = words.iter().map(String::as_str).collect();

    assert_eq!(set.len(), 2);
    assert!(set.contains("Ab"));
    assert!(set.contains("bA"));
}

#[test]
fn both_entry_points_agree() {
    let chars: Vec<char> = "stop".chars().collect();

    let from_chars: HashSet<String> = generator::anagrams_of_chars(&chars)
        .expect("valid input")
        .into_iter()
        .collect();
    let from_text: HashSet<String> = generator::anagrams_of_text(Some("stop"))
        .expect("valid input")
        .into_iter()
        .collect();

    assert_eq!(
        from_chars, from_text,
        "The overloads must share one validated core"
    );
}
