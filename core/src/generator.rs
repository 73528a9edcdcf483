//! # Distinct-Anagram Generator
//!
//! The central engine of the workspace: exhaustive, in-place permutation
//! search over a validated letter sequence.
//!
//! The search swaps buffer elements destructively, recurses one position to
//! the right, and undoes each swap on the way back up, so the buffer is
//! restored to its pre-step arrangement before the next branch. Completed
//! arrangements land in a `HashSet`, which is what collapses duplicate
//! letters into a single result string. The buffer is created inside the
//! call and never escapes it, so concurrent callers are independent by
//! construction.

use std::collections::HashSet;

use anagrm_common::error::InvalidInputError;
use anagrm_common::letters::Letters;
use tracing::debug;

/// Produces every distinct arrangement of the given letters.
///
/// The returned strings all have the input's length and letter multiset.
/// Their order is whatever the set yields and is not stable across calls;
/// callers wanting a particular order sort the result themselves.
///
/// Runs in O(n·n!) time over the input length — inherent to exhaustive
/// enumeration. Inputs past roughly a dozen distinct letters take a long
/// time and a lot of memory.
pub fn anagrams(letters: &Letters) -> Vec<String> {
    let mut buffer: Vec<char> = letters.as_chars().to_vec();
    let mut found: HashSet<String> = HashSet::new();

    permute(&mut buffer, 0, &mut found);

    debug!(
        "{} letters in, {} distinct arrangements out",
        letters.len(),
        found.len()
    );

    found.into_iter().collect()
}

/// Validates a raw character sequence, then generates.
///
/// The sequence-of-characters entry point: fails with the matching
/// [`InvalidInputError`] cause before any search work begins.
pub fn anagrams_of_chars(chars: &[char]) -> Result<Vec<String>, InvalidInputError> {
    let letters: Letters = Letters::new(chars)?;
    Ok(anagrams(&letters))
}

/// Validates a possibly-absent text value, then generates.
///
/// Convenience overload over [`anagrams_of_chars`]: rejects `None` with
/// [`InvalidInputError::Null`] before delegating to the sequence validator.
pub fn anagrams_of_text(text: Option<&str>) -> Result<Vec<String>, InvalidInputError> {
    let letters: Letters = Letters::from_text(text)?;
    Ok(anagrams(&letters))
}

/// Backtracking step: fix `buffer[start]`, permute the tail.
///
/// At `start == len - 1` the buffer holds one complete arrangement and is
/// recorded. Each swap is undone before trying the next candidate, which
/// keeps the buffer identical to its state on entry.
fn permute(buffer: &mut [char], start: usize, found: &mut HashSet<String>) {
    if start == buffer.len() - 1 {
        found.insert(buffer.iter().collect());
        return;
    }

    for i in start..buffer.len() {
        buffer.swap(start, i);
        permute(buffer, start + 1, found);
        buffer.swap(start, i);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn sorted_chars(word: &str) -> Vec<char> {
        let mut chars: Vec<char> = word.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn single_letter_has_one_arrangement() {
        let result = anagrams_of_text(Some("a")).unwrap();
        assert_eq!(result, vec!["a".to_string()]);
    }

    #[test]
    fn two_letters_have_two_arrangements() {
        let result = anagrams_of_text(Some("ab")).unwrap();
        let set: HashSet<String> = result.into_iter().collect();

        assert_eq!(set.len(), 2);
        assert!(set.contains("ab"));
        assert!(set.contains("ba"));
    }

    #[test]
    fn three_distinct_letters_have_six_arrangements() {
        let result = anagrams_of_text(Some("abc")).unwrap();
        let set: HashSet<String> = result.into_iter().collect();

        let expected = ["abc", "acb", "bac", "bca", "cab", "cba"];
        assert_eq!(set.len(), expected.len());
        for word in expected {
            assert!(set.contains(word), "missing arrangement: {word}");
        }
    }

    #[test]
    fn uppercase_input_keeps_its_case() {
        let result = anagrams_of_text(Some("ABC")).unwrap();
        let set: HashSet<String> = result.into_iter().collect();

        let expected = ["ABC", "ACB", "BAC", "BCA", "CAB", "CBA"];
        assert_eq!(set.len(), expected.len());
        for word in expected {
            assert!(set.contains(word), "missing arrangement: {word}");
        }
    }

    #[test]
    fn mixed_case_letters_stay_distinct() {
        let result = anagrams_of_text(Some("Ab")).unwrap();
        let set: HashSet<String> = result.into_iter().collect();

        assert_eq!(set.len(), 2);
        assert!(set.contains("Ab"));
        assert!(set.contains("bA"));
    }

    #[test]
    fn repeated_letters_are_deduplicated() {
        let result = anagrams_of_text(Some("aab")).unwrap();
        let set: HashSet<String> = result.into_iter().collect();

        assert_eq!(set.len(), 3, "3!/2! distinct arrangements expected");
        assert!(set.contains("aab"));
        assert!(set.contains("aba"));
        assert!(set.contains("baa"));
    }

    #[test]
    fn all_identical_letters_collapse_to_one() {
        let result = anagrams_of_text(Some("aaaa")).unwrap();
        assert_eq!(result, vec!["aaaa".to_string()]);
    }

    #[test]
    fn four_distinct_letters_have_twenty_four_arrangements() {
        let result = anagrams_of_text(Some("abcd")).unwrap();
        let set: HashSet<String> = result.iter().cloned().collect();

        assert_eq!(result.len(), 24);
        assert_eq!(set.len(), 24, "results must be mutually distinct");
    }

    #[test]
    fn every_result_is_a_permutation_of_the_input() {
        let input = "stone";
        let expected = sorted_chars(input);

        for word in anagrams_of_text(Some(input)).unwrap() {
            assert_eq!(word.chars().count(), input.chars().count());
            assert_eq!(
                sorted_chars(&word),
                expected,
                "{word} is not a rearrangement of {input}"
            );
        }
    }

    #[test]
    fn unicode_letters_are_arranged_like_any_other() {
        let result = anagrams_of_text(Some("éà")).unwrap();
        let set: HashSet<String> = result.into_iter().collect();

        assert_eq!(set.len(), 2);
        assert!(set.contains("éà"));
        assert!(set.contains("àé"));
    }

    #[test]
    fn chars_entry_point_validates_first() {
        assert_eq!(
            anagrams_of_chars(&[]),
            Err(InvalidInputError::Empty)
        );
        assert_eq!(
            anagrams_of_chars(&['a', '1', 'b']),
            Err(InvalidInputError::NonLetter('1'))
        );
        assert!(anagrams_of_chars(&['a', 'b']).is_ok());
    }

    #[test]
    fn text_entry_point_distinguishes_null_from_empty() {
        assert_eq!(anagrams_of_text(None), Err(InvalidInputError::Null));
        assert_eq!(anagrams_of_text(Some("")), Err(InvalidInputError::Empty));
    }
}
