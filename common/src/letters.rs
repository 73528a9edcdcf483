//! # Anagram Input Model
//!
//! Defines the validated input for anagram generation.
//!
//! This module handles parsing and validating letter sequences. A
//! [`Letters`] value can only be obtained through one of the validators, so
//! holding one is proof the input is non-empty and entirely alphabetic.
//! Validation accepts any Unicode letter, not just ASCII, and treats
//! uppercase and lowercase variants as distinct symbols.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::InvalidInputError;

/// A validated, non-empty sequence of letters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Letters(Vec<char>);

impl Letters {
    /// Validates a raw character sequence.
    ///
    /// Fails with [`InvalidInputError::Empty`] on a zero-length slice and
    /// with [`InvalidInputError::NonLetter`] on the first symbol that is not
    /// a letter. On success the sequence is carried over unchanged.
    pub fn new(chars: &[char]) -> Result<Self, InvalidInputError> {
        if chars.is_empty() {
            return Err(InvalidInputError::Empty);
        }

        if let Some(c) = chars.iter().find(|c| !c.is_alphabetic()) {
            return Err(InvalidInputError::NonLetter(*c));
        }

        Ok(Self(chars.to_vec()))
    }

    /// Validates a possibly-absent text value.
    ///
    /// Rejects the absent reference itself with [`InvalidInputError::Null`],
    /// then delegates to the sequence validator.
    pub fn from_text(text: Option<&str>) -> Result<Self, InvalidInputError> {
        let text: &str = text.ok_or(InvalidInputError::Null)?;
        let chars: Vec<char> = text.chars().collect();
        Self::new(&chars)
    }

    pub fn as_chars(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// How often each distinct letter occurs.
    ///
    /// Feeds the closed-form arrangement count; repeated letters are what
    /// make distinct arrangements fewer than `len()!`.
    pub fn multiplicities(&self) -> HashMap<char, usize> {
        let mut counts: HashMap<char, usize> = HashMap::new();
        for c in &self.0 {
            *counts.entry(*c).or_insert(0) += 1;
        }
        counts
    }
}

impl FromStr for Letters {
    type Err = InvalidInputError;

    /// Parses a command-line argument into validated letters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(Some(s))
    }
}

impl fmt::Display for Letters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
