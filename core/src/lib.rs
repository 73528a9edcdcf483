//! The anagram engine.
//!
//! [`generator`] enumerates every distinct arrangement of a validated letter
//! sequence; [`counting`] predicts how many there are without enumerating.
//! Both operate purely in memory on models from `anagrm-common` and perform
//! no I/O.

pub mod counting;
pub mod generator;
