use colored::*;

use crate::terminal::{colors, print};

pub fn info() -> anyhow::Result<()> {
    print::set_key_width(&["Name", "Version", "Purpose", "Input", "Dedup", "Example"]);

    print::aligned_line("Name", "anagrm".color(colors::PRIMARY));
    print::aligned_line("Version", env!("CARGO_PKG_VERSION"));
    print::aligned_line("Purpose", "every distinct anagram of a word, exactly once");
    print::aligned_line("Input", "letters only, any alphabet, case preserved");
    print::aligned_line("Dedup", "repeated letters never produce repeated words");
    print::aligned_line("Example", "anagrm generate abc".color(colors::ACCENT));

    Ok(())
}
