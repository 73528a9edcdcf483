use colored::*;

use crate::terminal::{colors, format, print};
use anagrm_common::{config::Config, letters::Letters, success};
use anagrm_core::counting;

pub fn count(letters: Letters, cfg: &Config) -> anyhow::Result<()> {
    let Some(arrangements) = counting::distinct_arrangements(&letters) else {
        anyhow::bail!(
            "{} letters have more distinct arrangements than fit in 128 bits",
            letters.len()
        );
    };

    if cfg.quiet == 0 {
        print::set_key_width(&["Letters", "Length", "Orderings", "Distinct"]);
        print::aligned_line("Letters", letters.to_string().color(colors::ACCENT));
        print::aligned_line("Length", letters.len().to_string());
        if let Some(total) = counting::total_orderings(letters.len()) {
            print::aligned_line("Orderings", format::group_thousands(total));
        }
        print::aligned_line(
            "Distinct",
            format::group_thousands(arrangements).color(colors::PRIMARY),
        );
        print::fat_separator();
    }

    success!(
        "{} distinct arrangements of {}",
        format::group_thousands(arrangements).bold().green(),
        letters
    );
    Ok(())
}
