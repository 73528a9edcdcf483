use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use colored::*;
use tracing::info_span;

use crate::{
    mprint,
    terminal::{colors, format, print, spinner},
};
use anagrm_common::{config::Config, letters::Letters, success, warn};
use anagrm_core::{counting, generator};

/// Inputs at this length walk tens of millions of orderings.
const SLOW_INPUT_LEN: usize = 11;

pub fn generate(letters: Letters, cfg: &Config) -> anyhow::Result<()> {
    if letters.len() >= SLOW_INPUT_LEN {
        let scale: String = counting::total_orderings(letters.len())
            .map(format::group_thousands)
            .unwrap_or_else(|| "more than 2^128".to_string());
        warn!(
            "{} letters mean {scale} orderings to walk, this can take a while",
            letters.len()
        );
    }

    let span = info_span!("generation", indicatif.pb_show = true);
    let guard = span.enter();

    let running: Arc<AtomicBool> = Arc::new(AtomicBool::new(true));
    let spinner_handle = spinner::start_generation_spinner(
        span.clone(),
        running.clone(),
        counting::total_orderings(letters.len()),
    );

    let start_time: Instant = Instant::now();
    let mut words: Vec<String> = generator::anagrams(&letters);

    running.store(false, Ordering::Relaxed);
    let _ = spinner_handle.join();

    drop(guard);

    generation_ends(&letters, &mut words, start_time.elapsed(), cfg);
    Ok(())
}

fn generation_ends(letters: &Letters, words: &mut [String], total_time: Duration, cfg: &Config) {
    print::header("distinct anagrams", cfg.quiet);

    // Engine order is arbitrary; sort the display copy so runs compare.
    words.sort_unstable();
    print_words(words, cfg);
    print_summary(letters, words.len(), total_time, cfg);
}

fn print_words(words: &[String], cfg: &Config) {
    if cfg.quiet >= 2 {
        return;
    }

    for row in format::column_rows(words, print::TOTAL_WIDTH) {
        print::print_status(row);
    }
}

fn print_summary(letters: &Letters, count: usize, total_time: Duration, cfg: &Config) {
    let count_str: ColoredString = format!("{count} distinct anagrams").bold().green();
    let time_str: ColoredString = format::duration(total_time).bold().yellow();
    let output: ColoredString = format!(
        "Generation complete: {count_str} of {} in {time_str}",
        letters.to_string().color(colors::ACCENT)
    )
    .color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        _ => {
            mprint!();
            success!("{}", output)
        }
    }
}
