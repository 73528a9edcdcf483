use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use indicatif::ProgressStyle;
use tracing::Span;
use tracing_indicatif::IndicatifLayer;
use tracing_indicatif::span_ext::IndicatifSpanExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::terminal::format;
use crate::terminal::logging::AnagrmFormatter;

const TICK_INTERVAL: Duration = Duration::from_millis(100);
const TICK_FRAMES: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Installs the tracing subscriber with the indicatif layer on top, so
/// spinners and log lines share stderr without tearing each other up.
pub fn init_logging() {
    let indicatif_layer = IndicatifLayer::new();
    let log_writer = indicatif_layer.get_stderr_writer();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(AnagrmFormatter)
                .with_writer(log_writer),
        )
        .with(indicatif_layer)
        .init();
}

/// Keeps the generation span's spinner message fresh until `running`
/// clears. The engine itself stays single-threaded; this thread only
/// repaints elapsed time.
pub fn start_generation_spinner(
    span: Span,
    running: Arc<AtomicBool>,
    orderings: Option<u128>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_strings(TICK_FRAMES);
        span.pb_set_style(&style);

        let scale: String = match orderings {
            Some(total) => format!("{} orderings", format::group_thousands(total)),
            None => "more orderings than fit in 128 bits".to_string(),
        };

        let started: Instant = Instant::now();
        while running.load(Ordering::Relaxed) {
            span.pb_set_message(&format!(
                "Walking {scale}... {:.1}s",
                started.elapsed().as_secs_f64()
            ));
            thread::sleep(TICK_INTERVAL);
        }
    })
}
